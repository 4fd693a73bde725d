use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::Parser;

use cup_scene::backends::{Exporter, Recorder};
use cup_scene::cli::{Cli, Command};
use cup_scene::io::{write_document, ExportFormat};
use cup_scene::{cup_handle, cup_profile, CupScene, Scene, SceneConfig};

fn load_config(cli: &Cli) -> Result<SceneConfig> {
    match &cli.config {
        Some(path) => SceneConfig::load(path),
        None => Ok(SceneConfig::default()),
    }
}

fn open_output(path: &Path) -> Result<Box<dyn Write>> {
    if path == Path::new("-") {
        return Ok(Box::new(io::stdout().lock()));
    }
    let file = File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    Ok(Box::new(BufWriter::new(file)))
}

fn describe(config: SceneConfig, pretty: bool) -> Result<()> {
    let scene = CupScene::new(config);
    let mut recorder = Recorder::new();
    scene.construct(&mut recorder)?;

    log::info!(
        "{}: {} events, {:.1}s scheduled",
        scene.name(),
        recorder.events().len(),
        recorder.total_runtime()
    );

    let mut out = io::stdout().lock();
    if pretty {
        serde_json::to_writer_pretty(&mut out, recorder.events())?;
    } else {
        serde_json::to_writer(&mut out, recorder.events())?;
    }
    writeln!(out)?;
    Ok(())
}

fn export(config: SceneConfig, output: &Path, format: ExportFormat, quiet: bool) -> Result<()> {
    let scene = CupScene::new(config);
    let mut exporter = Exporter::new();
    scene.construct(&mut exporter)?;

    let elapsed = exporter.elapsed();
    let doc = exporter.into_document(scene.name());

    let mut out = open_output(output)?;
    write_document(&doc, format, &mut out)
        .with_context(|| format!("failed to write {}", output.display()))?;
    out.flush()?;

    log::info!("Exported {} objects as {format}", doc.objects.len());
    if !quiet && output != Path::new("-") {
        println!(
            "{}: {} objects, {:.1}s of animation -> {}",
            doc.scene,
            doc.objects.len(),
            elapsed,
            output.display()
        );
    }
    Ok(())
}

fn sample(u: Option<f32>, v: Option<f32>, t: Option<f32>) -> Result<()> {
    let point = match (u, v, t) {
        (Some(u), Some(v), None) => cup_profile(u, v),
        (None, None, Some(t)) => cup_handle(t),
        _ => bail!("pass either --u and --v for the cup body, or --t for the handle"),
    };
    println!("{:.6} {:.6} {:.6}", point.x, point.y, point.z);
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let mut config = load_config(&cli)?;

    match cli.command {
        Command::Describe { pretty } => describe(config, pretty),
        Command::Export {
            ref output,
            format,
            resolution,
            curve_samples,
        } => {
            if let Some(resolution) = resolution {
                config.surface_resolution = resolution;
            }
            if let Some(curve_samples) = curve_samples {
                config.curve_samples = curve_samples;
            }
            config.validate()?;

            let format = format
                .or_else(|| ExportFormat::from_path(output))
                .unwrap_or(ExportFormat::Obj);
            export(config, output, format, cli.quiet)
        }
        Command::Sample { u, v, t } => sample(u, v, t),
    }
}
