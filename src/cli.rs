// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::io::ExportFormat;

#[derive(Parser, Debug, Clone)]
#[command(name = "cup-scene")]
#[command(about = "3D cup scene: parametrized shapes and camera animation", long_about = None)]
pub struct Cli {
    /// JSON scene config; flags below override its values
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable console summaries
    #[arg(long, global = true, default_value = "false")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print every call the scene makes, as JSON
    Describe {
        #[arg(long)]
        pretty: bool,
    },
    /// Sample the scene and write its end-state geometry
    Export {
        /// Output file, or `-` for stdout
        #[arg(short, long)]
        output: PathBuf,

        /// Defaults to the output extension, then obj
        #[arg(short, long)]
        format: Option<ExportFormat>,

        /// Quads along each surface parameter
        #[arg(long)]
        resolution: Option<u32>,

        /// Segments along the handle
        #[arg(long)]
        curve_samples: Option<u32>,
    },
    /// Evaluate a single point of the cup body (`--u --v`) or handle (`--t`)
    Sample {
        #[arg(long, allow_hyphen_values = true)]
        u: Option<f32>,

        #[arg(long, allow_hyphen_values = true)]
        v: Option<f32>,

        #[arg(long, allow_hyphen_values = true)]
        t: Option<f32>,
    },
}
