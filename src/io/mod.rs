mod obj;

pub use obj::write_obj;

use std::fmt;
use std::io::Write;
use std::path::Path;
use std::str::FromStr;

use crate::backends::ExportDocument;
use crate::error::SceneError;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Obj,
    Json,
}

impl ExportFormat {
    /// Guess from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()?.to_str()?.parse().ok()
    }
}

impl FromStr for ExportFormat {
    type Err = SceneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "obj" => Ok(ExportFormat::Obj),
            "json" => Ok(ExportFormat::Json),
            other => Err(SceneError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Obj => write!(f, "obj"),
            ExportFormat::Json => write!(f, "json"),
        }
    }
}

pub fn write_json<W: Write>(doc: &ExportDocument, out: &mut W, pretty: bool) -> Result<(), SceneError> {
    if pretty {
        serde_json::to_writer_pretty(&mut *out, doc)?;
    } else {
        serde_json::to_writer(&mut *out, doc)?;
    }
    writeln!(out)?;
    Ok(())
}

pub fn write_document<W: Write>(
    doc: &ExportDocument,
    format: ExportFormat,
    out: &mut W,
) -> Result<(), SceneError> {
    match format {
        ExportFormat::Obj => write_obj(doc, out),
        ExportFormat::Json => write_json(doc, out, true),
    }
}
