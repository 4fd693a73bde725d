mod export;
mod recorder;

pub use export::{ExportDocument, ExportedObject, Exporter, Geometry};
pub use recorder::{Recorder, SceneEvent};
