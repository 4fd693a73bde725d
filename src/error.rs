use thiserror::Error;

/// Errors raised while configuring or exporting a scene.
///
/// Parametrizations themselves are total and never produce one of these.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("invalid parameter range [{start}, {end}]")]
    InvalidRange { start: f32, end: f32 },

    #[error("{what} resolution must be at least 1")]
    ZeroResolution { what: &'static str },

    #[error("unknown export format: {0}")]
    UnknownFormat(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
