use thiserror::Error;

/// Errors raised by the collaborators around the sketch core.
///
/// The session and history never produce these: invalid drawing actions
/// degrade to no-ops. Only surface creation, configuration, stamp
/// registration, export and the browser download can fail.
#[derive(Debug, Error)]
pub enum SketchError {
    #[error("No drawing surface available: {0}")]
    SurfaceUnavailable(String),

    #[error("Stamp glyph must not be blank")]
    BlankGlyph,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to parse configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode image: {0}")]
    Export(#[from] image::ImageError),

    #[error("Browser download failed: {0}")]
    Download(String),
}

/// Result type for the fallible collaborators
pub type SketchResult<T> = Result<T, SketchError>;
