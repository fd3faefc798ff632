use crate::config::ConfigError;
use std::path::PathBuf;

/// Result type for render operations
pub type RenderResult<T> = Result<T, RenderError>;

/// Error types for a render run; every variant is fatal
#[derive(Debug)]
pub enum RenderError {
    InvalidConfig(ConfigError),
    CreateOutputDir {
        path: PathBuf,
        source: std::io::Error,
    },
    SaveImage {
        path: PathBuf,
        source: image::ImageError,
    },
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::InvalidConfig(e) => write!(f, "{}", e),
            RenderError::CreateOutputDir { path, source } => {
                write!(f, "Failed to create output directory {:?}: {}", path, source)
            }
            RenderError::SaveImage { path, source } => {
                write!(f, "Failed to save image {:?}: {}", path, source)
            }
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::InvalidConfig(e) => Some(e),
            RenderError::CreateOutputDir { source, .. } => Some(source),
            RenderError::SaveImage { source, .. } => Some(source),
        }
    }
}
