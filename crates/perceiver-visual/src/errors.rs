//! Error types for visual perceiver operations
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum VisualError {
    /// Frame capture for a region failed
    #[error("Frame capture failed: {0}")]
    CaptureFailed(String),

    /// A needle image could not be read or decoded
    #[error("Needle {} unreadable: {reason}", .path.display())]
    Needle { path: PathBuf, reason: String },

    /// Image processing error
    #[error("Image processing error: {0}")]
    ImageProcessing(String),

    /// Invalid input parameters
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<ocvbot_core_types::CoreError> for VisualError {
    fn from(err: ocvbot_core_types::CoreError) -> Self {
        Self::InvalidInput(err.to_string())
    }
}
