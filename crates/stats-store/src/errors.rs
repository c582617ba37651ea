use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StatsError {
    #[error("stats record not found at {}", .0.display())]
    NotFound(PathBuf),
    #[error("stats record already exists at {}", .0.display())]
    AlreadyExists(PathBuf),
    #[error("io failure on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("stats record corrupt: {0}")]
    Corrupt(String),
    #[error("unsupported stats record version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },
}

impl StatsError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn is_corrupt(&self) -> bool {
        matches!(
            self,
            StatsError::Corrupt(_) | StatsError::UnsupportedVersion { .. }
        )
    }
}
