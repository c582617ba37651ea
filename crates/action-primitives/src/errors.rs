//! Error types for action primitives

use thiserror::Error;

/// Failures reported by an input driver
#[derive(Debug, Error, Clone)]
pub enum ActionError {
    /// Pointer or keyboard synthesis failed
    #[error("Input synthesis failed: {0}")]
    InputFailed(String),

    /// The logout sequence could not be completed
    #[error("Logout failed: {0}")]
    LogoutFailed(String),
}
