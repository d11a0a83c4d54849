//! Error types for the tween engine.

use thiserror::Error;

/// Result type for tween operations.
pub type Result<T> = std::result::Result<T, TweenError>;

/// Errors surfaced by the tween engine.
///
/// Only submission can fail. Anomalies inside a frame (unknown keys, array
/// length mismatches) are absorbed by the frame itself.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TweenError {
    /// The request cannot be scheduled as given.
    #[error("invalid tween configuration: {0}")]
    Configuration(String),
}
