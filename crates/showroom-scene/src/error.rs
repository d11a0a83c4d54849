//! Error types for the showroom.

use showroom_tween::TweenError;
use thiserror::Error;

/// Result type for showroom operations.
pub type Result<T> = std::result::Result<T, ShowroomError>;

/// Errors that can occur while driving the showroom.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShowroomError {
    /// A paint color was not a `#rrggbb` / `#rgb` hex string.
    #[error("invalid paint color `{0}`")]
    InvalidColor(String),

    /// A car name did not match any showroom car.
    #[error("unknown car `{0}`")]
    UnknownCar(String),

    /// A showcase animation could not be scheduled.
    #[error("showcase animation rejected: {0}")]
    Tween(#[from] TweenError),
}
