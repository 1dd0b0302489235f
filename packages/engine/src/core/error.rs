//! Error types for the snow engine
//!
//! The simulation itself never fails. These only surface while building a
//! field from settings, at the accelerometer boundary, and when the host
//! refuses to arm a timer.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SnowError {
    #[error("invalid display geometry: {0}")]
    InvalidGeometry(String),

    #[error("settings error: {0}")]
    Settings(#[from] serde_json::Error),

    #[error("accelerometer unavailable")]
    SensorUnavailable,

    #[error("could not arm tick timer: {0}")]
    Timer(String),
}

pub type SnowResult<T> = Result<T, SnowError>;
