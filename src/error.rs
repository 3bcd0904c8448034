use std::io;
use thiserror::Error;

/// Custom error type for the dashboard
#[derive(Error, Debug)]
pub enum DashError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Terminal error: {0}")]
    Terminal(String),

    #[error("Metric collection failed: {0}")]
    MetricCollection(String),

    #[error("Sensor unavailable: {0}")]
    SensorUnavailable(String),

    #[error("Input error: {0}")]
    Input(String),
}

/// Result type alias for the dashboard
pub type Result<T> = std::result::Result<T, DashError>;

impl DashError {
    /// Create a terminal error
    pub fn terminal<S: Into<String>>(msg: S) -> Self {
        DashError::Terminal(msg.into())
    }

    pub fn metric_collection<S: Into<String>>(msg: S) -> Self {
        DashError::MetricCollection(msg.into())
    }

    pub fn sensor_unavailable<S: Into<String>>(msg: S) -> Self {
        DashError::SensorUnavailable(msg.into())
    }

    pub fn input<S: Into<String>>(msg: S) -> Self {
        DashError::Input(msg.into())
    }
}
