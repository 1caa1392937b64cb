use std::io;
use thiserror::Error;

/// Custom error type for the sysglance application
#[derive(Error, Debug)]
pub enum GlanceError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Sampler error: {0}")]
    Sampler(String),

    #[error("GPU not available: {0}")]
    GpuNotAvailable(String),

    #[error("Metric collection failed: {0}")]
    MetricCollection(String),
}

/// Result type alias for the sysglance application
pub type Result<T> = std::result::Result<T, GlanceError>;

impl GlanceError {
    /// Create a sampler lifecycle error
    pub fn sampler<S: Into<String>>(msg: S) -> Self {
        GlanceError::Sampler(msg.into())
    }

    pub fn gpu_not_available<S: Into<String>>(msg: S) -> Self {
        GlanceError::GpuNotAvailable(msg.into())
    }

    pub fn metric_collection<S: Into<String>>(msg: S) -> Self {
        GlanceError::MetricCollection(msg.into())
    }
}
