// Sysglance Library - Public API

// Re-export error types
pub mod error;
pub use error::{GlanceError, Result};

// Module declarations
pub mod core;
pub mod platform;
pub mod ui;

// Re-export commonly used types
pub use crate::core::sampler::{MetricsSampler, Sample, SampleCollector, SampleSource};

// Initialize logging
pub fn init_logging() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();
}
