use serde::{Deserialize, Serialize};

/// Sentinel rendered for any metric that could not be collected this cycle.
pub const UNAVAILABLE: &str = "N/A";

/// One reading of the monitored metrics.
///
/// Produced once per sampling cycle and consumed exactly once by the display
/// layer; only the latest value is ever relevant, there is no history.
/// Temperature and GPU fields degrade to [`UNAVAILABLE`] when their source is
/// unreachable, which is a normal steady-state condition rather than an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub timestamp: i64, // Unix timestamp
    /// Global CPU utilization, 0.0 - 100.0
    pub cpu_usage: f32,
    /// CPU package temperature in Celsius, or [`UNAVAILABLE`]
    pub cpu_temp: String,
    /// GPU utilization percentage with one decimal place, or [`UNAVAILABLE`]
    pub gpu_usage: String,
    /// GPU temperature in Celsius, or [`UNAVAILABLE`]
    pub gpu_temp: String,
}

impl Default for Sample {
    fn default() -> Self {
        Self {
            timestamp: 0,
            cpu_usage: 0.0,
            cpu_temp: UNAVAILABLE.to_string(),
            gpu_usage: UNAVAILABLE.to_string(),
            gpu_temp: UNAVAILABLE.to_string(),
        }
    }
}
