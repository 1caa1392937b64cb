//! Periodic metrics sampling.
//!
//! This module provides the background worker that samples CPU/GPU usage and
//! temperature on a fixed cadence and publishes each reading to the UI thread,
//! plus the collectors it draws the readings from.

mod collector;
mod gpu;
mod sample;
pub mod sensor;
mod worker;

pub use collector::{SampleCollector, SampleSource};
pub use gpu::{GpuProvider, GpuReading, GpuVendor};
pub use sample::{Sample, UNAVAILABLE};
pub use worker::{MetricsSampler, DEFAULT_INTERVAL};
