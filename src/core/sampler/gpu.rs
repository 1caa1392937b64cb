use crate::error::Result;

/// Trait for GPU metrics providers
///
/// This trait abstracts GPU monitoring across vendors. Implementations are
/// provided in the platform layer; absence of any device is a valid state
/// handled by the collector, not an error surfaced to the user.
pub trait GpuProvider: Send {
    /// Get the vendor of the GPU
    fn vendor(&self) -> GpuVendor;

    /// Read the current load and temperature of the device
    fn read(&mut self) -> Result<GpuReading>;

    /// Check if the GPU provider is available and functional
    fn is_available(&self) -> bool;
}

/// A single GPU load/temperature reading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GpuReading {
    /// Device load as a fraction, 0.0 - 1.0
    pub load: f32,
    /// Device temperature in Celsius
    pub temperature_celsius: f32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum GpuVendor {
    Nvidia,
    #[default]
    Unknown,
}
