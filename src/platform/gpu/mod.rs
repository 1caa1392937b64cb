//! GPU-specific platform code.
//!
//! Provides GPU load/temperature readings for different vendors.
//! Currently supports NVIDIA (via NVML).

mod nvidia;

pub use nvidia::NvidiaGpuProvider;

use crate::core::sampler::GpuProvider;
use crate::error::{GlanceError, Result};

/// Attempt to get an available GPU provider
///
/// Tries each supported vendor in order of preference, verifies the device
/// answers, and returns an error if no GPU is available. A GPU-less machine is
/// a valid configuration; callers degrade to `N/A` readings rather than
/// treating this as fatal.
pub fn get_gpu_provider() -> Result<Box<dyn GpuProvider>> {
    if let Ok(provider) = NvidiaGpuProvider::new() {
        if provider.is_available() {
            log::info!("using {:?} GPU provider", provider.vendor());
            return Ok(Box::new(provider));
        }
    }

    Err(GlanceError::gpu_not_available("No supported GPU found"))
}
