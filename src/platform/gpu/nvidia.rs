#[cfg(feature = "nvml")]
use nvml_wrapper::{enum_wrappers::device::TemperatureSensor, Device, Nvml};

use crate::core::sampler::{GpuProvider, GpuReading, GpuVendor};
use crate::error::{GlanceError, Result};

/// NVIDIA GPU provider using NVML
pub struct NvidiaGpuProvider {
    #[cfg(feature = "nvml")]
    nvml: Nvml,
    device_index: u32,
}

impl NvidiaGpuProvider {
    /// Create a new NVIDIA GPU provider
    ///
    /// Initializes NVML and selects the first available GPU.
    pub fn new() -> Result<Self> {
        Self::with_device_index(0)
    }

    /// Create provider for a specific GPU index
    pub fn with_device_index(index: u32) -> Result<Self> {
        #[cfg(feature = "nvml")]
        {
            let nvml = Nvml::init().map_err(|e| {
                GlanceError::gpu_not_available(format!("Failed to init NVML: {}", e))
            })?;

            // Verify device exists
            let _ = nvml.device_by_index(index).map_err(|e| {
                GlanceError::gpu_not_available(format!("GPU {} not found: {}", index, e))
            })?;

            Ok(Self {
                nvml,
                device_index: index,
            })
        }
        #[cfg(not(feature = "nvml"))]
        {
            let _ = index;
            Err(GlanceError::gpu_not_available(
                "NVIDIA GPU support not enabled",
            ))
        }
    }

    #[cfg(feature = "nvml")]
    fn get_device(&self) -> Result<Device<'_>> {
        self.nvml.device_by_index(self.device_index).map_err(|e| {
            GlanceError::metric_collection(format!("Failed to get GPU device: {}", e))
        })
    }
}

impl GpuProvider for NvidiaGpuProvider {
    fn vendor(&self) -> GpuVendor {
        GpuVendor::Nvidia
    }

    fn is_available(&self) -> bool {
        #[cfg(feature = "nvml")]
        {
            self.get_device().is_ok()
        }
        #[cfg(not(feature = "nvml"))]
        {
            false
        }
    }

    fn read(&mut self) -> Result<GpuReading> {
        #[cfg(feature = "nvml")]
        {
            let device = self.get_device()?;

            let utilization = device.utilization_rates().map_err(|e| {
                GlanceError::metric_collection(format!("Failed to get GPU utilization: {}", e))
            })?;

            let temperature = device.temperature(TemperatureSensor::Gpu).map_err(|e| {
                GlanceError::metric_collection(format!("Failed to get GPU temperature: {}", e))
            })?;

            Ok(GpuReading {
                load: utilization.gpu as f32 / 100.0,
                temperature_celsius: temperature as f32,
            })
        }
        #[cfg(not(feature = "nvml"))]
        {
            Err(GlanceError::gpu_not_available(
                "NVIDIA GPU support not enabled",
            ))
        }
    }
}
