use sysinfo::{CpuRefreshKind, RefreshKind, System};

use crate::platform::gpu::get_gpu_provider;

use super::gpu::GpuProvider;
use super::sample::{Sample, UNAVAILABLE};
use super::sensor::SensorClient;

/// Source of samples for the background worker.
///
/// [`SampleCollector`] is the production implementation; the worker tests drive
/// a stub instead of touching real hardware.
pub trait SampleSource: Send {
    fn sample(&mut self) -> Sample;
}

/// Collects the monitored metrics from their respective sources.
pub struct SampleCollector {
    system: System,
    sensor: SensorClient,
    gpu: Option<Box<dyn GpuProvider>>,
}

impl SampleCollector {
    /// Create a new collector.
    ///
    /// The construction refresh primes sysinfo's CPU usage baseline so the
    /// first real reading is accurate. GPU probing fails gracefully; a machine
    /// without a supported GPU simply reports `N/A` for both GPU fields.
    pub fn new() -> Self {
        Self::with_sensor(SensorClient::new())
    }

    pub fn with_sensor(sensor: SensorClient) -> Self {
        let refresh_kind =
            RefreshKind::nothing().with_cpu(CpuRefreshKind::nothing().with_cpu_usage());
        let mut system = System::new_with_specifics(refresh_kind);

        // Priming call, establishes the usage baseline
        system.refresh_cpu_usage();

        let gpu = match get_gpu_provider() {
            Ok(provider) => Some(provider),
            Err(e) => {
                log::info!("no GPU provider available: {}", e);
                None
            }
        };

        Self {
            system,
            sensor,
            gpu,
        }
    }

    /// Instantaneous global CPU utilization, 0.0 - 100.0.
    pub fn collect_cpu_usage(&mut self) -> f32 {
        self.system.refresh_cpu_usage();
        self.system.global_cpu_usage()
    }

    /// CPU temperature from the local sensor endpoint, or `"N/A"`.
    pub fn collect_cpu_temperature(&self) -> String {
        self.sensor.cpu_temperature()
    }

    /// Load and temperature of the first available GPU device.
    ///
    /// Load is rendered as a percentage with one decimal place. Both fields
    /// degrade to `"N/A"` when no device is present or the read fails; either
    /// way the sampling loop keeps running.
    pub fn collect_gpu_info(&mut self) -> (String, String) {
        let Some(gpu) = self.gpu.as_mut() else {
            return (UNAVAILABLE.to_string(), UNAVAILABLE.to_string());
        };

        match gpu.read() {
            Ok(reading) => (
                format!("{:.1}", reading.load * 100.0),
                format!("{}", reading.temperature_celsius),
            ),
            Err(e) => {
                log::debug!("GPU read failed: {}", e);
                (UNAVAILABLE.to_string(), UNAVAILABLE.to_string())
            }
        }
    }
}

impl SampleSource for SampleCollector {
    fn sample(&mut self) -> Sample {
        let cpu_usage = self.collect_cpu_usage();
        let cpu_temp = self.collect_cpu_temperature();
        let (gpu_usage, gpu_temp) = self.collect_gpu_info();

        Sample {
            timestamp: chrono::Utc::now().timestamp(),
            cpu_usage,
            cpu_temp,
            gpu_usage,
            gpu_temp,
        }
    }
}

impl Default for SampleCollector {
    fn default() -> Self {
        Self::new()
    }
}
