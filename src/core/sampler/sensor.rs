//! Client for the local sensor-reporting HTTP endpoint.
//!
//! Tools like Open Hardware Monitor expose their readings as a JSON tree at
//! `http://localhost:8085/data.json`. The tree shape is matched strictly; any
//! mismatch degrades to the `N/A` sentinel instead of guessing alternate paths,
//! since the shape varies between sensor tool versions.

use std::time::Duration;

use serde_json::Value;

use super::sample::UNAVAILABLE;

/// Default endpoint of the sensor-reporting tool on the local machine.
pub const DEFAULT_SENSOR_URL: &str = "http://localhost:8085/data.json";

/// The endpoint is local; anything slower than this counts as unavailable.
pub const SENSOR_TIMEOUT: Duration = Duration::from_secs(1);

/// HTTP client for the sensor endpoint.
pub struct SensorClient {
    url: String,
    client: Option<reqwest::blocking::Client>,
}

impl SensorClient {
    pub fn new() -> Self {
        Self::with_url(DEFAULT_SENSOR_URL)
    }

    /// Create a client against a custom endpoint (used by the tests).
    pub fn with_url<S: Into<String>>(url: S) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(SENSOR_TIMEOUT)
            .build()
            .ok();

        Self {
            url: url.into(),
            client,
        }
    }

    /// Fetch the current CPU temperature from the sensor endpoint.
    ///
    /// Returns the numeric value as a string, or `"N/A"` on any failure:
    /// network error, timeout, malformed JSON, or missing tree path. Transient
    /// unavailability is expected here and the next tick retries naturally, so
    /// failures are only logged at debug level.
    pub fn cpu_temperature(&self) -> String {
        match self.try_cpu_temperature() {
            Some(temp) => temp,
            None => {
                log::debug!("sensor endpoint {} unavailable or unrecognized", self.url);
                UNAVAILABLE.to_string()
            }
        }
    }

    fn try_cpu_temperature(&self) -> Option<String> {
        let data: Value = self
            .client
            .as_ref()?
            .get(&self.url)
            .send()
            .ok()?
            .json()
            .ok()?;

        parse_cpu_temperature(&data)
    }
}

impl Default for SensorClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract the CPU temperature from a sensor-report JSON tree.
///
/// Walks `Children[0].Children` for the hardware node whose `Text` starts with
/// `"CPU"`, then that node's `Children[0].Children` for the sensor whose `Text`
/// starts with `"Temperature"`, and returns its numeric `Value` as a string.
pub fn parse_cpu_temperature(data: &Value) -> Option<String> {
    let hardware = data.get("Children")?.get(0)?.get("Children")?.as_array()?;

    let cpu = hardware.iter().find(|node| {
        node.get("Text")
            .and_then(Value::as_str)
            .is_some_and(|text| text.starts_with("CPU"))
    })?;

    let sensors = cpu.get("Children")?.get(0)?.get("Children")?.as_array()?;

    let temperature = sensors.iter().find(|node| {
        node.get("Text")
            .and_then(Value::as_str)
            .is_some_and(|text| text.starts_with("Temperature"))
    })?;

    match temperature.get("Value")? {
        Value::Number(value) => Some(value.to_string()),
        _ => None,
    }
}
