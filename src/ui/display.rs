//! Pure mapping from a [`Sample`] to presentation state.
//!
//! Nothing here mutates UI state; callers take the returned strings and color
//! tags and apply them however the toolkit at hand requires.

use std::fmt::Display;

use colored::{Color, Colorize};

use crate::core::sampler::Sample;

/// Color band of a temperature reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TempColor {
    /// Below the warning band
    Normal,
    /// 70 °C and above
    Warning,
    /// 80 °C and above
    Critical,
    /// The reading is not a number (sensor unavailable)
    Neutral,
}

impl TempColor {
    /// Terminal color for this band.
    pub fn color(self) -> Color {
        match self {
            TempColor::Normal => Color::BrightBlue,
            TempColor::Warning => Color::Yellow,
            TempColor::Critical => Color::Red,
            TempColor::Neutral => Color::BrightBlack,
        }
    }
}

/// Render a usage value as `"{value}%"`.
pub fn format_usage<T: Display>(value: T) -> String {
    format!("{}%", value)
}

/// Render a temperature value as `"{value}°C"`, including the `N/A` sentinel.
pub fn format_temp<T: Display>(value: T) -> String {
    format!("{}°C", value)
}

/// Classify a temperature reading into its color band.
///
/// Band lower bounds are inclusive; anything that does not parse as a number
/// is neutral.
pub fn temp_color(value: &str) -> TempColor {
    match value.parse::<f32>() {
        Ok(v) if v >= 80.0 => TempColor::Critical,
        Ok(v) if v >= 70.0 => TempColor::Warning,
        Ok(_) => TempColor::Normal,
        Err(_) => TempColor::Neutral,
    }
}

/// Render one sample as a colored status line.
///
/// CPU usage is fixed to one decimal place to match the GPU side.
pub fn render_sample(sample: &Sample) -> String {
    let cpu_temp = format_temp(&sample.cpu_temp).color(temp_color(&sample.cpu_temp).color());
    let gpu_temp = format_temp(&sample.gpu_temp).color(temp_color(&sample.gpu_temp).color());

    format!(
        "CPU {:>6} {}   GPU {:>6} {}",
        format_usage(format!("{:.1}", sample.cpu_usage)),
        cpu_temp,
        format_usage(&sample.gpu_usage),
        gpu_temp
    )
}
