//! Presentation layer: formatting of samples and the window lifecycle hook.

pub mod display;
pub mod lifecycle;

pub use display::{format_temp, format_usage, render_sample, temp_color, TempColor};
pub use lifecycle::{WindowEvent, WindowLifecycle, WindowState};
