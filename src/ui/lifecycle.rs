//! Window-state driven pause/resume of the sampler.
//!
//! The overlay toolkit is out of scope for this crate; whatever toolkit hosts
//! the widget registers a state-change callback that forwards its minimize and
//! restore notifications here as [`WindowEvent`]s.

use crate::core::sampler::MetricsSampler;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowState {
    Active,
    Minimized,
}

/// Window notification forwarded by the hosting toolkit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowEvent {
    Minimized,
    Restored,
}

/// Tracks the window state and drives the sampler lifecycle from it.
///
/// Active → Minimized pauses the sampler; Minimized → Active resumes it.
/// Repeated notifications for the current state are ignored.
pub struct WindowLifecycle {
    state: WindowState,
}

impl WindowLifecycle {
    pub fn new() -> Self {
        Self {
            state: WindowState::Active,
        }
    }

    pub fn state(&self) -> WindowState {
        self.state
    }

    pub fn handle(&mut self, event: WindowEvent, sampler: &MetricsSampler) {
        match (self.state, event) {
            (WindowState::Active, WindowEvent::Minimized) => {
                self.state = WindowState::Minimized;
                sampler.pause();
            }
            (WindowState::Minimized, WindowEvent::Restored) => {
                self.state = WindowState::Active;
                sampler.resume();
            }
            // Already in the notified state
            _ => {}
        }
    }
}

impl Default for WindowLifecycle {
    fn default() -> Self {
        Self::new()
    }
}
