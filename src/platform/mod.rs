//! Platform-specific integrations.

pub mod gpu;
