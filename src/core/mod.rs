//! Core business logic for the overlay.

pub mod sampler;
