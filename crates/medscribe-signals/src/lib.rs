//! Collaborator-side adapters for the medscribe synthesis engine.
//!
//! This crate turns raw model output into the signal types consumed by
//! `medscribe-core`, describes which models and device back each
//! collaborator, and ships deterministic reference collaborators.

pub mod config;
pub mod extraction;
pub mod reference;

pub use config::*;
pub use extraction::*;
pub use reference::*;
