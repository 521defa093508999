//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! This crate coordinates domain logic and host ports to implement the
//! operations a host calls:
//!
//! - [`load`]: Resolving the configuration from the settings store
//! - [`render`]: The content filter that inserts the statistics block
//! - [`save`]: The settings-save function with input validation
//! - [`dto`]: Data transfer objects for use case boundaries
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod dto;
pub mod load;
pub mod render;
pub mod save;

pub use dto::{SaveReport, SettingsSubmission};
pub use load::LoadConfiguration;
pub use render::RenderPostStats;
pub use save::SaveSettings;
