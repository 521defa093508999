//! # Ports
//!
//! Interface definitions for the host environment.
//!
//! This crate defines traits that abstract what the host CMS provides:
//!
//! - [`settings`]: Key/value settings storage with declared defaults
//! - [`notices`]: Administrator-visible messages raised while saving settings
//! - [`request`]: Classification of the page currently being rendered
//!
//! These ports allow the domain and application layers to remain
//! independent of any specific host.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod notices;
pub mod request;
pub mod settings;
