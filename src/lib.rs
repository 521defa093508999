// src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod args;
pub mod logging;
pub mod presentation;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use post_stats_domain as domain;
pub use post_stats_infra as infra;
pub use post_stats_ports as ports;
pub use post_stats_usecase as usecase;
pub use post_stats_shared_kernel as shared;
