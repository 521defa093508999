// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod admin;
pub mod notices;
pub mod persistence;
pub mod settings;

pub use admin::AdminPage;
pub use notices::CollectingNotices;
pub use settings::{JsonFileSettingsStore, MemorySettingsStore};
