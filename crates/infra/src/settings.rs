//! [`SettingsStore`](post_stats_ports::settings::SettingsStore) adapters.

pub mod json_file;
pub mod memory;

pub use json_file::JsonFileSettingsStore;
pub use memory::MemorySettingsStore;
