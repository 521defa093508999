use std::{collections::BTreeMap, sync::Mutex};

use post_stats_domain::config::{SettingKey, SettingValue};
use post_stats_ports::settings::SettingsStore;
use post_stats_shared_kernel::Result;

/// Process-local settings, for embedding hosts and tests.
#[derive(Debug, Default)]
pub struct MemorySettingsStore {
    values: Mutex<BTreeMap<SettingKey, SettingValue>>,
}

impl MemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every stored (non-default) value.
    pub fn snapshot(&self) -> BTreeMap<SettingKey, SettingValue> {
        self.values.lock().unwrap_or_else(std::sync::PoisonError::into_inner).clone()
    }
}

impl SettingsStore for MemorySettingsStore {
    fn get(&self, key: SettingKey) -> Result<Option<SettingValue>> {
        let values = self.values.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        Ok(values.get(&key).cloned())
    }

    fn set(&self, key: SettingKey, value: SettingValue) -> Result<()> {
        self.values.lock().unwrap_or_else(std::sync::PoisonError::into_inner).insert(key, value);
        Ok(())
    }
}
