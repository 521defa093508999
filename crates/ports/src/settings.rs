// crates/ports/src/settings.rs
use post_stats_domain::config::{SettingKey, SettingValue};
use post_stats_shared_kernel::{DomainError, Result};

/// Port for the host's key/value settings storage.
///
/// Implementations only persist raw values; defaults are declared by
/// [`SettingKey::default_value`] and applied by the typed helpers.
pub trait SettingsStore: Send + Sync {
    /// Raw stored value, `None` when the key was never saved.
    fn get(&self, key: SettingKey) -> Result<Option<SettingValue>>;

    fn set(&self, key: SettingKey, value: SettingValue) -> Result<()>;

    /// Writes several values as one save. Stores that can batch should override this.
    fn set_many(&self, values: Vec<(SettingKey, SettingValue)>) -> Result<()> {
        for (key, value) in values {
            self.set(key, value)?;
        }
        Ok(())
    }

    /// Stored value or the key's declared default.
    fn get_or_default(&self, key: SettingKey) -> Result<SettingValue> {
        Ok(self.get(key)?.unwrap_or_else(|| key.default_value()))
    }

    fn get_text(&self, key: SettingKey) -> Result<String> {
        match self.get_or_default(key)? {
            SettingValue::Text(text) => Ok(text),
            SettingValue::Flag(_) => {
                Err(DomainError::SettingTypeMismatch { key: key.to_string(), expected: "text" }.into())
            }
        }
    }

    fn get_flag(&self, key: SettingKey) -> Result<bool> {
        match self.get_or_default(key)? {
            SettingValue::Flag(flag) => Ok(flag),
            SettingValue::Text(_) => {
                Err(DomainError::SettingTypeMismatch { key: key.to_string(), expected: "boolean" }.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{collections::HashMap, sync::Mutex};

    use post_stats_shared_kernel::PostStatsError;

    use super::*;

    #[derive(Default)]
    struct MapStore {
        values: Mutex<HashMap<SettingKey, SettingValue>>,
    }

    impl SettingsStore for MapStore {
        fn get(&self, key: SettingKey) -> Result<Option<SettingValue>> {
            Ok(self.values.lock().unwrap().get(&key).cloned())
        }

        fn set(&self, key: SettingKey, value: SettingValue) -> Result<()> {
            self.values.lock().unwrap().insert(key, value);
            Ok(())
        }
    }

    #[test]
    fn typed_getters_fall_back_to_declared_defaults() {
        let store = MapStore::default();
        assert_eq!(store.get_text(SettingKey::Headline).unwrap(), "Post Statistics");
        assert_eq!(store.get_text(SettingKey::Location).unwrap(), "begin");
        assert!(store.get_flag(SettingKey::ShowReadTime).unwrap());
    }

    #[test]
    fn set_many_writes_every_value() {
        let store = MapStore::default();
        store
            .set_many(vec![
                (SettingKey::Location, "end".into()),
                (SettingKey::ShowWordCount, false.into()),
            ])
            .unwrap();
        assert_eq!(store.get_text(SettingKey::Location).unwrap(), "end");
        assert!(!store.get_flag(SettingKey::ShowWordCount).unwrap());
    }

    #[test]
    fn typed_getters_report_shape_mismatch() {
        let store = MapStore::default();
        store.set(SettingKey::ShowCharCount, "1".into()).unwrap();
        let err = store.get_flag(SettingKey::ShowCharCount).expect_err("text stored for a flag");
        assert!(matches!(err, PostStatsError::Domain(DomainError::SettingTypeMismatch { .. })));
    }
}
