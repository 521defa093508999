use post_stats_domain::config::{Configuration, SettingKey};
use post_stats_ports::settings::SettingsStore;
use post_stats_shared_kernel::{ErrorContext, Result};

/// Resolves the effective [`Configuration`] from the settings store.
pub struct LoadConfiguration<'a> {
    store: &'a dyn SettingsStore,
}

impl<'a> LoadConfiguration<'a> {
    pub fn new(store: &'a dyn SettingsStore) -> Self {
        Self { store }
    }

    /// Unset keys take their defaults. A stored value of the wrong shape is
    /// logged and replaced by the default rather than failing the load.
    ///
    /// # Errors
    ///
    /// Returns an error when the store itself cannot be read.
    pub fn run(&self) -> Result<Configuration> {
        let mut config = Configuration::default();
        for key in SettingKey::ALL {
            let Some(value) = self.store.get(key).with_context(|| format!("reading setting '{key}'"))? else {
                continue;
            };
            if let Err(err) = config.apply(key, &value) {
                log::warn!("ignoring stored value for '{key}': {err}");
            }
        }
        Ok(config)
    }
}
