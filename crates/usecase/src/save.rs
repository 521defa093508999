use post_stats_domain::{
    config::{SettingKey, SettingValue},
    validation::{parse_checkbox, sanitize_headline, validate_location},
};
use post_stats_ports::{notices::NoticeSink, settings::SettingsStore};
use post_stats_shared_kernel::{ApplicationError, Result};

use crate::{
    dto::{SaveReport, SettingsSubmission},
    load::LoadConfiguration,
};

/// The settings-save function behind the admin form.
pub struct SaveSettings<'a> {
    store: &'a dyn SettingsStore,
    notices: &'a dyn NoticeSink,
}

impl<'a> SaveSettings<'a> {
    pub fn new(store: &'a dyn SettingsStore, notices: &'a dyn NoticeSink) -> Self {
        Self { store, notices }
    }

    /// Validates and persists one form submission.
    ///
    /// An invalid location is reported through the notice sink and the stored
    /// location is kept; the remaining fields are still saved. Absent text
    /// fields keep their stored value, absent checkboxes are saved as off.
    ///
    /// # Errors
    ///
    /// Returns an error only when the store cannot be written or re-read.
    pub fn submit(&self, submission: &SettingsSubmission) -> Result<SaveReport> {
        for name in submission.unknown_fields() {
            log::debug!("ignoring unknown settings field '{name}'");
        }

        let mut writes: Vec<(SettingKey, SettingValue)> = Vec::with_capacity(SettingKey::ALL.len());
        let mut notices = Vec::new();

        for key in SettingKey::ALL {
            let raw = submission.field(key);
            match key {
                SettingKey::Location => {
                    let Some(candidate) = raw else { continue };
                    match validate_location(candidate) {
                        Ok(location) => writes.push((key, location.as_str().into())),
                        Err(notice) => {
                            log::warn!("rejected location '{candidate}'; keeping stored value");
                            self.notices.add(notice.clone());
                            notices.push(notice);
                        }
                    }
                }
                SettingKey::Headline => {
                    let Some(text) = raw else { continue };
                    writes.push((key, sanitize_headline(text).as_str().into()));
                }
                SettingKey::ShowWordCount | SettingKey::ShowCharCount | SettingKey::ShowReadTime => {
                    writes.push((key, parse_checkbox(raw).into()));
                }
            }
        }

        let saved: Vec<SettingKey> = writes.iter().map(|(key, _)| *key).collect();
        self.store.set_many(writes).map_err(|err| ApplicationError::SettingsSaveFailed {
            key: saved.iter().map(|key| key.as_str()).collect::<Vec<_>>().join(","),
            reason: "settings store rejected the write".to_string(),
            source: Some(Box::new(err)),
        })?;
        log::debug!("saved {} settings with {} notice(s)", saved.len(), notices.len());

        let configuration = LoadConfiguration::new(self.store).run()?;
        Ok(SaveReport { saved, notices, configuration })
    }
}
