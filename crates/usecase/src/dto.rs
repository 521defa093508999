use std::collections::BTreeMap;

use post_stats_domain::{
    config::{Configuration, SettingKey},
    model::Notice,
};
use serde::{Deserialize, Serialize};

/// Raw settings-form post: field name to submitted string.
///
/// Unchecked checkboxes are absent, exactly as a browser submits them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SettingsSubmission {
    fields: BTreeMap<String, String>,
}

impl SettingsSubmission {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(name.into(), value.into());
    }

    pub fn field(&self, key: SettingKey) -> Option<&str> {
        self.fields.get(key.as_str()).map(String::as_str)
    }

    /// Submitted names that do not belong to any setting.
    pub fn unknown_fields(&self) -> impl Iterator<Item = &str> {
        self.fields
            .keys()
            .map(String::as_str)
            .filter(|name| name.parse::<SettingKey>().is_err())
    }
}

impl<K, V> FromIterator<(K, V)> for SettingsSubmission
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut submission = Self::new();
        for (name, value) in iter {
            submission.insert(name, value);
        }
        submission
    }
}

/// Outcome of one settings save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveReport {
    /// Keys written to the store.
    pub saved: Vec<SettingKey>,
    /// Rejected fields; their stored values were left as they were.
    pub notices: Vec<Notice>,
    /// Configuration in effect after the save.
    pub configuration: Configuration,
}

impl SaveReport {
    pub fn is_clean(&self) -> bool {
        self.notices.is_empty()
    }
}
