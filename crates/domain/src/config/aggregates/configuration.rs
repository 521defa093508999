use post_stats_shared_kernel::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};

use crate::config::{Headline, Location, SettingKey, SettingValue};

/// Resolved plugin options, loaded fresh for every render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Configuration {
    pub location: Location,
    pub headline: Headline,
    pub show_word_count: bool,
    pub show_char_count: bool,
    pub show_read_time: bool,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            location: Location::default(),
            headline: Headline::default(),
            show_word_count: true,
            show_char_count: true,
            show_read_time: true,
        }
    }
}

impl Configuration {
    /// `true` when at least one statistics line would be rendered.
    pub const fn any_stat_enabled(&self) -> bool {
        self.show_word_count || self.show_char_count || self.show_read_time
    }

    /// Word counting feeds both the word line and the read-time line.
    pub const fn needs_word_count(&self) -> bool {
        self.show_word_count || self.show_read_time
    }

    /// Overwrites the field behind `key`, leaving `self` untouched on error.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::SettingTypeMismatch`] when `value` has the wrong
    /// shape for `key`, or [`DomainError::InvalidLocation`] for an unknown location.
    pub fn apply(&mut self, key: SettingKey, value: &SettingValue) -> DomainResult<()> {
        match key {
            SettingKey::Location => {
                self.location = expect_text(key, value)?.parse()?;
            }
            SettingKey::Headline => {
                self.headline = Headline::new(expect_text(key, value)?);
            }
            SettingKey::ShowWordCount => self.show_word_count = expect_flag(key, value)?,
            SettingKey::ShowCharCount => self.show_char_count = expect_flag(key, value)?,
            SettingKey::ShowReadTime => self.show_read_time = expect_flag(key, value)?,
        }
        Ok(())
    }
}

fn expect_text(key: SettingKey, value: &SettingValue) -> DomainResult<&str> {
    value.as_text().ok_or_else(|| DomainError::SettingTypeMismatch { key: key.to_string(), expected: "text" })
}

fn expect_flag(key: SettingKey, value: &SettingValue) -> DomainResult<bool> {
    value.as_flag().ok_or_else(|| DomainError::SettingTypeMismatch { key: key.to_string(), expected: "boolean" })
}
