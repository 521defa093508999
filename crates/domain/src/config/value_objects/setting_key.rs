use std::{fmt, str::FromStr};

use post_stats_shared_kernel::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};

use super::{Headline, Location};

/// The persisted configuration keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SettingKey {
    Location,
    Headline,
    ShowWordCount,
    ShowCharCount,
    ShowReadTime,
}

/// A stored setting value as the host store sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    Text(String),
    Flag(bool),
}

impl SettingKey {
    /// Every key in settings-form order.
    pub const ALL: [Self; 5] = [
        Self::Location,
        Self::Headline,
        Self::ShowWordCount,
        Self::ShowCharCount,
        Self::ShowReadTime,
    ];

    /// Name under which the value is stored.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Location => "location",
            Self::Headline => "headline",
            Self::ShowWordCount => "showWordCount",
            Self::ShowCharCount => "showCharCount",
            Self::ShowReadTime => "showReadTime",
        }
    }

    /// Field label shown on the settings page.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Location => "Display Location",
            Self::Headline => "Headline Text",
            Self::ShowWordCount => "Word Count",
            Self::ShowCharCount => "Character Count",
            Self::ShowReadTime => "Read Time",
        }
    }

    pub fn default_value(self) -> SettingValue {
        match self {
            Self::Location => SettingValue::Text(Location::default().as_str().to_string()),
            Self::Headline => SettingValue::Text(Headline::DEFAULT.to_string()),
            Self::ShowWordCount | Self::ShowCharCount | Self::ShowReadTime => SettingValue::Flag(true),
        }
    }
}

impl FromStr for SettingKey {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| DomainError::UnknownSettingKey { key: s.to_string() })
    }
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl SettingValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Flag(_) => None,
        }
    }

    pub const fn as_flag(&self) -> Option<bool> {
        match self {
            Self::Flag(flag) => Some(*flag),
            Self::Text(_) => None,
        }
    }
}

impl From<bool> for SettingValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

impl From<&str> for SettingValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for SettingValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}
