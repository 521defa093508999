use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::SettingKey;

/// Error message shown to the administrator after a rejected settings field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub setting: SettingKey,
    pub code: String,
    pub message: String,
}

impl Notice {
    pub fn error(setting: SettingKey, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self { setting, code: code.into(), message: message.into() }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.setting, self.message)
    }
}
