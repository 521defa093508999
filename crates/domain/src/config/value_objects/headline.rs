use std::fmt;

use serde::{Deserialize, Serialize};

/// Heading text rendered above the statistics lines.
///
/// Holds the raw (unescaped) text; escaping happens at render time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Headline(String);

impl Headline {
    pub const DEFAULT: &'static str = "Post Statistics";

    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Headline {
    fn default() -> Self {
        Self::new(Self::DEFAULT)
    }
}

impl From<&str> for Headline {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Headline {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for Headline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
