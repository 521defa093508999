use std::{fmt, str::FromStr};

use post_stats_shared_kernel::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};

/// Where the statistics block is placed relative to the post content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    #[default]
    Begin,
    End,
}

impl Location {
    pub const ALL: [Self; 2] = [Self::Begin, Self::End];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Begin => "begin",
            Self::End => "end",
        }
    }

    /// Human label shown in the settings form.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Begin => "Beginning of post",
            Self::End => "End of post",
        }
    }

    /// Joins `fragment` and `content` in the order this location dictates.
    pub fn place(self, fragment: &str, content: &str) -> String {
        let mut out = String::with_capacity(fragment.len() + content.len());
        match self {
            Self::Begin => {
                out.push_str(fragment);
                out.push_str(content);
            }
            Self::End => {
                out.push_str(content);
                out.push_str(fragment);
            }
        }
        out
    }
}

impl FromStr for Location {
    type Err = DomainError;

    /// Only the exact literals `begin` and `end` are accepted.
    fn from_str(s: &str) -> DomainResult<Self> {
        match s {
            "begin" => Ok(Self::Begin),
            "end" => Ok(Self::End),
            other => Err(DomainError::InvalidLocation { value: other.to_string() }),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
