// crates/shared-kernel/src/value_objects/counts.rs
use std::fmt;

use serde::{Deserialize, Serialize};

/// Declares a plain non-negative count that serializes as a bare number.
macro_rules! count_type {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(usize);

        impl $name {
            #[inline]
            pub const fn new(value: usize) -> Self {
                Self(value)
            }

            #[inline]
            pub const fn zero() -> Self {
                Self(0)
            }

            #[inline]
            pub const fn value(self) -> usize {
                self.0
            }
        }

        impl From<usize> for $name {
            fn from(value: usize) -> Self {
                Self(value)
            }
        }

        impl PartialEq<usize> for $name {
            fn eq(&self, other: &usize) -> bool {
                self.0 == *other
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }
    };
}

count_type!(
    /// Whitespace-delimited words in stripped post text.
    WordCount
);

count_type!(
    /// Length of stripped post text in UTF-8 bytes.
    CharCount
);

/// Estimated reading time in whole minutes. Never below one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct ReadMinutes(usize);

impl ReadMinutes {
    /// Smallest reading time ever reported.
    pub const MIN: Self = Self(1);

    /// Clamps `value` up to [`ReadMinutes::MIN`].
    #[inline]
    pub const fn new(value: usize) -> Self {
        if value < Self::MIN.0 { Self::MIN } else { Self(value) }
    }

    #[inline]
    pub const fn value(self) -> usize {
        self.0
    }

    /// `round(words / words_per_minute)` with halves rounded up, floored at one minute.
    ///
    /// A zero reading speed yields [`ReadMinutes::MIN`].
    pub const fn from_words(words: WordCount, words_per_minute: usize) -> Self {
        if words_per_minute == 0 {
            return Self::MIN;
        }
        let rounded = words.value().saturating_mul(2).saturating_add(words_per_minute) / (words_per_minute * 2);
        Self::new(rounded)
    }
}

impl Default for ReadMinutes {
    fn default() -> Self {
        Self::MIN
    }
}

impl TryFrom<usize> for ReadMinutes {
    type Error = String;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        if value == 0 {
            return Err("read time must be at least one minute".to_string());
        }
        Ok(Self(value))
    }
}

impl From<ReadMinutes> for usize {
    fn from(value: ReadMinutes) -> Self {
        value.0
    }
}

impl PartialEq<usize> for ReadMinutes {
    fn eq(&self, other: &usize) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for ReadMinutes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
