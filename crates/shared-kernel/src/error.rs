// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Error type returned by every fallible settings operation.
#[derive(Debug, Error)]
pub enum PostStatsError {
    /// A step description wrapped around the failure that caused it.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<PostStatsError>,
    },

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Infrastructure error: {0}")]
    Infrastructure(#[from] InfrastructureError),

    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),
}

pub type Result<T> = std::result::Result<T, PostStatsError>;

impl PostStatsError {
    /// Wraps `self` in a [`PostStatsError::Context`] describing the failed step.
    pub fn within(self, context: impl Into<String>) -> Self {
        Self::Context { context: context.into(), source: Box::new(self) }
    }
}

/// Rejected setting names, shapes and values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid display location '{value}': expected 'begin' or 'end'")]
    InvalidLocation { value: String },

    #[error("Unknown setting key: {key}")]
    UnknownSettingKey { key: String },

    #[error("Setting '{key}' holds a value of the wrong type: expected {expected}")]
    SettingTypeMismatch { key: String, expected: &'static str },
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("Failed to save setting '{key}': {reason}")]
    SettingsSaveFailed {
        key: String,
        reason: String,
        #[source]
        source: Option<Box<PostStatsError>>,
    },
}

/// Settings storage failures.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("Failed to read settings '{path}': {source}")]
    SettingsRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write settings '{path}': {source}")]
    SettingsWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {format} data: {details}")]
    SerializationError { format: String, details: String },
}

impl From<serde_json::Error> for PostStatsError {
    fn from(err: serde_json::Error) -> Self {
        InfrastructureError::SerializationError { format: "JSON".to_string(), details: err.to_string() }.into()
    }
}

/// Attaches a step description to the error side of a result.
pub trait ErrorContext<T>: Sized {
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;

    fn context(self, context: impl Into<String>) -> Result<T> {
        let context = context.into();
        self.with_context(move || context)
    }
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<PostStatsError>,
{
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|err| err.into().within(f()))
    }
}
