//! Error types for config decoding, encoding and file access.

use thiserror::Error;

use crate::types::{FieldType, ScalarType};

/// Errors that can occur while loading or saving a config record.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A value token could not be parsed as the declared scalar type.
    #[error("cannot parse {token:?} as {expected}: {reason}")]
    Format {
        token: String,
        expected: ScalarType,
        reason: String,
    },

    /// A config line matched a field but its value could not be written.
    /// Carries the offending key and (quote-stripped) value.
    #[error("cannot convert [{value}] for field [{key}]: {source}")]
    Conversion {
        key: String,
        value: String,
        #[source]
        source: Box<ConfigError>,
    },

    /// Nested records were populated but the target has no hook to attach them.
    #[error("record {record} has nested fields but no attach hook (pending: {})", .pending.join(", "))]
    MissingHook {
        record: &'static str,
        pending: Vec<&'static str>,
    },

    /// A nested record was populated but no hook claimed it.
    #[error("nested record {record} was populated but never attached")]
    UnresolvedNested { record: &'static str },

    /// A record was asked for a field it does not declare.
    #[error("record {record} has no field named {field}")]
    UnknownField { record: &'static str, field: String },

    /// A record field received a value of the wrong shape.
    #[error("field {field} expects a {expected} value")]
    TypeMismatch { field: String, expected: FieldType },

    /// A non-comment line without exactly one `=` (strict mode only).
    /// Includes the 1-based line number.
    #[error("malformed config line {line}: {text:?}")]
    MalformedLine { line: usize, text: String },

    /// A field's value could not be rendered.
    #[error("cannot encode field [{key}]: {message}")]
    Encode { key: String, message: String },

    /// Failure reported by the file collaborator.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConfigError {
    pub(crate) fn format(token: &str, expected: ScalarType, reason: impl ToString) -> Self {
        ConfigError::Format {
            token: token.to_string(),
            expected,
            reason: reason.to_string(),
        }
    }

    pub(crate) fn encode(key: &str, message: impl Into<String>) -> Self {
        ConfigError::Encode {
            key: key.to_string(),
            message: message.into(),
        }
    }

    /// The configuration key this error refers to, if any.
    pub fn key(&self) -> Option<&str> {
        match self {
            ConfigError::Conversion { key, .. } | ConfigError::Encode { key, .. } => Some(key),
            ConfigError::TypeMismatch { field, .. } => Some(field),
            _ => None,
        }
    }
}

/// Convenience alias used throughout cfactor-toml.
pub type Result<T> = std::result::Result<T, ConfigError>;
