//! Errors raised by the storage accessor and session manager.

use thiserror::Error;

/// Failure reading or writing a value held in a [`crate::StorageArea`].
#[derive(Debug, Error)]
pub enum StoreError {
    /// The text stored under `key` is not valid JSON for the requested type.
    #[error("value stored under `{key}` could not be parsed: {source}")]
    Parse {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("value for `{key}` could not be serialized: {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// The backend refused the write (e.g. browser storage quota exceeded).
    #[error("storage rejected write to `{key}`: {message}")]
    Write { key: String, message: String },
}

impl StoreError {
    pub(crate) fn parse(key: &str, source: serde_json::Error) -> Self {
        Self::Parse {
            key: key.to_string(),
            source,
        }
    }

    pub(crate) fn serialize(key: &str, source: serde_json::Error) -> Self {
        Self::Serialize {
            key: key.to_string(),
            source,
        }
    }
}
