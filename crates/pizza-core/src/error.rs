//! Error kinds surfaced by the catalog, order and config layers

use std::path::PathBuf;
use thiserror::Error;

/// Result alias for fallible core operations
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    /// The config file exists but is not a valid catalog document
    #[error("Config file {} is corrupt: {source}", path.display())]
    ConfigCorrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A saved order file exists but could not be parsed
    #[error("Saved order {} could not be read: {source}", path.display())]
    OrderParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize {what}: {source}")]
    Serialize {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid selection {index}: the order has {len} item(s)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("A {kind} named '{name}' already exists")]
    DuplicateName { kind: &'static str, name: String },

    #[error("The {kind} value must be a finite number greater than zero (got {value})")]
    NonPositiveValue { kind: &'static str, value: f64 },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
