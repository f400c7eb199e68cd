//! Errors from loading and saving `config.ron`.

use std::path::PathBuf;

/// Why a configuration file could not be read or written.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read {}: {source}", path.display())]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write {}: {source}", path.display())]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file exists but is not valid RON for [`Config`](crate::Config).
    #[error("invalid config {}: {source}", path.display())]
    ParseError {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },

    #[error("cannot serialize config: {0}")]
    SerializeError(#[source] ron::Error),
}

impl ConfigError {
    /// File the error concerns, if any.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            ConfigError::ReadError { path, .. }
            | ConfigError::WriteError { path, .. }
            | ConfigError::ParseError { path, .. } => Some(path),
            ConfigError::SerializeError(_) => None,
        }
    }
}
