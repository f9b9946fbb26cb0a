//! Error types for color validation and settings loading.

use std::path::PathBuf;
use thiserror::Error;

/// Rejected color channel input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("channel {channel} is {value}, expected 0..=255")]
    OutOfRange { channel: usize, value: i32 },

    #[error("expected 3 or 4 channels, got {len}")]
    WrongArity { len: usize },
}

/// Errors raised while setting up the sheet, before any stroke begins.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid color: {0}")]
    InvalidColor(#[from] ColorError),

    #[error("failed to read settings at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse settings at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid setting: {0}")]
    Invalid(String),

    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
