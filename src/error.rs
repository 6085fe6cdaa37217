//! Error types shared by the theme and storage layers

use thiserror::Error;

/// Failure while reading or writing durable client-side storage.
///
/// The theme store never returns these to its callers; they are logged and the
/// value is treated as absent.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Storage is disabled or otherwise not reachable
    #[error("storage is unavailable")]
    Unavailable,

    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage file is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// A persisted theme value that is neither `"light"` nor `"dark"`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized theme value {0:?}")]
pub struct ThemeParseError(pub String);
