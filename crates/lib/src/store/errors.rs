//! Error types for option store operations.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while reading or writing an option store.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum StoreError {
    /// File I/O failed.
    #[error("File I/O error on {}", .path.display())]
    FileIo {
        /// The file being read or written
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The backing file exists but does not hold a valid option table.
    #[error("Corrupt option file {}", .path.display())]
    CorruptFile {
        /// The file that failed to parse
        path: PathBuf,
        /// The underlying deserialization error
        #[source]
        source: serde_json::Error,
    },

    /// Encoding the option table failed.
    #[error("Serialization failed")]
    SerializationFailed {
        /// The underlying serialization error
        #[source]
        source: serde_json::Error,
    },
}

impl StoreError {
    pub fn is_io_error(&self) -> bool {
        matches!(self, StoreError::FileIo { .. })
    }

    pub fn is_corrupt(&self) -> bool {
        matches!(self, StoreError::CorruptFile { .. })
    }

    pub fn is_serialization_error(&self) -> bool {
        matches!(self, StoreError::SerializationFailed { .. })
    }
}

impl From<StoreError> for crate::Error {
    fn from(err: StoreError) -> Self {
        crate::Error::Store(err)
    }
}
