//! File-backed option store.
//!
//! All options live in a single JSON file which is rewritten on every write.

use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

use super::{OptionStore, StoreError};
use crate::Result;

/// The current option file format version.
/// v0 indicates this is an unstable format subject to breaking changes.
const FORMAT_VERSION: u8 = 0;

/// Helper to check if version is default (0) for serde skip_serializing_if
fn is_v0(v: &u8) -> bool {
    *v == 0
}

/// Validates the format version during deserialization.
fn validate_format_version<'de, D>(deserializer: D) -> std::result::Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let version = u8::deserialize(deserializer)?;
    if version != FORMAT_VERSION {
        return Err(serde::de::Error::custom(format!(
            "unsupported option file version {version}; only version {FORMAT_VERSION} is supported"
        )));
    }
    Ok(version)
}

/// On-disk layout of the option file
#[derive(Debug, Default, Serialize, Deserialize)]
struct OptionFile {
    /// File format version for compatibility checking
    #[serde(
        rename = "_v",
        default,
        skip_serializing_if = "is_v0",
        deserialize_with = "validate_format_version"
    )]
    version: u8,
    #[serde(default)]
    options: BTreeMap<String, String>,
}

/// An option table persisted as a pretty-printed JSON file.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    options: BTreeMap<String, String>,
}

impl JsonFileStore {
    /// Opens the option file at `path`.
    ///
    /// If the file does not exist, an empty store is returned and the file is
    /// created on the first write.
    ///
    /// # Errors
    /// [`StoreError::FileIo`] if the file cannot be read,
    /// [`StoreError::CorruptFile`] if it does not hold a valid option table.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let options = match std::fs::read_to_string(&path) {
            Ok(json) => {
                let file: OptionFile =
                    serde_json::from_str(&json).map_err(|source| StoreError::CorruptFile {
                        path: path.clone(),
                        source,
                    })?;
                file.options
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(source) => return Err(StoreError::FileIo { path, source }.into()),
        };
        debug!(path = %path.display(), options = options.len(), "Opened option file");
        Ok(Self { path, options })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<()> {
        let file = OptionFile {
            version: FORMAT_VERSION,
            options: self.options.clone(),
        };
        let json = serde_json::to_string_pretty(&file)
            .map_err(|source| StoreError::SerializationFailed { source })?;
        std::fs::write(&self.path, json).map_err(|source| {
            StoreError::FileIo {
                path: self.path.clone(),
                source,
            }
            .into()
        })
    }
}

impl OptionStore for JsonFileStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.options.get(key).cloned())
    }

    /// Stores the value and rewrites the file. On failure the in-memory table
    /// is rolled back so it keeps matching the file.
    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        let previous = self.options.insert(key.to_string(), value.to_string());
        if let Err(err) = self.flush() {
            match previous {
                Some(previous) => self.options.insert(key.to_string(), previous),
                None => self.options.remove(key),
            };
            return Err(err);
        }
        Ok(())
    }
}
