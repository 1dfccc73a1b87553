//! # Directory-File Backend
//!
//! One file per key under a data directory. A write lands in a temp
//! file first and is renamed into place, so a reader never observes a
//! half-written snapshot.

use std::fs;
use std::io;
use std::path::PathBuf;

use super::backend::KvBackend;
use super::errors::{StoreError, StoreResult};

/// Durable key-value backend over a plain directory
#[derive(Debug)]
pub struct DirBackend {
    root: PathBuf,
}

impl DirBackend {
    /// Open (creating if necessary) the data directory.
    pub fn open(root: impl Into<PathBuf>) -> StoreResult<Self> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|e| StoreError::WriteFailed {
            key: root.display().to_string(),
            source: e,
        })?;
        Ok(Self { root })
    }

    // ':' is not portable in file names, so keys are flattened.
    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key.replace(':', "_")))
    }
}

impl KvBackend for DirBackend {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::ReadFailed {
                key: key.to_string(),
                source: e,
            }),
        }
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");

        let write_failed = |e: io::Error| StoreError::WriteFailed {
            key: key.to_string(),
            source: e,
        };

        fs::write(&tmp, value).map_err(write_failed)?;
        fs::rename(&tmp, &path).map_err(write_failed)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::WriteFailed {
                key: key.to_string(),
                source: e,
            }),
        }
    }
}
