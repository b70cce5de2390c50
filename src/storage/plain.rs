use std::path::{Path, PathBuf};

use super::fs::{atomic_write, read_optional, remove_if_exists};
use super::{validate_key, KeyValueStore, StorageError, StorageTier};

/// Plain preference tier: one JSON file per key, no encryption.
#[derive(Debug, Clone)]
pub struct PlainFileStore {
    dir: PathBuf,
}

impl PlainFileStore {
    pub fn open(dir: &Path) -> Result<Self, StorageError> {
        std::fs::create_dir_all(dir)?;
        Ok(Self {
            dir: dir.to_path_buf(),
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl KeyValueStore for PlainFileStore {
    fn tier(&self) -> StorageTier {
        StorageTier::Plain
    }

    fn save(&self, key: &str, bytes: &[u8]) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        atomic_write(&path, bytes).map_err(|e| StorageError::save_failed(key, e))
    }

    fn load(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        let path = self.path_for(key)?;
        read_optional(&path).map_err(|e| StorageError::read_failed(key, e))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        remove_if_exists(&path).map_err(|e| StorageError::save_failed(key, e))
    }
}
