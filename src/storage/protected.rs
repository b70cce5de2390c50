use std::path::{Path, PathBuf};

use crate::crypto::{generate_salt, salt_from_slice, CryptoError, StoreKey};

use super::fs::{atomic_write, create_private_dir, read_optional, remove_if_exists};
use super::{validate_key, KeyValueStore, StorageError, StorageTier};

const SALT_FILE: &str = "salt.bin";
const VERIFICATION_FILE: &str = "verification.bin";
const SEALED_EXTENSION: &str = "enc";

/// Protected tier: one AES-256-GCM sealed file per key in an owner-only directory.
#[derive(Debug)]
pub struct EncryptedFileStore {
    dir: PathBuf,
    key: StoreKey,
}

impl EncryptedFileStore {
    /// Open (or initialise) a store whose key is derived from `passphrase`
    /// and the store's salt. A fresh directory gets a new random salt.
    ///
    /// Fails with [`CryptoError::WrongPassphrase`] when the key does not
    /// match the store, so existing entries are never shadowed by a cold start.
    pub fn open(dir: &Path, passphrase: &str) -> Result<Self, StorageError> {
        create_private_dir(dir)?;

        let salt_path = dir.join(SALT_FILE);
        let salt = match read_optional(&salt_path)? {
            Some(bytes) => salt_from_slice(&bytes)?,
            None => {
                let salt = generate_salt();
                atomic_write(&salt_path, &salt)?;
                tracing::info!(dir = %dir.display(), "Protected store initialised");
                salt
            }
        };

        let store = Self {
            dir: dir.to_path_buf(),
            key: StoreKey::derive(passphrase, &salt),
        };
        store.check_key()?;
        Ok(store)
    }

    /// Open with key material supplied by the platform keystore.
    pub fn with_key(dir: &Path, key: StoreKey) -> Result<Self, StorageError> {
        create_private_dir(dir)?;
        let store = Self {
            dir: dir.to_path_buf(),
            key,
        };
        store.check_key()?;
        Ok(store)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{key}.{SEALED_EXTENSION}")))
    }

    /// Verify the key against the store's token, writing the token on first use.
    fn check_key(&self) -> Result<(), StorageError> {
        let token_path = self.dir.join(VERIFICATION_FILE);
        if let Some(token) = read_optional(&token_path)? {
            self.key.verify(&token)?;
            return Ok(());
        }

        // No token yet: any existing entry must open under this key
        let mut sealed = 0usize;
        let mut opened = false;
        for entry in std::fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some(SEALED_EXTENSION) {
                continue;
            }
            let Some(label) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            sealed += 1;
            if self.key.open(label, &std::fs::read(&path)?).is_ok() {
                opened = true;
                break;
            }
        }
        if sealed > 0 && !opened {
            tracing::warn!(dir = %self.dir.display(), "Protected store rejected key");
            return Err(CryptoError::WrongPassphrase.into());
        }

        atomic_write(&token_path, &self.key.verification_token()?)?;
        Ok(())
    }
}

impl KeyValueStore for EncryptedFileStore {
    fn tier(&self) -> StorageTier {
        StorageTier::Protected
    }

    fn save(&self, key: &str, bytes: &[u8]) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        let envelope = self
            .key
            .seal(key, bytes)
            .map_err(|e| StorageError::save_failed(key, e))?;
        atomic_write(&path, &envelope).map_err(|e| StorageError::save_failed(key, e))
    }

    fn load(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        let path = self.path_for(key)?;
        let Some(raw) = read_optional(&path).map_err(|e| StorageError::read_failed(key, e))? else {
            return Ok(None);
        };
        let plaintext = self
            .key
            .open(key, &raw)
            .map_err(|e| StorageError::decode_failed(key, e))?;
        Ok(Some(plaintext))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        remove_if_exists(&path).map_err(|e| StorageError::save_failed(key, e))
    }
}
