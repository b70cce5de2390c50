//! Two-tier local persistence.
//!
//! The protected tier holds the symptom timeline and the profile and is
//! encrypted at rest. The plain tier holds low-sensitivity data: recent
//! recipients, the custom symptom vocabulary and display preferences.
//! Both tiers implement [`KeyValueStore`]; the [`PersistenceGateway`] maps
//! entities onto keys and is the only writer.

pub mod fs;
pub mod gateway;
pub mod memory;
pub mod plain;
pub mod protected;

pub use gateway::PersistenceGateway;
pub use memory::MemoryStore;
pub use plain::PlainFileStore;
pub use protected::EncryptedFileStore;

use thiserror::Error;

use crate::crypto::CryptoError;

/// Storage keys. Names are part of the on-disk format.
pub mod keys {
    pub const SYMPTOM_HISTORY: &str = "symptomHistory";
    pub const USER_PROFILE: &str = "userProfile";
    pub const PREVIOUS_RECIPIENTS: &str = "previousRecipients";
    pub const CUSTOM_SYMPTOMS: &str = "customSymptoms";
    pub const LAST_RECIPIENT: &str = "lastRecipient";
    pub const DISPLAY_PREFERENCES: &str = "displayPreferences";
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Failed to save {key}: {reason}")]
    SaveFailed { key: String, reason: String },

    #[error("Stored value for {key} is malformed: {reason}")]
    DecodeFailed { key: String, reason: String },

    #[error("Failed to read {key}: {reason}")]
    ReadFailed { key: String, reason: String },

    #[error("Invalid storage key: {0:?}")]
    InvalidKey(String),

    #[error("Crypto error: {0}")]
    Crypto(#[from] CryptoError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl StorageError {
    pub(crate) fn save_failed(key: &str, reason: impl std::fmt::Display) -> Self {
        Self::SaveFailed {
            key: key.to_string(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn decode_failed(key: &str, reason: impl std::fmt::Display) -> Self {
        Self::DecodeFailed {
            key: key.to_string(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn read_failed(key: &str, reason: impl std::fmt::Display) -> Self {
        Self::ReadFailed {
            key: key.to_string(),
            reason: reason.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageTier {
    Protected,
    Plain,
}

impl StorageTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Protected => "protected",
            Self::Plain => "plain",
        }
    }
}

/// Byte-level capability every backend provides.
///
/// `save` replaces the previous value atomically from the caller's view.
/// `load` returns `Ok(None)` when nothing was ever stored.
pub trait KeyValueStore: Send + Sync {
    fn tier(&self) -> StorageTier;

    fn save(&self, key: &str, bytes: &[u8]) -> Result<(), StorageError>;

    fn load(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError>;

    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Keys become file names, so only a conservative alphabet is allowed.
pub(crate) fn validate_key(key: &str) -> Result<(), StorageError> {
    let valid = !key.is_empty()
        && key.len() <= 64
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}
