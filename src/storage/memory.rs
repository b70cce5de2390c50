use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use super::{validate_key, KeyValueStore, StorageError, StorageTier};

/// In-process store for ephemeral sessions and tests.
///
/// Writes can be made to fail on demand to exercise error paths.
#[derive(Debug)]
pub struct MemoryStore {
    tier: StorageTier,
    values: Mutex<HashMap<String, Vec<u8>>>,
    fail_writes: AtomicBool,
}

impl MemoryStore {
    pub fn new(tier: StorageTier) -> Self {
        Self {
            tier,
            values: Mutex::new(HashMap::new()),
            fail_writes: AtomicBool::new(false),
        }
    }

    pub fn protected() -> Self {
        Self::new(StorageTier::Protected)
    }

    pub fn plain() -> Self {
        Self::new(StorageTier::Plain)
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Raw bytes currently stored under `key`.
    pub fn raw(&self, key: &str) -> Option<Vec<u8>> {
        self.values.lock().ok()?.get(key).cloned()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.raw(key).is_some()
    }
}

impl KeyValueStore for MemoryStore {
    fn tier(&self) -> StorageTier {
        self.tier
    }

    fn save(&self, key: &str, bytes: &[u8]) -> Result<(), StorageError> {
        validate_key(key)?;
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError::save_failed(key, "write rejected"));
        }
        let mut values = self
            .values
            .lock()
            .map_err(|_| StorageError::save_failed(key, "lock poisoned"))?;
        values.insert(key.to_string(), bytes.to_vec());
        Ok(())
    }

    fn load(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        validate_key(key)?;
        let values = self
            .values
            .lock()
            .map_err(|_| StorageError::read_failed(key, "lock poisoned"))?;
        Ok(values.get(key).cloned())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        validate_key(key)?;
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError::save_failed(key, "write rejected"));
        }
        let mut values = self
            .values
            .lock()
            .map_err(|_| StorageError::save_failed(key, "lock poisoned"))?;
        values.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_overwrites_previous_value() {
        let store = MemoryStore::plain();
        store.save("lastRecipient", b"\"A\"").unwrap();
        store.save("lastRecipient", b"\"B\"").unwrap();
        assert_eq!(store.load("lastRecipient").unwrap().unwrap(), b"\"B\"");
    }

    #[test]
    fn failing_writes_leave_old_value() {
        let store = MemoryStore::protected();
        store.save("userProfile", b"old").unwrap();
        store.set_fail_writes(true);
        assert!(matches!(
            store.save("userProfile", b"new"),
            Err(StorageError::SaveFailed { .. })
        ));
        assert_eq!(store.raw("userProfile").unwrap(), b"old");
    }
}
