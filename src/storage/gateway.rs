use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::{self, MAX_RECENT_RECIPIENTS};
use crate::models::{DisplayPreferences, RecentRecipients, UserProfile};
use crate::timeline::SymptomTimeline;

use super::{keys, EncryptedFileStore, KeyValueStore, MemoryStore, PlainFileStore, StorageError};

/// Typed access to both tiers. Owns the mapping from entity to key and tier.
///
/// Every `load_*` returns the entity's default on a cold start and
/// `StorageError::DecodeFailed` when bytes are present but unreadable.
#[derive(Clone)]
pub struct PersistenceGateway {
    protected: Arc<dyn KeyValueStore>,
    plain: Arc<dyn KeyValueStore>,
}

impl PersistenceGateway {
    pub fn new(protected: Arc<dyn KeyValueStore>, plain: Arc<dyn KeyValueStore>) -> Self {
        Self { protected, plain }
    }

    /// File-backed gateway under the configured data directory.
    pub fn open_default(passphrase: &str) -> Result<Self, StorageError> {
        let protected = EncryptedFileStore::open(&config::protected_dir(), passphrase)?;
        let plain = PlainFileStore::open(&config::plain_dir())?;
        Ok(Self::new(Arc::new(protected), Arc::new(plain)))
    }

    /// Gateway that keeps everything in memory.
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(MemoryStore::protected()),
            Arc::new(MemoryStore::plain()),
        )
    }

    // ── Protected tier ──────────────────────────────────────

    pub fn save_history(&self, timeline: &SymptomTimeline) -> Result<(), StorageError> {
        save_json(self.protected.as_ref(), keys::SYMPTOM_HISTORY, timeline)
    }

    pub fn load_history(&self) -> Result<SymptomTimeline, StorageError> {
        Ok(load_json(self.protected.as_ref(), keys::SYMPTOM_HISTORY)?.unwrap_or_default())
    }

    pub fn save_profile(&self, profile: &UserProfile) -> Result<(), StorageError> {
        save_json(self.protected.as_ref(), keys::USER_PROFILE, profile)
    }

    pub fn load_profile(&self) -> Result<Option<UserProfile>, StorageError> {
        load_json(self.protected.as_ref(), keys::USER_PROFILE)
    }

    // ── Plain tier ──────────────────────────────────────────

    pub fn save_recipients(&self, recipients: &RecentRecipients) -> Result<(), StorageError> {
        save_json(self.plain.as_ref(), keys::PREVIOUS_RECIPIENTS, recipients)
    }

    pub fn load_recipients(&self) -> Result<RecentRecipients, StorageError> {
        let stored: Option<RecentRecipients> =
            load_json(self.plain.as_ref(), keys::PREVIOUS_RECIPIENTS)?;
        Ok(stored
            .map(|r| RecentRecipients::from_vec(r.as_slice().to_vec(), MAX_RECENT_RECIPIENTS))
            .unwrap_or_default())
    }

    pub fn save_custom_symptoms(&self, symptoms: &[String]) -> Result<(), StorageError> {
        save_json(self.plain.as_ref(), keys::CUSTOM_SYMPTOMS, &symptoms)
    }

    pub fn load_custom_symptoms(&self) -> Result<Vec<String>, StorageError> {
        let stored: Vec<String> =
            load_json(self.plain.as_ref(), keys::CUSTOM_SYMPTOMS)?.unwrap_or_default();
        let mut unique: Vec<String> = Vec::with_capacity(stored.len());
        for symptom in stored {
            if !unique.contains(&symptom) {
                unique.push(symptom);
            }
        }
        Ok(unique)
    }

    pub fn save_last_recipient(&self, name: &str) -> Result<(), StorageError> {
        save_json(self.plain.as_ref(), keys::LAST_RECIPIENT, &name)
    }

    pub fn load_last_recipient(&self) -> Result<String, StorageError> {
        Ok(load_json(self.plain.as_ref(), keys::LAST_RECIPIENT)?.unwrap_or_default())
    }

    pub fn save_display_preferences(&self, prefs: &DisplayPreferences) -> Result<(), StorageError> {
        save_json(self.plain.as_ref(), keys::DISPLAY_PREFERENCES, prefs)
    }

    pub fn load_display_preferences(&self) -> Result<DisplayPreferences, StorageError> {
        Ok(load_json(self.plain.as_ref(), keys::DISPLAY_PREFERENCES)?.unwrap_or_default())
    }
}

impl std::fmt::Debug for PersistenceGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PersistenceGateway")
            .field("protected", &self.protected.tier().as_str())
            .field("plain", &self.plain.tier().as_str())
            .finish()
    }
}

fn save_json<T: Serialize + ?Sized>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let bytes = serde_json::to_vec(value).map_err(|e| StorageError::save_failed(key, e))?;
    store.save(key, &bytes)?;
    tracing::debug!(key, tier = store.tier().as_str(), bytes = bytes.len(), "Saved");
    Ok(())
}

fn load_json<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> Result<Option<T>, StorageError> {
    let Some(bytes) = store.load(key)? else {
        return Ok(None);
    };
    serde_json::from_slice(&bytes)
        .map(Some)
        .map_err(|e| StorageError::decode_failed(key, e))
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::models::{Gender, Severity, SymptomEntry};

    fn gateway_with_stores() -> (PersistenceGateway, Arc<MemoryStore>, Arc<MemoryStore>) {
        let protected = Arc::new(MemoryStore::protected());
        let plain = Arc::new(MemoryStore::plain());
        let gateway = PersistenceGateway::new(protected.clone(), plain.clone());
        (gateway, protected, plain)
    }

    fn profile() -> UserProfile {
        UserProfile {
            name: "Jordan Lee".into(),
            occupation: "Nurse".into(),
            region: "United Kingdom".into(),
            age: 41,
            gender: Gender::PreferNotToSay,
        }
    }

    #[test]
    fn cold_start_returns_defaults() {
        let gateway = PersistenceGateway::in_memory();
        assert!(gateway.load_history().unwrap().is_empty());
        assert!(gateway.load_profile().unwrap().is_none());
        assert!(gateway.load_recipients().unwrap().is_empty());
        assert!(gateway.load_custom_symptoms().unwrap().is_empty());
        assert_eq!(gateway.load_last_recipient().unwrap(), "");
        assert_eq!(
            gateway.load_display_preferences().unwrap(),
            DisplayPreferences::default()
        );
    }

    #[test]
    fn profile_round_trip_is_deep_equal() {
        let gateway = PersistenceGateway::in_memory();
        gateway.save_profile(&profile()).unwrap();
        assert_eq!(gateway.load_profile().unwrap(), Some(profile()));
    }

    #[test]
    fn entities_land_in_their_tier() {
        let (gateway, protected, plain) = gateway_with_stores();
        gateway.save_profile(&profile()).unwrap();
        gateway.save_history(&SymptomTimeline::new()).unwrap();
        gateway.save_custom_symptoms(&["Itchy skin".to_string()]).unwrap();
        gateway.save_recipients(&RecentRecipients::default()).unwrap();

        assert!(protected.contains(keys::USER_PROFILE));
        assert!(protected.contains(keys::SYMPTOM_HISTORY));
        assert!(!plain.contains(keys::USER_PROFILE));
        assert!(plain.contains(keys::CUSTOM_SYMPTOMS));
        assert!(plain.contains(keys::PREVIOUS_RECIPIENTS));
        assert!(!protected.contains(keys::CUSTOM_SYMPTOMS));
    }

    #[test]
    fn malformed_protected_bytes_are_decode_failure() {
        let (gateway, protected, _) = gateway_with_stores();
        protected.save(keys::SYMPTOM_HISTORY, b"{not json").unwrap();
        assert!(matches!(
            gateway.load_history(),
            Err(StorageError::DecodeFailed { .. })
        ));
    }

    #[test]
    fn schema_mismatch_is_decode_failure() {
        let (gateway, protected, _) = gateway_with_stores();
        protected
            .save(keys::USER_PROFILE, br#"{"name":"Sam","age":"old"}"#)
            .unwrap();
        assert!(matches!(
            gateway.load_profile(),
            Err(StorageError::DecodeFailed { .. })
        ));
    }

    #[test]
    fn save_failure_is_reported() {
        let (gateway, protected, _) = gateway_with_stores();
        protected.set_fail_writes(true);
        assert!(matches!(
            gateway.save_profile(&profile()),
            Err(StorageError::SaveFailed { .. })
        ));
    }

    #[test]
    fn history_round_trip() {
        let gateway = PersistenceGateway::in_memory();
        let mut timeline = SymptomTimeline::new();
        timeline.append(SymptomEntry::new(
            1,
            Utc.with_ymd_and_hms(2025, 6, 2, 7, 45, 0).unwrap(),
            Severity::new(8).unwrap(),
            vec!["Fever".into(), "Chills".into()],
        ));
        gateway.save_history(&timeline).unwrap();
        assert_eq!(gateway.load_history().unwrap(), timeline);
    }

    #[test]
    fn stored_custom_symptoms_are_deduplicated_on_load() {
        let (gateway, _, plain) = gateway_with_stores();
        plain
            .save(keys::CUSTOM_SYMPTOMS, br#"["Itchy skin","Hiccups","Itchy skin"]"#)
            .unwrap();
        assert_eq!(gateway.load_custom_symptoms().unwrap(), ["Itchy skin", "Hiccups"]);
    }

    #[test]
    fn oversized_recipient_list_is_truncated_on_load() {
        let (gateway, _, plain) = gateway_with_stores();
        let at = Utc.with_ymd_and_hms(2025, 6, 2, 7, 45, 0).unwrap();
        let list: Vec<_> = ["A", "B", "C", "D"]
            .iter()
            .map(|n| crate::models::RecipientInfo::new(*n, at))
            .collect();
        plain
            .save(keys::PREVIOUS_RECIPIENTS, &serde_json::to_vec(&list).unwrap())
            .unwrap();
        assert_eq!(gateway.load_recipients().unwrap().names(), ["A", "B", "C"]);
    }

    #[test]
    fn repeated_recipient_names_are_collapsed_on_load() {
        let (gateway, _, plain) = gateway_with_stores();
        let at = Utc.with_ymd_and_hms(2025, 6, 2, 7, 45, 0).unwrap();
        let list: Vec<_> = ["Alice", "Alice", "Bob"]
            .iter()
            .map(|n| crate::models::RecipientInfo::new(*n, at))
            .collect();
        plain
            .save(keys::PREVIOUS_RECIPIENTS, &serde_json::to_vec(&list).unwrap())
            .unwrap();
        assert_eq!(gateway.load_recipients().unwrap().names(), ["Alice", "Bob"]);
    }

    #[test]
    fn file_backed_gateway_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let protected = EncryptedFileStore::with_key(
            &dir.path().join("protected"),
            crate::crypto::StoreKey::from_bytes([9u8; crate::crypto::KEY_LENGTH]),
        )
        .unwrap();
        let plain = PlainFileStore::open(&dir.path().join("plain")).unwrap();
        let gateway = PersistenceGateway::new(Arc::new(protected), Arc::new(plain));

        gateway.save_profile(&profile()).unwrap();
        gateway.save_last_recipient("Ms. Patel").unwrap();
        assert_eq!(gateway.load_profile().unwrap(), Some(profile()));
        assert_eq!(gateway.load_last_recipient().unwrap(), "Ms. Patel");
    }
}
