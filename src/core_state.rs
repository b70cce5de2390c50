//! Application state for the journal.
//!
//! `JournalState` owns the live copies of the timeline, profile, recipients,
//! custom vocabulary and preferences, and is the only caller that writes
//! through the [`PersistenceGateway`]. Mutators take `&mut self`, so writes
//! to any storage key are serialized by construction.
//!
//! Memory is updated first and then persisted. A failed save is returned
//! to the caller and logged; the in-memory change is kept (no rollback).
//! The recent-trend estimate is recomputed only when the timeline changes.

use std::collections::BTreeSet;
use std::sync::Arc;

use thiserror::Error;
use tokio::sync::broadcast;

use crate::catalog::{recent_trend_catalog, standard_catalog, Catalog, COMMON_SYMPTOMS};
use crate::clock::{Clock, SystemClock};
use crate::config::MAX_RECENT_RECIPIENTS;
use crate::matcher;
use crate::models::{
    DisplayPreferences, IllnessEstimate, RecentRecipients, RecipientInfo, Severity, SymptomEntry,
    UserProfile,
};
use crate::note::{draft_absence_note, NoteRequest};
use crate::storage::{PersistenceGateway, StorageError};
use crate::timeline::SymptomTimeline;

/// Buffered change notifications per subscriber before old ones are dropped.
const CHANGE_CHANNEL_CAPACITY: usize = 64;

/// What changed, broadcast to subscribers after each mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateChange {
    Timeline,
    Estimate,
    Profile,
    Recipients,
    CustomSymptoms,
    DisplayPreferences,
}

#[derive(Error, Debug)]
pub enum JournalError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("Severity must be between {min} and {max}, got {0}", min = Severity::MIN, max = Severity::MAX)]
    InvalidSeverity(u8),

    #[error("Invalid profile: {0}")]
    InvalidProfile(String),

    #[error("Symptom entry {0} is already in the timeline")]
    DuplicateEntryId(u64),
}

pub struct JournalState {
    gateway: PersistenceGateway,
    clock: Arc<dyn Clock>,
    full_catalog: Catalog,
    trend_catalog: Catalog,
    timeline: SymptomTimeline,
    profile: Option<UserProfile>,
    recipients: RecentRecipients,
    last_recipient: String,
    custom_symptoms: Vec<String>,
    display: DisplayPreferences,
    estimate: Option<IllnessEstimate>,
    changes: broadcast::Sender<StateChange>,
}

impl JournalState {
    /// Load everything from `gateway` and compute the initial estimate.
    ///
    /// Never fails: unreadable or malformed entities are logged and start
    /// out empty, so a damaged store cannot block the UI.
    pub fn open(gateway: PersistenceGateway, clock: Arc<dyn Clock>) -> Self {
        let timeline = or_default("symptom history", gateway.load_history());
        let profile = or_default("user profile", gateway.load_profile());
        let recipients = or_default("recipients", gateway.load_recipients());
        let last_recipient = or_default("last recipient", gateway.load_last_recipient());
        let custom_symptoms = or_default("custom symptoms", gateway.load_custom_symptoms());
        let display = or_default("display preferences", gateway.load_display_preferences());

        let (changes, _) = broadcast::channel(CHANGE_CHANNEL_CAPACITY);
        let mut state = Self {
            gateway,
            clock,
            full_catalog: standard_catalog(),
            trend_catalog: recent_trend_catalog(),
            timeline,
            profile,
            recipients,
            last_recipient,
            custom_symptoms,
            display,
            estimate: None,
            changes,
        };
        state.estimate = state.compute_trend_estimate();

        tracing::info!(
            entries = state.timeline.len(),
            has_profile = state.profile.is_some(),
            "Journal state loaded"
        );
        state
    }

    /// Open the file-backed store under the configured data directory.
    pub fn open_default(passphrase: &str) -> Result<Self, JournalError> {
        let gateway = PersistenceGateway::open_default(passphrase)?;
        Ok(Self::open(gateway, Arc::new(SystemClock)))
    }

    /// Receive a [`StateChange`] after every mutation.
    pub fn subscribe(&self) -> broadcast::Receiver<StateChange> {
        self.changes.subscribe()
    }

    // ── Read accessors ──────────────────────────────────────

    pub fn timeline(&self) -> &SymptomTimeline {
        &self.timeline
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    pub fn current_estimate(&self) -> Option<&IllnessEstimate> {
        self.estimate.as_ref()
    }

    pub fn recipients(&self) -> &[RecipientInfo] {
        self.recipients.as_slice()
    }

    /// Default recipient for the next note; empty when none.
    pub fn last_recipient(&self) -> &str {
        &self.last_recipient
    }

    pub fn custom_symptoms(&self) -> &[String] {
        &self.custom_symptoms
    }

    pub fn display_preferences(&self) -> DisplayPreferences {
        self.display
    }

    /// Quick-pick symptoms followed by the user's own.
    pub fn symptom_choices(&self) -> Vec<String> {
        let mut choices: Vec<String> = COMMON_SYMPTOMS.iter().map(|s| s.to_string()).collect();
        for custom in &self.custom_symptoms {
            if !choices.contains(custom) {
                choices.push(custom.clone());
            }
        }
        choices
    }

    /// Full estimate for a selection in progress, folded together with
    /// the recent window. Read-only: the held estimate is untouched.
    pub fn estimate_for(&self, current: &[String]) -> Option<IllnessEstimate> {
        let recent = self.timeline.recent(self.clock.now());
        matcher::estimate_combined(&self.full_catalog, current, &recent)
    }

    pub fn draft_note(
        &self,
        symptoms: &BTreeSet<String>,
        severity: Severity,
        recipient: &str,
    ) -> String {
        draft_absence_note(&NoteRequest {
            recipient,
            symptoms,
            severity,
            profile: self.profile.as_ref(),
            date: self.clock.now().date_naive(),
        })
    }

    // ── Timeline mutations ──────────────────────────────────

    /// Append an entry, persist the timeline and recompute the estimate.
    /// An entry whose id is already present is rejected untouched.
    pub fn add_symptom_entry(&mut self, entry: SymptomEntry) -> Result<(), JournalError> {
        if self.timeline.contains_id(entry.id) {
            return Err(JournalError::DuplicateEntryId(entry.id));
        }
        tracing::debug!(id = entry.id, symptoms = entry.symptoms.len(), "Adding symptom entry");
        self.timeline.append(entry);
        self.notify(StateChange::Timeline);

        let saved = self.gateway.save_history(&self.timeline);
        self.refresh_estimate();
        self.report("symptom history", saved)
    }

    /// Build an entry stamped with the next id and the current time, then add it.
    ///
    /// On a save failure the entry stays in memory and the error is returned.
    pub fn record_symptoms(
        &mut self,
        symptoms: Vec<String>,
        severity: u8,
    ) -> Result<SymptomEntry, JournalError> {
        let severity = Severity::new(severity).ok_or(JournalError::InvalidSeverity(severity))?;
        let entry = SymptomEntry::new(
            self.timeline.next_id(),
            self.clock.now(),
            severity,
            symptoms,
        );
        self.add_symptom_entry(entry.clone())?;
        Ok(entry)
    }

    /// Drop the whole timeline and the current estimate. Idempotent.
    pub fn clear_history(&mut self) -> Result<(), JournalError> {
        self.timeline.clear();
        self.estimate = None;
        self.notify(StateChange::Timeline);
        self.notify(StateChange::Estimate);

        let saved = self.gateway.save_history(&self.timeline);
        tracing::info!("Symptom history cleared");
        self.report("symptom history", saved)
    }

    // ── Recipients ──────────────────────────────────────────

    /// Move `name` to the front of the recent list and make it the default.
    /// Empty names are ignored.
    pub fn add_recipient(&mut self, name: &str) -> Result<(), JournalError> {
        if name.is_empty() {
            return Ok(());
        }
        self.recipients
            .touch(name, self.clock.now(), MAX_RECENT_RECIPIENTS);
        self.last_recipient = name.to_string();
        self.notify(StateChange::Recipients);

        let saved = self
            .gateway
            .save_recipients(&self.recipients)
            .and_then(|()| self.gateway.save_last_recipient(&self.last_recipient));
        self.report("recipients", saved)
    }

    /// Forget `name`; clears the default recipient if it was this one.
    pub fn remove_recipient(&mut self, name: &str) -> Result<(), JournalError> {
        let removed = self.recipients.remove(name);
        let was_default = !name.is_empty() && self.last_recipient == name;
        if !removed && !was_default {
            return Ok(());
        }
        if was_default {
            self.last_recipient.clear();
        }
        self.notify(StateChange::Recipients);

        let mut saved = self.gateway.save_recipients(&self.recipients);
        if was_default {
            saved = saved.and_then(|()| self.gateway.save_last_recipient(&self.last_recipient));
        }
        self.report("recipients", saved)
    }

    // ── Custom vocabulary ───────────────────────────────────

    pub fn add_custom_symptom(&mut self, symptom: &str) -> Result<(), JournalError> {
        if symptom.is_empty() || self.custom_symptoms.iter().any(|s| s == symptom) {
            return Ok(());
        }
        self.custom_symptoms.push(symptom.to_string());
        self.notify(StateChange::CustomSymptoms);

        let saved = self.gateway.save_custom_symptoms(&self.custom_symptoms);
        self.report("custom symptoms", saved)
    }

    pub fn remove_custom_symptom(&mut self, symptom: &str) -> Result<(), JournalError> {
        self.custom_symptoms.retain(|s| s != symptom);
        self.notify(StateChange::CustomSymptoms);

        let saved = self.gateway.save_custom_symptoms(&self.custom_symptoms);
        self.report("custom symptoms", saved)
    }

    // ── Profile & preferences ───────────────────────────────

    /// Replace the singleton profile. Invalid profiles leave state untouched.
    pub fn update_profile(&mut self, profile: UserProfile) -> Result<(), JournalError> {
        if let Some(reason) = profile.validation_error() {
            return Err(JournalError::InvalidProfile(reason));
        }
        let saved = self.gateway.save_profile(&profile);
        self.profile = Some(profile);
        self.notify(StateChange::Profile);
        self.report("user profile", saved)
    }

    pub fn set_dark_mode(&mut self, enabled: bool) -> Result<(), JournalError> {
        self.display.dark_mode = enabled;
        self.save_display()
    }

    pub fn toggle_dark_mode(&mut self) -> Result<(), JournalError> {
        self.display.dark_mode = !self.display.dark_mode;
        self.save_display()
    }

    pub fn toggle_system_appearance(&mut self) -> Result<(), JournalError> {
        self.display.use_system_appearance = !self.display.use_system_appearance;
        self.save_display()
    }

    // ── Internals ───────────────────────────────────────────

    fn save_display(&mut self) -> Result<(), JournalError> {
        self.notify(StateChange::DisplayPreferences);
        let saved = self.gateway.save_display_preferences(&self.display);
        self.report("display preferences", saved)
    }

    fn compute_trend_estimate(&self) -> Option<IllnessEstimate> {
        let observed = self.timeline.recent_symptoms(self.clock.now());
        matcher::estimate_recent_trend(&self.trend_catalog, &observed)
    }

    fn refresh_estimate(&mut self) {
        let estimate = self.compute_trend_estimate();
        if estimate != self.estimate {
            tracing::debug!(
                illness = estimate.as_ref().map(|e| e.illness.as_str()),
                "Illness estimate changed"
            );
            self.estimate = estimate;
            self.notify(StateChange::Estimate);
        }
    }

    fn notify(&self, change: StateChange) {
        // No subscribers is fine
        let _ = self.changes.send(change);
    }

    fn report(&self, what: &str, result: Result<(), StorageError>) -> Result<(), JournalError> {
        result.map_err(|e| {
            tracing::warn!(entity = what, error = %e, "Persisting journal state failed");
            JournalError::Storage(e)
        })
    }
}

impl std::fmt::Debug for JournalState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JournalState")
            .field("entries", &self.timeline.len())
            .field("has_profile", &self.profile.is_some())
            .field("estimate", &self.estimate.as_ref().map(|e| &e.illness))
            .finish_non_exhaustive()
    }
}

fn or_default<T: Default>(what: &str, loaded: Result<T, StorageError>) -> T {
    loaded.unwrap_or_else(|e| {
        tracing::warn!(entity = what, error = %e, "Stored data unreadable, starting empty");
        T::default()
    })
}
