//! Symptom timeline: the dated, append-only log of reported episodes.
//!
//! Entries are never edited after append. The only removal is a full
//! [`SymptomTimeline::clear`]. Window queries take "now" explicitly so they
//! can be tested without a wall clock.

use std::collections::BTreeSet;

use chrono::{DateTime, Datelike, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::config::RECENT_WINDOW_DAYS;
use crate::models::{HistoryRange, SymptomEntry};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SymptomTimeline {
    entries: Vec<SymptomEntry>,
}

impl SymptomTimeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: Vec<SymptomEntry>) -> Self {
        Self { entries }
    }

    pub fn append(&mut self, entry: SymptomEntry) {
        self.entries.push(entry);
    }

    /// All entries in append order.
    pub fn all(&self) -> &[SymptomEntry] {
        &self.entries
    }

    /// Entries with `date >= since`.
    pub fn windowed(&self, since: DateTime<Utc>) -> Vec<&SymptomEntry> {
        self.entries.iter().filter(|e| e.date >= since).collect()
    }

    /// Entries inside the recent window ending at `now` (inclusive start).
    pub fn recent(&self, now: DateTime<Utc>) -> Vec<&SymptomEntry> {
        self.windowed(recent_window_start(now))
    }

    /// Distinct tokens reported inside the recent window.
    pub fn recent_symptoms(&self, now: DateTime<Utc>) -> BTreeSet<String> {
        self.recent(now)
            .into_iter()
            .flat_map(|e| e.symptoms.iter().cloned())
            .collect()
    }

    /// Entries in the same calendar week, month or year as `now` (UTC).
    pub fn in_range(&self, range: HistoryRange, now: DateTime<Utc>) -> Vec<&SymptomEntry> {
        self.entries
            .iter()
            .filter(|e| same_period(range, e.date, now))
            .collect()
    }

    /// Discard everything. Irreversible.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn contains_id(&self, id: u64) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    /// Sequence number for the next entry.
    pub fn next_id(&self) -> u64 {
        self.entries.iter().map(|e| e.id).max().unwrap_or(0) + 1
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Start of the recent window: `now` minus [`RECENT_WINDOW_DAYS`].
pub fn recent_window_start(now: DateTime<Utc>) -> DateTime<Utc> {
    now - Duration::days(RECENT_WINDOW_DAYS)
}

fn same_period(range: HistoryRange, date: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    match range {
        HistoryRange::Week => date.iso_week() == now.iso_week(),
        HistoryRange::Month => date.year() == now.year() && date.month() == now.month(),
        HistoryRange::Year => date.year() == now.year(),
    }
}
