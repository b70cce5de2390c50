use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Someone an absence note was addressed to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipientInfo {
    pub id: Uuid,
    pub name: String,
    pub last_used: DateTime<Utc>,
}

impl RecipientInfo {
    pub fn new(name: impl Into<String>, last_used: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            last_used,
        }
    }

    /// Short "last used" caption shown next to the suggestion.
    pub fn last_used_label(&self, now: DateTime<Utc>) -> String {
        match (now - self.last_used).num_days() {
            i64::MIN..=0 => "Last used today".into(),
            1 => "Used 1 day ago".into(),
            days => format!("Used {days} days ago"),
        }
    }
}

/// Bounded most-recently-used recipient list, newest first, unique by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecentRecipients {
    entries: Vec<RecipientInfo>,
}

impl RecentRecipients {
    /// Rebuild from stored entries: the first occurrence of a name wins,
    /// then the list is cut to `capacity`.
    pub fn from_vec(entries: Vec<RecipientInfo>, capacity: usize) -> Self {
        let mut unique: Vec<RecipientInfo> = Vec::with_capacity(entries.len().min(capacity));
        for entry in entries {
            if unique.len() == capacity {
                break;
            }
            if !unique.iter().any(|r| r.name == entry.name) {
                unique.push(entry);
            }
        }
        Self { entries: unique }
    }

    /// Move `name` to the front (inserting it if new) and drop the overflow.
    pub fn touch(&mut self, name: &str, now: DateTime<Utc>, capacity: usize) {
        self.entries.retain(|r| r.name != name);
        self.entries.insert(0, RecipientInfo::new(name, now));
        self.entries.truncate(capacity);
    }

    /// Remove every entry with this name. Returns whether anything was removed.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|r| r.name != name);
        self.entries.len() != before
    }

    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|r| r.name.as_str()).collect()
    }

    pub fn as_slice(&self) -> &[RecipientInfo] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
