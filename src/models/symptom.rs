use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Self-reported severity on the 1–10 slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Severity(u8);

impl Severity {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    pub fn new(value: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&value).then_some(Self(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Severity {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| {
            format!(
                "severity {value} outside {}..={}",
                Severity::MIN,
                Severity::MAX
            )
        })
    }
}

impl From<Severity> for u8 {
    fn from(severity: Severity) -> Self {
        severity.0
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.0, Self::MAX)
    }
}

/// One reported episode. Immutable once appended to the timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymptomEntry {
    pub id: u64,
    pub date: DateTime<Utc>,
    pub severity: Severity,
    /// Tokens as selected; duplicates are kept.
    pub symptoms: Vec<String>,
}

impl SymptomEntry {
    pub fn new(id: u64, date: DateTime<Utc>, severity: Severity, symptoms: Vec<String>) -> Self {
        Self {
            id,
            date,
            severity,
            symptoms,
        }
    }
}
