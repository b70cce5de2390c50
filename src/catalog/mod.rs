//! Static illness tables.
//!
//! Each illness is one [`IllnessPattern`] record holding its symptom set,
//! advisories and thresholds together, so the three can never drift apart.
//! A [`Catalog`] preserves insertion order; the matcher relies on that
//! order to break ties deterministically.

pub mod standard;
pub mod trend;

use std::collections::HashMap;

pub use standard::standard_catalog;
pub use trend::recent_trend_catalog;

/// Quick-pick symptoms offered by the input form before any custom ones.
pub const COMMON_SYMPTOMS: &[&str] = &[
    "Fever",
    "Cough",
    "Sore Throat",
    "Headache",
    "Body Aches",
    "Nausea",
    "Vomiting",
    "Diarrhea",
    "Fatigue",
    "Chills",
];

#[derive(Debug, Clone, PartialEq)]
pub struct IllnessPattern {
    pub name: String,
    /// Canonical tokens, compared case-sensitively. Order is kept for output.
    pub symptoms: Vec<String>,
    pub recommendations: Vec<String>,
    pub avoid_actions: Vec<String>,
    /// Serious conditions need four matches and 50% coverage.
    pub is_serious: bool,
    /// Weight applied by the recent-trend scorer; `None` means 1.0.
    pub base_confidence: Option<f64>,
}

impl IllnessPattern {
    pub fn new(name: &str, symptoms: &[&str]) -> Self {
        let mut unique: Vec<String> = Vec::with_capacity(symptoms.len());
        for s in symptoms {
            if !unique.iter().any(|u| u == s) {
                unique.push((*s).to_string());
            }
        }
        Self {
            name: name.to_string(),
            symptoms: unique,
            recommendations: Vec::new(),
            avoid_actions: Vec::new(),
            is_serious: false,
            base_confidence: None,
        }
    }

    pub fn serious(mut self) -> Self {
        self.is_serious = true;
        self
    }

    pub fn with_base_confidence(mut self, weight: f64) -> Self {
        self.base_confidence = Some(weight.clamp(0.0, 1.0));
        self
    }

    pub fn recommend(mut self, items: &[&str]) -> Self {
        self.recommendations = items.iter().map(|s| (*s).to_string()).collect();
        self
    }

    pub fn avoid(mut self, items: &[&str]) -> Self {
        self.avoid_actions = items.iter().map(|s| (*s).to_string()).collect();
        self
    }

    pub fn contains(&self, token: &str) -> bool {
        self.symptoms.iter().any(|s| s == token)
    }
}

/// Read-only illness table indexed by name.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    patterns: Vec<IllnessPattern>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog. A repeated name keeps the first definition.
    pub fn new(patterns: Vec<IllnessPattern>) -> Self {
        let mut kept = Vec::with_capacity(patterns.len());
        let mut index = HashMap::with_capacity(patterns.len());
        for pattern in patterns {
            if index.contains_key(&pattern.name) {
                tracing::warn!(illness = %pattern.name, "Duplicate catalog entry ignored");
                continue;
            }
            index.insert(pattern.name.clone(), kept.len());
            kept.push(pattern);
        }
        Self {
            patterns: kept,
            index,
        }
    }

    /// Patterns in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &IllnessPattern> {
        self.patterns.iter()
    }

    pub fn get(&self, illness: &str) -> Option<&IllnessPattern> {
        self.index.get(illness).map(|&i| &self.patterns[i])
    }

    /// Recommendations for an illness; empty for unknown names.
    pub fn recommendations_for(&self, illness: &str) -> &[String] {
        self.get(illness)
            .map(|p| p.recommendations.as_slice())
            .unwrap_or(&[])
    }

    /// Avoid-actions for an illness; empty for unknown names.
    pub fn avoid_actions_for(&self, illness: &str) -> &[String] {
        self.get(illness)
            .map(|p| p.avoid_actions.as_slice())
            .unwrap_or(&[])
    }

    pub fn names(&self) -> Vec<&str> {
        self.patterns.iter().map(|p| p.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SERIOUS: &[&str] = &[
        "Pneumonia",
        "COVID-19",
        "RSV",
        "Bronchiolitis",
        "Kidney Stones",
        "Hypertension",
        "Panic Attack",
        "Heat Exhaustion",
        "Dehydration",
        "Hypoglycemia",
    ];

    #[test]
    fn standard_catalog_shape() {
        let catalog = standard_catalog();
        assert_eq!(catalog.len(), 31);
        assert_eq!(catalog.names()[0], "Common Cold");
        assert_eq!(catalog.names()[30], "Kidney Stones");
    }

    #[test]
    fn serious_flags_match_list() {
        let catalog = standard_catalog();
        for pattern in catalog.iter() {
            assert_eq!(
                pattern.is_serious,
                SERIOUS.contains(&pattern.name.as_str()),
                "{}",
                pattern.name
            );
        }
    }

    #[test]
    fn advisory_lookup_never_fails() {
        for catalog in [standard_catalog(), recent_trend_catalog()] {
            for name in catalog.names() {
                // Asthma and friends have no advisories: empty, not missing
                let _ = catalog.recommendations_for(name).len();
                let _ = catalog.avoid_actions_for(name).len();
            }
        }
        let catalog = standard_catalog();
        assert!(catalog.recommendations_for("Asthma").is_empty());
        assert!(catalog.avoid_actions_for("Not An Illness").is_empty());
        assert_eq!(catalog.recommendations_for("Flu").len(), 8);
    }

    #[test]
    fn every_standard_pattern_is_matchable() {
        for pattern in standard_catalog().iter() {
            assert!(!pattern.symptoms.is_empty(), "{}", pattern.name);
        }
    }

    #[test]
    fn trend_catalog_weights() {
        let catalog = recent_trend_catalog();
        let weights: Vec<f64> = catalog
            .iter()
            .map(|p| p.base_confidence.unwrap_or(1.0))
            .collect();
        assert_eq!(weights, [0.8, 0.9, 0.85, 0.75, 0.8]);
        assert!(catalog.iter().all(|p| p.symptoms.len() == 5));
    }

    #[test]
    fn duplicate_names_keep_first_definition() {
        let catalog = Catalog::new(vec![
            IllnessPattern::new("Flu", &["fever"]),
            IllnessPattern::new("Flu", &["cough"]),
        ]);
        assert_eq!(catalog.len(), 1);
        assert!(catalog.get("Flu").unwrap().contains("fever"));
    }

    #[test]
    fn pattern_tokens_are_deduplicated() {
        let pattern = IllnessPattern::new("X", &["a", "b", "a"]);
        assert_eq!(pattern.symptoms, ["a", "b"]);
    }

    #[test]
    fn token_comparison_is_case_sensitive() {
        let pattern = IllnessPattern::new("X", &["Fever"]);
        assert!(pattern.contains("Fever"));
        assert!(!pattern.contains("fever"));
    }

    #[test]
    fn common_symptoms_match_trend_tokens() {
        let trend = recent_trend_catalog();
        assert!(trend.get("Flu").unwrap().contains(COMMON_SYMPTOMS[0]));
        assert_eq!(COMMON_SYMPTOMS.len(), 10);
    }
}
