//! Rule-based illness matching.
//!
//! Two deliberately different policies live here:
//!
//! - [`estimate`]: every pattern must clear a per-illness floor (match
//!   count and coverage, stricter for serious conditions) before the
//!   highest coverage wins.
//! - [`estimate_recent_trend`]: coverage is weighted by the pattern's base
//!   confidence and the best score only has to beat a flat cutoff.
//!
//! Both iterate the catalog in insertion order and only replace the
//! current best on a strictly higher score, so ties go to the earlier
//! pattern and results are reproducible.

use std::collections::BTreeSet;

use crate::catalog::{Catalog, IllnessPattern};
use crate::models::{IllnessEstimate, SymptomEntry};

/// Recent-trend scores must be strictly above this to count.
pub const TREND_SCORE_CUTOFF: f64 = 0.3;

/// Minimum evidence a pattern needs under the full estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchThreshold {
    pub min_matches: usize,
    pub min_confidence: f64,
}

impl MatchThreshold {
    pub const STANDARD: Self = Self {
        min_matches: 3,
        min_confidence: 0.4,
    };

    pub const SERIOUS: Self = Self {
        min_matches: 4,
        min_confidence: 0.5,
    };

    pub fn for_pattern(pattern: &IllnessPattern) -> Self {
        if pattern.is_serious {
            Self::SERIOUS
        } else {
            Self::STANDARD
        }
    }

    fn accepts(&self, score: &PatternScore<'_>) -> bool {
        score.matched.len() >= self.min_matches && score.coverage >= self.min_confidence
    }
}

/// Overlap between the observed set and one pattern.
#[derive(Debug, Clone)]
pub struct PatternScore<'a> {
    pub pattern: &'a IllnessPattern,
    /// Matched tokens in pattern order.
    pub matched: Vec<&'a str>,
    /// `matched / pattern size`, in `[0, 1]`.
    pub coverage: f64,
}

/// Score a single pattern. `None` for a pattern with no symptoms.
pub fn score_pattern<'a>(
    pattern: &'a IllnessPattern,
    observed: &BTreeSet<String>,
) -> Option<PatternScore<'a>> {
    if pattern.symptoms.is_empty() {
        #[cfg(debug_assertions)]
        tracing::debug!(illness = %pattern.name, "Catalog pattern has no symptoms, skipped");
        return None;
    }

    let matched: Vec<&str> = pattern
        .symptoms
        .iter()
        .filter(|s| observed.contains(s.as_str()))
        .map(String::as_str)
        .collect();
    let coverage = matched.len() as f64 / pattern.symptoms.len() as f64;

    Some(PatternScore {
        pattern,
        matched,
        coverage,
    })
}

/// Collect tokens into the set form the matcher works on.
pub fn observed_set<I, S>(tokens: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    tokens.into_iter().map(Into::into).collect()
}

/// Full estimate: threshold per illness, then highest coverage.
pub fn estimate(catalog: &Catalog, observed: &BTreeSet<String>) -> Option<IllnessEstimate> {
    if observed.is_empty() {
        return None;
    }

    let mut best: Option<PatternScore<'_>> = None;
    for pattern in catalog.iter() {
        let Some(score) = score_pattern(pattern, observed) else {
            continue;
        };
        if !MatchThreshold::for_pattern(pattern).accepts(&score) {
            continue;
        }
        if best.as_ref().map_or(true, |b| score.coverage > b.coverage) {
            best = Some(score);
        }
    }

    best.map(|score| {
        let confidence = score.coverage;
        into_estimate(catalog, score, confidence)
    })
}

/// Full estimate over the current selection plus every token of `recent`.
pub fn estimate_combined(
    catalog: &Catalog,
    current: &[String],
    recent: &[&SymptomEntry],
) -> Option<IllnessEstimate> {
    let observed: BTreeSet<String> = current
        .iter()
        .chain(recent.iter().flat_map(|e| e.symptoms.iter()))
        .cloned()
        .collect();
    estimate(catalog, &observed)
}

/// Lightweight estimate: weighted coverage against a flat cutoff.
pub fn estimate_recent_trend(
    catalog: &Catalog,
    observed: &BTreeSet<String>,
) -> Option<IllnessEstimate> {
    if observed.is_empty() {
        return None;
    }

    let mut best: Option<(PatternScore<'_>, f64)> = None;
    for pattern in catalog.iter() {
        let Some(score) = score_pattern(pattern, observed) else {
            continue;
        };
        let weighted = score.coverage * pattern.base_confidence.unwrap_or(1.0);
        if best.as_ref().map_or(true, |(_, w)| weighted > *w) {
            best = Some((score, weighted));
        }
    }

    match best {
        Some((score, weighted)) if weighted > TREND_SCORE_CUTOFF => {
            Some(into_estimate(catalog, score, weighted))
        }
        _ => None,
    }
}

fn into_estimate(catalog: &Catalog, score: PatternScore<'_>, confidence: f64) -> IllnessEstimate {
    let name = score.pattern.name.as_str();
    IllnessEstimate {
        illness: name.to_string(),
        confidence: confidence.clamp(0.0, 1.0),
        symptoms: score.matched.iter().map(|s| (*s).to_string()).collect(),
        recommendations: catalog.recommendations_for(name).to_vec(),
        avoid_actions: catalog.avoid_actions_for(name).to_vec(),
    }
}
