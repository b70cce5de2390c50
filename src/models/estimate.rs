use serde::{Deserialize, Serialize};

/// Best-matching illness for a set of observed symptoms.
///
/// Always derived from the timeline, never persisted on its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IllnessEstimate {
    pub illness: String,
    /// In `[0, 1]`.
    pub confidence: f64,
    /// Observed tokens that matched the pattern, in catalog order.
    pub symptoms: Vec<String>,
    pub recommendations: Vec<String>,
    pub avoid_actions: Vec<String>,
}

impl IllnessEstimate {
    /// Confidence as a whole percentage, for display.
    pub fn confidence_percent(&self) -> u8 {
        (self.confidence.clamp(0.0, 1.0) * 100.0).round() as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confidence_percent_rounds() {
        let estimate = IllnessEstimate {
            illness: "Flu".into(),
            confidence: 0.666,
            symptoms: vec![],
            recommendations: vec![],
            avoid_actions: vec![],
        };
        assert_eq!(estimate.confidence_percent(), 67);
    }
}
