use serde::{Deserialize, Serialize};

/// Appearance settings kept in the plain tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayPreferences {
    pub dark_mode: bool,
    pub use_system_appearance: bool,
}

impl Default for DisplayPreferences {
    fn default() -> Self {
        Self {
            dark_mode: false,
            use_system_appearance: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_follow_system() {
        let prefs = DisplayPreferences::default();
        assert!(!prefs.dark_mode);
        assert!(prefs.use_system_appearance);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let prefs: DisplayPreferences = serde_json::from_str(r#"{"dark_mode":true}"#).unwrap();
        assert!(prefs.dark_mode);
        assert!(prefs.use_system_appearance);
    }
}
