use serde::{Deserialize, Serialize};

use super::enums::Gender;

/// The device owner's profile. At most one exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub occupation: String,
    pub region: String,
    pub age: u32,
    pub gender: Gender,
}

impl UserProfile {
    /// Returns the reason the profile cannot be saved, if any.
    pub fn validation_error(&self) -> Option<String> {
        if self.age == 0 {
            return Some("age must be a positive integer".into());
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(age: u32) -> UserProfile {
        UserProfile {
            name: "Sam Rivera".into(),
            occupation: "Librarian".into(),
            region: "Canada".into(),
            age,
            gender: Gender::Other,
        }
    }

    #[test]
    fn zero_age_is_invalid() {
        assert!(profile(0).validation_error().is_some());
        assert!(profile(34).validation_error().is_none());
    }

    #[test]
    fn json_round_trip_is_deep_equal() {
        let original = profile(34);
        let json = serde_json::to_string(&original).unwrap();
        assert!(json.contains(r#""gender":"Other""#));
        let back: UserProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(back, original);
    }
}
