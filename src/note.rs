//! Absence note drafting.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::models::{Severity, UserProfile};

/// Signature used when no profile has been saved.
pub const SIGNATURE_PLACEHOLDER: &str = "[Your Name]";

#[derive(Debug, Clone)]
pub struct NoteRequest<'a> {
    pub recipient: &'a str,
    pub symptoms: &'a BTreeSet<String>,
    pub severity: Severity,
    pub profile: Option<&'a UserProfile>,
    pub date: NaiveDate,
}

/// Render the note text handed to the share sheet.
pub fn draft_absence_note(request: &NoteRequest<'_>) -> String {
    let symptoms = request
        .symptoms
        .iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    let signature = request
        .profile
        .map(|p| p.name.as_str())
        .filter(|name| !name.trim().is_empty())
        .unwrap_or(SIGNATURE_PLACEHOLDER);

    format!(
        "Dear {recipient},\n\
         \n\
         I am writing to inform you that I am currently experiencing health issues that require me to be absent. \
         I have been experiencing {symptoms} with a severity level of {severity}.\n\
         \n\
         I will keep you updated on my condition and return as soon as I am well enough to do so.\n\
         \n\
         Thank you for your understanding.\n\
         \n\
         Best regards,\n\
         {signature}\n\
         \n\
         Date: {date}",
        recipient = request.recipient,
        severity = request.severity,
        date = request.date.format("%b %-d, %Y"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Gender;

    fn symptoms() -> BTreeSet<String> {
        ["Fever", "Cough"].iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn note_contains_all_parts() {
        let profile = UserProfile {
            name: "Alex Kim".into(),
            occupation: "Engineer".into(),
            region: "Australia".into(),
            age: 29,
            gender: Gender::Male,
        };
        let symptoms = symptoms();
        let note = draft_absence_note(&NoteRequest {
            recipient: "Dr. Okafor",
            symptoms: &symptoms,
            severity: Severity::new(6).unwrap(),
            profile: Some(&profile),
            date: NaiveDate::from_ymd_opt(2025, 3, 7).unwrap(),
        });

        assert!(note.starts_with("Dear Dr. Okafor,\n\n"));
        assert!(note.contains("experiencing Cough, Fever with a severity level of 6/10."));
        assert!(note.contains("Best regards,\nAlex Kim\n"));
        assert!(note.ends_with("Date: Mar 7, 2025"));
    }

    #[test]
    fn placeholder_signature_without_profile() {
        let symptoms = symptoms();
        let note = draft_absence_note(&NoteRequest {
            recipient: "Team",
            symptoms: &symptoms,
            severity: Severity::new(3).unwrap(),
            profile: None,
            date: NaiveDate::from_ymd_opt(2025, 11, 20).unwrap(),
        });
        assert!(note.contains("Best regards,\n[Your Name]\n"));
    }
}
