//! Test data factories for creating valid test fixtures.
//!
//! Each factory function creates a complete, valid object with sensible defaults.
//! Use the closure parameter to override specific fields as needed.

use chrono::{DateTime, TimeZone, Utc};

use crate::{
    application::use_cases::waitlist::WaitlistSubmission,
    domain::entities::waitlist_entry::WaitlistEntry,
};

/// Create a submission that passes every validation rule.
pub fn create_test_submission(
    overrides: impl FnOnce(&mut WaitlistSubmission),
) -> WaitlistSubmission {
    let mut submission = WaitlistSubmission {
        email: "asha@example.com".to_string(),
        name: "Asha Patel".to_string(),
        date_of_birth: "01/01/1995".to_string(),
        city: "Pune".to_string(),
        state: "maharashtra".to_string(),
        gender: "female".to_string(),
        looking_for: "marriage".to_string(),
    };
    overrides(&mut submission);
    submission
}

/// Create a stored entry with sensible defaults.
pub fn create_test_entry(overrides: impl FnOnce(&mut WaitlistEntry)) -> WaitlistEntry {
    let mut entry = WaitlistEntry {
        email: "asha@example.com".to_string(),
        full_name: "Asha Patel".to_string(),
        first_name: Some("Asha".to_string()),
        last_name: Some("Patel".to_string()),
        date_of_birth: "01/01/1995".to_string(),
        city: "Pune".to_string(),
        state: "maharashtra".to_string(),
        gender: "female".to_string(),
        looking_for: "marriage".to_string(),
        created_at: test_datetime(),
        updated_at: test_datetime(),
    };
    overrides(&mut entry);
    entry
}

/// Form body as the browser would post it.
pub fn test_form_body(overrides: &[(&str, &str)]) -> Vec<(String, String)> {
    let mut fields: Vec<(String, String)> = [
        ("fullName", "Asha Patel"),
        ("email", "asha@example.com"),
        ("dateOfBirth", "1995-01-01"),
        ("city", "Pune"),
        ("state", "maharashtra"),
        ("gender", "female"),
        ("lookingFor", "marriage"),
    ]
    .iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();

    for (key, value) in overrides {
        if let Some(field) = fields.iter_mut().find(|(k, _)| k == key) {
            field.1 = value.to_string();
        }
    }
    fields
}

pub fn test_datetime() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap()
}
