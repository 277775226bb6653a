use chrono::NaiveDate;
use validator::ValidateEmail;

/// Date format used for stored dates of birth.
pub const BIRTH_DATE_FORMAT: &str = "%d/%m/%Y";

/// Format emitted by `<input type="date">`.
const HTML_DATE_FORMAT: &str = "%Y-%m-%d";

/// Validates that the input looks like a valid email address
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    !email.is_empty() && email.validate_email()
}

/// Returns true when the trimmed value has at least `min` characters.
pub fn has_min_chars(value: &str, min: usize) -> bool {
    value.trim().chars().count() >= min
}

/// Parses a date of birth into the canonical `dd/MM/yyyy` string.
///
/// Accepts the canonical form as well as the ISO form a browser date picker
/// submits. Returns `None` for anything that is not a real calendar date.
pub fn normalize_birth_date(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(raw, BIRTH_DATE_FORMAT)
        .or_else(|_| NaiveDate::parse_from_str(raw, HTML_DATE_FORMAT))
        .ok()
        .map(|date| date.format(BIRTH_DATE_FORMAT).to_string())
}
