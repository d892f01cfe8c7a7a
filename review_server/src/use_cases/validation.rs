// Field checks applied before anything reaches a store.

const MAX_HOTEL_NAME_LEN: usize = 200;
const MAX_REVIEW_LEN: usize = 5000;
const MAX_NOTE_LEN: usize = 2000;
const MAX_PERSON_NAME_LEN: usize = 64;
const MIN_PASSWORD_LEN: usize = 8;
// bcrypt only reads the first 72 bytes.
const MAX_PASSWORD_BYTES: usize = 72;

pub const MIN_RATING: f64 = 1.0;
pub const MAX_RATING: f64 = 5.0;

pub fn hotel_name(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.chars().count() > MAX_HOTEL_NAME_LEN {
        return None;
    }
    Some(trimmed.to_string())
}

pub fn rating(value: f64) -> bool {
    value.is_finite() && (MIN_RATING..=MAX_RATING).contains(&value)
}

// Review text may be empty (star-only reviews) but is bounded.
pub fn review_text(value: &str) -> bool {
    value.chars().count() <= MAX_REVIEW_LEN
}

// Replies and report reasons.
pub fn note(value: &str) -> bool {
    !value.trim().is_empty() && value.chars().count() <= MAX_NOTE_LEN
}

pub fn person_name(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.chars().count() > MAX_PERSON_NAME_LEN {
        return None;
    }
    Some(trimmed.to_string())
}

// Minimal shape check: something on both sides of a single '@'.
pub fn email(value: &str) -> Option<String> {
    let normalized = value.trim().to_ascii_lowercase();
    let (local, domain) = normalized.split_once('@')?;
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return None;
    }
    if normalized.chars().any(char::is_whitespace) {
        return None;
    }
    Some(normalized)
}

pub fn password(value: &str) -> bool {
    value.chars().count() >= MIN_PASSWORD_LEN && value.len() <= MAX_PASSWORD_BYTES
}
