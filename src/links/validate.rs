//! Input validation and short-code generation for the creation path.

use std::iter;

use url::Url;

/// Alphabet for generated short codes.
const CODE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Length of generated short codes.
pub const GENERATED_CODE_LEN: usize = 6;

/// Validity window applied when the user leaves the field blank.
pub const DEFAULT_VALIDITY_MINUTES: i64 = 30;

/// Check that `raw` parses as an absolute URL with a scheme and a host.
pub fn is_valid_url(raw: &str) -> bool {
    match Url::parse(raw) {
        Ok(parsed) => parsed.has_host(),
        Err(_) => false,
    }
}

/// Check a caller-supplied code against the letters/digits/hyphens policy.
pub fn is_valid_code(code: &str) -> bool {
    !code.is_empty() && code.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

/// Parse validity minutes from raw form input. Absent or blank input selects
/// the default; anything else must parse as a positive integer.
pub fn parse_validity_minutes(raw: Option<&str>) -> Option<i64> {
    let raw = raw.map(str::trim).unwrap_or("");
    if raw.is_empty() {
        return Some(DEFAULT_VALIDITY_MINUTES);
    }
    match raw.parse::<i64>() {
        Ok(minutes) if minutes > 0 => Some(minutes),
        _ => None,
    }
}

/// Generate a random short code from the 62-character alphanumeric alphabet.
/// The thread-local RNG is cryptographically secure.
pub fn generate_code() -> String {
    iter::repeat_with(|| CODE_ALPHABET[rand::random_range(0..CODE_ALPHABET.len())] as char)
        .take(GENERATED_CODE_LEN)
        .collect()
}
