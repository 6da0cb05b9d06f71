//! Email and phone heuristics.
//!
//! Both are first-match regex scans. The phone pattern is deliberately loose
//! and can pick up other long digit runs (postal codes, order numbers) —
//! that imprecision is a known property of the heuristic, kept as-is.

use once_cell::sync::Lazy;
use regex::Regex;

/// Returned when no email-like substring exists. Intentionally differs from
/// the name/phone sentinel wording; downstream consumers rely on the exact
/// text of each sentinel.
pub const EMAIL_SENTINEL: &str = "Not Found";

/// Returned when no phone-like digit run exists.
pub const PHONE_SENTINEL: &str = "Phone Not Found";

static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}")
        .expect("email pattern must compile")
});

/// Optional "+" and country code, then two or three groups of 3–5 digits
/// with optional space/hyphen separators; the first group may be
/// parenthesized. Covers "+91 98765-43210", "9876543210", "+1 (555) 123-4567".
static PHONE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\+?\d{1,3}[\s-]?\(?\d{3,5}\)?[\s-]?\d{3,5}(?:[\s-]?\d{3,5})?")
        .expect("phone pattern must compile")
});

/// Returns the first email-like substring verbatim, or [`EMAIL_SENTINEL`].
pub fn extract_email(text: &str) -> String {
    EMAIL
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| EMAIL_SENTINEL.to_string())
}

/// Returns the first phone-like digit run, cleaned down to digits plus a
/// single leading "+", or [`PHONE_SENTINEL`].
pub fn extract_phone(text: &str) -> String {
    match PHONE.find(text) {
        Some(m) => clean_phone(m.as_str()),
        None => PHONE_SENTINEL.to_string(),
    }
}

fn clean_phone(raw: &str) -> String {
    let mut cleaned = String::with_capacity(raw.len());
    if raw.starts_with('+') {
        cleaned.push('+');
    }
    cleaned.extend(raw.chars().filter(char::is_ascii_digit));
    cleaned
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_first_match_verbatim() {
        let text = "Reach me at priya.sharma+jobs@example.co.in or at the office.";
        assert_eq!(extract_email(text), "priya.sharma+jobs@example.co.in");
    }

    #[test]
    fn test_email_picks_first_of_several() {
        let text = "a@b.com c@d.org";
        assert_eq!(extract_email(text), "a@b.com");
    }

    #[test]
    fn test_email_sentinel_exact_wording() {
        assert_eq!(extract_email("no address in this text"), "Not Found");
    }

    #[test]
    fn test_email_rejects_single_letter_tld() {
        assert_eq!(extract_email("broken@host.x"), EMAIL_SENTINEL);
    }

    #[test]
    fn test_phone_with_country_code_and_separators() {
        assert_eq!(extract_phone("Contact: +91 98765-43210"), "+919876543210");
    }

    #[test]
    fn test_phone_bare_ten_digit_run() {
        assert_eq!(extract_phone("call 9876543210 now"), "9876543210");
    }

    #[test]
    fn test_phone_parenthesized_area_code() {
        assert_eq!(extract_phone("+1 (555) 123-4567"), "+15551234567");
    }

    #[test]
    fn test_phone_sentinel_exact_wording() {
        assert_eq!(extract_phone("no digits here"), "Phone Not Found");
    }

    #[test]
    fn test_phone_short_runs_do_not_match() {
        // Fewer than seven consecutive-group digits never qualifies.
        assert_eq!(extract_phone("room 42, floor 3"), PHONE_SENTINEL);
    }

    #[test]
    fn test_phone_false_positives_on_long_digit_runs_are_accepted() {
        // Known imprecision: any long digit run is treated as a phone.
        assert_eq!(extract_phone("Order #123456789"), "123456789");
    }

    #[test]
    fn test_phone_keeps_only_leading_plus() {
        assert_eq!(extract_phone("tel +44 20555 12345"), "+442055512345");
    }
}
