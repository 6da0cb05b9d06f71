//! Candidate-name heuristic.
//!
//! Names sit near the top of a résumé, so only the first few non-empty lines
//! are considered. Lines that carry digits or a document heading are skipped;
//! the first remaining line that looks like "two to four capitalized words"
//! wins. A whole-text regex scan is the fallback.

use once_cell::sync::Lazy;
use regex::Regex;

use super::title_case;

/// Returned when no name-like line or substring exists in the text.
pub const NAME_SENTINEL: &str = "Name Not Found";

/// Document headings that commonly appear above the candidate's name and
/// must never be mistaken for one. Matched case-insensitively as substrings.
const IGNORE_HEADINGS: &[&str] = &["resume", "curriculum", "vitae", "bio-data", "profile"];

/// Only the top of the document is scanned line-by-line.
const SCAN_LINE_LIMIT: usize = 10;

/// Fallback: 1–3 consecutive capitalized words anywhere in the text.
static CAPITALIZED_RUN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Z][a-z]+(?:\s[A-Z][a-z]+){0,2}\b")
        .expect("capitalized-run pattern must compile")
});

/// Extracts the candidate's name from rendered résumé text, title-cased.
/// Returns [`NAME_SENTINEL`] when nothing name-like is found.
pub fn extract_name(text: &str) -> String {
    let lines = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .take(SCAN_LINE_LIMIT);

    for line in lines {
        if line.chars().any(|c| c.is_ascii_digit()) {
            continue;
        }
        let lower = line.to_lowercase();
        if IGNORE_HEADINGS.iter().any(|word| lower.contains(word)) {
            continue;
        }

        let words: Vec<&str> = line.split_whitespace().collect();
        if !(2..=4).contains(&words.len()) {
            continue;
        }
        if !words
            .iter()
            .all(|w| w.chars().all(char::is_alphabetic))
        {
            continue;
        }

        // First qualifying line wins — matched by line order, never by score.
        if is_all_uppercase(line) || words.iter().all(|w| starts_uppercase(w)) {
            return title_case(line);
        }
    }

    if let Some(m) = CAPITALIZED_RUN.find(text) {
        return title_case(m.as_str());
    }

    NAME_SENTINEL.to_string()
}

/// True when the line has at least one cased character and no lowercase ones.
fn is_all_uppercase(line: &str) -> bool {
    let mut has_cased = false;
    for ch in line.chars() {
        if ch.is_lowercase() {
            return false;
        }
        if ch.is_uppercase() {
            has_cased = true;
        }
    }
    has_cased
}

fn starts_uppercase(word: &str) -> bool {
    word.chars().next().map(char::is_uppercase).unwrap_or(false)
}
