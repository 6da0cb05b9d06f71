// Field extraction engine
// Implements: name, email, phone, and skill heuristics over rendered résumé text.
// All extractors are pure functions — no I/O, no failure; a heuristic that
// finds nothing degrades to a sentinel string, never an error.

pub mod contact;
pub mod handlers;
pub mod name;
pub mod skills;

use crate::extract::skills::SkillCatalog;
use crate::models::resume::ResumeRecord;

/// Runs every field extractor over the rendered text and assembles the
/// result. Accepts any input, including the empty string, and always returns
/// a fully-populated record (sentinels for everything on empty input).
pub fn parse_resume(text: &str, catalog: &SkillCatalog) -> ResumeRecord {
    ResumeRecord {
        name: name::extract_name(text),
        email: contact::extract_email(text),
        phone: contact::extract_phone(text),
        skills: skills::extract_skills(text, catalog),
    }
}

/// Title-cases a string the way display names and headings are rendered
/// throughout the service: the first letter of each letter-run is
/// uppercased, the rest lowercased, and non-letters pass through unchanged.
/// "JOHN DOE" → "John Doe", "power bi" → "Power Bi", "c++" → "C++".
pub(crate) fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut prev_alpha = false;
    for ch in input.chars() {
        if ch.is_alphabetic() {
            if prev_alpha {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(ch);
            prev_alpha = false;
        }
    }
    out
}
