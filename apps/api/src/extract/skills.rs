//! Skill extraction against a fixed keyword catalog.

use super::title_case;

/// One catalog row: the lowercase keyword to match and its canonical
/// display form.
#[derive(Debug, Clone)]
pub struct SkillEntry {
    pub keyword: String,
    pub display: String,
}

/// Fixed, read-only list of skill keywords. Built once at startup and
/// injected wherever skills are matched, so tests can substitute a smaller
/// fixture. Never mutated at runtime.
#[derive(Debug, Clone)]
pub struct SkillCatalog {
    entries: Vec<SkillEntry>,
}

/// Keywords recognized out of the box. Declaration order is the order
/// extracted skills are reported in.
const DEFAULT_KEYWORDS: &[&str] = &[
    "python",
    "java",
    "c++",
    "sql",
    "html",
    "css",
    "javascript",
    "django",
    "flask",
    "pandas",
    "numpy",
    "machine learning",
    "deep learning",
    "data science",
    "excel",
    "power bi",
    "matplotlib",
    "tensorflow",
    "keras",
];

impl SkillCatalog {
    /// Builds a catalog from keyword strings. Keywords are lowercased for
    /// matching; display names are their title-cased forms.
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries = keywords
            .into_iter()
            .map(|kw| {
                let keyword = kw.as_ref().to_lowercase();
                let display = title_case(&keyword);
                SkillEntry { keyword, display }
            })
            .collect();
        Self { entries }
    }

    /// The built-in keyword set.
    pub fn with_defaults() -> Self {
        Self::new(DEFAULT_KEYWORDS.iter().copied())
    }

    pub fn entries(&self) -> &[SkillEntry] {
        &self.entries
    }
}

impl Default for SkillCatalog {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Returns the canonical display name of every catalog keyword contained in
/// the text, case-insensitively, deduplicated, in catalog declaration order.
pub fn extract_skills(text: &str, catalog: &SkillCatalog) -> Vec<String> {
    let lower = text.to_lowercase();
    let mut found: Vec<String> = Vec::new();
    for entry in catalog.entries() {
        if lower.contains(&entry.keyword) && !found.contains(&entry.display) {
            found.push(entry.display.clone());
        }
    }
    found
}
