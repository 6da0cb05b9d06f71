use serde::{Deserialize, Serialize};

/// Structured extraction result for one résumé.
///
/// Every field is always populated: a heuristic that finds nothing fills its
/// field with a sentinel string instead of leaving it absent. `skills` is
/// deduplicated and ordered by skill-catalog declaration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeRecord {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub skills: Vec<String>,
}
