use std::collections::BTreeSet;

use crate::talent::domain::{Availability, ProjectMatch};

/// Predicates narrowing the match board, ANDed together. An empty search
/// string and empty sets impose no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShortlistFilter {
    pub search: String,
    pub required_skills: BTreeSet<String>,
    pub availability: BTreeSet<Availability>,
    pub min_match_score: u8,
}

impl ShortlistFilter {
    pub fn admits(&self, row: &ProjectMatch) -> bool {
        self.matches_search(row)
            && self.covers_required_skills(row)
            && self.matches_availability(row)
            && row.match_score >= self.min_match_score
    }

    /// Case-insensitive substring match against the candidate's name, role,
    /// or any matched skill. Missing skills are deliberately not searched.
    fn matches_search(&self, row: &ProjectMatch) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        row.employee_name.to_lowercase().contains(&needle)
            || row.role.to_lowercase().contains(&needle)
            || row
                .skills_matched
                .iter()
                .any(|skill| skill.to_lowercase().contains(&needle))
    }

    /// Every selected skill must appear verbatim among the row's matched skills.
    fn covers_required_skills(&self, row: &ProjectMatch) -> bool {
        self.required_skills
            .iter()
            .all(|required| row.skills_matched.iter().any(|skill| skill == required))
    }

    fn matches_availability(&self, row: &ProjectMatch) -> bool {
        self.availability.is_empty() || self.availability.contains(&row.availability)
    }
}
