use serde::Serialize;

use super::{shortlist, ShortlistQuery, STRONG_MATCH_THRESHOLD};
use crate::talent::detail::initials;
use crate::talent::directory::TalentDirectory;
use crate::talent::domain::{Availability, ProjectMatch};

/// Shown under the table when every row is filtered out.
pub const NO_MATCHES_MESSAGE: &str = "No employees match the current filters.";

/// One table row, resolved against the directory for avatar data. Unknown
/// employee ids fall back to initials without failing the render.
#[derive(Debug, Clone, Serialize)]
pub struct MatchRowView {
    pub employee_id: String,
    pub employee_name: String,
    pub initials: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub role: String,
    pub match_score: u8,
    pub skills_matched: Vec<String>,
    pub skills_missing: Vec<String>,
    pub availability: Availability,
    pub availability_label: &'static str,
    pub growth_potential: u8,
}

impl MatchRowView {
    pub fn from_row(row: &ProjectMatch, directory: &TalentDirectory) -> Self {
        let avatar = directory
            .employee(&row.employee_id)
            .and_then(|employee| employee.avatar.clone());
        Self {
            employee_id: row.employee_id.0.clone(),
            employee_name: row.employee_name.clone(),
            initials: initials(&row.employee_name),
            avatar,
            role: row.role.clone(),
            match_score: row.match_score,
            skills_matched: row.skills_matched.clone(),
            skills_missing: row.skills_missing.clone(),
            availability: row.availability,
            availability_label: row.availability.label(),
            growth_potential: row.growth_potential,
        }
    }
}

/// Headline counts above the shortlist table.
#[derive(Debug, Clone, Serialize)]
pub struct ShortlistSummary {
    pub total_candidates: usize,
    pub shown: usize,
    pub strong_candidates: usize,
    pub average_match_score: u8,
}

impl ShortlistSummary {
    fn from_rows(total_candidates: usize, rows: &[&ProjectMatch]) -> Self {
        let strong_candidates = rows
            .iter()
            .filter(|row| row.match_score >= STRONG_MATCH_THRESHOLD)
            .count();
        let average_match_score = if rows.is_empty() {
            0
        } else {
            let total: u32 = rows.iter().map(|row| u32::from(row.match_score)).sum();
            (f64::from(total) / rows.len() as f64).round() as u8
        };
        Self {
            total_candidates,
            shown: rows.len(),
            strong_candidates,
            average_match_score,
        }
    }
}

/// Everything the matching screen needs for one render.
#[derive(Debug, Clone, Serialize)]
pub struct ShortlistView {
    pub rows: Vec<MatchRowView>,
    pub summary: ShortlistSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<&'static str>,
}

impl ShortlistView {
    pub fn build(directory: &TalentDirectory, query: &ShortlistQuery) -> Self {
        let board = directory.match_board();
        let selected = shortlist(board, query);
        let summary = ShortlistSummary::from_rows(board.len(), &selected);
        let rows: Vec<MatchRowView> = selected
            .iter()
            .map(|row| MatchRowView::from_row(row, directory))
            .collect();
        let empty_message = rows.is_empty().then_some(NO_MATCHES_MESSAGE);
        Self {
            rows,
            summary,
            empty_message,
        }
    }
}
