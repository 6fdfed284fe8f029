use serde::Serialize;

use crate::talent::domain::{Availability, GapPriority, SkillCategory};

#[derive(Debug, Clone, Serialize)]
pub struct CategoryCoverageEntry {
    pub category: SkillCategory,
    pub category_label: &'static str,
    pub skill_count: usize,
    pub average_proficiency: u8,
}

#[derive(Debug, Clone, Serialize)]
pub struct GapRowView {
    pub skill: String,
    pub current: u8,
    pub required: u8,
    pub gap: u8,
    pub coverage_pct: u8,
    pub priority: GapPriority,
    pub priority_label: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct TeamMemberEntry {
    pub employee_id: String,
    pub name: String,
    pub role: String,
    pub department: String,
    pub initials: String,
    pub availability: Availability,
    pub availability_label: &'static str,
    pub average_proficiency: u8,
}

/// Narrative block rendered beside the dashboard numbers.
#[derive(Debug, Clone, Serialize)]
pub struct TalentHighlights {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus_gap: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub observations: Vec<String>,
}

/// Everything the dashboard screen needs for one render.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub headcount: usize,
    pub available_now: usize,
    pub team_average_proficiency: u8,
    pub high_priority_gaps: usize,
    pub paths_in_progress: usize,
    pub category_coverage: Vec<CategoryCoverageEntry>,
    pub skill_gaps: Vec<GapRowView>,
    pub team: Vec<TeamMemberEntry>,
    pub highlights: TalentHighlights,
}
