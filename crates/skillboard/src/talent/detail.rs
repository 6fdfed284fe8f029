use serde::Serialize;

use crate::talent::directory::TalentDirectory;
use crate::talent::domain::{
    Availability, Employee, EmployeeId, GapPriority, LearningPath, PathDifficulty, PathStatus,
    Skill, SkillCategory, SkillGap, Trend,
};

/// Placeholder shown when a name yields no usable letters.
pub const MISSING_INITIALS: &str = "--";

/// Up to two initials for the avatar fallback, `--` when the name is blank.
pub fn initials(name: &str) -> String {
    let letters: String = name
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .collect();
    if letters.is_empty() {
        MISSING_INITIALS.to_string()
    } else {
        letters.to_uppercase()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SkillEntryView {
    pub name: String,
    pub category: SkillCategory,
    pub category_label: &'static str,
    pub proficiency: u8,
    pub target_proficiency: u8,
    pub trend: Trend,
    pub trend_label: &'static str,
}

impl SkillEntryView {
    fn from_skill(skill: &Skill) -> Self {
        Self {
            name: skill.name.clone(),
            category: skill.category,
            category_label: skill.category.label(),
            proficiency: skill.proficiency,
            target_proficiency: skill.target_proficiency,
            trend: skill.trend,
            trend_label: skill.trend.label(),
        }
    }
}

/// Full card for the employee detail modal.
#[derive(Debug, Clone, Serialize)]
pub struct EmployeeCardView {
    pub employee_id: String,
    pub name: String,
    pub role: String,
    pub department: String,
    pub initials: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub availability: Availability,
    pub availability_label: &'static str,
    pub average_proficiency: u8,
    pub skills: Vec<SkillEntryView>,
}

impl EmployeeCardView {
    pub fn from_employee(employee: &Employee) -> Self {
        Self {
            employee_id: employee.id.0.clone(),
            name: employee.name.clone(),
            role: employee.role.clone(),
            department: employee.department.clone(),
            initials: initials(&employee.name),
            avatar: employee.avatar.clone(),
            availability: employee.availability,
            availability_label: employee.availability.label(),
            average_proficiency: employee.average_proficiency(),
            skills: employee.skills.iter().map(SkillEntryView::from_skill).collect(),
        }
    }
}

/// Body returned when an id does not resolve. Unresolved ids render as a
/// placeholder rather than an error; the skill list stays present but empty
/// so clients render the same card shape either way.
#[derive(Debug, Clone, Serialize)]
pub struct UnknownEmployeeView {
    pub employee_id: String,
    pub initials: &'static str,
    pub skills: Vec<SkillEntryView>,
}

impl UnknownEmployeeView {
    pub fn for_id(id: &EmployeeId) -> Self {
        Self {
            employee_id: id.0.clone(),
            initials: MISSING_INITIALS,
            skills: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PathRecommendationView {
    pub path_id: String,
    pub title: String,
    pub duration: String,
    pub difficulty: PathDifficulty,
    pub difficulty_label: &'static str,
}

impl PathRecommendationView {
    fn from_path(path: &LearningPath) -> Self {
        Self {
            path_id: path.id.clone(),
            title: path.title.clone(),
            duration: path.duration.clone(),
            difficulty: path.difficulty,
            difficulty_label: path.difficulty.label(),
        }
    }
}

/// Detail modal for one organisation-level skill gap, including the learning
/// paths suggested to close it.
#[derive(Debug, Clone, Serialize)]
pub struct GapDetailView {
    pub skill: String,
    pub current: u8,
    pub required: u8,
    pub gap: u8,
    pub coverage_pct: u8,
    pub priority: GapPriority,
    pub priority_label: &'static str,
    pub recommended_paths: Vec<PathRecommendationView>,
}

impl GapDetailView {
    pub fn build(gap: &SkillGap, directory: &TalentDirectory) -> Self {
        Self {
            skill: gap.skill.clone(),
            current: gap.current,
            required: gap.required,
            gap: gap.gap,
            coverage_pct: gap.coverage_pct(),
            priority: gap.priority,
            priority_label: gap.priority.label(),
            recommended_paths: recommended_paths(&gap.skill, directory),
        }
    }
}

/// Path suggestions match on the first word of the gap's skill name only.
/// A gap whose first word appears in no path's skill list recommends nothing.
fn recommended_paths(skill: &str, directory: &TalentDirectory) -> Vec<PathRecommendationView> {
    let first_word = skill
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .to_lowercase();
    if first_word.is_empty() {
        return Vec::new();
    }
    directory
        .learning_paths()
        .iter()
        .filter(|path| {
            path.skills
                .iter()
                .any(|entry| entry.to_lowercase().contains(&first_word))
        })
        .map(PathRecommendationView::from_path)
        .collect()
}

/// Detail modal for a learning path.
#[derive(Debug, Clone, Serialize)]
pub struct PathDetailView {
    pub path_id: String,
    pub title: String,
    pub description: String,
    pub duration: String,
    pub skills: Vec<String>,
    pub progress: u8,
    pub status: PathStatus,
    pub status_label: &'static str,
    pub difficulty: PathDifficulty,
    pub difficulty_label: &'static str,
}

impl PathDetailView {
    pub fn from_path(path: &LearningPath) -> Self {
        Self {
            path_id: path.id.clone(),
            title: path.title.clone(),
            description: path.description.clone(),
            duration: path.duration.clone(),
            skills: path.skills.clone(),
            progress: path.progress,
            status: path.status,
            status_label: path.status.label(),
            difficulty: path.difficulty,
            difficulty_label: path.difficulty.label(),
        }
    }
}
