use serde::{Deserialize, Serialize};

/// Identifier wrapper for people in the talent directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmployeeId(pub String);

/// Staffing availability tracked per employee and echoed on match rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    Available,
    Busy,
    OnLeave,
}

impl Availability {
    pub const fn ordered() -> [Self; 3] {
        [Self::Available, Self::Busy, Self::OnLeave]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::Busy => "Busy",
            Self::OnLeave => "On Leave",
        }
    }

    /// Fixed rank used when the shortlist is sorted by availability.
    /// Available ranks lowest, On Leave highest.
    pub const fn staffing_rank(self) -> u8 {
        match self {
            Self::Available => 0,
            Self::Busy => 1,
            Self::OnLeave => 2,
        }
    }

    pub fn parse_label(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "available" => Some(Self::Available),
            "busy" => Some(Self::Busy),
            "on leave" | "on-leave" | "on_leave" => Some(Self::OnLeave),
            _ => None,
        }
    }
}

/// Buckets the skill catalog into the families the dashboard reports on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    Technical,
    Soft,
    Domain,
    Leadership,
}

impl SkillCategory {
    pub const fn ordered() -> [Self; 4] {
        [Self::Technical, Self::Soft, Self::Domain, Self::Leadership]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Technical => "Technical",
            Self::Soft => "Soft",
            Self::Domain => "Domain",
            Self::Leadership => "Leadership",
        }
    }
}

/// Direction a proficiency reading has been moving between reviews.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

impl Trend {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Up => "Up",
            Self::Down => "Down",
            Self::Stable => "Stable",
        }
    }
}

/// Urgency assigned to an organisation-level skill gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GapPriority {
    High,
    Medium,
    Low,
}

impl GapPriority {
    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

/// Progress status of a learning path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathStatus {
    NotStarted,
    InProgress,
    Completed,
}

impl PathStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::NotStarted => "Not Started",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathDifficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl PathDifficulty {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }
}

/// One skill reading on an employee record. Proficiency values are 0-100.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub category: SkillCategory,
    pub proficiency: u8,
    pub target_proficiency: u8,
    pub trend: Trend,
}

/// A person in the talent directory together with their assessed skills.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub role: String,
    pub department: String,
    pub avatar: Option<String>,
    pub availability: Availability,
    pub skills: Vec<Skill>,
}

impl Employee {
    /// Mean proficiency across the employee's skills, rounded to the nearest
    /// point. Zero when no skills are recorded.
    pub fn average_proficiency(&self) -> u8 {
        if self.skills.is_empty() {
            return 0;
        }
        let total: u32 = self.skills.iter().map(|skill| u32::from(skill.proficiency)).sum();
        (f64::from(total) / self.skills.len() as f64).round() as u8
    }
}

/// Organisation-wide shortage for a named skill. `gap` is stored precomputed
/// as `required - current` rather than derived on read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillGap {
    pub skill: String,
    pub current: u8,
    pub required: u8,
    pub gap: u8,
    pub priority: GapPriority,
}

impl SkillGap {
    /// Share of the required level already covered, capped at 100.
    /// A zero requirement counts as fully covered.
    pub fn coverage_pct(&self) -> u8 {
        if self.required == 0 {
            return 100;
        }
        let pct = f64::from(self.current) / f64::from(self.required) * 100.0;
        pct.min(100.0).round() as u8
    }
}

/// A curated course sequence addressing one or more skills.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningPath {
    pub id: String,
    pub title: String,
    pub description: String,
    pub duration: String,
    pub skills: Vec<String>,
    pub progress: u8,
    pub status: PathStatus,
    pub difficulty: PathDifficulty,
}

/// Candidate row on the project match board. Scores are fixture data, not
/// recomputed from the skills list at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectMatch {
    pub employee_id: EmployeeId,
    pub employee_name: String,
    pub role: String,
    pub match_score: u8,
    pub skills_matched: Vec<String>,
    pub skills_missing: Vec<String>,
    pub availability: Availability,
    pub growth_potential: u8,
}
