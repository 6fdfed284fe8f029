use std::collections::BTreeSet;

use crate::talent::domain::{Availability, EmployeeId, ProjectMatch};

pub(super) fn row(
    id: &str,
    name: &str,
    role: &str,
    match_score: u8,
    skills_matched: &[&str],
    skills_missing: &[&str],
    availability: Availability,
    growth_potential: u8,
) -> ProjectMatch {
    ProjectMatch {
        employee_id: EmployeeId(id.to_string()),
        employee_name: name.to_string(),
        role: role.to_string(),
        match_score,
        skills_matched: skills_matched.iter().map(|s| s.to_string()).collect(),
        skills_missing: skills_missing.iter().map(|s| s.to_string()).collect(),
        availability,
        growth_potential,
    }
}

/// Four candidates with distinct scores so ordering assertions are exact.
/// React appears in two matched lists and two missing lists to separate
/// search semantics from skill-requirement semantics.
pub(super) fn board() -> Vec<ProjectMatch> {
    vec![
        row(
            "emp-a",
            "Alice Nkemelu",
            "Frontend Engineer",
            90,
            &["React", "TypeScript"],
            &[],
            Availability::Available,
            55,
        ),
        row(
            "emp-b",
            "Bola Ahmed",
            "Backend Engineer",
            75,
            &["Go", "PostgreSQL"],
            &["React"],
            Availability::Busy,
            80,
        ),
        row(
            "emp-c",
            "Chen Wei",
            "Fullstack Engineer",
            82,
            &["React", "Go"],
            &[],
            Availability::OnLeave,
            62,
        ),
        row(
            "emp-d",
            "Dara Quinn",
            "Engineering Manager",
            68,
            &["Mentoring"],
            &["React"],
            Availability::Available,
            90,
        ),
    ]
}

pub(super) fn names<'a>(rows: &[&'a ProjectMatch]) -> Vec<&'a str> {
    rows.iter().map(|row| row.employee_name.as_str()).collect()
}

pub(super) fn skills(entries: &[&str]) -> BTreeSet<String> {
    entries.iter().map(|entry| entry.to_string()).collect()
}

pub(super) fn availability_set(values: &[Availability]) -> BTreeSet<Availability> {
    values.iter().copied().collect()
}
