use std::collections::HashMap;

use super::views::{
    CategoryCoverageEntry, DashboardView, GapRowView, TeamMemberEntry,
};
use crate::talent::detail::initials;
use crate::talent::directory::TalentDirectory;
use crate::talent::domain::{Availability, GapPriority, PathStatus, SkillCategory};

#[derive(Debug, Default, Clone)]
pub struct CategoryCoverage {
    pub skill_count: usize,
    pub proficiency_total: u32,
}

impl CategoryCoverage {
    fn average(&self) -> u8 {
        if self.skill_count == 0 {
            return 0;
        }
        (f64::from(self.proficiency_total) / self.skill_count as f64).round() as u8
    }
}

/// Aggregates the directory into the counts the dashboard reports on.
#[derive(Debug, Default)]
pub struct DashboardReport {
    pub headcount: usize,
    pub available_now: usize,
    pub employee_average_total: u32,
    pub high_priority_gaps: usize,
    pub paths_in_progress: usize,
    pub coverage: HashMap<SkillCategory, CategoryCoverage>,
}

impl DashboardReport {
    pub fn from_directory(directory: &TalentDirectory) -> Self {
        let mut report = Self::default();

        for employee in directory.employees() {
            report.headcount += 1;
            if employee.availability == Availability::Available {
                report.available_now += 1;
            }
            report.employee_average_total += u32::from(employee.average_proficiency());
            for skill in &employee.skills {
                let coverage = report.coverage.entry(skill.category).or_default();
                coverage.skill_count += 1;
                coverage.proficiency_total += u32::from(skill.proficiency);
            }
        }

        report.high_priority_gaps = directory
            .skill_gaps()
            .iter()
            .filter(|gap| gap.priority == GapPriority::High)
            .count();
        report.paths_in_progress = directory
            .learning_paths()
            .iter()
            .filter(|path| path.status == PathStatus::InProgress)
            .count();

        report
    }

    /// Team average is the mean of per-employee averages, not of raw skill
    /// readings.
    pub fn team_average_proficiency(&self) -> u8 {
        if self.headcount == 0 {
            return 0;
        }
        (f64::from(self.employee_average_total) / self.headcount as f64).round() as u8
    }

    pub fn view(&self, directory: &TalentDirectory) -> DashboardView {
        let category_coverage = SkillCategory::ordered()
            .into_iter()
            .filter_map(|category| {
                self.coverage.get(&category).map(|coverage| CategoryCoverageEntry {
                    category,
                    category_label: category.label(),
                    skill_count: coverage.skill_count,
                    average_proficiency: coverage.average(),
                })
            })
            .collect();

        let skill_gaps = directory
            .skill_gaps()
            .iter()
            .map(|gap| GapRowView {
                skill: gap.skill.clone(),
                current: gap.current,
                required: gap.required,
                gap: gap.gap,
                coverage_pct: gap.coverage_pct(),
                priority: gap.priority,
                priority_label: gap.priority.label(),
            })
            .collect();

        let team = directory
            .employees()
            .iter()
            .map(|employee| TeamMemberEntry {
                employee_id: employee.id.0.clone(),
                name: employee.name.clone(),
                role: employee.role.clone(),
                department: employee.department.clone(),
                initials: initials(&employee.name),
                availability: employee.availability,
                availability_label: employee.availability.label(),
                average_proficiency: employee.average_proficiency(),
            })
            .collect();

        let mut view = DashboardView {
            headcount: self.headcount,
            available_now: self.available_now,
            team_average_proficiency: self.team_average_proficiency(),
            high_priority_gaps: self.high_priority_gaps,
            paths_in_progress: self.paths_in_progress,
            category_coverage,
            skill_gaps,
            team,
            highlights: super::generate_highlights(self, directory),
        };
        view.skill_gaps
            .sort_by_key(|row| std::cmp::Reverse(row.gap));
        view
    }
}
