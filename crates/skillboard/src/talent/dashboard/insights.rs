use super::summary::DashboardReport;
use super::views::TalentHighlights;
use crate::talent::directory::TalentDirectory;
use crate::talent::domain::PathStatus;

pub(crate) fn generate_highlights(
    report: &DashboardReport,
    directory: &TalentDirectory,
) -> TalentHighlights {
    let widest_gap = directory.skill_gaps().iter().max_by_key(|gap| gap.gap);
    let focus_gap = widest_gap.map(|gap| gap.skill.clone());

    let mut observations = Vec::new();

    if report.headcount > 0 {
        observations.push(format!(
            "{} of {} employees are available for new assignments",
            report.available_now, report.headcount
        ));
    }

    if let Some(gap) = widest_gap {
        observations.push(format!(
            "{} high priority gap(s) open; widest is {} at {} points",
            report.high_priority_gaps, gap.skill, gap.gap
        ));
    }

    let active: Vec<u8> = directory
        .learning_paths()
        .iter()
        .filter(|path| path.status == PathStatus::InProgress)
        .map(|path| path.progress)
        .collect();
    if !active.is_empty() {
        let total: u32 = active.iter().map(|p| u32::from(*p)).sum();
        let average = (f64::from(total) / active.len() as f64).round() as u8;
        observations.push(format!(
            "{} learning path(s) in progress averaging {}% completion",
            active.len(),
            average
        ));
    }

    if let Some(gap) = widest_gap {
        let focus_path = directory
            .learning_paths()
            .iter()
            .filter(|path| {
                path.status != PathStatus::Completed
                    && path.skills.iter().any(|skill| skill == &gap.skill)
            })
            .min_by_key(|path| match path.status {
                PathStatus::InProgress => 0u8,
                _ => 1,
            });
        if let Some(path) = focus_path {
            observations.push(format!(
                "Focus path is {} at {}% complete, targeting the {} gap",
                path.title, path.progress, gap.skill
            ));
        }
    }

    if let Some((category, coverage)) = report
        .coverage
        .iter()
        .filter(|(_, coverage)| coverage.skill_count > 0)
        .min_by_key(|(_, coverage)| {
            (f64::from(coverage.proficiency_total) / coverage.skill_count as f64 * 100.0) as u32
        })
    {
        let average =
            (f64::from(coverage.proficiency_total) / coverage.skill_count as f64).round();
        observations.push(format!(
            "Weakest category is {} at {:.0}% average proficiency",
            category.label(),
            average
        ));
    }

    if observations.is_empty() {
        observations.push("No directory data loaded yet".to_string());
    }

    TalentHighlights {
        focus_gap,
        observations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn highlights_name_the_widest_gap() {
        let directory = TalentDirectory::seeded();
        let report = DashboardReport::from_directory(&directory);
        let highlights = generate_highlights(&report, &directory);

        assert_eq!(highlights.focus_gap.as_deref(), Some("Cloud Architecture"));
        assert!(highlights
            .observations
            .iter()
            .any(|line| line.contains("Cloud Architecture")));
    }

    #[test]
    fn highlights_report_bench_availability() {
        let directory = TalentDirectory::seeded();
        let report = DashboardReport::from_directory(&directory);
        let highlights = generate_highlights(&report, &directory);

        assert!(highlights
            .observations
            .iter()
            .any(|line| line.contains("2 of 5 employees")));
    }

    #[test]
    fn highlights_flag_the_weakest_category_and_focus_path() {
        let directory = TalentDirectory::seeded();
        let report = DashboardReport::from_directory(&directory);
        let highlights = generate_highlights(&report, &directory);

        assert!(highlights
            .observations
            .iter()
            .any(|line| line == "Weakest category is Soft at 67% average proficiency"));
        assert!(highlights.observations.iter().any(|line| {
            line == "Focus path is Cloud Architecture Fundamentals at 35% complete, \
                     targeting the Cloud Architecture gap"
        }));
        assert!(highlights
            .observations
            .iter()
            .all(|line| !line.contains("Strongest")));
    }
}
