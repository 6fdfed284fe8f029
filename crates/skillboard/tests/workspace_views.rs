use skillboard::talent::dashboard::DashboardReport;
use skillboard::talent::detail::{
    EmployeeCardView, GapDetailView, PathDetailView, UnknownEmployeeView, MISSING_INITIALS,
};
use skillboard::talent::domain::{Availability, EmployeeId, SkillCategory};
use skillboard::talent::matching::{ShortlistView, SortKey};
use skillboard::talent::session::{ActiveView, Modal};
use skillboard::talent::upskilling::UpskillingView;
use skillboard::talent::{TalentDirectory, WorkspaceSession};

#[test]
fn dashboard_view_summarises_the_seeded_directory() {
    let directory = TalentDirectory::seeded();
    let view = DashboardReport::from_directory(&directory).view(&directory);

    assert_eq!(view.headcount, 5);
    assert_eq!(view.available_now, 2);
    assert_eq!(view.team_average_proficiency, 77);
    assert_eq!(view.high_priority_gaps, 2);
    assert_eq!(view.paths_in_progress, 2);

    assert_eq!(view.category_coverage.len(), 4);
    assert_eq!(view.category_coverage[0].category, SkillCategory::Technical);

    assert_eq!(view.skill_gaps[0].skill, "Cloud Architecture");
    assert_eq!(view.skill_gaps[0].coverage_pct, 68);

    assert_eq!(view.team.len(), 5);
    let priya = view
        .team
        .iter()
        .find(|member| member.name == "Priya Patel")
        .expect("seeded employee");
    assert_eq!(priya.initials, "PP");
    assert_eq!(priya.availability_label, "On Leave");

    assert_eq!(view.highlights.focus_gap.as_deref(), Some("Cloud Architecture"));
    assert!(!view.highlights.observations.is_empty());
}

#[test]
fn upskilling_view_lists_paths_with_labels() {
    let directory = TalentDirectory::seeded();
    let view = UpskillingView::build(&directory);

    assert_eq!(view.summary.total_paths, 5);
    assert_eq!(view.summary.in_progress, 2);
    assert_eq!(view.summary.average_active_progress, 54);

    let titles: Vec<&str> = view.rows.iter().map(|row| row.title.as_str()).collect();
    assert!(titles.contains(&"Cloud Architecture Fundamentals"));
    assert!(titles.contains(&"GraphQL API Design"));
}

#[test]
fn path_detail_carries_the_full_seeded_path() {
    let directory = TalentDirectory::seeded();
    let path = directory.path("path-001").expect("seeded path");
    let view = PathDetailView::from_path(path);

    assert_eq!(view.title, "Cloud Architecture Fundamentals");
    assert_eq!(view.status_label, "In Progress");
    assert_eq!(view.difficulty_label, "Intermediate");
    assert_eq!(view.progress, 35);
    assert_eq!(view.skills, vec!["Cloud Architecture", "AWS", "System Design"]);
}

#[test]
fn employee_card_carries_skills_and_average() {
    let directory = TalentDirectory::seeded();
    let sarah = directory
        .employee(&EmployeeId("emp-001".to_string()))
        .expect("seeded employee");
    let card = EmployeeCardView::from_employee(sarah);

    assert_eq!(card.name, "Sarah Chen");
    assert_eq!(card.initials, "SC");
    assert_eq!(card.average_proficiency, 75);
    assert_eq!(card.skills.len(), 4);
    assert!(card
        .skills
        .iter()
        .any(|skill| skill.name == "GraphQL" && skill.trend_label == "Up"));
}

#[test]
fn unknown_ids_render_a_placeholder_instead_of_failing() {
    let ghost = EmployeeId("emp-999".to_string());
    let directory = TalentDirectory::seeded();
    assert!(directory.employee(&ghost).is_none());

    let view = UnknownEmployeeView::for_id(&ghost);
    assert_eq!(view.employee_id, "emp-999");
    assert_eq!(view.initials, MISSING_INITIALS);
    assert!(view.skills.is_empty());
}

#[test]
fn gap_detail_recommends_paths_by_first_word() {
    let directory = TalentDirectory::seeded();
    let data_vis = directory
        .skill_gaps()
        .iter()
        .find(|gap| gap.skill == "Data Visualization")
        .expect("seeded gap");

    let view = GapDetailView::build(data_vis, &directory);
    assert_eq!(view.coverage_pct, 88);
    assert_eq!(view.recommended_paths.len(), 1);
    assert_eq!(view.recommended_paths[0].title, "Data Storytelling");
}

#[test]
fn session_edits_flow_into_the_shortlist_view() {
    let directory = TalentDirectory::seeded();
    let mut session = WorkspaceSession::new();
    session.activate(ActiveView::Matching);

    session.set_search("designer");
    let view = ShortlistView::build(&directory, session.query());
    assert_eq!(view.rows.len(), 1);
    assert_eq!(view.rows[0].employee_name, "Taylor Swift");

    session.clear_filters();
    session.toggle_availability(Availability::Busy);
    session.select_sort(SortKey::GrowthPotential);
    let view = ShortlistView::build(&directory, session.query());
    let names: Vec<&str> = view.rows.iter().map(|row| row.employee_name.as_str()).collect();
    assert_eq!(names, vec!["Marcus Johnson", "James O'Connor"]);
}

#[test]
fn modal_stack_tracks_detail_navigation() {
    let mut session = WorkspaceSession::new();
    session.activate(ActiveView::Upskilling);
    session.open_modal(Modal::GapDetail {
        skill: "Machine Learning".to_string(),
    });
    session.open_modal(Modal::PathDetail {
        path_id: "path-002".to_string(),
    });
    assert_eq!(session.modal_depth(), 2);

    session.activate(ActiveView::Dashboard);
    assert_eq!(session.modal_depth(), 0, "navigation resets open modals");
}
