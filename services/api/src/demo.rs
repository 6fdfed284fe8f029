use crate::infra::InMemoryAssignmentLog;
use chrono::{Local, NaiveDate};
use clap::Args;
use skillboard::error::AppError;
use skillboard::talent::assignments::{AssignmentDesk, AssignmentDraft};
use skillboard::talent::dashboard::DashboardReport;
use skillboard::talent::detail::{GapDetailView, PathDetailView};
use skillboard::talent::domain::{Availability, PathStatus};
use skillboard::talent::matching::{
    MatchBoardImporter, ShortlistFilter, ShortlistQuery, ShortlistSort, ShortlistView,
    SortDirection, SortKey,
};
use skillboard::talent::session::{ActiveView, AssignmentPhase, Modal};
use skillboard::talent::upskilling::UpskillingView;
use skillboard::talent::{TalentDirectory, WorkspaceSession};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct MatchArgs {
    /// Free-text search over names, roles, and matched skills
    #[arg(long)]
    pub(crate) search: Option<String>,
    /// Require a matched skill (repeatable; every named skill must be present)
    #[arg(long = "skill")]
    pub(crate) skills: Vec<String>,
    /// Keep only these availability states (repeatable)
    #[arg(long = "availability", value_parser = crate::infra::parse_availability)]
    pub(crate) availability: Vec<Availability>,
    /// Hide candidates scoring below this threshold
    #[arg(long, default_value_t = 0, value_parser = crate::infra::parse_match_score)]
    pub(crate) min_score: u8,
    /// Column to sort by: match-score, growth-potential, or availability
    #[arg(long, value_parser = crate::infra::parse_sort_key)]
    pub(crate) sort: Option<SortKey>,
    /// Sort ascending instead of descending
    #[arg(long)]
    pub(crate) ascending: bool,
    /// Staffing-tool CSV export to use instead of the seeded match board
    #[arg(long)]
    pub(crate) board_csv: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Staffing-tool CSV export to use instead of the seeded match board
    #[arg(long)]
    pub(crate) board_csv: Option<PathBuf>,
    /// Decision date recorded for the demo assignment (YYYY-MM-DD, defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) decided_on: Option<NaiveDate>,
    /// Skip the assignment walkthrough at the end of the demo
    #[arg(long)]
    pub(crate) skip_assignment: bool,
}

pub(crate) fn run_dashboard() -> Result<(), AppError> {
    let directory = TalentDirectory::seeded();
    render_dashboard(&directory);
    Ok(())
}

pub(crate) fn run_paths() -> Result<(), AppError> {
    let directory = TalentDirectory::seeded();
    render_upskilling(&directory);

    let mut session = WorkspaceSession::new();
    session.activate(ActiveView::Upskilling);
    spotlight_active_path(&mut session, &directory);
    Ok(())
}

pub(crate) fn run_match(args: MatchArgs) -> Result<(), AppError> {
    let MatchArgs {
        search,
        skills,
        availability,
        min_score,
        sort,
        ascending,
        board_csv,
    } = args;

    let (directory, imported) = load_directory(board_csv)?;
    if imported {
        println!("Match board source: staffing CSV import");
    } else {
        println!("Match board source: seeded directory");
    }

    let query = shortlist_query(search, skills, availability, min_score, sort, ascending);
    render_shortlist(&directory, &query);
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        board_csv,
        decided_on,
        skip_assignment,
    } = args;

    let (directory, imported) = load_directory(board_csv)?;
    let decided_on = decided_on.unwrap_or_else(|| Local::now().date_naive());

    println!("Skills workspace demo");
    if imported {
        println!("Match board source: staffing CSV import");
    } else {
        println!("Match board source: seeded directory");
    }

    let mut session = WorkspaceSession::new();

    for view in ActiveView::ordered() {
        session.activate(view);
        println!("\n=== {} ===", view.label());
        match view {
            ActiveView::Dashboard => {
                render_dashboard(&directory);
                spotlight_widest_gap(&mut session, &directory);
            }
            ActiveView::Upskilling => {
                render_upskilling(&directory);
                spotlight_active_path(&mut session, &directory);
            }
            ActiveView::Matching => render_shortlist(&directory, session.query()),
        }
    }

    if skip_assignment {
        return Ok(());
    }

    run_assignment_walkthrough(&mut session, &directory, decided_on);
    Ok(())
}

fn load_directory(board_csv: Option<PathBuf>) -> Result<(TalentDirectory, bool), AppError> {
    match board_csv {
        Some(path) => {
            let rows = MatchBoardImporter::from_path(path)?;
            Ok((TalentDirectory::seeded().with_match_board(rows), true))
        }
        None => Ok((TalentDirectory::seeded(), false)),
    }
}

fn shortlist_query(
    search: Option<String>,
    skills: Vec<String>,
    availability: Vec<Availability>,
    min_score: u8,
    sort: Option<SortKey>,
    ascending: bool,
) -> ShortlistQuery {
    let direction = if ascending {
        SortDirection::Ascending
    } else {
        SortDirection::Descending
    };

    ShortlistQuery {
        filter: ShortlistFilter {
            search: search.unwrap_or_default(),
            required_skills: skills.into_iter().collect(),
            availability: availability.into_iter().collect(),
            min_match_score: min_score,
        },
        sort: ShortlistSort {
            key: sort.unwrap_or(SortKey::MatchScore),
            direction,
        },
    }
}

fn render_dashboard(directory: &TalentDirectory) {
    let report = DashboardReport::from_directory(directory);
    let view = report.view(directory);

    println!("Team skills dashboard");
    println!(
        "- {} employees | {} available now | team average proficiency {}%",
        view.headcount, view.available_now, view.team_average_proficiency
    );
    println!(
        "- {} high priority gap(s) | {} path(s) in progress",
        view.high_priority_gaps, view.paths_in_progress
    );

    println!("\nCategory coverage");
    for entry in &view.category_coverage {
        println!(
            "- {}: {} skill reading(s) at {}% average",
            entry.category_label, entry.skill_count, entry.average_proficiency
        );
    }

    println!("\nSkill gaps (widest first)");
    for row in &view.skill_gaps {
        println!(
            "- {} [{}]: current {} / required {} ({} points short, {}% covered)",
            row.skill, row.priority_label, row.current, row.required, row.gap, row.coverage_pct
        );
    }

    println!("\nTeam");
    for member in &view.team {
        println!(
            "- {} {} ({}, {}) | {} | avg {}%",
            member.initials,
            member.name,
            member.role,
            member.department,
            member.availability_label,
            member.average_proficiency
        );
    }

    if let Some(focus) = &view.highlights.focus_gap {
        println!("\nFocus gap: {focus}");
    }
    if !view.highlights.observations.is_empty() {
        println!("Observations");
        for note in &view.highlights.observations {
            println!("- {note}");
        }
    }
}

fn spotlight_widest_gap(session: &mut WorkspaceSession, directory: &TalentDirectory) {
    let Some(gap) = directory.skill_gaps().iter().max_by_key(|gap| gap.gap) else {
        return;
    };

    session.open_modal(Modal::GapDetail {
        skill: gap.skill.clone(),
    });
    let detail = GapDetailView::build(gap, directory);

    println!(
        "\nGap spotlight: {} ({} priority, {}% covered)",
        detail.skill, detail.priority_label, detail.coverage_pct
    );
    if detail.recommended_paths.is_empty() {
        println!("- No learning path currently covers this gap");
    } else {
        for path in &detail.recommended_paths {
            println!(
                "- Suggested path: {} ({}, {})",
                path.title, path.duration, path.difficulty_label
            );
        }
    }

    session.close_modal();
}

fn render_upskilling(directory: &TalentDirectory) {
    let view = UpskillingView::build(directory);

    println!("Upskilling paths");
    println!(
        "- {} path(s): {} not started, {} in progress, {} completed",
        view.summary.total_paths,
        view.summary.not_started,
        view.summary.in_progress,
        view.summary.completed
    );
    println!(
        "- In-progress paths average {}% completion",
        view.summary.average_active_progress
    );

    for row in &view.rows {
        println!(
            "- [{}] {} ({}, {}) | {}% | skills: {}",
            row.status_label,
            row.title,
            row.duration,
            row.difficulty_label,
            row.progress,
            row.skills.join(", ")
        );
    }
}

fn spotlight_active_path(session: &mut WorkspaceSession, directory: &TalentDirectory) {
    let Some(path) = directory
        .learning_paths()
        .iter()
        .filter(|path| path.status == PathStatus::InProgress)
        .min_by_key(|path| path.progress)
    else {
        return;
    };

    session.open_modal(Modal::PathDetail {
        path_id: path.id.clone(),
    });
    let detail = PathDetailView::from_path(path);

    println!(
        "\nPath spotlight: {} ({}, {})",
        detail.title, detail.duration, detail.difficulty_label
    );
    println!("- {}", detail.description);
    println!(
        "- {} at {}% | covers: {}",
        detail.status_label,
        detail.progress,
        detail.skills.join(", ")
    );

    session.close_modal();
}

fn render_shortlist(directory: &TalentDirectory, query: &ShortlistQuery) {
    let view = ShortlistView::build(directory, query);

    println!("Project match shortlist");
    println!(
        "- Sorted by {} {}",
        query.sort.key.label(),
        match query.sort.direction {
            SortDirection::Ascending => "ascending",
            SortDirection::Descending => "descending",
        }
    );
    println!(
        "- Showing {} of {} candidate(s) | {} strong match(es) | average score {}",
        view.summary.shown,
        view.summary.total_candidates,
        view.summary.strong_candidates,
        view.summary.average_match_score
    );

    for row in &view.rows {
        println!(
            "- {} {} ({}) | score {} | growth {} | {}",
            row.initials,
            row.employee_name,
            row.role,
            row.match_score,
            row.growth_potential,
            row.availability_label
        );
        if !row.skills_matched.is_empty() {
            println!("    matched: {}", row.skills_matched.join(", "));
        }
        if !row.skills_missing.is_empty() {
            println!("    missing: {}", row.skills_missing.join(", "));
        }
    }

    if let Some(message) = view.empty_message {
        println!("{message}");
    }
}

fn run_assignment_walkthrough(
    session: &mut WorkspaceSession,
    directory: &TalentDirectory,
    decided_on: NaiveDate,
) {
    println!("\n=== Assignment walkthrough ===");
    let Some(top_match) = directory.match_board().first() else {
        println!("Match board is empty; nothing to assign");
        return;
    };

    let desk = AssignmentDesk::new(Arc::new(InMemoryAssignmentLog::default()));
    session.begin_assignment(top_match.employee_id.clone());
    println!(
        "Confirming assignment for {} ({}, score {})",
        top_match.employee_name, top_match.role, top_match.match_score
    );

    if session.advance_assignment() == Some(AssignmentPhase::Submitting) {
        if let Some(Modal::Assignment(dialog)) = session.top_modal() {
            if let Some(delay) = dialog.pacing() {
                println!("Submitting ({}ms confirmation hold)", delay.as_millis());
                std::thread::sleep(delay);
            }
        }
    }

    let receipt = match desk.confirm(AssignmentDraft::from_match(top_match), decided_on) {
        Ok(receipt) => receipt,
        Err(err) => {
            println!("Assignment rejected: {err}");
            return;
        }
    };
    session.advance_assignment();
    session.close_modal();

    println!(
        "Assignment {} recorded for {} on {}",
        receipt.assignment_id, receipt.employee_name, receipt.decided_on
    );

    match desk.recent(5) {
        Ok(recent) => println!("Ledger now holds {} assignment(s)", recent.len()),
        Err(err) => println!("Ledger unavailable: {err}"),
    }
}
