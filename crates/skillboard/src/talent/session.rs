use std::time::Duration;

use serde::Serialize;

use super::domain::{Availability, EmployeeId};
use super::matching::{ShortlistQuery, SortKey};

/// Screens reachable from the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActiveView {
    Dashboard,
    Upskilling,
    Matching,
}

impl ActiveView {
    pub const fn ordered() -> [Self; 3] {
        [Self::Dashboard, Self::Upskilling, Self::Matching]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Skills Dashboard",
            Self::Upskilling => "Upskilling Paths",
            Self::Matching => "Skill Matching",
        }
    }
}

/// Wait inserted between confirming an assignment and showing the success
/// screen. Pure pacing, no work happens during it.
pub const SUBMIT_PACING: Duration = Duration::from_millis(1200);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignmentPhase {
    Confirming,
    Submitting,
    Completed,
}

/// Three-step dialog for confirming an assignment from the matching screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentDialog {
    pub employee_id: EmployeeId,
    pub phase: AssignmentPhase,
}

impl AssignmentDialog {
    pub fn open(employee_id: EmployeeId) -> Self {
        Self {
            employee_id,
            phase: AssignmentPhase::Confirming,
        }
    }

    /// Confirming moves to Submitting, Submitting to Completed. Completed is
    /// terminal.
    pub fn advance(&mut self) -> AssignmentPhase {
        self.phase = match self.phase {
            AssignmentPhase::Confirming => AssignmentPhase::Submitting,
            AssignmentPhase::Submitting | AssignmentPhase::Completed => AssignmentPhase::Completed,
        };
        self.phase
    }

    /// How long the current phase should hold before advancing, if at all.
    pub const fn pacing(&self) -> Option<Duration> {
        match self.phase {
            AssignmentPhase::Submitting => Some(SUBMIT_PACING),
            AssignmentPhase::Confirming | AssignmentPhase::Completed => None,
        }
    }
}

/// Modals stack in open order; only the top one receives input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    EmployeeDetail { employee_id: EmployeeId },
    GapDetail { skill: String },
    PathDetail { path_id: String },
    Assignment(AssignmentDialog),
}

/// Per-user UI state: the active screen, the modal stack, and the matching
/// query. Directory data itself is never mutated through the session.
#[derive(Debug, Clone)]
pub struct WorkspaceSession {
    active_view: ActiveView,
    modals: Vec<Modal>,
    query: ShortlistQuery,
}

impl Default for WorkspaceSession {
    fn default() -> Self {
        Self {
            active_view: ActiveView::Dashboard,
            modals: Vec::new(),
            query: ShortlistQuery::default(),
        }
    }
}

impl WorkspaceSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_view(&self) -> ActiveView {
        self.active_view
    }

    /// Switching screens drops any open modals. Re-selecting the current
    /// screen leaves them alone.
    pub fn activate(&mut self, view: ActiveView) {
        if self.active_view != view {
            self.active_view = view;
            self.modals.clear();
        }
    }

    pub fn open_modal(&mut self, modal: Modal) {
        self.modals.push(modal);
    }

    pub fn close_modal(&mut self) -> Option<Modal> {
        self.modals.pop()
    }

    pub fn top_modal(&self) -> Option<&Modal> {
        self.modals.last()
    }

    pub fn modal_depth(&self) -> usize {
        self.modals.len()
    }

    pub fn query(&self) -> &ShortlistQuery {
        &self.query
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.query.filter.search = text.into();
    }

    pub fn toggle_required_skill(&mut self, skill: &str) {
        if !self.query.filter.required_skills.remove(skill) {
            self.query.filter.required_skills.insert(skill.to_string());
        }
    }

    pub fn toggle_availability(&mut self, availability: Availability) {
        if !self.query.filter.availability.remove(&availability) {
            self.query.filter.availability.insert(availability);
        }
    }

    /// Threshold is clamped to the 0-100 score range.
    pub fn set_min_match_score(&mut self, score: u8) {
        self.query.filter.min_match_score = score.min(100);
    }

    pub fn select_sort(&mut self, key: SortKey) {
        self.query.sort = self.query.sort.select(key);
    }

    /// Resets every filter while keeping the chosen sort.
    pub fn clear_filters(&mut self) {
        self.query.filter = Default::default();
    }

    pub fn begin_assignment(&mut self, employee_id: EmployeeId) {
        self.open_modal(Modal::Assignment(AssignmentDialog::open(employee_id)));
    }

    /// Advances the assignment dialog when it is the top modal.
    pub fn advance_assignment(&mut self) -> Option<AssignmentPhase> {
        match self.modals.last_mut() {
            Some(Modal::Assignment(dialog)) => Some(dialog.advance()),
            _ => None,
        }
    }
}
