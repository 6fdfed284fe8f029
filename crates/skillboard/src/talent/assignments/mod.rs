mod router;

pub use router::assignment_router;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::talent::domain::{EmployeeId, ProjectMatch};

/// Ledger entry for a confirmed assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentRecord {
    pub assignment_id: String,
    pub employee_id: EmployeeId,
    pub employee_name: String,
    pub role: String,
    pub match_score: u8,
    pub decided_on: NaiveDate,
}

/// Storage abstraction so the desk can be exercised without real persistence.
pub trait AssignmentLog: Send + Sync {
    fn record(&self, record: AssignmentRecord) -> Result<(), AssignmentLogError>;
    /// Most recent decisions first, at most `limit` of them.
    fn recent(&self, limit: usize) -> Result<Vec<AssignmentRecord>, AssignmentLogError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AssignmentLogError {
    #[error("assignment log unavailable: {0}")]
    Unavailable(String),
}

/// Payload confirming an assignment from the matching screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentDraft {
    pub employee_id: String,
    pub employee_name: String,
    pub role: String,
    pub match_score: u8,
}

impl AssignmentDraft {
    pub fn from_match(row: &ProjectMatch) -> Self {
        Self {
            employee_id: row.employee_id.0.clone(),
            employee_name: row.employee_name.clone(),
            role: row.role.clone(),
            match_score: row.match_score,
        }
    }
}

/// Receipt returned once a decision lands in the log.
#[derive(Debug, Clone, Serialize)]
pub struct AssignmentReceipt {
    pub assignment_id: String,
    pub employee_name: String,
    pub role: String,
    pub decided_on: NaiveDate,
}

#[derive(Debug, thiserror::Error)]
pub enum AssignmentError {
    #[error("assignment needs an employee name")]
    MissingEmployeeName,
    #[error("match score {0} is outside the 0-100 range")]
    ScoreOutOfRange(u8),
    #[error(transparent)]
    Log(#[from] AssignmentLogError),
}

static ASSIGNMENT_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_assignment_id() -> String {
    let id = ASSIGNMENT_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    format!("assign-{id:06}")
}

/// Validates and logs assignment decisions.
pub struct AssignmentDesk<L> {
    log: Arc<L>,
}

impl<L> AssignmentDesk<L>
where
    L: AssignmentLog + 'static,
{
    pub fn new(log: Arc<L>) -> Self {
        Self { log }
    }

    pub fn confirm(
        &self,
        draft: AssignmentDraft,
        decided_on: NaiveDate,
    ) -> Result<AssignmentReceipt, AssignmentError> {
        if draft.employee_name.trim().is_empty() {
            return Err(AssignmentError::MissingEmployeeName);
        }
        if draft.match_score > 100 {
            return Err(AssignmentError::ScoreOutOfRange(draft.match_score));
        }

        let record = AssignmentRecord {
            assignment_id: next_assignment_id(),
            employee_id: EmployeeId(draft.employee_id),
            employee_name: draft.employee_name,
            role: draft.role,
            match_score: draft.match_score,
            decided_on,
        };
        self.log.record(record.clone())?;

        Ok(AssignmentReceipt {
            assignment_id: record.assignment_id,
            employee_name: record.employee_name,
            role: record.role,
            decided_on: record.decided_on,
        })
    }

    pub fn recent(&self, limit: usize) -> Result<Vec<AssignmentRecord>, AssignmentError> {
        Ok(self.log.recent(limit)?)
    }
}
