use serde::Serialize;

use crate::talent::directory::TalentDirectory;
use crate::talent::domain::{LearningPath, PathDifficulty, PathStatus};

/// Compact card for the upskilling screen's path list. The full description
/// stays on the detail modal.
#[derive(Debug, Clone, Serialize)]
pub struct PathRowView {
    pub path_id: String,
    pub title: String,
    pub duration: String,
    pub skills: Vec<String>,
    pub progress: u8,
    pub status: PathStatus,
    pub status_label: &'static str,
    pub difficulty: PathDifficulty,
    pub difficulty_label: &'static str,
}

impl PathRowView {
    fn from_path(path: &LearningPath) -> Self {
        Self {
            path_id: path.id.clone(),
            title: path.title.clone(),
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

/// Headline counts above the path list. Average progress covers in-progress
/// paths only and is zero when none are active.
#[derive(Debug, Clone, Serialize)]
pub struct UpskillingSummary {
    pub total_paths: usize,
    pub not_started: usize,
    pub in_progress: usize,
    pub completed: usize,
    pub average_active_progress: u8,
}

#[derive(Debug, Clone, Serialize)]
pub struct UpskillingView {
    pub summary: UpskillingSummary,
    pub rows: Vec<PathRowView>,
}

impl UpskillingView {
    pub fn build(directory: &TalentDirectory) -> Self {
        let paths = directory.learning_paths();
        let count_with =
            |status: PathStatus| paths.iter().filter(|path| path.status == status).count();

        let active_progress: Vec<u8> = paths
            .iter()
            .filter(|path| path.status == PathStatus::InProgress)
            .map(|path| path.progress)
            .collect();
        let average_active_progress = if active_progress.is_empty() {
            0
        } else {
            let total: u32 = active_progress.iter().map(|p| u32::from(*p)).sum();
            (f64::from(total) / active_progress.len() as f64).round() as u8
        };

        Self {
            summary: UpskillingSummary {
                total_paths: paths.len(),
                not_started: count_with(PathStatus::NotStarted),
                in_progress: count_with(PathStatus::InProgress),
                completed: count_with(PathStatus::Completed),
                average_active_progress,
            },
            rows: paths.iter().map(PathRowView::from_path).collect(),
        }
    }
}
