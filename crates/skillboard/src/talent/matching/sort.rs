use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::talent::domain::ProjectMatch;

/// Columns the shortlist table can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    MatchScore,
    GrowthPotential,
    Availability,
}

impl SortKey {
    pub const fn ordered() -> [Self; 3] {
        [Self::MatchScore, Self::GrowthPotential, Self::Availability]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::MatchScore => "Match Score",
            Self::GrowthPotential => "Growth Potential",
            Self::Availability => "Availability",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub const fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Active sort column and direction. A fresh board orders by match score,
/// best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortlistSort {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl Default for ShortlistSort {
    fn default() -> Self {
        Self {
            key: SortKey::MatchScore,
            direction: SortDirection::Descending,
        }
    }
}

impl ShortlistSort {
    /// Re-selecting the active column flips direction; selecting a new column
    /// restarts descending.
    pub fn select(self, key: SortKey) -> Self {
        if self.key == key {
            Self {
                key,
                direction: self.direction.flipped(),
            }
        } else {
            Self {
                key,
                direction: SortDirection::Descending,
            }
        }
    }

    /// Availability compares by staffing rank, so descending puts On Leave
    /// first and ascending puts Available first.
    pub fn compare(&self, a: &ProjectMatch, b: &ProjectMatch) -> Ordering {
        let ordering = match self.key {
            SortKey::MatchScore => a.match_score.cmp(&b.match_score),
            SortKey::GrowthPotential => a.growth_potential.cmp(&b.growth_potential),
            SortKey::Availability => a
                .availability
                .staffing_rank()
                .cmp(&b.availability.staffing_rank()),
        };
        match self.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}
