mod filter;
mod import;
mod sort;
mod views;

#[cfg(test)]
mod tests;

use crate::talent::domain::ProjectMatch;

pub use filter::ShortlistFilter;
pub use import::{MatchBoardImportError, MatchBoardImporter};
pub use sort::{ShortlistSort, SortDirection, SortKey};
pub use views::{MatchRowView, ShortlistSummary, ShortlistView, NO_MATCHES_MESSAGE};

/// Score at and above which a candidate counts as a strong match.
pub const STRONG_MATCH_THRESHOLD: u8 = 85;

/// Filter and sort state applied to the match board in one pure derivation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShortlistQuery {
    pub filter: ShortlistFilter,
    pub sort: ShortlistSort,
}

/// Derives the ordered shortlist for the current query. The sort is stable,
/// so rows with equal keys keep their board order.
pub fn shortlist<'a>(board: &'a [ProjectMatch], query: &ShortlistQuery) -> Vec<&'a ProjectMatch> {
    let mut rows: Vec<&ProjectMatch> = board
        .iter()
        .filter(|row| query.filter.admits(row))
        .collect();
    rows.sort_by(|a, b| query.sort.compare(a, b));
    rows
}
