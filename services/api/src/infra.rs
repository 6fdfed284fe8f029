use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use skillboard::talent::assignments::{AssignmentLog, AssignmentLogError, AssignmentRecord};
use skillboard::talent::domain::Availability;
use skillboard::talent::matching::SortKey;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryAssignmentLog {
    records: Arc<Mutex<Vec<AssignmentRecord>>>,
}

impl AssignmentLog for InMemoryAssignmentLog {
    fn record(&self, record: AssignmentRecord) -> Result<(), AssignmentLogError> {
        let mut guard = self.records.lock().expect("assignment log mutex poisoned");
        guard.push(record);
        Ok(())
    }

    fn recent(&self, limit: usize) -> Result<Vec<AssignmentRecord>, AssignmentLogError> {
        let guard = self.records.lock().expect("assignment log mutex poisoned");
        Ok(guard.iter().rev().take(limit).cloned().collect())
    }
}

pub(crate) fn parse_sort_key(raw: &str) -> Result<SortKey, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "match-score" | "match_score" | "score" => Ok(SortKey::MatchScore),
        "growth-potential" | "growth_potential" | "growth" => Ok(SortKey::GrowthPotential),
        "availability" => Ok(SortKey::Availability),
        _ => Err(format!(
            "unknown sort column '{raw}' (expected match-score, growth-potential, or availability)"
        )),
    }
}

pub(crate) fn parse_availability(raw: &str) -> Result<Availability, String> {
    Availability::parse_label(raw).ok_or_else(|| {
        format!("unknown availability '{raw}' (expected available, busy, or on-leave)")
    })
}

pub(crate) fn parse_match_score(raw: &str) -> Result<u8, String> {
    let score: u8 = raw
        .trim()
        .parse()
        .map_err(|err| format!("failed to parse '{raw}' as a score ({err})"))?;
    if score > 100 {
        return Err(format!("score {score} is outside the 0-100 range"));
    }
    Ok(score)
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_keys_parse_from_cli_spellings() {
        assert_eq!(parse_sort_key("match-score"), Ok(SortKey::MatchScore));
        assert_eq!(parse_sort_key("GROWTH"), Ok(SortKey::GrowthPotential));
        assert_eq!(parse_sort_key("availability"), Ok(SortKey::Availability));
        assert!(parse_sort_key("tenure").is_err());
    }

    #[test]
    fn availability_parses_display_labels() {
        assert_eq!(parse_availability("On Leave"), Ok(Availability::OnLeave));
        assert_eq!(parse_availability("busy"), Ok(Availability::Busy));
        assert!(parse_availability("sabbatical").is_err());
    }

    #[test]
    fn match_scores_stay_within_range() {
        assert_eq!(parse_match_score("85"), Ok(85));
        assert!(parse_match_score("120").is_err());
        assert!(parse_match_score("eighty").is_err());
    }

    #[test]
    fn dates_parse_from_iso_strings() {
        assert_eq!(
            parse_date("2026-08-26"),
            Ok(NaiveDate::from_ymd_opt(2026, 8, 26).expect("valid date"))
        );
        assert!(parse_date("26/08/2026").is_err());
    }
}
