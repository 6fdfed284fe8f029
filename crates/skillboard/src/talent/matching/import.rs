use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::talent::domain::{Availability, EmployeeId, ProjectMatch};

#[derive(Debug)]
pub enum MatchBoardImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    ScoreOutOfRange {
        column: &'static str,
        value: u16,
        employee: String,
    },
    UnknownAvailability {
        value: String,
        employee: String,
    },
}

impl std::fmt::Display for MatchBoardImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchBoardImportError::Io(err) => {
                write!(f, "failed to read match board export: {}", err)
            }
            MatchBoardImportError::Csv(err) => {
                write!(f, "invalid match board CSV data: {}", err)
            }
            MatchBoardImportError::ScoreOutOfRange {
                column,
                value,
                employee,
            } => write!(
                f,
                "{} {} for {} is outside the 0-100 range",
                column, value, employee
            ),
            MatchBoardImportError::UnknownAvailability { value, employee } => {
                write!(f, "availability '{}' for {} is not recognized", value, employee)
            }
        }
    }
}

impl std::error::Error for MatchBoardImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MatchBoardImportError::Io(err) => Some(err),
            MatchBoardImportError::Csv(err) => Some(err),
            MatchBoardImportError::ScoreOutOfRange { .. }
            | MatchBoardImportError::UnknownAvailability { .. } => None,
        }
    }
}

impl From<std::io::Error> for MatchBoardImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for MatchBoardImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Loads match board rows from a staffing-tool CSV export.
///
/// Rows without an employee name are skipped, and repeated employee ids keep
/// the first row seen. Score columns must stay within 0-100.
pub struct MatchBoardImporter;

impl MatchBoardImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<ProjectMatch>, MatchBoardImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<ProjectMatch>, MatchBoardImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut rows = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();

        for record in csv_reader.deserialize::<BoardRow>() {
            let row = record?;
            if row.employee_name.trim().is_empty() {
                continue;
            }
            if !seen.insert(row.employee_id.clone()) {
                continue;
            }
            rows.push(row.into_match()?);
        }

        Ok(rows)
    }
}

#[derive(Debug, Deserialize)]
struct BoardRow {
    #[serde(rename = "Employee ID")]
    employee_id: String,
    #[serde(rename = "Employee")]
    employee_name: String,
    #[serde(rename = "Role")]
    role: String,
    #[serde(rename = "Match Score")]
    match_score: u16,
    #[serde(rename = "Skills Matched", default)]
    skills_matched: String,
    #[serde(rename = "Skills Missing", default)]
    skills_missing: String,
    #[serde(rename = "Availability")]
    availability: String,
    #[serde(rename = "Growth Potential")]
    growth_potential: u16,
}

impl BoardRow {
    fn into_match(self) -> Result<ProjectMatch, MatchBoardImportError> {
        let match_score = checked_score("Match Score", self.match_score, &self.employee_name)?;
        let growth_potential =
            checked_score("Growth Potential", self.growth_potential, &self.employee_name)?;
        let availability = Availability::parse_label(&self.availability).ok_or_else(|| {
            MatchBoardImportError::UnknownAvailability {
                value: self.availability.clone(),
                employee: self.employee_name.clone(),
            }
        })?;

        Ok(ProjectMatch {
            employee_id: EmployeeId(self.employee_id),
            employee_name: self.employee_name,
            role: self.role,
            match_score,
            skills_matched: split_skill_list(&self.skills_matched),
            skills_missing: split_skill_list(&self.skills_missing),
            availability,
            growth_potential,
        })
    }
}

fn checked_score(
    column: &'static str,
    value: u16,
    employee: &str,
) -> Result<u8, MatchBoardImportError> {
    if value > 100 {
        return Err(MatchBoardImportError::ScoreOutOfRange {
            column,
            value,
            employee: employee.to_string(),
        });
    }
    Ok(value as u8)
}

fn split_skill_list(value: &str) -> Vec<String> {
    value
        .split(';')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}
