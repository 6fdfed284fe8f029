use std::io::Cursor;

use skillboard::talent::domain::Availability;
use skillboard::talent::matching::{
    MatchBoardImportError, MatchBoardImporter, ShortlistQuery, ShortlistView,
};
use skillboard::talent::TalentDirectory;

const HEADER: &str = "Employee ID,Employee,Role,Match Score,Skills Matched,Skills Missing,Availability,Growth Potential\n";

fn staffing_export() -> String {
    format!(
        "{HEADER}\
emp-201,Lena Fischer,Site Reliability Engineer,91,Kubernetes; Terraform; Observability,Service Mesh,Available,74\n\
emp-202,Tomas Silva,Mobile Developer,83,Swift; Kotlin,React Native,Busy,81\n\
emp-203,Aisha Bello,QA Engineer,77,Test Automation; CI Pipelines,,On Leave,69\n"
    )
}

#[test]
fn imported_board_feeds_the_shortlist() {
    let rows = MatchBoardImporter::from_reader(Cursor::new(staffing_export()))
        .expect("import succeeds");
    assert_eq!(rows.len(), 3);

    let directory = TalentDirectory::seeded().with_match_board(rows);
    let view = ShortlistView::build(&directory, &ShortlistQuery::default());

    assert_eq!(view.summary.total_candidates, 3);
    let names: Vec<&str> = view.rows.iter().map(|row| row.employee_name.as_str()).collect();
    assert_eq!(names, vec!["Lena Fischer", "Tomas Silva", "Aisha Bello"]);

    let aisha = &view.rows[2];
    assert_eq!(aisha.availability, Availability::OnLeave);
    assert_eq!(aisha.availability_label, "On Leave");
    assert!(aisha.skills_missing.is_empty());
}

#[test]
fn imported_rows_fall_back_to_initials_for_unknown_ids() {
    let rows = MatchBoardImporter::from_reader(Cursor::new(staffing_export()))
        .expect("import succeeds");
    let directory = TalentDirectory::seeded().with_match_board(rows);
    let view = ShortlistView::build(&directory, &ShortlistQuery::default());

    // Imported ids do not resolve in the seeded directory.
    for row in &view.rows {
        assert!(row.avatar.is_none());
        assert_eq!(row.initials.len(), 2);
    }
    assert_eq!(view.rows[0].initials, "LF");
}

#[test]
fn export_quirks_are_tolerated() {
    let csv = format!(
        "{HEADER}\
emp-201,Lena Fischer,Site Reliability Engineer,91,Kubernetes,,available,74\n\
emp-202,,Orphan Row,50,,,Busy,10\n\
emp-201,Lena Fischer,Site Reliability Engineer,40,,,Busy,20\n"
    );
    let rows = MatchBoardImporter::from_reader(Cursor::new(csv)).expect("import succeeds");

    assert_eq!(rows.len(), 1, "blank names and duplicate ids drop out");
    assert_eq!(rows[0].match_score, 91, "first duplicate wins");
    assert_eq!(rows[0].availability, Availability::Available);
}

#[test]
fn out_of_range_growth_potential_is_rejected() {
    let csv = format!(
        "{HEADER}emp-201,Lena Fischer,Site Reliability Engineer,91,Kubernetes,,Available,140\n"
    );
    let error = MatchBoardImporter::from_reader(Cursor::new(csv)).expect_err("growth too large");
    match error {
        MatchBoardImportError::ScoreOutOfRange { column, value, employee } => {
            assert_eq!(column, "Growth Potential");
            assert_eq!(value, 140);
            assert_eq!(employee, "Lena Fischer");
        }
        other => panic!("expected score range error, got {other:?}"),
    }
}

#[test]
fn malformed_rows_surface_a_csv_error() {
    let csv = format!("{HEADER}emp-201,Lena Fischer,Site Reliability Engineer,not-a-number,,,Available,10\n");
    let error = MatchBoardImporter::from_reader(Cursor::new(csv)).expect_err("non-numeric score");
    assert!(matches!(error, MatchBoardImportError::Csv(_)));
}
