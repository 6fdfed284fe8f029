use super::common::*;
use crate::talent::domain::Availability;
use crate::talent::matching::{shortlist, ShortlistFilter, ShortlistQuery};

fn query_with_filter(filter: ShortlistFilter) -> ShortlistQuery {
    ShortlistQuery {
        filter,
        ..ShortlistQuery::default()
    }
}

#[test]
fn empty_filter_admits_every_row() {
    let board = board();
    let result = shortlist(&board, &ShortlistQuery::default());
    assert_eq!(result.len(), board.len());
}

#[test]
fn search_matches_name_role_and_matched_skills_case_insensitively() {
    let board = board();

    let by_name = shortlist(
        &board,
        &query_with_filter(ShortlistFilter {
            search: "ALICE".to_string(),
            ..ShortlistFilter::default()
        }),
    );
    assert_eq!(names(&by_name), vec!["Alice Nkemelu"]);

    let by_role = shortlist(
        &board,
        &query_with_filter(ShortlistFilter {
            search: "backend".to_string(),
            ..ShortlistFilter::default()
        }),
    );
    assert_eq!(names(&by_role), vec!["Bola Ahmed"]);

    let by_skill = shortlist(
        &board,
        &query_with_filter(ShortlistFilter {
            search: "react".to_string(),
            ..ShortlistFilter::default()
        }),
    );
    assert_eq!(names(&by_skill), vec!["Alice Nkemelu", "Chen Wei"]);
}

#[test]
fn search_ignores_missing_skills() {
    let board = board();
    let result = shortlist(
        &board,
        &query_with_filter(ShortlistFilter {
            search: "postgres".to_string(),
            ..ShortlistFilter::default()
        }),
    );
    assert_eq!(names(&result), vec!["Bola Ahmed"]);
}

#[test]
fn required_skills_use_and_semantics() {
    let board = board();

    let react = shortlist(
        &board,
        &query_with_filter(ShortlistFilter {
            required_skills: skills(&["React"]),
            ..ShortlistFilter::default()
        }),
    );
    assert_eq!(names(&react), vec!["Alice Nkemelu", "Chen Wei"]);

    let react_and_go = shortlist(
        &board,
        &query_with_filter(ShortlistFilter {
            required_skills: skills(&["React", "Go"]),
            ..ShortlistFilter::default()
        }),
    );
    assert_eq!(names(&react_and_go), vec!["Chen Wei"]);

    let impossible = shortlist(
        &board,
        &query_with_filter(ShortlistFilter {
            required_skills: skills(&["React", "Go", "Mentoring"]),
            ..ShortlistFilter::default()
        }),
    );
    assert!(impossible.is_empty());
}

#[test]
fn adding_a_required_skill_never_grows_the_result() {
    let board = board();
    let mut selected = Vec::new();
    let mut previous = board.len();

    for next in ["React", "Go", "TypeScript"] {
        selected.push(next);
        let result = shortlist(
            &board,
            &query_with_filter(ShortlistFilter {
                required_skills: skills(&selected),
                ..ShortlistFilter::default()
            }),
        );
        assert!(result.len() <= previous, "adding {next} grew the shortlist");
        previous = result.len();
    }
}

#[test]
fn availability_set_uses_or_semantics() {
    let board = board();

    let available_only = shortlist(
        &board,
        &query_with_filter(ShortlistFilter {
            availability: availability_set(&[Availability::Available]),
            ..ShortlistFilter::default()
        }),
    );
    assert_eq!(names(&available_only), vec!["Alice Nkemelu", "Dara Quinn"]);

    let available_or_busy = shortlist(
        &board,
        &query_with_filter(ShortlistFilter {
            availability: availability_set(&[Availability::Available, Availability::Busy]),
            ..ShortlistFilter::default()
        }),
    );
    assert!(available_or_busy.len() >= available_only.len());
    assert_eq!(
        names(&available_or_busy),
        vec!["Alice Nkemelu", "Bola Ahmed", "Dara Quinn"]
    );
}

#[test]
fn min_score_boundaries() {
    let board = board();

    let everything = shortlist(
        &board,
        &query_with_filter(ShortlistFilter {
            min_match_score: 0,
            ..ShortlistFilter::default()
        }),
    );
    assert_eq!(everything.len(), board.len());

    let perfect_only = shortlist(
        &board,
        &query_with_filter(ShortlistFilter {
            min_match_score: 100,
            ..ShortlistFilter::default()
        }),
    );
    assert!(perfect_only.is_empty());

    let threshold_is_inclusive = shortlist(
        &board,
        &query_with_filter(ShortlistFilter {
            min_match_score: 82,
            ..ShortlistFilter::default()
        }),
    );
    assert_eq!(names(&threshold_is_inclusive), vec!["Alice Nkemelu", "Chen Wei"]);
}

#[test]
fn predicates_combine_with_and() {
    let board = board();
    let result = shortlist(
        &board,
        &query_with_filter(ShortlistFilter {
            search: "engineer".to_string(),
            availability: availability_set(&[Availability::Available]),
            min_match_score: 70,
            ..ShortlistFilter::default()
        }),
    );
    assert_eq!(names(&result), vec!["Alice Nkemelu"]);
}

#[test]
fn result_is_always_a_subset_of_the_board() {
    let board = board();
    let filters = [
        ShortlistFilter::default(),
        ShortlistFilter {
            search: "engineer".to_string(),
            ..ShortlistFilter::default()
        },
        ShortlistFilter {
            required_skills: skills(&["React"]),
            availability: availability_set(&[Availability::OnLeave]),
            min_match_score: 50,
            ..ShortlistFilter::default()
        },
    ];

    for filter in filters {
        let result = shortlist(&board, &query_with_filter(filter));
        for row in result {
            assert!(board.iter().any(|candidate| candidate == row));
        }
    }
}

#[test]
fn same_query_twice_yields_identical_order() {
    let board = board();
    let query = query_with_filter(ShortlistFilter {
        search: "e".to_string(),
        min_match_score: 60,
        ..ShortlistFilter::default()
    });

    let first = names(&shortlist(&board, &query));
    let second = names(&shortlist(&board, &query));
    assert_eq!(first, second);
}
