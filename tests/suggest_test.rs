mod common;

use assert2::check;
use common::engine;
use fitting_search::SearchEngine;
use rstest::rstest;

/// Spec scenario: joint type "Mechanical Joint" and keyword
/// "mechanical coupling" both complete "mec", sorted with stored casing.
#[rstest]
fn completes_from_joint_types_and_keywords(engine: SearchEngine) {
    let suggestions = engine.suggest("mec", 10);
    check!(
        suggestions
            == vec![
                "Mechanical Joint".to_string(),
                "mechanical coupling".to_string()
            ]
    );
}

/// Every suggestion starts with the partial query, case-insensitively, and
/// the list is sorted with no duplicates.
#[rstest]
#[case("mec")]
#[case("fl")]
#[case("pu")]
fn suggestions_are_prefixed_sorted_and_unique(engine: SearchEngine, #[case] partial: &str) {
    let suggestions = engine.suggest(partial, 10);

    for s in &suggestions {
        check!(s.to_lowercase().starts_with(partial));
    }

    let mut sorted = suggestions.clone();
    sorted.sort();
    sorted.dedup();
    check!(suggestions == sorted);
}

/// Prefix matching is case-insensitive on the query side too.
#[rstest]
fn query_case_is_ignored(engine: SearchEngine) {
    check!(engine.suggest("MEC", 10) == engine.suggest("mec", 10));
}

/// Product codes are a suggestion source.
#[rstest]
fn product_codes_complete(engine: SearchEngine) {
    let suggestions = engine.suggest("mj", 10);
    check!(suggestions.contains(&"MJ600".to_string()));
}

#[rstest]
fn limit_truncates_the_sorted_list(engine: SearchEngine) {
    let suggestions = engine.suggest("mec", 1);
    check!(suggestions == vec!["Mechanical Joint".to_string()]);
}

#[rstest]
fn no_matches_is_an_empty_list(engine: SearchEngine) {
    check!(engine.suggest("zz", 10).is_empty());
}
