//! Tests for participant lookup ranking

use super::*;
use crate::test_utils::test_helpers::{field_runners, scenario_runners};
use proptest::prelude::*;

fn bibs(result: &MatchResult) -> Vec<u32> {
    match result {
        MatchResult::Empty => Vec::new(),
        MatchResult::Matches { matches, .. } => matches.iter().map(|p| p.bib_number).collect(),
    }
}

#[test]
fn test_empty_term_is_empty_result() {
    let runners = scenario_runners();
    assert_eq!(lookup(&runners, ""), MatchResult::Empty);
    assert_eq!(lookup(&runners, "   "), MatchResult::Empty);
}

#[test]
fn test_prefix_term_orders_by_bib() {
    let runners = scenario_runners();
    let result = lookup(&runners, "1");

    assert_eq!(bibs(&result), vec![101, 102, 110]);
    assert_eq!(result.top().map(|p| p.bib_number), Some(101));
    assert_eq!(result.count(), 3);
    assert!(result.is_multi_match());
}

#[test]
fn test_exact_bib_single_match() {
    let runners = scenario_runners();
    let result = lookup(&runners, "102");

    assert_eq!(result.top().map(|p| p.full_name.as_str()), Some("Bob Jones"));
    assert_eq!(result.count(), 1);
    assert!(!result.is_multi_match());
}

#[test]
fn test_exact_bib_ranks_before_longer_prefixes() {
    let runners = vec![
        Participant::new(120, "A"),
        Participant::new(12, "B"),
        Participant::new(1200, "C"),
        Participant::new(121, "D"),
    ];
    let result = lookup(&runners, "12");

    assert_eq!(bibs(&result), vec![12, 120, 121, 1200]);
}

#[test]
fn test_numeric_term_never_matches_names() {
    let runners = vec![Participant::new(5, "Runner 101"), Participant::new(101, "X")];
    let result = lookup(&runners, "101");

    assert_eq!(bibs(&result), vec![101]);
}

#[test]
fn test_name_term_matches_case_insensitively() {
    let runners = field_runners();
    let result = lookup(&runners, "JONES");

    assert_eq!(bibs(&result), vec![102]);
}

#[test]
fn test_name_term_orders_by_name() {
    let runners = field_runners();
    // "a" appears in Alice, Cara, Dan, Zoe Adams, Zola
    let result = lookup(&runners, "a");

    let names: Vec<&str> = match &result {
        MatchResult::Matches { matches, .. } => {
            matches.iter().map(|p| p.full_name.as_str()).collect()
        }
        MatchResult::Empty => Vec::new(),
    };
    insta::assert_snapshot!(
        names.join(", "),
        @"Alice Smith, Cara Lee, Dan Black, Émile Zola, Zoe Adams"
    );
}

#[test]
fn test_no_match_keeps_term() {
    let runners = scenario_runners();
    let result = lookup(&runners, "999");

    assert_eq!(result.count(), 0);
    assert_eq!(result.top(), None);
    match result {
        MatchResult::Matches { term, .. } => assert_eq!(term, "999"),
        MatchResult::Empty => panic!("expected a Matches result"),
    }
}

#[test]
fn test_term_is_trimmed() {
    let runners = scenario_runners();
    assert_eq!(bibs(&lookup(&runners, " 110 ")), vec![110]);
}

fn runners_strategy() -> impl Strategy<Value = Vec<Participant>> {
    prop::collection::btree_map(1u32..3000, "[A-Za-z]{1,8}( [A-Za-z]{1,8})?", 1..40).prop_map(
        |entries| {
            entries
                .into_iter()
                .map(|(bib, name)| Participant::new(bib, &name))
                .collect()
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Any existing bib typed exactly comes back as the top match.
    #[test]
    fn prop_exact_bib_is_top(runners in runners_strategy(), pick in any::<prop::sample::Index>()) {
        let target = &runners[pick.index(runners.len())];
        let result = lookup(&runners, &target.bib_text());

        prop_assert_eq!(result.top().map(|p| p.bib_number), Some(target.bib_number));
    }

    // Digit terms without an exact match rank strictly by bib number.
    #[test]
    fn prop_numeric_without_exact_is_ascending(runners in runners_strategy(), digit in 1u32..10) {
        let term = digit.to_string();
        let result = lookup(&runners, &term);
        let found = bibs(&result);
        let rest: Vec<u32> = found.iter().copied().filter(|b| b.to_string() != term).collect();

        prop_assert!(rest.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(found.iter().all(|b| b.to_string().starts_with(&term)));
    }

    // Letter terms rank by name, case-insensitively.
    #[test]
    fn prop_name_terms_sorted_by_name(runners in runners_strategy(), letter in "[a-z]") {
        let result = lookup(&runners, &letter);
        if let MatchResult::Matches { matches, .. } = &result {
            let sorted = matches
                .windows(2)
                .all(|w| w[0].full_name.to_lowercase() <= w[1].full_name.to_lowercase());
            let all_contain = matches
                .iter()
                .all(|p| p.full_name.to_lowercase().contains(&letter));
            prop_assert!(sorted);
            prop_assert!(all_contain);
        }
    }
}
