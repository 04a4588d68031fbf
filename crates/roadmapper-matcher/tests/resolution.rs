//! End-to-end resolution over the curated tables

#![allow(clippy::unwrap_used, clippy::expect_used)]

use pretty_assertions::assert_eq;
use roadmapper_catalog::catalog;
use roadmapper_matcher::interest::slot_score;
use roadmapper_matcher::{lookup, resolve_by_interests, resolve_by_skill};
use roadmapper_types::{Difficulty, InterestMapping};
use rstest::rstest;

#[test]
fn test_every_key_resolves_to_its_lookup() {
    for id in catalog().ids() {
        let resolved = resolve_by_skill(id);
        let looked_up = lookup(id).expect("catalog key must look up");
        assert!(std::ptr::eq(resolved, looked_up), "{id}");
    }
}

#[test]
fn test_empty_skill_returns_default() {
    assert_eq!(resolve_by_skill("").id, "web-development");
}

#[test]
fn test_spaced_skill_name_matches_key() {
    assert_eq!(resolve_by_skill("Web Development").id, "web-development");
}

#[rstest]
#[case("data", "technology", "data-science")]
#[case("technology", "data", "data-science")]
#[case("hacking", "security", "cybersecurity")]
#[case("xyz123", "qqq999", "web-development")]
fn test_interest_pairs(#[case] a: &str, #[case] b: &str, #[case] expected: &str) {
    assert_eq!(resolve_by_interests(a, b), expected);
}

#[test]
fn test_catalog_records_are_well_formed() {
    for roadmap in catalog().iter() {
        assert_eq!(lookup(&roadmap.id).map(|r| r.id.as_str()), Some(roadmap.id.as_str()));
        assert!(!roadmap.steps.is_empty(), "{} has no steps", roadmap.id);
        assert!(Difficulty::ALL.contains(&roadmap.difficulty));
    }
}

#[test]
fn test_interest_targets_always_look_up() {
    let pairs = [
        ("art", "technology"),
        ("design", "code"),
        ("math", "finance"),
        ("phones", "mobile"),
        ("", "security"),
    ];

    for (a, b) in pairs {
        let skill = resolve_by_interests(a, b);
        assert!(lookup(skill).is_some(), "({a}, {b}) -> {skill}");
    }
}

#[test]
#[allow(clippy::float_cmp)]
fn test_slot_score_bounds() {
    let mapping = InterestMapping::new("statistics", "programming", "data-science", 0.9);
    assert_eq!(slot_score(&mapping, "statistics"), 0.9 * 0.5);
    assert_eq!(slot_score(&mapping, "cooking"), 0.0);
}
