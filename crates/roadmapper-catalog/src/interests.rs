//! Curated interest-pair associations
//!
//! Scanned linearly in declaration order; the first exact pair wins and
//! fuzzy ties keep the earliest entry.

use std::sync::LazyLock;

use roadmapper_types::InterestMapping;

static INTEREST_MAPPINGS: LazyLock<Vec<InterestMapping>> = LazyLock::new(curated_mappings);

/// The process-wide interest table in declaration order
pub fn interest_mappings() -> &'static [InterestMapping] {
    &INTEREST_MAPPINGS
}

fn curated_mappings() -> Vec<InterestMapping> {
    let m = InterestMapping::new;

    vec![
        m("art", "technology", "web-development", 0.85),
        m("technology", "art", "web-development", 0.85),
        m("design", "technology", "web-development", 0.9),
        m("technology", "design", "web-development", 0.9),
        m("data", "technology", "data-science", 0.95),
        m("technology", "data", "data-science", 0.95),
        m("math", "technology", "data-science", 0.8),
        m("technology", "math", "data-science", 0.8),
        m("statistics", "programming", "data-science", 0.9),
        m("business", "technology", "digital-marketing", 0.75),
        m("technology", "business", "digital-marketing", 0.75),
        m("marketing", "social media", "digital-marketing", 0.9),
        m("social media", "marketing", "digital-marketing", 0.9),
        m("mobile", "technology", "mobile-development", 0.85),
        m("technology", "mobile", "mobile-development", 0.85),
        m("apps", "programming", "mobile-development", 0.8),
        m("security", "technology", "cybersecurity", 0.9),
        m("technology", "security", "cybersecurity", 0.9),
        m("hacking", "security", "cybersecurity", 0.95),
        m("security", "hacking", "cybersecurity", 0.95),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_starts_with_art_and_ends_with_hacking() {
        let table = interest_mappings();
        assert_eq!(table.len(), 20);
        assert!(table[0].matches_pair("art", "technology"));
        assert!(table[19].matches_pair("hacking", "security"));
    }

    #[test]
    fn test_every_pair_has_two_distinct_interests() {
        for mapping in interest_mappings() {
            let [first, second] = &mapping.interests;
            assert_ne!(first, second, "{mapping:?}");
        }
    }
}
