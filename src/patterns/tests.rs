use super::*;
use crate::types::ElementLocator;

fn selectors(raw: &[&str]) -> Vec<ElementLocator> {
    raw.iter().copied().map(ElementLocator::from_selector).collect()
}

#[test]
fn normalize_selector_strips_positional_pseudo_classes() {
    assert_eq!(normalize_selector(".card:nth-child(7) > img"), ".card > img");
    assert_eq!(normalize_selector("li:nth-of-type(3) > a"), "li > a");
    assert_eq!(normalize_selector("ul > li:first-child"), "ul > li");
    assert_eq!(normalize_selector("tr:last-child td"), "tr td");
}

#[test]
fn normalize_selector_collapses_numeric_suffixes() {
    assert_eq!(normalize_selector("#item-123"), "#item-*");
    assert_eq!(normalize_selector(".col-md-6"), ".col-md-*");
    assert_eq!(normalize_selector("#section_2"), "#section_*");
    assert_eq!(normalize_selector(".btn2"), ".btn*");
}

#[test]
fn normalize_selector_collapses_hash_suffixes() {
    assert_eq!(normalize_selector(".css-1a2b3c"), ".css-*");
    assert_eq!(normalize_selector("#root_4f9a8b"), "#root_*");
    // All-letter tails are names, not hashes.
    assert_eq!(normalize_selector(".nav-header"), ".nav-header");
    // Short mixed tails stay too.
    assert_eq!(normalize_selector(".v-a1b"), ".v-a1b");
}

#[test]
fn normalize_selector_leaves_static_selectors_alone() {
    assert_eq!(normalize_selector("header > img.logo"), "header > img.logo");
    assert_eq!(normalize_selector("nav .menu-item"), "nav .menu-item");
    // Interior digits are not a trailing suffix.
    assert_eq!(normalize_selector(".col-6-wide"), ".col-6-wide");
}

#[test]
fn normalize_selector_handles_empty_input() {
    assert_eq!(normalize_selector(""), "");
    assert_eq!(normalize_selector("   "), "");
}

#[test]
fn normalize_selector_is_idempotent() {
    let inputs = [
        ".card:nth-child(7) > img",
        "#item-123",
        ".col-md-6",
        ".css-1a2b3c",
        "#root_ab12cd34",
        "header > img.logo",
        "ul > li:first-child .badge-42",
        "",
    ];
    for input in inputs {
        let once = normalize_selector(input);
        let twice = normalize_selector(&once);
        assert_eq!(once, twice, "normalization must be idempotent for {input:?}");
    }
}

#[test]
fn normalize_xpath_strips_positional_indices() {
    assert_eq!(
        normalize_xpath("/html/body/div[2]/ul/li[7]/a"),
        "/html/body/div/ul/li/a"
    );
    assert_eq!(normalize_xpath("//section[1]//img"), "//section//img");
}

#[test]
fn normalize_xpath_reduces_numeric_attribute_predicates() {
    assert_eq!(normalize_xpath("//div[@data-index='3']"), "//div[@data-index]");
    assert_eq!(normalize_xpath("//li[@value=12]"), "//li[@value]");
    // Non-numeric predicates are preserved verbatim.
    assert_eq!(
        normalize_xpath("//div[@role='dialog']"),
        "//div[@role='dialog']"
    );
}

#[test]
fn normalize_xpath_handles_empty_and_is_idempotent() {
    assert_eq!(normalize_xpath(""), "");
    let once = normalize_xpath("/html/body/div[2]/span[@data-id='9']");
    assert_eq!(once, normalize_xpath(&once));
}

#[test]
fn group_by_pattern_buckets_equal_templates_together() {
    let elements = selectors(&[
        ".card:nth-child(1) > img",
        ".card:nth-child(2) > img",
        "header > img",
        ".card:nth-child(3) > img",
    ]);

    let buckets = group_by_pattern(&elements, false);
    assert_eq!(buckets.len(), 2);
    // First-seen order.
    assert_eq!(buckets[0].0, ".card > img");
    assert_eq!(buckets[0].1.len(), 3);
    assert_eq!(buckets[1].0, "header > img");
    assert_eq!(buckets[1].1.len(), 1);
}

#[test]
fn group_by_pattern_skips_elements_missing_selected_field() {
    let elements = vec![
        ElementLocator::from_selector(".card > img"),
        ElementLocator::from_xpath("/html/body/div[1]"),
        ElementLocator::from_selector(".card > img"),
    ];

    let buckets = group_by_pattern(&elements, false);
    let grouped: usize = buckets.iter().map(|(_, b)| b.len()).sum();
    assert_eq!(grouped, 2, "xpath-only element is skipped, not an error");

    let xpath_buckets = group_by_pattern(&elements, true);
    let xpath_grouped: usize = xpath_buckets.iter().map(|(_, b)| b.len()).sum();
    assert_eq!(xpath_grouped, 1);
}

#[test]
fn grouping_conserves_non_skipped_elements() {
    let elements = selectors(&[
        "#item-1", "#item-2", "#item-3", ".col-md-6", ".col-md-4", "header",
    ]);
    let buckets = group_by_pattern(&elements, false);
    let grouped: usize = buckets.iter().map(|(_, b)| b.len()).sum();
    assert_eq!(grouped, elements.len());
}

#[test]
fn count_unique_patterns_is_zero_for_empty_input() {
    assert_eq!(count_unique_patterns(&[]), 0);
}

#[test]
fn pattern_groups_sorts_descending_with_bounded_examples() {
    let elements = selectors(&[
        ".card:nth-child(1) > img",
        ".card:nth-child(2) > img",
        ".card:nth-child(3) > img",
        ".card:nth-child(4) > img",
        "header > img",
    ]);

    let groups = pattern_groups(&elements);
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].pattern, ".card > img");
    assert_eq!(groups[0].occurrences, 4);
    assert_eq!(groups[0].examples.len(), 3);
    assert_eq!(
        groups[0].examples[0].selector.as_deref(),
        Some(".card:nth-child(1) > img"),
        "examples keep insertion order"
    );
    assert_eq!(groups[1].pattern, "header > img");
    assert_eq!(groups[1].occurrences, 1);
    assert_eq!(groups[1].examples.len(), 1);
}

#[test]
fn pattern_groups_ties_keep_first_seen_order() {
    let elements = selectors(&["header > nav", ".footer a", "header > nav", ".footer a"]);
    let groups = pattern_groups(&elements);
    assert_eq!(groups[0].pattern, "header > nav");
    assert_eq!(groups[1].pattern, ".footer a");
}

#[test]
fn pattern_stats_all_unique_has_zero_ratio() {
    let elements = selectors(&["header", "footer", "nav"]);
    let stats = pattern_stats(&elements);
    assert_eq!(stats.total_occurrences, 3);
    assert_eq!(stats.unique_patterns, 3);
    assert_eq!(stats.template_ratio, 0.0);
}

#[test]
fn pattern_stats_single_template_has_ratio_one() {
    let elements = selectors(&["#item-1", "#item-2", "#item-3"]);
    let stats = pattern_stats(&elements);
    assert_eq!(stats.unique_patterns, 1);
    assert_eq!(stats.template_ratio, 1.0);
}

#[test]
fn pattern_stats_empty_input_is_all_zero() {
    let stats = pattern_stats(&[]);
    assert_eq!(stats.total_occurrences, 0);
    assert_eq!(stats.unique_patterns, 0);
    assert_eq!(stats.template_ratio, 0.0);
}

#[test]
fn pattern_stats_mixed_counts_repeated_share() {
    // 4 templated + 1 singleton out of 5.
    let elements = selectors(&[
        ".card:nth-child(1) > img",
        ".card:nth-child(2) > img",
        ".card:nth-child(3) > img",
        ".card:nth-child(4) > img",
        "header > img",
    ]);
    let stats = pattern_stats(&elements);
    assert_eq!(stats.total_occurrences, 5);
    assert_eq!(stats.unique_patterns, 2);
    assert!((stats.template_ratio - 0.8).abs() < f64::EPSILON);
}
