//! Severity summarization: per-tier occurrence and pattern counts.

use crate::patterns::group_by_pattern;
use crate::types::{SeveritySummary, TierCounts, Violation};

/// Aggregate violations into per-tier occurrence/pattern counts plus a total
/// row.
///
/// Each violation's `unique_elements` are pattern-grouped; its tier
/// accumulates the element count as `occurrences` and the distinct-template
/// count as `patterns`. Patterns are deliberately not deduplicated across
/// violations: two rules sharing a visual pattern still count as two
/// patterns. Violations with no elements contribute zero.
pub fn severity_pattern_summary(violations: &[Violation]) -> SeveritySummary {
    let mut summary = SeveritySummary::default();

    for violation in violations {
        if violation.unique_elements.is_empty() {
            continue;
        }

        let occurrences = violation.unique_elements.len();
        let patterns = violation_pattern_count(violation);

        let tier = summary.tier_mut(violation.impact);
        tier.occurrences += occurrences;
        tier.patterns += patterns;
    }

    summary.total = TierCounts::default();
    summary.total.add(summary.critical);
    summary.total.add(summary.serious);
    summary.total.add(summary.moderate);
    summary.total.add(summary.minor);

    summary
}

/// Distinct templates contributed by one violation.
///
/// Selector grouping is preferred; violations whose elements only carry
/// XPath locators fall back to XPath grouping so they still count.
fn violation_pattern_count(violation: &Violation) -> usize {
    let selector_groups = group_by_pattern(&violation.unique_elements, false);
    if !selector_groups.is_empty() {
        return selector_groups.len();
    }
    group_by_pattern(&violation.unique_elements, true).len()
}
