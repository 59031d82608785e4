//! Audit comparison: signed deltas and the five violation buckets.
//!
//! Sign convention (easy to invert, so fixed here): positive violation and
//! page deltas mean regression since the previous audit; a positive health
//! score delta means improvement.

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use crate::scoring::{resolve_health_score, round_score, PenaltyWeights};
use crate::summary::severity_pattern_summary;
use crate::types::{
    AuditSnapshot, ComparisonResult, Delta, SeveritySummary, Violation, ViolationBuckets,
};

/// Compare the current audit against an optional previous audit of the same
/// target.
///
/// Violations are matched by rule identifier. Current-only rules are `new`,
/// previous-only rules are `fixed`; matched rules partition by unique
/// element count into `worsened` (increase), `improved` (decrease) and
/// `persistent` (unchanged). Every violation of either side lands in exactly
/// one bucket.
///
/// Comparing against nothing is a defined case: no previous audit yields an
/// all-zero delta and all-empty buckets, not an error.
pub fn calculate_comparison(
    current: &AuditSnapshot,
    current_violations: &[Violation],
    previous: Option<(&AuditSnapshot, &[Violation])>,
    weights: &PenaltyWeights,
) -> ComparisonResult {
    let Some((previous_audit, previous_violations)) = previous else {
        return ComparisonResult {
            current: current.clone(),
            previous: None,
            delta: Delta::default(),
            violations: ViolationBuckets::default(),
        };
    };

    let previous_by_rule: HashMap<&str, &Violation> = previous_violations
        .iter()
        .map(|v| (v.rule_id.as_str(), v))
        .collect();
    let current_rules: HashSet<&str> = current_violations
        .iter()
        .map(|v| v.rule_id.as_str())
        .collect();

    let mut buckets = ViolationBuckets::default();
    for violation in current_violations {
        match previous_by_rule.get(violation.rule_id.as_str()) {
            None => buckets.new.push(violation.clone()),
            Some(previous_violation) => {
                let bucket = match violation
                    .unique_elements
                    .len()
                    .cmp(&previous_violation.unique_elements.len())
                {
                    Ordering::Greater => &mut buckets.worsened,
                    Ordering::Less => &mut buckets.improved,
                    Ordering::Equal => &mut buckets.persistent,
                };
                bucket.push(violation.clone());
            }
        }
    }
    for violation in previous_violations {
        if !current_rules.contains(violation.rule_id.as_str()) {
            buckets.fixed.push(violation.clone());
        }
    }

    let current_summary = summary_for(current, current_violations);
    let previous_summary = summary_for(previous_audit, previous_violations);

    let current_score = resolve_health_score(current, current_violations, weights);
    let previous_score = resolve_health_score(previous_audit, previous_violations, weights);

    let delta = Delta {
        critical: occurrence_delta(&current_summary, &previous_summary, |s| s.critical),
        serious: occurrence_delta(&current_summary, &previous_summary, |s| s.serious),
        moderate: occurrence_delta(&current_summary, &previous_summary, |s| s.moderate),
        minor: occurrence_delta(&current_summary, &previous_summary, |s| s.minor),
        total: occurrence_delta(&current_summary, &previous_summary, |s| s.total),
        health_score: round_score(current_score - previous_score),
        pages_audited: i64::from(current.processed_pages) - i64::from(previous_audit.processed_pages),
        broken_pages: i64::from(current.broken_pages) - i64::from(previous_audit.broken_pages),
    };

    ComparisonResult {
        current: current.clone(),
        previous: Some(previous_audit.clone()),
        delta,
        violations: buckets,
    }
}

fn summary_for(audit: &AuditSnapshot, violations: &[Violation]) -> SeveritySummary {
    audit
        .severity_summary
        .unwrap_or_else(|| severity_pattern_summary(violations))
}

fn occurrence_delta(
    current: &SeveritySummary,
    previous: &SeveritySummary,
    tier: fn(&SeveritySummary) -> crate::types::TierCounts,
) -> i64 {
    tier(current).occurrences as i64 - tier(previous).occurrences as i64
}
