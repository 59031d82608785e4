//! Rule-based insight generation over summaries, comparisons, and series.
//!
//! Insights are plain-language observations with a severity attached. Each
//! generator walks a fixed rule list in priority order and emits every rule
//! that matches, so the output is bounded and deterministic for a given
//! input. Messages never use colour; rendering decides presentation.

use crate::types::{
    ComparisonResult, EvolutionPoint, EvolutionTrends, Insight, SeveritySummary, TrendDirection,
};

/// Insights for an audit with no predecessor to compare against.
pub fn generate_first_audit_insight(summary: &SeveritySummary) -> Vec<Insight> {
    let mut insights = Vec::new();

    if summary.total.occurrences == 0 {
        insights.push(Insight::positive(
            "clean_audit",
            "No accessibility violations detected. Baseline is clean.",
        ));
    } else if summary.critical.occurrences > 0 {
        insights.push(Insight::warning(
            "critical_baseline",
            format!(
                "First audit found {} critical violation occurrence(s). \
                 Prioritize these before the next audit.",
                summary.critical.occurrences
            ),
        ));
    } else {
        insights.push(Insight::info(
            "baseline_recorded",
            format!(
                "Baseline recorded: {} violation occurrence(s) across {} pattern(s).",
                summary.total.occurrences, summary.total.patterns
            ),
        ));
    }

    insights
}

/// Insights for a two-audit comparison, in priority order.
pub fn generate_comparison_insights(comparison: &ComparisonResult) -> Vec<Insight> {
    let mut insights = Vec::new();
    let delta = &comparison.delta;
    let buckets = &comparison.violations;

    // Snapshots often carry no stored summary; the current side of the
    // buckets is the violation set itself, so count occurrences from there.
    let current_total = match comparison.current.severity_summary {
        Some(summary) => summary.total.occurrences,
        None => buckets
            .new
            .iter()
            .chain(&buckets.persistent)
            .chain(&buckets.worsened)
            .chain(&buckets.improved)
            .map(|v| v.unique_elements.len())
            .sum(),
    };

    if current_total == 0 && buckets.new.is_empty() {
        insights.push(Insight::positive(
            "clean_audit",
            "Current audit has no violations. All previously reported issues are resolved.",
        ));
        return insights;
    }

    if delta.critical > 0 {
        insights.push(Insight::warning(
            "critical_regression",
            format!(
                "Critical violations increased by {} occurrence(s) since the previous audit.",
                delta.critical
            ),
        ));
    }

    let no_tier_regressed =
        delta.critical <= 0 && delta.serious <= 0 && delta.moderate <= 0 && delta.minor <= 0;
    if no_tier_regressed && delta.total < 0 {
        insights.push(Insight::positive(
            "across_the_board_improvement",
            format!(
                "Violations decreased by {} occurrence(s) with no severity tier regressing.",
                -delta.total
            ),
        ));
    }

    if !buckets.fixed.is_empty() && buckets.new.is_empty() {
        insights.push(Insight::positive(
            "rules_resolved",
            format!(
                "{} rule(s) fixed since the previous audit with no new rules introduced.",
                buckets.fixed.len()
            ),
        ));
    } else if buckets.new.len() > buckets.fixed.len() {
        insights.push(Insight::warning(
            "new_rules_outpace_fixes",
            format!(
                "{} new rule(s) appeared while only {} were fixed.",
                buckets.new.len(),
                buckets.fixed.len()
            ),
        ));
    }

    if insights.is_empty() {
        if delta.total == 0 && buckets.new.is_empty() && buckets.fixed.is_empty() {
            insights.push(Insight::info(
                "steady_state",
                "No change since the previous audit.",
            ));
        } else {
            insights.push(Insight::info(
                "mixed_change",
                format!(
                    "Mixed movement: {} new, {} fixed, {} worsened, {} improved rule(s).",
                    buckets.new.len(),
                    buckets.fixed.len(),
                    buckets.worsened.len(),
                    buckets.improved.len()
                ),
            ));
        }
    }

    insights
}

/// Insights for a multi-audit evolution series.
pub fn generate_evolution_insights(
    points: &[EvolutionPoint],
    trends: &EvolutionTrends,
) -> Vec<Insight> {
    if points.len() < 2 {
        return vec![Insight::info(
            "insufficient_history",
            "At least two completed audits are needed to analyze trends.",
        )];
    }

    let mut insights = Vec::new();

    match trends.health.direction {
        TrendDirection::Up => insights.push(Insight::positive(
            "health_improving",
            format!(
                "Health score trending up across {} audits ({:.1} to {:.1}).",
                points.len(),
                trends.health.first,
                trends.health.last
            ),
        )),
        TrendDirection::Down => insights.push(Insight::warning(
            "health_declining",
            format!(
                "Health score trending down across {} audits ({:.1} to {:.1}).",
                points.len(),
                trends.health.first,
                trends.health.last
            ),
        )),
        TrendDirection::Stable => {}
    }

    if trends.critical.direction == TrendDirection::Up {
        insights.push(Insight::warning(
            "critical_trending_up",
            format!(
                "Critical violations are trending up ({:.0} to {:.0}).",
                trends.critical.first, trends.critical.last
            ),
        ));
    }

    if trends.total.direction == TrendDirection::Down {
        insights.push(Insight::positive(
            "violations_trending_down",
            format!(
                "Total violations are trending down ({:.0} to {:.0}).",
                trends.total.first, trends.total.last
            ),
        ));
    }

    if insights.is_empty() {
        insights.push(Insight::info(
            "trends_stable",
            format!("No significant movement across {} audits.", points.len()),
        ));
    }

    insights
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trends::{calculate_evolution_trends, DEFAULT_NOISE_THRESHOLD};
    use crate::types::{
        AuditSnapshot, Delta, InsightSeverity, TierCounts, ViolationBuckets,
    };
    use chrono::{TimeZone, Utc};

    fn summary(critical: usize, total: usize) -> SeveritySummary {
        let mut s = SeveritySummary::default();
        s.critical = TierCounts { occurrences: critical, patterns: critical.min(1) };
        s.total = TierCounts { occurrences: total, patterns: total.min(1) };
        s
    }

    fn comparison(delta: Delta, summary_total: usize) -> ComparisonResult {
        ComparisonResult {
            current: AuditSnapshot {
                id: "a2".to_string(),
                created_at: Utc.with_ymd_and_hms(2024, 5, 2, 8, 0, 0).unwrap(),
                completed_at: None,
                total_pages: 10,
                processed_pages: 10,
                broken_pages: 0,
                severity_summary: Some(summary(0, summary_total)),
                health_score: Default::default(),
            },
            previous: None,
            delta,
            violations: ViolationBuckets::default(),
        }
    }

    #[test]
    fn first_audit_with_no_violations_is_positive() {
        let insights = generate_first_audit_insight(&SeveritySummary::default());
        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].severity, InsightSeverity::Positive);
        assert_eq!(insights[0].insight_type, "clean_audit");
    }

    #[test]
    fn first_audit_with_critical_violations_warns() {
        let insights = generate_first_audit_insight(&summary(3, 8));
        assert_eq!(insights[0].severity, InsightSeverity::Warning);
        assert!(insights[0].message.contains("3 critical"));
    }

    #[test]
    fn persistent_violations_without_stored_summary_are_not_clean() {
        use crate::types::{ImpactTier, Violation};

        let mut result = comparison(Delta::default(), 0);
        result.current.severity_summary = None;
        result.violations.persistent.push(Violation {
            rule_id: "image-alt".to_string(),
            impact: ImpactTier::Critical,
            description: "Images must have alternate text".to_string(),
            help_text: None,
            wcag_tags: vec![],
            unique_elements: vec![crate::types::ElementLocator::from_selector("#hero img")],
            suggestion: None,
        });

        let insights = generate_comparison_insights(&result);
        assert!(
            insights.iter().all(|i| i.insight_type != "clean_audit"),
            "a persisting violation must never read as a clean audit"
        );
        assert_eq!(insights[0].insight_type, "steady_state");
    }

    #[test]
    fn clean_comparison_short_circuits_to_single_positive() {
        let result = comparison(Delta { total: -5, ..Delta::default() }, 0);
        let insights = generate_comparison_insights(&result);
        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].insight_type, "clean_audit");
    }

    #[test]
    fn critical_regression_warns_before_anything_else() {
        let result = comparison(
            Delta { critical: 2, total: 2, ..Delta::default() },
            12,
        );
        let insights = generate_comparison_insights(&result);
        assert_eq!(insights[0].severity, InsightSeverity::Warning);
        assert_eq!(insights[0].insight_type, "critical_regression");
    }

    #[test]
    fn steady_state_yields_single_info() {
        let result = comparison(Delta::default(), 4);
        let insights = generate_comparison_insights(&result);
        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].severity, InsightSeverity::Info);
        assert_eq!(insights[0].insight_type, "steady_state");
    }

    #[test]
    fn evolution_needs_two_points() {
        let trends = calculate_evolution_trends(&[], DEFAULT_NOISE_THRESHOLD);
        let insights = generate_evolution_insights(&[], &trends);
        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].insight_type, "insufficient_history");
    }

    #[test]
    fn declining_health_series_warns() {
        let points = vec![
            EvolutionPoint {
                audit_id: "a1".to_string(),
                timestamp: Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap(),
                health_score: 90.0,
                summary: summary(0, 10),
            },
            EvolutionPoint {
                audit_id: "a2".to_string(),
                timestamp: Utc.with_ymd_and_hms(2024, 5, 8, 8, 0, 0).unwrap(),
                health_score: 60.0,
                summary: summary(2, 18),
            },
        ];
        let trends = calculate_evolution_trends(&points, DEFAULT_NOISE_THRESHOLD);
        let insights = generate_evolution_insights(&points, &trends);

        assert!(insights
            .iter()
            .any(|i| i.insight_type == "health_declining"
                && i.severity == InsightSeverity::Warning));
    }
}
