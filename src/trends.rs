//! Evolution trends over a chronological series of audits.
//!
//! Callers must supply audits ordered oldest to newest; the engine does not
//! sort. Direction compares the most recent value against the earliest one
//! with a relative noise threshold, and magnitude is the signed percentage
//! change versus that baseline. A zero baseline is a defined edge case:
//! `stable` with no magnitude, never a division by zero.

use crate::scoring::{resolve_health_score, round_score, PenaltyWeights};
use crate::summary::severity_pattern_summary;
use crate::types::{
    AuditSnapshot, EvolutionPoint, EvolutionTrends, TierTrend, TrendDirection, Violation,
};

/// Default relative change below which a series counts as stable.
pub const DEFAULT_NOISE_THRESHOLD: f64 = 0.05;

/// Reduce completed audits to their trendable values.
///
/// Summaries and scores go through the same paths as everywhere else, so a
/// record that predates score persistence trends identically to one scored
/// at scan time.
pub fn evolution_points(
    records: &[(AuditSnapshot, Vec<Violation>)],
    weights: &PenaltyWeights,
) -> Vec<EvolutionPoint> {
    records
        .iter()
        .map(|(audit, violations)| EvolutionPoint {
            audit_id: audit.id.clone(),
            timestamp: audit.completed_at.unwrap_or(audit.created_at),
            health_score: resolve_health_score(audit, violations, weights),
            summary: audit
                .severity_summary
                .unwrap_or_else(|| severity_pattern_summary(violations)),
        })
        .collect()
}

/// Derive per-tier direction and magnitude from a chronological series.
///
/// Fewer than two points cannot move, so every series reads `stable`.
pub fn calculate_evolution_trends(
    points: &[EvolutionPoint],
    noise_threshold: f64,
) -> EvolutionTrends {
    let series = |value: fn(&EvolutionPoint) -> f64| -> TierTrend {
        let (first, last) = match (points.first(), points.last()) {
            (Some(first), Some(last)) if points.len() >= 2 => (value(first), value(last)),
            (Some(only), _) => (value(only), value(only)),
            _ => (0.0, 0.0),
        };
        tier_trend(first, last, noise_threshold)
    };

    EvolutionTrends {
        critical: series(|p| p.summary.critical.occurrences as f64),
        serious: series(|p| p.summary.serious.occurrences as f64),
        moderate: series(|p| p.summary.moderate.occurrences as f64),
        minor: series(|p| p.summary.minor.occurrences as f64),
        total: series(|p| p.summary.total.occurrences as f64),
        health: series(|p| p.health_score),
    }
}

fn tier_trend(first: f64, last: f64, noise_threshold: f64) -> TierTrend {
    if first == 0.0 {
        return TierTrend {
            direction: TrendDirection::Stable,
            magnitude: None,
            first,
            last,
        };
    }

    let change = (last - first) / first;
    let direction = if change > noise_threshold {
        TrendDirection::Up
    } else if change < -noise_threshold {
        TrendDirection::Down
    } else {
        TrendDirection::Stable
    };

    TierTrend {
        direction,
        magnitude: Some(round_score(change * 100.0)),
        first,
        last,
    }
}
