//! Health scoring: severity summary + page reachability -> one 0-100 score.

use serde::{Deserialize, Serialize};

use crate::summary::severity_pattern_summary;
use crate::types::{AuditSnapshot, HealthScore, SeveritySummary, Violation};

/// Per-occurrence penalty weights, applied on a saturating log curve.
///
/// Tier weights must be strictly ordered critical > serious > moderate >
/// minor so higher tiers always penalize more per occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct PenaltyWeights {
    pub critical: f64,
    pub serious: f64,
    pub moderate: f64,
    pub minor: f64,
    /// Weight applied to the broken/processed page ratio
    pub broken_pages: f64,
}

impl Default for PenaltyWeights {
    fn default() -> Self {
        Self {
            critical: 12.0,
            serious: 7.0,
            moderate: 3.0,
            minor: 1.0,
            broken_pages: 20.0,
        }
    }
}

impl PenaltyWeights {
    /// Tier weights must be non-negative and strictly ordered by impact.
    pub fn validate(&self) -> Result<(), String> {
        if self.minor < 0.0 || self.broken_pages < 0.0 {
            return Err("penalty weights must be non-negative".to_string());
        }
        if !(self.critical > self.serious
            && self.serious > self.moderate
            && self.moderate > self.minor)
        {
            return Err(
                "penalty weights must satisfy critical > serious > moderate > minor".to_string(),
            );
        }
        Ok(())
    }
}

/// Compute the 0-100 health score for one audit.
///
/// Each tier contributes `weight * ln(1 + occurrences)`: the log curve keeps
/// a single page with many repeated violations from collapsing the score to
/// zero while staying monotonic in every count. Unreachable pages add
/// `broken_weight * broken/processed` (ratio 0 when no pages were
/// processed). The result is clamped to [0, 100] and rounded once to one
/// decimal.
pub fn health_score(
    summary: &SeveritySummary,
    processed_pages: u32,
    broken_pages: u32,
    weights: &PenaltyWeights,
) -> f64 {
    let mut penalty = 0.0;
    penalty += weights.critical * saturating_penalty(summary.critical.occurrences);
    penalty += weights.serious * saturating_penalty(summary.serious.occurrences);
    penalty += weights.moderate * saturating_penalty(summary.moderate.occurrences);
    penalty += weights.minor * saturating_penalty(summary.minor.occurrences);

    let broken_ratio = if processed_pages == 0 {
        0.0
    } else {
        f64::from(broken_pages.min(processed_pages)) / f64::from(processed_pages)
    };
    penalty += weights.broken_pages * broken_ratio;

    round_score((100.0 - penalty).clamp(0.0, 100.0))
}

fn saturating_penalty(occurrences: usize) -> f64 {
    (occurrences as f64).ln_1p()
}

/// One rounding step, applied exactly once per derived score.
pub(crate) fn round_score(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Resolve an audit's health score through the single recomputation path.
///
/// Stored scores are returned as-is; records that predate score persistence
/// are recomputed from the persisted summary, or from the violations when no
/// summary was persisted either. Both display and backfill therefore use one
/// formula.
pub fn resolve_health_score(
    audit: &AuditSnapshot,
    violations: &[Violation],
    weights: &PenaltyWeights,
) -> f64 {
    match audit.health_score {
        HealthScore::Stored(score) => score,
        HealthScore::Missing => {
            let summary = audit
                .severity_summary
                .unwrap_or_else(|| severity_pattern_summary(violations));
            health_score(
                &summary,
                audit.processed_pages,
                audit.broken_pages,
                weights,
            )
        }
    }
}
