//! Derived report records produced by the engine.
//!
//! All of these are JSON-serializable outputs consumed by dashboards,
//! exporters, and the comparison/evolution API surface.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::core::{AuditSnapshot, ElementLocator, ImpactTier, Violation};

/// Occurrence and pattern counts for one severity tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct TierCounts {
    /// Total element instances
    pub occurrences: usize,
    /// Distinct normalized templates (not deduplicated across rules)
    pub patterns: usize,
}

impl TierCounts {
    pub fn add(&mut self, other: TierCounts) {
        self.occurrences += other.occurrences;
        self.patterns += other.patterns;
    }
}

/// Per-tier counts plus a total row summing all four tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SeveritySummary {
    pub critical: TierCounts,
    pub serious: TierCounts,
    pub moderate: TierCounts,
    pub minor: TierCounts,
    pub total: TierCounts,
}

impl SeveritySummary {
    pub fn tier(&self, tier: ImpactTier) -> &TierCounts {
        match tier {
            ImpactTier::Critical => &self.critical,
            ImpactTier::Serious => &self.serious,
            ImpactTier::Moderate => &self.moderate,
            ImpactTier::Minor => &self.minor,
        }
    }

    pub fn tier_mut(&mut self, tier: ImpactTier) -> &mut TierCounts {
        match tier {
            ImpactTier::Critical => &mut self.critical,
            ImpactTier::Serious => &mut self.serious,
            ImpactTier::Moderate => &mut self.moderate,
            ImpactTier::Minor => &mut self.minor,
        }
    }
}

/// One normalized template and the elements sharing it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternGroup {
    pub pattern: String,
    /// Bucket size
    pub occurrences: usize,
    /// First elements of the bucket, bounded to 3
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<ElementLocator>,
}

/// Aggregate statistics over a grouped element collection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternStats {
    pub total_occurrences: usize,
    pub unique_patterns: usize,
    /// Fraction of occurrences belonging to templates with more than one
    /// occurrence; 0.0 for empty input.
    pub template_ratio: f64,
}

/// Signed differences between two audits (current minus previous).
///
/// Sign convention: positive violation/page deltas mean regression; a
/// positive `health_score` delta means improvement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Delta {
    pub critical: i64,
    pub serious: i64,
    pub moderate: i64,
    pub minor: i64,
    pub total: i64,
    pub health_score: f64,
    pub pages_audited: i64,
    pub broken_pages: i64,
}

/// The five disjoint, jointly exhaustive comparison buckets.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ViolationBuckets {
    /// Present in current only
    pub new: Vec<Violation>,
    /// Present in previous only
    pub fixed: Vec<Violation>,
    /// Matched with unchanged element count
    pub persistent: Vec<Violation>,
    /// Matched with increased element count
    pub worsened: Vec<Violation>,
    /// Matched with decreased element count
    pub improved: Vec<Violation>,
}

impl ViolationBuckets {
    pub fn len(&self) -> usize {
        self.new.len()
            + self.fixed.len()
            + self.persistent.len()
            + self.worsened.len()
            + self.improved.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Result of comparing an audit against an optional previous audit.
///
/// Computed on demand; never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    pub current: AuditSnapshot,
    pub previous: Option<AuditSnapshot>,
    pub delta: Delta,
    pub violations: ViolationBuckets,
}

/// One audit reduced to its trendable values.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvolutionPoint {
    pub audit_id: String,
    pub timestamp: DateTime<Utc>,
    pub health_score: f64,
    pub summary: SeveritySummary,
}

/// Direction of a series between its baseline and most recent value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Up,
    Down,
    Stable,
}

/// Direction and signed percentage magnitude for one tracked series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TierTrend {
    pub direction: TrendDirection,
    /// Signed percentage relative to the baseline; `None` when the baseline
    /// is zero (undefined rather than a division by zero).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub magnitude: Option<f64>,
    pub first: f64,
    pub last: f64,
}

/// Per-tier trends plus total occurrences and health score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvolutionTrends {
    pub critical: TierTrend,
    pub serious: TierTrend,
    pub moderate: TierTrend,
    pub minor: TierTrend,
    pub total: TierTrend,
    pub health: TierTrend,
}

/// Severity of a generated insight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightSeverity {
    Positive,
    Info,
    Warning,
}

/// A human-readable insight record derived from delta/trend shapes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Insight {
    pub severity: InsightSeverity,
    #[serde(rename = "type")]
    pub insight_type: String,
    pub message: String,
}

impl Insight {
    pub fn positive(insight_type: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: InsightSeverity::Positive,
            insight_type: insight_type.into(),
            message: message.into(),
        }
    }

    pub fn info(insight_type: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: InsightSeverity::Info,
            insight_type: insight_type.into(),
            message: message.into(),
        }
    }

    pub fn warning(insight_type: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: InsightSeverity::Warning,
            insight_type: insight_type.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_summary_serializes_camel_case() {
        let mut summary = SeveritySummary::default();
        summary.critical = TierCounts {
            occurrences: 2,
            patterns: 1,
        };
        summary.total = TierCounts {
            occurrences: 2,
            patterns: 1,
        };

        let json = serde_json::to_string(&summary).expect("serialize summary");
        assert!(json.contains("\"critical\":{\"occurrences\":2,\"patterns\":1}"));
        assert!(json.contains("\"total\""));
    }

    #[test]
    fn tier_accessors_agree() {
        let mut summary = SeveritySummary::default();
        summary.tier_mut(ImpactTier::Serious).occurrences = 4;
        assert_eq!(summary.tier(ImpactTier::Serious).occurrences, 4);
        assert_eq!(summary.serious.occurrences, 4);
    }

    #[test]
    fn delta_defaults_to_all_zero() {
        let delta = Delta::default();
        assert_eq!(delta.critical, 0);
        assert_eq!(delta.total, 0);
        assert_eq!(delta.health_score, 0.0);
        assert_eq!(delta.pages_audited, 0);
    }

    #[test]
    fn insight_type_serializes_as_type() {
        let insight = Insight::warning("critical_regression", "Critical violations increased.");
        let json = serde_json::to_string(&insight).expect("serialize insight");
        assert!(json.contains("\"type\":\"critical_regression\""));
        assert!(json.contains("\"severity\":\"warning\""));
    }
}
