//! Data model: input-side audit records and derived report records.

mod core;
mod report;

pub use self::core::{AuditSnapshot, ElementLocator, HealthScore, ImpactTier, Violation};
pub use self::report::{
    ComparisonResult, Delta, EvolutionPoint, EvolutionTrends, Insight, InsightSeverity,
    PatternGroup, PatternStats, SeveritySummary, TierCounts, TierTrend, TrendDirection,
    ViolationBuckets,
};
