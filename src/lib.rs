//! Accessibility audit analytics library.
//!
//! Turns raw accessibility-audit results (violations with affected elements)
//! into reviewable analytics: severity summaries, structural element
//! patterns, a 0-100 health score, audit-to-audit comparisons, and trends
//! over audit series. All computation is pure and deterministic; the only
//! I/O lives in [`input`] and in the CLI binary.
//!
//! # Module Overview
//!
//! - [`patterns`] - Selector/XPath normalization and pattern grouping
//! - [`summary`] - Per-severity occurrence and pattern counts
//! - [`scoring`] - Weighted log-penalty health score
//! - [`comparison`] - Rule-keyed audit diffing into change buckets
//! - [`trends`] - Direction and magnitude across audit series
//! - [`insights`] - Rule-based plain-language observations
//! - [`config`] - TOML configuration (weights, noise threshold)
//! - [`types`] - Core data types and structures
//! - [`output`] - JSON output schemas
//!
//! # Example
//!
//! ```
//! use a11ylens_lib::{severity_pattern_summary, health_score, PenaltyWeights};
//!
//! let summary = severity_pattern_summary(&[]);
//! let score = health_score(&summary, 10, 0, &PenaltyWeights::default());
//! assert_eq!(score, 100.0);
//! ```

pub mod comparison;
pub mod config;
pub mod error;
pub mod input;
pub mod insights;
pub mod output;
pub mod patterns;
pub mod scoring;
pub mod summary;
pub mod trends;
pub mod types;

pub use comparison::calculate_comparison;
pub use config::Config;
pub use error::{A11yError, ErrorCategory, ErrorPayload, Result};
pub use input::{load_audit, load_series, load_violations, AuditRecord};
pub use insights::{
    generate_comparison_insights, generate_evolution_insights, generate_first_audit_insight,
};
pub use output::{
    AuditOutput, CompareOutput, ErrorOutput, EvolutionOutput, SummaryOutput, A11Y_OUTPUT_VERSION,
};
pub use patterns::{
    count_unique_patterns, group_by_pattern, normalize_selector, normalize_xpath, pattern_groups,
    pattern_stats, MAX_PATTERN_EXAMPLES,
};
pub use scoring::{health_score, resolve_health_score, PenaltyWeights};
pub use summary::severity_pattern_summary;
pub use trends::{calculate_evolution_trends, evolution_points, DEFAULT_NOISE_THRESHOLD};
pub use types::{
    AuditSnapshot, ComparisonResult, Delta, ElementLocator, EvolutionPoint, EvolutionTrends,
    HealthScore, ImpactTier, Insight, InsightSeverity, PatternGroup, PatternStats,
    SeveritySummary, TierCounts, TierTrend, TrendDirection, Violation, ViolationBuckets,
};
