//! Versioned JSON output envelopes for each analysis mode.

use serde::{Deserialize, Serialize};

use crate::error::ErrorPayload;
use crate::types::{
    AuditSnapshot, ComparisonResult, EvolutionPoint, EvolutionTrends, Insight, PatternGroup,
    PatternStats, SeveritySummary,
};

/// Schema version stamped into every output record.
pub const A11Y_OUTPUT_VERSION: &str = "0.1.0";

/// Top-level output, tagged by analysis mode.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "kebab-case")]
pub enum AuditOutput {
    Summary(SummaryOutput),
    Compare(CompareOutput),
    Evolution(EvolutionOutput),
    Error(ErrorOutput),
}

/// Single-audit aggregation: severity summary, dominant patterns, health.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryOutput {
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audit: Option<AuditSnapshot>,
    pub severity_summary: SeveritySummary,
    pub pattern_groups: Vec<PatternGroup>,
    pub pattern_stats: PatternStats,
    pub health_score: f64,
    pub insights: Vec<Insight>,
}

/// Two-audit comparison with derived insights.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompareOutput {
    pub version: String,
    pub comparison: ComparisonResult,
    pub insights: Vec<Insight>,
}

/// Multi-audit evolution: series points, per-tier trends, insights.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvolutionOutput {
    pub version: String,
    pub points: Vec<EvolutionPoint>,
    pub trends: EvolutionTrends,
    pub insights: Vec<Insight>,
}

/// Failure envelope; carries the categorized payload with remediation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorOutput {
    pub version: String,
    pub error: ErrorPayload,
}

impl AuditOutput {
    pub fn summary(
        audit: Option<AuditSnapshot>,
        severity_summary: SeveritySummary,
        pattern_groups: Vec<PatternGroup>,
        pattern_stats: PatternStats,
        health_score: f64,
        insights: Vec<Insight>,
    ) -> Self {
        AuditOutput::Summary(SummaryOutput {
            version: A11Y_OUTPUT_VERSION.to_string(),
            audit,
            severity_summary,
            pattern_groups,
            pattern_stats,
            health_score,
            insights,
        })
    }

    pub fn compare(comparison: ComparisonResult, insights: Vec<Insight>) -> Self {
        AuditOutput::Compare(CompareOutput {
            version: A11Y_OUTPUT_VERSION.to_string(),
            comparison,
            insights,
        })
    }

    pub fn evolution(
        points: Vec<EvolutionPoint>,
        trends: EvolutionTrends,
        insights: Vec<Insight>,
    ) -> Self {
        AuditOutput::Evolution(EvolutionOutput {
            version: A11Y_OUTPUT_VERSION.to_string(),
            points,
            trends,
            insights,
        })
    }

    pub fn error(payload: ErrorPayload) -> Self {
        AuditOutput::Error(ErrorOutput {
            version: A11Y_OUTPUT_VERSION.to_string(),
            error: payload,
        })
    }
}
