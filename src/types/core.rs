//! Core audit records consumed and produced by the engine.
//!
//! This module contains the input-side data structures:
//! - [`ElementLocator`] - structural path to a DOM element
//! - [`ImpactTier`] - severity classification of a violation
//! - [`Violation`] - one rule failure aggregated across an audit's pages
//! - [`AuditSnapshot`] - one completed scan run
//! - [`HealthScore`] - stored-or-missing score with a single recomputation path

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::error::A11yError;
use super::report::SeveritySummary;

/// A structural path to a DOM element, as reported by the scanner.
///
/// At least one of the two locator fields must be present for pattern
/// grouping to apply; elements missing the selected field are skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ElementLocator {
    /// CSS-selector-like locator
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selector: Option<String>,
    /// XPath-like locator
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xpath: Option<String>,
}

impl ElementLocator {
    pub fn from_selector(selector: impl Into<String>) -> Self {
        Self {
            selector: Some(selector.into()),
            xpath: None,
        }
    }

    pub fn from_xpath(xpath: impl Into<String>) -> Self {
        Self {
            selector: None,
            xpath: Some(xpath.into()),
        }
    }

    /// The raw locator string for the requested axis, if present.
    pub fn locator(&self, use_xpath: bool) -> Option<&str> {
        if use_xpath {
            self.xpath.as_deref()
        } else {
            self.selector.as_deref()
        }
    }
}

/// Severity tier of a violation, ordered by audit impact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImpactTier {
    Critical,
    Serious,
    Moderate,
    Minor,
}

impl ImpactTier {
    pub const fn all() -> [ImpactTier; 4] {
        [
            ImpactTier::Critical,
            ImpactTier::Serious,
            ImpactTier::Moderate,
            ImpactTier::Minor,
        ]
    }
}

impl fmt::Display for ImpactTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                ImpactTier::Critical => "critical",
                ImpactTier::Serious => "serious",
                ImpactTier::Moderate => "moderate",
                ImpactTier::Minor => "minor",
            }
        )
    }
}

impl FromStr for ImpactTier {
    type Err = A11yError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "critical" => Ok(ImpactTier::Critical),
            "serious" => Ok(ImpactTier::Serious),
            "moderate" => Ok(ImpactTier::Moderate),
            "minor" => Ok(ImpactTier::Minor),
            other => Err(A11yError::UnknownImpact(other.to_string())),
        }
    }
}

/// One accessibility rule failure, aggregated across all pages of one audit.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Violation {
    /// Rule identifier (e.g., "image-alt", "color-contrast")
    pub rule_id: String,
    pub impact: ImpactTier,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help_text: Option<String>,
    /// WCAG success criteria tags (e.g., "wcag111")
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub wcag_tags: Vec<String>,
    /// Unique element instances that failed this rule
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unique_elements: Vec<ElementLocator>,
    /// AI-generated fix suggestion; opaque to the engine
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<Value>,
}

/// A health score that may predate score persistence.
///
/// Old audit records lack a precomputed score; those deserialize to
/// [`HealthScore::Missing`] and are backfilled through the one recomputation
/// path in [`crate::scoring::resolve_health_score`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "Option<f64>", into = "Option<f64>")]
pub enum HealthScore {
    Stored(f64),
    Missing,
}

impl HealthScore {
    pub fn stored(self) -> Option<f64> {
        match self {
            HealthScore::Stored(score) => Some(score),
            HealthScore::Missing => None,
        }
    }

    pub fn is_missing(self) -> bool {
        matches!(self, HealthScore::Missing)
    }
}

impl Default for HealthScore {
    fn default() -> Self {
        HealthScore::Missing
    }
}

impl From<Option<f64>> for HealthScore {
    fn from(value: Option<f64>) -> Self {
        match value {
            Some(score) => HealthScore::Stored(score),
            None => HealthScore::Missing,
        }
    }
}

impl From<HealthScore> for Option<f64> {
    fn from(value: HealthScore) -> Self {
        value.stored()
    }
}

/// One completed scan run.
///
/// Immutable once its violations are persisted, except for score backfill on
/// records that predate score persistence.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditSnapshot {
    pub id: String,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    /// Pages discovered by the crawler
    pub total_pages: u32,
    /// Pages actually scanned
    pub processed_pages: u32,
    /// Pages discovered but unreachable
    #[serde(default)]
    pub broken_pages: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity_summary: Option<SeveritySummary>,
    #[serde(default)]
    pub health_score: HealthScore,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn impact_tier_display_and_parse_round_trip() {
        for tier in ImpactTier::all() {
            let rendered = tier.to_string();
            let parsed = ImpactTier::from_str(&rendered).expect("parse should succeed");
            assert_eq!(parsed, tier);
        }

        let parsed = ImpactTier::from_str("SERIOUS").expect("case insensitive parse");
        assert_eq!(parsed, ImpactTier::Serious);

        assert!(matches!(
            ImpactTier::from_str("blocker"),
            Err(A11yError::UnknownImpact(_))
        ));
    }

    #[test]
    fn unknown_impact_is_rejected_at_deserialization() {
        let raw = r#"{
            "ruleId": "image-alt",
            "impact": "blocker",
            "description": "Images must have alternate text"
        }"#;
        let parsed: Result<Violation, _> = serde_json::from_str(raw);
        assert!(parsed.is_err(), "unknown tier must not deserialize");
    }

    #[test]
    fn health_score_round_trips_as_nullable_number() {
        let stored: HealthScore = serde_json::from_str("87.5").expect("number deserializes");
        assert_eq!(stored, HealthScore::Stored(87.5));

        let missing: HealthScore = serde_json::from_str("null").expect("null deserializes");
        assert!(missing.is_missing());

        assert_eq!(serde_json::to_string(&stored).unwrap(), "87.5");
        assert_eq!(serde_json::to_string(&missing).unwrap(), "null");
    }

    #[test]
    fn audit_without_score_defaults_to_missing() {
        let raw = r#"{
            "id": "audit-1",
            "createdAt": "2024-05-01T10:00:00Z",
            "totalPages": 12,
            "processedPages": 10
        }"#;
        let audit: AuditSnapshot = serde_json::from_str(raw).expect("audit deserializes");
        assert!(audit.health_score.is_missing());
        assert_eq!(audit.broken_pages, 0);
        assert!(audit.severity_summary.is_none());
    }

    #[test]
    fn locator_selects_requested_axis() {
        let locator = ElementLocator {
            selector: Some(".card > img".to_string()),
            xpath: None,
        };
        assert_eq!(locator.locator(false), Some(".card > img"));
        assert_eq!(locator.locator(true), None);
    }
}
