//! Derived Views
//!
//! Pure functions from the live record to chart-ready data.
//! Recomputed on every record change; nothing here is cached.

use serde::Serialize;

use crate::logic::record::{Provenance, Scores};

// ============================================================================
// THRESHOLDS
// ============================================================================

/// Health above this is "good"
pub const HEALTH_GOOD_ABOVE: f64 = 70.0;
/// Dimension above this is "good"
pub const DIMENSION_GOOD_ABOVE: f64 = 80.0;
/// Dimension above this (and not good) is "warning"
pub const DIMENSION_WARNING_ABOVE: f64 = 50.0;

/// Audit opinion cut-offs
pub const OPINION_UNQUALIFIED_ABOVE: f64 = 90.0;
pub const OPINION_QUALIFIED_FROM: f64 = 70.0;

// ============================================================================
// TIERS
// ============================================================================

/// Color tier for a score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Good,
    Warning,
    Critical,
}

impl Tier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Good => "good",
            Tier::Warning => "warning",
            Tier::Critical => "critical",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Tier::Good => "#10b981",     // Green
            Tier::Warning => "#f59e0b",  // Yellow
            Tier::Critical => "#ef4444", // Red
        }
    }
}

/// Health is two-tier: it never shows as critical
pub fn health_tier(score: f64) -> Tier {
    if score > HEALTH_GOOD_ABOVE {
        Tier::Good
    } else {
        Tier::Warning
    }
}

pub fn dimension_tier(score: f64) -> Tier {
    if score > DIMENSION_GOOD_ABOVE {
        Tier::Good
    } else if score > DIMENSION_WARNING_ABOVE {
        Tier::Warning
    } else {
        Tier::Critical
    }
}

// ============================================================================
// LABELS
// ============================================================================

/// `data_accuracy` -> `Data accuracy`
pub fn display_label(key: &str) -> String {
    let spaced = key.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// ============================================================================
// HEALTH RING
// ============================================================================

/// Progress ring for one scalar in [0, 100]: filled + remainder = 100
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthRing {
    pub score: f64,
    pub remainder: f64,
    pub tier: Tier,
    pub color: &'static str,
}

pub fn health_ring(scores: &Scores) -> HealthRing {
    // Out-of-range input would draw a negative slice
    let score = scores.health_score.clamp(0.0, 100.0);
    let tier = health_tier(score);
    HealthRing {
        score,
        remainder: 100.0 - score,
        tier,
        color: tier.color(),
    }
}

// ============================================================================
// DIMENSION BARS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DimensionBar {
    pub key: String,
    pub label: String,
    pub score: f64,
    pub tier: Tier,
    pub color: &'static str,
}

/// One bar per dimension, service order, values unchanged
pub fn dimension_series(scores: &Scores) -> Vec<DimensionBar> {
    scores
        .dimension_scores
        .iter()
        .map(|(key, &score)| {
            let tier = dimension_tier(score);
            DimensionBar {
                key: key.clone(),
                label: display_label(key),
                score,
                tier,
                color: tier.color(),
            }
        })
        .collect()
}

// ============================================================================
// PASS RATE
// ============================================================================

/// Passed rules over total rules. An empty rule set is `0/0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PassRate {
    pub passed: usize,
    pub total: usize,
}

impl PassRate {
    /// None for an empty rule set
    pub fn ratio(&self) -> Option<f64> {
        if self.total == 0 {
            None
        } else {
            Some(self.passed as f64 / self.total as f64)
        }
    }
}

impl std::fmt::Display for PassRate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.passed, self.total)
    }
}

pub fn pass_rate(scores: &Scores) -> PassRate {
    PassRate {
        passed: scores.rule_results.values().filter(|r| r.passed).count(),
        total: scores.rule_results.len(),
    }
}

// ============================================================================
// RULE TABLE
// ============================================================================

/// One row of the detail table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuleRow {
    pub rule_id: String,
    pub label: String,
    pub passed: bool,
    pub status: &'static str,
    pub score: f64,
    pub details: String,
}

pub fn rule_rows(scores: &Scores) -> Vec<RuleRow> {
    scores
        .rule_results
        .iter()
        .map(|(id, result)| RuleRow {
            rule_id: id.clone(),
            label: display_label(id),
            passed: result.passed,
            status: if result.passed { "PASS" } else { "FAIL" },
            score: result.score,
            details: result.details.clone(),
        })
        .collect()
}

pub fn failed_rules(scores: &Scores) -> Vec<&str> {
    scores
        .rule_results
        .iter()
        .filter(|(_, r)| !r.passed)
        .map(|(id, _)| id.as_str())
        .collect()
}

// ============================================================================
// AUDIT OPINION
// ============================================================================

/// Auditor's opinion implied by the health score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AuditOpinion {
    Unqualified,
    Qualified,
    Adverse,
}

impl AuditOpinion {
    pub fn from_health(score: f64) -> Self {
        if score > OPINION_UNQUALIFIED_ABOVE {
            AuditOpinion::Unqualified
        } else if score >= OPINION_QUALIFIED_FROM {
            AuditOpinion::Qualified
        } else {
            AuditOpinion::Adverse
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AuditOpinion::Unqualified => "Unqualified",
            AuditOpinion::Qualified => "Qualified",
            AuditOpinion::Adverse => "Adverse",
        }
    }
}

// ============================================================================
// PROVENANCE
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProvenanceSummary {
    pub timestamp: String,
    pub fingerprint: String,
}

pub fn provenance_summary(provenance: Option<&Provenance>) -> Option<ProvenanceSummary> {
    provenance.map(|p| ProvenanceSummary {
        timestamp: p.timestamp.to_rfc3339(),
        fingerprint: p.short_fingerprint().to_string(),
    })
}

// ============================================================================
// TESTS
// ============================================================================
