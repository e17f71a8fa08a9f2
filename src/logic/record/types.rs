//! Record Types
//!
//! Wire shapes of one compliance analysis as the Analysis Service returns it.
//! No logic beyond small accessors.

use chrono::{DateTime, TimeZone, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

// ============================================================================
// ANALYSIS RECORD
// ============================================================================

/// Full in-memory compliance result for one dataset under one standard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    pub filename: String,
    pub metadata: Metadata,
    pub scores: Scores,
    pub analysis: Analysis,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provenance: Option<Provenance>,
}

// ============================================================================
// METADATA
// ============================================================================

/// Dataset profile. Unknown keys (column profiles etc.) are kept verbatim so
/// the metadata is re-sent to the service exactly as received.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(default)]
    pub total_rows: u64,
    #[serde(default)]
    pub total_columns: u64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Metadata {
    /// Column names from the `columns` profile, if the service sent one
    pub fn column_names(&self) -> Vec<&str> {
        match self.extra.get("columns") {
            Some(Value::Object(cols)) => cols.keys().map(String::as_str).collect(),
            _ => vec![],
        }
    }
}

// ============================================================================
// SCORES
// ============================================================================

/// Scores produced by the rule engine. Replaced wholesale on re-evaluation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scores {
    /// Overall health (0 - 100)
    pub health_score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overall_score: Option<f64>,
    /// Dimension name -> score (0 - 100), in service order
    #[serde(default)]
    pub dimension_scores: IndexMap<String, f64>,
    /// Rule id -> result, in service order
    #[serde(default)]
    pub rule_results: IndexMap<String, RuleResult>,
}

/// Outcome of one deterministic rule check
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleResult {
    pub passed: bool,
    pub score: f64,
    #[serde(default)]
    pub details: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

// ============================================================================
// AI ANALYSIS
// ============================================================================

/// AI commentary. Replaced wholesale on re-evaluation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub executive_summary: Option<String>,
    #[serde(default)]
    pub risk_assessment: String,
    #[serde(default)]
    pub remediation_steps: Vec<RemediationStep>,
}

impl Analysis {
    /// False means "no analysis available for this standard"
    pub fn is_available(&self) -> bool {
        self.executive_summary
            .as_deref()
            .map(|s| !s.trim().is_empty())
            .unwrap_or(false)
    }
}

/// AI-suggested fix
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemediationStep {
    #[serde(default)]
    pub issue: String,
    #[serde(default)]
    pub action: String,
    #[serde(
        default,
        deserialize_with = "deserialize_priority",
        skip_serializing_if = "Option::is_none"
    )]
    pub priority: Option<Priority>,
}

impl RemediationStep {
    pub fn is_critical(&self) -> bool {
        self.priority == Some(Priority::Critical)
    }

    /// Badge text shown next to the step
    pub fn badge(&self) -> &'static str {
        self.priority.map(|p| p.as_str()).unwrap_or("INFO")
    }
}

/// Remediation priority tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Priority {
    Critical,
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Critical => "CRITICAL",
            Priority::High => "HIGH",
            Priority::Medium => "MEDIUM",
            Priority::Low => "LOW",
        }
    }

    /// Case-insensitive parse; anything else is "no priority"
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "CRITICAL" => Some(Priority::Critical),
            "HIGH" => Some(Priority::High),
            "MEDIUM" => Some(Priority::Medium),
            "LOW" => Some(Priority::Low),
            _ => None,
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The LLM is free to write "Critical", "urgent" or null here.
fn deserialize_priority<'de, D>(deserializer: D) -> Result<Option<Priority>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(Value::String(s)) => Priority::parse(&s),
        _ => None,
    })
}

// ============================================================================
// PROVENANCE
// ============================================================================

/// Audit attestation signed by the service. Never touched by re-evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Provenance {
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub timestamp: DateTime<Utc>,
    /// Hex digest of the attested content
    pub fingerprint: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Provenance {
    /// First 16 hex chars, enough to compare by eye
    pub fn short_fingerprint(&self) -> &str {
        let end = self
            .fingerprint
            .char_indices()
            .nth(16)
            .map(|(i, _)| i)
            .unwrap_or(self.fingerprint.len());
        &self.fingerprint[..end]
    }
}

/// Accepts RFC 3339 strings or unix seconds (integer or float)
fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match Value::deserialize(deserializer)? {
        Value::String(s) => DateTime::parse_from_rfc3339(&s)
            .map(|dt| dt.with_timezone(&Utc))
            .or_else(|_| {
                // Python's isoformat() omits the offset for naive datetimes
                chrono::NaiveDateTime::parse_from_str(&s, "%Y-%m-%dT%H:%M:%S%.f")
                    .map(|naive| naive.and_utc())
            })
            .map_err(|e| D::Error::custom(format!("invalid timestamp '{}': {}", s, e))),
        Value::Number(n) => {
            let secs = n
                .as_f64()
                .ok_or_else(|| D::Error::custom("invalid numeric timestamp"))?;
            let nanos = ((secs.fract()) * 1e9).round() as u32;
            Utc.timestamp_opt(secs.trunc() as i64, nanos)
                .single()
                .ok_or_else(|| D::Error::custom(format!("timestamp out of range: {}", secs)))
        }
        other => Err(D::Error::custom(format!("unexpected timestamp: {}", other))),
    }
}

// ============================================================================
// TESTS
// ============================================================================
