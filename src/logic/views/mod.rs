//! Views Module - Presentation data derived from the live record
//!
//! - `derived.rs`: health ring, dimension bars, pass rate, rule table, opinion
//! - `ranker.rs`: remediation ordering

pub mod derived;
pub mod ranker;

pub use derived::{
    dimension_series, dimension_tier, display_label, failed_rules, health_ring, health_tier,
    pass_rate, provenance_summary, rule_rows, AuditOpinion, DimensionBar, HealthRing, PassRate,
    ProvenanceSummary, RuleRow, Tier,
};
pub use ranker::rank_remediation;
