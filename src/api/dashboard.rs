//! Dashboard View
//!
//! Everything one render of the dashboard needs, computed from a single
//! session snapshot.

use serde::Serialize;

use crate::logic::reevaluate::{Notice, OrchestratorState, Session, SessionSnapshot};
use crate::logic::record::{RemediationStep, Standard};
use crate::logic::views::{
    dimension_series, failed_rules, health_ring, pass_rate, provenance_summary, rank_remediation, rule_rows,
    AuditOpinion, DimensionBar, HealthRing, PassRate, ProvenanceSummary, RuleRow,
};

/// Empty state shown when the service had no AI analysis for this standard
pub const NO_ANALYSIS_TEXT: &str = "No analysis available for this standard.";

/// Remediation step as displayed
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RemediationItem {
    pub issue: String,
    pub action: String,
    pub badge: &'static str,
    pub critical: bool,
}

impl From<&RemediationStep> for RemediationItem {
    fn from(step: &RemediationStep) -> Self {
        Self {
            issue: step.issue.clone(),
            action: step.action.clone(),
            badge: step.badge(),
            critical: step.is_critical(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub filename: String,
    pub total_rows: u64,
    pub total_columns: u64,
    pub columns: Vec<String>,
    pub standard: Standard,
    pub standards: Vec<Standard>,
    pub state: OrchestratorState,
    /// False while a re-evaluation is pending
    pub selector_enabled: bool,
    pub health: HealthRing,
    pub opinion: AuditOpinion,
    pub dimensions: Vec<DimensionBar>,
    pub pass_rate: PassRate,
    pub analysis_available: bool,
    pub executive_summary: String,
    pub risk_assessment: String,
    pub remediation: Vec<RemediationItem>,
    pub rules: Vec<RuleRow>,
    pub failed_rules: Vec<String>,
    pub provenance: Option<ProvenanceSummary>,
    pub notices: Vec<Notice>,
}

impl DashboardView {
    pub fn build(snapshot: &SessionSnapshot) -> Self {
        let record = &snapshot.record;
        let scores = &record.scores;
        let analysis = &record.analysis;
        let health = health_ring(scores);

        let executive_summary = if analysis.is_available() {
            analysis.executive_summary.clone().unwrap_or_default()
        } else {
            NO_ANALYSIS_TEXT.to_string()
        };

        Self {
            filename: record.filename.clone(),
            total_rows: record.metadata.total_rows,
            total_columns: record.metadata.total_columns,
            columns: record.metadata.column_names().into_iter().map(str::to_string).collect(),
            standard: snapshot.standard,
            standards: Standard::ALL.to_vec(),
            state: snapshot.state,
            selector_enabled: snapshot.state == OrchestratorState::Idle,
            opinion: AuditOpinion::from_health(health.score),
            health,
            dimensions: dimension_series(scores),
            pass_rate: pass_rate(scores),
            analysis_available: analysis.is_available(),
            executive_summary,
            risk_assessment: analysis.risk_assessment.clone(),
            remediation: rank_remediation(&analysis.remediation_steps)
                .iter()
                .map(RemediationItem::from)
                .collect(),
            rules: rule_rows(scores),
            failed_rules: failed_rules(scores).into_iter().map(str::to_string).collect(),
            provenance: provenance_summary(record.provenance.as_ref()),
            notices: snapshot.notices.clone(),
        }
    }

    pub fn from_session(session: &Session) -> Self {
        Self::build(&session.snapshot())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::record::tests::sample_record;
    use crate::logic::views::Tier;

    fn snapshot() -> SessionSnapshot {
        SessionSnapshot {
            record: sample_record(),
            standard: Standard::GeneralTransaction,
            state: OrchestratorState::Idle,
            epoch: 0,
            notices: vec![],
        }
    }

    #[test]
    fn test_build_from_sample() {
        let view = DashboardView::build(&snapshot());

        assert_eq!(view.filename, "transactions.csv");
        assert_eq!(view.total_rows, 1000);
        assert_eq!(view.columns, vec!["amount", "date"]);
        assert_eq!(view.failed_rules, vec!["accuracy_negative_amounts"]);
        assert!(view.selector_enabled);
        assert_eq!(view.health.score, 68.0);
        assert_eq!(view.health.tier, Tier::Warning);
        assert_eq!(view.opinion, AuditOpinion::Adverse);
        assert_eq!(view.pass_rate.to_string(), "2/3");
        assert_eq!(view.dimensions.len(), 3);
        assert_eq!(view.standards.len(), 6);

        // Critical step ranked first
        assert_eq!(view.remediation[0].issue, "Amounts");
        assert_eq!(view.remediation[0].badge, "CRITICAL");
        assert_eq!(view.remediation[1].badge, "MEDIUM");
    }

    #[test]
    fn test_pending_disables_selector() {
        let mut snap = snapshot();
        snap.state = OrchestratorState::Pending(Standard::Gdpr);
        let view = DashboardView::build(&snap);
        assert!(!view.selector_enabled);
    }

    #[test]
    fn test_missing_analysis_and_rules_degrade_gracefully() {
        let mut snap = snapshot();
        snap.record.analysis.executive_summary = None;
        snap.record.analysis.remediation_steps.clear();
        snap.record.scores.rule_results.clear();
        snap.record.provenance = None;

        let view = DashboardView::build(&snap);
        assert!(!view.analysis_available);
        assert_eq!(view.executive_summary, NO_ANALYSIS_TEXT);
        assert_eq!(view.pass_rate.to_string(), "0/0");
        assert!(view.remediation.is_empty());
        assert!(view.rules.is_empty());
        assert!(view.provenance.is_none());
    }

    #[test]
    fn test_serializes_to_json() {
        let json = serde_json::to_value(DashboardView::build(&snapshot())).unwrap();
        assert_eq!(json["standard"], "General Transaction");
        assert_eq!(json["state"]["state"], "Idle");
        assert_eq!(json["health"]["tier"], "warning");
        assert_eq!(json["health"]["color"], "#f59e0b");
        assert_eq!(json["dimensions"][2]["key"], "accuracy");
        assert_eq!(json["dimensions"][2]["color"], "#ef4444");
        assert_eq!(json["opinion"], "Adverse");
    }
}
