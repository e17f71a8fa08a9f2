//! Plain-text rendering of a `DashboardView` for the terminal

use std::fmt;

use super::dashboard::DashboardView;

const BAR_WIDTH: usize = 20;

fn bar(score: f64) -> String {
    let filled = ((score.clamp(0.0, 100.0) / 100.0) * BAR_WIDTH as f64).round() as usize;
    format!("{}{}", "#".repeat(filled), ".".repeat(BAR_WIDTH - filled))
}

pub fn render_text(view: &DashboardView) -> String {
    view.to_string()
}

impl fmt::Display for DashboardView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "== {} ({} rows x {} columns) ==", self.filename, self.total_rows, self.total_columns)?;
        writeln!(
            f,
            "Standard: {}{}",
            self.standard,
            if self.selector_enabled { "" } else { "  [re-evaluating...]" }
        )?;
        writeln!(
            f,
            "Health:   {:.1}/100 [{}] {}  opinion: {}",
            self.health.score,
            bar(self.health.score),
            self.health.tier.as_str(),
            self.opinion.as_str()
        )?;
        writeln!(f, "Rules:    {} passed", self.pass_rate)?;

        if !self.dimensions.is_empty() {
            writeln!(f, "\nDimensions")?;
            for dim in &self.dimensions {
                writeln!(f, "  {:<24} {:>5.1} [{}] {}", dim.label, dim.score, bar(dim.score), dim.tier.as_str())?;
            }
        }

        writeln!(f, "\nExecutive summary\n  {}", self.executive_summary)?;
        if !self.risk_assessment.is_empty() {
            writeln!(f, "Risk assessment\n  {}", self.risk_assessment)?;
        }

        if !self.remediation.is_empty() {
            writeln!(f, "\nRecommendations")?;
            for item in &self.remediation {
                writeln!(f, "  [{:<8}] {}: {}", item.badge, item.issue, item.action)?;
            }
        }

        if !self.rules.is_empty() {
            writeln!(f, "\nRule details")?;
            for row in &self.rules {
                writeln!(f, "  {} {:<36} {:>5.1}  {}", row.status, row.label, row.score, row.details)?;
            }
        }

        if let Some(provenance) = &self.provenance {
            writeln!(f, "\nProvenance: {} fingerprint {}", provenance.timestamp, provenance.fingerprint)?;
        }

        for notice in &self.notices {
            writeln!(f, "\n! {}", notice.message)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::reevaluate::{Notice, OrchestratorState, SessionSnapshot};
    use crate::logic::record::tests::sample_record;
    use crate::logic::record::Standard;

    #[test]
    fn test_bar() {
        assert_eq!(bar(0.0), ".".repeat(20));
        assert_eq!(bar(100.0), "#".repeat(20));
        assert_eq!(bar(50.0), format!("{}{}", "#".repeat(10), ".".repeat(10)));
        assert_eq!(bar(140.0), "#".repeat(20));
    }

    #[test]
    fn test_render_contains_sections() {
        let snapshot = SessionSnapshot {
            record: sample_record(),
            standard: Standard::Gdpr,
            state: OrchestratorState::Pending(Standard::PciDss),
            epoch: 0,
            notices: vec![Notice::re_evaluation_failed(Standard::Gdpr, "Request timed out")],
        };
        let text = render_text(&DashboardView::build(&snapshot));

        assert!(text.starts_with("== transactions.csv (1000 rows x 2 columns) =="));
        assert!(text.contains("Standard: GDPR  [re-evaluating...]"));
        assert!(text.contains("Rules:    2/3 passed"));
        assert!(text.contains("[CRITICAL] Amounts: Reject negatives"));
        assert!(text.contains("FAIL Accuracy negative amounts"));
        assert!(text.contains("fingerprint 0123456789abcdef"));
        assert!(text.contains("! Re-evaluation under GDPR failed: Request timed out."));
    }

    #[test]
    fn test_display_matches_render() {
        let snapshot = SessionSnapshot {
            record: sample_record(),
            standard: Standard::GeneralTransaction,
            state: OrchestratorState::Idle,
            epoch: 0,
            notices: vec![],
        };
        let view = DashboardView::build(&snapshot);
        let text = render_text(&view);

        assert_eq!(text, format!("{}", view));
        assert!(text.contains("Standard: General Transaction\n"));
        assert!(text.lines().any(|line| line.trim_start().starts_with("Accuracy") && line.ends_with("critical")));
    }
}
