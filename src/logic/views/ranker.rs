//! Remediation Ranker
//!
//! CRITICAL first, everything else after, original order kept inside both
//! groups. HIGH/MEDIUM/LOW are not ranked against each other; they only
//! differ in badge text.

use crate::logic::record::RemediationStep;

/// Stable binary partition of remediation steps
pub fn rank_remediation(steps: &[RemediationStep]) -> Vec<RemediationStep> {
    let mut ranked = steps.to_vec();
    // sort_by_key is stable; false (critical) sorts before true
    ranked.sort_by_key(|step| !step.is_critical());
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::record::Priority;

    fn step(issue: &str, priority: Option<Priority>) -> RemediationStep {
        RemediationStep {
            issue: issue.to_string(),
            action: format!("fix {}", issue),
            priority,
        }
    }

    fn issues(steps: &[RemediationStep]) -> Vec<&str> {
        steps.iter().map(|s| s.issue.as_str()).collect()
    }

    #[test]
    fn test_critical_first_and_stable() {
        let steps = vec![
            step("A", Some(Priority::Critical)),
            step("B", Some(Priority::High)),
            step("C", Some(Priority::Critical)),
            step("D", None),
        ];

        let ranked = rank_remediation(&steps);
        assert_eq!(issues(&ranked), vec!["A", "C", "B", "D"]);
        assert_eq!(ranked[3].badge(), "INFO");
    }

    #[test]
    fn test_non_critical_tiers_are_not_reordered() {
        let steps = vec![
            step("low", Some(Priority::Low)),
            step("high", Some(Priority::High)),
            step("medium", Some(Priority::Medium)),
        ];

        let ranked = rank_remediation(&steps);
        assert_eq!(issues(&ranked), vec!["low", "high", "medium"]);
    }

    #[test]
    fn test_input_is_untouched() {
        let steps = vec![step("B", None), step("A", Some(Priority::Critical))];
        let ranked = rank_remediation(&steps);
        assert_eq!(issues(&ranked), vec!["A", "B"]);
        assert_eq!(issues(&steps), vec!["B", "A"]);
        assert!(rank_remediation(&[]).is_empty());
    }
}
