//! Failure Notices
//!
//! User-visible, non-fatal notices raised by the orchestrator.
//! Bounded: the oldest notice is dropped once capacity is reached.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::logic::record::Standard;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NoticeKind {
    ReEvaluationFailed,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notice {
    pub id: Uuid,
    pub kind: NoticeKind,
    pub standard: Standard,
    pub message: String,
    pub raised_at: DateTime<Utc>,
}

impl Notice {
    pub fn re_evaluation_failed(standard: Standard, error: impl std::fmt::Display) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind: NoticeKind::ReEvaluationFailed,
            standard,
            message: format!(
                "Re-evaluation under {} failed: {}. Showing the previous results.",
                standard, error
            ),
            raised_at: Utc::now(),
        }
    }
}

pub struct NoticeLog {
    capacity: usize,
    entries: VecDeque<Notice>,
}

impl NoticeLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            entries: VecDeque::new(),
        }
    }

    pub fn push(&mut self, notice: Notice) {
        while self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(notice);
    }

    /// Oldest first
    pub fn snapshot(&self) -> Vec<Notice> {
        self.entries.iter().cloned().collect()
    }

    pub fn drain(&mut self) -> Vec<Notice> {
        self.entries.drain(..).collect()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_drops_oldest() {
        let mut log = NoticeLog::new(2);
        log.push(Notice::re_evaluation_failed(Standard::Gdpr, "a"));
        log.push(Notice::re_evaluation_failed(Standard::PciDss, "b"));
        log.push(Notice::re_evaluation_failed(Standard::Basel, "c"));

        let standards: Vec<_> = log.snapshot().iter().map(|n| n.standard).collect();
        assert_eq!(standards, vec![Standard::PciDss, Standard::Basel]);
    }

    #[test]
    fn test_drain_empties_log() {
        let mut log = NoticeLog::new(5);
        log.push(Notice::re_evaluation_failed(Standard::Gdpr, "Server error: 500"));

        let drained = log.drain();
        assert_eq!(drained.len(), 1);
        assert_eq!(
            drained[0].message,
            "Re-evaluation under GDPR failed: Server error: 500. Showing the previous results."
        );
        assert!(log.is_empty());
    }
}
