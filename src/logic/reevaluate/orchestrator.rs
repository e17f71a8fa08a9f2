//! Re-Evaluation Orchestrator
//!
//! Pure state machine, no I/O:
//!
//! ```text
//!   Idle --begin(std)--> Pending(std)      (ignored while Pending)
//!   Pending(std) --complete(Ok)-->  Idle   scores/analysis replaced, standard = std
//!   Pending(std) --complete(Err)--> Idle   record untouched, standard = std, notice raised
//! ```
//!
//! A completion whose ticket epoch no longer matches the store was issued for
//! a record that has since been reset; it is discarded without touching
//! anything.

use serde::Serialize;

use super::notices::{Notice, NoticeLog};
use crate::error::ServiceError;
use crate::logic::record::{RecordStore, Standard};
use crate::logic::service::{ReEvaluateRequest, ReEvaluation};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "standard")]
pub enum OrchestratorState {
    Idle,
    Pending(Standard),
}

/// Handle for one in-flight re-evaluation
#[derive(Debug, Clone, PartialEq)]
pub struct Ticket {
    pub epoch: u64,
    pub standard: Standard,
    pub request: ReEvaluateRequest,
}

/// What a `select_standard` call ended up doing
#[derive(Debug, Clone, PartialEq)]
pub enum SelectOutcome {
    /// Another re-evaluation was pending; nothing issued
    Ignored,
    /// Scores and analysis replaced
    Applied { standard: Standard, health_score: f64 },
    /// Service failed; previous record kept
    Failed { standard: Standard, error: ServiceError },
    /// Response arrived after a reset and was dropped
    Discarded { standard: Standard },
}

pub struct Orchestrator {
    state: OrchestratorState,
    current_standard: Standard,
    notices: NoticeLog,
}

impl Orchestrator {
    pub fn new(notice_capacity: usize) -> Self {
        Self {
            state: OrchestratorState::Idle,
            current_standard: Standard::default(),
            notices: NoticeLog::new(notice_capacity),
        }
    }

    pub fn state(&self) -> OrchestratorState {
        self.state
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, OrchestratorState::Pending(_))
    }

    pub fn current_standard(&self) -> Standard {
        self.current_standard
    }

    pub fn notices(&self) -> &NoticeLog {
        &self.notices
    }

    pub fn notices_mut(&mut self) -> &mut NoticeLog {
        &mut self.notices
    }

    /// Idle -> Pending. None while another request is pending.
    pub fn begin(&mut self, store: &RecordStore, standard: Standard) -> Option<Ticket> {
        if let OrchestratorState::Pending(pending) = self.state {
            log::warn!(
                "Ignoring switch to {}: re-evaluation for {} still pending",
                standard,
                pending
            );
            return None;
        }

        self.state = OrchestratorState::Pending(standard);
        log::info!("Re-evaluating '{}' under {} (epoch {})", store.record().filename, standard, store.epoch());

        Some(Ticket {
            epoch: store.epoch(),
            standard,
            request: ReEvaluateRequest {
                metadata: store.record().metadata.clone(),
                standard,
            },
        })
    }

    /// Pending -> Idle, applying or rejecting the service result
    pub fn complete(
        &mut self,
        store: &mut RecordStore,
        ticket: Ticket,
        result: Result<ReEvaluation, ServiceError>,
    ) -> SelectOutcome {
        let standard = ticket.standard;

        if ticket.epoch != store.epoch() {
            log::info!(
                "Discarding stale {} response (issued at epoch {}, now {})",
                standard,
                ticket.epoch,
                store.epoch()
            );
            return SelectOutcome::Discarded { standard };
        }

        self.state = OrchestratorState::Idle;
        // The selection sticks even on failure
        self.current_standard = standard;

        match result {
            Ok(ReEvaluation { scores, analysis }) => {
                let health_score = scores.health_score;
                store.commit(ticket.epoch, scores, analysis);
                log::info!("Applied {} re-evaluation: health {}", standard, health_score);
                SelectOutcome::Applied { standard, health_score }
            }
            Err(error) => {
                log::error!("Re-evaluation under {} failed: {}", standard, error);
                self.notices.push(Notice::re_evaluation_failed(standard, &error));
                SelectOutcome::Failed { standard, error }
            }
        }
    }

    /// Session reset: back to Idle and the default standard.
    /// Any in-flight ticket is already stale through the store's epoch.
    pub fn reset(&mut self) {
        self.state = OrchestratorState::Idle;
        self.current_standard = Standard::default();
        self.notices.clear();
    }
}
