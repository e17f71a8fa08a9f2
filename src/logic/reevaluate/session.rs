//! Dashboard Session
//!
//! Owns the live record and the orchestrator behind one mutex, so reset and
//! commit can never interleave even on a multi-threaded runtime. The lock
//! is never held across the network call.

use std::sync::Arc;

use parking_lot::Mutex;

use super::notices::Notice;
use super::orchestrator::{Orchestrator, OrchestratorState, SelectOutcome, Ticket};
use crate::constants;
use crate::error::ServiceError;
use crate::logic::record::{AnalysisRecord, RecordStore, Standard};
use crate::logic::service::{AnalysisService, ReEvaluation};

struct SessionState {
    store: RecordStore,
    orchestrator: Orchestrator,
}

/// Owns the ticket while the service call is in flight
struct InFlight<'a> {
    inner: &'a Mutex<SessionState>,
    ticket: Option<Ticket>,
}

impl InFlight<'_> {
    fn finish(mut self, result: Result<ReEvaluation, ServiceError>) -> SelectOutcome {
        let inner = self.inner;
        match self.ticket.take() {
            Some(ticket) => {
                let mut guard = inner.lock();
                let SessionState { store, orchestrator } = &mut *guard;
                orchestrator.complete(store, ticket, result)
            }
            None => SelectOutcome::Ignored,
        }
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if let Some(ticket) = self.ticket.take() {
            log::warn!("Re-evaluation under {} dropped before the service answered", ticket.standard);
            let mut guard = self.inner.lock();
            let SessionState { store, orchestrator } = &mut *guard;
            orchestrator.complete(store, ticket, Err(ServiceError::Cancelled));
        }
    }
}

/// Consistent copy of everything the presentation layer reads
#[derive(Debug, Clone)]
pub struct SessionSnapshot {
    pub record: AnalysisRecord,
    pub standard: Standard,
    pub state: OrchestratorState,
    pub epoch: u64,
    pub notices: Vec<Notice>,
}

/// Cheap to clone; clones share the same session
#[derive(Clone)]
pub struct Session {
    inner: Arc<Mutex<SessionState>>,
    service: Arc<dyn AnalysisService>,
}

impl Session {
    pub fn new(record: AnalysisRecord, service: Arc<dyn AnalysisService>) -> Self {
        Self::with_notice_capacity(record, service, constants::DEFAULT_NOTICE_CAPACITY)
    }

    pub fn with_notice_capacity(
        record: AnalysisRecord,
        service: Arc<dyn AnalysisService>,
        notice_capacity: usize,
    ) -> Self {
        log::info!("Session started for '{}'", record.filename);
        Self {
            inner: Arc::new(Mutex::new(SessionState {
                store: RecordStore::new(record),
                orchestrator: Orchestrator::new(notice_capacity),
            })),
            service,
        }
    }

    /// Upload a dataset and start a session on the resulting record
    pub async fn from_upload(
        service: Arc<dyn AnalysisService>,
        filename: &str,
        content: Vec<u8>,
        notice_capacity: usize,
    ) -> Result<Self, ServiceError> {
        let record = service.analyze(filename, content).await?;
        Ok(Self::with_notice_capacity(record, service, notice_capacity))
    }

    pub fn record(&self) -> AnalysisRecord {
        self.inner.lock().store.record().clone()
    }

    pub fn current_standard(&self) -> Standard {
        self.inner.lock().orchestrator.current_standard()
    }

    pub fn state(&self) -> OrchestratorState {
        self.inner.lock().orchestrator.state()
    }

    pub fn epoch(&self) -> u64 {
        self.inner.lock().store.epoch()
    }

    /// Advisory only; `select_standard` enforces the guard itself
    pub fn is_selector_enabled(&self) -> bool {
        !self.inner.lock().orchestrator.is_pending()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let guard = self.inner.lock();
        SessionSnapshot {
            record: guard.store.record().clone(),
            standard: guard.orchestrator.current_standard(),
            state: guard.orchestrator.state(),
            epoch: guard.store.epoch(),
            notices: guard.orchestrator.notices().snapshot(),
        }
    }

    /// Switch the standard and re-score. A no-op while another switch is pending.
    ///
    /// Dropping the returned future before it resolves completes the switch
    /// as a `ServiceError::Cancelled` failure.
    pub async fn select_standard(&self, standard: Standard) -> SelectOutcome {
        let ticket = {
            let mut guard = self.inner.lock();
            let SessionState { store, orchestrator } = &mut *guard;
            match orchestrator.begin(store, standard) {
                Some(ticket) => ticket,
                None => return SelectOutcome::Ignored,
            }
        };

        let request = ticket.request.clone();
        let in_flight = InFlight { inner: &self.inner, ticket: Some(ticket) };

        let result = self.service.re_evaluate(&request).await;
        in_flight.finish(result)
    }

    /// Replace the record with a new analysis. Pending responses for the old
    /// record will be discarded when they arrive.
    pub fn reset(&self, record: AnalysisRecord) {
        let mut guard = self.inner.lock();
        let filename = record.filename.clone();
        let epoch = guard.store.reset(record);
        guard.orchestrator.reset();
        log::info!("Session reset to '{}' (epoch {})", filename, epoch);
    }

    pub fn drain_notices(&self) -> Vec<Notice> {
        self.inner.lock().orchestrator.notices_mut().drain()
    }

    /// Ask the chat assistant about the current record
    pub async fn ask(&self, question: &str) -> Result<String, ServiceError> {
        let context = self.record();
        self.service.chat(question, &context).await
    }
}
