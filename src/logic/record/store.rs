//! Record Store
//!
//! Holds the single live AnalysisRecord of a session. Two mutation paths
//! only: `reset` (new dataset) and `commit` (re-evaluation result).
//!
//! Every reset bumps the epoch. A commit carrying an older epoch was issued
//! against a record that no longer exists and is refused.

use super::types::{Analysis, AnalysisRecord, Scores};

pub struct RecordStore {
    record: AnalysisRecord,
    epoch: u64,
}

impl RecordStore {
    pub fn new(record: AnalysisRecord) -> Self {
        Self { record, epoch: 0 }
    }

    pub fn record(&self) -> &AnalysisRecord {
        &self.record
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Replace the record with a freshly supplied one. Returns the new epoch.
    pub fn reset(&mut self, record: AnalysisRecord) -> u64 {
        self.epoch += 1;
        self.record = record;
        self.epoch
    }

    /// Swap in re-evaluated scores and analysis.
    ///
    /// filename, metadata and provenance are never touched. Returns false
    /// (and changes nothing) when `epoch` is stale.
    pub fn commit(&mut self, epoch: u64, scores: Scores, analysis: Analysis) -> bool {
        if epoch != self.epoch {
            return false;
        }
        self.record.scores = scores;
        self.record.analysis = analysis;
        true
    }
}
