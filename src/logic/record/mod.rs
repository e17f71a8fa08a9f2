//! Record Module - The Live Compliance Record
//!
//! # Architecture
//! - `types.rs`: `AnalysisRecord` and its nested wire shapes
//! - `standard.rs`: `Standard` enumeration
//! - `store.rs`: `RecordStore`, the epoch-tagged single source of truth

pub mod types;
pub mod standard;
pub mod store;

use std::path::Path;

use crate::error::RecordError;

pub use standard::{Standard, UnknownStandard};
pub use store::RecordStore;
pub use types::{
    Analysis, AnalysisRecord, Metadata, Priority, Provenance, RemediationStep, RuleResult, Scores,
};

/// Load an initial record from a saved `/analyze` response
pub fn load_from_file(path: impl AsRef<Path>) -> Result<AnalysisRecord, RecordError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| RecordError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let record: AnalysisRecord = serde_json::from_str(&content)?;
    log::debug!(
        "Loaded record '{}' ({} rows, {} rules) from {}",
        record.filename,
        record.metadata.total_rows,
        record.scores.rule_results.len(),
        path.display()
    );
    Ok(record)
}
