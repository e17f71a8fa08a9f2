//! Logic Module - Dashboard core
//!
//! - `record/` - live AnalysisRecord, standards, epoch-tagged store
//! - `reevaluate/` - standard switching (orchestrator + session)
//! - `service/` - Analysis Service boundary and HTTP client
//! - `views/` - derived chart data and remediation ranking

pub mod record;
pub mod reevaluate;
pub mod service;
pub mod views;
