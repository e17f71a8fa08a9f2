//! FinAUDIT Dashboard Core
//!
//! Presentation and re-evaluation layer of the compliance-audit dashboard.
//! Holds the live analysis record, switches regulatory standards against
//! the Analysis Service, and derives everything the dashboard draws.
//!
//! ```text
//!  Presentation ──reads──▶ Session ──owns──▶ RecordStore (epoch)
//!       │                    │
//!       └─select_standard──▶ Orchestrator ──POST──▶ Analysis Service
//!                            │
//!                 views:: health ring, dimension bars, pass rate, ranking
//! ```

pub mod api;
pub mod config;
pub mod constants;
pub mod error;
pub mod logic;

pub use api::DashboardView;
pub use config::DashboardConfig;
pub use error::{ConfigError, RecordError, ServiceError};
pub use logic::record::{AnalysisRecord, Standard};
pub use logic::reevaluate::{OrchestratorState, SelectOutcome, Session};
pub use logic::service::{AnalysisClient, AnalysisService};
