//! Re-Evaluation Module - Standard switching against the Analysis Service
//!
//! # Architecture
//! - `orchestrator.rs`: Idle/Pending state machine (pure)
//! - `session.rs`: `Session`, the async entry point owning record + orchestrator
//! - `notices.rs`: failure notices shown to the user
//!
//! # Failure Strategy
//! A failed switch keeps the previous scores on screen and raises a notice.
//! The selected standard is not rolled back.

pub mod orchestrator;
pub mod session;
pub mod notices;

pub use notices::{Notice, NoticeKind, NoticeLog};
pub use orchestrator::{Orchestrator, OrchestratorState, SelectOutcome, Ticket};
pub use session::{Session, SessionSnapshot};
