//! API Module - What the Presentation Layer consumes
//!
//! - `dashboard.rs` - serializable `DashboardView` snapshot
//! - `render.rs` - terminal rendering

pub mod dashboard;
pub mod render;

pub use dashboard::{DashboardView, RemediationItem, NO_ANALYSIS_TEXT};
pub use render::render_text;
