//! Investment Projector - day-by-day compound interest projection engine
//!
//! This library provides:
//! - Daily compound interest projections with reinvestment, drawdown, and
//!   recurring deposit/withdrawal rules
//! - Form-field parsing for the investment calculator inputs
//! - Report rendering and CSV export of the daily record sequence
//! - A batch scenario runner for comparing parameter variants

pub mod error;
pub mod params;
pub mod projection;
pub mod report;
pub mod scenario;

// Re-export commonly used types
pub use error::{ProjectionError, MAX_PROJECTION_DAYS};
pub use params::{ContributionMode, FormParams, ProjectionParams};
pub use projection::{DailyRecord, ProjectionEngine, ProjectionResult, ProjectionSummary};
pub use report::RenderedReport;
pub use scenario::ScenarioRunner;
