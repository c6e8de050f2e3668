//! Result formatting and persistence

pub mod formatter;
pub mod report;

pub use formatter::{OutputFormatter, ReportGenerator};
pub use report::{load_results, save_results, MatchSummary};
