//! Report generation for parsed student records
//!
//! All aggregation happens here, in one pass over the completed record list.
//!
//! - [`statistics`] - Class totals, class average and grade distribution
//! - [`renderer`] - Fixed-format text rendering
//! - [`writer`] - All-or-nothing output file writing

pub mod renderer;
pub mod statistics;
pub mod writer;

#[cfg(test)]
pub mod tests;

pub use renderer::{format_fixed_2, render_report};
pub use statistics::{ClassStatistics, GradeDistribution};
pub use writer::{ReportSummary, write_report};
