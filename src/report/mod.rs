//! Report module
//!
//! Presentation-ready views over the metrics engine output.

pub mod dashboard;

pub use dashboard::{format_thousands, DashboardReport, MetricCard, CANNOT_CALCULATE, NO_DATA};
