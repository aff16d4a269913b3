//! Filtering and reshaping of RSV coverage comparisons.
//!
//! The source table is "wide": each row pairs two comparison groups, each
//! with its own estimate column. Charting needs a "long" table with one
//! (week, group, coverage) observation per row. This crate turns a
//! [`rsv_core::table::CoverageTable`] plus the user's filter choices into
//! that long table, and describes the chart drawn from it.

pub mod chart;
pub mod filter;
pub mod reshape;
pub mod series;

pub use filter::FilterState;
pub use reshape::{available_groups, reshape};
