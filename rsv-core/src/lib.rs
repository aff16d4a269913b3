//! Core types and CSV loading for weekly RSV vaccination coverage data.
//!
//! The source file is a pre-computed table of weekly comparison-difference
//! observations: each row compares two population groups within one
//! demographic dimension for one age group. This crate parses that file into
//! a [`table::CoverageTable`] of [`record::SourceRecord`]s and provides the
//! process-lifetime [`cache::TableCache`] the dashboard reads from.
//!
//! # Usage
//!
//! ```rust
//! use rsv_core::table::CoverageTable;
//!
//! let csv = "\
//! Week Ending,age_group,Demographic Level,Comparison Group 1,Comparison Group 1 Estimate,Comparison Group 2,Comparison Group 2 Estimate
//! 2023-01-07,60+,Race,White,45.2,Black,38.1
//! ";
//! let table = CoverageTable::from_csv_str(csv).unwrap();
//! assert_eq!(table.len(), 1);
//! assert_eq!(table.age_groups(), vec!["60+"]);
//! ```

pub mod cache;
pub mod error;
pub mod record;
pub mod table;
