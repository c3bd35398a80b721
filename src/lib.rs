//! Wealth Insight - descriptive statistics for wealthiest-people datasets
//!
//! Pipeline: load CSV → validate columns → aggregate → print/plot.
//!
//! - [`data`]: CSV loading, the [`data::Dataset`] table and its validator.
//! - [`stats`]: describe, industry averages, skewness and kurtosis.
//! - [`charts`]: bar and box charts rendered onto a [`charts::ChartSurface`].
//! - [`report`]: console tables and JSON output.
//! - [`cli`]: command line options and the entry-point flow.

pub mod charts;
pub mod cli;
pub mod data;
pub mod report;
pub mod stats;
