//! # Statrep - Descriptive Statistics Reports
//!
//! Statrep reads a tabular file, classifies a configured list of variables as
//! numeric or categorical, and produces a console report with descriptive
//! statistics, qualitative insights and frequency tables, plus a multi-panel
//! distribution plot written to a PNG image.
//!
//! ## Quick Start
//!
//! ```no_run
//! use statrep::config::ReportConfig;
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = ReportConfig {
//!     data_path: "data.csv".into(),
//!     variables: vec!["age".to_owned(), "city".to_owned()],
//!     group_by: None,
//!     ..ReportConfig::default()
//! };
//! let report = statrep::report::run_report(&config)?;
//! print!("{report}");
//! # Ok(())
//! # }
//! ```
//!
//! ## Core Modules
//!
//! - [`analyser`]: Variable classification, summarisation and insights
//! - [`report`]: Console report assembly and the summary table
//! - [`plot`]: Multi-panel distribution plot rendering
//! - [`config`]: The [`config::ReportConfig`] structure and its defaults
//! - [`error`]: Error types and handling utilities
//!
//! The loaded dataset is a single immutable polars `DataFrame`; every
//! component reads it by reference and nothing mutates it after load.

#![warn(clippy::all, rust_2018_idioms)]

pub mod analyser;
pub mod config;
pub mod error;
pub mod logging;
pub mod plot;
pub mod report;
