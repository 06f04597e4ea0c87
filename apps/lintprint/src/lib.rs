//! Lintprint core library.
//!
//! This crate renders a finished lint report for humans and for CI servers.
//! The lint engine builds a `models::Report`; a `output::Printer` projects it
//! into one output format and hands the text to a `sink::Sink` in one write.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Discovery and effective configuration resolution.
//! - `error`: Error types for printing, loading and configuration.
//! - `input`: Loading reports from their JSON form.
//! - `models`: Report, file report and warning data model.
//! - `output`: Checkstyle, text and JSON printers.
//! - `sink`: Destinations that receive rendered text.
//! - `utils`: Terminal prefixes and logging setup.
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod models;
pub mod output;
pub mod sink;
pub mod utils;

pub use error::{PrintError, Result};
pub use models::{FileReport, Report, Severity, Warning};
pub use output::{printer_for, OutputFormat, Printer, ToolInfo};
pub use sink::{Destination, FileSink, Sink};
