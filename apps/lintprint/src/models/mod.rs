//! Report data model handed to printers by the lint engine.

pub mod report;
pub mod warning;

pub use report::{FileReport, Report};
pub use warning::{Severity, Warning};

use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
/// Aggregated severity counts used by printers.
pub struct Summary {
    pub errors: usize,
    pub warnings: usize,
    pub infos: usize,
    pub files: usize,
}
