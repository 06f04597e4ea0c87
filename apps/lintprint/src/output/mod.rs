//! Printers that turn a finished `Report` into text.
//!
//! Supports `checkstyle` (XML for CI consumers), `text` (default, for
//! humans) and `json`. Every printer owns its sink and writes the whole
//! document in a single call.

pub mod checkstyle;
pub mod console;
pub mod json;

pub use checkstyle::{render_checkstyle, CheckstylePrinter};
pub use console::{render_console, ConsolePrinter};
pub use json::{compose_report_json, JsonPrinter};

use crate::error::Result;
use crate::models::Report;
use crate::sink::Sink;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Capability shared by all output formats.
pub trait Printer {
    fn write_report(&mut self, report: &Report) -> Result<()>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Identity of the tool that produced the report.
pub struct ToolInfo {
    pub name: String,
    pub version: String,
}

impl ToolInfo {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        ToolInfo {
            name: name.into(),
            version: version.into(),
        }
    }

    /// `{name}-{version}`, as written to the checkstyle root element.
    pub fn version_tag(&self) -> String {
        format!("{}-{}", self.name, self.version)
    }
}

impl Default for ToolInfo {
    fn default() -> Self {
        ToolInfo::new(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Checkstyle,
    Text,
    Json,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 3] = [
        OutputFormat::Checkstyle,
        OutputFormat::Text,
        OutputFormat::Json,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Checkstyle => "checkstyle",
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            OutputFormat::Checkstyle => "checkstyle XML for CI servers",
            OutputFormat::Text => "human readable listing with a summary",
            OutputFormat::Json => "report model as pretty JSON",
        }
    }

    /// Machine-readable formats never get ANSI colors.
    pub fn is_machine_readable(&self) -> bool {
        !matches!(self, OutputFormat::Text)
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "checkstyle" | "xml" => Ok(OutputFormat::Checkstyle),
            "text" | "human" | "console" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!(
                "unknown output format '{}' (expected one of: checkstyle, text, json)",
                other
            )),
        }
    }
}

/// Build the printer for `format`, writing to `sink`.
pub fn printer_for<S: Sink + 'static>(
    format: OutputFormat,
    tool: ToolInfo,
    color: bool,
    sink: S,
) -> Box<dyn Printer> {
    match format {
        OutputFormat::Checkstyle => Box::new(CheckstylePrinter::new(tool, sink)),
        OutputFormat::Text => Box::new(ConsolePrinter::new(sink, color)),
        OutputFormat::Json => Box::new(JsonPrinter::new(tool, sink)),
    }
}
