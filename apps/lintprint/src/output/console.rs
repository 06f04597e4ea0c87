//! Human-readable listing of a report followed by a severity summary.

use super::Printer;
use crate::error::Result;
use crate::models::{Report, Severity};
use crate::sink::Sink;
use owo_colors::OwoColorize;
use std::fmt::Write as _;
use tracing::debug;

/// Writes reports as a plain text listing, optionally colored.
pub struct ConsolePrinter<S> {
    sink: S,
    color: bool,
}

impl<S: Sink> ConsolePrinter<S> {
    pub fn new(sink: S, color: bool) -> Self {
        ConsolePrinter { sink, color }
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}

impl<S: Sink> Printer for ConsolePrinter<S> {
    fn write_report(&mut self, report: &Report) -> Result<()> {
        let text = render_console(report, self.color);
        debug!(
            format = "text",
            files = report.files().len(),
            bytes = text.len(),
            "writing report"
        );
        self.sink.write_text(&text)?;
        Ok(())
    }
}

fn paint_severity(text: &str, severity: Severity, color: bool) -> String {
    if !color {
        return text.to_string();
    }
    match severity {
        Severity::Error => text.red().to_string(),
        Severity::Warning => text.yellow().to_string(),
        Severity::Info => text.blue().to_string(),
    }
}

fn heading(text: &str, color: bool) -> String {
    if color {
        text.bold().to_string()
    } else {
        text.to_string()
    }
}

/// Render the listing (pure) for testing/snapshot purposes.
pub fn render_console(report: &Report, color: bool) -> String {
    let mut out = String::new();
    out.push('\n');
    let _ = writeln!(out, "{}", heading("CHECKSTYLE REPORT", color));

    for file in report.files() {
        let name = if color {
            file.filename().yellow().to_string()
        } else {
            file.filename().to_string()
        };
        let _ = writeln!(out, "=> {}.", name);
        for w in file.warnings() {
            let _ = writeln!(
                out,
                "{:>4} {}",
                w.line,
                paint_severity(&w.message, w.severity, color)
            );
        }
    }

    let summary = report.summary();
    let count = report.count_warnings();
    out.push('\n');
    let _ = writeln!(out, "{}", heading("SUMMARY", color));
    let _ = write!(out, "{} issues in total.", count);
    if count > 0 {
        let _ = write!(
            out,
            " ({}, {}, {})",
            paint_severity(
                &format!("{} errors", summary.errors),
                Severity::Error,
                color
            ),
            paint_severity(
                &format!("{} warnings", summary.warnings),
                Severity::Warning,
                color
            ),
            paint_severity(&format!("{} infos", summary.infos), Severity::Info, color),
        );
    }
    out.push('\n');
    out
}
