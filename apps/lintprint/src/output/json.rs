//! JSON output: the report model plus tool identity and a summary.

use super::{Printer, ToolInfo};
use crate::error::Result;
use crate::models::Report;
use crate::sink::Sink;
use serde_json::json;
use serde_json::Value as JsonVal;
use tracing::debug;

pub struct JsonPrinter<S> {
    tool: ToolInfo,
    sink: S,
}

impl<S: Sink> JsonPrinter<S> {
    pub fn new(tool: ToolInfo, sink: S) -> Self {
        JsonPrinter { tool, sink }
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}

impl<S: Sink> Printer for JsonPrinter<S> {
    fn write_report(&mut self, report: &Report) -> Result<()> {
        let value = compose_report_json(report, &self.tool)?;
        let mut text = serde_json::to_string_pretty(&value)?;
        text.push('\n');
        debug!(
            format = "json",
            files = report.files().len(),
            bytes = text.len(),
            "writing report"
        );
        self.sink.write_text(&text)?;
        Ok(())
    }
}

/// Compose the JSON object (pure) for testing/snapshot purposes.
pub fn compose_report_json(report: &Report, tool: &ToolInfo) -> Result<JsonVal> {
    Ok(json!({
        "tool": tool,
        "files": serde_json::to_value(report.files())?,
        "summary": report.summary(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FileReport, Severity, Warning};

    #[test]
    fn test_compose_report_json_shape() {
        let mut f = FileReport::new("p.typoscript");
        f.add_warning(Warning::new(2, None, "msg", Severity::Warning, "r"));
        let mut r = Report::new();
        r.add_file(f);
        r.add_file(FileReport::new("q.typoscript"));

        let out = compose_report_json(&r, &ToolInfo::new("t", "1")).unwrap();
        assert_eq!(out["tool"]["name"], "t");
        assert_eq!(out["summary"]["warnings"], 1);
        assert_eq!(out["summary"]["files"], 2);
        assert_eq!(out["files"][0]["warnings"][0]["line"], 2);
        assert!(out["files"][0]["warnings"][0].get("column").is_none());
        assert_eq!(out["files"][1]["filename"], "q.typoscript");
    }

    #[test]
    fn test_json_printer_output_parses_back() {
        let mut f = FileReport::new("a");
        f.add_warning(Warning::new(1, Some(9), "m", Severity::Error, "r"));
        let mut r = Report::new();
        r.add_file(f);

        let mut p = JsonPrinter::new(ToolInfo::default(), Vec::new());
        p.write_report(&r).unwrap();
        let text = String::from_utf8(p.into_sink()).unwrap();
        let v: JsonVal = serde_json::from_str(&text).unwrap();
        let back: Vec<FileReport> = serde_json::from_value(v["files"].clone()).unwrap();
        assert_eq!(back, r.files());
    }
}
