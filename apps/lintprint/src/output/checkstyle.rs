//! Checkstyle XML output, as read by Jenkins and most CI servers.
//!
//! The structure is:
//! - `<checkstyle version="{name}-{version}">` - root element, one per report
//! - `<file name="...">` - one per file, in report order
//! - `<error line severity message source [column]/>` - one per warning
//!
//! `column` is written only when the warning has one. Childless elements use
//! the self-closing form.

use super::{Printer, ToolInfo};
use crate::error::{PrintError, Result};
use crate::models::{FileReport, Report, Warning};
use crate::sink::Sink;
use quick_xml::events::attributes::Attribute;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use quick_xml::name::QName;
use quick_xml::Writer;
use std::borrow::Cow;
use tracing::debug;

const ROOT_TAG: &str = "checkstyle";
const FILE_TAG: &str = "file";
const ERROR_TAG: &str = "error";
const INDENT: usize = 2;

/// Writes reports as checkstyle XML documents.
pub struct CheckstylePrinter<S> {
    tool: ToolInfo,
    sink: S,
}

impl<S: Sink> CheckstylePrinter<S> {
    pub fn new(tool: ToolInfo, sink: S) -> Self {
        CheckstylePrinter { tool, sink }
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}

impl<S: Sink> Printer for CheckstylePrinter<S> {
    fn write_report(&mut self, report: &Report) -> Result<()> {
        let doc = render_checkstyle(report, &self.tool)?;
        debug!(
            format = "checkstyle",
            files = report.files().len(),
            bytes = doc.len(),
            "writing report"
        );
        self.sink.write_text(&doc)?;
        Ok(())
    }
}

/// Render the complete checkstyle document (pure) for testing purposes.
pub fn render_checkstyle(report: &Report, tool: &ToolInfo) -> Result<String> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', INDENT);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let version = tool.version_tag();
    let mut root = BytesStart::new(ROOT_TAG);
    root.push_attribute(attribute("version", &version)?);

    if report.files().is_empty() {
        writer.write_event(Event::Empty(root))?;
    } else {
        writer.write_event(Event::Start(root))?;
        for file in report.files() {
            write_file(&mut writer, file)?;
        }
        writer.write_event(Event::End(BytesEnd::new(ROOT_TAG)))?;
    }

    let mut out = String::from_utf8(writer.into_inner())
        .map_err(|e| PrintError::Serialization(e.to_string()))?;
    out.push('\n');
    Ok(out)
}

fn write_file(writer: &mut Writer<Vec<u8>>, file: &FileReport) -> Result<()> {
    let mut elem = BytesStart::new(FILE_TAG);
    elem.push_attribute(attribute("name", file.filename())?);

    if file.warnings().is_empty() {
        writer.write_event(Event::Empty(elem))?;
        return Ok(());
    }

    writer.write_event(Event::Start(elem))?;
    for warning in file.warnings() {
        writer.write_event(Event::Empty(error_element(warning)?))?;
    }
    writer.write_event(Event::End(BytesEnd::new(FILE_TAG)))?;
    Ok(())
}

fn error_element(warning: &Warning) -> Result<BytesStart<'static>> {
    let mut elem = BytesStart::new(ERROR_TAG);
    elem.push_attribute(attribute("line", &warning.line.to_string())?);
    elem.push_attribute(attribute("severity", warning.severity.as_str())?);
    elem.push_attribute(attribute("message", &warning.message)?);
    elem.push_attribute(attribute("source", &warning.source)?);
    if let Some(column) = warning.column {
        elem.push_attribute(attribute("column", &column.to_string())?);
    }
    Ok(elem)
}

/// Build an attribute whose value is already escaped for a double-quoted
/// attribute, including whitespace that parsers would otherwise normalize.
fn attribute<'k>(key: &'k str, value: &str) -> Result<Attribute<'k>> {
    if let Some(ch) = value.chars().find(|c| !is_xml_char(*c)) {
        return Err(PrintError::unrepresentable(key, value, ch));
    }
    Ok(Attribute {
        key: QName(key.as_bytes()),
        value: Cow::Owned(escape_attr(value).into_bytes()),
    })
}

/// Characters allowed by the XML 1.0 `Char` production.
fn is_xml_char(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\r'
            | '\u{20}'..='\u{D7FF}'
            | '\u{E000}'..='\u{FFFD}'
            | '\u{10000}'..='\u{10FFFF}'
    )
}

fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            '\t' => out.push_str("&#9;"),
            '\n' => out.push_str("&#10;"),
            '\r' => out.push_str("&#13;"),
            _ => out.push(c),
        }
    }
    out
}
