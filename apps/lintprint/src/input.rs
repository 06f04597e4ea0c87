//! Loading a finished report from its JSON form.
//!
//! The lint engine hands reports over as
//! `{"files":[{"filename":"..","warnings":[{"line":1,"severity":"error",..}]}]}`.
//! A path of `-` reads standard input.

use crate::error::ReportLoadError;
use crate::models::Report;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Parse a report from JSON text. `origin` only labels errors.
pub fn parse_report(text: &str, origin: &Path) -> Result<Report, ReportLoadError> {
    serde_json::from_str(text).map_err(|source| ReportLoadError::Parse {
        path: origin.to_path_buf(),
        source,
    })
}

/// Read and parse the report at `path` (or stdin for `-`).
pub fn load_report(path: &Path) -> Result<Report, ReportLoadError> {
    let text = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|source| ReportLoadError::Read {
                path: PathBuf::from("<stdin>"),
                source,
            })?;
        buf
    } else {
        fs::read_to_string(path).map_err(|source| ReportLoadError::Read {
            path: path.to_path_buf(),
            source,
        })?
    };
    let report = parse_report(&text, path)?;
    debug!(
        path = %path.display(),
        files = report.files().len(),
        warnings = report.count_warnings(),
        "loaded report"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Severity;

    #[test]
    fn test_parse_report_keeps_order_and_optional_column() {
        let text = r#"{
            "files": [
                {"filename": "z.typoscript", "warnings": [
                    {"line": 3, "column": 5, "severity": "error", "message": "a", "source": "s1"},
                    {"line": 1, "severity": "info", "message": "b", "source": "s2"}
                ]},
                {"filename": "a.typoscript"}
            ]
        }"#;
        let r = parse_report(text, Path::new("inline")).unwrap();
        assert_eq!(r.files()[0].filename(), "z.typoscript");
        assert_eq!(r.files()[0].warnings()[0].column, Some(5));
        assert_eq!(r.files()[0].warnings()[1].column, None);
        assert_eq!(r.files()[0].warnings()[1].severity, Severity::Info);
        assert!(r.files()[1].warnings().is_empty());
    }

    #[test]
    fn test_parse_error_names_origin() {
        let err = parse_report("{not json", Path::new("bad.json")).unwrap_err();
        assert!(matches!(err, ReportLoadError::Parse { .. }));
        assert!(err.to_string().contains("bad.json"));
    }

    #[test]
    fn test_load_report_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_report(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, ReportLoadError::Read { .. }));
    }

    #[test]
    fn test_load_report_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("report.json");
        fs::write(&p, r#"{"files":[{"filename":"x","warnings":[]}]}"#).unwrap();
        let r = load_report(&p).unwrap();
        assert_eq!(r.files().len(), 1);
    }
}
