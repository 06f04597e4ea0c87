//! Report and per-file containers produced by a lint run.

use super::warning::{Severity, Warning};
use super::Summary;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Findings for one analyzed file, in the order the rules reported them.
pub struct FileReport {
    filename: String,
    #[serde(default)]
    warnings: Vec<Warning>,
}

impl FileReport {
    pub fn new(filename: impl Into<String>) -> Self {
        FileReport {
            filename: filename.into(),
            warnings: Vec::new(),
        }
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn add_warning(&mut self, warning: Warning) {
        self.warnings.push(warning);
    }

    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    pub fn warnings_by_severity(&self, severity: Severity) -> impl Iterator<Item = &Warning> {
        self.warnings.iter().filter(move |w| w.severity == severity)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Result of a single lint run. Files keep their analysis order.
pub struct Report {
    #[serde(default)]
    files: Vec<FileReport>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_file(&mut self, file: FileReport) {
        self.files.push(file);
    }

    pub fn files(&self) -> &[FileReport] {
        &self.files
    }

    pub fn count_warnings(&self) -> usize {
        self.files.iter().map(|f| f.warnings.len()).sum()
    }

    pub fn count_by_severity(&self, severity: Severity) -> usize {
        self.files
            .iter()
            .map(|f| f.warnings_by_severity(severity).count())
            .sum()
    }

    /// Severity totals used by the console and JSON printers.
    pub fn summary(&self) -> Summary {
        Summary {
            errors: self.count_by_severity(Severity::Error),
            warnings: self.count_by_severity(Severity::Warning),
            infos: self.count_by_severity(Severity::Info),
            files: self.files.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Report {
        let mut a = FileReport::new("a.typoscript");
        a.add_warning(Warning::new(1, Some(2), "x", Severity::Error, "r1"));
        a.add_warning(Warning::new(4, None, "y", Severity::Warning, "r2"));
        let mut b = FileReport::new("b.typoscript");
        b.add_warning(Warning::new(9, None, "z", Severity::Warning, "r2"));
        let mut r = Report::new();
        r.add_file(a);
        r.add_file(FileReport::new("empty.typoscript"));
        r.add_file(b);
        r
    }

    #[test]
    fn test_counts_and_summary() {
        let r = sample();
        assert_eq!(r.count_warnings(), 3);
        assert_eq!(r.count_by_severity(Severity::Warning), 2);
        let s = r.summary();
        assert_eq!((s.errors, s.warnings, s.infos, s.files), (1, 2, 0, 3));
    }

    #[test]
    fn test_add_preserves_order() {
        let r = sample();
        let names: Vec<_> = r.files().iter().map(|f| f.filename()).collect();
        assert_eq!(names, ["a.typoscript", "empty.typoscript", "b.typoscript"]);
        let lines: Vec<_> = r.files()[0].warnings().iter().map(|w| w.line).collect();
        assert_eq!(lines, [1, 4]);
    }
}
