//! Error types surfaced by printers, report loading and configuration.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PrintError {
    #[error("cannot serialize report: {0}")]
    Serialization(String),

    #[error("cannot write report to destination: {0}")]
    SinkWrite(#[from] std::io::Error),
}

impl PrintError {
    pub(crate) fn unrepresentable(field: &str, value: &str, ch: char) -> Self {
        PrintError::Serialization(format!(
            "{} {:?} contains U+{:04X}, which XML 1.0 cannot represent",
            field, value, ch as u32
        ))
    }
}

impl From<quick_xml::Error> for PrintError {
    fn from(e: quick_xml::Error) -> Self {
        PrintError::Serialization(e.to_string())
    }
}

impl From<serde_json::Error> for PrintError {
    fn from(e: serde_json::Error) -> Self {
        PrintError::Serialization(e.to_string())
    }
}

#[derive(Debug, Error)]
pub enum ReportLoadError {
    #[error("cannot read report {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("report {path} is not valid JSON: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("config {path} is invalid: {message}")]
    Invalid { path: PathBuf, message: String },
}

pub type Result<T, E = PrintError> = std::result::Result<T, E>;
