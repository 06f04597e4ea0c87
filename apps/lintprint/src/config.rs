//! Configuration discovery and effective settings resolution.
//!
//! Lintprint reads `lintprint.toml|yaml|yml` from the repository root (or
//! closest ancestor) and merges it with CLI flags to produce an `Effective`
//! config.
//! Defaults:
//! - `format`: `text`
//! - `output`: `-` (stdout)
//! - `tool.name` / `tool.version`: this crate's name and version
//! - `color`: on unless `NO_COLOR` is set; never for files or machine formats
//!
//! Overrides precedence: CLI > config file > defaults.

use crate::error::ConfigError;
use crate::output::{OutputFormat, ToolInfo};
use crate::sink::Destination;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const CONFIG_TOML: &str = "lintprint.toml";
const CONFIG_YAML: [&str; 2] = ["lintprint.yaml", "lintprint.yml"];

#[derive(Debug, Default, Deserialize, Clone)]
/// Producer identity under `[tool]`, written into checkstyle `version`.
pub struct ToolCfg {
    pub name: Option<String>,
    pub version: Option<String>,
}

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `lintprint.toml|yaml`.
pub struct LintprintConfig {
    pub format: Option<String>,
    pub output: Option<String>,
    pub color: Option<bool>,
    #[serde(default)]
    pub tool: Option<ToolCfg>,
}

#[derive(Debug, Default, Clone)]
/// Values given on the command line; `None` falls through to the config.
pub struct CliOverrides {
    pub repo_root: Option<String>,
    pub format: Option<String>,
    pub output: Option<String>,
    pub tool_name: Option<String>,
    pub tool_version: Option<String>,
    pub no_color: bool,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by commands after applying precedence.
pub struct Effective {
    pub repo_root: PathBuf,
    pub config_path: Option<PathBuf>,
    pub format: OutputFormat,
    pub destination: Destination,
    pub tool: ToolInfo,
    pub color: bool,
}

/// Walk upward from `start` to detect the repository root.
///
/// Stops when a `lintprint.toml|yaml|yml` or a `.git` directory is found.
pub fn detect_repo_root(start: &Path) -> PathBuf {
    let mut cur = start;
    loop {
        if config_path_in(cur).is_some() || cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) => cur = p,
            None => return start.to_path_buf(),
        }
    }
}

fn config_path_in(dir: &Path) -> Option<PathBuf> {
    std::iter::once(CONFIG_TOML)
        .chain(CONFIG_YAML)
        .map(|name| dir.join(name))
        .find(|p| p.is_file())
}

/// Load `LintprintConfig` from `root`, if a config file is present there.
pub fn load_config(root: &Path) -> Result<Option<(PathBuf, LintprintConfig)>, ConfigError> {
    let Some(path) = config_path_in(root) else {
        return Ok(None);
    };
    let s = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
        path: path.clone(),
        source,
    })?;
    let invalid = |message: String| ConfigError::Invalid {
        path: path.clone(),
        message,
    };
    let cfg: LintprintConfig = if path.extension().is_some_and(|e| e == "toml") {
        toml::from_str(&s).map_err(|e| invalid(e.to_string()))?
    } else {
        serde_yaml::from_str(&s).map_err(|e| invalid(e.to_string()))?
    };
    debug!(path = %path.display(), "loaded config");
    Ok(Some((path, cfg)))
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
pub fn resolve_effective(cli: &CliOverrides) -> Result<Effective, ConfigError> {
    let start = PathBuf::from(cli.repo_root.as_deref().unwrap_or("."));
    // Relative starts cannot walk above themselves
    let start = match std::env::current_dir() {
        Ok(cwd) if start.is_relative() => cwd.join(start),
        _ => start,
    };
    let repo_root = detect_repo_root(&start);
    let (config_path, cfg) = match load_config(&repo_root)? {
        Some((p, c)) => (Some(p), c),
        None => (None, LintprintConfig::default()),
    };

    let format_src = cli.format.clone().or(cfg.format);
    let format = match format_src {
        Some(s) => s.parse::<OutputFormat>().map_err(|message| ConfigError::Invalid {
            path: config_path
                .clone()
                .filter(|_| cli.format.is_none())
                .unwrap_or_else(|| PathBuf::from("<cli>")),
            message,
        })?,
        None => OutputFormat::Text,
    };

    // CLI paths stay relative to the cwd; config paths to the config root
    let destination = match (cli.output.as_deref(), cfg.output.as_deref()) {
        (Some(s), _) => Destination::parse(s),
        (None, Some(s)) => match Destination::parse(s) {
            Destination::File(p) if p.is_relative() => Destination::File(repo_root.join(p)),
            d => d,
        },
        (None, None) => Destination::Stdout,
    };

    let defaults = ToolInfo::default();
    let cfg_tool = cfg.tool.unwrap_or_default();
    let tool = ToolInfo::new(
        cli.tool_name
            .clone()
            .or(cfg_tool.name)
            .unwrap_or(defaults.name),
        cli.tool_version
            .clone()
            .or(cfg_tool.version)
            .unwrap_or(defaults.version),
    );

    let wants_color = !cli.no_color
        && cfg
            .color
            .unwrap_or_else(|| std::env::var_os("NO_COLOR").is_none());
    let color = wants_color
        && destination == Destination::Stdout
        && !format.is_machine_readable();

    Ok(Effective {
        repo_root,
        config_path,
        format,
        destination,
        tool,
        color,
    })
}
