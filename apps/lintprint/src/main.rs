//! Lintprint CLI binary entry point.
//! Loads a report, resolves configuration and delegates to a printer.

use anyhow::{Context, Result};
use clap::Parser;
use lintprint::cli::{Cli, Commands, PrintArgs};
use lintprint::config::{self, CliOverrides};
use lintprint::{input, printer_for, utils, OutputFormat, Severity};
use std::path::Path;
use tracing::info;

fn main() {
    let cli = Cli::parse();
    let code = match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {:#}", utils::error_prefix(), e);
            2
        }
    };
    std::process::exit(code);
}

fn run(cli: Cli) -> Result<i32> {
    match cli.cmd {
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            Ok(0)
        }
        Commands::Formats => {
            for f in OutputFormat::ALL {
                println!("{:<12} {}", f.as_str(), f.description());
            }
            Ok(0)
        }
        Commands::Print(args) => cmd_print(args),
    }
}

fn cmd_print(args: PrintArgs) -> Result<i32> {
    utils::init_logging(args.verbose, args.debug);

    let eff = config::resolve_effective(&CliOverrides {
        repo_root: args.repo_root,
        format: args.format,
        output: args.output,
        tool_name: args.tool_name,
        tool_version: args.tool_version,
        no_color: args.no_color,
    })?;
    // Note only for human output
    if eff.config_path.is_none() && !eff.format.is_machine_readable() {
        eprintln!(
            "{} No lintprint.toml found; using defaults.",
            utils::note_prefix()
        );
    }

    let report = input::load_report(Path::new(&args.report))?;

    let target = eff
        .destination
        .path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "<stdout>".to_string());
    let sink = eff.destination.open();

    let mut printer = printer_for(eff.format, eff.tool.clone(), eff.color, sink);
    printer
        .write_report(&report)
        .with_context(|| format!("cannot print {} report to {}", eff.format, target))?;
    info!(
        format = %eff.format,
        target = %target,
        files = report.files().len(),
        warnings = report.count_warnings(),
        "report written"
    );

    if report.count_by_severity(Severity::Error) > 0 {
        return Ok(1);
    }
    Ok(0)
}
