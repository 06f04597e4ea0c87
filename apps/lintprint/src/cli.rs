//! CLI argument parsing via `clap`.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "lintprint",
    version,
    about = "Print lint reports for humans and CI servers",
    long_about = "Lintprint — render a finished lint report as checkstyle XML, a text listing, or JSON.\n\nConfiguration precedence: CLI > lintprint.toml > defaults.",
    after_help = "Examples:\n  lintprint print --report report.json\n  lintprint print --report report.json --format checkstyle --output build/checkstyle.xml\n  cat report.json | lintprint print --report - --format json",
    arg_required_else_help = true
)]
/// Top-level CLI options and subcommands.
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
/// Supported subcommands.
pub enum Commands {
    /// Show version
    #[command(about = "Show version", long_about = "Print the current lintprint version.")]
    Version,
    /// List output formats
    #[command(
        about = "List output formats",
        long_about = "List the report formats accepted by --format."
    )]
    Formats,
    /// Render a report
    #[command(
        about = "Render a lint report",
        long_about = "Load a lint report (JSON) and write it in the selected format. Exits 1 when the report contains error-level warnings.",
        after_help = "Examples:\n  lintprint print --report report.json --format checkstyle\n  lintprint print --report report.json --output -"
    )]
    Print(PrintArgs),
}

#[derive(clap::Args, Debug, Clone)]
pub struct PrintArgs {
    #[arg(long, help = "Report JSON to render ('-' for stdin)")]
    pub report: String,
    #[arg(long, help = "Repository root used for config discovery (default: current dir)")]
    pub repo_root: Option<String>,
    #[arg(long, help = "Output format: checkstyle|text|json (default: text)")]
    pub format: Option<String>,
    #[arg(long, help = "Output file ('-' for stdout, default)")]
    pub output: Option<String>,
    #[arg(long, help = "Producer name written into the report")]
    pub tool_name: Option<String>,
    #[arg(long, help = "Producer version written into the report")]
    pub tool_version: Option<String>,
    #[arg(long, action = clap::ArgAction::SetTrue, help = "Disable colored text output")]
    pub no_color: bool,
    #[arg(short, long, action = clap::ArgAction::SetTrue, help = "Log progress to stderr")]
    pub verbose: bool,
    #[arg(long, action = clap::ArgAction::SetTrue, help = "Log debug details to stderr")]
    pub debug: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_print_args() {
        let cli = Cli::try_parse_from([
            "lintprint",
            "print",
            "--report",
            "r.json",
            "--format",
            "checkstyle",
            "--tool-name",
            "typoscript-lint",
            "-v",
        ])
        .unwrap();
        match cli.cmd {
            Commands::Print(args) => {
                assert_eq!(args.report, "r.json");
                assert_eq!(args.format.as_deref(), Some("checkstyle"));
                assert_eq!(args.tool_name.as_deref(), Some("typoscript-lint"));
                assert!(args.verbose);
                assert!(!args.debug);
            }
            _ => panic!("expected print"),
        }
    }

    #[test]
    fn test_print_requires_report() {
        assert!(Cli::try_parse_from(["lintprint", "print"]).is_err());
    }
}
