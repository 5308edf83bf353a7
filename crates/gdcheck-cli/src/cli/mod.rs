//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names,
//! aliases, help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "gdcheck",
    bin_name = "gdcheck",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{2713} Static integrity checks for hand-authored game data",
    long_about = "gdcheck validates the enemies / levels / appearances / \
                  projectiles dataset against its constraint catalog and \
                  reports every violation it finds.",
    after_help = "EXAMPLES:\n\
        \x20 gdcheck check data/\n\
        \x20 gdcheck check data/ --output-format json\n\
        \x20 gdcheck checks\n\
        \x20 gdcheck completions bash > /usr/share/bash-completion/completions/gdcheck",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Validate a dataset directory against the full catalog.
    #[command(
        visible_alias = "c",
        about = "Validate a dataset directory",
        after_help = "EXAMPLES:\n\
            \x20 gdcheck check data/\n\
            \x20 gdcheck check                 # dataset dir from config, else cwd\n\
            \x20 gdcheck check data/ -q        # exit code only"
    )]
    Check(CheckArgs),

    /// List every check in the catalog, in report order.
    #[command(
        visible_alias = "ls",
        about = "List the constraint catalog",
        after_help = "EXAMPLES:\n\
            \x20 gdcheck checks\n\
            \x20 gdcheck checks --format json"
    )]
    Checks(ChecksArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 gdcheck completions bash > ~/.local/share/bash-completion/completions/gdcheck\n\
            \x20 gdcheck completions zsh  > ~/.zfunc/_gdcheck\n\
            \x20 gdcheck completions fish > ~/.config/fish/completions/gdcheck.fish"
    )]
    Completions(CompletionsArgs),
}

// ── check ─────────────────────────────────────────────────────────────────────

/// Arguments for `gdcheck check`.
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Dataset directory containing the five JSON table files.
    /// Falls back to the configured default, then the current directory.
    #[arg(value_name = "PATH", help = "Dataset directory")]
    pub path: Option<PathBuf>,
}

// ── checks ────────────────────────────────────────────────────────────────────

/// Arguments for `gdcheck checks`.
#[derive(Debug, Args)]
pub struct ChecksArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `checks` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One name per line.
    List,
    /// JSON array.
    Json,
    /// CSV rows.
    Csv,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `gdcheck completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_check_command_with_path() {
        let cli = Cli::parse_from(["gdcheck", "check", "data/"]);
        match cli.command {
            Commands::Check(args) => {
                assert_eq!(args.path.as_deref(), Some(std::path::Path::new("data/")));
            }
            _ => panic!("expected Check command"),
        }
    }

    #[test]
    fn check_path_is_optional() {
        let cli = Cli::parse_from(["gdcheck", "check"]);
        assert!(matches!(cli.command, Commands::Check(CheckArgs { path: None })));
    }

    #[test]
    fn check_alias() {
        let cli = Cli::parse_from(["gdcheck", "c", "data/"]);
        assert!(matches!(cli.command, Commands::Check(_)));
    }

    #[test]
    fn checks_default_format_is_table() {
        let cli = Cli::parse_from(["gdcheck", "checks"]);
        match cli.command {
            Commands::Checks(args) => assert!(matches!(args.format, ListFormat::Table)),
            _ => panic!("expected Checks command"),
        }
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        // clap should reject --quiet --verbose together
        let result = Cli::try_parse_from(["gdcheck", "--quiet", "--verbose", "checks"]);
        assert!(result.is_err());
    }
}
