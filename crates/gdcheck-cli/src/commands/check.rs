//! Implementation of the `gdcheck check` command.
//!
//! Resolves the dataset directory, runs the full catalog through the
//! validation service, and renders the ordered report. One line per check,
//! violations indented under their check, summary at the end. Exit code 0
//! only if every check passed.

use std::path::PathBuf;

use serde_json::json;
use tracing::{debug, instrument};

use gdcheck_adapters::JsonDatasetSource;
use gdcheck_core::application::ValidationService;
use gdcheck_core::engine::Report;

use crate::{
    cli::{CheckArgs, OutputFormat, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

#[instrument(skip_all, fields(path = ?args.path))]
pub fn execute(
    args: CheckArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let root = resolve_root(&args, &config);
    debug!(root = %root.display(), "dataset directory resolved");

    if !root.is_dir() {
        return Err(CliError::DatasetNotFound { path: root });
    }

    let service = ValidationService::new(Box::new(JsonDatasetSource::new(&root)));
    let report = service.validate()?;

    if output.format() == OutputFormat::Json {
        render_json(&report)?;
    } else {
        render_report(&report, &output)?;
    }

    if report.passed() {
        Ok(())
    } else {
        Err(CliError::ChecksFailed {
            failed: report.failure_count(),
            total: report.len(),
        })
    }
}

/// Dataset directory: CLI argument, then config, then the current directory.
fn resolve_root(args: &CheckArgs, config: &AppConfig) -> PathBuf {
    args.path
        .clone()
        .or_else(|| config.dataset.dir.clone())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Human / plain rendering: one glyph line per check, in catalog order.
fn render_report(report: &Report, output: &OutputManager) -> CliResult<()> {
    for entry in report.entries() {
        if entry.outcome.is_pass() {
            output.success(entry.name)?;
        } else {
            output.error(entry.name)?;
            for violation in entry.outcome.violations() {
                output.detail(&violation.to_string())?;
            }
        }
    }

    output.print("")?;
    if report.passed() {
        output.success(&format!("{} checks passed", report.len()))?;
    } else {
        output.error(&format!(
            "{} of {} checks failed",
            report.failure_count(),
            report.len()
        ))?;
    }

    Ok(())
}

/// JSON rendering to stdout.
///
/// Bypasses the `OutputManager` because JSON output must be parseable even
/// in non-TTY pipes and in quiet mode.
fn render_json(report: &Report) -> CliResult<()> {
    let entries: Vec<serde_json::Value> = report
        .entries()
        .iter()
        .map(|entry| {
            json!({
                "name": entry.name,
                "scope": entry.scope.to_string(),
                "passed": entry.outcome.is_pass(),
                "violations": entry
                    .outcome
                    .violations()
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<String>>(),
            })
        })
        .collect();

    let document = json!({
        "passed": report.passed(),
        "failed": report.failure_count(),
        "total": report.len(),
        "checks": entries,
    });

    let text = serde_json::to_string_pretty(&document).map_err(|e| CliError::InvalidInput {
        message: format!("could not serialise report: {e}"),
        source: Some(Box::new(e)),
    })?;
    println!("{text}");
    Ok(())
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn args(path: Option<&str>) -> CheckArgs {
        CheckArgs {
            path: path.map(PathBuf::from),
        }
    }

    #[test]
    fn cli_path_wins_over_config() {
        let mut config = AppConfig::default();
        config.dataset.dir = Some(PathBuf::from("from-config"));
        let root = resolve_root(&args(Some("from-cli")), &config);
        assert_eq!(root, PathBuf::from("from-cli"));
    }

    #[test]
    fn config_dir_used_when_no_cli_path() {
        let mut config = AppConfig::default();
        config.dataset.dir = Some(PathBuf::from("from-config"));
        let root = resolve_root(&args(None), &config);
        assert_eq!(root, PathBuf::from("from-config"));
    }

    #[test]
    fn falls_back_to_current_directory() {
        let root = resolve_root(&args(None), &AppConfig::default());
        assert_eq!(root, PathBuf::from("."));
    }
}
