//! Implementation of the `gdcheck checks` command.
//!
//! Lists the constraint catalog in report order, without loading any data.

use serde_json::json;

use gdcheck_core::domain::CATALOG;

use crate::{
    cli::{ChecksArgs, ListFormat, global::GlobalArgs},
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: ChecksArgs, _global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    match args.format {
        ListFormat::Table => {
            output.header(&format!("Constraint catalog ({} checks):", CATALOG.len()))?;
            let width = CATALOG
                .iter()
                .map(|check| check.name.len())
                .max()
                .unwrap_or(0);
            for check in CATALOG {
                output.print(&format!(
                    "  {name:<width$}  {scope}",
                    name = check.name,
                    scope = check.scope,
                ))?;
            }
        }

        ListFormat::List => {
            for check in CATALOG {
                println!("{}", check.name);
            }
        }

        ListFormat::Json => {
            // Serialise to stdout directly — JSON output must be parseable
            // even in non-TTY pipes.
            let entries: Vec<serde_json::Value> = CATALOG
                .iter()
                .map(|check| {
                    json!({
                        "name": check.name,
                        "scope": check.scope.to_string(),
                    })
                })
                .collect();
            let text = serde_json::to_string_pretty(&entries).unwrap_or_else(|_| "[]".into());
            println!("{text}");
        }

        ListFormat::Csv => {
            println!("name,scope");
            for check in CATALOG {
                println!("{},{}", check.name, check.scope);
            }
        }
    }

    Ok(())
}
