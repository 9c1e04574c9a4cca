// launchdee/src/cli/output.rs
use std::path::Path;

use colored::Colorize;
use launchdee_common::error::Result;
use launchdee_common::model::{TargetResolution, UnresolvedReason};
use prettytable::{format, Cell, Row, Table};
use serde::Serialize;

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn new_table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_NO_BORDER_LINE_SEPARATOR);
    table.add_row(Row::new(
        headers
            .iter()
            .map(|h| Cell::new(h).style_spec("b"))
            .collect(),
    ));
    table
}

pub fn enabled_cell(enabled: bool) -> Cell {
    if enabled {
        Cell::new("✔").style_spec("Fg")
    } else {
        Cell::new("✗").style_spec("Fr")
    }
}

pub fn flag_cell(flag: bool) -> Cell {
    Cell::new(if flag { "✔" } else { "" })
}

pub fn optional_path(path: Option<&Path>) -> String {
    path.map_or_else(|| "-".to_string(), |p| p.display().to_string())
}

pub fn target_cell(target: &TargetResolution) -> Cell {
    match target {
        TargetResolution::Resolved(resolved) if resolved.is_bundle => {
            Cell::new(&resolved.path.display().to_string()).style_spec("Fc")
        }
        TargetResolution::Resolved(resolved) => Cell::new(&resolved.path.display().to_string()),
        TargetResolution::Unresolved(_) => Cell::new("-"),
    }
}

pub fn describe_target(target: &TargetResolution) -> String {
    match target {
        TargetResolution::Resolved(resolved) if resolved.is_bundle => {
            format!("{} (app bundle)", resolved.path.display())
        }
        TargetResolution::Resolved(resolved) => resolved.path.display().to_string(),
        TargetResolution::Unresolved(UnresolvedReason::NoCandidate) => {
            "none (no Program or ProgramArguments)".dimmed().to_string()
        }
        TargetResolution::Unresolved(UnresolvedReason::NoWorkingDirectory) => {
            "none (relative path, no working directory)".dimmed().to_string()
        }
        TargetResolution::Unresolved(UnresolvedReason::Missing(path)) => {
            format!("none ({} does not exist)", path.display())
                .dimmed()
                .to_string()
        }
    }
}

pub fn state_word(enabled: bool) -> String {
    if enabled {
        "enabled".green().to_string()
    } else {
        "disabled".red().to_string()
    }
}
