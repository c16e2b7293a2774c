//! Command implementations for props-cli

pub mod apply;
pub mod remove;

pub use apply::run_apply;
pub use remove::run_remove;

use std::path::Path;

use colored::Colorize;

use props_core::ApplyReport;

use crate::error::Result;

/// Prints a reconciliation report, either human-readable or as JSON.
pub(crate) fn render_report(
    report: &ApplyReport,
    path: &Path,
    check: bool,
    json: bool,
) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }

    let status = if !report.changed {
        "ok".green().bold()
    } else if check {
        "would change".yellow().bold()
    } else {
        "changed".yellow().bold()
    };
    println!("{} {}: {}", status, path.display(), report.msg);

    if let Some(backup_file) = &report.backup_file {
        println!("  backup: {}", backup_file.display().to_string().cyan());
    }
    if let Some(diff) = &report.diff {
        println!();
        print!("{}", diff);
    }

    Ok(())
}
