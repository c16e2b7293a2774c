//! The `props remove` command.

use tracing::debug;

use props_core::{RemoveOptions, remove};

use crate::cli::RemoveArgs;
use crate::commands::render_report;
use crate::error::Result;

pub fn run_remove(args: &RemoveArgs) -> Result<()> {
    debug!(path = %args.path.display(), "removing managed block");

    let options = RemoveOptions {
        backup: args.backup,
        marker: args.marker.clone(),
        check: args.check,
    };
    let report = remove(&args.path, &options)?;

    render_report(&report, &args.path, args.check, args.json)
}
