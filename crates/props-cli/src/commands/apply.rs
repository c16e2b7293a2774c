//! The `props apply` command.

use tracing::debug;

use props_core::{ApplyOptions, apply};

use crate::cli::ApplyArgs;
use crate::commands::render_report;
use crate::error::Result;
use crate::properties;

pub fn run_apply(args: &ApplyArgs) -> Result<()> {
    let desired = properties::load_desired(args.properties.as_deref(), &args.set)?;
    debug!(
        keys = desired.len(),
        path = %args.path.display(),
        "applying desired properties"
    );

    let options = ApplyOptions {
        backup: args.backup,
        comment_existing: !args.no_comment,
        marker: args.marker.clone(),
        check: args.check,
        diff: args.diff,
    };
    let report = apply(&args.path, &desired, &options)?;

    render_report(&report, &args.path, args.check, args.json)
}
