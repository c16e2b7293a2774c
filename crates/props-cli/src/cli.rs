//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Properties Reconciler - Manage key=value properties files declaratively
#[derive(Parser, Debug)]
#[command(name = "props")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Assert a set of properties in a file's managed block
    ///
    /// Comments out existing active assignments of the managed keys,
    /// regenerates the managed block at the end of the file, and
    /// replaces the file atomically. Running the same command twice
    /// reports no change the second time.
    ///
    /// Examples:
    ///   props apply --path app.properties -s server.port=9090
    ///   props apply --path app.properties --properties desired.toml --backup
    ///   props apply --path app.properties -s debug=false --check --diff
    Apply(ApplyArgs),

    /// Remove the managed block from a file
    ///
    /// Commented-out lines stay in place as the audit trail. Removing
    /// from a file without a managed block is a no-op.
    Remove(RemoveArgs),
}

#[derive(Args, Debug, Clone)]
pub struct ApplyArgs {
    /// Target properties file
    #[arg(long)]
    pub path: PathBuf,

    /// Desired property as KEY=VALUE (repeatable)
    #[arg(short = 's', long = "set", value_name = "KEY=VALUE")]
    pub set: Vec<String>,

    /// File holding the desired set (a flat .toml or .json map of strings)
    #[arg(long, value_name = "FILE")]
    pub properties: Option<PathBuf>,

    /// Managed-block marker text
    #[arg(long, default_value = props_blocks::DEFAULT_MARKER_TEXT)]
    pub marker: String,

    /// Copy the file to a timestamped sibling before writing
    #[arg(long)]
    pub backup: bool,

    /// Leave existing assignments of managed keys untouched
    #[arg(long)]
    pub no_comment: bool,

    /// Report what would change without writing
    #[arg(long)]
    pub check: bool,

    /// Show a unified diff of the change
    #[arg(long)]
    pub diff: bool,

    /// Output as JSON for scripting
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug, Clone)]
pub struct RemoveArgs {
    /// Target properties file
    #[arg(long)]
    pub path: PathBuf,

    /// Managed-block marker text
    #[arg(long, default_value = props_blocks::DEFAULT_MARKER_TEXT)]
    pub marker: String,

    /// Copy the file to a timestamped sibling before writing
    #[arg(long)]
    pub backup: bool,

    /// Report what would change without writing
    #[arg(long)]
    pub check: bool,

    /// Output as JSON for scripting
    #[arg(long)]
    pub json: bool,
}
