//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: Report unsafe table data assignments without touching files
//! - `fix`: Rewrite unsafe assignments with an `Array.isArray` guard
//! - `init`: Initialize the configuration file

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Common arguments shared by `check` and `fix`.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Project root used to locate .tablefixrc.json
    #[arg(long, default_value = ".")]
    pub path: PathBuf,

    /// Directory to scan (overrides config file)
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct FixCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Report table dataSource variables assigned from unchecked API responses
    Check(CheckCommand),
    /// Wrap unchecked API response assignments in an Array.isArray guard
    Fix(FixCommand),
    /// Initialize a new .tablefixrc.json configuration file
    Init,
}
