//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `analyze`: Cross-reference defined keys with lookup calls and write the report
//!   (also the default when no command is given)
//! - `init`: Initialize a textusage configuration file

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// The command to run, defaulting to `analyze` with no overrides.
    pub fn command_or_default(self) -> Command {
        self.command
            .unwrap_or_else(|| Command::Analyze(AnalyzeCommand::default()))
    }
}

/// Common arguments shared by analysis commands.
///
/// Relative paths are resolved against `--root`.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Project root directory (default: current directory)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Definitions file holding the per-locale key maps (overrides config file)
    #[arg(long)]
    pub definitions: Option<PathBuf>,

    /// Directory scanned for lookup calls (overrides config file)
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// Report output path (overrides config file)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Locale checked for missing keys (overrides config file)
    #[arg(long)]
    pub reference_locale: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Default, Args)]
pub struct AnalyzeCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Exit with status 1 when the reference locale has missing keys
    #[arg(long)]
    pub strict: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Report unused and missing translation keys
    Analyze(AnalyzeCommand),
    /// Initialize a new .textusagerc.json configuration file
    Init,
}
