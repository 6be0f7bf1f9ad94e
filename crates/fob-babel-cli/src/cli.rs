//! Command-line interface definition.
//!
//! - `fob-babel print` - Emit the Babel configuration for a stage
//! - `fob-babel check` - Verify the cached build state is usable

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// fob-babel - Babel preset for Fob site builds
#[derive(Parser, Debug)]
#[command(
    name = "fob-babel",
    version,
    about = "Print the Babel preset Fob applies to a build stage",
    long_about = "Assembles the Babel presets and plugins for a Fob build stage\n\
                  (develop, build-html, build-javascript, test) using the targets\n\
                  cached by the last site build."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the assembled Babel configuration as JSON
    Print(PrintArgs),

    /// Check that the cached build state exists and report its targets
    Check(CheckArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct PrintArgs {
    /// Build stage (develop, build-html, build-javascript, test)
    ///
    /// Falls back to FOB_BABEL_STAGE, the options file, FOB_BUILD_STAGE,
    /// and finally `test`.
    #[arg(short, long)]
    pub stage: Option<String>,

    /// Browserslist query; repeat for several. `node:current` targets the
    /// running Node.js version.
    #[arg(short, long = "targets", value_name = "QUERY")]
    pub targets: Vec<String>,

    /// JSON options file (defaults to fob-babel.json in the project root)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Project root containing .cache/babelState.json
    #[arg(long, value_name = "DIR")]
    pub cwd: Option<PathBuf>,

    /// Write the configuration to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub out: Option<PathBuf>,

    /// Replace module ids with absolute paths resolved from this directory
    #[arg(long, value_name = "DIR")]
    pub resolve_from: Option<PathBuf>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct CheckArgs {
    /// Project root containing .cache/babelState.json
    #[arg(long, value_name = "DIR")]
    pub cwd: Option<PathBuf>,
}
