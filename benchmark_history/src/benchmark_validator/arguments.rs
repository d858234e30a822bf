//!
//! The benchmark validator arguments.
//!

use std::path::PathBuf;

use clap::Parser;

///
/// The benchmark validator arguments.
///
#[derive(Debug, Parser)]
#[command(about, long_about = None, arg_required_else_help = true)]
pub struct Arguments {
    /// Suppresses the terminal output except for errors.
    #[arg(short, long)]
    pub quiet: bool,

    /// Logs the loading progress.
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Treats warnings as errors.
    #[arg(long)]
    pub strict: bool,

    /// History files (`data.js` or bare JSON).
    /// If only one directory is provided, it is searched for history files.
    pub input_paths: Vec<PathBuf>,
}
