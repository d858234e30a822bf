//!
//! The benchmark converter arguments.
//!

use std::path::PathBuf;

use clap::Parser;

///
/// The benchmark converter arguments.
///
#[derive(Debug, Parser)]
#[command(about, long_about = None, arg_required_else_help = true)]
pub struct Arguments {
    /// Suppresses the terminal output.
    #[arg(short, long)]
    pub quiet: bool,

    /// Logs the loading and merging progress.
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// History files (`data.js` or bare JSON), merged in the given order.
    /// If only one directory is provided, it is searched for history files.
    pub input_paths: Vec<PathBuf>,

    /// Output format: `json`, `csv`, `xlsx`, or `data-js`.
    #[arg(long = "output-format", default_value_t = benchmark_history::OutputFormat::Json)]
    pub output_format: benchmark_history::OutputFormat,

    /// Output file. If unset, text formats are printed to `stdout`.
    #[arg(short, long)]
    pub output_path: Option<PathBuf>,

    /// Regular expression selecting the suites to convert.
    #[arg(long)]
    pub suite: Option<regex::Regex>,
}
