//!
//! The benchmark analyzer arguments.
//!

use std::path::PathBuf;

use clap::Parser;

///
/// The benchmark analyzer arguments.
///
#[derive(Debug, Parser)]
#[command(about, long_about = None, arg_required_else_help = true)]
pub struct Arguments {
    /// Suppresses the terminal output.
    #[arg(short, long)]
    pub quiet: bool,

    /// Logs the loading and comparison progress.
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// History files (`data.js` or bare JSON), merged in the given order.
    /// If only one directory is provided, it is searched for history files.
    pub input_paths: Vec<PathBuf>,

    /// The reference entry: `latest`, `previous`, or a commit hash prefix.
    #[arg(long, default_value_t = benchmark_history::EntrySelector::Previous)]
    pub reference: benchmark_history::EntrySelector,

    /// The candidate entry: `latest`, `previous`, or a commit hash prefix.
    #[arg(long, default_value_t = benchmark_history::EntrySelector::Latest)]
    pub candidate: benchmark_history::EntrySelector,

    /// Regular expression selecting the suites to analyze.
    #[arg(long)]
    pub suite: Option<regex::Regex>,

    /// The regression factor at which an alert is raised.
    #[arg(long, default_value_t = benchmark_history::DEFAULT_ALERT_THRESHOLD)]
    pub threshold: f64,

    /// Maximum number of results displayed in a suite.
    #[arg(long = "group-max", default_value_t = 20)]
    pub group_max: usize,

    /// The output file. If unset, the result is printed to `stdout`.
    #[arg(short, long = "output-file")]
    pub output_path: Option<PathBuf>,

    /// Prints the history statistics of every measurement.
    #[arg(long)]
    pub series: bool,

    /// Exits with a non-zero status if any alert is raised.
    #[arg(long)]
    pub fail_on_alert: bool,
}
