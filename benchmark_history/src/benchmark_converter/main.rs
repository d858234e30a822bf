//!
//! The benchmark converter binary.
//!

pub(crate) mod arguments;

use clap::Parser;

use self::arguments::Arguments;

///
/// The application entry point.
///
fn main() -> anyhow::Result<()> {
    let arguments = Arguments::try_parse()?;
    benchmark_history::logging::init(arguments.quiet, arguments.verbose)?;

    let input_paths = benchmark_history::input::resolve_paths(arguments.input_paths)?;
    let mut data = benchmark_history::input::load_merged(input_paths.as_slice())?;
    if let Some(filter) = arguments.suite.as_ref() {
        data.retain_suites(filter);
        if data.entries.is_empty() {
            tracing::warn!(%filter, "no suites match the filter");
        }
    }

    let output = benchmark_history::Output::try_from((&data, arguments.output_format))?;
    output.write_to_file(arguments.output_path)?;

    Ok(())
}
