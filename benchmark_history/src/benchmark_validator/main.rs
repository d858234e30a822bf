//!
//! The benchmark validator binary.
//!

pub(crate) mod arguments;

use std::io::Write;

use clap::Parser;
use colored::Colorize;

use self::arguments::Arguments;

///
/// The application entry point.
///
fn main() -> anyhow::Result<()> {
    let arguments = Arguments::try_parse()?;
    benchmark_history::logging::init(arguments.quiet, arguments.verbose)?;

    let input_paths = benchmark_history::input::resolve_paths(arguments.input_paths)?;

    let mut stdout = std::io::stdout();
    let mut invalid_count = 0;
    for path in input_paths.iter() {
        let data = match benchmark_history::BenchmarkData::try_from(path.as_path()) {
            Ok(data) => data,
            Err(benchmark_history::InputError::EmptyFile { path }) => {
                tracing::warn!(?path, "input file is empty and will be skipped");
                continue;
            }
            Err(error) => {
                writeln!(stdout, "{} {error}", "error:".bright_red())?;
                invalid_count += 1;
                continue;
            }
        };

        let report = benchmark_history::validation::validate(&data);
        let is_valid = report.is_valid(arguments.strict);
        if !is_valid {
            invalid_count += 1;
        }
        if !arguments.quiet || !is_valid {
            writeln!(stdout, "{}", path.to_string_lossy().bright_white())?;
            report.write_all(&mut stdout)?;
            writeln!(stdout)?;
        }
    }

    if invalid_count > 0 {
        writeln!(
            stdout,
            "{}",
            format!("{invalid_count} out of {} file(s) invalid", input_paths.len()).bright_red()
        )?;
        std::process::exit(1);
    }

    Ok(())
}
