//!
//! The benchmark analyzer binary.
//!

pub(crate) mod arguments;

use std::io::Write;

use clap::Parser;

use self::arguments::Arguments;

///
/// The application entry point.
///
fn main() -> anyhow::Result<()> {
    let arguments = Arguments::try_parse()?;
    benchmark_history::logging::init(arguments.quiet, arguments.verbose)?;

    if !arguments.threshold.is_finite() || arguments.threshold <= 0.0 {
        anyhow::bail!(
            "The alert threshold must be a positive number, got {}",
            arguments.threshold
        );
    }

    let input_paths = benchmark_history::input::resolve_paths(arguments.input_paths)?;
    let mut data = benchmark_history::input::load_merged(input_paths.as_slice())?;
    if let Some(filter) = arguments.suite.as_ref() {
        data.retain_suites(filter);
    }

    let mut suites_results = benchmark_history::analysis::compare_all(
        &data,
        &arguments.reference,
        &arguments.candidate,
        arguments.threshold,
    );
    if suites_results.is_empty() {
        tracing::warn!(
            reference = %arguments.reference,
            candidate = %arguments.candidate,
            "no suite has both entries to compare"
        );
    }

    let mut output: Box<dyn Write> = match arguments.output_path {
        Some(output_path) => Box::new(std::fs::File::create(output_path.as_path()).map_err(
            |error| anyhow::anyhow!("Output file {output_path:?} creating: {error}"),
        )?),
        None => Box::new(std::io::stdout()),
    };
    for results in suites_results.iter_mut() {
        results.sort_worst();
        if !arguments.quiet {
            results.print_worst_results(arguments.group_max);
        }
        results.write_all(&mut output)?;
        writeln!(output)?;
    }

    if arguments.series && !arguments.quiet {
        for (suite_name, suite) in data.entries.iter() {
            println!("Suite '{suite_name}' history:");
            for series in benchmark_history::Series::all(suite).iter() {
                println!("    {series}");
            }
            println!();
        }
    }

    let alert_count: usize = suites_results
        .iter()
        .map(|results| results.alerts().count())
        .sum();
    if arguments.fail_on_alert && alert_count > 0 {
        output.flush()?;
        eprintln!("{alert_count} alert(s) raised");
        std::process::exit(1);
    }

    Ok(())
}
