//!
//! The suite comparison results.
//!

pub mod run_description;

use colored::Colorize;

use crate::model::entry::tool::Tool;
use crate::model::entry::Entry;

use self::run_description::RunDescription;

///
/// The suite comparison results.
///
/// Every factor is normalized so that a value above `1.0` is a regression,
/// regardless of the suite comparison direction.
///
#[derive(Debug)]
pub struct Results<'a> {
    /// The suite name.
    pub suite: &'a str,
    /// The comparison direction.
    pub tool: &'a Tool,
    /// The reference entry.
    pub reference: &'a Entry,
    /// The candidate entry.
    pub candidate: &'a Entry,
    /// The factor at which a regression is alerted.
    pub threshold: f64,

    /// The best factor.
    pub best: f64,
    /// The worst factor.
    pub worst: f64,
    /// The geometric mean of the finite non-zero factors.
    pub total: f64,
    /// The regressions.
    pub negatives: Vec<(f64, RunDescription<'a>)>,
    /// The improvements.
    pub positives: Vec<(f64, RunDescription<'a>)>,
    /// The number of compared measurements.
    pub compared: usize,

    /// Measurement names only present in the reference entry.
    pub removed: Vec<&'a str>,
    /// Measurement names only present in the candidate entry.
    pub added: Vec<&'a str>,
}

impl<'a> Results<'a> {
    ///
    /// Creates empty results for a pair of entries.
    ///
    pub fn new(
        suite: &'a str,
        reference: &'a Entry,
        candidate: &'a Entry,
        threshold: f64,
    ) -> Self {
        Self {
            suite,
            tool: &candidate.tool,
            reference,
            candidate,
            threshold,

            best: 1.0,
            worst: 1.0,
            total: 1.0,
            negatives: Vec::new(),
            positives: Vec::new(),
            compared: 0,

            removed: Vec::new(),
            added: Vec::new(),
        }
    }

    ///
    /// Records the factor of one measurement pair.
    ///
    pub fn push(&mut self, factor: f64, description: RunDescription<'a>) {
        if factor > 1.0 {
            self.negatives.push((factor, description));
        } else if factor < 1.0 {
            self.positives.push((factor, description));
        }
        if factor < self.best {
            self.best = factor;
        }
        if factor > self.worst {
            self.worst = factor;
        }
        self.compared += 1;
    }

    ///
    /// The regressions at or above the alert threshold.
    ///
    pub fn alerts(&self) -> impl Iterator<Item = &(f64, RunDescription<'a>)> {
        self.negatives
            .iter()
            .filter(move |(factor, _)| *factor >= self.threshold)
    }

    ///
    /// Whether any regression reaches the alert threshold.
    ///
    pub fn has_alerts(&self) -> bool {
        self.alerts().next().is_some()
    }

    ///
    /// Sorts the results from the worst to the best.
    ///
    pub fn sort_worst(&mut self) {
        self.negatives.sort_by(|a, b| b.0.total_cmp(&a.0));
        self.positives.sort_by(|a, b| a.0.total_cmp(&b.0));
    }

    ///
    /// Writes the worst and the best results to the terminal.
    ///
    pub fn print_worst_results(&self, count: usize) {
        println!(
            "Suite '{}' worst {} out of {}:",
            self.suite,
            count.min(self.negatives.len()),
            self.negatives.len()
        );
        for (value, entry) in self.negatives.iter().take(count) {
            println!("{:>8}: {}", Self::format_f64(*value), entry);
        }
        println!();
        println!(
            "Suite '{}' best {} out of {}:",
            self.suite,
            count.min(self.positives.len()),
            self.positives.len()
        );
        for (value, entry) in self.positives.iter().take(count) {
            println!("{:>8}: {}", Self::format_f64(*value), entry);
        }
        println!();
    }

    ///
    /// Prints the results to a file.
    ///
    pub fn write_all<W>(&self, w: &mut W) -> anyhow::Result<()>
    where
        W: std::io::Write,
    {
        const WIDTH: usize = 53;

        let direction = if self.tool.is_bigger_better() {
            "bigger is better"
        } else {
            "smaller is better"
        };
        writeln!(
            w,
            "╔═╡ {} ╞{}╗",
            self.suite.bright_white(),
            "═".repeat(WIDTH.saturating_sub(self.suite.chars().count() + 4)),
        )?;
        writeln!(
            w,
            "║ {:19} {:>31} ║",
            "Reference".bright_white(),
            Self::describe(self.reference),
        )?;
        writeln!(
            w,
            "║ {:19} {:>31} ║",
            "Candidate".bright_white(),
            Self::describe(self.candidate),
        )?;
        writeln!(w, "║ {:19} {:>31} ║", "Direction".bright_white(), direction)?;
        writeln!(w, "╠{}╣", "═".repeat(WIDTH))?;
        writeln!(
            w,
            "║ {:43} {:>7} ║",
            "Best (%)".bright_white(),
            Self::format_f64(self.best)
        )?;
        writeln!(
            w,
            "║ {:43} {:>7} ║",
            "Worst (%)".bright_white(),
            Self::format_f64(self.worst)
        )?;
        writeln!(
            w,
            "║ {:43} {:>7} ║",
            "Total (%)".bright_white(),
            Self::format_f64(self.total)
        )?;
        writeln!(
            w,
            "║ {:43} {:>7} ║",
            "Compared".bright_white(),
            self.compared
        )?;

        let alerts: Vec<_> = self.alerts().collect();
        writeln!(
            w,
            "║ {:43} {:>7} ║",
            format!("Alerts (threshold {:.0}%)", self.threshold * 100.0).bright_white(),
            if alerts.is_empty() {
                "0".green()
            } else {
                alerts.len().to_string().bright_red()
            }
        )?;
        if !alerts.is_empty() {
            writeln!(w, "╠{}╣", "═".repeat(WIDTH))?;
            for (factor, description) in alerts.into_iter() {
                writeln!(
                    w,
                    "║ {:43} {:>7} ║",
                    Self::truncate(description.name, 43).bright_red(),
                    Self::format_factor(*factor).bright_red()
                )?;
            }
        }
        if !self.added.is_empty() || !self.removed.is_empty() {
            writeln!(w, "╠{}╣", "═".repeat(WIDTH))?;
            for name in self.added.iter() {
                writeln!(w, "║ + {:49} ║", Self::truncate(name, 49))?;
            }
            for name in self.removed.iter() {
                writeln!(w, "║ - {:49} ║", Self::truncate(name, 49))?;
            }
        }
        writeln!(w, "╚{}╝", "═".repeat(WIDTH))?;

        Ok(())
    }

    ///
    /// Describes an entry by its abbreviated commit and recording date.
    ///
    fn describe(entry: &Entry) -> String {
        match entry.recorded_at() {
            Some(date) => format!("{} {}", entry.commit.short_id(), date.format("%Y-%m-%d %H:%M")),
            None => entry.commit.short_id().to_owned(),
        }
    }

    ///
    /// Truncates a label to the given number of characters.
    ///
    fn truncate(label: &str, width: usize) -> String {
        if label.chars().count() <= width {
            return label.to_owned();
        }
        let mut truncated: String = label.chars().take(width.saturating_sub(1)).collect();
        truncated.push('…');
        truncated
    }

    ///
    /// Formats and colorizes a factor as a percentage, where positive is an improvement.
    ///
    fn format_f64(value: f64) -> colored::ColoredString {
        if value.is_infinite() {
            format!("{:>7}", "-inf").bright_red()
        } else if value > 1.0 {
            format!("{:7.3}", 100.0 - value * 100.0).bright_red()
        } else if value == 1.0 {
            format!("{:7.3}", 100.0 - value * 100.0).white()
        } else {
            format!("{:7.3}", 100.0 - value * 100.0).green()
        }
    }

    ///
    /// Formats a factor as a multiplier.
    ///
    pub fn format_factor(factor: f64) -> String {
        if factor.is_infinite() {
            "inf".to_owned()
        } else {
            format!("{factor:.2}x")
        }
    }
}
