//!
//! Benchmark history output.
//!

pub mod csv;
pub mod data_js;
pub mod format;
pub mod json;
pub mod row;
pub mod xlsx;


use std::io::Write;
use std::path::PathBuf;

use crate::model::BenchmarkData;

use self::csv::Csv;
use self::data_js::DataJs;
use self::format::Format;
use self::json::Json;
use self::xlsx::Xlsx;

///
/// Converted benchmark history.
///
pub enum Output {
    /// Benchmark output is a single text file.
    SingleFile(String),
    /// Benchmark output is a single spreadsheet.
    SingleFileXlsx(rust_xlsxwriter::Workbook),
}

impl Output {
    ///
    /// Writes the output to a file, or text output to `stdout` if no path is given.
    ///
    pub fn write_to_file(self, path: Option<PathBuf>) -> anyhow::Result<()> {
        match (self, path) {
            (Output::SingleFile(content), Some(path)) => {
                std::fs::write(path.as_path(), content)
                    .map_err(|error| anyhow::anyhow!("Benchmark file {path:?} writing: {error}"))?;
            }
            (Output::SingleFile(content), None) => {
                let mut stdout = std::io::stdout();
                writeln!(stdout, "{content}")?;
            }
            (Output::SingleFileXlsx(mut workbook), Some(path)) => {
                workbook
                    .save(path.as_path())
                    .map_err(|error| anyhow::anyhow!("Benchmark file {path:?} writing: {error}"))?;
            }
            (Output::SingleFileXlsx(_), None) => {
                anyhow::bail!("The XLSX output requires an output path.");
            }
        }
        Ok(())
    }
}

impl TryFrom<(&BenchmarkData, Format)> for Output {
    type Error = anyhow::Error;

    fn try_from((data, output_format): (&BenchmarkData, Format)) -> Result<Self, Self::Error> {
        Ok(match output_format {
            Format::Json => Json::from(data).into(),
            Format::Csv => Csv::from(data).into(),
            Format::Xlsx => Xlsx::try_from(data)?.into(),
            Format::DataJs => DataJs::from(data).into(),
        })
    }
}

impl From<Json> for Output {
    fn from(value: Json) -> Self {
        Output::SingleFile(value.content)
    }
}

impl From<Csv> for Output {
    fn from(value: Csv) -> Self {
        Output::SingleFile(value.content)
    }
}

impl From<DataJs> for Output {
    fn from(value: DataJs) -> Self {
        Output::SingleFile(value.content)
    }
}

impl From<Xlsx> for Output {
    fn from(value: Xlsx) -> Self {
        Output::SingleFileXlsx(value.finalize())
    }
}
