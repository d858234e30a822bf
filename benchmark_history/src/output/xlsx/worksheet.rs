//!
//! XLSX worksheet for a benchmark suite.
//!

use std::collections::HashMap;

///
/// XLSX worksheet for a benchmark suite.
///
/// Rows are entries in chronological order, columns are measurement names.
///
pub struct Worksheet {
    /// The inner worksheet.
    pub worksheet: rust_xlsxwriter::Worksheet,
    /// Measurement column indexes.
    pub columns: HashMap<String, u16>,
    /// The number of written entry rows.
    pub rows: u32,
}

impl Worksheet {
    /// Header names and their column widths.
    const HEADERS: [(&'static str, f64); 3] = [("Date", 18.0), ("Commit", 10.0), ("Title", 60.0)];

    /// Width of columns that contain values.
    const VALUE_COLUMN_WIDTH: f64 = 14.0;

    ///
    /// Creates a new worksheet with the given name.
    ///
    pub fn new(name: &str) -> anyhow::Result<Self> {
        let mut worksheet = rust_xlsxwriter::Worksheet::new();
        worksheet.set_name(name)?;

        for (header_index, (header_name, column_width)) in Self::HEADERS.iter().enumerate() {
            worksheet.write_with_format(
                0,
                header_index as u16,
                *header_name,
                &Self::worksheet_caption_format(),
            )?;
            worksheet.set_column_width(header_index as u16, *column_width)?;
        }
        worksheet.set_freeze_panes(1, Self::HEADERS.len() as u16)?;

        Ok(Self {
            worksheet,
            columns: HashMap::new(),
            rows: 0,
        })
    }

    ///
    /// Returns the column of a measurement, allocating a new one if necessary.
    ///
    pub fn measurement_column(&mut self, name: &str, unit: &str) -> anyhow::Result<u16> {
        if let Some(column) = self.columns.get(name) {
            return Ok(*column);
        }

        let column = (Self::HEADERS.len() + self.columns.len()) as u16;
        self.columns.insert(name.to_owned(), column);
        self.worksheet
            .set_column_width(column, Self::VALUE_COLUMN_WIDTH)?;
        self.worksheet.write_with_format(
            0,
            column,
            format!("{name}\n{unit}"),
            &Self::column_header_format(),
        )?;
        Ok(column)
    }

    ///
    /// Adds a new row for an entry and returns its index.
    ///
    pub fn add_entry_row(&mut self, date: &str, commit: &str, title: &str) -> anyhow::Result<u32> {
        self.rows += 1;
        let row = self.rows;
        self.worksheet
            .write_with_format(row, 0, date, &Self::row_header_format())?;
        self.worksheet
            .write_with_format(row, 1, commit, &Self::row_header_format())?;
        self.worksheet
            .write_with_format(row, 2, title, &Self::row_header_format())?;
        Ok(row)
    }

    ///
    /// Writes a measurement value.
    ///
    pub fn write_value(&mut self, row: u32, column: u16, value: f64) -> anyhow::Result<()> {
        self.worksheet
            .write_with_format(row, column, value, &Self::value_format())?;
        Ok(())
    }

    ///
    /// Adds the median row below the entry rows.
    ///
    pub fn set_medians(&mut self) -> anyhow::Result<()> {
        if self.rows == 0 {
            return Ok(());
        }
        let summary_row = self.rows + 1;
        let last_data_row = self.rows + 1;

        self.worksheet.write_with_format(
            summary_row,
            (Self::HEADERS.len() - 1) as u16,
            "Median",
            &Self::row_header_summary_format(),
        )?;
        let mut columns: Vec<u16> = self.columns.values().copied().collect();
        columns.sort_unstable();
        for column in columns.into_iter() {
            let column_name = Self::column_identifier(column);
            let formula = format!("MEDIAN({column_name}2:{column_name}{last_data_row})");
            self.worksheet.write_formula_with_format(
                summary_row,
                column,
                formula.as_str(),
                &Self::value_format(),
            )?;
        }
        Ok(())
    }

    ///
    /// Returns the inner worksheet.
    ///
    pub fn into_inner(self) -> rust_xlsxwriter::Worksheet {
        self.worksheet
    }

    ///
    /// Returns the spreadsheet letters of a zero-based column index.
    ///
    pub fn column_identifier(mut column: u16) -> String {
        let mut letters = Vec::with_capacity(3);
        loop {
            letters.push((b'A' + (column % 26) as u8) as char);
            if column < 26 {
                break;
            }
            column = column / 26 - 1;
        }
        letters.into_iter().rev().collect()
    }

    ///
    /// Returns the format for the worksheet caption.
    ///
    fn worksheet_caption_format() -> rust_xlsxwriter::Format {
        let format = rust_xlsxwriter::Format::new();
        let format = format.set_bold();
        let format = format.set_font_size(12);
        let format = format.set_font_color("#FFFFFF");
        let format = format.set_background_color("#4C6EF5");
        let format = format.set_align(rust_xlsxwriter::FormatAlign::Center);
        let format = format.set_align(rust_xlsxwriter::FormatAlign::VerticalCenter);
        format.set_border(rust_xlsxwriter::FormatBorder::None)
    }

    ///
    /// Returns the format for measurement column headers.
    ///
    fn column_header_format() -> rust_xlsxwriter::Format {
        let format = rust_xlsxwriter::Format::new();
        let format = format.set_bold();
        let format = format.set_font_size(11);
        let format = format.set_font_color("#1E1E1E");
        let format = format.set_background_color("#EEF3FF");
        let format = format.set_text_wrap();
        let format = format.set_align(rust_xlsxwriter::FormatAlign::Center);
        let format = format.set_align(rust_xlsxwriter::FormatAlign::Top);
        format.set_border(rust_xlsxwriter::FormatBorder::None)
    }

    ///
    /// Returns the format for entry row headers.
    ///
    fn row_header_format() -> rust_xlsxwriter::Format {
        let format = rust_xlsxwriter::Format::new();
        let format = format.set_font_color("#1E1E1E");
        let format = format.set_background_color("#DDE6FF");
        let format = format.set_align(rust_xlsxwriter::FormatAlign::Left);
        format.set_border(rust_xlsxwriter::FormatBorder::None)
    }

    ///
    /// Returns the format for the summary row header.
    ///
    fn row_header_summary_format() -> rust_xlsxwriter::Format {
        let format = rust_xlsxwriter::Format::new();
        let format = format.set_bold();
        format.set_align(rust_xlsxwriter::FormatAlign::Right)
    }

    ///
    /// Returns the format for values.
    ///
    fn value_format() -> rust_xlsxwriter::Format {
        let format = rust_xlsxwriter::Format::new();
        let format = format.set_font_color("#000000");
        let format = format.set_align(rust_xlsxwriter::FormatAlign::Right);
        let format = format.set_border(rust_xlsxwriter::FormatBorder::None);
        format.set_num_format("0.000")
    }
}
