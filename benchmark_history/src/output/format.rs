//!
//! Output benchmark format.
//!

///
/// Output benchmark format.
///
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Flat JSON list of measurement rows.
    #[default]
    Json,
    /// Flat CSV table of measurement rows.
    Csv,
    /// Excel spreadsheet format, one worksheet per suite.
    Xlsx,
    /// The history script read by the dashboard.
    DataJs,
}

impl Format {
    ///
    /// All supported formats.
    ///
    pub const ALL: [Self; 4] = [Self::Json, Self::Csv, Self::Xlsx, Self::DataJs];
}

impl std::str::FromStr for Format {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            "xlsx" => Ok(Self::Xlsx),
            "data-js" | "datajs" | "js" => Ok(Self::DataJs),
            string => anyhow::bail!(
                "Unknown benchmark format `{string}`. Supported formats: {}",
                Self::ALL
                    .iter()
                    .map(|element| element.to_string())
                    .collect::<Vec<String>>()
                    .join(", ")
            ),
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Format::Json => write!(f, "json"),
            Format::Csv => write!(f, "csv"),
            Format::Xlsx => write!(f, "xlsx"),
            Format::DataJs => write!(f, "data-js"),
        }
    }
}
