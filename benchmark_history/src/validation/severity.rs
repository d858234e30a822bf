//!
//! The validation finding severity.
//!

use colored::Colorize;

///
/// The validation finding severity.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// Suspicious data that a consumer can still render.
    Warning,
    /// Data breaking the consumer contract.
    Error,
}

impl Severity {
    ///
    /// The colorized severity label.
    ///
    pub fn colorized(&self) -> colored::ColoredString {
        match self {
            Self::Warning => self.to_string().bright_yellow(),
            Self::Error => self.to_string().bright_red(),
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}
