//!
//! A named measurement of a benchmark entry.
//!

pub mod extra;

#[cfg(test)]
mod tests;

use self::extra::Extra;

///
/// A named measurement of a benchmark entry.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Measurement {
    /// The measurement label, e.g. `Insert value - Primary - tps`.
    pub name: String,
    /// The headline statistic, typically a median.
    pub value: f64,
    /// The statistic description, e.g. `median tps`.
    pub unit: String,
    /// The optional variance description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<String>,
    /// The free-text supplement.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra: Option<String>,
}

impl Measurement {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(name: String, value: f64, unit: String) -> Self {
        Self {
            name,
            value,
            unit,
            range: None,
            extra: None,
        }
    }

    ///
    /// Sets the free-text supplement.
    ///
    pub fn with_extra(mut self, extra: String) -> Self {
        self.extra = Some(extra);
        self
    }

    ///
    /// The supplement, parsed heuristically.
    ///
    pub fn extra(&self) -> Extra<'_> {
        Extra::parse(self.extra.as_deref().unwrap_or_default())
    }
}
