//!
//! An entry in benchmark comparison results table.
//!

///
/// An entry in benchmark comparison results table.
///
#[derive(Clone, Debug, PartialEq)]
pub struct RunDescription<'a> {
    /// The measurement name.
    pub name: &'a str,
    /// The measurement unit.
    pub unit: &'a str,
    /// The reference value.
    pub reference: f64,
    /// The candidate value.
    pub candidate: f64,
}

impl std::fmt::Display for RunDescription<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let RunDescription {
            name,
            unit,
            reference,
            candidate,
        } = self;

        f.write_fmt(format_args!(
            "{name} [{unit}] {reference:.3} -> {candidate:.3}"
        ))
    }
}
