//!
//! Suite append error.
//!

///
/// Suite append error.
///
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The entry is older than the last recorded one.
    #[error("entry for commit {commit} recorded at {date} precedes the last entry recorded at {previous}")]
    OutOfOrder {
        /// The rejected entry commit identifier.
        commit: String,
        /// The rejected entry date.
        date: u64,
        /// The last recorded entry date.
        previous: u64,
    },
}
