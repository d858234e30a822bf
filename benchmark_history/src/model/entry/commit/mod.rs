//!
//! The benchmarked commit.
//!

pub mod identity;

use chrono::DateTime;
use chrono::FixedOffset;

use self::identity::Identity;

///
/// The benchmarked commit.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Commit {
    /// The commit author.
    pub author: Identity,
    /// The commit committer.
    pub committer: Identity,
    /// Whether the commit was distinct within its push.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distinct: Option<bool>,
    /// The commit hash.
    pub id: String,
    /// The full commit message.
    #[serde(default)]
    pub message: String,
    /// The RFC 3339 commit timestamp.
    #[serde(default)]
    pub timestamp: String,
    /// The tree hash.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tree_id: Option<String>,
    /// The commit page URL.
    #[serde(default)]
    pub url: String,
}

impl Commit {
    /// The length of a full SHA-1 commit hash.
    pub const ID_LENGTH: usize = 40;

    /// The length of an abbreviated commit hash.
    pub const SHORT_ID_LENGTH: usize = 7;

    ///
    /// The abbreviated commit hash.
    ///
    pub fn short_id(&self) -> &str {
        match self.id.char_indices().nth(Self::SHORT_ID_LENGTH) {
            Some((index, _)) => &self.id[..index],
            None => self.id.as_str(),
        }
    }

    ///
    /// The first line of the commit message.
    ///
    pub fn title(&self) -> &str {
        self.message.lines().next().unwrap_or_default()
    }

    ///
    /// The parsed commit timestamp.
    ///
    pub fn parsed_timestamp(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc3339(self.timestamp.as_str()).ok()
    }

    ///
    /// Whether the identifier is a full hexadecimal commit hash.
    ///
    pub fn has_full_id(&self) -> bool {
        self.id.len() == Self::ID_LENGTH && self.id.chars().all(|c| c.is_ascii_hexdigit())
    }
}
