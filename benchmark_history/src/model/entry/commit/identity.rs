//!
//! A commit author or committer.
//!

///
/// A commit author or committer.
///
#[derive(Debug, Default, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Identity {
    /// The e-mail address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// The display name.
    #[serde(default)]
    pub name: String,
    /// The hosting service user name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

impl std::fmt::Display for Identity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.username.as_deref() {
            Some(username) => write!(f, "{} (@{username})", self.name),
            None => write!(f, "{}", self.name),
        }
    }
}
