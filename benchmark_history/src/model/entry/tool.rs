//!
//! The comparison direction of a suite.
//!

///
/// The comparison direction of a suite.
///
/// Unrecognized values are preserved so that they survive a rewrite and can be reported.
///
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Tool {
    /// A larger value is an improvement.
    CustomBiggerIsBetter,
    /// A smaller value is an improvement.
    CustomSmallerIsBetter,
    /// A value not known to this library.
    Unknown(String),
}

impl Tool {
    /// The identifier of the bigger-is-better direction.
    pub const BIGGER_IS_BETTER: &'static str = "customBiggerIsBetter";

    /// The identifier of the smaller-is-better direction.
    pub const SMALLER_IS_BETTER: &'static str = "customSmallerIsBetter";

    ///
    /// Whether a larger value is an improvement.
    ///
    pub fn is_bigger_better(&self) -> bool {
        matches!(self, Self::CustomBiggerIsBetter)
    }

    ///
    /// Whether the value is one of the known directions.
    ///
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }

    ///
    /// The identifier as written to the history file.
    ///
    pub fn as_str(&self) -> &str {
        match self {
            Self::CustomBiggerIsBetter => Self::BIGGER_IS_BETTER,
            Self::CustomSmallerIsBetter => Self::SMALLER_IS_BETTER,
            Self::Unknown(value) => value.as_str(),
        }
    }
}

impl From<String> for Tool {
    fn from(value: String) -> Self {
        match value.as_str() {
            Self::BIGGER_IS_BETTER => Self::CustomBiggerIsBetter,
            Self::SMALLER_IS_BETTER => Self::CustomSmallerIsBetter,
            _ => Self::Unknown(value),
        }
    }
}

impl From<Tool> for String {
    fn from(tool: Tool) -> Self {
        match tool {
            Tool::Unknown(value) => value,
            tool => tool.as_str().to_owned(),
        }
    }
}

impl std::fmt::Display for Tool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
