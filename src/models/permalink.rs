//! Permalink selection for file and blame pages.

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Whether a page URL is pinned to a resolved commit hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermalinkMode {
    /// Pin to a hash only when lines are highlighted.
    #[default]
    Auto,
    /// Always pin to a hash.
    Yes,
    /// Always use the branch name.
    No,
}

impl PermalinkMode {
    /// Converts to the tri-state flag taken by [`FileOptions`](crate::FileOptions).
    #[must_use]
    pub const fn as_flag(self) -> Option<bool> {
        match self {
            Self::Auto => None,
            Self::Yes => Some(true),
            Self::No => Some(false),
        }
    }

    /// Returns the mode as a lowercase string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Yes => "yes",
            Self::No => "no",
        }
    }
}

impl fmt::Display for PermalinkMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PermalinkMode {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "yes" | "true" => Ok(Self::Yes),
            "no" | "false" => Ok(Self::No),
            _ => Err(crate::Error::InvalidInput(format!(
                "Invalid permalink mode: {s}. Expected: auto, yes, or no"
            ))),
        }
    }
}
