//! Options for file and blame pages.

use crate::models::LinesSpecifier;

/// Options for [`WebUrl::file`](super::WebUrl::file) and
/// [`WebUrl::blame`](super::WebUrl::blame).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileOptions {
    /// Lines to highlight.
    pub lines: Option<LinesSpecifier>,
    /// Revision to show (default: the branch on the remote).
    pub revision: Option<String>,
    /// Pin to a commit hash. `None` pins only when lines are highlighted.
    pub permalink: Option<bool>,
}

impl FileOptions {
    /// Creates options showing the whole file on the remote branch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Highlights `lines`.
    #[must_use]
    pub fn with_lines(mut self, lines: LinesSpecifier) -> Self {
        self.lines = Some(lines);
        self
    }

    /// Shows the file at `revision`.
    #[must_use]
    pub fn with_revision(mut self, revision: impl Into<String>) -> Self {
        self.revision = Some(revision.into());
        self
    }

    /// Forces permalink mode on or off.
    #[must_use]
    pub fn with_permalink(mut self, permalink: bool) -> Self {
        self.permalink = Some(permalink);
        self
    }

    /// Returns whether the URL is pinned to a hash.
    #[must_use]
    pub const fn effective_permalink(&self) -> bool {
        match self.permalink {
            Some(permalink) => permalink,
            None => self.lines.is_some(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permalink_defaults_to_lines() {
        assert!(!FileOptions::new().effective_permalink());
        assert!(
            FileOptions::new()
                .with_lines(LinesSpecifier::Line(1))
                .effective_permalink()
        );
    }

    #[test]
    fn test_explicit_permalink_wins() {
        assert!(
            !FileOptions::new()
                .with_lines(LinesSpecifier::Range(1, 2))
                .with_permalink(false)
                .effective_permalink()
        );
        assert!(FileOptions::new().with_permalink(true).effective_permalink());
    }
}
