//! Hosting provider classification.

use std::fmt;

/// Hosting service behind a remote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provider {
    /// github.com and GitHub Enterprise hosts.
    GitHub,
    /// gitlab.com and self-hosted GitLab.
    GitLab,
    /// bitbucket.org.
    Bitbucket,
    /// Any other host.
    Unknown,
}

impl Provider {
    /// Known providers in order of precedence.
    ///
    /// When a remote has several URLs, the first URL matching the earliest
    /// provider in this list wins.
    pub const PRECEDENCE: [Self; 3] = [Self::GitLab, Self::GitHub, Self::Bitbucket];

    /// Classifies `text` (a host or a whole URL) by substring match.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vcslinks::Provider;
    ///
    /// assert_eq!(Provider::detect("github.com"), Provider::GitHub);
    /// assert_eq!(Provider::detect("gitlab.example.org"), Provider::GitLab);
    /// assert_eq!(Provider::detect("git.example.org"), Provider::Unknown);
    /// ```
    #[must_use]
    pub fn detect(text: &str) -> Self {
        Self::PRECEDENCE
            .into_iter()
            .find(|provider| provider.matches(text))
            .unwrap_or(Self::Unknown)
    }

    /// Returns `true` if `text` contains this provider's marker.
    ///
    /// `Unknown` never matches.
    #[must_use]
    pub fn matches(self, text: &str) -> bool {
        self.marker().is_some_and(|marker| text.contains(marker))
    }

    /// Returns `true` for GitHub, GitLab and Bitbucket.
    #[must_use]
    pub const fn is_known(self) -> bool {
        !matches!(self, Self::Unknown)
    }

    /// Returns the lowercase provider name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::GitHub => "github",
            Self::GitLab => "gitlab",
            Self::Bitbucket => "bitbucket",
            Self::Unknown => "unknown",
        }
    }

    const fn marker(self) -> Option<&'static str> {
        match self {
            Self::Unknown => None,
            known => Some(known.as_str()),
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_known_hosts() {
        assert_eq!(Provider::detect("github.com"), Provider::GitHub);
        assert_eq!(Provider::detect("gitlab.com"), Provider::GitLab);
        assert_eq!(Provider::detect("bitbucket.org"), Provider::Bitbucket);
    }

    #[test]
    fn test_detect_self_hosted() {
        assert_eq!(Provider::detect("github.corp.example"), Provider::GitHub);
        assert_eq!(Provider::detect("gitlab.internal"), Provider::GitLab);
    }

    #[test]
    fn test_detect_unknown() {
        assert_eq!(Provider::detect("git.sr.ht"), Provider::Unknown);
        assert_eq!(Provider::detect(""), Provider::Unknown);
        assert!(!Provider::Unknown.is_known());
    }

    #[test]
    fn test_detect_precedence() {
        // gitlab wins over github, github over bitbucket
        assert_eq!(Provider::detect("gitlab.github.example"), Provider::GitLab);
        assert_eq!(Provider::detect("bitbucket.github.example"), Provider::GitHub);
    }

    #[test]
    fn test_unknown_never_matches() {
        assert!(!Provider::Unknown.matches("unknown"));
    }

    #[test]
    fn test_display() {
        assert_eq!(Provider::GitHub.to_string(), "github");
        assert_eq!(Provider::Bitbucket.to_string(), "bitbucket");
    }
}
