//! Remote URL normalization implementation.

use super::Provider;
use crate::{Error, Result};
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// Regex for HTTP(S) remotes: `http(s)://<host/path>[.git]`.
static HTTP_REMOTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https?://(.*?)(?:\.git)?$").unwrap_or_else(|_| unreachable!())
});

const GIT_SUFFIX: &str = ".git";
const WIKI_SUFFIX: &str = ".wiki";
const WIKI_PAGES: &str = "wikis";

/// Canonical HTTPS root URL of a hosted repository.
///
/// Always `https://{host}` or `https://{host}/{path}`, without a trailing
/// slash or `.git` suffix. The provider is classified once from the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootUrl {
    url: String,
    host: String,
    provider: Provider,
    wiki: bool,
}

impl RootUrl {
    /// Returns the URL as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.url
    }

    /// Returns the host part, e.g. `github.com`.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the hosting provider.
    #[must_use]
    pub const fn provider(&self) -> Provider {
        self.provider
    }

    /// Returns `true` for GitLab wiki repositories (`*.wiki` remotes).
    #[must_use]
    pub const fn is_wiki(&self) -> bool {
        self.wiki
    }

    fn from_parts(host: &str, path: &str) -> Self {
        let provider = Provider::detect(host);
        let path = path.trim_matches('/');

        // GitLab serves wiki repositories under a sibling `/wikis` path
        let (path, wiki) = match path.strip_suffix(WIKI_SUFFIX) {
            Some(project) if provider == Provider::GitLab => {
                (format!("{project}/{WIKI_PAGES}"), true)
            },
            _ => (path.to_string(), false),
        };

        let url = if path.is_empty() {
            format!("https://{host}")
        } else {
            format!("https://{host}/{path}")
        };

        Self {
            url,
            host: host.to_string(),
            provider,
            wiki,
        }
    }
}

impl fmt::Display for RootUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

impl AsRef<str> for RootUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl FromStr for RootUrl {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        normalize_remote_url(s)
    }
}

/// Normalizes a git remote URL to the root URL of its web page.
///
/// # Examples
///
/// ```rust
/// use vcslinks::normalize_remote_url;
///
/// let root = normalize_remote_url("git@github.com:group/project.git").unwrap();
/// assert_eq!(root.as_str(), "https://github.com/group/project");
///
/// let wiki = normalize_remote_url("git@gitlab.com:group/project.wiki.git").unwrap();
/// assert_eq!(wiki.as_str(), "https://gitlab.com/group/project/wikis");
///
/// assert!(normalize_remote_url("unsupported.host:some/remote/path").is_err());
/// ```
///
/// # Errors
///
/// Returns [`Error::UnsupportedUrl`] carrying `raw` when it is neither an
/// `http(s)://` URL nor a `user@host:path` / `user@host/path` remote.
pub fn normalize_remote_url(raw: &str) -> Result<RootUrl> {
    let unsupported = || Error::UnsupportedUrl {
        url: raw.to_string(),
    };
    let url = raw.trim().trim_end_matches('/');

    if let Some(caps) = HTTP_REMOTE.captures(url) {
        let rest = caps.get(1).map_or("", |m| m.as_str());
        let (authority, path) = rest.split_once('/').unwrap_or((rest, ""));
        // Drop credentials: user:pass@host -> host
        let host = authority
            .rsplit_once('@')
            .map_or(authority, |(_, host)| host);
        if host.is_empty() {
            return Err(unsupported());
        }
        let root = RootUrl::from_parts(host, path);
        tracing::debug!(remote = %raw, root = %root, "normalized http remote");
        return Ok(root);
    }

    let (_, web) = url.split_once('@').ok_or_else(unsupported)?;
    let (host, path) = web
        .split_once(':')
        .or_else(|| web.split_once('/'))
        .ok_or_else(unsupported)?;
    let path = path.strip_suffix(GIT_SUFFIX).unwrap_or(path);
    if host.is_empty() || path.trim_matches('/').is_empty() {
        return Err(unsupported());
    }

    let root = RootUrl::from_parts(host, path);
    tracing::debug!(remote = %raw, root = %root, "normalized ssh remote");
    Ok(root)
}
