//! # vcslinks
//!
//! Derive web URLs for a local git checkout.
//!
//! Given any path inside a repository, vcslinks finds the hosting service
//! behind the branch's remote (GitHub, GitLab or Bitbucket) and builds the
//! browser URLs for its pages: files, commits, history, diffs, blame,
//! directory trees and pull-request submission.
//!
//! ## Features
//!
//! - Remote URL normalization for SSH (`git@host:path`, `ssh://`) and HTTP(S) forms
//! - Per-provider line fragments, compare syntax and page paths
//! - Permalinks pinned to resolved commit hashes
//! - GitLab wiki repositories mapped to wiki pages
//!
//! ## Example
//!
//! ```rust,ignore
//! use vcslinks::{FileOptions, LinesSpecifier};
//!
//! let weburl = vcslinks::analyze(".", None)?;
//! println!("{}", weburl.root_url());
//! println!("{}", weburl.file("README.md", &FileOptions::new().with_lines(LinesSpecifier::Line(3)))?);
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![forbid(unsafe_code)]
#![allow(clippy::multiple_crate_versions)]

use std::path::Path;
use std::rc::Rc;
use thiserror::Error as ThisError;

// Module declarations
pub mod cli;
pub mod config;
pub mod git;
pub mod models;
pub mod observability;
pub mod remote;
pub mod testing;
pub mod weburl;

// Re-exports for convenience
pub use config::VcslinksConfig;
pub use git::{GitRepository, LocalBranch, RepositoryPort, choose_local_branch};
pub use models::{LinesSpecifier, PermalinkMode, parse_lines_spec};
pub use remote::{Provider, RootUrl, normalize_remote_url};
pub use weburl::{FileOptions, WebUrl};

/// Error type for vcslinks operations.
///
/// # Error Variant Triggers
///
/// | Variant | Raised When |
/// |---------|-------------|
/// | `UnsupportedUrl` | A remote URL is neither `http(s)://...` nor `user@host{:,/}path` |
/// | `NoRemote` | A branch has no configured remote URL |
/// | `RevisionNotFound` | A ref cannot be resolved to a commit |
/// | `PathOutsideRepository` | A file argument does not live in the work tree |
/// | `UnsupportedProvider` | A provider-specific page is requested for an unknown host |
/// | `InvalidInput` | Malformed `<lines>` or permalink arguments |
/// | `OperationFailed` | git, I/O or configuration failures |
#[derive(Debug, ThisError)]
pub enum Error {
    /// The remote URL has an unrecognized shape.
    #[error("Unsupported URL: {url}")]
    UnsupportedUrl {
        /// The offending URL, verbatim.
        url: String,
    },

    /// The branch has no resolvable remote configuration.
    #[error("Branch `{branch}` does not have remote.")]
    NoRemote {
        /// The local branch name.
        branch: String,
    },

    /// A revision does not exist in the repository.
    #[error("revision '{revision}' not found: {cause}")]
    RevisionNotFound {
        /// The requested revision.
        revision: String,
        /// The underlying cause.
        cause: String,
    },

    /// A path does not live under the repository root.
    #[error("path '{path}' is outside of repository '{root}'")]
    PathOutsideRepository {
        /// The requested path.
        path: String,
        /// The repository work tree.
        root: String,
    },

    /// The page is not available for this hosting provider.
    #[error("'{operation}' is not supported for {root_url}")]
    UnsupportedProvider {
        /// The page that was requested.
        operation: String,
        /// The repository root URL.
        root_url: String,
    },

    /// Invalid input was provided.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An operation failed.
    ///
    /// Raised when:
    /// - git2 cannot open or query the repository
    /// - Configuration files cannot be read or parsed
    /// - The browser command cannot be started
    #[error("operation '{operation}' failed: {cause}")]
    OperationFailed {
        /// The operation that failed.
        operation: String,
        /// The underlying cause.
        cause: String,
    },
}

/// Result type alias for vcslinks operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Analyzes the git repository containing `path` and returns its [`WebUrl`].
///
/// `path` can point to any file or directory inside the repository; the
/// work tree root is discovered automatically. When `branch` is `None` the
/// current branch is used, falling back to `master` if the current branch's
/// remote is not a known hosting provider.
///
/// # Errors
///
/// Returns an error if `path` is not inside a git repository, the chosen
/// branch has no remote, or the remote URL is not recognized.
pub fn analyze(path: impl AsRef<Path>, branch: Option<&str>) -> Result<WebUrl> {
    let repo: Rc<dyn RepositoryPort> = Rc::new(GitRepository::discover(path.as_ref())?);
    let local_branch = choose_local_branch(repo, branch)?;
    WebUrl::new(local_branch)
}
