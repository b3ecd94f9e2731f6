//! Repository port trait.

use crate::Result;
use std::path::Path;

/// Queries the URL builder makes against a local repository.
///
/// Every call goes to the repository afresh; implementations must not cache
/// answers across calls.
pub trait RepositoryPort {
    /// Returns the name of the checked-out branch.
    fn current_branch(&self) -> Result<String>;

    /// Returns the remote URL configured for `branch`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoRemote`](crate::Error::NoRemote) if the branch has
    /// no remote URL.
    fn remote_url(&self, branch: &str) -> Result<String>;

    /// Returns the name of `branch` on the remote side.
    ///
    /// Falls back to `branch` itself when no upstream is configured.
    fn remote_branch(&self, branch: &str) -> Result<String>;

    /// Resolves `revision` to a full commit hash.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RevisionNotFound`](crate::Error::RevisionNotFound) if
    /// the revision does not exist.
    fn resolve_revision(&self, revision: &str) -> Result<String>;

    /// Returns the segments of `path` relative to the repository root.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PathOutsideRepository`](crate::Error::PathOutsideRepository)
    /// if `path` is not inside the work tree.
    fn relpath(&self, path: &Path) -> Result<Vec<String>>;

    /// Returns `true` if work on `branch` should be proposed as a pull request.
    fn need_pull_request(&self, branch: &str) -> Result<bool>;
}
