//! Local branch selection.

use super::RepositoryPort;
use crate::remote::Provider;
use crate::weburl::WebUrl;
use crate::Result;
use std::fmt;
use std::rc::Rc;

/// Branch used when the current branch cannot be linked.
pub const DEFAULT_BRANCH: &str = "master";

/// A local branch bound to a repository.
///
/// Remote URL, remote branch name and pull-request need are always asked
/// from the repository, never remembered.
#[derive(Clone)]
pub struct LocalBranch {
    repo: Rc<dyn RepositoryPort>,
    name: String,
}

impl LocalBranch {
    /// Binds `name` to `repo` without checking that the branch exists.
    pub fn new(repo: Rc<dyn RepositoryPort>, name: impl Into<String>) -> Self {
        Self {
            repo,
            name: name.into(),
        }
    }

    /// Binds the checked-out branch of `repo`.
    ///
    /// # Errors
    ///
    /// Returns an error if the current branch cannot be read.
    pub fn current(repo: Rc<dyn RepositoryPort>) -> Result<Self> {
        let name = repo.current_branch()?;
        Ok(Self::new(repo, name))
    }

    /// Returns the local branch name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the repository the branch belongs to.
    #[must_use]
    pub fn repo(&self) -> &dyn RepositoryPort {
        self.repo.as_ref()
    }

    /// Returns the remote URL of this branch.
    pub fn remote_url(&self) -> Result<String> {
        self.repo.remote_url(&self.name)
    }

    /// Returns the name of this branch on the remote.
    pub fn remote_branch(&self) -> Result<String> {
        self.repo.remote_branch(&self.name)
    }

    /// Returns `true` if this branch should be proposed as a pull request.
    pub fn need_pull_request(&self) -> Result<bool> {
        self.repo.need_pull_request(&self.name)
    }

    /// Builds the page URLs for this branch.
    ///
    /// # Errors
    ///
    /// Returns an error if the branch has no remote or its URL is unsupported.
    pub fn weburl(self) -> Result<WebUrl> {
        WebUrl::new(self)
    }
}

impl fmt::Debug for LocalBranch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocalBranch")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Chooses the branch whose remote is linked.
///
/// An explicit `branch` is used as is. Otherwise the current branch is used
/// when its remote points at a known provider, and [`DEFAULT_BRANCH`] when it
/// does not.
///
/// # Errors
///
/// Returns an error if the current branch or its remote cannot be read.
pub fn choose_local_branch(
    repo: Rc<dyn RepositoryPort>,
    branch: Option<&str>,
) -> Result<LocalBranch> {
    if let Some(branch) = branch {
        return Ok(LocalBranch::new(repo, branch));
    }

    let current = repo.current_branch()?;
    let remote_url = repo.remote_url(&current)?;
    if Provider::detect(&remote_url).is_known() {
        tracing::debug!(branch = %current, remote = %remote_url, "using current branch");
        return Ok(LocalBranch::new(repo, current));
    }

    tracing::debug!(
        branch = %current,
        remote = %remote_url,
        fallback = DEFAULT_BRANCH,
        "remote of current branch is not a known provider"
    );
    Ok(LocalBranch::new(repo, DEFAULT_BRANCH))
}
