//! In-memory repository for tests and examples.
//!
//! [`FakeRepository`] answers [`RepositoryPort`] queries from fixed tables
//! and records which revisions and paths were asked for.

use crate::git::{LocalBranch, RepositoryPort};
use crate::weburl::WebUrl;
use crate::{Error, Result};
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};
use std::rc::Rc;

/// Hash `master` and `HEAD` resolve to.
pub const MASTER_HASH: &str = "55150afe539493d650889224db136bc8d9b7ecb8";

/// Hash `dev` resolves to.
pub const DEV_HASH: &str = "40539486fdaf08a39b57519eb06e0e200c932cfd";

/// Root of the fake work tree for absolute paths.
pub const FAKE_ROOT: &str = "/repo";

/// Repository answering from in-memory tables.
///
/// Defaults: current branch `master`, every branch pushes to
/// `git@github.com:USER/PROJECT.git` under its own name, and no branch needs
/// a pull request.
#[derive(Debug)]
pub struct FakeRepository {
    current_branch: String,
    default_remote_url: Option<String>,
    remote_urls: HashMap<String, String>,
    remote_branches: HashMap<String, String>,
    pull_requests: HashMap<String, bool>,
    revisions: HashMap<String, String>,
    resolved: RefCell<Vec<String>>,
    relpaths: RefCell<Vec<PathBuf>>,
}

impl FakeRepository {
    /// Creates a repository whose branches all use `remote_url`.
    #[must_use]
    pub fn new(remote_url: impl Into<String>) -> Self {
        let revisions = [("master", MASTER_HASH), ("HEAD", MASTER_HASH), ("dev", DEV_HASH)]
            .into_iter()
            .map(|(name, hash)| (name.to_string(), hash.to_string()))
            .collect();

        Self {
            current_branch: "master".to_string(),
            default_remote_url: Some(remote_url.into()),
            remote_urls: HashMap::new(),
            remote_branches: HashMap::new(),
            pull_requests: HashMap::new(),
            revisions,
            resolved: RefCell::new(Vec::new()),
            relpaths: RefCell::new(Vec::new()),
        }
    }

    /// A GitHub-hosted repository.
    #[must_use]
    pub fn github() -> Self {
        Self::new("git@github.com:USER/PROJECT.git")
    }

    /// A GitLab-hosted repository.
    #[must_use]
    pub fn gitlab() -> Self {
        Self::new("git@gitlab.com:USER/PROJECT.git")
    }

    /// A GitLab wiki repository.
    #[must_use]
    pub fn gitlab_wiki() -> Self {
        Self::new("git@gitlab.com:USER/PROJECT.wiki.git")
    }

    /// A Bitbucket-hosted repository.
    #[must_use]
    pub fn bitbucket() -> Self {
        Self::new("git@bitbucket.org:USER/PROJECT.git")
    }

    /// Sets the checked-out branch.
    #[must_use]
    pub fn with_current_branch(mut self, branch: impl Into<String>) -> Self {
        self.current_branch = branch.into();
        self
    }

    /// Sets the remote URL of one branch.
    #[must_use]
    pub fn with_remote_url(mut self, branch: impl Into<String>, url: impl Into<String>) -> Self {
        self.remote_urls.insert(branch.into(), url.into());
        self
    }

    /// Removes the default remote; unconfigured branches have no remote.
    #[must_use]
    pub fn without_remote(mut self) -> Self {
        self.default_remote_url = None;
        self
    }

    /// Maps a local branch to a differently named remote branch.
    #[must_use]
    pub fn with_remote_branch(
        mut self,
        branch: impl Into<String>,
        remote_branch: impl Into<String>,
    ) -> Self {
        self.remote_branches
            .insert(branch.into(), remote_branch.into());
        self
    }

    /// Sets whether a branch needs a pull request.
    #[must_use]
    pub fn with_pull_request(mut self, branch: impl Into<String>, needed: bool) -> Self {
        self.pull_requests.insert(branch.into(), needed);
        self
    }

    /// Adds a resolvable revision.
    #[must_use]
    pub fn with_revision(mut self, revision: impl Into<String>, hash: impl Into<String>) -> Self {
        self.revisions.insert(revision.into(), hash.into());
        self
    }

    /// Returns the revisions passed to `resolve_revision`, in call order.
    #[must_use]
    pub fn resolved_revisions(&self) -> Vec<String> {
        self.resolved.borrow().clone()
    }

    /// Returns the paths passed to `relpath`, in call order.
    #[must_use]
    pub fn relpath_calls(&self) -> Vec<PathBuf> {
        self.relpaths.borrow().clone()
    }
}

impl RepositoryPort for FakeRepository {
    fn current_branch(&self) -> Result<String> {
        Ok(self.current_branch.clone())
    }

    fn remote_url(&self, branch: &str) -> Result<String> {
        self.remote_urls
            .get(branch)
            .or(self.default_remote_url.as_ref())
            .cloned()
            .ok_or_else(|| Error::NoRemote {
                branch: branch.to_string(),
            })
    }

    fn remote_branch(&self, branch: &str) -> Result<String> {
        Ok(self
            .remote_branches
            .get(branch)
            .cloned()
            .unwrap_or_else(|| branch.to_string()))
    }

    fn resolve_revision(&self, revision: &str) -> Result<String> {
        self.resolved.borrow_mut().push(revision.to_string());
        self.revisions
            .get(revision)
            .cloned()
            .ok_or_else(|| Error::RevisionNotFound {
                revision: revision.to_string(),
                cause: "unknown revision".to_string(),
            })
    }

    fn relpath(&self, path: &Path) -> Result<Vec<String>> {
        self.relpaths.borrow_mut().push(path.to_path_buf());
        let outside = || Error::PathOutsideRepository {
            path: path.display().to_string(),
            root: FAKE_ROOT.to_string(),
        };

        let relative = if path.is_absolute() {
            path.strip_prefix(FAKE_ROOT).map_err(|_| outside())?
        } else {
            path
        };

        let mut segments = Vec::new();
        for component in relative.components() {
            match component {
                Component::Normal(part) => segments.push(part.to_string_lossy().into_owned()),
                Component::CurDir => {},
                _ => return Err(outside()),
            }
        }
        Ok(segments)
    }

    fn need_pull_request(&self, branch: &str) -> Result<bool> {
        Ok(self.pull_requests.get(branch).copied().unwrap_or(false))
    }
}

/// Builds a [`WebUrl`] for the current branch of `repo`.
///
/// # Errors
///
/// Returns an error if the remote URL of the current branch is unsupported.
pub fn weburl_for(repo: Rc<FakeRepository>) -> Result<WebUrl> {
    LocalBranch::current(repo)?.weburl()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let repo = FakeRepository::github();
        assert_eq!(repo.current_branch().unwrap(), "master");
        assert_eq!(repo.remote_branch("feature").unwrap(), "feature");
        assert!(!repo.need_pull_request("feature").unwrap());
    }

    #[test]
    fn test_records_resolutions() {
        let repo = FakeRepository::github();
        assert_eq!(repo.resolve_revision("dev").unwrap(), DEV_HASH);
        assert!(repo.resolve_revision("missing").is_err());
        assert_eq!(repo.resolved_revisions(), vec!["dev", "missing"]);
    }

    #[test]
    fn test_relpath() {
        let repo = FakeRepository::github();
        assert_eq!(
            repo.relpath(Path::new("docs/guide.md")).unwrap(),
            vec!["docs", "guide.md"]
        );
        assert_eq!(
            repo.relpath(Path::new("/repo/README.md")).unwrap(),
            vec!["README.md"]
        );
        assert!(matches!(
            repo.relpath(Path::new("../outside.md")),
            Err(Error::PathOutsideRepository { .. })
        ));
        assert!(matches!(
            repo.relpath(Path::new("/elsewhere/file.md")),
            Err(Error::PathOutsideRepository { .. })
        ));
    }
}
