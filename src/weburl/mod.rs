//! Page URL building.
//!
//! [`WebUrl`] combines the root URL of a branch's remote with the URL
//! conventions of its hosting provider.
//!
//! # Pages
//!
//! | Page | GitHub / GitLab | Bitbucket |
//! |------|-----------------|-----------|
//! | pull request | `pull/new/{branch}`, `merge_requests/new?...` | `pull-requests/new?source={branch}` |
//! | commit | `commit/{hash}` | `commits/{hash}` |
//! | log | `commits/{branch}` | `commits/branch/{branch}` |
//! | file | `blob/{rev}/{path}#L1-L2` (GitLab `#L1-2`) | `src/{rev}/{path}#lines-1:2` |
//! | tree | `tree/{rev}/{dir}` | `src/{rev}/{dir}` |
//! | diff | `compare/{source}...{target}` | `branches/compare/{target}%0D{source}#diff` |
//! | blame | `blame/{rev}/{path}#L1` | `annotate/{rev}/{path}#{path}-1` |

mod fragment;
mod options;

pub use options::FileOptions;

use crate::git::{DEFAULT_BRANCH, LocalBranch, RepositoryPort};
use crate::remote::{Provider, RootUrl, normalize_remote_url};
use crate::{Error, Result};
use fragment::{BITBUCKET_LINES_PREFIX, format_lines};
use std::path::Path;

/// Page URLs for a local branch's remote.
///
/// The provider is classified once at construction; revisions and paths are
/// resolved through the repository on every call.
#[derive(Debug, Clone)]
pub struct WebUrl {
    local_branch: LocalBranch,
    root: RootUrl,
}

impl WebUrl {
    /// Builds page URLs for `local_branch`.
    ///
    /// # Errors
    ///
    /// Returns an error if the branch has no remote or its URL is unsupported.
    pub fn new(local_branch: LocalBranch) -> Result<Self> {
        let root = normalize_remote_url(&local_branch.remote_url()?)?;
        tracing::debug!(
            branch = local_branch.name(),
            root = %root,
            provider = %root.provider(),
            "analyzed remote"
        );
        Ok(Self { local_branch, root })
    }

    /// Returns the root URL of the repository's project page.
    #[must_use]
    pub fn root_url(&self) -> &str {
        self.root.as_str()
    }

    /// Returns the normalized root URL.
    #[must_use]
    pub const fn root(&self) -> &RootUrl {
        &self.root
    }

    /// Returns the hosting provider.
    #[must_use]
    pub const fn provider(&self) -> Provider {
        self.root.provider()
    }

    /// Returns the branch the URLs are built for.
    #[must_use]
    pub const fn local_branch(&self) -> &LocalBranch {
        &self.local_branch
    }

    fn repo(&self) -> &dyn RepositoryPort {
        self.local_branch.repo()
    }

    /// URL of the page for submitting a pull request from this branch.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::rc::Rc;
    /// use vcslinks::testing::{FakeRepository, weburl_for};
    ///
    /// let weburl = weburl_for(Rc::new(FakeRepository::github())).unwrap();
    /// assert_eq!(
    ///     weburl.pull_request().unwrap(),
    ///     "https://github.com/USER/PROJECT/pull/new/master"
    /// );
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedProvider`] for unknown hosts.
    pub fn pull_request(&self) -> Result<String> {
        let branch = self.local_branch.remote_branch()?;
        let root = &self.root;
        match self.provider() {
            Provider::GitHub => Ok(format!("{root}/pull/new/{branch}")),
            Provider::GitLab => Ok(format!(
                "{root}/merge_requests/new?merge_request%5Bsource_branch%5D={branch}"
            )),
            Provider::Bitbucket => Ok(format!("{root}/pull-requests/new?source={branch}")),
            Provider::Unknown => Err(Error::UnsupportedProvider {
                operation: "pull_request".to_string(),
                root_url: root.to_string(),
            }),
        }
    }

    /// URL of the commit page for `revision`, always by full hash.
    ///
    /// # Errors
    ///
    /// Returns an error if `revision` cannot be resolved.
    pub fn commit(&self, revision: &str) -> Result<String> {
        let hash = self.repo().resolve_revision(revision)?;
        let root = &self.root;
        match self.provider() {
            Provider::Bitbucket => Ok(format!("{root}/commits/{hash}")),
            Provider::GitHub | Provider::GitLab | Provider::Unknown => {
                Ok(format!("{root}/commit/{hash}"))
            },
        }
    }

    /// URL of the history page of `branch` (default: this branch on the remote).
    pub fn log(&self, branch: Option<&str>) -> Result<String> {
        let branch = match non_empty(branch) {
            Some(branch) => branch.to_string(),
            None => self.local_branch.remote_branch()?,
        };
        let root = &self.root;
        match self.provider() {
            Provider::Bitbucket => Ok(format!("{root}/commits/branch/{branch}")),
            Provider::GitHub | Provider::GitLab | Provider::Unknown => {
                Ok(format!("{root}/commits/{branch}"))
            },
        }
    }

    /// URL of the page showing the file at `path`.
    ///
    /// Highlighting lines pins the URL to a commit hash unless
    /// `options.permalink` is `Some(false)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::rc::Rc;
    /// use vcslinks::testing::{FakeRepository, weburl_for};
    /// use vcslinks::{FileOptions, LinesSpecifier};
    ///
    /// let weburl = weburl_for(Rc::new(FakeRepository::github())).unwrap();
    /// assert_eq!(
    ///     weburl.file("README.md", &FileOptions::new()).unwrap(),
    ///     "https://github.com/USER/PROJECT/blob/master/README.md"
    /// );
    /// assert_eq!(
    ///     weburl
    ///         .file("README.md", &FileOptions::new().with_lines(LinesSpecifier::Line(1)))
    ///         .unwrap(),
    ///     "https://github.com/USER/PROJECT/blob/55150afe539493d650889224db136bc8d9b7ecb8/README.md#L1"
    /// );
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the revision cannot be resolved or `path` is
    /// outside the repository.
    pub fn file(&self, path: impl AsRef<Path>, options: &FileOptions) -> Result<String> {
        let permalink = options.effective_permalink();
        let revision = self.remote_revision(options.revision.as_deref(), permalink)?;
        let segments = self.repo().relpath(path.as_ref())?;

        if self.root.is_wiki() {
            return Ok(self.wiki_page(&segments, permalink.then_some(revision.as_str())));
        }

        let relurl = segments.join("/");
        let fragment = format_lines(self.provider(), options.lines, BITBUCKET_LINES_PREFIX);
        let root = &self.root;
        match self.provider() {
            Provider::Bitbucket => Ok(format!("{root}/src/{revision}/{relurl}{fragment}")),
            Provider::GitHub | Provider::GitLab | Provider::Unknown => {
                Ok(format!("{root}/blob/{revision}/{relurl}{fragment}"))
            },
        }
    }

    /// URL of the directory listing of `directory` (default: repository root).
    ///
    /// # Errors
    ///
    /// Returns an error if the revision cannot be resolved or `directory` is
    /// outside the repository.
    pub fn tree(
        &self,
        directory: Option<&Path>,
        revision: Option<&str>,
        permalink: bool,
    ) -> Result<String> {
        let revision = self.remote_revision(revision, permalink)?;
        let suffix = match directory {
            Some(directory) => {
                let segments = self.repo().relpath(directory)?;
                if segments.is_empty() {
                    String::new()
                } else {
                    format!("/{}", segments.join("/"))
                }
            },
            None => String::new(),
        };
        let root = &self.root;
        match self.provider() {
            Provider::Bitbucket => Ok(format!("{root}/src/{revision}{suffix}")),
            Provider::GitHub | Provider::GitLab | Provider::Unknown => {
                Ok(format!("{root}/tree/{revision}{suffix}"))
            },
        }
    }

    /// URL of the page comparing two revisions.
    ///
    /// With no revisions, compares `master` with this branch on the remote.
    /// With one revision, compares `master` with it. With `permalink`, the
    /// given revisions are resolved to hashes; the implicit `master` is not.
    ///
    /// # Errors
    ///
    /// Returns an error if a revision cannot be resolved.
    pub fn diff(
        &self,
        revision1: Option<&str>,
        revision2: Option<&str>,
        permalink: bool,
    ) -> Result<String> {
        let mut revision1 = match non_empty(revision1) {
            Some(revision) => revision.to_string(),
            None => self.local_branch.remote_branch()?,
        };
        let mut revision2 = non_empty(revision2).map(String::from);
        if permalink {
            revision1 = self.repo().resolve_revision(&revision1)?;
            if let Some(revision) = revision2 {
                revision2 = Some(self.repo().resolve_revision(&revision)?);
            }
        }
        let (source, target) = match revision2 {
            Some(target) => (revision1, target),
            None => (DEFAULT_BRANCH.to_string(), revision1),
        };

        let root = &self.root;
        match self.provider() {
            Provider::Bitbucket => Ok(format!(
                "{root}/branches/compare/{target}%0D{source}#diff"
            )),
            Provider::GitHub | Provider::GitLab | Provider::Unknown => {
                Ok(format!("{root}/compare/{source}...{target}"))
            },
        }
    }

    /// URL of the blame (annotate) page of the file at `path`.
    ///
    /// Revision handling is the same as for [`WebUrl::file`].
    ///
    /// # Errors
    ///
    /// Returns an error if the revision cannot be resolved or `path` is
    /// outside the repository.
    pub fn blame(&self, path: impl AsRef<Path>, options: &FileOptions) -> Result<String> {
        let permalink = options.effective_permalink();
        let revision = self.remote_revision(options.revision.as_deref(), permalink)?;
        let relurl = self.repo().relpath(path.as_ref())?.join("/");
        let root = &self.root;
        match self.provider() {
            Provider::Bitbucket => {
                // Annotate anchors are named after the file, not "lines"
                let fragment = format_lines(self.provider(), options.lines, &relurl);
                Ok(format!("{root}/annotate/{revision}/{relurl}{fragment}"))
            },
            Provider::GitHub | Provider::GitLab | Provider::Unknown => {
                let fragment = format_lines(self.provider(), options.lines, BITBUCKET_LINES_PREFIX);
                Ok(format!("{root}/blame/{revision}/{relurl}{fragment}"))
            },
        }
    }

    /// Picks the revision to show on the remote.
    ///
    /// Permalinks resolve `revision` (default: the local branch) to a hash.
    /// Otherwise `revision` is used verbatim, or the remote branch name when
    /// absent.
    fn remote_revision(&self, revision: Option<&str>, permalink: bool) -> Result<String> {
        let revision = non_empty(revision);
        if permalink {
            let revision = revision.unwrap_or_else(|| self.local_branch.name());
            return self.repo().resolve_revision(revision);
        }
        match revision {
            Some(revision) => Ok(revision.to_string()),
            None => self.local_branch.remote_branch(),
        }
    }

    /// GitLab wiki page for a file: the path without extension, optionally
    /// pinned with `version_id`. Line fragments have no wiki equivalent.
    fn wiki_page(&self, segments: &[String], version: Option<&str>) -> String {
        let mut page: Vec<&str> = segments.iter().map(String::as_str).collect();
        if let Some(last) = page.last_mut() {
            *last = Path::new(*last)
                .file_stem()
                .and_then(|stem| stem.to_str())
                .unwrap_or(*last);
        }
        let root = &self.root;
        let page = page.join("/");
        match version {
            Some(hash) => format!("{root}/{page}?version_id={hash}"),
            None => format!("{root}/{page}"),
        }
    }
}

/// Treats empty revision or branch arguments as absent.
fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LinesSpecifier;
    use crate::testing::{DEV_HASH, FakeRepository, MASTER_HASH, weburl_for};
    use std::path::PathBuf;
    use std::rc::Rc;

    const GITHUB: &str = "https://github.com/USER/PROJECT";
    const GITLAB: &str = "https://gitlab.com/USER/PROJECT";
    const BITBUCKET: &str = "https://bitbucket.org/USER/PROJECT";

    fn weburl(repo: FakeRepository) -> WebUrl {
        weburl_for(Rc::new(repo)).unwrap()
    }

    fn lines(lines: LinesSpecifier) -> FileOptions {
        FileOptions::new().with_lines(lines)
    }

    // ============================================================================
    // Construction
    // ============================================================================

    #[test]
    fn test_root_url_and_provider() {
        let github = weburl(FakeRepository::github());
        assert_eq!(github.root_url(), GITHUB);
        assert_eq!(github.provider(), Provider::GitHub);

        let bitbucket = weburl(FakeRepository::bitbucket());
        assert_eq!(bitbucket.provider(), Provider::Bitbucket);
    }

    #[test]
    fn test_unsupported_remote_fails() {
        let repo = Rc::new(FakeRepository::new("unsupported.host:some/remote/path"));
        let err = weburl_for(repo).unwrap_err();
        assert!(
            matches!(err, Error::UnsupportedUrl { ref url } if url == "unsupported.host:some/remote/path")
        );
    }

    #[test]
    fn test_no_remote_fails() {
        let repo = Rc::new(FakeRepository::github().without_remote());
        let err = weburl_for(repo).unwrap_err();
        assert_eq!(err.to_string(), "Branch `master` does not have remote.");
    }

    // ============================================================================
    // Pull requests
    // ============================================================================

    #[test]
    fn test_pull_request() {
        assert_eq!(
            weburl(FakeRepository::github()).pull_request().unwrap(),
            format!("{GITHUB}/pull/new/master")
        );
        assert_eq!(
            weburl(FakeRepository::gitlab()).pull_request().unwrap(),
            format!("{GITLAB}/merge_requests/new?merge_request%5Bsource_branch%5D=master")
        );
        assert_eq!(
            weburl(FakeRepository::bitbucket()).pull_request().unwrap(),
            format!("{BITBUCKET}/pull-requests/new?source=master")
        );
    }

    #[test]
    fn test_pull_request_uses_remote_branch_name() {
        let repo = FakeRepository::github()
            .with_current_branch("local")
            .with_remote_branch("local", "remote-name");
        assert_eq!(
            weburl(repo).pull_request().unwrap(),
            format!("{GITHUB}/pull/new/remote-name")
        );
    }

    #[test]
    fn test_pull_request_unknown_provider() {
        let weburl = weburl(FakeRepository::new("git@git.example.com:team/project.git"));
        let err = weburl.pull_request().unwrap_err();
        assert!(matches!(
            err,
            Error::UnsupportedProvider { ref operation, ref root_url }
                if operation == "pull_request" && root_url == "https://git.example.com/team/project"
        ));
    }

    // ============================================================================
    // Commits and history
    // ============================================================================

    #[test]
    fn test_commit_always_resolves() {
        let repo = Rc::new(FakeRepository::github());
        let weburl = weburl_for(Rc::clone(&repo)).unwrap();
        assert_eq!(
            weburl.commit("master").unwrap(),
            format!("{GITHUB}/commit/{MASTER_HASH}")
        );
        assert_eq!(
            weburl.commit(DEV_HASH).unwrap_err().to_string(),
            format!("revision '{DEV_HASH}' not found: unknown revision")
        );
        assert_eq!(repo.resolved_revisions(), vec!["master", DEV_HASH]);
    }

    #[test]
    fn test_commit_bitbucket() {
        assert_eq!(
            weburl(FakeRepository::bitbucket()).commit("dev").unwrap(),
            format!("{BITBUCKET}/commits/{DEV_HASH}")
        );
    }

    #[test]
    fn test_log() {
        let github = weburl(FakeRepository::github());
        assert_eq!(github.log(None).unwrap(), format!("{GITHUB}/commits/master"));
        assert_eq!(github.log(Some("dev")).unwrap(), format!("{GITHUB}/commits/dev"));
        assert_eq!(github.log(Some("")).unwrap(), format!("{GITHUB}/commits/master"));

        let bitbucket = weburl(FakeRepository::bitbucket());
        assert_eq!(
            bitbucket.log(Some("dev")).unwrap(),
            format!("{BITBUCKET}/commits/branch/dev")
        );
    }

    // ============================================================================
    // Files
    // ============================================================================

    #[test]
    fn test_file_github() {
        let weburl = weburl(FakeRepository::github());
        assert_eq!(
            weburl.file("README.md", &FileOptions::new()).unwrap(),
            format!("{GITHUB}/blob/master/README.md")
        );
        assert_eq!(
            weburl
                .file("README.md", &FileOptions::new().with_permalink(true))
                .unwrap(),
            format!("{GITHUB}/blob/{MASTER_HASH}/README.md")
        );
        assert_eq!(
            weburl.file("README.md", &lines(LinesSpecifier::Line(1))).unwrap(),
            format!("{GITHUB}/blob/{MASTER_HASH}/README.md#L1")
        );
        assert_eq!(
            weburl
                .file("README.md", &lines(LinesSpecifier::Range(1, 2)))
                .unwrap(),
            format!("{GITHUB}/blob/{MASTER_HASH}/README.md#L1-L2")
        );
        assert_eq!(
            weburl
                .file(
                    "README.md",
                    &lines(LinesSpecifier::Range(1, 2)).with_permalink(false)
                )
                .unwrap(),
            format!("{GITHUB}/blob/master/README.md#L1-L2")
        );
    }

    #[test]
    fn test_file_gitlab() {
        let weburl = weburl(FakeRepository::gitlab());
        assert_eq!(
            weburl.file("README.md", &FileOptions::new()).unwrap(),
            format!("{GITLAB}/blob/master/README.md")
        );
        assert_eq!(
            weburl
                .file("README.md", &lines(LinesSpecifier::Range(1, 2)))
                .unwrap(),
            format!("{GITLAB}/blob/{MASTER_HASH}/README.md#L1-2")
        );
        assert_eq!(
            weburl
                .file(
                    "README.md",
                    &lines(LinesSpecifier::Range(1, 2)).with_permalink(false)
                )
                .unwrap(),
            format!("{GITLAB}/blob/master/README.md#L1-2")
        );
    }

    #[test]
    fn test_file_bitbucket() {
        let weburl = weburl(FakeRepository::bitbucket());
        assert_eq!(
            weburl.file("README.md", &FileOptions::new()).unwrap(),
            format!("{BITBUCKET}/src/master/README.md")
        );
        assert_eq!(
            weburl.file("README.md", &lines(LinesSpecifier::Line(1))).unwrap(),
            format!("{BITBUCKET}/src/{MASTER_HASH}/README.md#lines-1")
        );
        assert_eq!(
            weburl
                .file(
                    "README.md",
                    &lines(LinesSpecifier::Range(1, 2)).with_permalink(false)
                )
                .unwrap(),
            format!("{BITBUCKET}/src/master/README.md#lines-1:2")
        );
    }

    #[test]
    fn test_file_without_permalink_does_not_resolve() {
        let repo = Rc::new(FakeRepository::github());
        let weburl = weburl_for(Rc::clone(&repo)).unwrap();
        weburl.file("README.md", &FileOptions::new()).unwrap();
        assert!(repo.resolved_revisions().is_empty());
        assert_eq!(repo.relpath_calls(), vec![PathBuf::from("README.md")]);
    }

    #[test]
    fn test_file_revision() {
        let repo = Rc::new(FakeRepository::github());
        let weburl = weburl_for(Rc::clone(&repo)).unwrap();
        assert_eq!(
            weburl
                .file("docs/guide.md", &FileOptions::new().with_revision("v1.0"))
                .unwrap(),
            format!("{GITHUB}/blob/v1.0/docs/guide.md")
        );
        assert_eq!(
            weburl
                .file(
                    "docs/guide.md",
                    &FileOptions::new().with_revision("dev").with_permalink(true)
                )
                .unwrap(),
            format!("{GITHUB}/blob/{DEV_HASH}/docs/guide.md")
        );
        assert_eq!(repo.resolved_revisions(), vec!["dev"]);
    }

    #[test]
    fn test_file_uses_remote_branch_name() {
        let repo = FakeRepository::github()
            .with_current_branch("local")
            .with_remote_branch("local", "upstream")
            .with_revision("local", DEV_HASH);
        let weburl = weburl(repo);
        assert_eq!(
            weburl.file("README.md", &FileOptions::new()).unwrap(),
            format!("{GITHUB}/blob/upstream/README.md")
        );
        // Permalinks resolve the local branch, not the remote name
        assert_eq!(
            weburl.file("README.md", &lines(LinesSpecifier::Line(3))).unwrap(),
            format!("{GITHUB}/blob/{DEV_HASH}/README.md#L3")
        );
    }

    #[test]
    fn test_file_outside_repository() {
        let weburl = weburl(FakeRepository::github());
        let err = weburl
            .file("../elsewhere.md", &FileOptions::new())
            .unwrap_err();
        assert!(matches!(err, Error::PathOutsideRepository { .. }));
    }

    #[test]
    fn test_file_unknown_revision() {
        let weburl = weburl(FakeRepository::github());
        let err = weburl
            .file(
                "README.md",
                &FileOptions::new().with_revision("nope").with_permalink(true),
            )
            .unwrap_err();
        assert!(matches!(err, Error::RevisionNotFound { .. }));
    }

    #[test]
    fn test_file_gitlab_wiki() {
        let weburl = weburl(FakeRepository::gitlab_wiki());
        let root = "https://gitlab.com/USER/PROJECT/wikis";
        assert_eq!(weburl.root_url(), root);
        assert_eq!(
            weburl.file("README.md", &FileOptions::new()).unwrap(),
            format!("{root}/README")
        );
        assert_eq!(
            weburl
                .file("README.md", &FileOptions::new().with_permalink(true))
                .unwrap(),
            format!("{root}/README?version_id={MASTER_HASH}")
        );
        assert_eq!(
            weburl
                .file("guides/setup.md", &lines(LinesSpecifier::Range(1, 2)))
                .unwrap(),
            format!("{root}/guides/setup?version_id={MASTER_HASH}")
        );
        assert_eq!(
            weburl
                .file(
                    "README.md",
                    &lines(LinesSpecifier::Range(1, 2)).with_permalink(false)
                )
                .unwrap(),
            format!("{root}/README")
        );
    }

    #[test]
    fn test_file_gitlab_project_named_wikis() {
        let weburl = weburl(FakeRepository::new("git@gitlab.com:group/wikis.git"));
        assert_eq!(
            weburl.file("README.md", &FileOptions::new()).unwrap(),
            "https://gitlab.com/group/wikis/blob/master/README.md"
        );
    }

    // ============================================================================
    // Trees
    // ============================================================================

    #[test]
    fn test_tree() {
        let github = weburl(FakeRepository::github());
        assert_eq!(github.tree(None, None, false).unwrap(), format!("{GITHUB}/tree/master"));
        assert_eq!(
            github
                .tree(Some(Path::new("src/bin")), Some("dev"), false)
                .unwrap(),
            format!("{GITHUB}/tree/dev/src/bin")
        );
        assert_eq!(
            github.tree(Some(Path::new("src")), None, true).unwrap(),
            format!("{GITHUB}/tree/{MASTER_HASH}/src")
        );
        assert_eq!(
            github.tree(Some(Path::new(".")), None, false).unwrap(),
            format!("{GITHUB}/tree/master")
        );

        let bitbucket = weburl(FakeRepository::bitbucket());
        assert_eq!(
            bitbucket.tree(Some(Path::new("src")), None, false).unwrap(),
            format!("{BITBUCKET}/src/master/src")
        );
    }

    // ============================================================================
    // Diffs
    // ============================================================================

    #[test]
    fn test_diff_no_arguments() {
        let repo = FakeRepository::github()
            .with_current_branch("feature")
            .with_remote_branch("feature", "feature-remote");
        assert_eq!(
            weburl(repo).diff(None, None, false).unwrap(),
            format!("{GITHUB}/compare/master...feature-remote")
        );
    }

    #[test]
    fn test_diff_one_argument_is_target() {
        assert_eq!(
            weburl(FakeRepository::github())
                .diff(Some("dev"), None, false)
                .unwrap(),
            format!("{GITHUB}/compare/master...dev")
        );
    }

    #[test]
    fn test_diff_two_arguments() {
        assert_eq!(
            weburl(FakeRepository::gitlab())
                .diff(Some("v1"), Some("v2"), false)
                .unwrap(),
            format!("{GITLAB}/compare/v1...v2")
        );
    }

    #[test]
    fn test_diff_permalink() {
        let repo = Rc::new(FakeRepository::github());
        let weburl = weburl_for(Rc::clone(&repo)).unwrap();
        assert_eq!(
            weburl.diff(Some("master"), Some("dev"), true).unwrap(),
            format!("{GITHUB}/compare/{MASTER_HASH}...{DEV_HASH}")
        );
        assert_eq!(repo.resolved_revisions(), vec!["master", "dev"]);
    }

    #[test]
    fn test_diff_permalink_keeps_literal_master() {
        let repo = Rc::new(FakeRepository::github());
        let weburl = weburl_for(Rc::clone(&repo)).unwrap();
        assert_eq!(
            weburl.diff(Some("dev"), None, true).unwrap(),
            format!("{GITHUB}/compare/master...{DEV_HASH}")
        );
        assert_eq!(repo.resolved_revisions(), vec!["dev"]);
    }

    #[test]
    fn test_diff_bitbucket_reverses_operands() {
        let bitbucket = weburl(FakeRepository::bitbucket());
        assert_eq!(
            bitbucket.diff(Some("dev"), None, false).unwrap(),
            format!("{BITBUCKET}/branches/compare/dev%0Dmaster#diff")
        );
        assert_eq!(
            bitbucket.diff(Some("master"), Some("dev"), true).unwrap(),
            format!("{BITBUCKET}/branches/compare/{DEV_HASH}%0D{MASTER_HASH}#diff")
        );
    }

    // ============================================================================
    // Blame
    // ============================================================================

    #[test]
    fn test_blame_github_and_gitlab() {
        assert_eq!(
            weburl(FakeRepository::github())
                .blame("README.md", &FileOptions::new())
                .unwrap(),
            format!("{GITHUB}/blame/master/README.md")
        );
        assert_eq!(
            weburl(FakeRepository::github())
                .blame("README.md", &lines(LinesSpecifier::Range(1, 2)))
                .unwrap(),
            format!("{GITHUB}/blame/{MASTER_HASH}/README.md#L1-L2")
        );
        assert_eq!(
            weburl(FakeRepository::gitlab())
                .blame("README.md", &lines(LinesSpecifier::Range(1, 2)))
                .unwrap(),
            format!("{GITLAB}/blame/{MASTER_HASH}/README.md#L1-2")
        );
    }

    #[test]
    fn test_blame_bitbucket_anchor_named_after_file() {
        let bitbucket = weburl(FakeRepository::bitbucket());
        assert_eq!(
            bitbucket
                .blame("README.md", &lines(LinesSpecifier::Line(1)))
                .unwrap(),
            format!("{BITBUCKET}/annotate/{MASTER_HASH}/README.md#README.md-1")
        );
        assert_eq!(
            bitbucket
                .blame(
                    "src/lib.rs",
                    &lines(LinesSpecifier::Range(1, 2)).with_permalink(false)
                )
                .unwrap(),
            format!("{BITBUCKET}/annotate/master/src/lib.rs#src/lib.rs-1:2")
        );
    }
}
