//! git2-backed repository port.

use super::RepositoryPort;
use super::branch::DEFAULT_BRANCH;
use crate::remote::Provider;
use crate::{Error, Result};
use git2::{Config, ErrorCode, Repository};
use std::path::{Component, Path, PathBuf};

const HEADS_PREFIX: &str = "refs/heads/";
const DEFAULT_REMOTE: &str = "origin";

/// A git work tree opened with git2.
///
/// Relative paths given to [`RepositoryPort::relpath`] are taken relative to
/// the directory the repository was discovered from.
pub struct GitRepository {
    repo: Repository,
    cwd: PathBuf,
    root: PathBuf,
}

impl GitRepository {
    /// Discovers the repository containing `path`.
    ///
    /// `path` may be a file, in which case its directory is used. Parent
    /// directories are searched like `git` does.
    ///
    /// # Errors
    ///
    /// Returns an error if no repository is found or it has no work tree.
    pub fn discover(path: &Path) -> Result<Self> {
        let dir = if path.is_dir() {
            path
        } else {
            path.parent()
                .filter(|parent| !parent.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."))
        };
        let cwd = dir.canonicalize().map_err(|e| Error::OperationFailed {
            operation: "resolve_path".to_string(),
            cause: format!("{}: {e}", dir.display()),
        })?;

        let repo = Repository::discover(&cwd).map_err(git_error("discover_repository"))?;
        let workdir = repo.workdir().ok_or_else(|| Error::OperationFailed {
            operation: "discover_repository".to_string(),
            cause: format!("{} is a bare repository", repo.path().display()),
        })?;
        let root = workdir.canonicalize().map_err(|e| Error::OperationFailed {
            operation: "resolve_path".to_string(),
            cause: format!("{}: {e}", workdir.display()),
        })?;

        tracing::debug!(cwd = %cwd.display(), root = %root.display(), "discovered repository");
        Ok(Self { repo, cwd, root })
    }

    /// Returns the canonical work tree root.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn config(&self) -> Result<Config> {
        self.repo.config().map_err(git_error("read_config"))
    }

    /// Returns the name of the remote `branch` pushes to, if configured.
    ///
    /// Checks `branch.<name>.remote`, `branch.<name>.pushRemote` and
    /// `remote.pushDefault` in that order.
    pub fn remote_of_branch(&self, branch: &str) -> Result<Option<String>> {
        let config = self.config()?;
        let remote = [
            format!("branch.{branch}.remote"),
            format!("branch.{branch}.pushRemote"),
            "remote.pushDefault".to_string(),
        ]
        .iter()
        .find_map(|key| try_config(&config, key));
        Ok(remote)
    }

    /// Returns every URL of the remote `branch` pushes to.
    pub fn remote_all_urls(&self, branch: &str) -> Result<Vec<String>> {
        let remote = self
            .remote_of_branch(branch)?
            .unwrap_or_else(|| DEFAULT_REMOTE.to_string());
        let config = self.config()?;

        let mut urls = Vec::new();
        if let Ok(mut entries) = config.multivar(&format!("remote.{remote}.url"), None) {
            while let Some(entry) = entries.next() {
                let entry = entry.map_err(git_error("read_config"))?;
                if let Some(url) = entry.value() {
                    urls.push(url.to_string());
                }
            }
        }
        tracing::debug!(branch, remote = %remote, urls = ?urls, "remote urls");
        Ok(urls)
    }
}

impl RepositoryPort for GitRepository {
    fn current_branch(&self) -> Result<String> {
        match self.repo.head() {
            Ok(head) if head.is_branch() => head.shorthand().map(String::from).ok_or_else(|| {
                Error::OperationFailed {
                    operation: "current_branch".to_string(),
                    cause: "branch name is not valid UTF-8".to_string(),
                }
            }),
            // Detached HEAD, like `git rev-parse --abbrev-ref HEAD`
            Ok(_) => Ok("HEAD".to_string()),
            Err(e) if e.code() == ErrorCode::UnbornBranch => {
                let head = self
                    .repo
                    .find_reference("HEAD")
                    .map_err(git_error("current_branch"))?;
                Ok(head
                    .symbolic_target()
                    .map(|target| target.strip_prefix(HEADS_PREFIX).unwrap_or(target))
                    .unwrap_or(DEFAULT_BRANCH)
                    .to_string())
            },
            Err(e) => Err(git_error("current_branch")(e)),
        }
    }

    fn remote_url(&self, branch: &str) -> Result<String> {
        let urls = self.remote_all_urls(branch)?;
        choose_url(&urls)
            .map(String::from)
            .ok_or_else(|| Error::NoRemote {
                branch: branch.to_string(),
            })
    }

    fn remote_branch(&self, branch: &str) -> Result<String> {
        let config = self.config()?;
        let remote_branch = try_config(&config, &format!("branch.{branch}.merge")).map_or_else(
            || branch.to_string(),
            |merge| {
                merge
                    .strip_prefix(HEADS_PREFIX)
                    .map_or_else(|| merge.clone(), String::from)
            },
        );
        Ok(remote_branch)
    }

    fn resolve_revision(&self, revision: &str) -> Result<String> {
        let commit = self
            .repo
            .revparse_single(revision)
            .and_then(|object| object.peel_to_commit())
            .map_err(|e| Error::RevisionNotFound {
                revision: revision.to_string(),
                cause: e.message().to_string(),
            })?;
        let hash = commit.id().to_string();
        tracing::debug!(revision, hash = %hash, "resolved revision");
        Ok(hash)
    }

    fn relpath(&self, path: &Path) -> Result<Vec<String>> {
        let absolute = if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.cwd.join(path)
        };
        let resolved = resolve_path(&absolute);
        let relative =
            resolved
                .strip_prefix(&self.root)
                .map_err(|_| Error::PathOutsideRepository {
                    path: path.display().to_string(),
                    root: self.root.display().to_string(),
                })?;

        Ok(relative
            .components()
            .filter_map(|component| match component {
                Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
                _ => None,
            })
            .collect())
    }

    fn need_pull_request(&self, branch: &str) -> Result<bool> {
        if branch == DEFAULT_BRANCH {
            return Ok(false);
        }
        Ok(self.remote_of_branch(branch)?.as_deref() != Some(DEFAULT_REMOTE))
    }
}

/// Picks the remote URL to use when a remote has several.
///
/// The first URL mentioning gitlab wins, then github, then bitbucket;
/// otherwise the first URL listed. Returns `None` for an empty list.
///
/// # Examples
///
/// ```rust
/// use vcslinks::git::choose_url;
///
/// let urls = ["git@github.com:u/p.git", "git@gitlab.com:u/p.git"];
/// assert_eq!(choose_url(&urls), Some("git@gitlab.com:u/p.git"));
/// ```
pub fn choose_url<S: AsRef<str>>(urls: &[S]) -> Option<&str> {
    Provider::PRECEDENCE
        .iter()
        .find_map(|provider| {
            urls.iter()
                .map(|url| url.as_ref())
                .find(|url| provider.matches(url))
        })
        .or_else(|| urls.first().map(|url| url.as_ref()))
}

/// Reads a string config value, treating missing or empty values as unset.
fn try_config(config: &Config, key: &str) -> Option<String> {
    config.get_string(key).ok().filter(|value| !value.is_empty())
}

/// Canonicalizes the longest existing prefix of `path`.
///
/// Components past that prefix do not exist on disk yet, so `..` and `.`
/// among them are applied lexically. Returns `path` normalized lexically
/// when no prefix exists.
fn resolve_path(path: &Path) -> PathBuf {
    let components: Vec<Component<'_>> = path.components().collect();

    for split in (1..=components.len()).rev() {
        let prefix: PathBuf = components[..split].iter().collect();
        if let Ok(canonical) = prefix.canonicalize() {
            return components[split..]
                .iter()
                .fold(canonical, |mut resolved, component| {
                    match component {
                        Component::CurDir => {},
                        Component::ParentDir => {
                            resolved.pop();
                        },
                        other => resolved.push(other),
                    }
                    resolved
                });
        }
    }

    normalize_lexically(path)
}

fn normalize_lexically(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {},
            Component::ParentDir => {
                normalized.pop();
            },
            other => normalized.push(other),
        }
    }
    normalized
}

/// Helper to convert git2 errors.
fn git_error(operation: &'static str) -> impl Fn(git2::Error) -> Error {
    move |e| Error::OperationFailed {
        operation: operation.to_string(),
        cause: e.message().to_string(),
    }
}
