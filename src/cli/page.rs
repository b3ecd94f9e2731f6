//! Pages selectable from the command line.

use crate::git::DEFAULT_BRANCH;
use crate::models::{PermalinkMode, parse_lines_spec};
use crate::weburl::{FileOptions, WebUrl};
use crate::Result;
use std::path::PathBuf;

/// A page of the repository's web interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    /// The most useful page for the current branch.
    Auto,
    /// A commit page.
    Commit {
        /// Revision to show.
        revision: String,
    },
    /// A history page.
    Log {
        /// Branch to show; the remote branch when `None`.
        revision: Option<String>,
    },
    /// A file page.
    File {
        /// File to show.
        path: PathBuf,
        /// Lines, revision and permalink options.
        options: FileOptions,
    },
    /// A directory listing.
    Tree {
        /// Directory to show; the repository root when `None`.
        directory: Option<PathBuf>,
        /// Revision to show.
        revision: Option<String>,
        /// Pin to a commit hash.
        permalink: bool,
    },
    /// A comparison between two revisions.
    Diff {
        /// First revision.
        revision1: Option<String>,
        /// Second revision.
        revision2: Option<String>,
        /// Pin to commit hashes.
        permalink: bool,
    },
    /// A blame page.
    Blame {
        /// File to annotate.
        path: PathBuf,
        /// Lines, revision and permalink options.
        options: FileOptions,
    },
    /// The pull-request submission page.
    PullRequest,
}

impl Page {
    /// Builds the URL of this page.
    ///
    /// # Errors
    ///
    /// Returns an error if a revision or path cannot be resolved, or the page
    /// does not exist for the provider.
    pub fn url(&self, weburl: &WebUrl) -> Result<String> {
        match self {
            Self::Auto => auto_url(weburl),
            Self::Commit { revision } => weburl.commit(revision),
            Self::Log { revision } => weburl.log(revision.as_deref()),
            Self::File { path, options } => weburl.file(path, options),
            Self::Tree {
                directory,
                revision,
                permalink,
            } => weburl.tree(directory.as_deref(), revision.as_deref(), *permalink),
            Self::Diff {
                revision1,
                revision2,
                permalink,
            } => weburl.diff(revision1.as_deref(), revision2.as_deref(), *permalink),
            Self::Blame { path, options } => weburl.blame(path, options),
            Self::PullRequest => weburl.pull_request(),
        }
    }
}

/// Picks the page for `auto`.
///
/// Branches that need a pull request open the submission page, `master`
/// opens the project page and anything else opens its tree.
fn auto_url(weburl: &WebUrl) -> Result<String> {
    let branch = weburl.local_branch();
    if branch.need_pull_request()? {
        return weburl.pull_request();
    }
    if branch.remote_branch()? == DEFAULT_BRANCH {
        return Ok(weburl.root_url().to_string());
    }
    weburl.tree(None, None, false)
}

/// Builds [`FileOptions`] from command-line arguments.
///
/// # Errors
///
/// Returns an error if `lines` is not `N` or `N-M`.
pub fn file_options(
    lines: Option<&str>,
    revision: Option<String>,
    permalink: PermalinkMode,
) -> Result<FileOptions> {
    Ok(FileOptions {
        lines: parse_lines_spec(lines)?,
        revision: revision.filter(|revision| !revision.is_empty()),
        permalink: permalink.as_flag(),
    })
}
