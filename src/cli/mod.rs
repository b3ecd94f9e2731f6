//! Command-line support.
//!
//! The binary maps its subcommands to a [`Page`], builds the page URL and
//! hands it to an [`Opener`].
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `auto` | Pull request, project or tree page, whichever fits the branch |
//! | `commit` | Commit page of a revision (default `HEAD`) |
//! | `log` | History of a branch |
//! | `file` | File page, optionally with highlighted lines |
//! | `tree` | Directory listing |
//! | `diff` | Comparison of two revisions |
//! | `blame` | Blame page of a file |
//! | `pr` | Pull-request submission page |
//!
//! # Example Usage
//!
//! ```bash
//! # Print the URL of lines 10-20 of a file, pinned to HEAD's hash
//! vcslinks --dry-run file src/lib.rs 10-20
//!
//! # Compare master with a feature branch in a specific browser
//! vcslinks --browser "firefox --new-tab" diff feature
//! ```

mod browser;
mod page;

pub use browser::{Opener, browser_command};
pub use page::{Page, file_options};
