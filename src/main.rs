//! Binary entry point for vcslinks.
//!
//! Opens the web page of a local git checkout on its hosting service.

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(missing_docs)]
// Allow print_stderr in main binary for CLI output
#![allow(clippy::print_stderr)]
// Allow needless_pass_by_value for command functions
#![allow(clippy::needless_pass_by_value)]
// Allow multiple crate versions from transitive dependencies
#![allow(clippy::multiple_crate_versions)]

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use vcslinks::cli::{Opener, Page, file_options};
use vcslinks::config::{BROWSER_ENV, CONFIG_PATH_ENV};
use vcslinks::observability::{self, LoggingConfig};
use vcslinks::{PermalinkMode, VcslinksConfig};

/// Open the web page of a git repository on GitHub, GitLab or Bitbucket.
#[derive(Parser)]
#[command(name = "vcslinks")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Print the URL instead of opening it.
    #[arg(long, global = true)]
    dry_run: bool,

    /// Command used to open the URL (default: system browser).
    #[arg(long, global = true, env = BROWSER_ENV)]
    browser: Option<String>,

    /// Path to configuration file.
    #[arg(long, global = true, env = CONFIG_PATH_ENV)]
    config: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path inside the repository.
    #[arg(short = 'C', long, global = true, default_value = ".")]
    path: PathBuf,

    /// Local branch whose remote is used.
    #[arg(short, long, global = true)]
    branch: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available commands.
#[derive(Subcommand)]
enum Commands {
    /// Open the pull request, project or tree page, whichever fits the branch.
    Auto,

    /// Open a commit page.
    Commit {
        /// Revision to show.
        #[arg(default_value = "HEAD")]
        revision: String,
    },

    /// Open the history of a branch.
    Log {
        /// Branch to show (default: the branch on the remote).
        revision: Option<String>,
    },

    /// Open a file page.
    File {
        /// Pin to a commit hash: auto, yes or no.
        #[arg(long)]
        permalink: Option<PermalinkMode>,

        /// File to show.
        file: PathBuf,

        /// Lines to highlight: N or N-M.
        lines: Option<String>,

        /// Revision to show.
        revision: Option<String>,
    },

    /// Open a directory listing.
    Tree {
        /// Pin to a commit hash.
        #[arg(long)]
        permalink: bool,

        /// Directory to show (default: repository root).
        directory: Option<PathBuf>,

        /// Revision to show.
        revision: Option<String>,
    },

    /// Open a comparison between revisions.
    Diff {
        /// Pin to commit hashes.
        #[arg(long)]
        permalink: bool,

        /// Target revision, or source when a second one is given.
        revision1: Option<String>,

        /// Target revision.
        revision2: Option<String>,
    },

    /// Open a blame page.
    Blame {
        /// Pin to a commit hash: auto, yes or no.
        #[arg(long)]
        permalink: Option<PermalinkMode>,

        /// File to annotate.
        file: PathBuf,

        /// Lines to highlight: N or N-M.
        lines: Option<String>,

        /// Revision to show.
        revision: Option<String>,
    },

    /// Open the pull-request submission page.
    Pr,
}

/// Main entry point.
fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match VcslinksConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            return ExitCode::FAILURE;
        },
    };

    let logging = LoggingConfig::from_settings(&config.logging, cli.verbose)
        .and_then(observability::init_logging);
    if let Err(e) = logging {
        eprintln!("Failed to initialize logging: {e}");
        return ExitCode::FAILURE;
    }

    match run_command(cli, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        },
    }
}

/// Runs the selected command.
fn run_command(cli: Cli, config: VcslinksConfig) -> vcslinks::Result<()> {
    let config = config.with_browser_override(cli.browser);
    let opener = Opener::from_config(&config).with_dry_run(config.dry_run || cli.dry_run);
    let page = to_page(cli.command.unwrap_or(Commands::Auto), config.permalink)?;

    let weburl = vcslinks::analyze(&cli.path, cli.branch.as_deref())?;
    let url = page.url(&weburl)?;
    opener.open(&url)
}

/// Maps a subcommand to the page it opens.
fn to_page(command: Commands, default_permalink: PermalinkMode) -> vcslinks::Result<Page> {
    let page = match command {
        Commands::Auto => Page::Auto,
        Commands::Commit { revision } => Page::Commit { revision },
        Commands::Log { revision } => Page::Log { revision },
        Commands::File {
            permalink,
            file,
            lines,
            revision,
        } => Page::File {
            path: file,
            options: file_options(
                lines.as_deref(),
                revision,
                permalink.unwrap_or(default_permalink),
            )?,
        },
        Commands::Tree {
            permalink,
            directory,
            revision,
        } => Page::Tree {
            directory,
            revision,
            permalink,
        },
        Commands::Diff {
            permalink,
            revision1,
            revision2,
        } => Page::Diff {
            revision1,
            revision2,
            permalink,
        },
        Commands::Blame {
            permalink,
            file,
            lines,
            revision,
        } => Page::Blame {
            path: file,
            options: file_options(
                lines.as_deref(),
                revision,
                permalink.unwrap_or(default_permalink),
            )?,
        },
        Commands::Pr => Page::PullRequest,
    };
    Ok(page)
}
