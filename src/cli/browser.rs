//! Opening URLs.

use crate::config::VcslinksConfig;
use crate::{Error, Result};
use std::io::Write;
use std::process::Command;

/// Opens URLs in a browser, or prints them in dry-run mode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Opener {
    dry_run: bool,
    browser: Option<String>,
}

impl Opener {
    /// Creates an opener using the system browser.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an opener from the browser and dry-run settings of `config`.
    #[must_use]
    pub fn from_config(config: &VcslinksConfig) -> Self {
        Self {
            dry_run: config.dry_run,
            browser: config.browser.clone(),
        }
    }

    /// Prints URLs instead of opening them.
    #[must_use]
    pub const fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Opens URLs with `browser`, a shell-style command line.
    #[must_use]
    pub fn with_browser(mut self, browser: impl Into<String>) -> Self {
        self.browser = Some(browser.into());
        self
    }

    /// Opens `url`, printing `Open: {url}` to stdout in dry-run mode.
    ///
    /// # Errors
    ///
    /// Returns an error if the browser cannot be started or exits with a
    /// failure status.
    pub fn open(&self, url: &str) -> Result<()> {
        self.open_with(url, &mut std::io::stdout().lock())
    }

    /// Like [`Opener::open`], writing dry-run output to `out`.
    ///
    /// # Errors
    ///
    /// Returns an error if writing, starting the browser or the browser
    /// itself fails.
    pub fn open_with(&self, url: &str, out: &mut impl Write) -> Result<()> {
        if self.dry_run {
            return writeln!(out, "Open: {url}").map_err(|e| Error::OperationFailed {
                operation: "print_url".to_string(),
                cause: e.to_string(),
            });
        }

        tracing::info!(url, browser = self.browser.as_deref(), "opening URL");
        match &self.browser {
            Some(browser) => run_browser(browser, url),
            None => webbrowser::open(url).map_err(|e| Error::OperationFailed {
                operation: "open_browser".to_string(),
                cause: e.to_string(),
            }),
        }
    }
}

/// Splits a browser command line and appends `url` to its arguments.
///
/// # Errors
///
/// Returns an error if the command line is unbalanced or empty.
pub fn browser_command(browser: &str, url: &str) -> Result<Vec<String>> {
    let mut argv = shell_words::split(browser)
        .map_err(|e| Error::InvalidInput(format!("Invalid browser command '{browser}': {e}")))?;
    if argv.is_empty() {
        return Err(Error::InvalidInput("Browser command is empty".to_string()));
    }
    argv.push(url.to_string());
    Ok(argv)
}

fn run_browser(browser: &str, url: &str) -> Result<()> {
    let argv = browser_command(browser, url)?;
    let (program, args) = argv
        .split_first()
        .ok_or_else(|| Error::InvalidInput("Browser command is empty".to_string()))?;

    let status = Command::new(program)
        .args(args)
        .status()
        .map_err(|e| Error::OperationFailed {
            operation: "run_browser".to_string(),
            cause: format!("{program}: {e}"),
        })?;

    if status.success() {
        Ok(())
    } else {
        Err(Error::OperationFailed {
            operation: "run_browser".to_string(),
            cause: format!("{program} exited with {status}"),
        })
    }
}
