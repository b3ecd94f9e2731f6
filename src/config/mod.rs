//! Configuration management.
//!
//! Settings are read from a TOML file and then overridden by environment
//! variables and command-line flags. Every key is optional:
//!
//! ```toml
//! browser = "firefox --new-tab"
//! dry_run = false
//! permalink = "auto"
//!
//! [logging]
//! format = "json"
//! file = "/tmp/vcslinks.log"
//! filter = "vcslinks=debug"
//! ```

use crate::models::PermalinkMode;
use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "VCSLINKS_CONFIG_PATH";

/// Environment variable overriding the configured browser command.
pub const BROWSER_ENV: &str = "VCSLINKS_BROWSER";

/// Main configuration for vcslinks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VcslinksConfig {
    /// Command used to open URLs; the system browser when `None`.
    pub browser: Option<String>,
    /// Print URLs instead of opening them.
    pub dry_run: bool,
    /// Default permalink mode of the `file` and `blame` commands.
    pub permalink: PermalinkMode,
    /// Logging settings.
    pub logging: LoggingSettings,
}

/// Logging section of the configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LoggingSettings {
    /// Output format: `pretty` or `json`.
    pub format: Option<String>,
    /// Log file path; logs go to stderr when unset.
    pub file: Option<PathBuf>,
    /// `EnvFilter` directive used when no filter environment variable is set.
    pub filter: Option<String>,
}

/// Configuration file structure (for TOML parsing).
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Browser command.
    pub browser: Option<String>,
    /// Dry-run default.
    pub dry_run: Option<bool>,
    /// Permalink default.
    pub permalink: Option<PermalinkMode>,
    /// Logging section.
    pub logging: Option<LoggingSettings>,
}

impl VcslinksConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML or has unknown keys.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(contents).map_err(|e| Error::OperationFailed {
            operation: "parse_config_file".to_string(),
            cause: e.to_string(),
        })?;
        Ok(Self::from_config_file(file))
    }

    /// Loads configuration from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| Error::OperationFailed {
            operation: "read_config_file".to_string(),
            cause: format!("{}: {e}", path.display()),
        })?;
        Self::from_toml(&contents)
    }

    /// Loads configuration from the default location.
    ///
    /// Checks the following paths in order:
    /// 1. Platform-specific config dir (`~/Library/Application Support/vcslinks/` on macOS)
    /// 2. XDG config dir (`~/.config/vcslinks/` for Unix compatibility)
    ///
    /// Returns default configuration if no readable config file is found.
    #[must_use]
    pub fn load_default() -> Self {
        let Some(base_dirs) = directories::BaseDirs::new() else {
            return Self::default();
        };

        let candidates = [
            base_dirs.config_dir().join("vcslinks").join("config.toml"),
            base_dirs
                .home_dir()
                .join(".config")
                .join("vcslinks")
                .join("config.toml"),
        ];
        for path in candidates.iter().filter(|path| path.exists()) {
            match Self::load_from_file(path) {
                Ok(config) => return config,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "ignoring config file");
                },
            }
        }

        Self::default()
    }

    /// Loads configuration from `path`, or from the default locations when
    /// `path` is `None`.
    ///
    /// The binary binds `path` to `--config` / [`CONFIG_PATH_ENV`] and the
    /// browser override to `--browser` / [`BROWSER_ENV`].
    ///
    /// # Errors
    ///
    /// Returns an error if an explicitly named file cannot be read or parsed.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        path.map_or_else(|| Ok(Self::load_default()), Self::load_from_file)
    }

    /// Converts a `ConfigFile` to `VcslinksConfig`.
    fn from_config_file(file: ConfigFile) -> Self {
        Self {
            browser: file.browser.filter(|browser| !browser.trim().is_empty()),
            dry_run: file.dry_run.unwrap_or_default(),
            permalink: file.permalink.unwrap_or_default(),
            logging: file.logging.unwrap_or_default(),
        }
    }

    /// Replaces the browser command when `browser` is set.
    #[must_use]
    pub fn with_browser_override(mut self, browser: Option<String>) -> Self {
        if browser.is_some() {
            self.browser = browser;
        }
        self
    }

    /// Sets the browser command.
    #[must_use]
    pub fn with_browser(mut self, browser: impl Into<String>) -> Self {
        self.browser = Some(browser.into());
        self
    }

    /// Sets dry-run mode.
    #[must_use]
    pub const fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}
