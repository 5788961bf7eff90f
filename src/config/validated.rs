//! Validated configuration after merging CLI and TOML sources.
//!
//! This module contains the final, validated configuration that is used
//! by the application. All validation is performed during construction.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::network::AdapterKind;
use crate::network::filter::{FilterChain, KindFilter, NameRegexFilter};
use crate::toggle::ToggleOptions;

use super::cli::Cli;
use super::defaults;
use super::error::{ConfigError, field};
use super::toml::TomlConfig;

/// Fully validated configuration ready for use by the application.
///
/// # Construction
///
/// Use [`ValidatedConfig::from_raw`] to create from CLI args and optional TOML config,
/// or [`ValidatedConfig::load`] to also locate and read the config file.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// Active-interface selection rules
    pub filter: FilterChain,

    /// Post-change propagation tuning
    pub toggle: ToggleOptions,

    /// Config file that was loaded, if any
    pub config_path: Option<PathBuf>,

    /// JSON output requested
    pub json: bool,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let config_path_str = self
            .config_path
            .as_ref()
            .map_or_else(|| "none".to_string(), |p| p.display().to_string());

        write!(
            f,
            "Config {{ file: {}, settle_delay: {}ms, notify_timeout: {}ms, flush_cache: {}, \
             filters: {} }}",
            config_path_str,
            self.toggle.settle_delay.as_millis(),
            self.toggle.notify_timeout.as_millis(),
            self.toggle.flush_cache,
            self.filter.len(),
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and optional TOML config.
    ///
    /// CLI arguments take precedence over TOML config values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Regex patterns are invalid
    /// - Duration values are out of range
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        let filter = Self::build_filter(cli, toml)?;
        let toggle = Self::build_toggle_options(cli, toml)?;

        Ok(Self {
            filter,
            toggle,
            config_path: None,
            json: cli.json,
            verbose: cli.verbose,
        })
    }

    /// Loads and merges configuration from CLI and optional config file.
    ///
    /// If `cli.config` is set, that file must exist. Otherwise the per-user
    /// file from [`default_config_path`] is used when present.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The merged configuration is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        Self::load_with_fallback(cli, default_config_path().as_deref())
    }

    /// Like [`load`](Self::load), with an explicit fallback path.
    ///
    /// A missing fallback file is not an error.
    ///
    /// # Errors
    ///
    /// See [`load`](Self::load).
    pub fn load_with_fallback(cli: &Cli, fallback: Option<&Path>) -> Result<Self, ConfigError> {
        let path = cli
            .config
            .clone()
            .or_else(|| fallback.filter(|p| p.is_file()).map(Path::to_path_buf));

        let toml = match &path {
            Some(path) => Some(TomlConfig::load(path)?),
            None => None,
        };

        let mut config = Self::from_raw(cli, toml.as_ref())?;
        config.config_path = path;
        Ok(config)
    }

    fn build_filter(cli: &Cli, toml: Option<&TomlConfig>) -> Result<FilterChain, ConfigError> {
        // Loopback, operational status and IPv4 rules are always applied
        let mut filter = FilterChain::active_interface();

        // Exclude virtual if CLI flag or TOML setting
        let exclude_virtual = cli.exclude_virtual || toml.is_some_and(|t| t.adapter.exclude_virtual);

        if exclude_virtual {
            filter = filter.exclude(KindFilter::new([AdapterKind::Virtual]));
        }

        // CLI patterns replace TOML patterns, per list
        let includes = pick_patterns(&cli.include_adapters, toml.map(|t| &t.adapter.include));
        for pattern in includes {
            filter = filter.include(compile_pattern(pattern)?);
        }

        let excludes = pick_patterns(&cli.exclude_adapters, toml.map(|t| &t.adapter.exclude));
        for pattern in excludes {
            filter = filter.exclude(compile_pattern(pattern)?);
        }

        Ok(filter)
    }

    fn build_toggle_options(
        cli: &Cli,
        toml: Option<&TomlConfig>,
    ) -> Result<ToggleOptions, ConfigError> {
        let section = toml.map(|t| &t.toggle);

        // Priority: CLI explicit > TOML > default
        let settle_delay_ms = cli
            .settle_delay_ms
            .or_else(|| section.and_then(|s| s.settle_delay_ms))
            .unwrap_or(defaults::SETTLE_DELAY_MS);

        if settle_delay_ms > defaults::MAX_SETTLE_DELAY_MS {
            return Err(ConfigError::InvalidDuration {
                field: field::SETTLE_DELAY,
                reason: format!("must be at most {}ms", defaults::MAX_SETTLE_DELAY_MS),
            });
        }

        let notify_timeout_ms = cli
            .notify_timeout_ms
            .or_else(|| section.and_then(|s| s.notify_timeout_ms))
            .unwrap_or(defaults::NOTIFY_TIMEOUT_MS);

        if notify_timeout_ms == 0 {
            return Err(ConfigError::InvalidDuration {
                field: field::NOTIFY_TIMEOUT,
                reason: "must be greater than 0".to_string(),
            });
        }

        if notify_timeout_ms > defaults::MAX_NOTIFY_TIMEOUT_MS {
            return Err(ConfigError::InvalidDuration {
                field: field::NOTIFY_TIMEOUT,
                reason: format!("must be at most {}ms", defaults::MAX_NOTIFY_TIMEOUT_MS),
            });
        }

        // --no-flush can only turn flushing off
        let flush_cache = !cli.no_flush
            && section
                .and_then(|s| s.flush_cache)
                .unwrap_or(defaults::FLUSH_CACHE);

        Ok(ToggleOptions {
            settle_delay: Duration::from_millis(settle_delay_ms),
            notify_timeout: Duration::from_millis(notify_timeout_ms),
            flush_cache,
        })
    }
}

/// Returns the per-user config file location, if the platform has one.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| {
        dir.join(defaults::CONFIG_DIR_NAME)
            .join(defaults::CONFIG_FILE_NAME)
    })
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

fn pick_patterns<'a>(cli: &'a [String], toml: Option<&'a Vec<String>>) -> &'a [String] {
    if cli.is_empty() {
        toml.map_or(&[], Vec::as_slice)
    } else {
        cli
    }
}

fn compile_pattern(pattern: &str) -> Result<NameRegexFilter, ConfigError> {
    NameRegexFilter::new(pattern).map_err(|e| ConfigError::InvalidRegex {
        pattern: pattern.to_string(),
        source: e,
    })
}
