//! TOML configuration file parsing.
//!
//! Defines the structure of the configuration file with serde.

use std::path::Path;

use serde::Deserialize;

use super::ConfigError;

/// Root configuration structure from TOML file.
///
/// All fields are optional to allow partial configuration
/// that can be merged with CLI arguments.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// Active-interface selection
    #[serde(default)]
    pub adapter: AdapterSection,

    /// Post-change propagation
    #[serde(default)]
    pub toggle: ToggleSection,
}

/// Adapter selection section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AdapterSection {
    /// Regex patterns for adapters to include
    #[serde(default)]
    pub include: Vec<String>,

    /// Regex patterns for adapters to exclude
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Exclude virtual adapters
    #[serde(default)]
    pub exclude_virtual: bool,
}

/// Propagation section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ToggleSection {
    /// Settle delay after a change, in milliseconds
    pub settle_delay_ms: Option<u64>,

    /// Settings-change broadcast wait, in milliseconds
    pub notify_timeout_ms: Option<u64>,

    /// Flush the resolver cache after a change
    pub flush_cache: Option<bool>,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r#"# DNS Toggle Configuration File
#
# Every setting is optional. Command-line flags override values set here.

[adapter]
# The active interface is the first adapter, in system enumeration order,
# that is up, has an IPv4 address and is not a loopback adapter.

# Regex patterns matched against the adapter's friendly name.
# When include patterns are set, only matching adapters are considered.
# include = ["^Ethernet", "^Wi-Fi"]

# Adapters matching any exclude pattern are never picked.
# exclude = ["^vEthernet", "VirtualBox"]

# Never pick virtual adapters (VPN tunnels, PPP)
# exclude_virtual = false

[toggle]
# Pause after a change before reporting the new state, in milliseconds (max 10000)
# settle_delay_ms = 500

# Maximum wait for the settings-change broadcast, in milliseconds (1-60000)
# notify_timeout_ms = 5000

# Flush the resolver cache after a change
# flush_cache = true
"#
    .to_string()
}
