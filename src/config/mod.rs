//! Configuration layer for dns-toggle.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated configuration ([`ValidatedConfig`])
//! - Configuration file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! Configuration values are resolved with the following priority (highest to lowest):
//!
//! 1. **Explicit CLI arguments** - Values explicitly passed via command line
//! 2. **TOML config file** - `--config <path>`, or the per-user config file if it exists
//! 3. **Built-in defaults** - Hardcoded default values
//!
//! For adapter patterns (`include_adapters`, `exclude_adapters`), CLI patterns **replace**
//! TOML patterns entirely (not merged), each list independently.
//!
//! # Boolean Flag Semantics
//!
//! `--exclude-virtual` uses OR semantics with the TOML value. `--no-flush` can only
//! disable flushing; it never re-enables a flush disabled in TOML.
//!
//! # Fixed Values
//!
//! The custom resolver pair is not configurable; see
//! [`PRIMARY_RESOLVER`](crate::resolver::PRIMARY_RESOLVER).

mod cli;
pub mod defaults;
mod error;
mod toml;
mod validated;

#[cfg(test)]
mod toml_tests;

pub use cli::{Cli, Command};
pub use error::ConfigError;
pub use toml::{TomlConfig, default_config_template};
pub use validated::{ValidatedConfig, default_config_path, write_default_config};
