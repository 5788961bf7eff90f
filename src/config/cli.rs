//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options and subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// DNS Toggle: switch the active interface between custom and automatic DNS
///
/// Shows which resolvers the active network interface uses and flips it
/// between a fixed custom resolver pair and DHCP-assigned resolvers.
#[derive(Debug, Parser)]
#[command(name = "dns-toggle")]
#[command(version, about, long_about = None)]
#[allow(clippy::struct_excessive_bools)] // CLI flags are naturally boolean
pub struct Cli {
    /// Subcommand to run (defaults to `status`)
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Regex pattern for adapters to include (can be specified multiple times)
    #[arg(long = "include-adapter", value_name = "PATTERN", global = true)]
    pub include_adapters: Vec<String>,

    /// Regex pattern for adapters to exclude (can be specified multiple times)
    #[arg(long = "exclude-adapter", value_name = "PATTERN", global = true)]
    pub exclude_adapters: Vec<String>,

    /// Never pick virtual adapters (VPN tunnels, PPP) as the active interface
    #[arg(long = "exclude-virtual", global = true)]
    pub exclude_virtual: bool,

    /// Pause after a change before reporting, in milliseconds
    #[arg(long = "settle-delay-ms", value_name = "MS", global = true)]
    pub settle_delay_ms: Option<u64>,

    /// Maximum wait for the settings-change broadcast, in milliseconds
    #[arg(long = "notify-timeout-ms", value_name = "MS", global = true)]
    pub notify_timeout_ms: Option<u64>,

    /// Do not flush the resolver cache after a change
    #[arg(long = "no-flush", global = true)]
    pub no_flush: bool,

    /// Path to configuration file
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Print status as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

/// Subcommands for dns-toggle
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Show the active interface and its resolver state
    Status,
    /// Flip the active interface between custom and automatic DNS
    Toggle,
    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = "dns-toggle.toml")]
        output: PathBuf,
    },
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Returns true if this is the init command.
    #[must_use]
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Some(Command::Init { .. }))
    }

    /// Returns the command to run, defaulting to [`Command::Status`].
    #[must_use]
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Status)
    }
}
