//! Default values for configuration options.
//!
//! Centralized constants to avoid magic numbers scattered across the codebase.

use std::time::Duration;

/// Default settle delay after a successful write, in milliseconds.
pub const SETTLE_DELAY_MS: u64 = 500;

/// Upper bound for the settle delay, in milliseconds.
pub const MAX_SETTLE_DELAY_MS: u64 = 10_000;

/// Default bounded wait for the change broadcast, in milliseconds.
pub const NOTIFY_TIMEOUT_MS: u64 = 5_000;

/// Upper bound for the change broadcast wait, in milliseconds.
pub const MAX_NOTIFY_TIMEOUT_MS: u64 = 60_000;

/// Whether the resolver cache is flushed after a write by default.
pub const FLUSH_CACHE: bool = true;

/// Directory name under the user config directory.
pub const CONFIG_DIR_NAME: &str = "dns-toggle";

/// File name of the per-user config file.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Default settle delay as Duration.
#[must_use]
pub const fn settle_delay() -> Duration {
    Duration::from_millis(SETTLE_DELAY_MS)
}

/// Default change broadcast wait as Duration.
#[must_use]
pub const fn notify_timeout() -> Duration {
    Duration::from_millis(NOTIFY_TIMEOUT_MS)
}
