//! Error types for the toggle layer.

use std::io;
use std::process::ExitStatus;
use std::time::Duration;

use thiserror::Error;

use crate::resolver::ConfigAccessError;

/// Hint shown when the resolver configuration cannot be accessed.
const ELEVATION_HINT: &str = "Make sure the application is running as Administrator.";

/// Error returned by [`ToggleController::toggle`](super::ToggleController::toggle).
#[derive(Debug, Error)]
pub enum ToggleError {
    /// No interface passed the active-interface filters.
    ///
    /// Also covers enumeration failures, which are indistinguishable here.
    #[error("No active network interface found")]
    NoActiveInterface,

    /// Reading or writing the resolver configuration failed.
    #[error(transparent)]
    ConfigAccess(#[from] ConfigAccessError),
}

impl ToggleError {
    /// Actionable hint for the user, if any.
    #[must_use]
    pub const fn hint(&self) -> Option<&'static str> {
        match self {
            Self::NoActiveInterface => None,
            Self::ConfigAccess(_) => Some(ELEVATION_HINT),
        }
    }
}

/// Failure of the OS-wide change broadcast. Never fails a toggle.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// Some top-level window did not answer within the bounded wait.
    #[error("Change broadcast timed out after {}ms", timeout.as_millis())]
    Timeout {
        /// The bounded wait that elapsed.
        timeout: Duration,
    },

    /// Windows API call failed.
    #[cfg(windows)]
    #[error("Windows API error: {0}")]
    WindowsApi(#[from] windows::core::Error),
}

/// Failure of the resolver cache flush. Never fails a toggle.
#[derive(Debug, Error)]
pub enum FlushError {
    /// The flush command could not be started.
    #[error("Failed to run '{command}': {source}")]
    Spawn {
        /// Command line that was attempted.
        command: &'static str,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The flush command ran but reported failure.
    #[error("'{command}' exited with {status}")]
    Failed {
        /// Command line that was run.
        command: &'static str,
        /// Exit status of the command.
        status: ExitStatus,
    },
}
