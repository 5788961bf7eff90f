//! Windows change propagation: settings broadcast and DNS cache flush.

use std::os::windows::process::CommandExt;
use std::process::{Command, Stdio};
use std::time::Duration;

use windows::Win32::Foundation::{ERROR_TIMEOUT, GetLastError, LPARAM, WPARAM};
use windows::Win32::UI::WindowsAndMessaging::{
    HWND_BROADCAST, SMTO_ABORTIFHUNG, SendMessageTimeoutW, WM_SETTINGCHANGE,
};

use crate::toggle::{FlushError, NotifyError, SystemNotifier};

/// Process creation flag that keeps a console window from flashing up.
const CREATE_NO_WINDOW: u32 = 0x0800_0000;

/// Flush command, as shown in logs and errors.
const FLUSH_COMMAND: &str = "ipconfig /flushdns";

/// [`SystemNotifier`] for Windows.
///
/// The cache flush shells out to `ipconfig /flushdns`.
#[derive(Debug, Clone, Default)]
pub struct WindowsNotifier {
    _private: (),
}

impl WindowsNotifier {
    /// Creates a new Windows notifier.
    #[must_use]
    pub const fn new() -> Self {
        Self { _private: () }
    }
}

impl SystemNotifier for WindowsNotifier {
    fn broadcast_change(&self, timeout: Duration) -> Result<(), NotifyError> {
        let timeout_ms = u32::try_from(timeout.as_millis()).unwrap_or(u32::MAX);
        let mut result: usize = 0;

        // SAFETY: No pointers are passed besides `result`, which outlives the call.
        // SMTO_ABORTIFHUNG bounds the wait on hung windows.
        let sent = unsafe {
            SendMessageTimeoutW(
                HWND_BROADCAST,
                WM_SETTINGCHANGE,
                WPARAM(0),
                LPARAM(0),
                SMTO_ABORTIFHUNG,
                timeout_ms,
                Some(&raw mut result),
            )
        };

        if sent.0 != 0 {
            tracing::debug!("Broadcast WM_SETTINGCHANGE");
            return Ok(());
        }

        // SAFETY: Reads the calling thread's last-error value only.
        let error = unsafe { GetLastError() };
        if error == ERROR_TIMEOUT {
            return Err(NotifyError::Timeout { timeout });
        }
        Err(windows::core::Error::from(error).into())
    }

    fn flush_resolver_cache(&self) -> Result<(), FlushError> {
        tracing::debug!("Flushing Windows DNS cache...");
        let status = Command::new("ipconfig")
            .creation_flags(CREATE_NO_WINDOW)
            .arg("/flushdns")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|source| FlushError::Spawn {
                command: FLUSH_COMMAND,
                source,
            })?;

        if !status.success() {
            return Err(FlushError::Failed {
                command: FLUSH_COMMAND,
                status,
            });
        }
        Ok(())
    }
}
