//! Application execution logic.
//!
//! This module wires the platform collaborators into a
//! [`ToggleController`] and renders its reports for the terminal.

use std::io::{self, Write};

use thiserror::Error;

use dns_toggle::config::ValidatedConfig;
use dns_toggle::network::AdapterDirectory;
use dns_toggle::resolver::ResolverConfigStore;
use dns_toggle::time::Sleeper;
use dns_toggle::toggle::{QueryReport, SystemNotifier, ToggleController, ToggleError};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Shown in place of a status when no interface qualifies.
const NO_INTERFACE_STATUS: &str = "No active network found";

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// The query or toggle failed.
    #[error(transparent)]
    Toggle(#[from] ToggleError),

    /// Failed to write the report.
    #[error("Failed to write output: {0}")]
    Output(#[from] io::Error),

    /// Failed to serialize the report as JSON.
    #[error("Failed to serialize status: {0}")]
    Serialize(#[from] serde_json::Error),

    /// No resolver backend exists for this platform.
    #[cfg(not(windows))]
    #[error("No DNS configuration backend for this platform; only Windows is supported")]
    UnsupportedPlatform,
}

impl RunError {
    /// Actionable hint for the user, if any.
    #[must_use]
    pub const fn hint(&self) -> Option<&'static str> {
        match self {
            Self::Toggle(e) => e.hint(),
            _ => None,
        }
    }
}

/// What the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Report the current state.
    Status,
    /// Flip the state, then report the new one.
    Toggle,
}

/// Executes `action` against the platform backend.
///
/// # Errors
///
/// Returns an error if the query or toggle fails, or the report cannot be written.
///
/// # Coverage Note
///
/// Excluded from coverage because it requires platform network and registry APIs.
#[cfg(all(windows, not(tarpaulin_include)))]
pub fn execute(action: Action, config: ValidatedConfig) -> Result<(), RunError> {
    use dns_toggle::network::FetcherDirectory;
    use dns_toggle::network::platform::PlatformFetcher;
    use dns_toggle::resolver::platform::PlatformStore;
    use dns_toggle::toggle::platform::PlatformNotifier;

    let controller = ToggleController::new(
        FetcherDirectory::with_filter(PlatformFetcher::new(), config.filter),
        PlatformStore::new(),
        PlatformNotifier::new(),
        config.toggle,
    );

    let stdout = io::stdout();
    run_action(&controller, action, config.json, &mut stdout.lock())
}

/// Executes `action`; always fails on platforms without a backend.
///
/// # Errors
///
/// Always returns [`RunError::UnsupportedPlatform`].
#[cfg(not(windows))]
pub fn execute(action: Action, config: ValidatedConfig) -> Result<(), RunError> {
    tracing::debug!(?action, json = config.json, "No platform backend available");
    Err(RunError::UnsupportedPlatform)
}

/// Runs `action` on `controller` and writes the resulting report to `out`.
///
/// A toggle is followed by a fresh query, so the printed state is what the
/// store reports after the change, not what was requested.
///
/// # Errors
///
/// Returns an error if the query or toggle fails, or the report cannot be written.
#[cfg_attr(not(windows), allow(dead_code))]
pub fn run_action<D, S, N, Z, W>(
    controller: &ToggleController<D, S, N, Z>,
    action: Action,
    json: bool,
    out: &mut W,
) -> Result<(), RunError>
where
    D: AdapterDirectory,
    S: ResolverConfigStore,
    N: SystemNotifier,
    Z: Sleeper,
    W: Write,
{
    if action == Action::Toggle {
        let state = controller.toggle()?;
        if !json {
            writeln!(out, "Switched to {state}")?;
        }
    }

    let report = controller.query().map_err(ToggleError::from)?;
    write_report(&report, json, out)
}

/// Renders a report as text or JSON.
#[cfg_attr(not(windows), allow(dead_code))]
fn write_report<W: Write>(report: &QueryReport, json: bool, out: &mut W) -> Result<(), RunError> {
    if json {
        serde_json::to_writer_pretty(&mut *out, &report.view())?;
        writeln!(out)?;
        return Ok(());
    }

    match report.status() {
        None => {
            writeln!(out, "Interface: none")?;
            writeln!(out, "Status: {NO_INTERFACE_STATUS}")?;
        }
        Some(status) => {
            writeln!(out, "Interface: {}", status.interface)?;
            writeln!(out, "Status: {}", status.summary)?;
            writeln!(out, "Action: {}", status.state.action_label())?;
        }
    }

    Ok(())
}
