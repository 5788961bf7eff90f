//! The toggle transaction.
//!
//! # Known race
//!
//! [`ToggleController::toggle`] is not atomic across read, classify and
//! write. If another process changes the interface's resolvers after the
//! read, the write still goes ahead based on what was read. This is
//! accepted for a single-operator interactive tool and is not detected.

use std::time::Duration;

use serde::Serialize;

use super::{SystemNotifier, ToggleError};
use crate::config::defaults;
use crate::network::{AdapterDirectory, InterfaceHandle};
use crate::resolver::{
    ConfigAccessError, ResolverConfig, ResolverConfigStore, ResolverState, Summary,
    custom_resolvers,
};
use crate::time::{Sleeper, ThreadSleeper};

/// Tuning for the post-write propagation steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleOptions {
    /// Blocking pause after a successful write before returning.
    pub settle_delay: Duration,
    /// Bounded wait for the change broadcast.
    pub notify_timeout: Duration,
    /// Whether to flush the resolver cache after a successful write.
    pub flush_cache: bool,
}

impl Default for ToggleOptions {
    fn default() -> Self {
        Self {
            settle_delay: defaults::settle_delay(),
            notify_timeout: defaults::notify_timeout(),
            flush_cache: defaults::FLUSH_CACHE,
        }
    }
}

/// Current resolver status of the active interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceStatus {
    /// The interface that was inspected.
    pub interface: InterfaceHandle,
    /// The raw reading.
    pub config: ResolverConfig,
    /// The classified state.
    pub state: ResolverState,
    /// Display summary of the reading.
    pub summary: Summary,
}

/// Result of [`ToggleController::query`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryReport {
    /// No adapter qualifies as the active interface.
    NoActiveInterface,
    /// The active interface and its resolver status.
    Active(InterfaceStatus),
}

impl QueryReport {
    /// Returns true if an active interface was found.
    #[must_use]
    pub const fn has_interface(&self) -> bool {
        matches!(self, Self::Active(_))
    }

    /// Returns the interface status, if any.
    #[must_use]
    pub const fn status(&self) -> Option<&InterfaceStatus> {
        match self {
            Self::Active(status) => Some(status),
            Self::NoActiveInterface => None,
        }
    }

    /// Returns the classified state, if an interface was found.
    #[must_use]
    pub fn state(&self) -> Option<ResolverState> {
        self.status().map(|s| s.state)
    }

    /// Flattened view for display and serialization.
    #[must_use]
    pub fn view(&self) -> StatusView<'_> {
        match self {
            Self::NoActiveInterface => StatusView {
                has_interface: false,
                interface_name: None,
                interface_id: None,
                state: None,
                summary: None,
                action: None,
                resolvers: None,
            },
            Self::Active(status) => StatusView {
                has_interface: true,
                interface_name: Some(&status.interface.name),
                interface_id: Some(&status.interface.id),
                state: Some(status.state),
                summary: Some(status.summary.to_string()),
                action: Some(status.state.action_label()),
                resolvers: Some(&status.config),
            },
        }
    }
}

/// Shell-facing view of a [`QueryReport`].
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusView<'a> {
    /// Whether an active interface exists; shells disable their action otherwise.
    pub has_interface: bool,
    /// Friendly name of the interface.
    pub interface_name: Option<&'a str>,
    /// Platform identifier of the interface.
    pub interface_id: Option<&'a str>,
    /// Classified state.
    pub state: Option<ResolverState>,
    /// Display summary, to be shown verbatim.
    pub summary: Option<String>,
    /// Label for the action that would flip the state.
    pub action: Option<&'static str>,
    /// Full raw reading.
    pub resolvers: Option<&'a ResolverConfig>,
}

/// Orchestrates discovery, reading, classification and writing.
///
/// Holds no session state: every call re-discovers the active interface
/// and re-reads its configuration.
#[derive(Debug)]
pub struct ToggleController<D, S, N, Z = ThreadSleeper> {
    directory: D,
    store: S,
    notifier: N,
    sleeper: Z,
    options: ToggleOptions,
}

impl<D, S, N> ToggleController<D, S, N>
where
    D: AdapterDirectory,
    S: ResolverConfigStore,
    N: SystemNotifier,
{
    /// Creates a controller that blocks the calling thread for the settle delay.
    #[must_use]
    pub const fn new(directory: D, store: S, notifier: N, options: ToggleOptions) -> Self {
        Self::with_sleeper(directory, store, notifier, ThreadSleeper, options)
    }
}

impl<D, S, N, Z> ToggleController<D, S, N, Z>
where
    D: AdapterDirectory,
    S: ResolverConfigStore,
    N: SystemNotifier,
    Z: Sleeper,
{
    /// Creates a controller with a custom sleeper.
    #[must_use]
    pub const fn with_sleeper(
        directory: D,
        store: S,
        notifier: N,
        sleeper: Z,
        options: ToggleOptions,
    ) -> Self {
        Self {
            directory,
            store,
            notifier,
            sleeper,
            options,
        }
    }

    /// Returns the propagation options.
    #[must_use]
    pub const fn options(&self) -> &ToggleOptions {
        &self.options
    }

    /// Reports the active interface and its current resolver state.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigAccessError`] if the interface's configuration
    /// cannot be read. A missing interface is not an error.
    pub fn query(&self) -> Result<QueryReport, ConfigAccessError> {
        let Some(interface) = self.directory.find_active_interface() else {
            return Ok(QueryReport::NoActiveInterface);
        };

        let config = self.store.read(&interface)?;
        let state = ResolverState::classify(&config);
        let summary = Summary::of(&config);

        tracing::debug!(interface = %interface.name, %summary, "Queried resolver state");

        Ok(QueryReport::Active(InterfaceStatus {
            interface,
            config,
            state,
            summary,
        }))
    }

    /// Flips the active interface between custom and automatic resolvers.
    ///
    /// Returns the new state. On success the change has been broadcast,
    /// the resolver cache flushed (both best-effort) and the settle delay
    /// has elapsed, so the caller can re-query right away.
    ///
    /// # Errors
    ///
    /// - [`ToggleError::NoActiveInterface`] when no interface qualifies;
    ///   the store is not touched.
    /// - [`ToggleError::ConfigAccess`] when the read or write fails; nothing
    ///   is broadcast or flushed and the prior configuration is unchanged.
    pub fn toggle(&self) -> Result<ResolverState, ToggleError> {
        let status = match self.query()? {
            QueryReport::Active(status) => status,
            QueryReport::NoActiveInterface => return Err(ToggleError::NoActiveInterface),
        };

        let target = status.state.flipped();
        tracing::info!(
            interface = %status.interface.name,
            from = %status.state,
            to = %target,
            "Toggling resolver configuration"
        );

        match target {
            ResolverState::Custom => self
                .store
                .write_custom(&status.interface, &custom_resolvers())?,
            ResolverState::Automatic => self.store.write_automatic(&status.interface)?,
        }

        self.propagate_change();

        Ok(target)
    }

    fn propagate_change(&self) {
        if let Err(e) = self.notifier.broadcast_change(self.options.notify_timeout) {
            tracing::warn!("Change notification not delivered: {e}");
        }

        if self.options.flush_cache {
            match self.notifier.flush_resolver_cache() {
                Ok(()) => tracing::debug!("Flushed resolver cache"),
                Err(e) => tracing::warn!("Resolver cache flush failed: {e}"),
            }
        }

        tracing::debug!(
            delay_ms = self.options.settle_delay.as_millis(),
            "Waiting for network stack to settle"
        );
        self.sleeper.sleep(self.options.settle_delay);
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod tests;
