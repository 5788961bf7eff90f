//! Toggle layer: query and flip an interface's resolver configuration.
//!
//! This module provides:
//! - The [`ToggleController`] that the user-facing shell depends on
//! - Post-write propagation to the OS ([`SystemNotifier`])
//! - Error types ([`ToggleError`], [`NotifyError`], [`FlushError`])
//! - Platform-specific notifier implementations ([`platform`])

mod controller;
mod error;
mod notify;
pub mod platform;

pub use controller::{InterfaceStatus, QueryReport, StatusView, ToggleController, ToggleOptions};
pub use error::{FlushError, NotifyError, ToggleError};
pub use notify::SystemNotifier;

#[cfg(test)]
pub(crate) use notify::mock;
