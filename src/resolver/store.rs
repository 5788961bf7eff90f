//! Per-interface resolver configuration store.

use std::fmt;
use std::io;

use thiserror::Error;

use super::{ResolverAddressList, ResolverConfig};
use crate::network::InterfaceHandle;

/// The store operation that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigOperation {
    /// Reading the current configuration.
    Read,
    /// Writing the custom resolver list.
    WriteCustom,
    /// Clearing the static list.
    WriteAutomatic,
}

impl fmt::Display for ConfigOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read => write!(f, "read"),
            Self::WriteCustom => write!(f, "write custom"),
            Self::WriteAutomatic => write!(f, "write automatic"),
        }
    }
}

/// Failure to access an interface's resolver configuration.
///
/// Typically caused by missing privileges or an interface that vanished
/// between discovery and access. Operations are all-or-nothing: when this
/// error is returned, nothing was changed.
#[derive(Debug, Error)]
#[error("Failed to {operation} resolver configuration of interface {interface_id}: {source}")]
pub struct ConfigAccessError {
    /// The operation that failed.
    pub operation: ConfigOperation,
    /// Identifier of the interface being accessed.
    pub interface_id: String,
    /// Underlying access error.
    #[source]
    pub source: io::Error,
}

impl ConfigAccessError {
    /// Creates an access error for `interface`.
    #[must_use]
    pub fn new(operation: ConfigOperation, interface: &InterfaceHandle, source: io::Error) -> Self {
        Self {
            operation,
            interface_id: interface.id.clone(),
            source,
        }
    }

    /// Returns true if the failure looks like a privilege problem.
    #[must_use]
    pub fn is_permission_denied(&self) -> bool {
        self.source.kind() == io::ErrorKind::PermissionDenied
    }
}

/// Reads and writes per-interface resolver configuration.
///
/// # Implementation Notes
///
/// - `write_custom` must replace the static list through one single
///   underlying set operation so no partial list is ever left behind.
/// - Both writes must be idempotent: repeating one yields the same state
///   and succeeds.
pub trait ResolverConfigStore {
    /// Reads the interface's resolver configuration.
    ///
    /// Returns the static list when present and non-empty, otherwise the
    /// DHCP-assigned list.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigAccessError`] if the configuration cannot be accessed.
    fn read(&self, interface: &InterfaceHandle) -> Result<ResolverConfig, ConfigAccessError>;

    /// Replaces the static resolver list with `addresses`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigAccessError`] if the write fails; prior content is unchanged.
    fn write_custom(
        &self,
        interface: &InterfaceHandle,
        addresses: &ResolverAddressList,
    ) -> Result<(), ConfigAccessError>;

    /// Clears the static resolver list so DHCP-assigned resolvers apply.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigAccessError`] if the write fails; prior content is unchanged.
    fn write_automatic(&self, interface: &InterfaceHandle) -> Result<(), ConfigAccessError>;
}

impl<T: ResolverConfigStore + ?Sized> ResolverConfigStore for &T {
    fn read(&self, interface: &InterfaceHandle) -> Result<ResolverConfig, ConfigAccessError> {
        (*self).read(interface)
    }

    fn write_custom(
        &self,
        interface: &InterfaceHandle,
        addresses: &ResolverAddressList,
    ) -> Result<(), ConfigAccessError> {
        (*self).write_custom(interface, addresses)
    }

    fn write_automatic(&self, interface: &InterfaceHandle) -> Result<(), ConfigAccessError> {
        (*self).write_automatic(interface)
    }
}


#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
