//! Registry-backed resolver configuration for Windows.
//!
//! Each interface has a key under
//! `HKLM\SYSTEM\CurrentControlSet\Services\Tcpip\Parameters\Interfaces\{GUID}`
//! holding a static `NameServer` value and a read-only `DhcpNameServer` value.

use std::io;
use std::path::PathBuf;

use winreg::RegKey;
use winreg::enums::{HKEY_LOCAL_MACHINE, KEY_READ, KEY_WRITE};

use crate::network::InterfaceHandle;
use crate::resolver::{
    ConfigAccessError, ConfigOperation, ResolverAddressList, ResolverConfig, ResolverConfigStore,
};

/// Parent key of the per-interface TCP/IP parameters. Must be backslashes.
const INTERFACES_KEY: &str = r"SYSTEM\CurrentControlSet\Services\Tcpip\Parameters\Interfaces";

/// Statically configured resolvers.
const STATIC_VALUE: &str = "NameServer";

/// Resolvers handed out by DHCP.
const DHCP_VALUE: &str = "DhcpNameServer";

/// [`ResolverConfigStore`] over the Windows registry.
#[derive(Debug, Clone, Default)]
pub struct RegistryStore {
    _private: (),
}

impl RegistryStore {
    /// Creates a new registry store.
    #[must_use]
    pub const fn new() -> Self {
        Self { _private: () }
    }

    fn open(
        interface: &InterfaceHandle,
        operation: ConfigOperation,
        flags: u32,
    ) -> Result<RegKey, ConfigAccessError> {
        let hklm = RegKey::predef(HKEY_LOCAL_MACHINE);
        hklm.open_subkey_with_flags(interface_key(interface), flags)
            .map_err(|e| ConfigAccessError::new(operation, interface, e))
    }

    fn set_static_value(
        interface: &InterfaceHandle,
        operation: ConfigOperation,
        value: &str,
    ) -> Result<(), ConfigAccessError> {
        let key = Self::open(interface, operation, KEY_WRITE)?;
        // One REG_SZ write replaces the whole list; there is no partial state.
        key.set_value(STATIC_VALUE, &value)
            .map_err(|e| ConfigAccessError::new(operation, interface, e))?;

        tracing::info!(interface = %interface.name, value, "Wrote {STATIC_VALUE}");
        Ok(())
    }
}

impl ResolverConfigStore for RegistryStore {
    fn read(&self, interface: &InterfaceHandle) -> Result<ResolverConfig, ConfigAccessError> {
        let key = Self::open(interface, ConfigOperation::Read, KEY_READ)?;

        let static_value = optional_string(&key, STATIC_VALUE)
            .map_err(|e| ConfigAccessError::new(ConfigOperation::Read, interface, e))?;
        let dhcp_value = optional_string(&key, DHCP_VALUE)
            .map_err(|e| ConfigAccessError::new(ConfigOperation::Read, interface, e))?;

        tracing::debug!(
            interface = %interface.name,
            ?static_value,
            ?dhcp_value,
            "Read resolver values"
        );

        Ok(ResolverConfig::from_raw(
            static_value.as_deref(),
            dhcp_value.as_deref(),
        ))
    }

    fn write_custom(
        &self,
        interface: &InterfaceHandle,
        addresses: &ResolverAddressList,
    ) -> Result<(), ConfigAccessError> {
        Self::set_static_value(
            interface,
            ConfigOperation::WriteCustom,
            &addresses.to_stored_value(),
        )
    }

    fn write_automatic(&self, interface: &InterfaceHandle) -> Result<(), ConfigAccessError> {
        Self::set_static_value(interface, ConfigOperation::WriteAutomatic, "")
    }
}

/// Registry path of an interface's parameters key.
fn interface_key(interface: &InterfaceHandle) -> PathBuf {
    PathBuf::from(INTERFACES_KEY).join(&interface.id)
}

/// Reads a string value, treating a missing value as `None`.
///
/// `REG_MULTI_SZ` values come back line-separated, which the resolver
/// tokenizer accepts.
fn optional_string(key: &RegKey, name: &str) -> io::Result<Option<String>> {
    match key.get_value::<String, _>(name) {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e),
    }
}
