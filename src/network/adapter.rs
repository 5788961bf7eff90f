//! Core network types for adapter representation.

use std::fmt;
use std::net::Ipv4Addr;

use serde::{Deserialize, Serialize};

/// Network adapter type classification.
///
/// Used for filtering and logging. Platform implementations map their
/// native interface type codes onto these variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AdapterKind {
    /// Physical Ethernet adapter.
    Ethernet,
    /// Wireless (Wi-Fi) adapter.
    Wireless,
    /// Loopback adapter (localhost).
    Loopback,
    /// Virtual adapter (tunnel, PPP, VPN, etc.).
    Virtual,
    /// Unknown or other adapter type, preserving the original type code for debugging.
    Other(u32),
}

impl AdapterKind {
    /// Returns true if this is a virtual adapter.
    #[must_use]
    pub const fn is_virtual(&self) -> bool {
        matches!(self, Self::Virtual)
    }

    /// Returns true if this is a loopback adapter.
    #[must_use]
    pub const fn is_loopback(&self) -> bool {
        matches!(self, Self::Loopback)
    }
}

/// Operational status reported by the networking stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperStatus {
    /// The interface is up and can pass packets.
    Up,
    /// The interface is down (cable unplugged, disabled, disconnected).
    Down,
    /// Any other status (testing, dormant, not present...), preserving the raw code.
    Other(i32),
}

impl OperStatus {
    /// Returns true if the interface is operationally up.
    #[must_use]
    pub const fn is_up(self) -> bool {
        matches!(self, Self::Up)
    }
}

/// A snapshot of a single network adapter at a point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdapterSnapshot {
    /// Platform adapter identifier (the `{GUID}` adapter name on Windows).
    pub id: String,
    /// The friendly name of the adapter (e.g., "Ethernet", "Wi-Fi").
    pub name: String,
    /// The type of adapter.
    pub kind: AdapterKind,
    /// Operational status at enumeration time.
    pub status: OperStatus,
    /// All IPv4 addresses assigned to this adapter, in enumeration order.
    pub ipv4_addresses: Vec<Ipv4Addr>,
}

impl AdapterSnapshot {
    /// Creates a new adapter snapshot.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        kind: AdapterKind,
        status: OperStatus,
        ipv4_addresses: Vec<Ipv4Addr>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            status,
            ipv4_addresses,
        }
    }

    /// Returns true if this adapter has at least one IPv4 address.
    #[must_use]
    pub fn has_ipv4(&self) -> bool {
        !self.ipv4_addresses.is_empty()
    }

    /// Returns the identity of this adapter as an [`InterfaceHandle`].
    #[must_use]
    pub fn handle(&self) -> InterfaceHandle {
        InterfaceHandle::new(self.id.clone(), self.name.clone())
    }
}

/// Identity of the interface whose resolvers are being managed.
///
/// Re-resolved on every query; never cached across calls because the
/// active interface can change at any time (cable unplugged, VPN up).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct InterfaceHandle {
    /// Platform adapter identifier, used to address its configuration.
    pub id: String,
    /// Human-readable name for display.
    pub name: String,
}

impl InterfaceHandle {
    /// Creates a new interface handle.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for InterfaceHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}
