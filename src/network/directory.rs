//! Active-interface discovery.
//!
//! The active interface is the **first** adapter, in the order the OS
//! enumerates them, that passes the filter chain. There is no ranking:
//! ties are broken purely by enumeration order, which the OS does not
//! promise to keep stable across versions.

use super::filter::{AdapterFilter, FilterChain};
use super::{AddressFetcher, InterfaceHandle};

/// Finds the interface whose resolvers should be managed.
pub trait AdapterDirectory {
    /// Returns the active interface, or `None` when no adapter qualifies.
    ///
    /// Enumeration failures also yield `None`: callers cannot tell
    /// "no network" apart from "enumeration failed".
    fn find_active_interface(&self) -> Option<InterfaceHandle>;
}

impl<T: AdapterDirectory + ?Sized> AdapterDirectory for &T {
    fn find_active_interface(&self) -> Option<InterfaceHandle> {
        (*self).find_active_interface()
    }
}

/// [`AdapterDirectory`] backed by an [`AddressFetcher`] and a [`FilterChain`].
#[derive(Debug)]
pub struct FetcherDirectory<F> {
    fetcher: F,
    filter: FilterChain,
}

impl<F: AddressFetcher> FetcherDirectory<F> {
    /// Creates a directory using the baseline active-interface rules.
    #[must_use]
    pub fn new(fetcher: F) -> Self {
        Self::with_filter(fetcher, FilterChain::active_interface())
    }

    /// Creates a directory with a custom filter chain.
    #[must_use]
    pub const fn with_filter(fetcher: F, filter: FilterChain) -> Self {
        Self { fetcher, filter }
    }

    /// Returns a reference to the inner fetcher.
    pub const fn fetcher(&self) -> &F {
        &self.fetcher
    }
}

impl<F: AddressFetcher> AdapterDirectory for FetcherDirectory<F> {
    fn find_active_interface(&self) -> Option<InterfaceHandle> {
        let adapters = match self.fetcher.fetch() {
            Ok(adapters) => adapters,
            Err(e) => {
                tracing::warn!("Adapter enumeration failed: {e}");
                return None;
            }
        };

        tracing::debug!(count = adapters.len(), "Enumerated adapters");

        let selected = adapters
            .iter()
            .inspect(|a| {
                tracing::trace!(
                    name = %a.name,
                    kind = ?a.kind,
                    status = ?a.status,
                    ipv4 = a.ipv4_addresses.len(),
                    "Candidate adapter"
                );
            })
            .find(|a| self.filter.matches(a))
            .map(super::AdapterSnapshot::handle);

        match &selected {
            Some(handle) => tracing::debug!("Active interface: {handle}"),
            None => tracing::debug!("No adapter passed the active-interface filters"),
        }

        selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::fetcher::mock::MockFetcher;
    use crate::network::filter::NameRegexFilter;
    use crate::network::{AdapterKind, AdapterSnapshot, OperStatus};

    fn adapter(id: &str, name: &str, kind: AdapterKind, status: OperStatus, ipv4: &[&str]) -> AdapterSnapshot {
        AdapterSnapshot::new(
            id,
            name,
            kind,
            status,
            ipv4.iter().map(|ip| ip.parse().unwrap()).collect(),
        )
    }

    fn loopback() -> AdapterSnapshot {
        adapter("{LO}", "Loopback", AdapterKind::Loopback, OperStatus::Up, &["127.0.0.1"])
    }

    #[test]
    fn returns_first_qualifying_adapter_in_enumeration_order() {
        let fetcher = MockFetcher::returning(vec![
            loopback(),
            adapter("{DOWN}", "Ethernet", AdapterKind::Ethernet, OperStatus::Down, &["10.0.0.5"]),
            adapter("{WIFI}", "Wi-Fi", AdapterKind::Wireless, OperStatus::Up, &["192.168.1.20"]),
            adapter("{ETH2}", "Ethernet 2", AdapterKind::Ethernet, OperStatus::Up, &["192.168.2.20"]),
        ]);
        let directory = FetcherDirectory::new(fetcher);

        let handle = directory.find_active_interface().unwrap();

        assert_eq!(handle, InterfaceHandle::new("{WIFI}", "Wi-Fi"));
    }

    #[test]
    fn skips_adapters_without_ipv4() {
        let fetcher = MockFetcher::returning(vec![
            adapter("{V6}", "Ethernet", AdapterKind::Ethernet, OperStatus::Up, &[]),
            adapter("{V4}", "Wi-Fi", AdapterKind::Wireless, OperStatus::Up, &["10.1.1.1"]),
        ]);

        let handle = FetcherDirectory::new(fetcher).find_active_interface().unwrap();

        assert_eq!(handle.id, "{V4}");
    }

    #[test]
    fn virtual_adapters_qualify_by_default() {
        let fetcher = MockFetcher::returning(vec![adapter(
            "{VPN}",
            "VPN",
            AdapterKind::Virtual,
            OperStatus::Up,
            &["10.8.0.2"],
        )]);

        let handle = FetcherDirectory::new(fetcher).find_active_interface();

        assert_eq!(handle.map(|h| h.id), Some("{VPN}".to_string()));
    }

    #[test]
    fn none_when_nothing_qualifies() {
        let fetcher = MockFetcher::returning(vec![loopback()]);
        assert!(FetcherDirectory::new(fetcher).find_active_interface().is_none());
    }

    #[test]
    fn none_when_no_adapters() {
        let fetcher = MockFetcher::returning(vec![]);
        assert!(FetcherDirectory::new(fetcher).find_active_interface().is_none());
    }

    #[test]
    fn enumeration_failure_is_reported_as_none() {
        let directory = FetcherDirectory::new(MockFetcher::failing());

        assert!(directory.find_active_interface().is_none());
        assert_eq!(directory.fetcher().calls(), 1);
    }

    #[test]
    fn custom_filter_changes_selection() {
        let fetcher = MockFetcher::returning(vec![
            adapter("{VETH}", "vEthernet (WSL)", AdapterKind::Other(6), OperStatus::Up, &["172.20.0.1"]),
            adapter("{ETH}", "Ethernet", AdapterKind::Ethernet, OperStatus::Up, &["192.168.1.3"]),
        ]);
        let filter =
            FilterChain::active_interface().exclude(NameRegexFilter::new("^vEthernet").unwrap());

        let handle = FetcherDirectory::with_filter(fetcher, filter)
            .find_active_interface()
            .unwrap();

        assert_eq!(handle.id, "{ETH}");
    }

    #[test]
    fn each_call_re_enumerates() {
        let directory = FetcherDirectory::new(MockFetcher::returning(vec![]));

        let _ = directory.find_active_interface();
        let _ = directory.find_active_interface();

        assert_eq!(directory.fetcher().calls(), 2);
    }
}
