//! Tests for active-interface filtering.

use super::filter::*;
use super::{AdapterKind, AdapterSnapshot, OperStatus};

/// Adapter with a GUID-style id derived from its name.
fn adapter(name: &str, kind: AdapterKind, status: OperStatus, ipv4: &[&str]) -> AdapterSnapshot {
    AdapterSnapshot::new(
        format!("{{{name}}}"),
        name,
        kind,
        status,
        ipv4.iter().map(|ip| ip.parse().unwrap()).collect(),
    )
}

fn lan() -> AdapterSnapshot {
    adapter("Ethernet", AdapterKind::Ethernet, OperStatus::Up, &["192.168.1.1"])
}

fn wlan() -> AdapterSnapshot {
    adapter("Wi-Fi", AdapterKind::Wireless, OperStatus::Up, &["192.168.1.2"])
}

fn vpn_tunnel() -> AdapterSnapshot {
    adapter("WireGuard Tunnel", AdapterKind::Virtual, OperStatus::Up, &["10.8.0.2"])
}

fn hyperv_switch() -> AdapterSnapshot {
    adapter(
        "vEthernet (Default Switch)",
        AdapterKind::Ethernet,
        OperStatus::Up,
        &["172.17.0.1"],
    )
}

fn loopback() -> AdapterSnapshot {
    adapter(
        "Loopback Pseudo-Interface 1",
        AdapterKind::Loopback,
        OperStatus::Up,
        &["127.0.0.1"],
    )
}

fn unplugged_cable() -> AdapterSnapshot {
    adapter("Ethernet 2", AdapterKind::Ethernet, OperStatus::Down, &["169.254.3.4"])
}

fn dormant_adapter() -> AdapterSnapshot {
    // IfOperStatusDormant
    adapter("Cellular", AdapterKind::Other(243), OperStatus::Other(5), &["10.64.1.9"])
}

fn ipv6_only() -> AdapterSnapshot {
    adapter("Ethernet 3", AdapterKind::Ethernet, OperStatus::Up, &[])
}

mod baseline_rules {
    use super::*;

    #[test]
    fn physical_adapters_that_are_up_with_ipv4_qualify() {
        let chain = FilterChain::active_interface();

        assert!(chain.matches(&lan()));
        assert!(chain.matches(&wlan()));
    }

    #[test]
    fn loopback_never_qualifies() {
        assert!(!FilterChain::active_interface().matches(&loopback()));
    }

    #[test]
    fn down_adapter_does_not_qualify_even_with_address() {
        assert!(!FilterChain::active_interface().matches(&unplugged_cable()));
    }

    #[test]
    fn statuses_other_than_up_do_not_qualify() {
        assert!(!FilterChain::active_interface().matches(&dormant_adapter()));
    }

    #[test]
    fn adapter_without_ipv4_does_not_qualify() {
        assert!(!FilterChain::active_interface().matches(&ipv6_only()));
    }

    #[test]
    fn virtual_adapters_qualify_unless_excluded() {
        let chain = FilterChain::active_interface();

        assert!(chain.matches(&vpn_tunnel()));
        assert!(chain.matches(&hyperv_switch()));
    }

    #[test]
    fn baseline_has_one_exclude_and_no_includes() {
        let chain = FilterChain::active_interface();

        assert_eq!(chain.exclude_count(), 1);
        assert_eq!(chain.include_count(), 0);
        assert_eq!(chain.len(), 3);
    }
}

mod individual_matchers {
    use super::*;

    #[test]
    fn oper_up_only_accepts_up() {
        assert!(OperUpFilter.matches(&lan()));
        assert!(!OperUpFilter.matches(&unplugged_cable()));
        assert!(!OperUpFilter.matches(&dormant_adapter()));
    }

    #[test]
    fn has_ipv4_ignores_status() {
        assert!(HasIpv4Filter.matches(&unplugged_cable()));
        assert!(!HasIpv4Filter.matches(&ipv6_only()));
    }

    #[test]
    fn kind_filter_with_no_kinds_matches_nothing() {
        let filter = KindFilter::new([]);

        assert!(filter.is_empty());
        assert!(!filter.matches(&loopback()));
    }

    #[test]
    fn kind_filter_keeps_unknown_codes_distinct() {
        let filter = KindFilter::new([AdapterKind::Other(243)]);

        assert!(filter.matches(&dormant_adapter()));
        assert!(!filter.matches(&adapter("Modem", AdapterKind::Other(244), OperStatus::Up, &[])));
    }
}

mod name_patterns {
    use super::*;

    #[test]
    fn pattern_is_matched_against_friendly_name_not_id() {
        let filter = NameRegexFilter::new(r"^vEthernet").unwrap();

        assert!(filter.matches(&hyperv_switch()));
        assert!(!filter.matches(&lan()));

        let by_brace = NameRegexFilter::new(r"^\{").unwrap();
        assert!(!by_brace.matches(&lan()));
    }

    #[test]
    fn unanchored_pattern_matches_anywhere() {
        let filter = NameRegexFilter::new("Tunnel").unwrap();
        assert!(filter.matches(&vpn_tunnel()));
    }

    #[test]
    fn inline_flags_are_supported() {
        let filter = NameRegexFilter::new(r"(?i)^wi-?fi$").unwrap();
        assert!(filter.matches(&wlan()));
    }

    #[test]
    fn invalid_pattern_is_rejected() {
        assert!(NameRegexFilter::new(r"(unclosed").is_err());
    }

    #[test]
    fn pattern_accessor_keeps_source_text() {
        let filter = NameRegexFilter::new(r"^Ethernet \d+$").unwrap();
        assert_eq!(filter.pattern().as_str(), r"^Ethernet \d+$");
    }
}

mod configured_chains {
    use super::*;

    #[test]
    fn excluding_virtual_kind_drops_tunnels_only() {
        let chain = FilterChain::active_interface().exclude(KindFilter::new([AdapterKind::Virtual]));

        assert!(!chain.matches(&vpn_tunnel()));
        // Hyper-V switches report as Ethernet and need a name pattern
        assert!(chain.matches(&hyperv_switch()));
        assert!(chain.matches(&lan()));
    }

    #[test]
    fn name_exclusion_drops_hyperv_switch() {
        let chain =
            FilterChain::active_interface().exclude(NameRegexFilter::new("^vEthernet").unwrap());

        assert!(!chain.matches(&hyperv_switch()));
        assert!(chain.matches(&lan()));
    }

    #[test]
    fn include_patterns_restrict_but_never_bypass_baseline() {
        let chain = FilterChain::active_interface()
            .include(NameRegexFilter::new("^Ethernet").unwrap())
            .include(NameRegexFilter::new("^Wi-Fi").unwrap());

        assert!(chain.matches(&lan()));
        assert!(chain.matches(&wlan()));
        assert!(!chain.matches(&vpn_tunnel()));
        // Matches an include, but is down
        assert!(!chain.matches(&unplugged_cable()));
    }

    #[test]
    fn exclude_wins_over_include() {
        let chain = FilterChain::active_interface()
            .include(NameRegexFilter::new("^Ethernet").unwrap())
            .exclude(NameRegexFilter::new("^Ethernet$").unwrap());

        assert!(!chain.matches(&lan()));
    }

    #[test]
    fn empty_chain_accepts_everything() {
        let chain = FilterChain::new();

        assert!(chain.is_empty());
        assert!(chain.matches(&loopback()));
        assert!(chain.matches(&ipv6_only()));
    }

    #[test]
    fn debug_output_reports_tier_sizes() {
        let chain = FilterChain::active_interface();

        let text = format!("{chain:?}");

        assert!(text.contains("require_count: 2"));
        assert!(text.contains("exclude_count: 1"));
    }

    #[test]
    fn borrowed_and_boxed_chains_delegate() {
        let chain = FilterChain::active_interface();
        let borrowed: &dyn AdapterFilter = &chain;
        let boxed: Box<dyn AdapterFilter> = Box::new(FilterChain::active_interface());

        assert!(borrowed.matches(&lan()));
        assert!(!borrowed.matches(&loopback()));
        assert!(boxed.matches(&wlan()));
        assert!(!boxed.matches(&unplugged_cable()));
    }
}
