//! Raw resolver configuration readings.

use serde::Serialize;

use super::ResolverAddressList;

/// A single reading of an interface's resolver configuration.
///
/// Produced fresh on every read and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "source", content = "addresses", rename_all = "lowercase")]
pub enum ResolverConfig {
    /// A non-empty, statically configured resolver list.
    Static(ResolverAddressList),
    /// No static list; the DHCP-assigned resolvers (possibly none).
    Dhcp(ResolverAddressList),
}

impl ResolverConfig {
    /// Builds a reading from the raw stored values.
    ///
    /// A static value wins when it parses to at least one address;
    /// otherwise the DHCP value (or nothing) is used.
    #[must_use]
    pub fn from_raw(static_value: Option<&str>, dhcp_value: Option<&str>) -> Self {
        let static_list = static_value.map(ResolverAddressList::parse).unwrap_or_default();
        if !static_list.is_empty() {
            return Self::Static(static_list);
        }

        Self::Dhcp(dhcp_value.map(ResolverAddressList::parse).unwrap_or_default())
    }

    /// Returns the addresses of this reading regardless of source.
    #[must_use]
    pub const fn addresses(&self) -> &ResolverAddressList {
        match self {
            Self::Static(list) | Self::Dhcp(list) => list,
        }
    }

    /// Returns true if the reading is statically configured.
    #[must_use]
    pub const fn is_static(&self) -> bool {
        matches!(self, Self::Static(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_value_takes_precedence() {
        let config = ResolverConfig::from_raw(Some("185.51.200.2,178.22.122.100"), Some("8.8.8.8"));

        assert!(config.is_static());
        assert_eq!(config.addresses().first(), Some("185.51.200.2"));
        assert_eq!(config.addresses().len(), 2);
    }

    #[test]
    fn empty_static_value_falls_back_to_dhcp() {
        let config = ResolverConfig::from_raw(Some(""), Some("10.0.0.1 10.0.0.2 "));

        assert_eq!(
            config,
            ResolverConfig::Dhcp(ResolverAddressList::new(["10.0.0.1", "10.0.0.2"]))
        );
    }

    #[test]
    fn delimiter_only_static_value_falls_back_to_dhcp() {
        let config = ResolverConfig::from_raw(Some(" , "), Some("8.8.8.8"));
        assert!(!config.is_static());
    }

    #[test]
    fn absent_values_give_empty_dhcp_reading() {
        let config = ResolverConfig::from_raw(None, None);
        assert_eq!(config, ResolverConfig::Dhcp(ResolverAddressList::default()));
    }

    #[test]
    fn serializes_with_source_tag() {
        let config = ResolverConfig::Dhcp(ResolverAddressList::new(["8.8.8.8"]));
        let json = serde_json::to_value(&config).unwrap();

        assert_eq!(json["source"], "dhcp");
        assert_eq!(json["addresses"][0], "8.8.8.8");
    }
}
