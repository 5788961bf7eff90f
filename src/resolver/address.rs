//! Ordered resolver address lists.

use std::fmt;

use serde::Serialize;

use super::tokenize::{RESOLVER_LIST_DELIMITERS, split_on_any};

/// Ordered list of resolver addresses as text; the first entry is the primary.
///
/// Addresses are kept exactly as read. Duplicates are preserved and nothing
/// is validated, so whatever the OS stored is shown back unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResolverAddressList(Vec<String>);

impl ResolverAddressList {
    /// Creates a list from the given addresses, preserving order.
    #[must_use]
    pub fn new<I, S>(addresses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(addresses.into_iter().map(Into::into).collect())
    }

    /// Parses a raw stored value (comma, space or multi-string separated).
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        Self::new(split_on_any(raw, RESOLVER_LIST_DELIMITERS))
    }

    /// Returns the primary (first) address, if any.
    #[must_use]
    pub fn first(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    /// Returns true if the list has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates over the addresses in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Renders the list in the form stored as a static resolver value.
    #[must_use]
    pub fn to_stored_value(&self) -> String {
        self.0.join(",")
    }
}

impl fmt::Display for ResolverAddressList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_static_value() {
        let list = ResolverAddressList::parse("185.51.200.2,178.22.122.100");
        assert_eq!(
            list,
            ResolverAddressList::new(["185.51.200.2", "178.22.122.100"])
        );
    }

    #[test]
    fn parse_dhcp_value_with_trailing_space() {
        let list = ResolverAddressList::parse("10.0.0.1 10.0.0.2 ");
        assert_eq!(list, ResolverAddressList::new(["10.0.0.1", "10.0.0.2"]));
    }

    #[test]
    fn duplicates_pass_through() {
        let list = ResolverAddressList::parse("8.8.8.8,8.8.8.8");
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn first_is_primary() {
        let list = ResolverAddressList::parse("1.1.1.1 1.0.0.1");
        assert_eq!(list.first(), Some("1.1.1.1"));
        assert_eq!(ResolverAddressList::default().first(), None);
    }

    #[test]
    fn stored_value_is_comma_joined() {
        let list = ResolverAddressList::new(["185.51.200.2", "178.22.122.100"]);
        assert_eq!(list.to_stored_value(), "185.51.200.2,178.22.122.100");
    }

    #[test]
    fn display_is_comma_space_joined() {
        let list = ResolverAddressList::new(["a", "b"]);
        assert_eq!(list.to_string(), "a, b");
    }
}
