//! Adapter filtering for active-interface selection.
//!
//! # Design
//!
//! - **Pure Matchers**: [`KindFilter`], [`NameRegexFilter`], [`OperUpFilter`] and
//!   [`HasIpv4Filter`] only answer "does this adapter match?" without
//!   include/exclude semantics.
//! - **Filter Chain**: [`FilterChain`] combines matchers:
//!   - Exclude filters: any match rejects
//!   - Required filters: every one must match
//!   - Include filters: OR logic (pass ANY include, empty = match all)

use std::collections::HashSet;

use regex::Regex;

use super::{AdapterKind, AdapterSnapshot};

/// Trait for filtering network adapters.
pub trait AdapterFilter {
    /// Returns `true` if the adapter matches this filter.
    fn matches(&self, adapter: &AdapterSnapshot) -> bool;
}

// ============================================================================
// KindFilter - Pure matcher by adapter kind
// ============================================================================

/// Matches adapters whose kind is contained in the specified set.
///
/// # Examples
///
/// ```
/// use dns_toggle::network::filter::{KindFilter, AdapterFilter};
/// use dns_toggle::network::{AdapterSnapshot, AdapterKind, OperStatus};
///
/// let filter = KindFilter::new([AdapterKind::Loopback]);
///
/// let eth = AdapterSnapshot::new("{A}", "eth0", AdapterKind::Ethernet, OperStatus::Up, vec![]);
/// let lo = AdapterSnapshot::new("{B}", "lo", AdapterKind::Loopback, OperStatus::Up, vec![]);
///
/// assert!(!filter.matches(&eth));
/// assert!(filter.matches(&lo));
/// ```
#[derive(Debug, Clone)]
pub struct KindFilter {
    kinds: HashSet<AdapterKind>,
}

impl KindFilter {
    /// Creates a kind filter matching any of the specified kinds.
    #[must_use]
    pub fn new(kinds: impl IntoIterator<Item = AdapterKind>) -> Self {
        Self {
            kinds: kinds.into_iter().collect(),
        }
    }

    /// Returns true if no kinds are configured (matches nothing).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}

impl AdapterFilter for KindFilter {
    fn matches(&self, adapter: &AdapterSnapshot) -> bool {
        self.kinds.contains(&adapter.kind)
    }
}

// ============================================================================
// NameRegexFilter - Pure matcher by name pattern
// ============================================================================

/// Matches adapters whose friendly name matches a regex.
#[derive(Debug)]
pub struct NameRegexFilter {
    pattern: Regex,
}

impl NameRegexFilter {
    /// Creates a name filter with the given regex pattern.
    ///
    /// # Errors
    ///
    /// Returns an error if the regex pattern is invalid.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
        })
    }

    /// Returns a reference to the regex pattern.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)] // Regex is not a const type
    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }
}

impl AdapterFilter for NameRegexFilter {
    fn matches(&self, adapter: &AdapterSnapshot) -> bool {
        self.pattern.is_match(&adapter.name)
    }
}

// ============================================================================
// Status / address matchers
// ============================================================================

/// Matches adapters whose operational status is up.
#[derive(Debug, Clone, Copy, Default)]
pub struct OperUpFilter;

impl AdapterFilter for OperUpFilter {
    fn matches(&self, adapter: &AdapterSnapshot) -> bool {
        adapter.status.is_up()
    }
}

/// Matches adapters with at least one IPv4 address assigned.
#[derive(Debug, Clone, Copy, Default)]
pub struct HasIpv4Filter;

impl AdapterFilter for HasIpv4Filter {
    fn matches(&self, adapter: &AdapterSnapshot) -> bool {
        adapter.has_ipv4()
    }
}

// ============================================================================
// FilterChain
// ============================================================================

/// Filter chain with exclude / require / include semantics.
///
/// Evaluation order:
/// 1. **Exclude filters**: any match → reject.
/// 2. **Required filters**: any miss → reject.
/// 3. **Include filters (OR)**: any match → accept. Empty includes = accept.
///
/// # Examples
///
/// ```
/// use dns_toggle::network::filter::{AdapterFilter, FilterChain};
/// use dns_toggle::network::{AdapterSnapshot, AdapterKind, OperStatus};
///
/// let chain = FilterChain::active_interface();
///
/// let up = AdapterSnapshot::new(
///     "{A}", "Ethernet", AdapterKind::Ethernet, OperStatus::Up,
///     vec!["192.168.1.2".parse().unwrap()],
/// );
/// let down = AdapterSnapshot::new(
///     "{B}", "Wi-Fi", AdapterKind::Wireless, OperStatus::Down,
///     vec!["192.168.1.3".parse().unwrap()],
/// );
///
/// assert!(chain.matches(&up));
/// assert!(!chain.matches(&down));
/// ```
#[derive(Default)]
pub struct FilterChain {
    excludes: Vec<Box<dyn AdapterFilter>>,
    requires: Vec<Box<dyn AdapterFilter>>,
    includes: Vec<Box<dyn AdapterFilter>>,
}

impl FilterChain {
    /// Creates an empty filter chain (matches all adapters).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the baseline chain for active-interface discovery:
    /// not loopback, operationally up, at least one IPv4 address.
    #[must_use]
    pub fn active_interface() -> Self {
        Self::new()
            .exclude(KindFilter::new([AdapterKind::Loopback]))
            .require(OperUpFilter)
            .require(HasIpv4Filter)
    }

    /// Adds an exclude filter. Adapters matching it are rejected.
    #[must_use]
    pub fn exclude<F: AdapterFilter + 'static>(mut self, filter: F) -> Self {
        self.excludes.push(Box::new(filter));
        self
    }

    /// Adds a required filter. Adapters not matching it are rejected.
    #[must_use]
    pub fn require<F: AdapterFilter + 'static>(mut self, filter: F) -> Self {
        self.requires.push(Box::new(filter));
        self
    }

    /// Adds an include filter (OR semantics across includes).
    #[must_use]
    pub fn include<F: AdapterFilter + 'static>(mut self, filter: F) -> Self {
        self.includes.push(Box::new(filter));
        self
    }

    /// Returns the number of include filters.
    #[must_use]
    pub fn include_count(&self) -> usize {
        self.includes.len()
    }

    /// Returns the number of exclude filters.
    #[must_use]
    pub fn exclude_count(&self) -> usize {
        self.excludes.len()
    }

    /// Returns the total number of filters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.excludes.len() + self.requires.len() + self.includes.len()
    }

    /// Returns true if no filters are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl AdapterFilter for FilterChain {
    fn matches(&self, adapter: &AdapterSnapshot) -> bool {
        if self.excludes.iter().any(|f| f.matches(adapter)) {
            return false;
        }

        if !self.requires.iter().all(|f| f.matches(adapter)) {
            return false;
        }

        self.includes.is_empty() || self.includes.iter().any(|f| f.matches(adapter))
    }
}

impl std::fmt::Debug for FilterChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterChain")
            .field("exclude_count", &self.excludes.len())
            .field("require_count", &self.requires.len())
            .field("include_count", &self.includes.len())
            .finish()
    }
}

// Blanket implementation: any &T where T: AdapterFilter also implements AdapterFilter
impl<T: AdapterFilter + ?Sized> AdapterFilter for &T {
    fn matches(&self, adapter: &AdapterSnapshot) -> bool {
        (*self).matches(adapter)
    }
}

// Box<dyn AdapterFilter> implements AdapterFilter
impl AdapterFilter for Box<dyn AdapterFilter> {
    fn matches(&self, adapter: &AdapterSnapshot) -> bool {
        self.as_ref().matches(adapter)
    }
}
