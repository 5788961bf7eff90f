//! Classification of resolver readings and display summaries.

use std::fmt;

use serde::Serialize;

use super::{PRIMARY_RESOLVER, ResolverConfig};

/// Maximum number of addresses shown in a [`Summary`].
const SUMMARY_ADDRESS_LIMIT: usize = 2;

/// Semantic resolver state of an interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolverState {
    /// Resolvers come from DHCP, or from a static list that is not ours.
    Automatic,
    /// The static list starts with the primary custom resolver.
    Custom,
}

impl ResolverState {
    /// Classifies a reading.
    ///
    /// Custom iff the reading is static and its first address equals
    /// [`PRIMARY_RESOLVER`] exactly. Only this marker entry is checked;
    /// the rest of the list is not compared.
    #[must_use]
    pub fn classify(config: &ResolverConfig) -> Self {
        match config {
            ResolverConfig::Static(list) if list.first() == Some(PRIMARY_RESOLVER) => Self::Custom,
            ResolverConfig::Static(_) | ResolverConfig::Dhcp(_) => Self::Automatic,
        }
    }

    /// The state a toggle moves to.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Automatic => Self::Custom,
            Self::Custom => Self::Automatic,
        }
    }

    /// Label for an action control that would flip this state.
    #[must_use]
    pub const fn action_label(self) -> &'static str {
        match self {
            Self::Automatic => "Set Custom DNS",
            Self::Custom => "Set Automatic DNS",
        }
    }
}

impl fmt::Display for ResolverState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Automatic => write!(f, "Automatic DNS"),
            Self::Custom => write!(f, "Custom DNS Active"),
        }
    }
}

/// Human-readable summary: the state plus up to two resolver addresses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    state: ResolverState,
    addresses: Vec<String>,
}

impl Summary {
    /// Summarizes a reading.
    #[must_use]
    pub fn of(config: &ResolverConfig) -> Self {
        Self {
            state: ResolverState::classify(config),
            addresses: config
                .addresses()
                .iter()
                .take(SUMMARY_ADDRESS_LIMIT)
                .map(str::to_string)
                .collect(),
        }
    }

    /// The classified state.
    #[must_use]
    pub const fn state(&self) -> ResolverState {
        self.state
    }

    /// The listed addresses, primary first.
    #[must_use]
    pub fn addresses(&self) -> &[String] {
        &self.addresses
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.state)?;
        if !self.addresses.is_empty() {
            write!(f, " ({})", self.addresses.join(", "))?;
        }
        Ok(())
    }
}
