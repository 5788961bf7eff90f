//! Resolver configuration layer.
//!
//! This module provides:
//! - A shared tokenizer for resolver lists ([`split_on_any`])
//! - Resolver address lists and raw configuration readings
//!   ([`ResolverAddressList`], [`ResolverConfig`])
//! - Classification into [`ResolverState`] and display [`Summary`]
//! - The per-interface configuration store ([`ResolverConfigStore`])
//! - Platform-specific store implementations ([`platform`])

mod address;
mod config;
pub mod platform;
mod state;
mod store;
mod tokenize;

pub use address::ResolverAddressList;
pub use config::ResolverConfig;
pub use state::{ResolverState, Summary};
pub use store::{ConfigAccessError, ConfigOperation, ResolverConfigStore};
pub use tokenize::{RESOLVER_LIST_DELIMITERS, split_on_any};

#[cfg(test)]
pub(crate) use store::mock;

/// Primary custom resolver. Its presence as the first static entry marks
/// the interface as using custom DNS.
pub const PRIMARY_RESOLVER: &str = "185.51.200.2";

/// Secondary custom resolver.
pub const SECONDARY_RESOLVER: &str = "178.22.122.100";

/// The custom resolver pair written when switching to custom DNS.
#[must_use]
pub fn custom_resolvers() -> ResolverAddressList {
    ResolverAddressList::new([PRIMARY_RESOLVER, SECONDARY_RESOLVER])
}
