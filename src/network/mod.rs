//! Network layer for enumerating adapters and selecting the active one.
//!
//! This module provides types and traits for:
//! - Representing network adapter snapshots ([`AdapterSnapshot`])
//! - Adapter type classification ([`AdapterKind`])
//! - Fetching adapter information ([`AddressFetcher`])
//! - Filtering adapters ([`filter`])
//! - Selecting the active interface ([`AdapterDirectory`])
//! - Platform-specific implementations ([`platform`])

mod adapter;
mod directory;
mod fetcher;
pub mod filter;
pub mod platform;

#[cfg(test)]
mod filter_tests;

pub use adapter::{AdapterKind, AdapterSnapshot, InterfaceHandle, OperStatus};
pub use directory::{AdapterDirectory, FetcherDirectory};
pub use fetcher::{AddressFetcher, FetchError};

#[cfg(test)]
pub(crate) use fetcher::mock;
