//! DNS Toggle: per-interface resolver switcher
//!
//! A library for finding the active network interface, classifying its
//! DNS resolver configuration and flipping it between a fixed custom
//! resolver pair and DHCP-assigned resolvers.

pub mod config;
pub mod network;
pub mod resolver;
pub mod time;
pub mod toggle;
