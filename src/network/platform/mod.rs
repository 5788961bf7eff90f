//! Platform-specific network adapter fetcher implementations.
//!
//! # Platform Support
//!
//! - **Windows**: Uses `GetAdaptersAddresses` API via the `windows` crate.

#[cfg(windows)]
mod windows;

#[cfg(windows)]
pub use windows::WindowsFetcher;

// Re-export platform-specific fetcher as PlatformFetcher for convenience
#[cfg(windows)]
pub use windows::WindowsFetcher as PlatformFetcher;
