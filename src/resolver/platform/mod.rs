//! Platform-specific resolver configuration stores.
//!
//! # Platform Support
//!
//! - **Windows**: Per-interface TCP/IP parameters in the registry, via `winreg`.

#[cfg(windows)]
mod windows;

#[cfg(windows)]
pub use windows::RegistryStore;

#[cfg(windows)]
pub use windows::RegistryStore as PlatformStore;
