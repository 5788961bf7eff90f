//! Platform-specific change notifiers.
//!
//! # Platform Support
//!
//! - **Windows**: `WM_SETTINGCHANGE` broadcast plus `ipconfig /flushdns`.

#[cfg(windows)]
mod windows;

#[cfg(windows)]
pub use windows::WindowsNotifier;

#[cfg(windows)]
pub use windows::WindowsNotifier as PlatformNotifier;
