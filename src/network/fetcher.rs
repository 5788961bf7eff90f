//! Adapter enumeration trait and error types.

use super::AdapterSnapshot;
use thiserror::Error;

/// Error type for adapter enumeration.
///
/// Describes what went wrong without dictating recovery strategy.
/// The adapter directory treats every variant as "no active interface".
#[derive(Debug, Error)]
pub enum FetchError {
    /// Windows API call failed.
    #[cfg(windows)]
    #[error("Windows API error: {0}")]
    WindowsApi(#[from] windows::core::Error),

    /// Permission denied to access network information.
    #[error("Permission denied: {context}")]
    PermissionDenied {
        /// Additional context about what permission was denied.
        context: String,
    },

    /// Platform-specific error with a generic message.
    #[error("Platform error: {message}")]
    Platform {
        /// Error message describing the platform-specific failure.
        message: String,
    },
}

/// Trait for enumerating the host's network adapters.
///
/// Implementations return ALL adapters in the order the OS supplies them;
/// selection is done by [`AdapterDirectory`](super::AdapterDirectory).
pub trait AddressFetcher {
    /// Fetches the current state of all network adapters.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] when:
    /// - Platform API calls fail (e.g., `FetchError::WindowsApi` on Windows)
    /// - Insufficient permissions to access network information (`FetchError::PermissionDenied`)
    /// - Other platform-specific failures (`FetchError::Platform`)
    fn fetch(&self) -> Result<Vec<AdapterSnapshot>, FetchError>;
}

impl<T: AddressFetcher + ?Sized> AddressFetcher for &T {
    fn fetch(&self) -> Result<Vec<AdapterSnapshot>, FetchError> {
        (*self).fetch()
    }
}

/// Mock fetcher for tests in this crate.
#[cfg(test)]
pub mod mock {
    use super::*;
    use std::cell::Cell;

    /// Returns a fixed adapter list (or a fixed failure) on every call.
    #[derive(Debug)]
    pub struct MockFetcher {
        adapters: Vec<AdapterSnapshot>,
        fail: bool,
        calls: Cell<usize>,
    }

    impl MockFetcher {
        /// Creates a mock that returns the given adapters.
        #[must_use]
        pub const fn returning(adapters: Vec<AdapterSnapshot>) -> Self {
            Self {
                adapters,
                fail: false,
                calls: Cell::new(0),
            }
        }

        /// Creates a mock whose enumeration always fails.
        #[must_use]
        pub const fn failing() -> Self {
            Self {
                adapters: Vec::new(),
                fail: true,
                calls: Cell::new(0),
            }
        }

        /// Number of `fetch` calls so far.
        #[must_use]
        pub fn calls(&self) -> usize {
            self.calls.get()
        }
    }

    impl AddressFetcher for MockFetcher {
        fn fetch(&self) -> Result<Vec<AdapterSnapshot>, FetchError> {
            self.calls.set(self.calls.get() + 1);
            if self.fail {
                return Err(FetchError::Platform {
                    message: "enumeration failed".to_string(),
                });
            }
            Ok(self.adapters.clone())
        }
    }
}
