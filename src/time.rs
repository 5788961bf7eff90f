//! Blocking-delay abstraction for testability.
//!
//! This module provides a [`Sleeper`] trait so the settle delay after a
//! configuration write can be observed in tests instead of actually
//! blocking the test thread.

use std::time::Duration;

/// Abstraction over blocking the current thread.
///
/// # Example
///
/// ```
/// use dns_toggle::time::{Sleeper, ThreadSleeper};
/// use std::time::Duration;
///
/// ThreadSleeper.sleep(Duration::from_millis(1));
/// ```
pub trait Sleeper {
    /// Blocks the calling thread for `duration`.
    fn sleep(&self, duration: Duration);
}

impl<T: Sleeper + ?Sized> Sleeper for &T {
    fn sleep(&self, duration: Duration) {
        (*self).sleep(duration);
    }
}

/// Production sleeper delegating to [`std::thread::sleep`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&self, duration: Duration) {
        if !duration.is_zero() {
            std::thread::sleep(duration);
        }
    }
}
