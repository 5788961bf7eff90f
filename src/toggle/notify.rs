//! Propagation of resolver changes to the rest of the OS.

use std::time::Duration;

use super::{FlushError, NotifyError};

/// Tells the OS that resolver configuration changed.
///
/// Both operations are best-effort: the controller logs failures and
/// still reports the toggle as successful.
pub trait SystemNotifier {
    /// Broadcasts a configuration-changed signal, waiting at most `timeout`
    /// for unresponsive listeners.
    ///
    /// # Errors
    ///
    /// Returns [`NotifyError::Timeout`] if the bounded wait elapsed, or a
    /// platform error if the broadcast could not be sent.
    fn broadcast_change(&self, timeout: Duration) -> Result<(), NotifyError>;

    /// Invalidates the OS name-resolution cache.
    ///
    /// # Errors
    ///
    /// Returns [`FlushError`] if the cache could not be flushed.
    fn flush_resolver_cache(&self) -> Result<(), FlushError>;
}

impl<T: SystemNotifier + ?Sized> SystemNotifier for &T {
    fn broadcast_change(&self, timeout: Duration) -> Result<(), NotifyError> {
        (*self).broadcast_change(timeout)
    }

    fn flush_resolver_cache(&self) -> Result<(), FlushError> {
        (*self).flush_resolver_cache()
    }
}

/// Recording notifier for tests in this crate.
#[cfg(test)]
pub mod mock {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::io;

    /// Records broadcasts and flushes; can be told to fail either.
    #[derive(Debug, Default)]
    pub struct RecordingNotifier {
        broadcasts: RefCell<Vec<Duration>>,
        flushes: Cell<usize>,
        time_out: Cell<bool>,
        fail_flush: Cell<bool>,
    }

    impl RecordingNotifier {
        /// Makes every broadcast report a timeout.
        pub fn time_out(&self) {
            self.time_out.set(true);
        }

        /// Makes every flush fail.
        pub fn fail_flush(&self) {
            self.fail_flush.set(true);
        }

        /// Timeouts passed to each broadcast so far.
        #[must_use]
        pub fn broadcasts(&self) -> Vec<Duration> {
            self.broadcasts.borrow().clone()
        }

        /// Number of flush attempts so far.
        #[must_use]
        pub fn flushes(&self) -> usize {
            self.flushes.get()
        }
    }

    impl SystemNotifier for RecordingNotifier {
        fn broadcast_change(&self, timeout: Duration) -> Result<(), NotifyError> {
            self.broadcasts.borrow_mut().push(timeout);
            if self.time_out.get() {
                return Err(NotifyError::Timeout { timeout });
            }
            Ok(())
        }

        fn flush_resolver_cache(&self) -> Result<(), FlushError> {
            self.flushes.set(self.flushes.get() + 1);
            if self.fail_flush.get() {
                return Err(FlushError::Spawn {
                    command: "flush",
                    source: io::Error::from(io::ErrorKind::NotFound),
                });
            }
            Ok(())
        }
    }
}
