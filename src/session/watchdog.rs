//! Cancellable periodic task driving the session check.
//!
//! The session manager itself never owns a timer; the embedding application
//! starts a [`Watchdog`] on login and stops it on logout. The watchdog is a
//! background thread that fires a callback on a fixed cadence until
//! [`Watchdog::stop`] is called (or the watchdog is dropped), so no interval
//! leaks past the session it belongs to.
//!
//! The same type serves both cadences the UI needs: the once-a-minute
//! session check, and the once-a-second countdown refresh while a warning
//! banner is displayed.

use std::sync::mpsc;
use std::thread::JoinHandle;
use std::time::Duration;

/// Handle to a running periodic task.
///
/// The callback runs on a dedicated thread every `interval` until stopped.
/// Dropping the handle stops the task and joins the thread.
pub struct Watchdog {
    cancel: mpsc::Sender<()>,
    handle: Option<JoinHandle<()>>,
}

impl Watchdog {
    /// Spawns a periodic task firing `tick` every `interval`.
    ///
    /// The first tick happens one full interval after the spawn; callers
    /// that want an immediate evaluation run the check once themselves
    /// before starting the watchdog.
    pub fn spawn<F>(interval: Duration, mut tick: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        let (cancel, cancelled) = mpsc::channel::<()>();

        let handle = std::thread::spawn(move || loop {
            match cancelled.recv_timeout(interval) {
                Err(mpsc::RecvTimeoutError::Timeout) => tick(),
                Ok(()) | Err(mpsc::RecvTimeoutError::Disconnected) => {
                    tracing::debug!("watchdog stopped");
                    break;
                }
            }
        });

        Self {
            cancel,
            handle: Some(handle),
        }
    }

    /// Stops the task and joins its thread. Idempotent.
    pub fn stop(&mut self) {
        // A send failure means the thread already exited.
        let _ = self.cancel.send(());
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for Watchdog {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn ticks_until_stopped() {
        let count = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&count);

        let mut watchdog = Watchdog::spawn(Duration::from_millis(5), move || {
            seen.fetch_add(1, Ordering::SeqCst);
        });

        std::thread::sleep(Duration::from_millis(60));
        watchdog.stop();
        let at_stop = count.load(Ordering::SeqCst);
        assert!(at_stop > 0, "watchdog never ticked");

        // No further ticks after stop.
        std::thread::sleep(Duration::from_millis(30));
        assert_eq!(count.load(Ordering::SeqCst), at_stop);
    }

    #[test]
    fn stop_is_idempotent_and_drop_is_safe() {
        let mut watchdog = Watchdog::spawn(Duration::from_millis(5), || {});
        watchdog.stop();
        watchdog.stop();
        drop(watchdog);
    }
}
