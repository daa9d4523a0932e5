//! Cancelable, re-armable one-shot timer slot.
//!
//! The view does not spawn tasks itself; whoever runs the event loop spawns
//! the delayed callback and hands its handle to a [`ResetTimer`]. Arming a
//! new handle cancels the previous one, and dropping the slot cancels
//! whatever is still pending.

/// Handle to a spawned deferred callback.
pub trait TimerHandle {
    /// Stop the callback from running. Must be a no-op if it already ran.
    fn cancel(self);
}

impl TimerHandle for tokio::task::JoinHandle<()> {
    fn cancel(self) {
        self.abort();
    }
}

/// Holds at most one pending timer.
#[derive(Debug)]
pub struct ResetTimer<H: TimerHandle> {
    pending: Option<H>,
}

impl<H: TimerHandle> Default for ResetTimer<H> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<H: TimerHandle> ResetTimer<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the pending timer, cancelling the old one.
    pub fn arm(&mut self, handle: H) {
        if let Some(previous) = self.pending.replace(handle) {
            previous.cancel();
        }
    }

    /// Cancel the pending timer, if any. Returns whether one was pending.
    pub fn cancel(&mut self) -> bool {
        match self.pending.take() {
            Some(handle) => {
                handle.cancel();
                true
            }
            None => false,
        }
    }

    /// Forget the pending handle without cancelling it (it has fired).
    pub fn clear(&mut self) {
        self.pending = None;
    }

    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }
}

impl<H: TimerHandle> Drop for ResetTimer<H> {
    fn drop(&mut self) {
        self.cancel();
    }
}
