//! "Copy link" share feedback.
//!
//! `copy_link` writes the page address to the clipboard and raises the
//! copied flag. The flag drops back after [`COPIED_RESET`], counted from the
//! most recent copy: every copy issues a new [`ResetTicket`] and only that
//! ticket may lower the flag.

use std::time::Duration;

use crate::error::GreetingResult;
use crate::timer::{ResetTimer, TimerHandle};

/// How long the "copied" acknowledgment stays visible.
pub const COPIED_RESET: Duration = Duration::from_millis(2000);

/// Write-only clipboard capability.
pub trait ClipboardWriter {
    fn write_text(&self, text: &str) -> GreetingResult<()>;
}

/// Source of the address that gets shared.
pub trait LocationProvider {
    fn current_location(&self) -> String;
}

/// Identifies one armed reset of the copied flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ResetTicket(u64);

/// Copied flag plus the timer slot that lowers it.
#[derive(Debug)]
pub struct ShareFeedback<H: TimerHandle> {
    copied: bool,
    latest: Option<ResetTicket>,
    next_ticket: u64,
    timer: ResetTimer<H>,
    closed: bool,
}

impl<H: TimerHandle> Default for ShareFeedback<H> {
    fn default() -> Self {
        Self {
            copied: false,
            latest: None,
            next_ticket: 0,
            timer: ResetTimer::new(),
            closed: false,
        }
    }
}

impl<H: TimerHandle> ShareFeedback<H> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_copied(&self) -> bool {
        self.copied
    }

    /// Copy the current location and raise the flag.
    ///
    /// Clipboard failures are logged and otherwise ignored: the flag is
    /// raised either way. After [`ShareFeedback::shutdown`] the clipboard is
    /// left alone. The returned ticket must be passed to
    /// [`ShareFeedback::expire`] once [`COPIED_RESET`] has elapsed.
    pub fn copy_link<C, L>(&mut self, clipboard: &C, location: &L) -> ResetTicket
    where
        C: ClipboardWriter + ?Sized,
        L: LocationProvider + ?Sized,
    {
        let ticket = ResetTicket(self.next_ticket);
        self.next_ticket += 1;
        if self.closed {
            return ticket;
        }

        let url = location.current_location();
        match clipboard.write_text(&url) {
            Ok(()) => tracing::info!(%url, "Copied page link"),
            Err(e) => tracing::warn!("Clipboard not available: {}", e),
        }

        self.copied = true;
        self.latest = Some(ticket);
        ticket
    }

    /// Register the timer that will expire `copy_link`'s ticket.
    ///
    /// Cancels the previously armed timer. After teardown the handle is
    /// cancelled immediately.
    pub fn arm_reset(&mut self, handle: H) {
        if self.closed {
            handle.cancel();
            return;
        }
        self.timer.arm(handle);
    }

    /// Lower the flag if `ticket` belongs to the most recent copy.
    pub fn expire(&mut self, ticket: ResetTicket) -> bool {
        if self.closed || self.latest != Some(ticket) {
            return false;
        }
        self.copied = false;
        self.latest = None;
        self.timer.clear();
        true
    }

    /// Cancel the pending reset; later `expire` calls do nothing.
    pub fn shutdown(&mut self) {
        self.closed = true;
        self.latest = None;
        self.timer.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GreetingError;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    struct NoopHandle;

    impl TimerHandle for NoopHandle {
        fn cancel(self) {}
    }

    #[derive(Default)]
    struct MemoryClipboard {
        text: RefCell<Option<String>>,
    }

    impl ClipboardWriter for MemoryClipboard {
        fn write_text(&self, text: &str) -> GreetingResult<()> {
            *self.text.borrow_mut() = Some(text.to_string());
            Ok(())
        }
    }

    struct BrokenClipboard;

    impl ClipboardWriter for BrokenClipboard {
        fn write_text(&self, _text: &str) -> GreetingResult<()> {
            Err(GreetingError::Clipboard("no display".to_string()))
        }
    }

    struct FixedLocation;

    impl LocationProvider for FixedLocation {
        fn current_location(&self) -> String {
            "https://example.test/greeting".to_string()
        }
    }

    #[test]
    fn test_copy_writes_location() {
        let clipboard = MemoryClipboard::default();
        let mut share: ShareFeedback<NoopHandle> = ShareFeedback::new();

        share.copy_link(&clipboard, &FixedLocation);
        assert!(share.is_copied());
        assert_eq!(
            clipboard.text.borrow().as_deref(),
            Some("https://example.test/greeting")
        );
    }

    #[test]
    fn test_clipboard_failure_still_shows_feedback() {
        let mut share: ShareFeedback<NoopHandle> = ShareFeedback::new();
        share.copy_link(&BrokenClipboard, &FixedLocation);
        assert!(share.is_copied());
    }

    #[test]
    fn test_only_latest_ticket_expires() {
        let clipboard = MemoryClipboard::default();
        let mut share: ShareFeedback<NoopHandle> = ShareFeedback::new();

        let first = share.copy_link(&clipboard, &FixedLocation);
        let second = share.copy_link(&clipboard, &FixedLocation);
        assert!(!share.expire(first));
        assert!(share.is_copied());
        assert!(share.expire(second));
        assert!(!share.is_copied());
    }

    #[test]
    fn test_shutdown_cancels_timer() {
        struct Flag(Rc<Cell<bool>>);
        impl TimerHandle for Flag {
            fn cancel(self) {
                self.0.set(true);
            }
        }

        let cancelled = Rc::new(Cell::new(false));
        let mut share = ShareFeedback::new();
        let ticket = share.copy_link(&MemoryClipboard::default(), &FixedLocation);
        share.arm_reset(Flag(cancelled.clone()));

        share.shutdown();
        assert!(cancelled.get());
        assert!(!share.expire(ticket));
    }

    #[test]
    fn test_copy_after_shutdown_leaves_clipboard_alone() {
        let clipboard = MemoryClipboard::default();
        let mut share: ShareFeedback<NoopHandle> = ShareFeedback::new();
        share.shutdown();

        let ticket = share.copy_link(&clipboard, &FixedLocation);
        assert!(clipboard.text.borrow().is_none());
        assert!(!share.is_copied());
        assert!(!share.expire(ticket));
    }
}
