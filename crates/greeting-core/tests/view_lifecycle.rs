//! Lifecycle tests for the greeting view
//!
//! Drives a GreetingView through mount, music toggles and share feedback
//! using fake platform capabilities and tokio's paused clock.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use futures::channel::oneshot;
use greeting_core::{
    AudioPlayer, ClipboardWriter, GreetingError, GreetingResult, GreetingView, LocationProvider,
    PlaybackState, ViewPhase, COPIED_RESET, PLAYBACK_VOLUME,
};
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::task::JoinHandle;

// ============================================================================
// Fakes
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Volume(f32),
    Pause,
    Play,
}

type Responder = oneshot::Sender<GreetingResult<()>>;

/// Player whose `play` futures are resolved by the test.
#[derive(Clone, Default)]
struct ScriptedPlayer {
    calls: Rc<RefCell<Vec<Call>>>,
    responders: Rc<RefCell<VecDeque<Responder>>>,
}

impl ScriptedPlayer {
    fn resolve_next(&self, outcome: GreetingResult<()>) {
        let responder = self
            .responders
            .borrow_mut()
            .pop_front()
            .expect("a playback request is pending");
        let _ = responder.send(outcome);
    }
}

impl AudioPlayer for ScriptedPlayer {
    type Playback = Pin<Box<dyn Future<Output = GreetingResult<()>>>>;

    fn set_volume(&self, volume: f32) {
        self.calls.borrow_mut().push(Call::Volume(volume));
    }

    fn pause(&self) {
        self.calls.borrow_mut().push(Call::Pause);
    }

    fn play(&self) -> Self::Playback {
        self.calls.borrow_mut().push(Call::Play);
        let (tx, rx) = oneshot::channel();
        self.responders.borrow_mut().push_back(tx);
        Box::pin(async move {
            rx.await
                .unwrap_or_else(|_| Err(GreetingError::AudioUnavailable("dropped".to_string())))
        })
    }
}

/// Player that always starts immediately; `Send` so it can live in a shared view.
struct InstantPlayer;

impl AudioPlayer for InstantPlayer {
    type Playback = std::future::Ready<GreetingResult<()>>;

    fn set_volume(&self, _volume: f32) {}

    fn pause(&self) {}

    fn play(&self) -> Self::Playback {
        std::future::ready(Ok(()))
    }
}

#[derive(Default)]
struct MemoryClipboard {
    writes: Mutex<Vec<String>>,
}

impl ClipboardWriter for MemoryClipboard {
    fn write_text(&self, text: &str) -> GreetingResult<()> {
        self.writes.lock().push(text.to_string());
        Ok(())
    }
}

struct PageLocation;

impl LocationProvider for PageLocation {
    fn current_location(&self) -> String {
        "https://greeting.test/".to_string()
    }
}

type SharedView = Arc<Mutex<GreetingView<InstantPlayer, JoinHandle<()>>>>;

fn shared_view() -> SharedView {
    let _ = tracing_subscriber::fmt::try_init();
    let mut view = GreetingView::new(InstantPlayer);
    view.mount(&mut StdRng::seed_from_u64(11));
    Arc::new(Mutex::new(view))
}

/// Copy the link and arm the reset timer the way the page does.
fn click_copy(view: &SharedView, clipboard: &MemoryClipboard, fired: &Arc<AtomicUsize>) {
    let ticket = view.lock().copy_link(clipboard, &PageLocation);

    let timer_view = view.clone();
    let fired = fired.clone();
    let handle = tokio::spawn(async move {
        tokio::time::sleep(COPIED_RESET).await;
        fired.fetch_add(1, Ordering::SeqCst);
        timer_view.lock().expire_copied(ticket);
    });
    view.lock().arm_copied_reset(handle);
}

/// Let spawned timer tasks run up to their next await point.
async fn settle() {
    for _ in 0..8 {
        tokio::task::yield_now().await;
    }
}

async fn advance_ms(ms: u64) {
    tokio::time::advance(Duration::from_millis(ms)).await;
    settle().await;
}

// ============================================================================
// Mount
// ============================================================================

#[test]
fn test_mounted_flag_false_then_true() {
    let mut view: GreetingView<ScriptedPlayer, JoinHandle<()>> =
        GreetingView::new(ScriptedPlayer::default());

    assert!(!view.is_mounted());
    assert_eq!(view.phase(), ViewPhase::Initializing);

    view.mount(&mut StdRng::seed_from_u64(1));
    for _ in 0..3 {
        assert!(view.is_mounted());
    }
}

#[test]
fn test_second_mount_keeps_coordinates() {
    let mut view: GreetingView<ScriptedPlayer, JoinHandle<()>> =
        GreetingView::new(ScriptedPlayer::default());

    view.mount(&mut StdRng::seed_from_u64(1));
    let hearts = view.hearts().to_vec();
    let sparkles = view.sparkles().to_vec();

    // A different RNG must not matter: nothing is regenerated.
    view.mount(&mut StdRng::seed_from_u64(2));
    assert_eq!(view.hearts(), hearts.as_slice());
    assert_eq!(view.sparkles(), sparkles.as_slice());
}

#[test]
fn test_fresh_view_regenerates() {
    let mut first: GreetingView<ScriptedPlayer, JoinHandle<()>> =
        GreetingView::new(ScriptedPlayer::default());
    let mut second: GreetingView<ScriptedPlayer, JoinHandle<()>> =
        GreetingView::new(ScriptedPlayer::default());

    first.mount(&mut StdRng::seed_from_u64(1));
    second.mount(&mut StdRng::seed_from_u64(2));
    assert_ne!(first.particles(), second.particles());
}

// ============================================================================
// Music toggle
// ============================================================================

#[tokio::test]
async fn test_toggle_awaits_then_plays_then_stops() {
    let player = ScriptedPlayer::default();
    let mut view: GreetingView<_, JoinHandle<()>> = GreetingView::new(player.clone());
    view.mount(&mut StdRng::seed_from_u64(0));

    let pending = view.begin_toggle().expect("start requested");
    assert_eq!(view.phase(), ViewPhase::AwaitingPlayback);
    assert_eq!(view.playback(), PlaybackState::Stopped);

    player.resolve_next(Ok(()));
    let (ticket, outcome) = pending.wait().await;
    assert!(view.settle_playback(ticket, outcome));
    assert_eq!(view.phase(), ViewPhase::Playing);

    // Pausing is synchronous: no pending playback is returned.
    assert!(view.begin_toggle().is_none());
    assert_eq!(view.playback(), PlaybackState::Stopped);
    assert_eq!(view.phase(), ViewPhase::Idle);

    assert_eq!(
        *player.calls.borrow(),
        vec![Call::Volume(PLAYBACK_VOLUME), Call::Play, Call::Pause]
    );
}

#[tokio::test]
async fn test_rejected_playback_ends_stopped() {
    let player = ScriptedPlayer::default();
    let mut view: GreetingView<_, JoinHandle<()>> = GreetingView::new(player.clone());
    view.mount(&mut StdRng::seed_from_u64(0));

    let pending = view.begin_toggle().expect("start requested");
    player.resolve_next(Err(GreetingError::PlaybackRejected(
        "NotAllowedError: play() failed because the user didn't interact".to_string(),
    )));
    let (ticket, outcome) = pending.wait().await;

    assert!(view.settle_playback(ticket, outcome));
    assert_eq!(view.playback(), PlaybackState::Stopped);
    assert_eq!(view.phase(), ViewPhase::Idle);
}

#[tokio::test]
async fn test_retry_after_rejection_needs_new_toggle() {
    let player = ScriptedPlayer::default();
    let mut view: GreetingView<_, JoinHandle<()>> = GreetingView::new(player.clone());

    let pending = view.begin_toggle().expect("start requested");
    player.resolve_next(Err(GreetingError::PlaybackRejected("denied".to_string())));
    let (ticket, outcome) = pending.wait().await;
    view.settle_playback(ticket, outcome);
    assert!(player.responders.borrow().is_empty());

    let pending = view.begin_toggle().expect("second start requested");
    player.resolve_next(Ok(()));
    let (ticket, outcome) = pending.wait().await;
    view.settle_playback(ticket, outcome);
    assert_eq!(view.playback(), PlaybackState::Playing);
}

#[tokio::test]
async fn test_toggle_during_pending_cancels() {
    let player = ScriptedPlayer::default();
    let mut view: GreetingView<_, JoinHandle<()>> = GreetingView::new(player.clone());
    view.mount(&mut StdRng::seed_from_u64(0));

    let stale = view.begin_toggle().expect("start requested");
    assert!(view.begin_toggle().is_none());
    assert_eq!(view.phase(), ViewPhase::Idle);

    // The platform starts playing late; the view pauses it again.
    player.resolve_next(Ok(()));
    let (ticket, outcome) = stale.wait().await;
    assert!(!view.settle_playback(ticket, outcome));
    assert_eq!(view.playback(), PlaybackState::Stopped);
    assert_eq!(player.calls.borrow().last(), Some(&Call::Pause));
}

#[tokio::test]
async fn test_latest_toggle_wins() {
    let player = ScriptedPlayer::default();
    let mut view: GreetingView<_, JoinHandle<()>> = GreetingView::new(player.clone());
    view.mount(&mut StdRng::seed_from_u64(0));

    let stale = view.begin_toggle().expect("first start");
    assert!(view.begin_toggle().is_none());
    let current = view.begin_toggle().expect("second start");

    // Resolve the second request first, then the stale failure arrives.
    player.responders.borrow_mut().swap(0, 1);
    player.resolve_next(Ok(()));
    let (ticket, outcome) = current.wait().await;
    assert!(view.settle_playback(ticket, outcome));

    player.resolve_next(Err(GreetingError::PlaybackRejected("AbortError".to_string())));
    let (ticket, outcome) = stale.wait().await;
    assert!(!view.settle_playback(ticket, outcome));

    assert_eq!(view.playback(), PlaybackState::Playing);
}

#[tokio::test]
async fn test_async_toggle_round_trip() {
    let mut view: GreetingView<InstantPlayer, JoinHandle<()>> = GreetingView::new(InstantPlayer);
    assert_eq!(view.toggle().await, PlaybackState::Playing);
    assert_eq!(view.toggle().await, PlaybackState::Stopped);
}

// ============================================================================
// Share feedback
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_copied_resets_after_two_seconds() {
    let view = shared_view();
    let clipboard = MemoryClipboard::default();
    let fired = Arc::new(AtomicUsize::new(0));

    click_copy(&view, &clipboard, &fired);
    settle().await;
    assert!(view.lock().is_copied());
    assert_eq!(*clipboard.writes.lock(), vec!["https://greeting.test/".to_string()]);

    advance_ms(1999).await;
    assert!(view.lock().is_copied());

    advance_ms(1).await;
    assert!(!view.lock().is_copied());
    assert_eq!(fired.load(Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn test_second_copy_rearms_window() {
    let view = shared_view();
    let clipboard = MemoryClipboard::default();
    let fired = Arc::new(AtomicUsize::new(0));

    click_copy(&view, &clipboard, &fired);
    settle().await;

    advance_ms(1000).await;
    click_copy(&view, &clipboard, &fired);
    settle().await;

    // +2000ms: the first timer was cancelled, feedback still visible.
    advance_ms(1000).await;
    assert!(view.lock().is_copied());
    assert_eq!(fired.load(Ordering::SeqCst), 0);

    advance_ms(999).await;
    assert!(view.lock().is_copied());

    // +3000ms
    advance_ms(1).await;
    assert!(!view.lock().is_copied());
    assert_eq!(fired.load(Ordering::SeqCst), 1);
    assert_eq!(clipboard.writes.lock().len(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_teardown_cancels_pending_reset() {
    let view = shared_view();
    let clipboard = MemoryClipboard::default();
    let fired = Arc::new(AtomicUsize::new(0));

    click_copy(&view, &clipboard, &fired);
    settle().await;

    view.lock().teardown();
    advance_ms(5000).await;

    assert_eq!(fired.load(Ordering::SeqCst), 0);
    let view = view.lock();
    assert!(view.is_torn_down());
    // Discarded state is left exactly as it was.
    assert!(view.is_copied());
}
