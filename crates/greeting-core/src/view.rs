//! The greeting view instance.
//!
//! [`GreetingView`] bundles every piece of ephemeral page state: the mount
//! gate, the particle field generated behind it, the audio controller and
//! the share feedback. It is owned by exactly one rendered page and
//! discarded with it.
//!
//! ## Lifecycle
//!
//! ```text
//! Initializing --mount--> Idle --toggle--> AwaitingPlayback --resolve--> Playing
//!                          ^                  |                             |
//!                          +--reject/toggle---+                             |
//!                          +-----------------------toggle-------------------+
//! ```

use rand::Rng;

use crate::audio::{AudioController, AudioPlayer, PendingPlayback, PlayTicket, PlaybackState};
use crate::mount::MountGate;
use crate::particles::{Heart, ParticleField, Sparkle};
use crate::share::{ClipboardWriter, LocationProvider, ResetTicket, ShareFeedback};
use crate::timer::TimerHandle;

/// Observable phase of the view, derived from its parts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewPhase {
    /// First render has not committed yet
    Initializing,
    /// Mounted, music stopped
    Idle,
    /// A playback start is in flight
    AwaitingPlayback,
    /// Music sounding
    Playing,
}

pub struct GreetingView<P: AudioPlayer, H: TimerHandle> {
    gate: MountGate,
    particles: Option<ParticleField>,
    audio: AudioController<P>,
    share: ShareFeedback<H>,
    torn_down: bool,
}

impl<P: AudioPlayer, H: TimerHandle> GreetingView<P, H> {
    pub fn new(player: P) -> Self {
        Self {
            gate: MountGate::new(),
            particles: None,
            audio: AudioController::new(player),
            share: ShareFeedback::new(),
            torn_down: false,
        }
    }

    /// Called once the first render has committed.
    ///
    /// Opens the mount gate and generates the particle field. Only the
    /// first call has any effect; returns whether this call mounted.
    pub fn mount<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        if self.torn_down || !self.gate.open() {
            return false;
        }
        self.particles = Some(ParticleField::generate(rng));
        tracing::debug!("Greeting view mounted");
        true
    }

    pub fn is_mounted(&self) -> bool {
        self.gate.is_mounted()
    }

    /// The particle field, once mounted.
    pub fn particles(&self) -> Option<&ParticleField> {
        self.particles.as_ref()
    }

    /// Hearts to render; empty before mount.
    pub fn hearts(&self) -> &[Heart] {
        self.particles.as_ref().map(ParticleField::hearts).unwrap_or(&[])
    }

    /// Sparkles to render; empty before mount.
    pub fn sparkles(&self) -> &[Sparkle] {
        self.particles.as_ref().map(ParticleField::sparkles).unwrap_or(&[])
    }

    pub fn playback(&self) -> PlaybackState {
        self.audio.state()
    }

    pub fn phase(&self) -> ViewPhase {
        if !self.gate.is_mounted() {
            ViewPhase::Initializing
        } else if self.audio.is_awaiting() {
            ViewPhase::AwaitingPlayback
        } else if self.audio.state().is_playing() {
            ViewPhase::Playing
        } else {
            ViewPhase::Idle
        }
    }

    pub fn audio(&self) -> &AudioController<P> {
        &self.audio
    }

    /// See [`AudioController::begin_toggle`].
    pub fn begin_toggle(&mut self) -> Option<PendingPlayback<P::Playback>> {
        self.audio.begin_toggle()
    }

    /// See [`AudioController::settle`].
    pub fn settle_playback(
        &mut self,
        ticket: PlayTicket,
        outcome: crate::error::GreetingResult<()>,
    ) -> bool {
        self.audio.settle(ticket, outcome)
    }

    /// Toggle music while holding the view across the await.
    pub async fn toggle(&mut self) -> PlaybackState {
        self.audio.toggle().await
    }

    pub fn is_copied(&self) -> bool {
        self.share.is_copied()
    }

    /// See [`ShareFeedback::copy_link`].
    pub fn copy_link<C, L>(&mut self, clipboard: &C, location: &L) -> ResetTicket
    where
        C: ClipboardWriter + ?Sized,
        L: LocationProvider + ?Sized,
    {
        self.share.copy_link(clipboard, location)
    }

    /// See [`ShareFeedback::arm_reset`].
    pub fn arm_copied_reset(&mut self, handle: H) {
        self.share.arm_reset(handle);
    }

    /// See [`ShareFeedback::expire`].
    pub fn expire_copied(&mut self, ticket: ResetTicket) -> bool {
        self.share.expire(ticket)
    }

    /// Dispose the view: cancel the reset timer and stop the music.
    ///
    /// Every later mutation is a no-op.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;
        self.share.shutdown();
        self.audio.shutdown();
        tracing::debug!("Greeting view torn down");
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }
}
