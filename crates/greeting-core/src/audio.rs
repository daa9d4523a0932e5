//! Background music control.
//!
//! The controller owns a single [`AudioPlayer`] and the [`PlaybackState`].
//! Pausing is synchronous. Starting playback suspends: the platform may
//! delay or refuse it (autoplay policies, missing media), so a toggle from
//! `Stopped` is split into two halves:
//!
//! 1. [`AudioController::begin_toggle`] sets the volume, asks the player to
//!    start, and hands back a [`PendingPlayback`] tagged with a [`PlayTicket`]
//! 2. [`AudioController::settle`] applies the outcome, but only if the ticket
//!    still names the most recent request
//!
//! Callers that hold the controller exclusively across the await can use
//! [`AudioController::toggle`], which does both.

use std::future::Future;

use crate::error::GreetingResult;

/// Output volume applied before every playback start (fraction of max).
pub const PLAYBACK_VOLUME: f32 = 0.7;

/// Platform audio capability.
///
/// Implementations wrap exactly one playable resource. `play` returns a
/// future that resolves once the platform has actually started (or refused
/// to start) playback.
pub trait AudioPlayer {
    /// Future returned by [`AudioPlayer::play`]
    type Playback: Future<Output = GreetingResult<()>> + 'static;

    fn set_volume(&self, volume: f32);

    fn pause(&self);

    fn play(&self) -> Self::Playback;
}

/// Whether the background audio is sounding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PlaybackState {
    #[default]
    Stopped,
    Playing,
}

impl PlaybackState {
    pub fn is_playing(&self) -> bool {
        matches!(self, PlaybackState::Playing)
    }
}

/// Identifies one playback start request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PlayTicket(u64);

impl PlayTicket {
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// A playback start that has been requested but not yet settled.
#[must_use = "the playback outcome must be passed back to AudioController::settle"]
pub struct PendingPlayback<F> {
    pub ticket: PlayTicket,
    pub playback: F,
}

impl<F> PendingPlayback<F>
where
    F: Future<Output = GreetingResult<()>>,
{
    /// Await the platform and return the outcome alongside its ticket.
    pub async fn wait(self) -> (PlayTicket, GreetingResult<()>) {
        let outcome = self.playback.await;
        (self.ticket, outcome)
    }
}

/// Owns the audio player and its playback state.
pub struct AudioController<P: AudioPlayer> {
    player: P,
    state: PlaybackState,
    pending: Option<PlayTicket>,
    next_ticket: u64,
    closed: bool,
}

impl<P: AudioPlayer> AudioController<P> {
    pub fn new(player: P) -> Self {
        Self {
            player,
            state: PlaybackState::Stopped,
            pending: None,
            next_ticket: 0,
            closed: false,
        }
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// True while a playback start is in flight.
    pub fn is_awaiting(&self) -> bool {
        self.pending.is_some()
    }

    pub fn player(&self) -> &P {
        &self.player
    }

    /// Synchronous half of a toggle.
    ///
    /// - `Playing`: pauses and returns `None`
    /// - start in flight: pauses, invalidates the request, returns `None`
    /// - `Stopped`: sets the volume, requests playback and returns the
    ///   pending start
    pub fn begin_toggle(&mut self) -> Option<PendingPlayback<P::Playback>> {
        if self.closed {
            return None;
        }

        if self.state.is_playing() {
            self.player.pause();
            self.state = PlaybackState::Stopped;
            tracing::info!("Music paused");
            return None;
        }

        if let Some(ticket) = self.pending.take() {
            self.player.pause();
            tracing::debug!(ticket = ticket.id(), "Cancelled pending playback start");
            return None;
        }

        self.player.set_volume(PLAYBACK_VOLUME);
        let ticket = PlayTicket(self.next_ticket);
        self.next_ticket += 1;
        self.pending = Some(ticket);
        tracing::debug!(ticket = ticket.id(), "Requested playback start");

        Some(PendingPlayback {
            ticket,
            playback: self.player.play(),
        })
    }

    /// Asynchronous half of a toggle.
    ///
    /// Returns `true` if the outcome was applied, `false` if the ticket was
    /// stale. Failures are logged and never propagated.
    pub fn settle(&mut self, ticket: PlayTicket, outcome: GreetingResult<()>) -> bool {
        if self.closed {
            return false;
        }

        if self.pending != Some(ticket) {
            tracing::debug!(ticket = ticket.id(), "Discarding stale playback outcome");
            // The platform started playing after the user already backed out.
            if outcome.is_ok() && self.pending.is_none() && !self.state.is_playing() {
                self.player.pause();
            }
            return false;
        }

        self.pending = None;
        match outcome {
            Ok(()) => {
                self.state = PlaybackState::Playing;
                tracing::info!("Music playing");
            }
            Err(e) => {
                tracing::error!("Audio error: {}", e);
                self.state = PlaybackState::Stopped;
            }
        }
        true
    }

    /// Toggle playback, awaiting the platform if a start was requested.
    pub async fn toggle(&mut self) -> PlaybackState {
        if let Some(pending) = self.begin_toggle() {
            let (ticket, outcome) = pending.wait().await;
            self.settle(ticket, outcome);
        }
        self.state
    }

    /// Stop the player and ignore every later outcome.
    pub fn shutdown(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        if self.state.is_playing() || self.pending.is_some() {
            self.player.pause();
        }
        self.pending = None;
        self.state = PlaybackState::Stopped;
    }
}
