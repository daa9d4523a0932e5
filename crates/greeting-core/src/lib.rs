//! Greeting Page Core Library
//!
//! Ephemeral view state for a decorative greeting page: no persistence, no
//! networking, just the logic that drives the animation and controls.
//!
//! ## Overview
//!
//! - **Mount gate**: randomized content only appears after the first render
//! - **Particles**: hearts and sparkles generated once per view instance
//! - **Audio**: play/pause toggle with stale playback results discarded
//! - **Share**: copy-link feedback with a re-armable 2 second reset
//!
//! Platform state (audio output, clipboard, page address, timers) sits
//! behind small capability traits so the view can be driven by fakes.
//!
//! ## Quick Start
//!
//! ```ignore
//! use greeting_core::GreetingView;
//!
//! let mut view: GreetingView<_, tokio::task::JoinHandle<()>> = GreetingView::new(player);
//! view.mount(&mut rand::rng());
//!
//! view.toggle().await;
//! let ticket = view.copy_link(&clipboard, &location);
//! ```

pub mod audio;
pub mod error;
pub mod mount;
pub mod particles;
pub mod share;
pub mod timer;
pub mod view;

// Re-exports
pub use audio::{
    AudioController, AudioPlayer, PendingPlayback, PlayTicket, PlaybackState, PLAYBACK_VOLUME,
};
pub use error::{GreetingError, GreetingResult};
pub use mount::MountGate;
pub use particles::{
    generate_hearts, generate_sparkles, Heart, ParticleField, Sparkle, HEART_COUNT,
    SPARKLE_COUNT, SPARKLE_PULSE_SECS,
};
pub use share::{ClipboardWriter, LocationProvider, ResetTicket, ShareFeedback, COPIED_RESET};
pub use timer::{ResetTimer, TimerHandle};
pub use view::{GreetingView, ViewPhase};
