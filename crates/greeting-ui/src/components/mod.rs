//! Reusable UI components for the greeting page
//!
//! - Buttons for the music toggle and the share action
//! - Particle layers (floating hearts, pulsing sparkles)
//! - Reveal wrappers for staggered entrance animations

mod button;
mod particles;
mod reveal;

pub use button::*;
pub use particles::*;
pub use reveal::*;
