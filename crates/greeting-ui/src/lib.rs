//! Greeting Page UI Components
//!
//! Dioxus components for the greeting page's soft, celebratory look.
//!
//! ## Design Notes
//!
//! - **Pink (#ec4899)**: music control, hearts
//! - **Purple (#9333ea)**: headings, share button gradient
//! - **Butter (#fef08a)**: sparkles
//!
//! Animations are plain CSS keyframes (see the desktop shell's global
//! styles); components only set per-element timing through inline styles.

pub mod components;

pub use components::*;
