//! Reveal Wrappers
//!
//! Entrance animations for page content. Each wrapper plays its keyframes
//! once, after an optional delay, and then stays in its final state.

use dioxus::prelude::*;

/// Entrance motion for a revealed block
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Motion {
    /// Opacity only
    #[default]
    Fade,
    /// Fade in while rising from below
    Rise,
    /// Fade in while dropping from above
    Drop,
    /// Fade in while sliding in from the left
    FromLeft,
    /// Fade in while sliding in from the right
    FromRight,
    /// Fade in while scaling up from nothing
    Grow,
    /// Fade in while scaling up slightly
    Swell,
}

impl Motion {
    /// Returns the CSS class for this motion
    pub fn class(&self) -> &'static str {
        match self {
            Motion::Fade => "reveal-fade",
            Motion::Rise => "reveal-rise",
            Motion::Drop => "reveal-drop",
            Motion::FromLeft => "reveal-left",
            Motion::FromRight => "reveal-right",
            Motion::Grow => "reveal-grow",
            Motion::Swell => "reveal-swell",
        }
    }
}

/// Properties for the Reveal component
#[derive(Clone, PartialEq, Props)]
pub struct RevealProps {
    /// Entrance motion
    #[props(default)]
    pub motion: Motion,
    /// Delay before the animation starts, in seconds
    #[props(default = 0.0)]
    pub delay: f32,
    /// Animation length, in seconds
    #[props(default = 1.0)]
    pub duration: f32,
    /// Additional CSS classes (may be empty)
    #[props(default)]
    pub class: &'static str,
    pub children: Element,
}

/// Inline timing for a reveal.
pub fn reveal_style(delay: f32, duration: f32) -> String {
    format!("animation-delay: {delay}s; animation-duration: {duration}s;")
}

/// Wraps content in a one-shot entrance animation.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Reveal { motion: Motion::Rise, delay: 0.5,
///         h1 { "My Wish For You" }
///     }
/// }
/// ```
#[component]
pub fn Reveal(props: RevealProps) -> Element {
    let class = if props.class.is_empty() {
        format!("reveal {}", props.motion.class())
    } else {
        format!("reveal {} {}", props.motion.class(), props.class)
    };

    rsx! {
        div {
            class: "{class}",
            style: reveal_style(props.delay, props.duration),
            {props.children}
        }
    }
}

/// One full-height scroll-snap section.
#[component]
pub fn Section(
    /// Background gradient modifier class
    background: &'static str,
    children: Element,
) -> Element {
    rsx! {
        section { class: "snap-section {background}",
            div { class: "section-content", {children} }
        }
    }
}
