//! Button Components
//!
//! - Music: fixed pill in the top-right corner toggling background audio
//! - Share: large gradient call-to-action at the end of the page

use dioxus::prelude::*;
use greeting_core::ViewPhase;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Floating music control
    #[default]
    Music,
    /// Gradient share call-to-action
    Share,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Music => "btn-music",
            ButtonVariant::Share => "btn-share",
        }
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    /// Button content (text, emoji)
    pub children: Element,
    /// Click handler
    pub onclick: EventHandler<()>,
    /// Whether the button is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Additional CSS classes (may be empty)
    #[props(default)]
    pub class: String,
}

/// Styled button component
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Share,
///         onclick: move |_| copy_link(),
///         "Share this moment 💌"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let base_class = props.variant.class();
    let full_class = if props.class.is_empty() {
        base_class.to_string()
    } else {
        format!("{} {}", base_class, props.class)
    };

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            disabled: props.disabled,
            onclick: move |_| props.onclick.call(()),
            {props.children}
        }
    }
}

/// Label and icon for the music toggle in a given phase.
pub fn music_label(phase: ViewPhase) -> (&'static str, &'static str) {
    match phase {
        ViewPhase::Playing => ("Pause Music", "⏸️"),
        ViewPhase::Initializing | ViewPhase::Idle | ViewPhase::AwaitingPlayback => {
            ("Play Music", "🎵")
        }
    }
}

/// Label for the share button.
pub fn share_label(copied: bool) -> &'static str {
    if copied {
        "Copied! 💝"
    } else {
        "Share this moment 💌"
    }
}

/// Floating play/pause control.
///
/// Disabled while a playback start is in flight.
#[component]
pub fn MusicToggle(phase: ViewPhase, onclick: EventHandler<()>) -> Element {
    let (label, icon) = music_label(phase);

    rsx! {
        Button {
            variant: ButtonVariant::Music,
            disabled: phase == ViewPhase::AwaitingPlayback,
            onclick: onclick,
            span { "{label}" }
            span { "{icon}" }
        }
    }
}

/// Share call-to-action with transient "copied" acknowledgment.
#[component]
pub fn ShareButton(copied: bool, onclick: EventHandler<()>) -> Element {
    rsx! {
        Button {
            variant: ButtonVariant::Share,
            class: if copied { "copied".to_string() } else { String::new() },
            onclick: onclick,
            {share_label(copied)}
        }
    }
}
