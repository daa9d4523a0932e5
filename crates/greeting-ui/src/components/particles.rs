//! Particle Layers
//!
//! Fixed, click-through layers behind the page content. Each element gets
//! its own inline timing so the infinite CSS animations drift out of sync:
//!
//! - Hearts float from the bottom edge to the top while fading in and out
//! - Sparkles pulse (scale and opacity) in place

use dioxus::prelude::*;
use greeting_core::{Heart, Sparkle, SPARKLE_PULSE_SECS};

/// Inline style for one floating heart.
pub fn heart_style(heart: &Heart) -> String {
    format!(
        "left: {:.3}%; animation-duration: {:.3}s; animation-delay: {:.3}s;",
        heart.left, heart.duration, heart.delay
    )
}

/// Inline style for one sparkle.
pub fn sparkle_style(sparkle: &Sparkle) -> String {
    format!(
        "left: {:.3}%; top: {:.3}%; width: {size:.3}px; height: {size:.3}px; \
         animation-duration: {:.1}s; animation-delay: {:.3}s;",
        sparkle.left,
        sparkle.top,
        SPARKLE_PULSE_SECS,
        sparkle.delay,
        size = sparkle.size,
    )
}

/// Hearts drifting upward across the viewport.
///
/// Renders nothing when `hearts` is empty (before the view mounts).
#[component]
pub fn FloatingHearts(hearts: Vec<Heart>) -> Element {
    if hearts.is_empty() {
        return rsx! {};
    }

    rsx! {
        div { class: "particle-layer", "aria-hidden": "true",
            for heart in hearts {
                div {
                    key: "{heart.id}",
                    class: "floating-heart",
                    style: heart_style(&heart),
                    "❤️"
                }
            }
        }
    }
}

/// Sparkles pulsing at fixed positions.
///
/// Renders nothing when `sparkles` is empty (before the view mounts).
#[component]
pub fn SparkleField(sparkles: Vec<Sparkle>) -> Element {
    if sparkles.is_empty() {
        return rsx! {};
    }

    rsx! {
        div { class: "particle-layer", "aria-hidden": "true",
            for sparkle in sparkles {
                div {
                    key: "{sparkle.id}",
                    class: "sparkle",
                    style: sparkle_style(&sparkle),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use greeting_core::ParticleField;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn heart_style_uses_percent_and_seconds() {
        let heart = Heart {
            id: 0,
            left: 12.5,
            delay: 1.25,
            duration: 4.0,
        };
        assert_eq!(
            heart_style(&heart),
            "left: 12.500%; animation-duration: 4.000s; animation-delay: 1.250s;"
        );
    }

    #[test]
    fn sparkle_style_sets_square_size() {
        let sparkle = Sparkle {
            id: 3,
            left: 50.0,
            top: 25.0,
            delay: 0.5,
            size: 3.0,
        };
        let style = sparkle_style(&sparkle);
        assert!(style.contains("width: 3.000px; height: 3.000px;"));
        assert!(style.contains("top: 25.000%"));
        assert!(style.contains("animation-duration: 2.0s"));
        assert!(style.ends_with("animation-delay: 0.500s;"));
    }

    #[test]
    fn generated_field_styles_are_distinct() {
        let field = ParticleField::generate(&mut StdRng::seed_from_u64(8));
        let styles: std::collections::HashSet<String> =
            field.hearts().iter().map(heart_style).collect();
        assert_eq!(styles.len(), field.hearts().len());
    }
}
