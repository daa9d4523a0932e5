//! Decorative particle generation.
//!
//! Two independent collections drive the background animation layer:
//!
//! - **Hearts** float upward and fade, each with its own speed and start offset
//! - **Sparkles** pulse in place, scattered across the whole viewport
//!
//! Both are generated from a caller-supplied RNG so tests can seed it. The
//! view generates them once when it mounts and never again for that view
//! instance; the `id` of each element doubles as its render key.

use std::ops::Range;

use rand::Rng;

/// Number of floating hearts in a default field
pub const HEART_COUNT: usize = 15;

/// Number of sparkles in a default field
pub const SPARKLE_COUNT: usize = 25;

/// Horizontal/vertical position range, in percent of the viewport
pub const POSITION_RANGE: Range<f64> = 0.0..100.0;

/// Start offset for a heart's float cycle, in seconds
pub const HEART_DELAY_RANGE: Range<f64> = 0.0..5.0;

/// Length of one heart float cycle, in seconds
pub const HEART_DURATION_RANGE: Range<f64> = 3.0..7.0;

/// Start offset for a sparkle's pulse, in seconds
pub const SPARKLE_DELAY_RANGE: Range<f64> = 0.0..3.0;

/// Sparkle diameter, in pixels
pub const SPARKLE_SIZE_RANGE: Range<f64> = 2.0..6.0;

/// Length of one sparkle pulse, in seconds (shared by every sparkle)
pub const SPARKLE_PULSE_SECS: f64 = 2.0;

/// A heart that floats from the bottom of the viewport to the top.
#[derive(Clone, Debug, PartialEq)]
pub struct Heart {
    /// Stable index within its collection
    pub id: usize,
    /// Horizontal position in percent
    pub left: f64,
    /// Animation start offset in seconds
    pub delay: f64,
    /// Duration of one float cycle in seconds
    pub duration: f64,
}

/// A sparkle that pulses in place.
#[derive(Clone, Debug, PartialEq)]
pub struct Sparkle {
    /// Stable index within its collection
    pub id: usize,
    /// Horizontal position in percent
    pub left: f64,
    /// Vertical position in percent
    pub top: f64,
    /// Animation start offset in seconds
    pub delay: f64,
    /// Diameter in pixels
    pub size: f64,
}

/// Generate `count` hearts with independent positions and timings.
pub fn generate_hearts<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<Heart> {
    (0..count)
        .map(|id| Heart {
            id,
            left: rng.random_range(POSITION_RANGE),
            delay: rng.random_range(HEART_DELAY_RANGE),
            duration: rng.random_range(HEART_DURATION_RANGE),
        })
        .collect()
}

/// Generate `count` sparkles with independent positions, timings and sizes.
pub fn generate_sparkles<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<Sparkle> {
    (0..count)
        .map(|id| Sparkle {
            id,
            left: rng.random_range(POSITION_RANGE),
            top: rng.random_range(POSITION_RANGE),
            delay: rng.random_range(SPARKLE_DELAY_RANGE),
            size: rng.random_range(SPARKLE_SIZE_RANGE),
        })
        .collect()
}

/// Both particle collections for one view instance.
///
/// Immutable once built: the view stores it behind the mount gate and only
/// hands out shared slices.
#[derive(Clone, Debug, PartialEq)]
pub struct ParticleField {
    hearts: Vec<Heart>,
    sparkles: Vec<Sparkle>,
}

impl ParticleField {
    /// Generate the default field (15 hearts, 25 sparkles).
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::with_counts(rng, HEART_COUNT, SPARKLE_COUNT)
    }

    /// Generate a field with custom collection sizes.
    pub fn with_counts<R: Rng + ?Sized>(rng: &mut R, hearts: usize, sparkles: usize) -> Self {
        let hearts = generate_hearts(rng, hearts);
        let sparkles = generate_sparkles(rng, sparkles);
        tracing::debug!(
            hearts = hearts.len(),
            sparkles = sparkles.len(),
            "Generated particle field"
        );
        Self { hearts, sparkles }
    }

    pub fn hearts(&self) -> &[Heart] {
        &self.hearts
    }

    pub fn sparkles(&self) -> &[Sparkle] {
        &self.sparkles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_default_counts() {
        let mut rng = StdRng::seed_from_u64(7);
        let field = ParticleField::generate(&mut rng);
        assert_eq!(field.hearts().len(), HEART_COUNT);
        assert_eq!(field.sparkles().len(), SPARKLE_COUNT);
    }

    #[test]
    fn test_ids_are_sequential() {
        let mut rng = StdRng::seed_from_u64(42);
        let hearts = generate_hearts(&mut rng, 15);
        let ids: Vec<usize> = hearts.iter().map(|h| h.id).collect();
        assert_eq!(ids, (0..15).collect::<Vec<_>>());

        let sparkles = generate_sparkles(&mut rng, 25);
        let ids: Vec<usize> = sparkles.iter().map(|s| s.id).collect();
        assert_eq!(ids, (0..25).collect::<Vec<_>>());
    }

    #[test]
    fn test_same_seed_same_field() {
        let a = ParticleField::generate(&mut StdRng::seed_from_u64(99));
        let b = ParticleField::generate(&mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn test_heart_ranges() {
        let mut rng = StdRng::seed_from_u64(1);
        for heart in generate_hearts(&mut rng, 500) {
            assert!(POSITION_RANGE.contains(&heart.left));
            assert!(HEART_DELAY_RANGE.contains(&heart.delay));
            assert!(HEART_DURATION_RANGE.contains(&heart.duration));
        }
    }

    #[test]
    fn test_zero_count() {
        let mut rng = StdRng::seed_from_u64(3);
        assert!(generate_hearts(&mut rng, 0).is_empty());
        assert!(generate_sparkles(&mut rng, 0).is_empty());
    }
}
