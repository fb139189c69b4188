//! Random number generation and uniform point sampling.
//!
//! Provides seeded RNG construction and the square sampling regions
//! from which Monte Carlo trial points are drawn.
//!
//! # Reproducibility
//!
//! For reproducible experiments, use [`create_rng`] with a fixed seed.
//! The underlying algorithm (SmallRng) is deterministic for a given seed
//! on the same platform. Routines that need cross-thread determinism use
//! counter-mode streams instead; see
//! [`estimate_pi_parallel`](crate::estimator::estimate_pi_parallel).

use rand::Rng;

/// Creates a fast, seeded random number generator.
///
/// Uses `SmallRng` (Xoshiro256++) for high performance.
/// The sequence is deterministic for a given seed on the same platform.
///
/// # Examples
/// ```
/// use mc_numerics::random::create_rng;
/// use rand::Rng;
/// let mut rng = create_rng(42);
/// let x: f64 = rng.random();
/// assert!(x >= 0.0 && x < 1.0);
/// ```
pub fn create_rng(seed: u64) -> rand::rngs::SmallRng {
    use rand::SeedableRng;
    rand::rngs::SmallRng::seed_from_u64(seed)
}

/// Axis-aligned square region from which trial points are drawn.
///
/// Both regions are geometrically equivalent for circle containment:
/// `Unit` covers one quadrant of the unit disk, `Centered` covers the
/// full disk inside a 2×2 square. In either case the fraction of the
/// square occupied by the disk is π/4, so the two variants are a single
/// algorithm with a parameterized sampling interval.
///
/// # Examples
/// ```
/// use mc_numerics::random::{create_rng, SquareInterval};
/// let mut rng = create_rng(7);
/// let (x, y) = SquareInterval::Centered.sample_point(&mut rng);
/// assert!((-1.0..=1.0).contains(&x) && (-1.0..=1.0).contains(&y));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SquareInterval {
    /// `[0, 1] × [0, 1]`, one quadrant of the unit circle.
    #[default]
    Unit,
    /// `[-1, 1] × [-1, 1]`, the full unit circle.
    Centered,
}

impl SquareInterval {
    /// Lower and upper coordinate bound, shared by both axes.
    pub fn bounds(self) -> (f64, f64) {
        match self {
            SquareInterval::Unit => (0.0, 1.0),
            SquareInterval::Centered => (-1.0, 1.0),
        }
    }

    /// Draws one point with independent uniform coordinates.
    ///
    /// Each coordinate is sampled uniformly over the closed interval
    /// returned by [`bounds`](Self::bounds); the two draws consume two
    /// entries from the random source.
    pub fn sample_point<R: Rng + ?Sized>(self, rng: &mut R) -> (f64, f64) {
        let (lo, hi) = self.bounds();
        (rng.random_range(lo..=hi), rng.random_range(lo..=hi))
    }
}

// ============================================================================
// Tests
// ============================================================================


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        #[test]
        fn sample_point_stays_in_region(seed in 0_u64..10000, centered in proptest::bool::ANY) {
            let interval = if centered {
                SquareInterval::Centered
            } else {
                SquareInterval::Unit
            };
            let (lo, hi) = interval.bounds();
            let mut rng = create_rng(seed);
            let (x, y) = interval.sample_point(&mut rng);
            prop_assert!(x >= lo && x <= hi);
            prop_assert!(y >= lo && y <= hi);
        }
    }
}
