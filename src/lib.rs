//! # mc-numerics
//!
//! Monte Carlo estimation of π with supporting numeric primitives.
//!
//! The centerpiece is the [`estimator`] module: draw uniform random
//! points in a square, count how many fall inside the inscribed circle,
//! and scale the hit fraction by 4. Around it sit the building blocks a
//! sampling experiment needs: seeded random sources, numerically stable
//! descriptive statistics with z-score normalization, and dense matrix
//! multiplication.
//!
//! ## Modules
//!
//! - [`estimator`] — Monte Carlo π estimation: serial, parallel, and
//!   streaming accumulation
//! - [`random`] — seeded RNG construction and uniform point sampling
//! - [`stats`] — mean, variance, and normalization with numerical
//!   stability guarantees
//! - [`matrix`] — dense `f64` matrix multiplication with shape
//!   validation
//!
//! ## Design Philosophy
//!
//! - **Explicit random sources**: every stochastic routine takes a
//!   caller-provided, seedable generator; nothing draws from ambient
//!   process-wide state
//! - **Numerical stability first**: Welford's algorithm for variance,
//!   Kahan summation for accumulation
//! - **Property-based testing**: mathematical invariants verified via
//!   proptest

pub mod estimator;
pub mod matrix;
pub mod random;
pub mod stats;
