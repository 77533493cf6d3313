//! Probability distributions.
//!
//! Continuous distributions expose their analytical moments and their
//! density/CDF evaluators through [`ContinuousDistribution`], and random
//! variates through [`Sampleable`].
//!
//! # Supported Distributions
//!
//! | Distribution | Parameters | Support | Mean |
//! |---|---|---|---|
//! | [`Beta`] | shapes α ≥ 0, β ≥ 0 | [0, 1] | α/(α+β) |
//!
//! The Gamma distribution is available as a sampler only
//! ([`sample_gamma`]); it is the building block of Beta sampling.
//!
//! # Design Notes
//!
//! Parameters are plain `f64` values validated at construction. Every
//! constructor, setter and static entry point runs the same validation, so
//! an instance never holds an invalid parameter set.

pub mod beta;
pub mod gamma;

pub use beta::{Beta, BetaSamples, Regime};
pub use gamma::sample_gamma;

use crate::error::Result;

/// Common interface of univariate continuous distributions.
pub trait ContinuousDistribution {
    /// Expected value.
    fn mean(&self) -> f64;

    /// Variance.
    fn variance(&self) -> f64;

    /// Standard deviation, √variance.
    fn std_dev(&self) -> f64 {
        self.variance().sqrt()
    }

    /// Differential entropy in nats.
    fn entropy(&self) -> f64;

    /// Skewness (third standardized moment).
    fn skewness(&self) -> f64;

    /// Location of the density maximum.
    fn mode(&self) -> f64;

    /// Median.
    ///
    /// # Errors
    /// [`crate::Error::Unsupported`] when no closed form is available.
    fn median(&self) -> Result<f64>;

    /// Lower bound of the support.
    fn minimum(&self) -> f64;

    /// Upper bound of the support.
    fn maximum(&self) -> f64;

    /// Probability density at `x`.
    fn pdf(&self, x: f64) -> f64;

    /// Natural log of the probability density at `x`.
    fn ln_pdf(&self, x: f64) -> f64;

    /// Cumulative distribution P(X ≤ x).
    fn cdf(&self, x: f64) -> f64;
}

/// Distributions that can draw variates from their own random source.
pub trait Sampleable {
    /// Unbounded iterator of variates.
    type Samples: Iterator<Item = f64>;

    /// Draws one variate.
    fn sample(&self) -> f64;

    /// Returns an endless, single-pass stream of variates.
    ///
    /// Every element advances the random source the distribution draws
    /// from. Bound it with [`Iterator::take`].
    fn samples(&self) -> Self::Samples;
}
