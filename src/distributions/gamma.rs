//! Gamma variate generation.
//!
//! Finite positive shapes draw from [`rand_distr::Gamma`]; the two limits
//! the Beta distribution needs (shape 0 and infinite shape or scale) are
//! handled here.

use crate::error::{Error, Result};
use rand::Rng;
use rand_distr::{Distribution, Gamma};

/// Draws one Gamma(shape, scale) variate.
///
/// # Algorithm
/// - `shape = 0`: the distribution is a point mass at 0.
/// - `shape = ∞` or `scale = ∞`: returns `+∞`.
/// - otherwise: one draw from `rand_distr::Gamma::new(shape, scale)`.
///
/// # Errors
/// [`Error::InvalidParameters`] if `shape < 0`, `scale ≤ 0`, or either is NaN.
///
/// # Examples
/// ```
/// use u_numdist::distributions::sample_gamma;
/// use u_numdist::random::create_rng;
/// let mut rng = create_rng(42);
/// let g = sample_gamma(&mut rng, 2.0, 1.5).unwrap();
/// assert!(g > 0.0);
/// ```
pub fn sample_gamma<R: Rng + ?Sized>(rng: &mut R, shape: f64, scale: f64) -> Result<f64> {
    Ok(GammaLaw::new(shape, scale)?.sample(rng))
}

/// A validated Gamma(shape, scale) law, including its limits.
#[derive(Debug, Clone, Copy)]
pub(crate) enum GammaLaw {
    /// shape = 0.
    Zero,
    /// shape = ∞ or scale = ∞.
    Infinite,
    Finite(Gamma<f64>),
}

impl GammaLaw {
    pub(crate) fn new(shape: f64, scale: f64) -> Result<Self> {
        if shape.is_nan() || shape < 0.0 {
            return Err(Error::InvalidParameters(format!(
                "Gamma requires shape ≥ 0, got shape={shape}"
            )));
        }
        if scale.is_nan() || scale <= 0.0 {
            return Err(Error::InvalidParameters(format!(
                "Gamma requires scale > 0, got scale={scale}"
            )));
        }
        if shape == 0.0 {
            return Ok(GammaLaw::Zero);
        }
        if shape == f64::INFINITY || scale == f64::INFINITY {
            return Ok(GammaLaw::Infinite);
        }
        Gamma::new(shape, scale).map(GammaLaw::Finite).map_err(|e| {
            Error::InvalidParameters(format!("Gamma(shape={shape}, scale={scale}): {e}"))
        })
    }
}

impl Distribution<f64> for GammaLaw {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        match self {
            GammaLaw::Zero => 0.0,
            GammaLaw::Infinite => f64::INFINITY,
            GammaLaw::Finite(gamma) => gamma.sample(rng),
        }
    }
}
