//! Sample statistics for validating random variate generators.
//!
//! # Algorithms
//!
//! - **Mean**: Neumaier compensated summation for O(ε) error independent of n.
//! - **Variance**: Welford's online algorithm.
//!   Reference: Welford (1962), "Note on a Method for Calculating
//!   Corrected Sums of Squares and Products", *Technometrics* 4(3).
//! - **Goodness of fit**: one-sample Kolmogorov–Smirnov statistic against
//!   a reference CDF, with the asymptotic critical value.
//!   Reference: Stephens (1974), "EDF Statistics for Goodness of Fit and
//!   Some Comparisons", *JASA* 69(347).

/// Computes the arithmetic mean using compensated summation.
///
/// # Returns
/// - `None` if `data` is empty or contains any NaN/Inf.
///
/// # Examples
/// ```
/// use u_numdist::stats::mean;
/// let v = [1.0, 2.0, 3.0, 4.0, 5.0];
/// assert!((mean(&v).unwrap() - 3.0).abs() < 1e-15);
/// ```
pub fn mean(data: &[f64]) -> Option<f64> {
    if data.is_empty() || !data.iter().all(|x| x.is_finite()) {
        return None;
    }
    Some(neumaier_sum(data) / data.len() as f64)
}

/// Computes the sample (Bessel-corrected) variance with Welford's method.
///
/// # Returns
/// - `None` if `data.len() < 2` or contains NaN/Inf.
///
/// # Examples
/// ```
/// use u_numdist::stats::variance;
/// let v = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
/// assert!((variance(&v).unwrap() - 4.571428571428571).abs() < 1e-10);
/// ```
pub fn variance(data: &[f64]) -> Option<f64> {
    if data.len() < 2 || !data.iter().all(|x| x.is_finite()) {
        return None;
    }
    let mut count = 0.0;
    let mut running_mean = 0.0;
    let mut m2 = 0.0;
    for &x in data {
        count += 1.0;
        let delta = x - running_mean;
        running_mean += delta / count;
        m2 += delta * (x - running_mean);
    }
    Some(m2 / (count - 1.0))
}

/// Neumaier variant of Kahan summation.
fn neumaier_sum(data: &[f64]) -> f64 {
    let mut sum = 0.0_f64;
    let mut c = 0.0_f64;
    for &x in data {
        let t = sum + x;
        if sum.abs() >= x.abs() {
            c += (sum - t) + x;
        } else {
            c += (x - t) + sum;
        }
        sum = t;
    }
    sum + c
}

/// One-sample Kolmogorov–Smirnov statistic D = sup |Fₙ(x) − F(x)|.
///
/// `cdf` is the hypothesized distribution function.
///
/// # Returns
/// - `None` if `data` is empty or contains NaN.
///
/// # Examples
/// ```
/// use u_numdist::stats::ks_statistic;
/// let data = [0.1, 0.3, 0.5, 0.7, 0.9];
/// let d = ks_statistic(&data, |x| x).unwrap();
/// assert!((d - 0.1).abs() < 1e-12);
/// ```
pub fn ks_statistic(data: &[f64], cdf: impl Fn(f64) -> f64) -> Option<f64> {
    if data.is_empty() || data.iter().any(|x| x.is_nan()) {
        return None;
    }
    let mut sorted = data.to_vec();
    sorted.sort_by(f64::total_cmp);

    let n = sorted.len() as f64;
    let d = sorted
        .iter()
        .enumerate()
        .map(|(i, &x)| {
            let f = cdf(x);
            let above = (i as f64 + 1.0) / n - f;
            let below = f - i as f64 / n;
            above.max(below)
        })
        .fold(0.0_f64, f64::max);
    Some(d)
}

/// Asymptotic critical value of D at significance `alpha` for `n` samples:
/// `√(−ln(α/2)/2) / √n`.
///
/// # Returns
/// - `None` if `n == 0` or `alpha` is outside `(0, 1)`.
pub fn ks_critical_value(n: usize, alpha: f64) -> Option<f64> {
    if n == 0 || !(alpha > 0.0 && alpha < 1.0) {
        return None;
    }
    let c = (-(alpha / 2.0).ln() / 2.0).sqrt();
    Some(c / (n as f64).sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_basic() {
        assert_eq!(mean(&[42.0]), Some(42.0));
        assert!((mean(&[1.0, 2.0, 3.0, 4.0]).unwrap() - 2.5).abs() < 1e-15);
    }

    #[test]
    fn test_mean_rejects_bad_input() {
        assert_eq!(mean(&[]), None);
        assert_eq!(mean(&[1.0, f64::NAN]), None);
        assert_eq!(mean(&[1.0, f64::INFINITY]), None);
    }

    #[test]
    fn test_mean_compensated() {
        // Naive summation loses the small terms entirely.
        let mut data = vec![1e16];
        data.extend(std::iter::repeat(1.0).take(1000));
        data.push(-1e16);
        let m = mean(&data).unwrap();
        assert!((m * data.len() as f64 - 1000.0).abs() < 1e-6, "mean = {m}");
    }

    #[test]
    fn test_variance_basic() {
        assert_eq!(variance(&[1.0]), None);
        assert!((variance(&[1.0, 3.0]).unwrap() - 2.0).abs() < 1e-15);
    }

    #[test]
    fn test_variance_offset_stable() {
        // Var(1e9 + {1,2,3,4}) = Var({1,2,3,4}) = 5/3
        let data = [1e9 + 1.0, 1e9 + 2.0, 1e9 + 3.0, 1e9 + 4.0];
        assert!((variance(&data).unwrap() - 5.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_ks_perfect_grid() {
        // Midpoint grid against U(0,1) gives D = 1/(2n)
        let n = 100;
        let data: Vec<f64> = (0..n).map(|i| (i as f64 + 0.5) / n as f64).collect();
        let d = ks_statistic(&data, |x| x).unwrap();
        assert!((d - 0.005).abs() < 1e-12, "D = {d}");
    }

    #[test]
    fn test_ks_detects_mismatch() {
        // All mass near 0 against U(0,1)
        let data: Vec<f64> = (0..100).map(|i| i as f64 * 1e-4).collect();
        let d = ks_statistic(&data, |x| x).unwrap();
        assert!(d > 0.98, "D = {d}");
    }

    #[test]
    fn test_ks_rejects_bad_input() {
        assert_eq!(ks_statistic(&[], |x| x), None);
        assert_eq!(ks_statistic(&[0.5, f64::NAN], |x| x), None);
    }

    #[test]
    fn test_ks_critical_value() {
        // c(0.05) ≈ 1.358
        let crit = ks_critical_value(100, 0.05).unwrap();
        assert!((crit - 0.1358).abs() < 1e-3, "crit = {crit}");
        assert!(ks_critical_value(100, 0.01).unwrap() > crit);
        assert_eq!(ks_critical_value(0, 0.05), None);
        assert_eq!(ks_critical_value(10, 0.0), None);
        assert_eq!(ks_critical_value(10, 1.5), None);
    }
}
