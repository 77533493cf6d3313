//! Fixture matrices and vectors for numerical test suites.
//!
//! [`MatrixLoader`] exposes a small catalogue of fixed matrices with known
//! structure (singular, square, rectangular, symmetric) and builds random
//! matrices and vectors from a [`RandomSource`]. Seed the source to make
//! the random fixtures reproducible.

use crate::random::RandomSource;
use nalgebra::{DMatrix, DVector};
use rand::Rng;
use std::collections::BTreeMap;

/// Named and random test matrices.
///
/// # Examples
/// ```
/// use u_numdist::random::RandomSource;
/// use u_numdist::testing::MatrixLoader;
///
/// let loader = MatrixLoader::with_source(RandomSource::seeded(1));
/// let m = loader.get("Square3x3").unwrap();
/// assert_eq!(m.shape(), (3, 3));
///
/// let spd = loader.random_positive_definite(4);
/// assert_eq!(spd, spd.transpose());
/// ```
#[derive(Debug, Clone)]
pub struct MatrixLoader {
    matrices: BTreeMap<&'static str, DMatrix<f64>>,
    source: RandomSource,
}

impl MatrixLoader {
    /// Loader drawing random content from the shared default source.
    pub fn new() -> Self {
        Self::with_source(RandomSource::shared())
    }

    /// Loader drawing random content from `source`.
    pub fn with_source(source: RandomSource) -> Self {
        let mut matrices = BTreeMap::new();
        matrices.insert(
            "Singular3x3",
            DMatrix::from_row_slice(3, 3, &[1.0, 1.0, 2.0, 1.0, 1.0, 2.0, 1.0, 1.0, 2.0]),
        );
        matrices.insert(
            "Square3x3",
            DMatrix::from_row_slice(3, 3, &[-1.1, -2.2, -3.3, 0.0, 1.1, 2.2, -4.4, 5.5, 6.6]),
        );
        matrices.insert(
            "Square4x4",
            DMatrix::from_row_slice(
                4,
                4,
                &[
                    -1.1, -2.2, -3.3, -4.4, //
                    0.0, 1.1, 2.2, 3.3, //
                    1.0, 2.1, 6.2, 4.3, //
                    -4.4, 5.5, 6.6, -7.7,
                ],
            ),
        );
        matrices.insert(
            "Singular4x4",
            DMatrix::from_fn(4, 4, |_, j| [-1.1, -2.2, -3.3, -4.4][j]),
        );
        matrices.insert(
            "Tall3x2",
            DMatrix::from_row_slice(3, 2, &[-1.1, -2.2, 0.0, 1.1, -4.4, 5.5]),
        );
        matrices.insert(
            "Wide2x3",
            DMatrix::from_row_slice(2, 3, &[-1.1, -2.2, -3.3, 0.0, 1.1, 2.2]),
        );
        matrices.insert(
            "Symmetric3x3",
            DMatrix::from_row_slice(3, 3, &[1.0, 2.0, 3.0, 2.0, 2.0, 0.0, 3.0, 0.0, 3.0]),
        );
        Self { matrices, source }
    }

    /// Fixed matrix by name, e.g. `"Tall3x2"`.
    pub fn get(&self, name: &str) -> Option<&DMatrix<f64>> {
        self.matrices.get(name)
    }

    /// Names of the fixed matrices, in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.matrices.keys().copied()
    }

    /// The source random fixtures are drawn from.
    pub fn random_source(&self) -> &RandomSource {
        &self.source
    }

    /// `rows × cols` matrix with entries uniform on `[-1, 1)`, filled row by row.
    pub fn random_matrix(&self, rows: usize, cols: usize) -> DMatrix<f64> {
        self.source.with_rng(|rng| {
            let flat: Vec<f64> = (0..rows * cols).map(|_| rng.random_range(-1.0..1.0)).collect();
            DMatrix::from_row_slice(rows, cols, &flat)
        })
    }

    /// Vector with entries uniform on `[-1, 1)`.
    pub fn random_vector(&self, len: usize) -> DVector<f64> {
        self.source.with_rng(|rng| {
            DVector::from_vec((0..len).map(|_| rng.random_range(-1.0..1.0)).collect())
        })
    }

    /// Symmetric `n × n` matrix: the upper triangle is drawn, the lower mirrors it.
    pub fn random_symmetric(&self, n: usize) -> DMatrix<f64> {
        let upper = self.random_matrix(n, n);
        DMatrix::from_fn(n, n, |i, j| if i <= j { upper[(i, j)] } else { upper[(j, i)] })
    }

    /// Symmetric positive definite `n × n` matrix, `A·Aᵀ + n·I`.
    pub fn random_positive_definite(&self, n: usize) -> DMatrix<f64> {
        let a = self.random_matrix(n, n);
        let gram = &a * a.transpose();
        // A·Aᵀ is symmetric in exact arithmetic; mirror to make it so bitwise.
        DMatrix::from_fn(n, n, |i, j| {
            let (r, c) = if i <= j { (i, j) } else { (j, i) };
            let shift = if i == j { n as f64 } else { 0.0 };
            gram[(r, c)] + shift
        })
    }
}

impl Default for MatrixLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loader() -> MatrixLoader {
        MatrixLoader::with_source(RandomSource::seeded(42))
    }

    #[test]
    fn test_fixed_catalogue() {
        let l = loader();
        let names: Vec<_> = l.names().collect();
        assert_eq!(
            names,
            vec![
                "Singular3x3",
                "Singular4x4",
                "Square3x3",
                "Square4x4",
                "Symmetric3x3",
                "Tall3x2",
                "Wide2x3"
            ]
        );
        assert_eq!(l.get("Tall3x2").unwrap().shape(), (3, 2));
        assert_eq!(l.get("Wide2x3").unwrap().shape(), (2, 3));
        assert_eq!(l.get("Square4x4").unwrap()[(2, 2)], 6.2);
        // Row-major literals: (row 2, col 0) of Square3x3 is −4.4
        assert_eq!(l.get("Square3x3").unwrap()[(2, 0)], -4.4);
        assert!(l.get("Missing").is_none());
    }

    #[test]
    fn test_fixed_structure() {
        let l = loader();
        let sym = l.get("Symmetric3x3").unwrap();
        assert_eq!(sym, &sym.transpose());
        let sq = l.get("Square3x3").unwrap();
        assert!(sq.is_square());
        assert_ne!(sq, &sq.transpose());
        assert!(!l.get("Tall3x2").unwrap().is_square());

        // Rows of the singular fixtures are identical.
        for name in ["Singular3x3", "Singular4x4"] {
            let m = l.get(name).unwrap();
            assert_eq!(m.nrows(), m.ncols(), "{name}");
            for i in 1..m.nrows() {
                assert_eq!(m.row(i), m.row(0), "{name} row {i}");
            }
        }
    }

    #[test]
    fn test_fixed_products() {
        let l = loader();
        let tall = l.get("Tall3x2").unwrap();
        let wide = l.get("Wide2x3").unwrap();
        let p = tall * wide;
        assert_eq!(p.shape(), (3, 3));
        // Row 1 of Tall3x2 is [0, 1.1]; times Wide2x3 gives 1.1 × row 1 of Wide2x3.
        for j in 0..3 {
            assert!((p[(1, j)] - 1.1 * wide[(1, j)]).abs() < 1e-12);
        }
    }

    #[test]
    fn test_random_shapes_and_range() {
        let l = loader();
        let m = l.random_matrix(3, 5);
        assert_eq!(m.shape(), (3, 5));
        assert!(m.iter().all(|x| (-1.0..1.0).contains(x)));

        let v = l.random_vector(7);
        assert_eq!(v.len(), 7);
        assert!(v.iter().all(|x| (-1.0..1.0).contains(x)));
    }

    #[test]
    fn test_random_reproducible_with_seed() {
        let a = loader();
        let b = loader();
        assert_eq!(a.random_matrix(4, 4), b.random_matrix(4, 4));
        assert_eq!(a.random_vector(5), b.random_vector(5));
        // Consecutive draws advance the source.
        assert_ne!(a.random_matrix(2, 2), a.random_matrix(2, 2));
    }

    #[test]
    fn test_random_symmetric() {
        let s = loader().random_symmetric(5);
        assert_eq!(s, s.transpose());
    }

    #[test]
    fn test_random_positive_definite() {
        let l = loader();
        let n = 6;
        let spd = l.random_positive_definite(n);
        assert_eq!(spd, spd.transpose());
        assert!((0..n).all(|i| spd[(i, i)] >= n as f64));

        // xᵀ·M·x > 0 for a handful of random directions
        for _ in 0..20 {
            let x = l.random_vector(n);
            assert!(x.dot(&(&spd * &x)) > 0.0);
        }
    }

    #[test]
    fn test_default_uses_shared_source() {
        let l = MatrixLoader::default();
        assert!(l.random_source().same_source(&RandomSource::shared()));
    }
}
