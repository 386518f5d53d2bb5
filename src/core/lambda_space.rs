//! core/lambda_space.rs — Sample grid over the information-accessibility axis.
//!
//! The grid stays strictly inside (0, 1) so the endpoints never hit the
//! λ=0 / λ=1 boundary values.

/// Number of λ samples used by every figure.
pub const LAMBDA_SAMPLES: usize = 1000;
pub const LAMBDA_MIN: f64 = 0.001;
pub const LAMBDA_MAX: f64 = 0.999;

/// `n` evenly spaced values from `start` to `stop` inclusive.
///
/// The last value is exactly `stop`; `n == 1` yields `[start]`.
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            let mut out: Vec<f64> = (0..n).map(|i| start + i as f64 * step).collect();
            out[n - 1] = stop;
            out
        }
    }
}

/// Uniform λ grid.
#[derive(Clone, Debug)]
pub struct LambdaSpace {
    pub min: f64,
    pub max: f64,
    pub points: Vec<f64>,
}

impl LambdaSpace {
    pub fn new(min: f64, max: f64, n: usize) -> Self {
        assert!(min < max, "empty λ interval: {min}..{max}");
        assert!(n >= 2);
        Self {
            min,
            max,
            points: linspace(min, max, n),
        }
    }

    /// 1000 points over [0.001, 0.999].
    pub fn standard() -> Self {
        Self::new(LAMBDA_MIN, LAMBDA_MAX, LAMBDA_SAMPLES)
    }

    #[inline]
    pub fn n_points(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn step(&self) -> f64 {
        (self.max - self.min) / (self.n_points() - 1) as f64
    }

    #[inline]
    pub fn assert_scan_len_named<T>(&self, scan: &[T], name: &str) {
        debug_assert_eq!(scan.len(), self.n_points(), "scan length mismatch: {name}");
    }

    /// Pair each grid point with the matching scan value.
    pub fn zip_scan(&self, scan: &[f64]) -> Vec<(f64, f64)> {
        debug_assert_eq!(scan.len(), self.n_points());
        self.points.iter().copied().zip(scan.iter().copied()).collect()
    }
}

impl Default for LambdaSpace {
    fn default() -> Self {
        Self::standard()
    }
}
