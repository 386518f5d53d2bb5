//! core/radial.rs — Radial profile λ(r) = exp(−(r − r_h)/w) outside the horizon.

use super::lambda_space::linspace;

/// Horizon radius (normalized).
pub const HORIZON_RADIUS: f64 = 1.0;
/// Transition width in Planck units.
pub const TRANSITION_WIDTH: f64 = 0.54;
pub const RADIAL_SAMPLES: usize = 500;
/// Sampled extent beyond the horizon, in units of `w`.
pub const RADIAL_SPAN_WIDTHS: f64 = 5.0;

#[derive(Clone, Copy, Debug)]
pub struct RadialProfile {
    pub r_h: f64,
    pub w: f64,
}

impl RadialProfile {
    pub fn new(r_h: f64, w: f64) -> Self {
        assert!(w > 0.0, "transition width must be positive: {w}");
        Self { r_h, w }
    }

    /// λ at radius `r`; 1 at the horizon, decaying with scale `w`.
    #[inline]
    pub fn lambda_at(&self, r: f64) -> f64 {
        (-(r - self.r_h) / self.w).exp()
    }

    /// Radii from r_h to r_h + 5w.
    pub fn radii(&self, n: usize) -> Vec<f64> {
        linspace(self.r_h, self.r_h + RADIAL_SPAN_WIDTHS * self.w, n)
    }

    /// (r, λ(r)) samples over the full sampled extent.
    pub fn samples(&self, n: usize) -> Vec<(f64, f64)> {
        self.radii(n)
            .into_iter()
            .map(|r| (r, self.lambda_at(r)))
            .collect()
    }

    /// Shaded transition band [r_h, r_h + w].
    #[inline]
    pub fn transition_band(&self) -> (f64, f64) {
        (self.r_h, self.r_h + self.w)
    }
}

impl Default for RadialProfile {
    fn default() -> Self {
        Self::new(HORIZON_RADIUS, TRANSITION_WIDTH)
    }
}
