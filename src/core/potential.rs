//! core/potential.rs — Kaelion effective potential and thermality correction.
//!
//! V(λ) = √3 · λ²(1−λ)² is a symmetric barrier between the LQG (λ=0) and
//! holographic (λ=1) minima. Its curvature vanishes at λ1 = (3−√3)/6 and
//! λ2 = (3+√3)/6, where the regularized correction f(λ, ε) resonates.

/// Potential scale V0 = √3.
pub const V0: f64 = 1.732_050_807_568_877_2;

/// Field normalization φ0 = 1/√3.
pub const PHI0: f64 = 0.577_350_269_189_625_8;

/// Lower inflection / resonance point, λ1 = (3 − √3)/6.
pub const LAMBDA_1: f64 = (3.0 - V0) / 6.0;

/// Upper inflection / resonance point, λ2 = (3 + √3)/6.
pub const LAMBDA_2: f64 = (3.0 + V0) / 6.0;

/// Barrier top, V(0.5) = V0/16.
pub const BARRIER_HEIGHT: f64 = V0 / 16.0;

/// Regularization floor used when no other value is requested.
pub const DEFAULT_EPSILON: f64 = 1e-6;

/// Floor used for the resonance figure; smooths the peaks for display.
pub const CORRECTION_PLOT_EPSILON: f64 = 0.01;

/// Effective potential V(λ).
#[inline]
pub fn potential(lambda: f64) -> f64 {
    let one_minus = 1.0 - lambda;
    V0 * lambda * lambda * one_minus * one_minus
}

/// First derivative V'(λ).
#[inline]
pub fn potential_prime(lambda: f64) -> f64 {
    2.0 * V0 * lambda * (1.0 - lambda) * (1.0 - 2.0 * lambda)
}

/// Second derivative V''(λ); zero exactly at λ1 and λ2.
#[inline]
pub fn potential_double_prime(lambda: f64) -> f64 {
    2.0 * V0 * (1.0 - 6.0 * lambda * (1.0 - lambda))
}

/// Regularized thermality correction
/// f(λ, ε) = (1−λ) · (1 + 1/max(|V''(λ)|/(2·V0), ε)).
///
/// The denominator is floored at `eps` rather than branched on, so the value
/// near λ1/λ2 is exactly (1−λ)(1 + 1/ε).
#[inline]
pub fn thermality_correction(lambda: f64, eps: f64) -> f64 {
    let curvature = potential_double_prime(lambda).abs() / (2.0 * V0);
    let denom = curvature.max(eps);
    (1.0 - lambda) * (1.0 + 1.0 / denom)
}

pub fn potential_scan(lambdas: &[f64]) -> Vec<f64> {
    lambdas.iter().map(|&l| potential(l)).collect()
}

pub fn potential_prime_scan(lambdas: &[f64]) -> Vec<f64> {
    lambdas.iter().map(|&l| potential_prime(l)).collect()
}

pub fn potential_double_prime_scan(lambdas: &[f64]) -> Vec<f64> {
    lambdas.iter().map(|&l| potential_double_prime(l)).collect()
}

/// Elementwise f(λ, ε) over a scan.
pub fn thermality_correction_scan(lambdas: &[f64], eps: f64) -> Vec<f64> {
    lambdas
        .iter()
        .map(|&l| thermality_correction(l, eps))
        .collect()
}

/// V(λ) rescaled so the barrier peak sits at `peak`.
pub fn scaled_potential_scan(lambdas: &[f64], peak: f64) -> Vec<f64> {
    let norm = potential(0.5);
    lambdas
        .iter()
        .map(|&l| potential(l) / norm * peak)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-12;

    #[test]
    fn constants_match_closed_forms() {
        assert!((V0 - 3f64.sqrt()).abs() < TOL);
        assert!((PHI0 - 1.0 / 3f64.sqrt()).abs() < TOL);
        assert!((PHI0 * V0 - 1.0).abs() < TOL);
        assert!((LAMBDA_1 - 0.211_324_865_405_187_1).abs() < TOL);
        assert!((LAMBDA_2 - 0.788_675_134_594_812_9).abs() < TOL);
    }

    #[test]
    fn critical_points_are_ordered() {
        assert!(0.0 < LAMBDA_1 && LAMBDA_1 < 0.5);
        assert!(0.5 < LAMBDA_2 && LAMBDA_2 < 1.0);
        assert!((LAMBDA_1 + LAMBDA_2 - 1.0).abs() < TOL);
    }

    #[test]
    fn potential_endpoints_and_barrier() {
        assert_eq!(potential(0.0), 0.0);
        assert_eq!(potential(1.0), 0.0);
        assert!((potential(0.5) - 3f64.sqrt() / 16.0).abs() < TOL);
        assert!((potential(0.5) - BARRIER_HEIGHT).abs() < TOL);
    }

    #[test]
    fn potential_is_symmetric_about_half() {
        for i in 0..=200 {
            let l = i as f64 / 200.0;
            let d = (potential(l) - potential(1.0 - l)).abs();
            assert!(d < TOL, "V not symmetric at λ={l}: diff={d}");
        }
    }

    #[test]
    fn first_derivative_roots() {
        assert_eq!(potential_prime(0.0), 0.0);
        assert_eq!(potential_prime(0.5), 0.0);
        assert_eq!(potential_prime(1.0), 0.0);
    }

    #[test]
    fn first_derivative_matches_finite_difference() {
        let h = 1e-6;
        for i in 1..100 {
            let l = i as f64 / 100.0;
            let fd = (potential(l + h) - potential(l - h)) / (2.0 * h);
            assert!(
                (fd - potential_prime(l)).abs() < 1e-8,
                "V' mismatch at λ={l}: fd={fd} analytic={}",
                potential_prime(l)
            );
        }
    }

    #[test]
    fn second_derivative_matches_finite_difference() {
        let h = 1e-6;
        for i in 1..100 {
            let l = i as f64 / 100.0;
            let fd = (potential_prime(l + h) - potential_prime(l - h)) / (2.0 * h);
            assert!((fd - potential_double_prime(l)).abs() < 1e-6);
        }
    }

    #[test]
    fn second_derivative_vanishes_at_critical_points() {
        assert!(potential_double_prime(LAMBDA_1).abs() < 1e-12);
        assert!(potential_double_prime(LAMBDA_2).abs() < 1e-12);
        assert!(potential_double_prime(0.5) < 0.0);
        assert!(potential_double_prime(0.0) > 0.0);
    }

    #[test]
    fn correction_is_finite_and_non_negative() {
        for &eps in &[1e-9, DEFAULT_EPSILON, CORRECTION_PLOT_EPSILON, 0.5] {
            for i in 1..1000 {
                let l = i as f64 / 1000.0;
                let f = thermality_correction(l, eps);
                assert!(f.is_finite(), "f not finite at λ={l}, ε={eps}");
                assert!(f >= 0.0, "f negative at λ={l}, ε={eps}: {f}");
            }
        }
    }

    #[test]
    fn correction_uses_floor_at_resonance() {
        let eps = CORRECTION_PLOT_EPSILON;
        let expected = (1.0 - LAMBDA_1) * (1.0 + 1.0 / eps);
        assert!((thermality_correction(LAMBDA_1, eps) - expected).abs() < 1e-9);
    }

    #[test]
    fn correction_diverges_as_floor_shrinks() {
        for &root in &[LAMBDA_1, LAMBDA_2] {
            let mut prev = 0.0;
            for k in 1..=12 {
                let eps = 10f64.powi(-k);
                let f = thermality_correction(root, eps);
                assert!(f >= prev, "f decreased at ε={eps}: {f} < {prev}");
                prev = f;
            }
            assert!(prev > 1e10, "f({root}, 1e-12) = {prev} did not blow up");
        }
    }

    #[test]
    fn scans_match_scalar_application() {
        let lambdas = [0.001, 0.1, LAMBDA_1, 0.5, 0.75, 0.999];
        let v = potential_scan(&lambdas);
        let vp = potential_prime_scan(&lambdas);
        let vpp = potential_double_prime_scan(&lambdas);
        let f = thermality_correction_scan(&lambdas, CORRECTION_PLOT_EPSILON);
        assert_eq!(v.len(), lambdas.len());
        for (i, &l) in lambdas.iter().enumerate() {
            assert_eq!(v[i], potential(l));
            assert_eq!(vp[i], potential_prime(l));
            assert_eq!(vpp[i], potential_double_prime(l));
            assert_eq!(f[i], thermality_correction(l, CORRECTION_PLOT_EPSILON));
        }
        assert!(potential_scan(&[]).is_empty());
    }

    #[test]
    fn scaled_potential_peaks_at_requested_height() {
        let scaled = scaled_potential_scan(&[0.0, 0.5, 1.0], 2.0);
        assert_eq!(scaled[0], 0.0);
        assert!((scaled[1] - 2.0).abs() < TOL);
        assert_eq!(scaled[2], 0.0);
    }
}
