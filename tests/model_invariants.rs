use kaelion::core::lambda_space::LambdaSpace;
use kaelion::core::phase::PhaseRegion;
use kaelion::core::potential::{
    DEFAULT_EPSILON, LAMBDA_1, LAMBDA_2, potential, potential_double_prime,
    potential_double_prime_scan, potential_prime, potential_prime_scan,
    thermality_correction, thermality_correction_scan,
};

#[test]
fn first_derivative_has_no_roots_on_the_grid() {
    // 0.5 is not a grid point, so V' never vanishes on the sampled λ.
    let space = LambdaSpace::standard();
    let vp = potential_prime_scan(&space.points);
    for (&l, &d) in space.points.iter().zip(vp.iter()) {
        assert!(d != 0.0, "V'({l}) == 0");
        if l < 0.5 {
            assert!(d > 0.0, "V'({l}) = {d} should be positive");
        } else {
            assert!(d < 0.0, "V'({l}) = {d} should be negative");
        }
    }
}

#[test]
fn curvature_changes_sign_only_at_resonances() {
    let space = LambdaSpace::standard();
    let vpp = potential_double_prime_scan(&space.points);
    let crossings: Vec<f64> = space
        .points
        .windows(2)
        .zip(vpp.windows(2))
        .filter(|(_, v)| v[0].signum() != v[1].signum())
        .map(|(l, _)| 0.5 * (l[0] + l[1]))
        .collect();
    assert_eq!(crossings.len(), 2, "crossings: {crossings:?}");
    assert!((crossings[0] - LAMBDA_1).abs() < space.step());
    assert!((crossings[1] - LAMBDA_2).abs() < space.step());
}

#[test]
fn correction_is_finite_non_negative_on_grid() {
    let space = LambdaSpace::standard();
    for eps in [DEFAULT_EPSILON, 0.01, 1.0] {
        let f = thermality_correction_scan(&space.points, eps);
        assert!(f.iter().all(|v| v.is_finite() && *v >= 0.0), "ε={eps}");
    }
}

#[test]
fn correction_peaks_inside_transition_neighbourhoods() {
    // With a small floor the largest values sit next to λ1 and λ2.
    let space = LambdaSpace::standard();
    let f = thermality_correction_scan(&space.points, DEFAULT_EPSILON);
    let (argmax, _) = f
        .iter()
        .enumerate()
        .fold((0, f64::NEG_INFINITY), |acc, (i, &v)| if v > acc.1 { (i, v) } else { acc });
    let l = space.points[argmax];
    assert!(
        (l - LAMBDA_1).abs() < 2.0 * space.step() || (l - LAMBDA_2).abs() < 2.0 * space.step(),
        "peak at λ={l}"
    );
}

#[test]
fn resonance_divergence_is_monotone() {
    for root in [LAMBDA_1, LAMBDA_2] {
        let values: Vec<f64> = (0..10)
            .map(|k| thermality_correction(root, 10f64.powi(-k)))
            .collect();
        assert!(values.windows(2).all(|w| w[1] >= w[0]), "{values:?}");
    }
}

#[test]
fn critical_point_identities() {
    assert!(potential_double_prime(LAMBDA_1).abs() < 1e-12);
    assert!(potential_double_prime(LAMBDA_2).abs() < 1e-12);
    assert!((LAMBDA_1 + LAMBDA_2 - 1.0).abs() < 1e-14);
    assert!((potential(LAMBDA_1) - potential(LAMBDA_2)).abs() < 1e-15);
    assert!((potential_prime(LAMBDA_1) + potential_prime(LAMBDA_2)).abs() < 1e-12);
}

#[test]
fn grid_regions_are_contiguous() {
    let space = LambdaSpace::standard();
    let regions: Vec<PhaseRegion> = space.points.iter().map(|&l| PhaseRegion::classify(l)).collect();
    assert_eq!(regions.first(), Some(&PhaseRegion::Lqg));
    assert_eq!(regions.last(), Some(&PhaseRegion::Holographic));
    let changes = regions.windows(2).filter(|w| w[0] != w[1]).count();
    assert_eq!(changes, 2);
}
