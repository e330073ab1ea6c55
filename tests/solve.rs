//! Interval-constrained quadratic and cubic roots.
//!
//! Random polynomials are built from their roots with exactly one root forced
//! inside the search interval and the others well outside it.

use jbm::math::{solve_cubic, solve_quadratic};
use jbm::{F64x4, Lane};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn test_quadratic_scenarios() {
    assert_eq!(solve_quadratic(1.0f64, 0.0, -4.0, 0.0, 10.0), 2.0);
    assert_eq!(solve_quadratic(1.0f64, 0.0, -4.0, -10.0, 0.0), -2.0);
    assert_eq!(solve_quadratic(1.0f32, -3.0, 2.0, 0.0, 1.5), 1.0);
    assert_eq!(solve_quadratic(1.0f32, -3.0, 2.0, 1.5, 3.0), 2.0);
    // linear when the leading coefficient vanishes
    assert_eq!(solve_quadratic(0.0f64, 2.0, -3.0, 0.0, 10.0), 1.5);
}

#[test]
fn test_quadratic_root_containment() {
    let mut rng = StdRng::seed_from_u64(12345);

    for _ in 0..10_000 {
        let x1: f64 = rng.random_range(-10.0..=10.0);
        let width: f64 = rng.random_range(0.5..=10.0);
        let x2 = x1 + width;
        let inside = rng.random_range(x1 + 0.1 * width..=x2 - 0.1 * width);
        let outside = if rng.random_bool(0.5) {
            x2 + rng.random_range(0.1 * width..=20.0)
        } else {
            x1 - rng.random_range(0.1 * width..=20.0)
        };
        let a: f64 = rng.random_range(0.1..=5.0) * if rng.random_bool(0.5) { 1.0 } else { -1.0 };
        let b = -a * (inside + outside);
        let c = a * inside * outside;

        let root = solve_quadratic(a, b, c, x1, x2);
        let scale = 1.0 + inside.abs() + outside.abs();
        assert!(
            (root - inside).abs() < 1e-9 * scale,
            "roots {} and {} in [{}, {}]: got {}",
            inside,
            outside,
            x1,
            x2,
            root
        );
    }
}

#[test]
fn test_cubic_scenarios() {
    let (a, b, c, d) = (1.0f64, -6.0, 11.0, -6.0);
    assert!((solve_cubic(a, b, c, d, 0.5, 1.5) - 1.0).abs() < 1e-12);
    assert!((solve_cubic(a, b, c, d, 1.5, 2.5) - 2.0).abs() < 1e-12);
    assert!((solve_cubic(a, b, c, d, 2.5, 3.5) - 3.0).abs() < 1e-12);
    assert!((solve_cubic(1.0f64, 0.0, 0.0, -8.0, 0.0, 5.0) - 2.0).abs() < 1e-14);
    assert!((solve_cubic(2.0f32, 0.0, 0.0, 16.0, -5.0, 0.0) + 2.0).abs() < 1e-5);
    assert_eq!(solve_cubic(1.0f64, 0.0, 0.0, 0.0, -1.0, 1.0), 0.0);
    // quadratic when the leading coefficient vanishes
    assert!((solve_cubic(0.0f64, 1.0, 0.0, -4.0, 0.0, 10.0) - 2.0).abs() < 1e-14);
}

#[test]
fn test_cubic_root_containment() {
    let mut rng = StdRng::seed_from_u64(54321);

    for _ in 0..10_000 {
        let x1: f64 = rng.random_range(-10.0..=10.0);
        let width: f64 = rng.random_range(0.5..=10.0);
        let x2 = x1 + width;
        let inside = rng.random_range(x1 + 0.1 * width..=x2 - 0.1 * width);
        let above = x2 + rng.random_range(0.1 * width..=20.0);
        let below = x1 - rng.random_range(0.1 * width..=20.0);
        let a: f64 = rng.random_range(0.1..=5.0);

        let b = -a * (inside + above + below);
        let c = a * (inside * above + inside * below + above * below);
        let d = -a * inside * above * below;

        let root = solve_cubic(a, b, c, d, x1, x2);
        let scale = 1.0 + inside.abs() + above.abs() + below.abs();
        assert!(
            (root - inside).abs() < 1e-8 * scale,
            "roots {}, {}, {} in [{}, {}]: got {}",
            below,
            inside,
            above,
            x1,
            x2,
            root
        );
    }
}

#[test]
fn test_cubic_single_real_root() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..10_000 {
        // (x - r)(x² + px + q) with p² < 4q
        let r: f64 = rng.random_range(-10.0..=10.0);
        let p: f64 = rng.random_range(-4.0..=4.0);
        let q: f64 = p * p / 4.0 + rng.random_range(0.5..=10.0);
        let root = solve_cubic(1.0, p - r, q - r * p, -r * q, r - 1.0, r + 1.0);
        assert!((root - r).abs() < 1e-9 * (1.0 + r.abs()), "root {}: got {}", r, root);
    }
}

#[test]
fn test_solvers_on_lanes() {
    let a = F64x4::splat(1.0);
    let b = F64x4::splat(0.0);
    let c = F64x4::from([-1.0, -4.0, -9.0, -16.0]);
    let roots = solve_quadratic(a, b, c, F64x4::splat(0.0), F64x4::splat(10.0));
    assert_eq!(roots, F64x4::from([1.0, 2.0, 3.0, 4.0]));
}
