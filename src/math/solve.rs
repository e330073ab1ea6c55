//! Closed-form quadratic and cubic root solvers constrained to an interval.
//!
//! Each solver returns one real root, chosen with a fixed preference order
//! among the candidates that lie in `[x1, x2]`:
//!
//! - quadratic: the `+√` root first, then the `-√` root;
//! - cubic with three real roots: the trigonometric roots at phase `0`,
//!   `+2π/3`, then `-2π/3`.
//!
//! When no candidate is inside the interval the last one in that order is
//! returned. A leading coefficient below the machine epsilon drops the
//! equation to the next lower degree.

use std::f64::consts::FRAC_PI_3;

use super::bits::{copysign, small};
use super::inverse::acos;
use super::pow::cbrt;
use super::trig::cos;
use crate::simd::Lane;

#[inline(always)]
fn inside<L: Lane>(x: L, x1: L, x2: L) -> L::Mask {
    x.simd_ge(x1) & x.simd_le(x2)
}

/// Root of `x² + a x + b = 0` in `[x1, x2]`.
#[inline(always)]
pub fn solve_quadratic_reduced<L: Lane>(a: L, b: L, x1: L, x2: L) -> L {
    let h = a * L::constant(0.5);
    let d = h.mul_add(h, -b).sqrt();
    let plus = d - h;
    L::select(inside(plus, x1, x2), plus, -d - h)
}

/// Root of `a x² + b x + c = 0` in `[x1, x2]`, linear when `a` is negligible.
#[inline(always)]
pub fn solve_quadratic<L: Lane>(a: L, b: L, c: L, x1: L, x2: L) -> L {
    L::select(
        small(a),
        -c / b,
        solve_quadratic_reduced(b / a, c / a, x1, x2),
    )
}

/// Root of `x³ + a x² + b x + c = 0` in `[x1, x2]`.
///
/// With `x = t - a/3` the equation becomes `t³ + 3P t + 2Q = 0`. A negative
/// `Q² + P³` means three real roots (Viète); otherwise the single real root is
/// taken from Cardano's formula in its cancellation-free form.
#[inline(always)]
pub fn solve_cubic_reduced<L: Lane>(a: L, b: L, c: L, x1: L, x2: L) -> L {
    let third = L::constant(1.0 / 3.0);
    let half = L::constant(0.5);
    let shift = a * third;
    let shift2 = shift * shift;
    let p = b * third - shift2;
    let q = c * half + shift * (shift2 - b * half);
    let discriminant = q.mul_add(q, p * p * p);

    // three real roots
    let sp = (-p).sqrt();
    let ratio = q / (p * sp);
    let ratio = L::select(ratio.simd_gt(L::one()), L::one(), ratio);
    let ratio = L::select(ratio.simd_lt(-L::one()), -L::one(), ratio);
    let phase = acos(ratio) * third;
    let m = sp + sp;
    let r0 = m * cos(phase) - shift;
    let r1 = m * cos(phase + L::constant(2.0 * FRAC_PI_3)) - shift;
    let r2 = m * cos(phase - L::constant(2.0 * FRAC_PI_3)) - shift;
    let trigonometric = L::select(
        inside(r0, x1, x2),
        r0,
        L::select(inside(r1, x1, x2), r1, r2),
    );

    // one real root
    let u = -cbrt(q + copysign(discriminant.sqrt(), q));
    let v = L::select(u.simd_eq(L::zero()), L::zero(), -p / u);
    let cardano = u + v - shift;

    L::select(discriminant.simd_lt(L::zero()), trigonometric, cardano)
}

/// Root of `a x³ + b x² + c x + d = 0` in `[x1, x2]`, quadratic when `a` is
/// negligible.
#[inline(always)]
pub fn solve_cubic<L: Lane>(a: L, b: L, c: L, d: L, x1: L, x2: L) -> L {
    L::select(
        small(a),
        solve_quadratic(b, c, d, x1, x2),
        solve_cubic_reduced(b / a, c / a, d / a, x1, x2),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quadratic_prefers_plus_root() {
        // x² - 4 = 0 has ±2
        assert_eq!(solve_quadratic(1.0f64, 0.0, -4.0, 0.0, 10.0), 2.0);
        assert_eq!(solve_quadratic(1.0f64, 0.0, -4.0, -10.0, 0.0), -2.0);
        assert_eq!(solve_quadratic(1.0f64, 0.0, -4.0, -10.0, 10.0), 2.0);
    }

    #[test]
    fn test_quadratic_linear_fallback() {
        assert_eq!(solve_quadratic(0.0f32, 2.0, -4.0, 0.0, 10.0), 2.0);
        assert_eq!(solve_quadratic(1.0e-20f64, 2.0, -4.0, 0.0, 10.0), 2.0);
    }

    #[test]
    fn test_cubic_three_roots_order() {
        // (x - 1)(x - 2)(x - 3) = x³ - 6x² + 11x - 6
        let all = solve_cubic(1.0f64, -6.0, 11.0, -6.0, -10.0, 10.0);
        assert!((all - 3.0).abs() < 1e-12, "phase 0 root first, got {all}");
        let low = solve_cubic(1.0f64, -6.0, 11.0, -6.0, 0.5, 1.5);
        assert!((low - 1.0).abs() < 1e-12, "got {low}");
        let mid = solve_cubic(1.0f64, -6.0, 11.0, -6.0, 1.5, 2.5);
        assert!((mid - 2.0).abs() < 1e-12, "got {mid}");
    }

    #[test]
    fn test_cubic_single_root() {
        // x³ - 8 = 0
        let r = solve_cubic(1.0f64, 0.0, 0.0, -8.0, 0.0, 10.0);
        assert!((r - 2.0).abs() < 1e-14, "got {r}");
        // x³ = 0
        assert_eq!(solve_cubic(1.0f32, 0.0, 0.0, 0.0, -1.0, 1.0), 0.0);
    }

    #[test]
    fn test_cubic_quadratic_fallback() {
        let r = solve_cubic(0.0f64, 1.0, 0.0, -9.0, 0.0, 10.0);
        assert_eq!(r, 3.0);
    }
}
