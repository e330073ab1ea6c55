//! Inverse circular functions: `atan`, `atan2`, `asin` and `acos`.
//!
//! Everything goes through `atan`, whose argument is folded into `[0, 1]` with
//! `atan(x) = π/2 - atan(1/x)` before the rational approximation.

use std::f64::consts::{FRAC_PI_2, PI};

use super::bits::{abs, copysign, is_sign_negative};
use super::poly::rational;
use crate::simd::{Lane, Real};

/// `atan(x)` on `[-1, 1]`.
#[inline(always)]
pub fn atanwc<L: Lane>(x: L) -> L {
    x * rational(x * x, &<L::Scalar as Real>::ATANWC)
}

/// Arctangent in `[-π/2, π/2]`.
#[inline(always)]
pub fn atan<L: Lane>(x: L) -> L {
    let a = abs(x);
    let folded = a.simd_gt(L::one());
    let r = atanwc(L::select(folded, L::one() / a, a));
    let r = L::select(folded, L::constant(FRAC_PI_2) - r, r);
    copysign(r, x)
}

/// Four-quadrant arctangent of `y / x` in `[-π, π]`.
///
/// The `±π` correction follows the sign bit of `x`, so `-0` counts as
/// negative. `atan2(±0, ±0)` is NaN.
#[inline(always)]
pub fn atan2<L: Lane>(y: L, x: L) -> L {
    let correction = L::select(
        is_sign_negative(x),
        copysign(L::constant(PI), y),
        L::zero(),
    );
    atan(y / x) + correction
}

/// Arcsine, `atan(x / √(1 - x²))`. NaN outside `[-1, 1]`.
#[inline(always)]
pub fn asin<L: Lane>(x: L) -> L {
    atan(x / ((L::one() - x) * (L::one() + x)).sqrt())
}

/// Arccosine, `atan(√(1 - x²) / x)` shifted by `π` for negative `x`.
/// NaN outside `[-1, 1]`.
#[inline(always)]
pub fn acos<L: Lane>(x: L) -> L {
    let r = atan(((L::one() - x) * (L::one() + x)).sqrt() / x);
    r + L::select(is_sign_negative(x), L::constant(PI), L::zero())
}
