//! Exponential family: `exp2`, `exp`, `exp10` and `expm1`.
//!
//! Every function reduces its argument to `n + f` with integral `n` and
//! `|f| <= 1/2`, evaluates the minimax polynomial of `2^f` and scales the
//! result by `2^n` through [`ldexp`], which saturates to `0` and `+∞`.
//!
//! `exp` and `exp10` subtract `n * ln2` (respectively `n * log10 2`) in two
//! steps (Cody–Waite) so the reduced argument keeps full precision.
//!
//! | Function | Max error (f32) | Max error (f64) |
//! |----------|-----------------|-----------------|
//! | `exp2`   | ~1 ULP          | ~1 ULP          |
//! | `exp`    | ~1 ULP          | ~1 ULP          |
//! | `exp10`  | ~1 ULP          | ~1 ULP          |
//! | `expm1`  | ~4 ULP          | ~4 ULP          |

use std::f64::consts::{LN_2, LOG2_10, LOG2_E};

use super::bits::abs;
use super::poly::{polynomial, rational};
use super::reduce::ldexp;
use crate::simd::{Lane, Real};

/// `2^x` on `[-1/2, 1/2]`.
#[inline(always)]
pub fn exp2wc<L: Lane>(x: L) -> L {
    polynomial(x, <L::Scalar as Real>::EXP2WC)
}

/// Clamps to `±EXP2_CLAMP` through selects so NaN survives.
#[inline(always)]
fn clamp<L: Lane>(x: L, limit: f64) -> L {
    let limit = L::constant(limit);
    let x = L::select(x.simd_gt(limit), limit, x);
    L::select(x.simd_lt(-limit), -limit, x)
}

#[inline(always)]
fn exp2_limit<L: Lane>() -> f64 {
    <L::Scalar as Real>::EXP2_CLAMP.to_f64()
}

/// `2^x`.
#[inline(always)]
pub fn exp2<L: Lane>(x: L) -> L {
    let x = clamp(x, exp2_limit::<L>());
    let n = x.round();
    ldexp(exp2wc(x - n), n.to_int())
}

/// `e^x`.
#[inline(always)]
pub fn exp<L: Lane>(x: L) -> L {
    let x = clamp(x, exp2_limit::<L>() * LN_2);
    let n = (x * L::constant(LOG2_E)).round();
    let r = n.mul_add(-L::splat(<L::Scalar as Real>::LN2_HI), x);
    let r = n.mul_add(-L::splat(<L::Scalar as Real>::LN2_LO), r);
    ldexp(exp2wc(r * L::constant(LOG2_E)), n.to_int())
}

/// `10^x`.
#[inline(always)]
pub fn exp10<L: Lane>(x: L) -> L {
    let x = clamp(x, exp2_limit::<L>() / LOG2_10);
    let n = (x * L::constant(LOG2_10)).round();
    let r = n.mul_add(-L::splat(<L::Scalar as Real>::LOG10_2_HI), x);
    let r = n.mul_add(-L::splat(<L::Scalar as Real>::LOG10_2_LO), r);
    ldexp(exp2wc(r * L::constant(LOG2_10)), n.to_int())
}

/// `e^x - 1`, accurate near zero.
///
/// Below `ln2 / 2` in magnitude the rational approximation of `(e^x - 1) / x`
/// avoids the cancellation of `exp(x) - 1`.
#[inline(always)]
pub fn expm1<L: Lane>(x: L) -> L {
    let near_zero = abs(x).simd_lt(L::constant(LN_2 / 2.0));
    let direct = x * rational(x, &<L::Scalar as Real>::EXPM1WC);
    L::select(near_zero, direct, exp(x) - L::one())
}
