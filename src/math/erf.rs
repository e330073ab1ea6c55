//! Error function `erf` and its complement `erfc`.
//!
//! Below one in magnitude `erf(x) = x R(x²)`. Above one the complement is
//! computed from its asymptotic form `erfc(x) = e^(-x²) / x * R(1/x)`, with `x²`
//! split exactly by a fused multiply-add so the exponential keeps its
//! precision. Past `ERFC_MAX` the complement underflows to zero.

use super::bits::{abs, copysign};
use super::exp::exp;
use super::poly::rational;
use crate::simd::{Lane, Real};

/// `erf(x)` on `[-1, 1]`.
#[inline(always)]
pub fn erfwc<L: Lane>(x: L) -> L {
    x * rational(x * x, &<L::Scalar as Real>::ERFWC)
}

/// `erfc(x)` on `[1, ∞)`.
#[inline(always)]
pub fn erfcwc<L: Lane>(x: L) -> L {
    let u = L::one() / x;
    let hi = x * x;
    let lo = x.mul_add(x, -hi);
    let r = exp(-hi) * (L::one() - lo) * u * rational(u, &<L::Scalar as Real>::ERFCWC);
    L::select(
        x.simd_gt(L::splat(<L::Scalar as Real>::ERFC_MAX)),
        L::zero(),
        r,
    )
}

/// Error function.
#[inline(always)]
pub fn erf<L: Lane>(x: L) -> L {
    let a = abs(x);
    L::select(
        a.simd_lt(L::one()),
        erfwc(x),
        copysign(L::one() - erfcwc(a), x),
    )
}

/// Complementary error function `1 - erf(x)`.
#[inline(always)]
pub fn erfc<L: Lane>(x: L) -> L {
    let a = abs(x);
    let tail = erfcwc(a);
    let tail = L::select(x.simd_lt(L::zero()), L::constant(2.0) - tail, tail);
    L::select(a.simd_lt(L::one()), L::one() - erfwc(x), tail)
}
