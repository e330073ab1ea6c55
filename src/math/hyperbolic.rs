//! Hyperbolic functions and their inverses, built on `exp`, `expm1`, `log` and
//! `log1p`.

use std::f64::consts::LN_2;

use super::bits::{abs, copysign};
use super::exp::{exp, expm1};
use super::log::{log, log1p};
use crate::simd::{Lane, Real};

/// Magnitude above which `e^-|x|` is negligible against `e^|x|`.
#[inline(always)]
fn large<L: Lane>() -> L {
    L::constant((<L::Scalar as Real>::MANTISSA_BITS as f64 + 2.0) * LN_2 * 0.5)
}

/// `e^(|x|/2)²/2` without overflowing before the final product.
#[inline(always)]
fn half_exp<L: Lane>(a: L) -> L {
    let h = exp(a * L::constant(0.5));
    (h * L::constant(0.5)) * h
}

/// Magnitude above which `x²` no longer changes `√(1 + x²)` against `x`.
#[inline(always)]
fn asymptotic<L: Lane>() -> L {
    L::constant(1.0 / <L::Scalar as Real>::EPSILON.to_f64().sqrt())
}

/// Hyperbolic sine.
#[inline(always)]
pub fn sinh<L: Lane>(x: L) -> L {
    let a = abs(x);
    let e = expm1(a);
    let r = (e + e / (e + L::one())) * L::constant(0.5);
    copysign(L::select(a.simd_gt(large()), half_exp(a), r), x)
}

/// Hyperbolic cosine.
#[inline(always)]
pub fn cosh<L: Lane>(x: L) -> L {
    let a = abs(x);
    let e = exp(a);
    let r = (e + L::one() / e) * L::constant(0.5);
    L::select(a.simd_gt(large()), half_exp(a), r)
}

/// Hyperbolic tangent, saturating to `±1` where `expm1(2|x|)` would overflow.
#[inline(always)]
pub fn tanh<L: Lane>(x: L) -> L {
    let a = abs(x);
    let t = expm1(a + a);
    let r = t / (t + L::constant(2.0));
    let limit = L::constant(<L::Scalar as Real>::EXPONENT_BIAS as f64 * LN_2 * 0.5);
    copysign(L::select(a.simd_gt(limit), L::one(), r), x)
}

/// Inverse hyperbolic sine.
#[inline(always)]
pub fn asinh<L: Lane>(x: L) -> L {
    let a = abs(x);
    let a2 = a * a;
    let r = log1p(a + a2 / (L::one() + (L::one() + a2).sqrt()));
    let far = log(a) + L::constant(LN_2);
    copysign(L::select(a.simd_gt(asymptotic()), far, r), x)
}

/// Inverse hyperbolic cosine. NaN below 1.
#[inline(always)]
pub fn acosh<L: Lane>(x: L) -> L {
    let t = x - L::one();
    let r = log1p(t + (t + t + t * t).sqrt());
    let r = L::select(x.simd_gt(asymptotic()), log(x) + L::constant(LN_2), r);
    L::select(
        x.simd_lt(L::one()),
        L::splat(<L::Scalar as Real>::NAN),
        r,
    )
}

/// Inverse hyperbolic tangent. `±∞` at `±1`, NaN beyond.
#[inline(always)]
pub fn atanh<L: Lane>(x: L) -> L {
    let a = abs(x);
    let r = log1p((a + a) / (L::one() - a)) * L::constant(0.5);
    copysign(r, x)
}
