//! Circular functions: `sin`, `cos`, `sincos` and `tan`.
//!
//! The argument is split into a quadrant count `q` and a remainder `t` in
//! `[-π/4, π/4]` by a three-part Cody–Waite reduction by `π/2`, so the
//! remainder keeps its relative precision next to every multiple of `π/2`.
//! `sin(x)` and `cos(x)` are then one of `±sinwc(t)` and `±coswc(t)`:
//!
//! | q | sin(x)      | cos(x)      |
//! |---|-------------|-------------|
//! | 0 | `sinwc(t)`  | `coswc(t)`  |
//! | 1 | `coswc(t)`  | `-sinwc(t)` |
//! | 2 | `-sinwc(t)` | `-coswc(t)` |
//! | 3 | `-coswc(t)` | `sinwc(t)`  |
//!
//! The absolute error of the remainder grows with the quadrant count, so
//! accuracy degrades slowly for very large `|x|`.

use std::f64::consts::{FRAC_2_PI, FRAC_PI_2};

use super::poly::polynomial;
use crate::simd::{IntLane, Lane, Real};

/// `sin(x)` on `[-π/4, π/4]`.
#[inline(always)]
pub fn sinwc<L: Lane>(x: L) -> L {
    x * polynomial(x * x, <L::Scalar as Real>::SINWC)
}

/// `cos(x)` on `[-π/4, π/4]`.
#[inline(always)]
pub fn coswc<L: Lane>(x: L) -> L {
    polynomial(x * x, <L::Scalar as Real>::COSWC)
}

/// `(sin(x), cos(x))` on `[-π/4, π/4]`, with the cosine taken as
/// `√(1 - sin²)` since it is positive there.
#[inline(always)]
pub fn sincoswc<L: Lane>(x: L) -> (L, L) {
    let s = sinwc(x);
    (s, (-s).mul_add(s, L::one()).sqrt())
}

/// Returns `(t, q)` with `x = jπ/2 + t`, `t` in `[-π/4, π/4]` and `q = j`
/// modulo 4. `j π/2` is subtracted in three parts, the first one exactly.
#[inline(always)]
fn reduce<L: Lane>(x: L) -> (L, L::Int) {
    let j = (x * L::constant(FRAC_2_PI)).round();
    let t = j.mul_add(-L::constant(FRAC_PI_2), x);
    let t = j.mul_add(-L::splat(<L::Scalar as Real>::FRAC_PI_2_MID), t);
    let t = j.mul_add(-L::splat(<L::Scalar as Real>::FRAC_PI_2_LO), t);
    (t, j.to_int() & L::Int::splat(3))
}

#[inline(always)]
fn quadrant<L: Lane>(q: L::Int, v0: L, v1: L, v2: L, v3: L) -> L {
    let is = |k: i64| q.simd_eq(L::Int::splat(k));
    L::select(is(0), v0, L::select(is(1), v1, L::select(is(2), v2, v3)))
}

/// Sine.
#[inline(always)]
pub fn sin<L: Lane>(x: L) -> L {
    let (t, q) = reduce(x);
    let (s, c) = (sinwc(t), coswc(t));
    quadrant(q, s, c, -s, -c)
}

/// Cosine.
#[inline(always)]
pub fn cos<L: Lane>(x: L) -> L {
    let (t, q) = reduce(x);
    let (s, c) = (sinwc(t), coswc(t));
    quadrant(q, c, -s, -c, s)
}

/// Sine and cosine sharing one reduction and one polynomial.
#[inline(always)]
pub fn sincos<L: Lane>(x: L) -> (L, L) {
    let (t, q) = reduce(x);
    let (s, c) = sincoswc(t);
    (quadrant(q, s, c, -s, -c), quadrant(q, c, -s, -c, s))
}

/// Tangent, `sin(x) / cos(x)`.
#[inline(always)]
pub fn tan<L: Lane>(x: L) -> L {
    let (t, q) = reduce(x);
    let (s, c) = (sinwc(t), coswc(t));
    let odd = (q & L::Int::splat(1)).simd_eq(L::Int::splat(1));
    L::select(odd, -c / s, s / c)
}
