//! Logarithms: `log2`, `log`, `log10` and `log1p`.
//!
//! [`frexp`] splits the argument into `m * 2^e`; the mantissa is folded into
//! `[√½, √2)` and `log2(m)` is evaluated as `t * P(t²)` with
//! `t = (m - 1) / (m + 1)`. The boundaries of the domain (`0`, negative values,
//! `+∞`) are fixed up with selects.

use std::f64::consts::{FRAC_1_SQRT_2, LN_2, LOG10_2};

use super::poly::polynomial;
use super::reduce::frexp;
use crate::simd::{Lane, Real};

/// `log2(x)` for `x` in `[√½, √2]`.
#[inline(always)]
pub fn log2wc<L: Lane>(x: L) -> L {
    let t = (x - L::one()) / (x + L::one());
    t * polynomial(t * t, <L::Scalar as Real>::LOG2WC)
}

/// Base-2 logarithm. `log2(0) = -∞`, negative arguments give NaN.
#[inline(always)]
pub fn log2<L: Lane>(x: L) -> L {
    let (m, e) = frexp(x);
    let low = m.simd_lt(L::constant(FRAC_1_SQRT_2));
    let m = L::select(low, m + m, m);
    let e = L::from_int(e) - L::select(low, L::one(), L::zero());
    let y = e + log2wc(m);

    let y = L::select(
        x.simd_eq(L::splat(<L::Scalar as Real>::INFINITY)),
        x,
        y,
    );
    let y = L::select(
        x.simd_eq(L::zero()),
        L::splat(<L::Scalar as Real>::NEG_INFINITY),
        y,
    );
    L::select(
        x.simd_lt(L::zero()),
        L::splat(<L::Scalar as Real>::NAN),
        y,
    )
}

/// Natural logarithm.
#[inline(always)]
pub fn log<L: Lane>(x: L) -> L {
    log2(x) * L::constant(LN_2)
}

/// Base-10 logarithm.
#[inline(always)]
pub fn log10<L: Lane>(x: L) -> L {
    log2(x) * L::constant(LOG10_2)
}

/// `ln(1 + x)`, accurate near zero.
///
/// The rounding error of `u = 1 + x` is compensated by the factor
/// `x / (u - 1)`.
#[inline(always)]
pub fn log1p<L: Lane>(x: L) -> L {
    let u = x + L::one();
    let r = log(u) * (x / (u - L::one()));
    let r = L::select(u.simd_eq(L::one()), x, r);
    L::select(u.simd_eq(L::splat(<L::Scalar as Real>::INFINITY)), u, r)
}
