//! Powers: `pown`, `pow` and `cbrt`.

use super::bits::{abs, copysign};
use super::exp::exp2;
use super::log::log2;
use crate::simd::{IntLane, Lane, Mask, Real};

/// Finite and non-zero.
#[inline(always)]
fn regular<L: Lane>(x: L) -> L::Mask {
    let a = abs(x);
    a.simd_gt(L::zero()) & a.simd_lt(L::splat(<L::Scalar as Real>::INFINITY))
}

/// `h + l`, keeping the sign of a zero `h` when `l` vanishes.
#[inline(always)]
fn collapse<L: Lane>(h: L, l: L) -> L {
    L::select(l.simd_eq(L::zero()), h, h + l)
}

/// Product of two unevaluated sums `ah + al` and `bh + bl`, renormalized.
/// The low part is dropped once the high part leaves the finite range.
#[inline(always)]
fn mul_double<L: Lane>((ah, al): (L, L), (bh, bl): (L, L)) -> (L, L) {
    let h = ah * bh;
    let l = ah.mul_add(bh, -h) + ah.mul_add(bl, al * bh);
    let finite = abs(h).simd_lt(L::splat(<L::Scalar as Real>::INFINITY));
    let l = L::select(finite, l, L::zero());
    let s = collapse(h, l);
    (s, l - (s - h))
}

/// `x^n` for an integer lane `n` by repeated squaring.
///
/// Products are carried as unevaluated sums of two values, so the rounding
/// error stays near one ULP instead of growing with `n`. Negative exponents
/// return the reciprocal of the positive power.
#[inline(always)]
pub fn pown<L: Lane>(x: L, n: L::Int) -> L {
    let zero = L::Int::splat(0);
    let one = L::Int::splat(1);
    let negative = n.simd_lt(zero);
    let mut k = L::Int::select(negative, zero - n, n);
    let mut base = (x, L::zero());
    let mut r = (L::one(), L::zero());
    while (!k.simd_eq(zero)).any() {
        let odd = (k & one).simd_eq(one);
        let product = mul_double(r, base);
        r = (
            L::select(odd, product.0, r.0),
            L::select(odd, product.1, r.1),
        );
        base = mul_double(base, base);
        k = k.shift_right(1);
    }

    let (h, l) = r;
    let q = L::one() / h;
    // one Newton step on the reciprocal of the two-part power
    let e = (-h).mul_add(q, L::one()) - l * q;
    let inverse = L::select(regular(h), q.mul_add(e, q), q);
    L::select(negative, inverse, collapse(h, l))
}

/// `x^e`.
///
/// Integral exponents below `POWN_LIMIT` go through [`pown`], which also covers
/// negative bases. Larger integral exponents are all even, so they use `|x|`.
/// Everything else is `exp2(e * log2(x))` and negative bases give NaN.
/// `pow(1, e)` is 1 for every `e`, NaN included.
#[inline(always)]
pub fn pow<L: Lane>(x: L, e: L) -> L {
    let integral = e.floor().simd_eq(e);
    let by_squaring =
        integral & abs(e).simd_lt(L::splat(<L::Scalar as Real>::POWN_LIMIT));
    let n = L::select(by_squaring, e, L::zero()).to_int();
    let base = L::select(integral, abs(x), x);
    let r = L::select(by_squaring, pown(x, n), exp2(e * log2(base)));
    L::select(x.simd_eq(L::one()), L::one(), r)
}

/// Cube root with the sign of `x`.
///
/// `pow(|x|, 1/3)` is refined by one Newton step, which brings exact cubes
/// back onto their integral roots.
#[inline(always)]
pub fn cbrt<L: Lane>(x: L) -> L {
    let a = abs(x);
    let r = pow(a, L::constant(1.0 / 3.0));
    let refined = (r + r + a / (r * r)) / L::constant(3.0);
    copysign(L::select(regular(a), refined, r), x)
}
