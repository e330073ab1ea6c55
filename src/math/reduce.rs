//! Range reduction: exponent/mantissa split, power-of-two scaling and the
//! floored remainder.
//!
//! These primitives never fail. Values outside the representable range
//! saturate to signed zero or infinity, and NaN propagates.

use crate::simd::{IntLane, Lane, Mask, Real};

#[inline(always)]
fn int<L: Lane>(value: i64) -> L::Int {
    L::Int::splat(value)
}

/// Splits `x` into a mantissa in `[1/2, 1)` and an exponent with
/// `x = mantissa * 2^exponent`.
///
/// Subnormal inputs are renormalized first. Zeros, infinities and NaN are
/// returned unchanged with a zero exponent.
#[inline(always)]
pub fn frexp<L: Lane>(x: L) -> (L, L::Int) {
    let bits_m = <L::Scalar as Real>::MANTISSA_BITS;
    let bias = <L::Scalar as Real>::EXPONENT_BIAS;
    let field = int::<L>(<L::Scalar as Real>::EXPONENT_FIELD);
    let zero = int::<L>(0);

    let e = x.to_bits().shift_right(bits_m) & field;
    let subnormal = e.simd_eq(zero) & !x.simd_eq(L::zero());
    let y = L::select(subnormal, x * L::constant((bits_m as f64).exp2()), x);

    let bits = y.to_bits();
    let exponent = (bits.shift_right(bits_m) & field)
        - int::<L>(bias - 1)
        - L::Int::select(subnormal, int::<L>(bits_m as i64), zero);
    let mantissa = L::from_bits(
        (bits & int::<L>(<L::Scalar as Real>::NOT_EXPONENT_MASK))
            | int::<L>((bias - 1) << bits_m),
    );

    let special = x.simd_eq(L::zero()) | e.simd_eq(field);
    (
        L::select(special, x, mantissa),
        L::Int::select(special, zero, exponent),
    )
}

/// `2^e` built directly in the exponent field.
///
/// Exponents in the subnormal range are built shifted by the mantissa width and
/// scaled back with one exact multiplication. Results saturate to `0` and `+∞`.
#[inline(always)]
pub fn exp2n<L: Lane>(e: L::Int) -> L {
    let bits_m = <L::Scalar as Real>::MANTISSA_BITS;
    let bias = <L::Scalar as Real>::EXPONENT_BIAS;
    let mant = bits_m as i64;

    let e = e.max(int::<L>(-(bias + mant))).min(int::<L>(bias + 1));
    let normal = e.simd_gt(int::<L>(-bias));
    let n = L::from_bits((e + int::<L>(bias)).shift_left(bits_m));
    let s = L::from_bits((e + int::<L>(bias + mant)).shift_left(bits_m));
    L::select(normal, n, s * L::constant((-mant as f64).exp2()))
}

/// `m * 2^e`, exact whenever the result is representable.
#[inline(always)]
pub fn ldexp<L: Lane>(m: L, e: L::Int) -> L {
    let bias = <L::Scalar as Real>::EXPONENT_BIAS;
    let mant = <L::Scalar as Real>::MANTISSA_BITS as i64;

    let fast = e.simd_gt(int::<L>(-bias)) & e.simd_lt(int::<L>(bias + 1));
    if fast.all() {
        return m * exp2n(e);
    }

    // Four normal powers of two cover every exponent that can still produce a
    // finite non-zero result from a finite mantissa.
    let limit = 2 * bias + mant + 3;
    let e = e.max(int::<L>(-limit)).min(int::<L>(limit));
    let q = e.shift_right(2);
    let r = e - q - q - q;
    let p = exp2n::<L>(q);
    m * p * p * p * exp2n(r)
}

/// Floored remainder `x - floor(x / d) * d`, carrying the sign of `d`.
#[inline(always)]
pub fn fmod<L: Lane>(x: L, d: L) -> L {
    (-(x / d).floor()).mul_add(d, x)
}
