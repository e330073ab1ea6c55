//! Sign manipulation on the raw bit pattern, plus a few tiny arithmetic helpers.
//!
//! None of these branch: the lane is reinterpreted as its integer companion,
//! masked with the sign-bit constants of the precision and reinterpreted back,
//! so NaN payloads and signed zeros go through untouched.

use crate::simd::{IntLane, Lane, Real};

#[inline(always)]
fn sign_mask<L: Lane>() -> L::Int {
    L::Int::splat(<L::Scalar as Real>::SIGN_MASK)
}

#[inline(always)]
fn abs_mask<L: Lane>() -> L::Int {
    L::Int::splat(<L::Scalar as Real>::ABS_MASK)
}

/// Flips the sign bit.
#[inline(always)]
pub fn opposite<L: Lane>(x: L) -> L {
    L::from_bits(x.to_bits() ^ sign_mask::<L>())
}

/// Clears the sign bit.
#[inline(always)]
pub fn abs<L: Lane>(x: L) -> L {
    L::from_bits(x.to_bits() & abs_mask::<L>())
}

/// `±1` carrying the sign bit of `x` (zeros and NaN included).
#[inline(always)]
pub fn sign<L: Lane>(x: L) -> L {
    L::from_bits((x.to_bits() & sign_mask::<L>()) | L::one().to_bits())
}

/// Magnitude of `magnitude` with the sign bit of `sign`.
#[inline(always)]
pub fn copysign<L: Lane>(magnitude: L, sign: L) -> L {
    L::from_bits((magnitude.to_bits() & abs_mask::<L>()) | (sign.to_bits() & sign_mask::<L>()))
}

/// True where the sign bit is set, `-0.0` included.
#[inline(always)]
pub fn is_sign_negative<L: Lane>(x: L) -> L::Mask {
    (x.to_bits() & sign_mask::<L>()).simd_eq(sign_mask::<L>())
}

/// True where `|x|` is below the machine epsilon.
#[inline(always)]
pub fn small<L: Lane>(x: L) -> L::Mask {
    abs(x).simd_lt(L::splat(<L::Scalar as Real>::EPSILON))
}

#[inline(always)]
pub fn dbl<L: Lane>(x: L) -> L {
    x + x
}

#[inline(always)]
pub fn sqr<L: Lane>(x: L) -> L {
    x * x
}

/// The argument of smaller magnitude when both share a sign, zero otherwise.
#[inline(always)]
pub fn modmin<L: Lane>(a: L, b: L) -> L {
    let smaller = L::select(abs(a).simd_lt(abs(b)), a, b);
    L::select((a * b).simd_le(L::zero()), L::zero(), smaller)
}

#[inline(always)]
pub fn fmin<L: Lane>(a: L, b: L) -> L {
    a.min(b)
}

#[inline(always)]
pub fn fmax<L: Lane>(a: L, b: L) -> L {
    a.max(b)
}
