//! Fixed-width lane groups backed by plain arrays.
//!
//! [`Pack<T, N>`] applies every operation lane by lane through small loops of
//! known trip count. With `lto = "fat"` and the target features detected by the
//! build script these loops compile to packed instructions (SSE/AVX/NEON), so a
//! single portable implementation replaces one intrinsic wrapper per register
//! width.

use std::array;
use std::ops::{Add, BitAnd, BitOr, BitXor, Div, Mul, Neg, Not, Sub};

use super::traits::{IntLane, Lane, Mask, Real};

/// `N` values of type `T` processed together.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pack<T, const N: usize>(pub [T; N]);

/// 128-bit group of single-precision values.
pub type F32x4 = Pack<f32, 4>;
/// 256-bit group of single-precision values.
pub type F32x8 = Pack<f32, 8>;
/// 512-bit group of single-precision values.
pub type F32x16 = Pack<f32, 16>;
/// 128-bit group of double-precision values.
pub type F64x2 = Pack<f64, 2>;
/// 256-bit group of double-precision values.
pub type F64x4 = Pack<f64, 4>;
/// 512-bit group of double-precision values.
pub type F64x8 = Pack<f64, 8>;

impl<T: Copy, const N: usize> Pack<T, N> {
    #[inline(always)]
    fn map(self, f: impl Fn(T) -> T) -> Self {
        Pack(array::from_fn(|i| f(self.0[i])))
    }

    #[inline(always)]
    fn zip<U>(self, other: Self, f: impl Fn(T, T) -> U) -> Pack<U, N> {
        Pack(array::from_fn(|i| f(self.0[i], other.0[i])))
    }
}

impl<T, const N: usize> From<[T; N]> for Pack<T, N> {
    fn from(lanes: [T; N]) -> Self {
        Pack(lanes)
    }
}

macro_rules! impl_binary_op {
    ($($trait:ident::$method:ident),* $(,)?) => {
        $(
            impl<T: Copy + $trait<Output = T>, const N: usize> $trait for Pack<T, N> {
                type Output = Self;

                #[inline(always)]
                fn $method(self, rhs: Self) -> Self {
                    self.zip(rhs, |a, b| a.$method(b))
                }
            }
        )*
    };
}

impl_binary_op!(
    Add::add,
    Sub::sub,
    Mul::mul,
    Div::div,
    BitAnd::bitand,
    BitOr::bitor,
    BitXor::bitxor,
);

impl<T: Copy + Neg<Output = T>, const N: usize> Neg for Pack<T, N> {
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self {
        self.map(|a| -a)
    }
}

impl<T: Copy + Not<Output = T>, const N: usize> Not for Pack<T, N> {
    type Output = Self;

    #[inline(always)]
    fn not(self) -> Self {
        self.map(|a| !a)
    }
}

impl<const N: usize> Mask for Pack<bool, N> {
    #[inline(always)]
    fn any(self) -> bool {
        self.0.iter().any(|&m| m)
    }

    #[inline(always)]
    fn all(self) -> bool {
        self.0.iter().all(|&m| m)
    }
}

impl<I: IntLane<Mask = bool>, const N: usize> IntLane for Pack<I, N> {
    type Mask = Pack<bool, N>;

    const LANES: usize = N;

    #[inline(always)]
    fn splat(value: i64) -> Self {
        Pack([I::splat(value); N])
    }

    #[inline(always)]
    fn extract(self, index: usize) -> i64 {
        self.0[index].extract(0)
    }

    #[inline(always)]
    fn shift_left(self, bits: u32) -> Self {
        self.map(|a| a.shift_left(bits))
    }

    #[inline(always)]
    fn shift_right(self, bits: u32) -> Self {
        self.map(|a| a.shift_right(bits))
    }

    #[inline(always)]
    fn simd_eq(self, other: Self) -> Pack<bool, N> {
        self.zip(other, I::simd_eq)
    }

    #[inline(always)]
    fn simd_lt(self, other: Self) -> Pack<bool, N> {
        self.zip(other, I::simd_lt)
    }

    #[inline(always)]
    fn simd_gt(self, other: Self) -> Pack<bool, N> {
        self.zip(other, I::simd_gt)
    }

    #[inline(always)]
    fn select(mask: Pack<bool, N>, on_true: Self, on_false: Self) -> Self {
        Pack(array::from_fn(|i| {
            I::select(mask.0[i], on_true.0[i], on_false.0[i])
        }))
    }

    #[inline(always)]
    fn min(self, other: Self) -> Self {
        self.zip(other, I::min)
    }

    #[inline(always)]
    fn max(self, other: Self) -> Self {
        self.zip(other, I::max)
    }
}

impl<T, const N: usize> Lane for Pack<T, N>
where
    T: Real,
    T::Int: IntLane<Mask = bool>,
{
    type Scalar = T;
    type Int = Pack<T::Int, N>;
    type Mask = Pack<bool, N>;

    const LANES: usize = N;

    #[inline(always)]
    fn splat(value: T) -> Self {
        Pack([value; N])
    }

    #[inline(always)]
    fn load(slice: &[T]) -> Self {
        Pack(array::from_fn(|i| slice[i]))
    }

    #[inline(always)]
    fn store(self, slice: &mut [T]) {
        slice[..N].copy_from_slice(&self.0);
    }

    #[inline(always)]
    fn extract(self, index: usize) -> T {
        self.0[index]
    }

    #[inline(always)]
    fn mul_add(self, a: Self, b: Self) -> Self {
        Pack(array::from_fn(|i| self.0[i].mul_add(a.0[i], b.0[i])))
    }

    #[inline(always)]
    fn sqrt(self) -> Self {
        self.map(T::sqrt)
    }

    #[inline(always)]
    fn floor(self) -> Self {
        self.map(T::floor)
    }

    #[inline(always)]
    fn round(self) -> Self {
        self.map(T::round)
    }

    #[inline(always)]
    fn min(self, other: Self) -> Self {
        self.zip(other, T::min)
    }

    #[inline(always)]
    fn max(self, other: Self) -> Self {
        self.zip(other, T::max)
    }

    #[inline(always)]
    fn simd_eq(self, other: Self) -> Pack<bool, N> {
        self.zip(other, T::simd_eq)
    }

    #[inline(always)]
    fn simd_lt(self, other: Self) -> Pack<bool, N> {
        self.zip(other, T::simd_lt)
    }

    #[inline(always)]
    fn simd_le(self, other: Self) -> Pack<bool, N> {
        self.zip(other, T::simd_le)
    }

    #[inline(always)]
    fn simd_gt(self, other: Self) -> Pack<bool, N> {
        self.zip(other, T::simd_gt)
    }

    #[inline(always)]
    fn simd_ge(self, other: Self) -> Pack<bool, N> {
        self.zip(other, T::simd_ge)
    }

    #[inline(always)]
    fn select(mask: Pack<bool, N>, on_true: Self, on_false: Self) -> Self {
        Pack(array::from_fn(|i| {
            T::select(mask.0[i], on_true.0[i], on_false.0[i])
        }))
    }

    #[inline(always)]
    fn to_bits(self) -> Pack<T::Int, N> {
        Pack(array::from_fn(|i| self.0[i].to_bits()))
    }

    #[inline(always)]
    fn from_bits(bits: Pack<T::Int, N>) -> Self {
        Pack(array::from_fn(|i| T::from_bits(bits.0[i])))
    }

    #[inline(always)]
    fn to_int(self) -> Pack<T::Int, N> {
        Pack(array::from_fn(|i| self.0[i].to_int()))
    }

    #[inline(always)]
    fn from_int(value: Pack<T::Int, N>) -> Self {
        Pack(array::from_fn(|i| T::from_int(value.0[i])))
    }

    #[inline(always)]
    fn reduce_max(self) -> T {
        self.0.into_iter().fold(T::NEG_INFINITY, T::max)
    }

    #[inline(always)]
    fn reduce_min(self) -> T {
        self.0.into_iter().fold(T::INFINITY, T::min)
    }
}
