//! Lane capabilities shared by every kernel in the crate.
//!
//! A *lane group* is a fixed number of floating-point values processed by the
//! same sequence of operations. Plain `f32`/`f64` are lane groups of width one;
//! [`Pack`](super::Pack) provides the wider groups. Kernels are written once
//! against [`Lane`] and instantiated for every width and precision.
//!
//! Three traits describe a lane group:
//!
//! - [`Lane`]: floating-point arithmetic, comparison, selection and bit
//!   reinterpretation.
//! - [`IntLane`]: the companion integer lane (`i32` for binary32, `i64` for
//!   binary64) used for bit patterns and exponents.
//! - [`Mask`]: the per-lane boolean produced by comparisons.
//!
//! [`Real`] is implemented by the two scalar element types and carries every
//! precision-specific constant: IEEE-754 field layout, Cody–Waite splits and
//! the coefficient tables of the restricted-domain approximations.

use std::fmt::{Debug, Display};
use std::ops::{Add, BitAnd, BitOr, BitXor, Div, Mul, Neg, Not, Sub};

use crate::math::poly::Rational;

/// Per-lane boolean.
pub trait Mask:
    Copy
    + Debug
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + Not<Output = Self>
    + Send
    + Sync
    + 'static
{
    /// True when at least one lane is set.
    fn any(self) -> bool;

    /// True when every lane is set.
    fn all(self) -> bool;
}

/// Integer companion of a floating-point lane group.
///
/// Values enter and leave through `i64` so that precision-independent code can
/// build constants such as exponent biases without knowing the element width.
pub trait IntLane:
    Copy
    + Debug
    + PartialEq
    + Add<Output = Self>
    + Sub<Output = Self>
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + Send
    + Sync
    + 'static
{
    type Mask: Mask;

    const LANES: usize;

    /// Broadcasts `value`, truncated to the element width.
    fn splat(value: i64) -> Self;

    fn extract(self, index: usize) -> i64;

    fn shift_left(self, bits: u32) -> Self;

    /// Arithmetic (sign-extending) right shift.
    fn shift_right(self, bits: u32) -> Self;

    fn simd_eq(self, other: Self) -> Self::Mask;
    fn simd_lt(self, other: Self) -> Self::Mask;
    fn simd_gt(self, other: Self) -> Self::Mask;

    /// Lane-wise `if mask { on_true } else { on_false }`.
    fn select(mask: Self::Mask, on_true: Self, on_false: Self) -> Self;

    fn min(self, other: Self) -> Self;
    fn max(self, other: Self) -> Self;
}

/// Floating-point lane group.
pub trait Lane:
    Copy
    + Debug
    + PartialEq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + Send
    + Sync
    + 'static
{
    /// Element type of each lane.
    type Scalar: Real;
    /// Integer lane of the same width, sharing the mask type.
    type Int: IntLane<Mask = Self::Mask>;
    type Mask: Mask;

    const LANES: usize;

    fn splat(value: Self::Scalar) -> Self;

    /// Loads the first `LANES` elements of `slice`.
    ///
    /// # Panics
    ///
    /// Panics if `slice` is shorter than `LANES`.
    fn load(slice: &[Self::Scalar]) -> Self;

    /// Stores every lane into the first `LANES` elements of `slice`.
    ///
    /// # Panics
    ///
    /// Panics if `slice` is shorter than `LANES`.
    fn store(self, slice: &mut [Self::Scalar]);

    fn extract(self, index: usize) -> Self::Scalar;

    /// Fused `self * a + b`, rounded once.
    fn mul_add(self, a: Self, b: Self) -> Self;

    fn sqrt(self) -> Self;
    fn floor(self) -> Self;

    /// Rounds half-way cases away from zero.
    fn round(self) -> Self;

    fn min(self, other: Self) -> Self;
    fn max(self, other: Self) -> Self;

    fn simd_eq(self, other: Self) -> Self::Mask;
    fn simd_lt(self, other: Self) -> Self::Mask;
    fn simd_le(self, other: Self) -> Self::Mask;
    fn simd_gt(self, other: Self) -> Self::Mask;
    fn simd_ge(self, other: Self) -> Self::Mask;

    /// Lane-wise `if mask { on_true } else { on_false }`.
    fn select(mask: Self::Mask, on_true: Self, on_false: Self) -> Self;

    fn to_bits(self) -> Self::Int;
    fn from_bits(bits: Self::Int) -> Self;

    /// Truncating conversion, saturating at the integer range. NaN maps to 0.
    fn to_int(self) -> Self::Int;
    fn from_int(value: Self::Int) -> Self;

    fn reduce_max(self) -> Self::Scalar;
    fn reduce_min(self) -> Self::Scalar;

    /// Broadcasts an `f64` literal rounded to the element precision.
    #[inline(always)]
    fn constant(value: f64) -> Self {
        Self::splat(<Self::Scalar as Real>::cast(value))
    }

    #[inline(always)]
    fn zero() -> Self {
        Self::constant(0.0)
    }

    #[inline(always)]
    fn one() -> Self {
        Self::constant(1.0)
    }

    #[inline(always)]
    fn is_nan(self) -> Self::Mask {
        !self.simd_eq(self)
    }
}

/// Scalar element type: `f32` or `f64`.
pub trait Real: Lane<Scalar = Self, Mask = bool> + PartialOrd + Default + Display {
    /// Widest lane group natural for the build target.
    type Native: Lane<Scalar = Self>;

    /// Explicit mantissa bits.
    const MANTISSA_BITS: u32;
    const EXPONENT_BIAS: i64;
    /// All-ones value of the biased exponent field.
    const EXPONENT_FIELD: i64;
    const SIGN_MASK: i64;
    const ABS_MASK: i64;
    const NOT_EXPONENT_MASK: i64;

    const EPSILON: Self;
    const INFINITY: Self;
    const NEG_INFINITY: Self;
    const NAN: Self;

    /// Two-part `ln 2`, high part exact when multiplied by a reduction integer.
    const LN2_HI: Self;
    const LN2_LO: Self;
    /// Two-part `log10 2`.
    const LOG10_2_HI: Self;
    const LOG10_2_LO: Self;
    /// `π/2` minus its rounded value, in two parts.
    const FRAC_PI_2_MID: Self;
    const FRAC_PI_2_LO: Self;

    /// Magnitude beyond which `exp2` saturates.
    const EXP2_CLAMP: Self;
    /// Argument beyond which `erfc` underflows to zero.
    const ERFC_MAX: Self;
    /// Integral exponents below this magnitude go through repeated squaring.
    const POWN_LIMIT: Self;

    /// `2^x` on `[-1/2, 1/2]`.
    const EXP2WC: &'static [Self];
    /// `(e^x - 1) / x` on `[-ln2/2, ln2/2]`.
    const EXPM1WC: Rational<Self>;
    /// `log2((1 + t) / (1 - t)) / t` in `t²` for mantissas in `[√½, √2]`.
    const LOG2WC: &'static [Self];
    /// `sin(x) / x` in `x²` on `[-π/4, π/4]`.
    const SINWC: &'static [Self];
    /// `cos(x)` in `x²` on `[-π/4, π/4]`.
    const COSWC: &'static [Self];
    /// `atan(x) / x` in `x²` on `[-1, 1]`.
    const ATANWC: Rational<Self>;
    /// `erf(x) / x` in `x²` on `[-1, 1]`.
    const ERFWC: Rational<Self>;
    /// `x e^(x²) erfc(x)` in `1/x` on `[1, ∞)`.
    const ERFCWC: Rational<Self>;

    fn cast(value: f64) -> Self;
    fn to_f64(self) -> f64;
}
