//! Width-one lane groups: the plain `f32`/`f64` scalars and their `i32`/`i64`
//! companions.

use num::traits::AsPrimitive;

use super::traits::{IntLane, Lane, Mask, Real};
use super::{NativeF32, NativeF64};
use crate::math::coefficients;
use crate::math::poly::Rational;

impl Mask for bool {
    #[inline(always)]
    fn any(self) -> bool {
        self
    }

    #[inline(always)]
    fn all(self) -> bool {
        self
    }
}

macro_rules! impl_int_lane {
    ($int:ty) => {
        impl IntLane for $int {
            type Mask = bool;

            const LANES: usize = 1;

            #[inline(always)]
            fn splat(value: i64) -> Self {
                value as $int
            }

            #[inline(always)]
            fn extract(self, _index: usize) -> i64 {
                self as i64
            }

            #[inline(always)]
            fn shift_left(self, bits: u32) -> Self {
                self << bits
            }

            #[inline(always)]
            fn shift_right(self, bits: u32) -> Self {
                self >> bits
            }

            #[inline(always)]
            fn simd_eq(self, other: Self) -> bool {
                self == other
            }

            #[inline(always)]
            fn simd_lt(self, other: Self) -> bool {
                self < other
            }

            #[inline(always)]
            fn simd_gt(self, other: Self) -> bool {
                self > other
            }

            #[inline(always)]
            fn select(mask: bool, on_true: Self, on_false: Self) -> Self {
                if mask {
                    on_true
                } else {
                    on_false
                }
            }

            #[inline(always)]
            fn min(self, other: Self) -> Self {
                Ord::min(self, other)
            }

            #[inline(always)]
            fn max(self, other: Self) -> Self {
                Ord::max(self, other)
            }
        }
    };
}

impl_int_lane!(i32);
impl_int_lane!(i64);

macro_rules! impl_scalar_lane {
    ($float:ident, $int:ty, $uint:ty) => {
        impl Lane for $float {
            type Scalar = $float;
            type Int = $int;
            type Mask = bool;

            const LANES: usize = 1;

            #[inline(always)]
            fn splat(value: $float) -> Self {
                value
            }

            #[inline(always)]
            fn load(slice: &[$float]) -> Self {
                slice[0]
            }

            #[inline(always)]
            fn store(self, slice: &mut [$float]) {
                slice[0] = self;
            }

            #[inline(always)]
            fn extract(self, _index: usize) -> $float {
                self
            }

            #[inline(always)]
            fn mul_add(self, a: Self, b: Self) -> Self {
                $float::mul_add(self, a, b)
            }

            #[inline(always)]
            fn sqrt(self) -> Self {
                $float::sqrt(self)
            }

            #[inline(always)]
            fn floor(self) -> Self {
                $float::floor(self)
            }

            #[inline(always)]
            fn round(self) -> Self {
                $float::round(self)
            }

            #[inline(always)]
            fn min(self, other: Self) -> Self {
                $float::min(self, other)
            }

            #[inline(always)]
            fn max(self, other: Self) -> Self {
                $float::max(self, other)
            }

            #[inline(always)]
            fn simd_eq(self, other: Self) -> bool {
                self == other
            }

            #[inline(always)]
            fn simd_lt(self, other: Self) -> bool {
                self < other
            }

            #[inline(always)]
            fn simd_le(self, other: Self) -> bool {
                self <= other
            }

            #[inline(always)]
            fn simd_gt(self, other: Self) -> bool {
                self > other
            }

            #[inline(always)]
            fn simd_ge(self, other: Self) -> bool {
                self >= other
            }

            #[inline(always)]
            fn select(mask: bool, on_true: Self, on_false: Self) -> Self {
                if mask {
                    on_true
                } else {
                    on_false
                }
            }

            #[inline(always)]
            fn to_bits(self) -> $int {
                $float::to_bits(self) as $int
            }

            #[inline(always)]
            fn from_bits(bits: $int) -> Self {
                $float::from_bits(bits as $uint)
            }

            #[inline(always)]
            fn to_int(self) -> $int {
                self as $int
            }

            #[inline(always)]
            fn from_int(value: $int) -> Self {
                value as $float
            }

            #[inline(always)]
            fn reduce_max(self) -> $float {
                self
            }

            #[inline(always)]
            fn reduce_min(self) -> $float {
                self
            }
        }
    };
}

impl_scalar_lane!(f32, i32, u32);
impl_scalar_lane!(f64, i64, u64);

impl Real for f32 {
    type Native = NativeF32;

    const MANTISSA_BITS: u32 = 23;
    const EXPONENT_BIAS: i64 = 127;
    const EXPONENT_FIELD: i64 = 0xff;
    const SIGN_MASK: i64 = 0x8000_0000;
    const ABS_MASK: i64 = 0x7fff_ffff;
    const NOT_EXPONENT_MASK: i64 = 0x807f_ffff;

    const EPSILON: f32 = f32::EPSILON;
    const INFINITY: f32 = f32::INFINITY;
    const NEG_INFINITY: f32 = f32::NEG_INFINITY;
    const NAN: f32 = f32::NAN;

    const LN2_HI: f32 = 0.693_145_75;
    const LN2_LO: f32 = 1.428_606_8e-6;
    const LOG10_2_HI: f32 = 0.301_025_39;
    const LOG10_2_LO: f32 = 4.605_039e-6;
    const FRAC_PI_2_MID: f32 = -4.371_138_8e-8;
    const FRAC_PI_2_LO: f32 = -1.715_124_5e-15;

    const EXP2_CLAMP: f32 = 300.0;
    const ERFC_MAX: f32 = 10.054_195;
    const POWN_LIMIT: f32 = 16_777_216.0;

    const EXP2WC: &'static [f32] = &coefficients::binary32::EXP2WC;
    const EXPM1WC: Rational<f32> = Rational::new(&coefficients::binary32::EXPM1WC, 3);
    const LOG2WC: &'static [f32] = &coefficients::binary32::LOG2WC;
    const SINWC: &'static [f32] = &coefficients::binary32::SINWC;
    const COSWC: &'static [f32] = &coefficients::binary32::COSWC;
    const ATANWC: Rational<f32> = Rational::new(&coefficients::binary32::ATANWC, 3);
    const ERFWC: Rational<f32> = Rational::new(&coefficients::binary32::ERFWC, 3);
    const ERFCWC: Rational<f32> = Rational::new(&coefficients::binary32::ERFCWC, 5);

    #[inline(always)]
    fn cast(value: f64) -> f32 {
        value.as_()
    }

    #[inline(always)]
    fn to_f64(self) -> f64 {
        self.as_()
    }
}

impl Real for f64 {
    type Native = NativeF64;

    const MANTISSA_BITS: u32 = 52;
    const EXPONENT_BIAS: i64 = 1023;
    const EXPONENT_FIELD: i64 = 0x7ff;
    const SIGN_MASK: i64 = i64::MIN;
    const ABS_MASK: i64 = i64::MAX;
    const NOT_EXPONENT_MASK: i64 = !0x7ff0_0000_0000_0000;

    const EPSILON: f64 = f64::EPSILON;
    const INFINITY: f64 = f64::INFINITY;
    const NEG_INFINITY: f64 = f64::NEG_INFINITY;
    const NAN: f64 = f64::NAN;

    const LN2_HI: f64 = 0.693_147_180_560_117_7;
    const LN2_LO: f64 = -1.723_944_452_561_483_5e-13;
    const LOG10_2_HI: f64 = 0.301_029_995_664_066_5;
    const LOG10_2_LO: f64 = -8.532_344_317_057_107e-14;
    const FRAC_PI_2_MID: f64 = 6.123_233_995_736_766e-17;
    const FRAC_PI_2_LO: f64 = -1.497_384_904_859_169_8e-33;

    const EXP2_CLAMP: f64 = 2200.0;
    const ERFC_MAX: f64 = 27.226_017_111_108_364;
    const POWN_LIMIT: f64 = 9_007_199_254_740_992.0;

    const EXP2WC: &'static [f64] = &coefficients::binary64::EXP2WC;
    const EXPM1WC: Rational<f64> = Rational::new(&coefficients::binary64::EXPM1WC, 5);
    const LOG2WC: &'static [f64] = &coefficients::binary64::LOG2WC;
    const SINWC: &'static [f64] = &coefficients::binary64::SINWC;
    const COSWC: &'static [f64] = &coefficients::binary64::COSWC;
    const ATANWC: Rational<f64> = Rational::new(&coefficients::binary64::ATANWC, 6);
    const ERFWC: Rational<f64> = Rational::new(&coefficients::binary64::ERFWC, 5);
    const ERFCWC: Rational<f64> = Rational::new(&coefficients::binary64::ERFCWC, 10);

    #[inline(always)]
    fn cast(value: f64) -> f64 {
        value
    }

    #[inline(always)]
    fn to_f64(self) -> f64 {
        self
    }
}
