//! Zero-sized kernels naming the lane-generic functions of [`math`](crate::math).

use crate::math;
use crate::simd::Lane;

/// One-argument lane function usable at every width.
pub trait UnaryKernel {
    fn apply<L: Lane>(&self, x: L) -> L;
}

/// Two-argument lane function usable at every width.
pub trait BinaryKernel {
    fn apply<L: Lane>(&self, a: L, b: L) -> L;
}

macro_rules! unary_kernels {
    ($($(#[$doc:meta])* $name:ident => $function:path),* $(,)?) => {
        $(
            $(#[$doc])*
            #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
            pub struct $name;

            impl UnaryKernel for $name {
                #[inline(always)]
                fn apply<L: Lane>(&self, x: L) -> L {
                    $function(x)
                }
            }
        )*
    };
}

macro_rules! binary_kernels {
    ($($(#[$doc:meta])* $name:ident => |$a:ident, $b:ident| $body:expr),* $(,)?) => {
        $(
            $(#[$doc])*
            #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
            pub struct $name;

            impl BinaryKernel for $name {
                #[inline(always)]
                fn apply<L: Lane>(&self, $a: L, $b: L) -> L {
                    $body
                }
            }
        )*
    };
}

unary_kernels!(
    Abs => math::abs,
    Dbl => math::dbl,
    Sqr => math::sqr,
    Exp => math::exp,
    Exp2 => math::exp2,
    Exp10 => math::exp10,
    Expm1 => math::expm1,
    Log => math::log,
    Log2 => math::log2,
    Log10 => math::log10,
    Log1p => math::log1p,
    Cbrt => math::cbrt,
    Sin => math::sin,
    Cos => math::cos,
    Tan => math::tan,
    Atan => math::atan,
    Asin => math::asin,
    Acos => math::acos,
    Sinh => math::sinh,
    Cosh => math::cosh,
    Tanh => math::tanh,
    Asinh => math::asinh,
    Acosh => math::acosh,
    Atanh => math::atanh,
    Erf => math::erf,
    Erfc => math::erfc,
);

binary_kernels!(
    Add => |a, b| a + b,
    Sub => |a, b| a - b,
    Mul => |a, b| a * b,
    Div => |a, b| a / b,
    Pow => |a, b| math::pow(a, b),
    Atan2 => |a, b| math::atan2(a, b),
);
