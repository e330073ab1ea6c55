//! Lane-generic numeric kernels.
//!
//! Every function here is written once against [`Lane`](crate::Lane) and works
//! for `f32`, `f64` and every [`Pack`](crate::Pack) width. They are pure,
//! allocation-free and total: domain errors give NaN, range errors saturate to
//! signed zero or infinity, and nearly degenerate inputs fall back to a lower
//! order formula.
//!
//! Functions with a `wc` suffix ("well conditioned") are the raw
//! approximations: they are only accurate on the interval stated in their
//! documentation, and callers reduce their argument into it first.
//!
//! # Layers
//!
//! - [`bits`]: sign manipulation on the bit pattern
//! - [`poly`] and [`coefficients`]: Horner evaluators and their tables
//! - [`reduce`]: `frexp`, `ldexp`, `exp2n`, floored `fmod`
//! - [`exp`], [`log`], [`pow`]: elementary functions
//! - [`trig`], [`inverse`], [`hyperbolic`]: circular and hyperbolic functions
//! - [`erf`]: error function family
//! - [`solve`]: interval-constrained quadratic and cubic roots
//! - [`limiter`], [`quadrature`], [`interp`]: numerical scheme helpers
//!
//! # Example
//!
//! ```rust
//! use jbm::math::{exp, sin};
//! use jbm::{F64x2, Lane};
//!
//! let x = F64x2::from([0.0, 1.0]);
//! assert_eq!(exp(x).extract(0), 1.0);
//! assert_eq!(sin(0.0f32), 0.0);
//! ```

pub mod bits;
pub mod coefficients;
pub mod erf;
pub mod exp;
pub mod hyperbolic;
pub mod interp;
pub mod inverse;
pub mod limiter;
pub mod log;
pub mod poly;
pub mod pow;
pub mod quadrature;
pub mod reduce;
pub mod solve;
pub mod trig;

pub use self::bits::{abs, copysign, dbl, fmax, fmin, modmin, opposite, sign, small, sqr};
pub use self::erf::{erf, erfc, erfcwc, erfwc};
pub use self::exp::{exp, exp10, exp2, exp2wc, expm1};
pub use self::hyperbolic::{acosh, asinh, atanh, cosh, sinh, tanh};
pub use self::interp::{extrapolate, interpolate, v2_length, v3_length};
pub use self::inverse::{acos, asin, atan, atan2, atanwc};
pub use self::limiter::{flux_limiter_select, FluxLimiter};
pub use self::log::{log, log10, log1p, log2, log2wc};
pub use self::poly::{polynomial, rational, Rational};
pub use self::pow::{cbrt, pow, pown};
pub use self::quadrature::integral;
pub use self::reduce::{exp2n, fmod, frexp, ldexp};
pub use self::solve::{solve_cubic, solve_cubic_reduced, solve_quadratic, solve_quadratic_reduced};
pub use self::trig::{cos, coswc, sin, sincos, sincoswc, sinwc, tan};
