//! # jbm
//!
//! Vectorizable elementary and special functions for numerical schemes.
//!
//! Every kernel in [`math`] is written once against the [`Lane`] capability and
//! runs on plain `f32`/`f64` as well as on lane groups of 2 to 16 values
//! ([`Pack`]). Lanes never interact, so a group computes exactly what the
//! scalar instantiation computes for each of its elements.
//!
//! - [`math`]: exponentials, logarithms, powers, circular and hyperbolic
//!   functions, error functions, polynomial roots, flux limiters and
//!   Gauss–Legendre quadrature
//! - [`array`]: the same kernels over slices, vectors and 1-D `ndarray`
//!   arrays, with rayon-parallel variants
//! - [`axis`]: round tic steps for plot axes
//!
//! ```rust
//! use jbm::{math, BatchMath, F32x8, Lane};
//!
//! let x = F32x8::splat(0.5);
//! let y = math::erf(x);
//! assert_eq!(y.extract(3), math::erf(0.5f32));
//!
//! let samples = vec![0.25f64; 100];
//! let logs = samples.ln();
//! assert!((logs[99] + 2f64.ln() * 2.0).abs() < 1e-12);
//! ```

pub mod array;
pub mod axis;
pub mod error;
pub mod math;
pub mod simd;

pub use array::BatchMath;
pub use axis::{tics, Tics};
pub use error::{JbmError, Result};
pub use math::FluxLimiter;
pub use simd::{
    F32x16, F32x4, F32x8, F64x2, F64x4, F64x8, IntLane, Lane, Mask, NativeF32, NativeF64, Pack,
    Real,
};

/// Minimum number of elements for the `par_*` operators to use the thread pool.
pub const PARALLEL_THRESHOLD: usize = 262_144;

/// Elements handed to one rayon task, a multiple of every lane width.
pub const PARALLEL_CHUNK_SIZE: usize = 16_384;
