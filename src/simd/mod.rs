//! Lane groups: the numeric capability every kernel is written against.
//!
//! The build script detects the widest vector unit of the host and enables one
//! of the `avx512`, `avx2`, `sse`, `neon` or `fallback` configuration flags.
//! That flag only decides the width of [`NativeF32`] and [`NativeF64`], the
//! groups used by the array operators; every width stays available to callers.

mod packed;
mod scalar;
pub mod traits;

pub use packed::{F32x16, F32x4, F32x8, F64x2, F64x4, F64x8, Pack};
pub use traits::{IntLane, Lane, Mask, Real};

/// Natural single-precision group for the build target.
#[cfg(avx512)]
pub type NativeF32 = F32x16;
/// Natural double-precision group for the build target.
#[cfg(avx512)]
pub type NativeF64 = F64x8;

/// Natural single-precision group for the build target.
#[cfg(avx2)]
pub type NativeF32 = F32x8;
/// Natural double-precision group for the build target.
#[cfg(avx2)]
pub type NativeF64 = F64x4;

/// Natural single-precision group for the build target.
#[cfg(not(any(avx512, avx2)))]
pub type NativeF32 = F32x4;
/// Natural double-precision group for the build target.
#[cfg(not(any(avx512, avx2)))]
pub type NativeF64 = F64x2;
