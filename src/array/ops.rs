//! Elementwise arithmetic and reductions over slices.

use log::debug;
use rayon::prelude::*;

use super::kernels::{self, BinaryKernel, UnaryKernel};
use super::{par_map, par_zip_map, unary_lanes, zip_map};
use crate::error::{validation_error, Result};
use crate::simd::{Lane, Real};
use crate::{PARALLEL_CHUNK_SIZE, PARALLEL_THRESHOLD};

fn binary<T: Real, K: BinaryKernel>(kernel: K, a: &[T], b: &[T]) -> Result<Vec<T>> {
    let mut c = vec![T::default(); a.len()];
    zip_map(&kernel, a, b, &mut c)?;
    Ok(c)
}

fn par_binary<T: Real, K: BinaryKernel + Sync>(kernel: K, a: &[T], b: &[T]) -> Result<Vec<T>> {
    let mut c = vec![T::default(); a.len()];
    par_zip_map(&kernel, a, b, &mut c)?;
    Ok(c)
}

fn unary<T: Real, K: UnaryKernel + Sync>(kernel: K, a: &[T], parallel: bool) -> Vec<T> {
    let mut c = vec![T::default(); a.len()];
    let filled = if parallel {
        par_map(&kernel, a, &mut c)
    } else {
        super::map(&kernel, a, &mut c)
    };
    debug_assert!(filled.is_ok());
    c
}

macro_rules! binary_ops {
    ($($(#[$doc:meta])* $name:ident, $par:ident => $kernel:ident;)*) => {
        $(
            $(#[$doc])*
            ///
            /// # Errors
            ///
            /// Returns a validation error when `a` and `b` differ in length.
            pub fn $name<T: Real>(a: &[T], b: &[T]) -> Result<Vec<T>> {
                binary(kernels::$kernel, a, b)
            }

            /// Parallel version of the operator of the same name.
            pub fn $par<T: Real>(a: &[T], b: &[T]) -> Result<Vec<T>> {
                par_binary(kernels::$kernel, a, b)
            }
        )*
    };
}

binary_ops!(
    /// Elementwise `a + b`.
    add, par_add => Add;
    /// Elementwise `a - b`.
    sub, par_sub => Sub;
    /// Elementwise `a * b`.
    mul, par_mul => Mul;
    /// Elementwise `a / b`.
    div, par_div => Div;
);

macro_rules! scalar_ops {
    ($($(#[$doc:meta])* $name:ident, $par:ident => |$x:ident, $s:ident| $body:expr;)*) => {
        $(
            $(#[$doc])*
            pub fn $name<T: Real>(a: &[T], s: T) -> Vec<T> {
                scalar_op(a, s, false, |$x, $s| $body, |$x, $s| $body)
            }

            /// Parallel version of the operator of the same name.
            pub fn $par<T: Real>(a: &[T], s: T) -> Vec<T> {
                scalar_op(a, s, true, |$x, $s| $body, |$x, $s| $body)
            }
        )*
    };
}

/// Broadcasts `s` once per lane width and applies `vector`/`scalar` with it.
fn scalar_op<T, V, S>(a: &[T], s: T, parallel: bool, vector: V, scalar: S) -> Vec<T>
where
    T: Real,
    V: Fn(T::Native, T::Native) -> T::Native + Sync,
    S: Fn(T, T) -> T + Sync,
{
    let mut c = vec![T::default(); a.len()];
    let wide = T::Native::splat(s);
    let vector = |x| vector(x, wide);
    let scalar = |x| scalar(x, s);
    if parallel && a.len() >= PARALLEL_THRESHOLD {
        c.par_chunks_mut(PARALLEL_CHUNK_SIZE)
            .zip(a.par_chunks(PARALLEL_CHUNK_SIZE))
            .for_each(|(o, i)| unary_lanes(i, o, vector, scalar));
    } else {
        unary_lanes(a, &mut c, vector, scalar);
    }
    c
}

scalar_ops!(
    /// `a[i] + s`.
    add_scalar, par_add_scalar => |x, s| x + s;
    /// `a[i] - s`.
    sub_scalar, par_sub_scalar => |x, s| x - s;
    /// `a[i] * s`.
    mul_scalar, par_mul_scalar => |x, s| x * s;
    /// `a[i] / s`.
    div_scalar, par_div_scalar => |x, s| x / s;
);

/// `2 a[i]`.
pub fn dbl<T: Real>(a: &[T]) -> Vec<T> {
    unary(kernels::Dbl, a, false)
}

/// Parallel [`dbl`].
pub fn par_dbl<T: Real>(a: &[T]) -> Vec<T> {
    unary(kernels::Dbl, a, true)
}

/// `a[i]²`.
pub fn sqr<T: Real>(a: &[T]) -> Vec<T> {
    unary(kernels::Sqr, a, false)
}

/// Parallel [`sqr`].
pub fn par_sqr<T: Real>(a: &[T]) -> Vec<T> {
    unary(kernels::Sqr, a, true)
}

fn non_empty<T>(a: &[T]) -> Result<()> {
    if a.is_empty() {
        debug!("reduction over an empty slice rejected");
        return Err(validation_error("cannot reduce an empty slice"));
    }
    Ok(())
}

/// Largest and smallest element. NaN elements are ignored, so a slice holding
/// only NaN gives `(-∞, +∞)`.
///
/// # Errors
///
/// Returns a validation error when `a` is empty.
pub fn maxmin<T: Real>(a: &[T]) -> Result<(T, T)> {
    non_empty(a)?;
    let lanes = <T::Native as Lane>::LANES;
    let chunks = a.chunks_exact(lanes);
    let tail = chunks.remainder();

    let mut hi = T::Native::splat(a[0]);
    let mut lo = hi;
    for chunk in chunks {
        let v = T::Native::load(chunk);
        hi = hi.max(v);
        lo = lo.min(v);
    }

    let (mut hi, mut lo) = (hi.reduce_max(), lo.reduce_min());
    for &x in tail {
        hi = hi.max(x);
        lo = lo.min(x);
    }
    Ok((hi, lo))
}

/// Largest element, see [`maxmin`].
pub fn max<T: Real>(a: &[T]) -> Result<T> {
    maxmin(a).map(|(hi, _)| hi)
}

/// Smallest element, see [`maxmin`].
pub fn min<T: Real>(a: &[T]) -> Result<T> {
    maxmin(a).map(|(_, lo)| lo)
}
