//! Batch operators over slices and 1-D arrays.
//!
//! The operators walk their input in [`Real::Native`] lane groups and finish
//! the remaining elements one at a time with the scalar instantiation of the
//! same kernel, so every element gets bit-identical results whatever its
//! position. The `par_*` variants split arrays of at least
//! [`PARALLEL_THRESHOLD`] elements into [`PARALLEL_CHUNK_SIZE`] chunks handled
//! by the rayon thread pool.
//!
//! # Kernels
//!
//! A kernel is a zero-sized type naming one lane-generic function, which lets
//! the same operator run it at every width:
//!
//! ```rust
//! use jbm::array::{map, kernels::Sin};
//!
//! let input = [0.0f64, 0.5, 1.0, 1.5, 2.0];
//! let mut output = [0.0; 5];
//! map(&Sin, &input, &mut output).unwrap();
//! assert_eq!(output[0], 0.0);
//! ```

mod batch;
pub mod kernels;
mod ops;

use log::trace;
use rayon::prelude::*;

use crate::error::{validation_error, Result};
use crate::simd::{Lane, Real};
use crate::{PARALLEL_CHUNK_SIZE, PARALLEL_THRESHOLD};

pub use batch::BatchMath;
pub use kernels::{BinaryKernel, UnaryKernel};
pub use ops::{
    add, add_scalar, dbl, div, div_scalar, max, maxmin, min, mul, mul_scalar, par_add,
    par_add_scalar, par_dbl, par_div, par_div_scalar, par_mul, par_mul_scalar, par_sqr, par_sub,
    par_sub_scalar, sqr, sub, sub_scalar,
};

pub(crate) fn check_len(expected: usize, actual: usize, what: &str) -> Result<()> {
    if expected != actual {
        return Err(validation_error(format!(
            "{what} has {actual} elements, expected {expected}"
        )));
    }
    Ok(())
}

/// Applies `vector` to every full lane group of `input` and `scalar` to the
/// tail. `output` must be at least as long as `input`.
#[inline(always)]
pub(crate) fn unary_lanes<T, V, S>(input: &[T], output: &mut [T], vector: V, scalar: S)
where
    T: Real,
    V: Fn(T::Native) -> T::Native,
    S: Fn(T) -> T,
{
    let lanes = <T::Native as Lane>::LANES;
    let mut inputs = input.chunks_exact(lanes);
    let mut outputs = output[..input.len()].chunks_exact_mut(lanes);
    for (i, o) in (&mut inputs).zip(&mut outputs) {
        vector(T::Native::load(i)).store(o);
    }
    for (x, y) in inputs.remainder().iter().zip(outputs.into_remainder()) {
        *y = scalar(*x);
    }
}

/// Two-input version of [`unary_lanes`]; `b` and `output` must be at least as
/// long as `a`.
#[inline(always)]
pub(crate) fn binary_lanes<T, V, S>(a: &[T], b: &[T], output: &mut [T], vector: V, scalar: S)
where
    T: Real,
    V: Fn(T::Native, T::Native) -> T::Native,
    S: Fn(T, T) -> T,
{
    let lanes = <T::Native as Lane>::LANES;
    let n = a.len();
    let mut a_chunks = a.chunks_exact(lanes);
    let mut b_chunks = b[..n].chunks_exact(lanes);
    let mut outputs = output[..n].chunks_exact_mut(lanes);
    for ((x, y), o) in (&mut a_chunks).zip(&mut b_chunks).zip(&mut outputs) {
        vector(T::Native::load(x), T::Native::load(y)).store(o);
    }
    let tail = a_chunks.remainder().iter().zip(b_chunks.remainder());
    for ((x, y), o) in tail.zip(outputs.into_remainder()) {
        *o = scalar(*x, *y);
    }
}

/// Writes `kernel(input[i])` into `output[i]`.
pub fn map<T: Real, K: UnaryKernel>(kernel: &K, input: &[T], output: &mut [T]) -> Result<()> {
    check_len(input.len(), output.len(), "output")?;
    unary_lanes(input, output, |v| kernel.apply(v), |x| kernel.apply(x));
    Ok(())
}

/// Parallel [`map`].
pub fn par_map<T, K>(kernel: &K, input: &[T], output: &mut [T]) -> Result<()>
where
    T: Real,
    K: UnaryKernel + Sync,
{
    check_len(input.len(), output.len(), "output")?;
    if input.len() < PARALLEL_THRESHOLD {
        unary_lanes(input, output, |v| kernel.apply(v), |x| kernel.apply(x));
        return Ok(());
    }

    trace!(
        "parallel map over {} elements in chunks of {}",
        input.len(),
        PARALLEL_CHUNK_SIZE
    );
    output
        .par_chunks_mut(PARALLEL_CHUNK_SIZE)
        .zip(input.par_chunks(PARALLEL_CHUNK_SIZE))
        .for_each(|(o, i)| unary_lanes(i, o, |v| kernel.apply(v), |x| kernel.apply(x)));
    Ok(())
}

/// Writes `kernel(a[i], b[i])` into `output[i]`.
pub fn zip_map<T: Real, K: BinaryKernel>(
    kernel: &K,
    a: &[T],
    b: &[T],
    output: &mut [T],
) -> Result<()> {
    check_len(a.len(), b.len(), "second operand")?;
    check_len(a.len(), output.len(), "output")?;
    binary_lanes(
        a,
        b,
        output,
        |x, y| kernel.apply(x, y),
        |x, y| kernel.apply(x, y),
    );
    Ok(())
}

/// Parallel [`zip_map`].
pub fn par_zip_map<T, K>(kernel: &K, a: &[T], b: &[T], output: &mut [T]) -> Result<()>
where
    T: Real,
    K: BinaryKernel + Sync,
{
    check_len(a.len(), b.len(), "second operand")?;
    check_len(a.len(), output.len(), "output")?;
    if a.len() < PARALLEL_THRESHOLD {
        binary_lanes(a, b, output, |x, y| kernel.apply(x, y), |x, y| kernel.apply(x, y));
        return Ok(());
    }

    trace!(
        "parallel zip over {} elements in chunks of {}",
        a.len(),
        PARALLEL_CHUNK_SIZE
    );
    output
        .par_chunks_mut(PARALLEL_CHUNK_SIZE)
        .zip(a.par_chunks(PARALLEL_CHUNK_SIZE))
        .zip(b.par_chunks(PARALLEL_CHUNK_SIZE))
        .for_each(|((o, x), y)| {
            binary_lanes(x, y, o, |p, q| kernel.apply(p, q), |p, q| kernel.apply(p, q))
        });
    Ok(())
}
