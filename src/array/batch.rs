//! Elementwise math over whole containers.

use ndarray::{Array1, ArrayBase, Data, Ix1};
use rayon::prelude::*;

use super::kernels::{self, UnaryKernel};
use super::unary_lanes;
use crate::simd::Real;
use crate::{PARALLEL_CHUNK_SIZE, PARALLEL_THRESHOLD};

macro_rules! batch_methods {
    ($($(#[$doc:meta])* $name:ident, $par:ident => $kernel:ident;)*) => {
        $(
            $(#[$doc])*
            #[inline]
            fn $name(&self) -> Self::Output {
                self.batch(kernels::$kernel)
            }

            #[inline]
            fn $par(&self) -> Self::Output {
                self.par_batch(kernels::$kernel)
            }
        )*
    };
}

/// Elementwise math over slices, vectors and 1-D arrays.
///
/// Every method has a `par_` twin that spreads large inputs over the rayon
/// thread pool.
///
/// ```rust
/// use jbm::BatchMath;
///
/// let x = vec![0.0f32, 1.0, 2.0];
/// let y = x.exp();
/// assert_eq!(y[0], 1.0);
/// ```
pub trait BatchMath<T: Real> {
    type Output;

    /// Applies `kernel` to every element.
    fn batch<K: UnaryKernel + Sync>(&self, kernel: K) -> Self::Output;

    /// Parallel [`batch`](BatchMath::batch).
    fn par_batch<K: UnaryKernel + Sync>(&self, kernel: K) -> Self::Output;

    batch_methods!(
        /// `|x|`.
        abs, par_abs => Abs;
        /// `e^x`.
        exp, par_exp => Exp;
        /// `2^x`.
        exp2, par_exp2 => Exp2;
        /// `10^x`.
        exp10, par_exp10 => Exp10;
        /// `e^x - 1`.
        expm1, par_expm1 => Expm1;
        /// Natural logarithm.
        ln, par_ln => Log;
        /// Base-2 logarithm.
        log2, par_log2 => Log2;
        /// Base-10 logarithm.
        log10, par_log10 => Log10;
        /// `ln(1 + x)`.
        ln_1p, par_ln_1p => Log1p;
        /// Cube root.
        cbrt, par_cbrt => Cbrt;
        sin, par_sin => Sin;
        cos, par_cos => Cos;
        tan, par_tan => Tan;
        atan, par_atan => Atan;
        asin, par_asin => Asin;
        acos, par_acos => Acos;
        sinh, par_sinh => Sinh;
        cosh, par_cosh => Cosh;
        tanh, par_tanh => Tanh;
        asinh, par_asinh => Asinh;
        acosh, par_acosh => Acosh;
        atanh, par_atanh => Atanh;
        /// Error function.
        erf, par_erf => Erf;
        /// Complementary error function.
        erfc, par_erfc => Erfc;
    );
}

impl<T: Real> BatchMath<T> for [T] {
    type Output = Vec<T>;

    fn batch<K: UnaryKernel + Sync>(&self, kernel: K) -> Vec<T> {
        let mut out = vec![T::default(); self.len()];
        unary_lanes(self, &mut out, |v| kernel.apply(v), |x| kernel.apply(x));
        out
    }

    fn par_batch<K: UnaryKernel + Sync>(&self, kernel: K) -> Vec<T> {
        if self.len() < PARALLEL_THRESHOLD {
            return self.batch(kernel);
        }
        let mut out = vec![T::default(); self.len()];
        out.par_chunks_mut(PARALLEL_CHUNK_SIZE)
            .zip(self.par_chunks(PARALLEL_CHUNK_SIZE))
            .for_each(|(o, i)| unary_lanes(i, o, |v| kernel.apply(v), |x| kernel.apply(x)));
        out
    }
}

impl<T, S> BatchMath<T> for ArrayBase<S, Ix1>
where
    T: Real,
    S: Data<Elem = T>,
{
    type Output = Array1<T>;

    fn batch<K: UnaryKernel + Sync>(&self, kernel: K) -> Array1<T> {
        match self.as_slice() {
            Some(slice) => Array1::from(slice.batch(kernel)),
            None => self.mapv(|x| kernel.apply(x)),
        }
    }

    fn par_batch<K: UnaryKernel + Sync>(&self, kernel: K) -> Array1<T> {
        match self.as_slice() {
            Some(slice) => Array1::from(slice.par_batch(kernel)),
            // strided views, reversed ones included, are gathered contiguously first
            None => {
                let gathered: Vec<T> = self.iter().copied().collect();
                Array1::from(gathered.par_batch(kernel))
            }
        }
    }
}
