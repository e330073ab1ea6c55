//! Horner evaluation of polynomial and rational approximations.
//!
//! Coefficients are stored lowest degree first. A rational table holds the
//! numerator coefficients followed by the denominator coefficients *without*
//! its constant term, which is always one:
//!
//! ```text
//! p[0] + x p[1] + ... + x^m p[m]
//! ------------------------------------------
//! 1 + x (p[m+1] + x p[m+2] + ... + x^(n-1) p[m+n])
//! ```

use crate::simd::Lane;

/// Rational approximation table with its numerator degree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rational<S: 'static> {
    pub coefficients: &'static [S],
    pub numerator_degree: usize,
}

impl<S> Rational<S> {
    pub const fn new(coefficients: &'static [S], numerator_degree: usize) -> Self {
        Rational {
            coefficients,
            numerator_degree,
        }
    }

    /// Splits the table into numerator and denominator coefficients.
    #[inline(always)]
    pub fn split(&self) -> (&'static [S], &'static [S]) {
        let split = (self.numerator_degree + 1).min(self.coefficients.len());
        self.coefficients.split_at(split)
    }
}

/// Evaluates `p[0] + x (p[1] + x (p[2] + ...))` with one fused multiply-add per
/// degree. An empty table evaluates to zero.
#[inline(always)]
pub fn polynomial<L: Lane>(x: L, p: &[L::Scalar]) -> L {
    match p.split_last() {
        Some((&last, rest)) => rest
            .iter()
            .rev()
            .fold(L::splat(last), |acc, &c| acc.mul_add(x, L::splat(c))),
        None => L::zero(),
    }
}

/// Evaluates a rational table at `x`.
#[inline(always)]
pub fn rational<L: Lane>(x: L, table: &Rational<L::Scalar>) -> L {
    let (numerator, denominator) = table.split();
    polynomial(x, numerator) / polynomial(x, denominator).mul_add(x, L::one())
}
