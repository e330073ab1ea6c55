//! Gauss–Legendre quadrature with 1 to 4 nodes.

#![allow(clippy::excessive_precision)]

use crate::simd::Lane;

/// Nodes of one rule on `[-1, 1]`: the weight of the centre node (zero when
/// the rule has none) and the symmetric `(abscissa, weight)` pairs.
struct GaussRule {
    centre: f64,
    pairs: &'static [(f64, f64)],
}

const RULES: [GaussRule; 4] = [
    GaussRule {
        centre: 2.0,
        pairs: &[],
    },
    GaussRule {
        centre: 0.0,
        pairs: &[(0.577_350_269_189_625_764_5, 1.0)],
    },
    GaussRule {
        centre: 8.0 / 9.0,
        pairs: &[(0.774_596_669_241_483_377, 5.0 / 9.0)],
    },
    GaussRule {
        centre: 0.0,
        pairs: &[
            (0.339_981_043_584_856_264_8, 0.652_145_154_862_546_142_6),
            (0.861_136_311_594_052_575_2, 0.347_854_845_137_453_857_4),
        ],
    },
];

/// Integral of `f` over `[x1, x2]` with the `N`-node Gauss–Legendre rule,
/// exact for polynomials up to degree `2N - 1`.
///
/// Each pair of symmetric nodes is evaluated once per side; `N` outside `1..=4`
/// is rejected at compile time.
#[inline]
pub fn integral<L, F, const N: usize>(f: F, x1: L, x2: L) -> L
where
    L: Lane,
    F: Fn(L) -> L,
{
    const { assert!(N >= 1 && N <= 4, "Gauss-Legendre rules exist for 1 to 4 nodes") };

    let rule = &RULES[N - 1];
    let half = (x2 - x1) * L::constant(0.5);
    let middle = (x1 + x2) * L::constant(0.5);

    let mut sum = if rule.centre != 0.0 {
        f(middle) * L::constant(rule.centre)
    } else {
        L::zero()
    };
    for &(abscissa, weight) in rule.pairs {
        let offset = half * L::constant(abscissa);
        sum = (f(middle - offset) + f(middle + offset)).mul_add(L::constant(weight), sum);
    }
    sum * half
}
