//! Flux limiters for upwind/TVD finite-volume schemes.
//!
//! A limiter `ψ(d1, d2)` blends low- and high-order fluxes from the ratio
//! `r = d1 / d2` of consecutive slopes. Apart from [`total`], [`null`] and
//! [`centred`], every limiter returns `0` when the slopes have opposite signs
//! or their product does not exceed the machine epsilon.

use strum_macros::{Display, EnumIter, EnumString};

use super::bits::{abs, small};
use crate::simd::{Lane, Real};

/// Limiter selected by [`flux_limiter_select`].
#[repr(u32)]
#[derive(Debug, Display, EnumIter, EnumString, Copy, Clone, PartialEq, Eq, Hash, Default)]
#[strum(serialize_all = "snake_case")]
pub enum FluxLimiter {
    /// Always `0`: first-order upwind.
    Total = 0,
    /// Always `1`: unlimited second-order flux.
    Null = 1,
    Centred = 2,
    Superbee = 3,
    VanLeer = 4,
    VanAlbada = 5,
    Minsuper = 6,
    Supermin = 7,
    Minmod = 8,
    MonotonizedCentral = 9,
    #[default]
    Mean = 10,
}

impl From<i64> for FluxLimiter {
    /// Unknown codes select [`FluxLimiter::Mean`].
    fn from(value: i64) -> Self {
        use strum::IntoEnumIterator;

        FluxLimiter::iter()
            .find(|kind| *kind as i64 == value)
            .unwrap_or_default()
    }
}

impl FluxLimiter {
    /// Parses a snake_case name such as `"van_leer"`; unknown names select
    /// [`FluxLimiter::Mean`].
    pub fn from_name(name: &str) -> Self {
        name.trim().parse().unwrap_or_default()
    }

    /// Evaluates the limiter on one lane group.
    #[inline]
    pub fn apply<L: Lane>(self, d1: L, d2: L) -> L {
        flux_limiter_select::<L>(self)(d1, d2)
    }
}

/// Applies `f` to the slope ratio, returning `0` for slopes of opposite sign.
#[inline(always)]
fn limited<L: Lane>(d1: L, d2: L, f: impl Fn(L) -> L) -> L {
    let opposite = (d1 * d2).simd_le(L::splat(<L::Scalar as Real>::EPSILON));
    L::select(opposite, L::zero(), f(d1 / d2))
}

#[inline(always)]
pub fn total<L: Lane>(_d1: L, _d2: L) -> L {
    L::zero()
}

#[inline(always)]
pub fn null<L: Lane>(_d1: L, _d2: L) -> L {
    L::one()
}

/// `r`, or `0` when `d2` is negligible.
#[inline(always)]
pub fn centred<L: Lane>(d1: L, d2: L) -> L {
    L::select(small(d2), L::zero(), d1 / d2)
}

/// `max(0, min(1, 2r), min(2, r))`.
#[inline(always)]
pub fn superbee<L: Lane>(d1: L, d2: L) -> L {
    limited(d1, d2, |r| {
        let two = L::constant(2.0);
        (r * two).min(L::one()).max(r.min(two)).max(L::zero())
    })
}

/// `(r + |r|) / (1 + |r|)`.
#[inline(always)]
pub fn van_leer<L: Lane>(d1: L, d2: L) -> L {
    limited(d1, d2, |r| {
        let a = abs(r);
        (r + a) / (L::one() + a)
    })
}

/// `(r + r²) / (1 + r²)`.
#[inline(always)]
pub fn van_albada<L: Lane>(d1: L, d2: L) -> L {
    limited(d1, d2, |r| {
        let r2 = r * r;
        (r + r2) / (L::one() + r2)
    })
}

/// `max(0, min(2, r))`.
#[inline(always)]
pub fn minsuper<L: Lane>(d1: L, d2: L) -> L {
    limited(d1, d2, |r| r.min(L::constant(2.0)).max(L::zero()))
}

/// `max(0, min(1, 2r))`.
#[inline(always)]
pub fn supermin<L: Lane>(d1: L, d2: L) -> L {
    limited(d1, d2, |r| (r + r).min(L::one()).max(L::zero()))
}

/// `max(0, min(1, r))`.
#[inline(always)]
pub fn minmod<L: Lane>(d1: L, d2: L) -> L {
    limited(d1, d2, |r| r.min(L::one()).max(L::zero()))
}

/// `max(0, min(2r, (1 + r) / 2, 2))`.
#[inline(always)]
pub fn monotonized_central<L: Lane>(d1: L, d2: L) -> L {
    limited(d1, d2, |r| {
        let mean = (L::one() + r) * L::constant(0.5);
        (r + r).min(mean).min(L::constant(2.0)).max(L::zero())
    })
}

/// `(1 + r) / 2`.
#[inline(always)]
pub fn mean<L: Lane>(d1: L, d2: L) -> L {
    limited(d1, d2, |r| (L::one() + r) * L::constant(0.5))
}

/// Function pointer of the limiter `kind`.
pub fn flux_limiter_select<L: Lane>(kind: FluxLimiter) -> fn(L, L) -> L {
    match kind {
        FluxLimiter::Total => total::<L>,
        FluxLimiter::Null => null::<L>,
        FluxLimiter::Centred => centred::<L>,
        FluxLimiter::Superbee => superbee::<L>,
        FluxLimiter::VanLeer => van_leer::<L>,
        FluxLimiter::VanAlbada => van_albada::<L>,
        FluxLimiter::Minsuper => minsuper::<L>,
        FluxLimiter::Supermin => supermin::<L>,
        FluxLimiter::Minmod => minmod::<L>,
        FluxLimiter::MonotonizedCentral => monotonized_central::<L>,
        FluxLimiter::Mean => mean::<L>,
    }
}
