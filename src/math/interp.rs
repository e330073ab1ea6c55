//! Linear interpolation and point distances used to draw sampled curves.

use crate::simd::Lane;

/// Value at `x` of the line through `(x1, y1)` and `(x2, y2)`.
#[inline(always)]
pub fn extrapolate<L: Lane>(x: L, x1: L, x2: L, y1: L, y2: L) -> L {
    (x - x1).mul_add((y2 - y1) / (x2 - x1), y1)
}

/// Like [`extrapolate`] but clamped to `y1` before `x1` and to `y2` after `x2`.
#[inline(always)]
pub fn interpolate<L: Lane>(x: L, x1: L, x2: L, y1: L, y2: L) -> L {
    let y = extrapolate(x, x1, x2, y1, y2);
    let y = L::select(x.simd_le(x1), y1, y);
    L::select(x.simd_ge(x2), y2, y)
}

/// Distance between `(x1, y1)` and `(x2, y2)`.
#[inline(always)]
pub fn v2_length<L: Lane>(x1: L, y1: L, x2: L, y2: L) -> L {
    let dx = x2 - x1;
    let dy = y2 - y1;
    dx.mul_add(dx, dy * dy).sqrt()
}

/// Distance between `(x1, y1, z1)` and `(x2, y2, z2)`.
#[inline(always)]
pub fn v3_length<L: Lane>(x1: L, y1: L, z1: L, x2: L, y2: L, z2: L) -> L {
    let dx = x2 - x1;
    let dy = y2 - y1;
    let dz = z2 - z1;
    dx.mul_add(dx, dy.mul_add(dy, dz * dz)).sqrt()
}
