//! Accurate reciprocal (1/x)
//!
//! The hardware reciprocal estimate is good to roughly 1e-3 relative error.
//! One Newton-Raphson iteration squares the error (~1e-6), which is close
//! but not full precision; the second iteration lands within ~1 ULP. Both
//! iterations are always applied, on every backend, so callers see one
//! accuracy contract instead of a per-instruction-family one.

use crate::traits::SimdVector4;

/// Per-lane reciprocal `1/x`, accurate to full single precision.
///
/// Starts from the backend's fast estimate and applies exactly two
/// Newton-Raphson iterations, `e' = e * (2 - x*e)`, using the backend's
/// fused refinement instruction where one exists. The iteration count is a
/// fixed design invariant, not a tunable.
///
/// Zero lanes produce infinity or NaN (the exact non-finite value is
/// backend-dependent because the estimate path multiplies `0 * inf`);
/// they are not special-cased.
///
/// # Example
///
/// ```rust
/// use simd4f::{math::recip, SimdVector4, Vector4};
///
/// let x = Vector4::splat(8.0);
/// let r = recip(x).first_lane();
/// assert!((r - 0.125).abs() < 1e-7);
/// ```
#[inline(always)]
pub fn recip<V: SimdVector4>(x: V) -> V {
    let e0 = x.recip_estimate();
    let e1 = e0.mul(x.recip_step(e0));
    e1.mul(x.recip_step(e1))
}

#[cfg(test)]
#[cfg(any(
    all(feature = "sse", any(target_arch = "x86", target_arch = "x86_64")),
    all(feature = "neon", target_arch = "aarch64")
))]
mod tests {
    use super::*;
    use crate::Vector4;

    #[test]
    fn test_recip_accuracy() {
        let x = Vector4::new(1.0, 2.0, 3.0, 7.0);
        let r = recip(x).to_array();
        for (lane, x) in r.iter().zip([1.0f32, 2.0, 3.0, 7.0]) {
            let expected = 1.0 / x;
            let rel = (lane - expected).abs() / expected;
            assert!(rel < 1e-6, "recip({}) = {}, rel err {}", x, lane, rel);
        }
    }

    #[test]
    fn test_recip_negative_lanes() {
        let r = recip(Vector4::splat(-4.0)).first_lane();
        assert!((r + 0.25).abs() < 1e-7, "recip(-4.0) = {}", r);
    }
}
