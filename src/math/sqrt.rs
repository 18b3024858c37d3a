//! Reciprocal square root and square root
//!
//! Both are derived from the backend's fast rsqrt estimate refined by two
//! Newton-Raphson iterations; no native square root instruction is used, so
//! the error characteristics are uniform across backends.

use crate::traits::SimdVector4;

/// Per-lane reciprocal square root `1/sqrt(x)`, accurate to full single
/// precision.
///
/// Starts from the backend's fast estimate and applies exactly two
/// Newton-Raphson iterations, `r' = r * (1.5 - 0.5*x*r*r)`, using the
/// backend's fused refinement instruction where one exists. As with
/// [`crate::math::recip`], two iterations is a fixed invariant.
///
/// Negative lanes produce NaN. A zero lane produces a non-finite value
/// (infinity or NaN depending on how the backend's estimate and refinement
/// treat `0 * inf`).
///
/// # Example
///
/// ```rust
/// use simd4f::{math::rsqrt, SimdVector4, Vector4};
///
/// let x = Vector4::splat(16.0);
/// let r = rsqrt(x).first_lane();
/// assert!((r - 0.25).abs() < 1e-7);
/// ```
#[inline(always)]
pub fn rsqrt<V: SimdVector4>(x: V) -> V {
    let r0 = x.rsqrt_estimate();
    let r1 = r0.mul(x.rsqrt_step(r0));
    r1.mul(x.rsqrt_step(r1))
}

/// Per-lane square root, computed as `x * rsqrt(x)`.
///
/// For `x == 0` the product runs through `0 * rsqrt(0)` and the result is
/// backend-dependent (typically NaN rather than the mathematical 0).
/// Callers that need `sqrt(0) == 0` exactly must guard the zero case
/// themselves; this layer preserves the divergence rather than paying for
/// a branch every call.
///
/// # Example
///
/// ```rust
/// use simd4f::{math::sqrt, SimdVector4, Vector4};
///
/// let x = Vector4::new(4.0, 9.0, 16.0, 25.0);
/// let s = sqrt(x).to_array();
/// for (lane, expected) in s.iter().zip([2.0, 3.0, 4.0, 5.0]) {
///     assert!((lane - expected).abs() < 1e-5);
/// }
/// ```
#[inline(always)]
pub fn sqrt<V: SimdVector4>(x: V) -> V {
    x.mul(rsqrt(x))
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
    fn test_rsqrt_accuracy() {
        let x = Vector4::new(1.0, 4.0, 9.0, 2.0);
        let r = rsqrt(x).to_array();
        let expected = [1.0, 0.5, 1.0 / 3.0, 1.0 / core::f32::consts::SQRT_2];
        for (lane, expected) in r.iter().zip(expected) {
            let rel = (lane - expected).abs() / expected;
            assert!(rel < 1e-6, "rsqrt lane {} vs {}, rel {}", lane, expected, rel);
        }
    }

    #[test]
    fn test_sqrt_squares_back() {
        let x = Vector4::new(2.0, 3.0, 5.0, 0.25);
        let s = sqrt(x);
        let back = s.mul(s).to_array();
        for (lane, expected) in back.iter().zip([2.0f32, 3.0, 5.0, 0.25]) {
            let rel = (lane - expected).abs() / expected;
            assert!(rel < 1e-6, "sqrt^2 lane {} vs {}, rel {}", lane, expected, rel);
        }
    }

    #[test]
    fn test_sqrt_zero_is_not_guarded() {
        // 0 * rsqrt(0) runs through 0 * inf; accept NaN or an exact 0
        // depending on backend, but never a finite non-zero value.
        let lane = sqrt(Vector4::splat(0.0)).first_lane();
        assert!(lane.is_nan() || lane == 0.0, "sqrt(0) = {}", lane);
    }
}
