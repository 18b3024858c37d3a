//! Vector length and normalization
//!
//! All lengths go through the shared [`crate::math::rsqrt`] kernel rather
//! than a native square root, and normalization multiplies by the
//! reciprocal square root of the squared length directly, skipping the
//! intermediate length entirely.

use crate::ops::horizontal::{dot3_splat, dot4_splat};
use crate::math::sqrt::{rsqrt, sqrt};
use crate::traits::SimdVector4;

/// Length over all four lanes, as a scalar.
///
/// # Example
///
/// ```rust
/// use simd4f::{math::length4, SimdVector4, Vector4};
///
/// let v = Vector4::new(3.0, 4.0, 0.0, 0.0);
/// assert!((length4(v) - 5.0).abs() < 1e-5);
/// ```
#[inline(always)]
pub fn length4<V: SimdVector4>(v: V) -> f32 {
    sqrt(dot4_splat(v, v)).first_lane()
}

/// Length over all four lanes, broadcast to every lane.
#[inline(always)]
pub fn length4_splat<V: SimdVector4>(v: V) -> V {
    sqrt(dot4_splat(v, v))
}

/// Length over lanes `(x, y, z)`, as a scalar.
#[inline(always)]
pub fn length3<V: SimdVector4>(v: V) -> f32 {
    sqrt(dot3_splat(v, v)).first_lane()
}

/// Length over lanes `(x, y, z)`, broadcast to every lane.
#[inline(always)]
pub fn length3_splat<V: SimdVector4>(v: V) -> V {
    sqrt(dot3_splat(v, v))
}

/// Scale `v` to unit length over all four lanes.
///
/// The zero vector has no direction: its reciprocal square root is
/// non-finite and every lane of the result is NaN or infinity. Callers
/// needing a zero-safe normalize must check the length themselves.
///
/// # Example
///
/// ```rust
/// use simd4f::{math::{length4, normalize4}, SimdVector4, Vector4};
///
/// let n = normalize4(Vector4::new(3.0, 4.0, 0.0, 0.0));
/// assert!((length4(n) - 1.0).abs() < 1e-5);
/// ```
#[inline(always)]
pub fn normalize4<V: SimdVector4>(v: V) -> V {
    v.mul(rsqrt(dot4_splat(v, v)))
}

/// Scale `v` so lanes `(x, y, z)` form a unit 3-vector.
///
/// Lane `w` is scaled by the same factor, matching the 4-lane register
/// semantics; callers tracking a point's `w` should reset it afterwards.
/// Zero-vector input diverges exactly as in [`normalize4`].
#[inline(always)]
pub fn normalize3<V: SimdVector4>(v: V) -> V {
    v.mul(rsqrt(dot3_splat(v, v)))
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
    fn test_pythagorean_length() {
        let v = Vector4::new(3.0, 4.0, 0.0, 0.0);
        assert!((length4(v) - 5.0).abs() < 1e-5);
        assert!((length3(v) - 5.0).abs() < 1e-5);
        // the splat form is the same computation broadcast
        assert_eq!(length4_splat(v).to_array(), [length4(v); 4]);
        assert_eq!(length3_splat(v).to_array(), [length3(v); 4]);
    }

    #[test]
    fn test_length3_ignores_w() {
        let v = Vector4::new(3.0, 4.0, 0.0, 100.0);
        assert!((length3(v) - 5.0).abs() < 1e-5);
        assert!(length4(v) > 100.0);
    }

    #[test]
    fn test_normalize_preserves_direction() {
        let n = normalize4(Vector4::new(3.0, 4.0, 0.0, 0.0)).to_array();
        assert!((length4(Vector4::new(n[0], n[1], n[2], n[3])) - 1.0).abs() < 1e-5);
        // x:y ratio of 3:4 survives
        assert!((n[0] / n[1] - 0.75).abs() < 1e-5);
    }

    #[test]
    fn test_normalize3_unit_over_xyz() {
        let n = normalize3(Vector4::new(1.0, 2.0, 2.0, 9.0));
        assert!((length3(n) - 1.0).abs() < 1e-5);
        // w got scaled by the same 1/3 factor
        assert!((n.to_array()[3] - 3.0).abs() < 1e-5);
    }
}
