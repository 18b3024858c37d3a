//! Lane-wise arithmetic operations
//!
//! Each binary operation comes in three forms: vector-vector,
//! vector-scalar (the scalar is broadcast to all four lanes first), and,
//! for the non-commutative operations, the reversed scalar-vector order.
//!
//! Division never uses a native divide instruction, even on hardware that
//! has one: all three division forms multiply by [`crate::math::recip`],
//! so the accuracy and cost profile is identical on every backend.

use crate::math::recip;
use crate::traits::SimdVector4;

/// Lane-wise addition: `a + b`.
///
/// # Example
///
/// ```rust
/// use simd4f::{ops::add, SimdVector4, Vector4};
///
/// let a = Vector4::new(1.0, 2.0, 3.0, 4.0);
/// let b = Vector4::splat(1.0);
/// assert_eq!(add(a, b).to_array(), [2.0, 3.0, 4.0, 5.0]);
/// ```
#[inline(always)]
pub fn add<V: SimdVector4>(a: V, b: V) -> V {
    a.add(b)
}

/// Add a broadcast scalar to every lane: `v + f`.
#[inline(always)]
pub fn add_scalar<V: SimdVector4>(v: V, f: f32) -> V {
    v.add(V::splat(f))
}

/// Lane-wise subtraction: `a - b`.
#[inline(always)]
pub fn sub<V: SimdVector4>(a: V, b: V) -> V {
    a.sub(b)
}

/// Subtract a broadcast scalar from every lane: `v - f`.
#[inline(always)]
pub fn sub_scalar<V: SimdVector4>(v: V, f: f32) -> V {
    v.sub(V::splat(f))
}

/// Reversed-order subtraction: `f - v` lane-wise.
///
/// # Example
///
/// ```rust
/// use simd4f::{ops::scalar_sub, SimdVector4, Vector4};
///
/// let v = Vector4::new(1.0, 2.0, 3.0, 4.0);
/// assert_eq!(scalar_sub(10.0, v).to_array(), [9.0, 8.0, 7.0, 6.0]);
/// ```
#[inline(always)]
pub fn scalar_sub<V: SimdVector4>(f: f32, v: V) -> V {
    V::splat(f).sub(v)
}

/// Lane-wise negation: `-v`, computed as `0 - v`.
#[inline(always)]
pub fn neg<V: SimdVector4>(v: V) -> V {
    scalar_sub(0.0, v)
}

/// Lane-wise multiplication: `a * b`.
#[inline(always)]
pub fn mul<V: SimdVector4>(a: V, b: V) -> V {
    a.mul(b)
}

/// Scale every lane by a broadcast scalar: `v * f`.
#[inline(always)]
pub fn mul_scalar<V: SimdVector4>(v: V, f: f32) -> V {
    v.mul(V::splat(f))
}

/// Lane-wise division: `a / b`, computed as `a * recip(b)`.
///
/// A zero lane in `b` produces infinity or NaN per IEEE-754 through the
/// reciprocal path; it is not special-cased.
///
/// # Example
///
/// ```rust
/// use simd4f::{ops::div, SimdVector4, Vector4};
///
/// let a = Vector4::new(2.0, 4.0, 6.0, 8.0);
/// let b = Vector4::splat(2.0);
/// let q = div(a, b).to_array();
/// for (lane, expected) in q.iter().zip([1.0, 2.0, 3.0, 4.0]) {
///     assert!((lane - expected).abs() < 1e-6);
/// }
/// ```
#[inline(always)]
pub fn div<V: SimdVector4>(a: V, b: V) -> V {
    a.mul(recip(b))
}

/// Divide every lane by a broadcast scalar: `v / f`.
#[inline(always)]
pub fn div_scalar<V: SimdVector4>(v: V, f: f32) -> V {
    v.mul(recip(V::splat(f)))
}

/// Reversed-order division: `f / v` lane-wise.
#[inline(always)]
pub fn scalar_div<V: SimdVector4>(f: f32, v: V) -> V {
    V::splat(f).mul(recip(v))
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
    fn test_scalar_forms_broadcast_all_lanes() {
        let v = Vector4::new(1.0, 2.0, 3.0, 4.0);

        assert_eq!(add_scalar(v, 10.0).to_array(), [11.0, 12.0, 13.0, 14.0]);
        assert_eq!(sub_scalar(v, 1.0).to_array(), [0.0, 1.0, 2.0, 3.0]);
        assert_eq!(mul_scalar(v, 2.0).to_array(), [2.0, 4.0, 6.0, 8.0]);
    }

    #[test]
    fn test_reversed_operand_order() {
        let v = Vector4::new(1.0, 2.0, 3.0, 4.0);

        assert_eq!(scalar_sub(5.0, v).to_array(), [4.0, 3.0, 2.0, 1.0]);
        assert_eq!(neg(v).to_array(), [-1.0, -2.0, -3.0, -4.0]);

        let q = scalar_div(12.0, v).to_array();
        for (lane, expected) in q.iter().zip([12.0, 6.0, 4.0, 3.0]) {
            assert!((lane - expected).abs() / expected < 1e-6);
        }
    }

    #[test]
    fn test_div_scalar() {
        let v = Vector4::new(2.0, 4.0, 6.0, 8.0);
        let q = div_scalar(v, 4.0).to_array();
        for (lane, expected) in q.iter().zip([0.5, 1.0, 1.5, 2.0]) {
            assert!((lane - expected).abs() / expected < 1e-6);
        }
    }
}
