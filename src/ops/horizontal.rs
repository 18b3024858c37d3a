//! Horizontal reductions: sum, dot product, squared length
//!
//! Reductions come in two shapes. The plain form returns a scalar; the
//! `_splat` form broadcasts that scalar back across all four lanes so the
//! result can feed further lane-wise arithmetic without a lane extract.
//!
//! The 3-component variants zero lane `w` with a lane write on a copy
//! before reducing; the caller's vector is never touched.

use crate::traits::SimdVector4;

/// Sum of all four lanes.
///
/// # Example
///
/// ```rust
/// use simd4f::{ops::sum4, SimdVector4, Vector4};
///
/// let v = Vector4::new(1.0, 2.0, 3.0, 4.0);
/// assert_eq!(sum4(v), 10.0);
/// ```
#[inline(always)]
pub fn sum4<V: SimdVector4>(v: V) -> f32 {
    v.horizontal_sum()
}

/// Sum of lanes `(x, y, z)`, ignoring lane `w`.
///
/// # Example
///
/// ```rust
/// use simd4f::{ops::sum3, SimdVector4, Vector4};
///
/// let v = Vector4::new(1.0, 2.0, 3.0, 4.0);
/// assert_eq!(sum3(v), 6.0);
/// ```
#[inline(always)]
pub fn sum3<V: SimdVector4>(v: V) -> f32 {
    v.zero_w().horizontal_sum()
}

/// 4-component dot product as a scalar.
///
/// # Example
///
/// ```rust
/// use simd4f::{ops::dot4, SimdVector4, Vector4};
///
/// let v = Vector4::new(1.0, 2.0, 3.0, 4.0);
/// assert_eq!(dot4(v, v), 30.0);
/// ```
#[inline(always)]
pub fn dot4<V: SimdVector4>(a: V, b: V) -> f32 {
    a.mul(b).horizontal_sum()
}

/// 3-component dot product as a scalar; lane `w` contributes nothing.
#[inline(always)]
pub fn dot3<V: SimdVector4>(a: V, b: V) -> f32 {
    a.mul(b).zero_w().horizontal_sum()
}

/// 4-component dot product broadcast to all four lanes.
#[inline(always)]
pub fn dot4_splat<V: SimdVector4>(a: V, b: V) -> V {
    V::splat(dot4(a, b))
}

/// 3-component dot product broadcast to all four lanes.
#[inline(always)]
pub fn dot3_splat<V: SimdVector4>(a: V, b: V) -> V {
    V::splat(dot3(a, b))
}

/// Squared length over all four lanes: `dot4(v, v)`.
#[inline(always)]
pub fn length_sq4<V: SimdVector4>(v: V) -> f32 {
    dot4(v, v)
}

/// Squared length over all four lanes, broadcast.
#[inline(always)]
pub fn length_sq4_splat<V: SimdVector4>(v: V) -> V {
    dot4_splat(v, v)
}

/// Squared length over lanes `(x, y, z)`: `dot3(v, v)`.
#[inline(always)]
pub fn length_sq3<V: SimdVector4>(v: V) -> f32 {
    dot3(v, v)
}

/// Squared length over lanes `(x, y, z)`, broadcast.
#[inline(always)]
pub fn length_sq3_splat<V: SimdVector4>(v: V) -> V {
    dot3_splat(v, v)
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
    fn test_sum_excludes_w_in_3_form() {
        let v = Vector4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(sum4(v), 10.0);
        assert_eq!(sum3(v), 6.0);
    }

    #[test]
    fn test_dot_orthogonal_axes() {
        let x = Vector4::new(1.0, 0.0, 0.0, 0.0);
        let y = Vector4::new(0.0, 1.0, 0.0, 0.0);
        assert_eq!(dot4(x, y), 0.0);
    }

    #[test]
    fn test_dot3_drops_w_term() {
        let v = Vector4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(dot4(v, v), 30.0);
        assert_eq!(dot3(v, v), 14.0);
    }

    #[test]
    fn test_splat_forms_fill_all_lanes() {
        let v = Vector4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(dot4_splat(v, v).to_array(), [30.0; 4]);
        assert_eq!(dot3_splat(v, v).to_array(), [14.0; 4]);
        assert_eq!(length_sq4_splat(v).to_array(), [30.0; 4]);
        assert_eq!(length_sq3_splat(v).to_array(), [14.0; 4]);
    }
}
