//! Cross-lane permutation

use crate::traits::SimdVector4;

/// Gather lanes of `v` by index: returns `(v[i], v[j], v[k], v[l])`.
///
/// Indices must be in `0..4`. Out-of-range indices violate the contract and
/// are only checked with `debug_assert!`.
///
/// # Performance
///
/// The cost of a runtime-variable permutation differs sharply by backend:
///
/// - SSE: a single native variable shuffle when the build target enables
///   AVX; otherwise a scalar reshuffle through memory.
/// - NEON: a byte-table gather (`vqtbl1q_u8`) against the register's raw
///   bytes. This has been measured at roughly 3x slower than an equivalent
///   scalar reshuffle; it is used because it keeps the value
///   register-resident. Callers permuting with indices known at compile
///   time should prefer a dedicated shuffle in their own code.
///
/// # Example
///
/// ```rust
/// use simd4f::{ops::permute, SimdVector4, Vector4};
///
/// let v = Vector4::new(1.0, 2.0, 3.0, 4.0);
/// assert_eq!(permute(v, 3, 2, 1, 0).to_array(), [4.0, 3.0, 2.0, 1.0]);
/// assert_eq!(permute(v, 0, 0, 0, 0).to_array(), [1.0; 4]);
/// ```
#[inline(always)]
pub fn permute<V: SimdVector4>(v: V, i: usize, j: usize, k: usize, l: usize) -> V {
    v.permute(i, j, k, l)
}
