//! Core SIMD abstraction trait
//!
//! This module defines the capability interface that every instruction-set
//! backend implements. Code written against [`SimdVector4`] compiles to the
//! native instructions of whichever backend is selected at build time, with
//! no runtime dispatch.

/// A 4-lane single-precision SIMD register.
///
/// Lanes are ordered `(x, y, z, w)` with `x` in lane 0. Implementations wrap
/// the platform register type (`__m128` on x86, `float32x4_t` on ARM) and
/// every method is expected to lower to a small, fixed number of native
/// instructions.
///
/// The trait deliberately has no division method: accurate division and
/// reciprocals are built from [`recip_estimate`](Self::recip_estimate) and
/// [`recip_step`](Self::recip_step) by the generic kernels in
/// [`crate::math`], so that the accuracy and performance profile is the same
/// on every backend regardless of whether the hardware has a divider.
///
/// # Example
///
/// ```rust
/// use simd4f::{SimdVector4, Vector4};
///
/// let v = Vector4::new(1.0, 2.0, 3.0, 4.0);
/// assert_eq!(v.to_array(), [1.0, 2.0, 3.0, 4.0]);
/// assert_eq!(v.horizontal_sum(), 10.0);
/// ```
pub trait SimdVector4: Copy + Clone + Sized {
    // Construction and lane access

    /// Build a vector from four lane values, `x` in lane 0.
    fn new(x: f32, y: f32, z: f32, w: f32) -> Self;

    /// Broadcast a scalar value to all four lanes.
    ///
    /// # Example
    ///
    /// ```rust
    /// use simd4f::{SimdVector4, Vector4};
    /// let v = Vector4::splat(2.0);
    /// assert_eq!(v.to_array(), [2.0; 4]);
    /// ```
    fn splat(value: f32) -> Self;

    /// Load four lanes from a slice.
    ///
    /// # Panics
    ///
    /// Panics if the slice has fewer than 4 elements.
    fn from_slice(slice: &[f32]) -> Self;

    /// Store the four lanes to an array, lane 0 first.
    fn to_array(self) -> [f32; 4];

    /// Reinterpret the register as its 16 raw bytes, lane 0 lowest.
    ///
    /// This is a bit-preserving view of the register contents (no numeric
    /// conversion), suitable for byte-level permutation tables and the
    /// [`crate::fmt::RegisterBytes`] debug dump.
    fn to_bytes(self) -> [u8; 16];

    /// Extract lane 0 as a scalar.
    fn first_lane(self) -> f32;

    // Lane-wise arithmetic

    /// Lane-wise addition.
    fn add(self, rhs: Self) -> Self;

    /// Lane-wise subtraction.
    fn sub(self, rhs: Self) -> Self;

    /// Lane-wise multiplication.
    fn mul(self, rhs: Self) -> Self;

    // Reciprocal / reciprocal-square-root building blocks

    /// Fast hardware reciprocal estimate of each lane (`≈ 1/x`, roughly
    /// 1e-3 relative error).
    ///
    /// Use [`crate::math::recip`] for full-precision reciprocals; the raw
    /// estimate is exposed for callers that can tolerate the error.
    fn recip_estimate(self) -> Self;

    /// One Newton-Raphson reciprocal correction factor: `2 - self * est`.
    ///
    /// The refined estimate is `est * self.recip_step(est)`. Backends with a
    /// fused refinement instruction (NEON `vrecps`) use it here.
    fn recip_step(self, est: Self) -> Self;

    /// Fast hardware reciprocal-square-root estimate of each lane
    /// (`≈ 1/sqrt(x)`, roughly 1e-3 relative error).
    fn rsqrt_estimate(self) -> Self;

    /// One Newton-Raphson reciprocal-square-root correction factor:
    /// `1.5 - 0.5 * self * est * est`.
    ///
    /// The refined estimate is `est * self.rsqrt_step(est)`. Backends with a
    /// fused refinement instruction (NEON `vrsqrts`) use it here.
    fn rsqrt_step(self, est: Self) -> Self;

    // Cross-lane operations

    /// Copy of `self` with lane 3 (`w`) written to zero.
    ///
    /// This is a lane write, so a lane holding NaN or infinity is still
    /// cleanly replaced. Used by the 3-component reductions.
    fn zero_w(self) -> Self;

    /// Sum of all four lanes, computed by pairwise lane combination
    /// (high+low halves, then pair-add) rather than four scalar extracts.
    ///
    /// # Example
    ///
    /// ```rust
    /// use simd4f::{SimdVector4, Vector4};
    /// let v = Vector4::new(1.0, 2.0, 3.0, 4.0);
    /// assert_eq!(v.horizontal_sum(), 10.0);
    /// ```
    fn horizontal_sum(self) -> f32;

    /// Gather lanes by index: the result's lanes are
    /// `(self[i], self[j], self[k], self[l])`.
    ///
    /// Indices must be in `0..4`; out-of-range indices are a contract
    /// violation (checked with `debug_assert!` only). See
    /// [`crate::ops::permute`] for the per-backend performance notes.
    fn permute(self, i: usize, j: usize, k: usize, l: usize) -> Self;
}
