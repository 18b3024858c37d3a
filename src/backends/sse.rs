//! SSE backend implementation (x86 / x86_64)
//!
//! 4-lane operations on the `__m128` register using SSE instructions, all of
//! which are part of the x86_64 baseline. The hardware has a native divider
//! and square root, but this backend intentionally exposes only the fast
//! estimate instructions (`rcpps`, `rsqrtps`) plus arithmetic refinement
//! steps, so that the refined results match the other backends' accuracy
//! profile instead of the local hardware's.
//!
//! **Note**: no runtime CPU detection is performed. The variable-shuffle
//! permutation path is only compiled in when the build target itself enables
//! AVX (`-C target-feature=+avx`); otherwise lane permutation falls back to
//! a scalar reshuffle, which benchmarks of byte-table emulation on other
//! instruction families showed to be the faster non-native choice anyway.

// This backend only compiles on x86/x86_64 targets
#![cfg(any(target_arch = "x86", target_arch = "x86_64"))]

use crate::traits::SimdVector4;

#[cfg(target_arch = "x86")]
use core::arch::x86::*;

#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;

/// SSE vector wrapper (4 lanes of f32)
///
/// Wraps the `__m128` intrinsic type to provide the [`SimdVector4`]
/// implementation.
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct SseVector4(__m128);

impl SimdVector4 for SseVector4 {
    #[inline(always)]
    fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        unsafe { SseVector4(_mm_setr_ps(x, y, z, w)) }
    }

    #[inline(always)]
    fn splat(value: f32) -> Self {
        unsafe { SseVector4(_mm_set1_ps(value)) }
    }

    #[inline(always)]
    fn from_slice(slice: &[f32]) -> Self {
        assert!(slice.len() >= 4, "slice too short for 4-lane load");
        unsafe { SseVector4(_mm_loadu_ps(slice.as_ptr())) }
    }

    #[inline(always)]
    fn to_array(self) -> [f32; 4] {
        let mut out = [0.0f32; 4];
        unsafe { _mm_storeu_ps(out.as_mut_ptr(), self.0) };
        out
    }

    #[inline(always)]
    fn to_bytes(self) -> [u8; 16] {
        let lanes = self.to_array();
        let mut bytes = [0u8; 16];
        for (dst, lane) in bytes.chunks_exact_mut(4).zip(lanes) {
            dst.copy_from_slice(&lane.to_le_bytes());
        }
        bytes
    }

    #[inline(always)]
    fn first_lane(self) -> f32 {
        unsafe { _mm_cvtss_f32(self.0) }
    }

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        unsafe { SseVector4(_mm_add_ps(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        unsafe { SseVector4(_mm_sub_ps(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        unsafe { SseVector4(_mm_mul_ps(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn recip_estimate(self) -> Self {
        unsafe { SseVector4(_mm_rcp_ps(self.0)) }
    }

    #[inline(always)]
    fn recip_step(self, est: Self) -> Self {
        // 2 - x * est, spelled out: SSE has no fused reciprocal step
        unsafe {
            SseVector4(_mm_sub_ps(
                _mm_set1_ps(2.0),
                _mm_mul_ps(self.0, est.0),
            ))
        }
    }

    #[inline(always)]
    fn rsqrt_estimate(self) -> Self {
        unsafe { SseVector4(_mm_rsqrt_ps(self.0)) }
    }

    #[inline(always)]
    fn rsqrt_step(self, est: Self) -> Self {
        // 1.5 - 0.5 * x * est^2
        unsafe {
            let half_x = _mm_mul_ps(_mm_set1_ps(0.5), self.0);
            let est_sq = _mm_mul_ps(est.0, est.0);
            SseVector4(_mm_sub_ps(
                _mm_set1_ps(1.5),
                _mm_mul_ps(half_x, est_sq),
            ))
        }
    }

    #[inline(always)]
    fn zero_w(self) -> Self {
        // Keep lanes 0..2, clear every bit of lane 3
        unsafe {
            let mask = _mm_castsi128_ps(_mm_set_epi32(0, -1, -1, -1));
            SseVector4(_mm_and_ps(self.0, mask))
        }
    }

    #[inline(always)]
    fn horizontal_sum(self) -> f32 {
        unsafe {
            let hi = _mm_movehl_ps(self.0, self.0); // [z, w, z, w]
            let pair = _mm_add_ps(self.0, hi); // [x+z, y+w, _, _]
            let swap = _mm_shuffle_ps(pair, pair, 1); // lane 1 into lane 0
            _mm_cvtss_f32(_mm_add_ss(pair, swap))
        }
    }

    #[cfg(target_feature = "avx")]
    #[inline(always)]
    fn permute(self, i: usize, j: usize, k: usize, l: usize) -> Self {
        debug_assert!(i < 4 && j < 4 && k < 4 && l < 4, "lane index out of range");
        unsafe {
            let sel = _mm_set_epi32(l as i32, k as i32, j as i32, i as i32);
            SseVector4(_mm_permutevar_ps(self.0, sel))
        }
    }

    #[cfg(not(target_feature = "avx"))]
    #[inline(always)]
    fn permute(self, i: usize, j: usize, k: usize, l: usize) -> Self {
        debug_assert!(i < 4 && j < 4 && k < 4 && l < 4, "lane index out of range");
        let lanes = self.to_array();
        Self::new(lanes[i], lanes[j], lanes[k], lanes[l])
    }
}
