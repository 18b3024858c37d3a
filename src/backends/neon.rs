//! NEON backend implementation (ARM64)
//!
//! 4-lane operations on the `float32x4_t` register using ARM NEON
//! instructions. NEON is mandatory on aarch64, so no runtime detection is
//! needed; the feature gate exists only so backend selection stays an
//! explicit build-time choice.
//!
//! This family has no exact reciprocal instruction and its divider is not
//! used here: reciprocals come from the `vrecpe`/`vrecps` estimate and
//! fused refinement pair (and `vrsqrte`/`vrsqrts` for reciprocal square
//! roots), which the generic kernels refine to full precision.

// This backend only compiles on aarch64 targets
#![cfg(target_arch = "aarch64")]

use crate::traits::SimdVector4;
use core::arch::aarch64::*;

/// NEON vector wrapper (4 lanes of f32)
///
/// Wraps the `float32x4_t` intrinsic type to provide the [`SimdVector4`]
/// implementation.
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct NeonVector4(float32x4_t);

impl SimdVector4 for NeonVector4 {
    #[inline(always)]
    fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        let lanes = [x, y, z, w];
        unsafe { NeonVector4(vld1q_f32(lanes.as_ptr())) }
    }

    #[inline(always)]
    fn splat(value: f32) -> Self {
        unsafe { NeonVector4(vdupq_n_f32(value)) }
    }

    #[inline(always)]
    fn from_slice(slice: &[f32]) -> Self {
        assert!(slice.len() >= 4, "slice too short for 4-lane load");
        unsafe { NeonVector4(vld1q_f32(slice.as_ptr())) }
    }

    #[inline(always)]
    fn to_array(self) -> [f32; 4] {
        let mut out = [0.0f32; 4];
        unsafe { vst1q_f32(out.as_mut_ptr(), self.0) };
        out
    }

    #[inline(always)]
    fn to_bytes(self) -> [u8; 16] {
        let mut bytes = [0u8; 16];
        unsafe { vst1q_u8(bytes.as_mut_ptr(), vreinterpretq_u8_f32(self.0)) };
        bytes
    }

    #[inline(always)]
    fn first_lane(self) -> f32 {
        unsafe { vgetq_lane_f32::<0>(self.0) }
    }

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        unsafe { NeonVector4(vaddq_f32(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        unsafe { NeonVector4(vsubq_f32(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        unsafe { NeonVector4(vmulq_f32(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn recip_estimate(self) -> Self {
        unsafe { NeonVector4(vrecpeq_f32(self.0)) }
    }

    #[inline(always)]
    fn recip_step(self, est: Self) -> Self {
        // Fused: vrecps(x, est) = 2 - x * est
        unsafe { NeonVector4(vrecpsq_f32(self.0, est.0)) }
    }

    #[inline(always)]
    fn rsqrt_estimate(self) -> Self {
        unsafe { NeonVector4(vrsqrteq_f32(self.0)) }
    }

    #[inline(always)]
    fn rsqrt_step(self, est: Self) -> Self {
        // Fused: vrsqrts(est^2, x) = (3 - x * est^2) / 2
        unsafe { NeonVector4(vrsqrtsq_f32(vmulq_f32(est.0, est.0), self.0)) }
    }

    #[inline(always)]
    fn zero_w(self) -> Self {
        unsafe { NeonVector4(vsetq_lane_f32::<3>(0.0, self.0)) }
    }

    #[inline(always)]
    fn horizontal_sum(self) -> f32 {
        unsafe {
            let pair = vpaddq_f32(self.0, self.0); // [x+y, z+w, x+y, z+w]
            let sum = vpaddq_f32(pair, pair); // [x+y+z+w, ...]
            vgetq_lane_f32::<0>(sum)
        }
    }

    #[inline(always)]
    fn permute(self, i: usize, j: usize, k: usize, l: usize) -> Self {
        debug_assert!(i < 4 && j < 4 && k < 4 && l < 4, "lane index out of range");
        // Byte-table emulation: each output lane gathers the 4 consecutive
        // bytes of the selected source lane. Benchmarked ~3x slower than a
        // scalar reshuffle through memory; kept because it stays
        // register-resident. Prefer compile-time shuffles where the lane
        // pattern is statically known.
        let i = (i as u8) << 2;
        let j = (j as u8) << 2;
        let k = (k as u8) << 2;
        let l = (l as u8) << 2;
        let table = [
            i,
            i + 1,
            i + 2,
            i + 3,
            j,
            j + 1,
            j + 2,
            j + 3,
            k,
            k + 1,
            k + 2,
            k + 3,
            l,
            l + 1,
            l + 2,
            l + 3,
        ];
        unsafe {
            let bytes = vreinterpretq_u8_f32(self.0);
            let sel = vld1q_u8(table.as_ptr());
            NeonVector4(vreinterpretq_f32_u8(vqtbl1q_u8(bytes, sel)))
        }
    }
}
