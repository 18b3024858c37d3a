//! Edge case tests: zeros, infinities, NaN, and the documented divergences
//!
//! The layer has no error channel; IEEE-754 non-finite values are the only
//! signal for domain violations, and a few zero cases are deliberately
//! backend-dependent. These tests pin down what is guaranteed and what is
//! only "some non-finite value".

#![cfg(any(
    all(feature = "sse", any(target_arch = "x86", target_arch = "x86_64")),
    all(feature = "neon", target_arch = "aarch64")
))]

use simd4f::{math, ops, RegisterBytes, SimdVector4, Vector4};

use test_utils::*;

#[test]
fn test_division_by_zero_lane_is_not_special_cased() {
    let a = Vector4::splat(1.0);
    let zero = Vector4::splat(0.0);
    // Through the reciprocal path a zero divisor yields infinity or NaN
    // depending on how the backend's refinement treats 0 * inf.
    for lane in ops::div(a, zero).to_array() {
        assert!(!lane.is_finite(), "1/0 lane = {}", lane);
    }
}

#[test]
fn test_recip_of_zero_and_infinity() {
    for lane in math::recip(Vector4::splat(0.0)).to_array() {
        assert!(!lane.is_finite(), "recip(0) lane = {}", lane);
    }
    for lane in math::recip(Vector4::splat(f32::INFINITY)).to_array() {
        assert!(lane == 0.0 || lane.is_nan(), "recip(inf) lane = {}", lane);
    }
}

#[test]
fn test_rsqrt_of_negative_is_nan() {
    for lane in math::rsqrt(Vector4::splat(-1.0)).to_array() {
        assert!(lane.is_nan(), "rsqrt(-1) lane = {}", lane);
    }
}

#[test]
fn test_sqrt_of_negative_is_nan() {
    for lane in math::sqrt(Vector4::splat(-4.0)).to_array() {
        assert!(lane.is_nan(), "sqrt(-4) lane = {}", lane);
    }
}

#[test]
fn test_sqrt_zero_divergence_is_contained() {
    // sqrt is x * rsqrt(x); at zero that's 0 * inf. The result is NaN or 0
    // by backend, never a finite non-zero value.
    for lane in math::sqrt(Vector4::splat(0.0)).to_array() {
        assert!(lane.is_nan() || lane == 0.0, "sqrt(0) lane = {}", lane);
    }
}

#[test]
fn test_normalize_zero_vector_diverges() {
    let zero = Vector4::splat(0.0);
    for lane in math::normalize4(zero).to_array() {
        assert!(!lane.is_finite(), "normalize4(0) lane = {}", lane);
    }
    for lane in math::normalize3(zero).to_array() {
        assert!(!lane.is_finite(), "normalize3(0) lane = {}", lane);
    }
}

#[test]
fn test_nan_propagates_through_arithmetic() {
    let nan = Vector4::splat(f32::NAN);
    let one = Vector4::splat(1.0);

    assert!(ops::add(nan, one).first_lane().is_nan());
    assert!(ops::sub(one, nan).first_lane().is_nan());
    assert!(ops::mul(nan, one).first_lane().is_nan());
    assert!(ops::scalar_sub(1.0, nan).first_lane().is_nan());
}

#[test]
fn test_three_component_forms_overwrite_poisoned_w() {
    // The 3-variants zero lane w with a lane write, so even NaN/inf in w
    // cannot leak into the reduction.
    let v = Vector4::new(1.0, 2.0, 3.0, f32::NAN);
    assert_eq!(ops::sum3(v), 6.0);

    let a = Vector4::new(1.0, 2.0, 3.0, f32::NAN);
    let b = Vector4::new(1.0, 2.0, 3.0, f32::INFINITY);
    assert_eq!(ops::dot3(a, b), 14.0);

    // ...and the caller's vector is untouched
    assert!(v.to_array()[3].is_nan());
}

#[test]
fn test_permute_preserves_non_finite_lanes() {
    let v = Vector4::new(f32::INFINITY, f32::NEG_INFINITY, f32::NAN, 0.0);
    let r = ops::permute(v, 3, 2, 1, 0).to_array();
    assert_eq!(r[0], 0.0);
    assert!(r[1].is_nan());
    assert_eq!(r[2], f32::NEG_INFINITY);
    assert_eq!(r[3], f32::INFINITY);
}

#[test]
fn test_scalar_forms_broadcast_to_every_lane() {
    // A scalar operand must reach all 4 lanes, not just lane 0.
    let v = Vector4::splat(10.0);
    assert_eq!(ops::add_scalar(v, 1.0).to_array(), [11.0; 4]);
    assert_eq!(ops::sub_scalar(v, 1.0).to_array(), [9.0; 4]);
    assert_eq!(ops::scalar_sub(1.0, v).to_array(), [-9.0; 4]);
    assert_eq!(ops::mul_scalar(v, 3.0).to_array(), [30.0; 4]);
    let q = ops::div_scalar(v, 4.0).to_array();
    assert_lanes_close(q, [2.5; 4], REFINED_TOLERANCE, "div_scalar broadcast");
}

#[test]
fn test_register_dump_format_is_stable() {
    let v = Vector4::new(1.0, 2.0, 3.0, 4.0);
    let dump = RegisterBytes::of(v).to_string();
    assert_eq!(
        dump,
        "[40, 80, 00, 00, 40, 40, 00, 00 | 40, 00, 00, 00, 3F, 80, 00, 00]"
    );
}

#[test]
fn test_register_dump_round_values() {
    let zero = RegisterBytes::of(Vector4::splat(0.0)).to_string();
    assert_eq!(
        zero,
        "[00, 00, 00, 00, 00, 00, 00, 00 | 00, 00, 00, 00, 00, 00, 00, 00]"
    );
}
