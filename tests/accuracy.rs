//! Accuracy tests for the Newton-Raphson refined kernels
//!
//! Validates that reciprocal, reciprocal square root, square root and the
//! compositions built on them stay inside their documented error bounds
//! against libm reference implementations, across several decades of input
//! magnitude.

#![cfg(any(
    all(feature = "sse", any(target_arch = "x86", target_arch = "x86_64")),
    all(feature = "neon", target_arch = "aarch64")
))]

use simd4f::{math, ops, SimdVector4, Vector4};

use test_utils::*;

/// Sample values spanning ~12 decades, deliberately avoiding exact powers
/// of two so the hardware estimate tables are actually exercised.
const SWEEP: [f32; 12] = [
    1.0e-6, 3.7e-5, 9.1e-4, 0.031, 0.7, 1.0, 3.0, 42.5, 997.0, 1.6e4, 2.9e5, 8.0e6,
];

#[test]
fn test_recip_within_tolerance() {
    for x in SWEEP {
        let r = math::recip(Vector4::splat(x)).first_lane();
        let expected = ref_recip(x);
        let rel = (r - expected).abs() / expected.abs();
        assert!(rel < REFINED_TOLERANCE, "recip({}) = {}, rel {}", x, r, rel);
    }
}

#[test]
fn test_recip_negative_inputs() {
    for x in SWEEP {
        let r = math::recip(Vector4::splat(-x)).first_lane();
        let expected = ref_recip(-x);
        let rel = (r - expected).abs() / expected.abs();
        assert!(rel < REFINED_TOLERANCE, "recip({}) = {}, rel {}", -x, r, rel);
    }
}

#[test]
fn test_rsqrt_within_tolerance() {
    for x in SWEEP {
        let r = math::rsqrt(Vector4::splat(x)).first_lane();
        let expected = ref_rsqrt(x);
        let rel = (r - expected).abs() / expected.abs();
        assert!(rel < REFINED_TOLERANCE, "rsqrt({}) = {}, rel {}", x, r, rel);
    }
}

#[test]
fn test_sqrt_within_tolerance() {
    for x in SWEEP {
        let s = math::sqrt(Vector4::splat(x)).first_lane();
        let expected = ref_sqrt(x);
        let rel = (s - expected).abs() / expected.abs();
        assert!(rel < REFINED_TOLERANCE, "sqrt({}) = {}, rel {}", x, s, rel);
    }
}

#[test]
fn test_division_against_native_scalar() {
    for a in SWEEP {
        for b in SWEEP {
            let q = ops::div(Vector4::splat(a), Vector4::splat(b)).first_lane();
            let expected = a / b;
            let rel = (q - expected).abs() / expected.abs();
            assert!(
                rel < REFINED_TOLERANCE,
                "div({}, {}) = {}, rel {}",
                a,
                b,
                q,
                rel
            );
        }
    }
}

#[test]
fn test_length_against_reference() {
    let cases = [
        [3.0, 4.0, 0.0, 0.0],
        [1.0, 1.0, 1.0, 1.0],
        [0.1, 0.2, 0.3, 0.4],
        [100.0, -200.0, 300.0, -400.0],
    ];
    for lanes in cases {
        let v = Vector4::from_slice(&lanes);
        let l4 = math::length4(v);
        let l3 = math::length3(v);
        let e4 = ref_length4(lanes);
        let e3 = ref_length3(lanes);
        assert!(
            (l4 - e4).abs() / e4 < LENGTH_TOLERANCE,
            "length4({:?}) = {} vs {}",
            lanes,
            l4,
            e4
        );
        assert!(
            (l3 - e3).abs() / e3 < LENGTH_TOLERANCE,
            "length3({:?}) = {} vs {}",
            lanes,
            l3,
            e3
        );
    }
}

#[test]
fn test_normalize_against_reference() {
    let lanes = [2.0f32, -3.0, 6.0, 1.0];
    let v = Vector4::from_slice(&lanes);

    let n4 = math::normalize4(v).to_array();
    let e4 = ref_length4(lanes);
    let expected4 = [lanes[0] / e4, lanes[1] / e4, lanes[2] / e4, lanes[3] / e4];
    assert_lanes_close(n4, expected4, LENGTH_TOLERANCE, "normalize4");

    let n3 = math::normalize3(v).to_array();
    let e3 = ref_length3(lanes);
    let expected3 = [lanes[0] / e3, lanes[1] / e3, lanes[2] / e3, lanes[3] / e3];
    assert_lanes_close(n3, expected3, LENGTH_TOLERANCE, "normalize3");
}

/// The refined kernels must beat the raw hardware estimate by a wide
/// margin: the estimate is only contracted to ~1e-3 relative error.
#[test]
fn test_refinement_tightens_the_estimate_contract() {
    for x in SWEEP {
        let v = Vector4::splat(x);

        let est = v.recip_estimate().first_lane();
        let est_rel = (est - ref_recip(x)).abs() / ref_recip(x).abs();
        assert!(est_rel < 1e-2, "recip estimate({}) rel {}", x, est_rel);

        let refined = math::recip(v).first_lane();
        let refined_rel = (refined - ref_recip(x)).abs() / ref_recip(x).abs();
        assert!(refined_rel < REFINED_TOLERANCE);
    }
}
