//! Instruction-count benchmarks for simd4f
//!
//! Uses iai (cachegrind-based) for deterministic instruction and cache
//! counts of the core kernels. Run with: cargo bench --bench iai_benches

use simd4f::{math, ops, SimdVector4, Vector4};
use std::hint::black_box;

fn iai_add() -> [f32; 4] {
    let a = black_box(Vector4::new(1.0, 2.0, 3.0, 4.0));
    let b = black_box(Vector4::new(4.0, 3.0, 2.0, 1.0));
    ops::add(a, b).to_array()
}

fn iai_div() -> [f32; 4] {
    let a = black_box(Vector4::new(1.0, 2.0, 3.0, 4.0));
    let b = black_box(Vector4::new(4.0, 3.0, 2.0, 1.0));
    ops::div(a, b).to_array()
}

fn iai_recip() -> [f32; 4] {
    let x = black_box(Vector4::new(1.5, 42.0, 0.3, 997.0));
    math::recip(x).to_array()
}

fn iai_rsqrt() -> [f32; 4] {
    let x = black_box(Vector4::new(1.5, 42.0, 0.3, 997.0));
    math::rsqrt(x).to_array()
}

fn iai_dot4() -> f32 {
    let a = black_box(Vector4::new(1.0, 2.0, 3.0, 4.0));
    let b = black_box(Vector4::new(0.5, 0.25, 4.0, 8.0));
    ops::dot4(a, b)
}

fn iai_normalize4() -> [f32; 4] {
    let v = black_box(Vector4::new(3.0, 4.0, 0.0, 0.0));
    math::normalize4(v).to_array()
}

fn iai_permute() -> [f32; 4] {
    let v = black_box(Vector4::new(1.0, 2.0, 3.0, 4.0));
    ops::permute(v, 3, 2, 1, 0).to_array()
}

iai::main!(
    iai_add,
    iai_div,
    iai_recip,
    iai_rsqrt,
    iai_dot4,
    iai_normalize4,
    iai_permute
);
