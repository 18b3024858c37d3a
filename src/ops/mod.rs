//! Functional-style vector operations
//!
//! Generic operations over any [`crate::traits::SimdVector4`] backend.
//!
//! # Modules
//!
//! - `arithmetic`: lane-wise add/sub/mul/div, including the
//!   vector-scalar and reversed scalar-vector forms
//! - `horizontal`: reductions across lanes (sum, dot product, squared
//!   length) in scalar-returning and broadcast-returning forms
//! - `permute`: cross-lane permutation

pub mod arithmetic;
pub mod horizontal;
pub mod permute;

pub use self::arithmetic::{
    add, add_scalar, div, div_scalar, mul, mul_scalar, neg, scalar_div, scalar_sub, sub,
    sub_scalar,
};
pub use self::horizontal::{
    dot3, dot3_splat, dot4, dot4_splat, length_sq3, length_sq3_splat, length_sq4,
    length_sq4_splat, sum3, sum4,
};
pub use self::permute::permute;
