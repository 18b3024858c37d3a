//! SIMD backend implementations
//!
//! Each backend wraps the native 128-bit register type of one instruction
//! family and implements [`crate::traits::SimdVector4`]. Backends are
//! selected at compile time: a cargo feature opts the family in, and the
//! matching `target_arch` gate picks the one that exists on the build
//! target. At most one backend is ever active per build; a build where no
//! enabled feature matches the target architecture compiles the layer out
//! entirely (there is no scalar fallback in this crate).

#[cfg(all(feature = "sse", any(target_arch = "x86", target_arch = "x86_64")))]
pub mod sse;

#[cfg(all(feature = "neon", target_arch = "aarch64"))]
pub mod neon;
