#![no_std]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
#![warn(clippy::all)]

// Core trait definition
pub mod traits;

// Backend implementations
pub mod backends;

// Functional-style vector operations
pub mod ops;

// Refined math kernels (reciprocal, sqrt, normalization)
pub mod math;

// Raw register debug formatting
pub mod fmt;

// Public re-exports for convenience
pub use fmt::RegisterBytes;
pub use traits::SimdVector4;

// Only re-export the SSE type when the feature is enabled AND we're
// targeting x86/x86_64
#[cfg(all(feature = "sse", any(target_arch = "x86", target_arch = "x86_64")))]
pub use backends::sse::SseVector4;

// Only re-export the NEON type when the feature is enabled AND we're
// targeting aarch64
#[cfg(all(feature = "neon", target_arch = "aarch64"))]
pub use backends::neon::NeonVector4;

/// The active backend's register type.
///
/// Resolves at compile time to the backend whose cargo feature is enabled
/// and whose instruction family exists on the build target:
/// - `sse` feature on x86/x86_64: [`SseVector4`]
/// - `neon` feature on aarch64: [`NeonVector4`]
///
/// The two gates are disjoint, so at most one definition is ever active.
/// When neither applies (a different architecture, or
/// `default-features = false`), this alias and both backend types do not
/// exist and the operation surface is unusable: there is deliberately no
/// scalar fallback in this layer.
#[cfg(all(feature = "sse", any(target_arch = "x86", target_arch = "x86_64")))]
pub type Vector4 = SseVector4;

/// The active backend's register type (NEON backend for ARM64).
#[cfg(all(feature = "neon", target_arch = "aarch64"))]
pub type Vector4 = NeonVector4;
