//! Debug formatting for raw register contents
//!
//! A hex dump of the 16 bytes of a vector register, printed from the
//! highest-addressed byte down to the lowest with a separator between the
//! two 8-byte halves. The format is stable; nothing else about it is part
//! of any correctness contract.

use core::fmt;

use crate::traits::SimdVector4;

/// Raw 16-byte view of a vector register with a hex-dump `Display`.
///
/// # Example
///
/// ```rust
/// use simd4f::{RegisterBytes, SimdVector4, Vector4};
///
/// let v = Vector4::new(1.0, 0.0, 0.0, 0.0);
/// let dump = RegisterBytes::of(v).to_string();
/// assert!(dump.ends_with("00, 00, 00, 3F, 80, 00, 00]"));
/// ```
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct RegisterBytes(pub [u8; 16]);

impl RegisterBytes {
    /// Capture the raw bytes of `v`, lane 0 in the lowest 4 bytes.
    #[inline]
    pub fn of<V: SimdVector4>(v: V) -> Self {
        RegisterBytes(v.to_bytes())
    }
}

impl fmt::Display for RegisterBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (n, byte) in self.0.iter().rev().enumerate() {
            if n == 8 {
                f.write_str(" | ")?;
            } else if n > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{:02X}", byte)?;
        }
        f.write_str("]")
    }
}

impl fmt::Debug for RegisterBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
