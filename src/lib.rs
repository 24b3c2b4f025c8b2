//! Packed Bitfield - Fixed-Capacity Word-Packed Bit Arrays
//!
//! A bitfield is a bit array of fixed logical length, stored in 32-bit words.
//! It supports indexed access, two equality relations, and boolean set
//! operations (union, intersection, complement) between bitfields whose
//! lengths differ.
//!
//! # Key Characteristics
//!
//! - Storage of `length / 32 + 1` words, one of them always reserved
//! - Accessors accept the inclusive range `0..=length`
//! - Union and intersection zero-extend the shorter operand
//! - Word-level equality (`==`) kept apart from semantic equality
//!   ([`BitField::bits_differ`])
//!
//! # Examples
//!
//! ```
//! use packed_bitfield::BitField;
//!
//! let mut a = BitField::new(400)?;
//! a.set_bit(200)?;
//! a.set_bit(300)?;
//!
//! let mut b = BitField::new(500)?;
//! b.set_bit(200)?;
//! b.set_bit(450)?;
//!
//! let union = &a | &b;
//! assert_eq!(union.length(), 500);
//! assert_eq!(union.get_acts(), vec![200, 300, 450]);
//!
//! let intersection = &a & &b;
//! assert_eq!(intersection.get_acts(), vec![200]);
//!
//! let complement = !&a;
//! assert_eq!(complement.num_set(), 398);
//! # Ok::<(), packed_bitfield::BitFieldError>(())
//! ```
//!
//! # Logging
//!
//! Rejected lengths and indices are reported through the `log` facade at
//! `debug` level. The crate never installs a logger.

// Module declarations
pub mod bitfield;
pub mod error;
pub mod text;

// Re-exports for convenient access
pub use bitfield::{BitField, Word, BITS_PER_WORD, WORD_MAX};
pub use error::{BitFieldError, Result};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = "Packed Bitfield";

/// Get version string
pub fn version() -> String {
    format!("{} v{}", NAME, VERSION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        let ver = version();
        assert!(ver.contains("Packed Bitfield"));
        assert!(ver.contains("1.0.0"));
    }

    #[test]
    fn test_re_exports() {
        let _bf = BitField::zeroed(32);
        let _result: Result<()> = Ok(());
        assert_eq!(BITS_PER_WORD, 32);
        assert_eq!(WORD_MAX, u32::MAX);
    }
}
