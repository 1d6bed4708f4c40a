// src/endian/mod.rs
//! Byte-order primitives for plain-data values
//!
//! This module provides in-place byte reversal and endianness conversion for
//! any [`bytemuck::Pod`] type. It includes:
//!
//! - [`Endianness`] - Concrete byte orders plus the resolved [`NATIVE`](Endianness::NATIVE) and [`NETWORK`](Endianness::NETWORK) constants
//! - [`reverse`] / [`reverse_bytes`] / [`reverse_raw`] - Single-value byte reversal
//! - [`reverse_many`] / [`reverse_each`] / [`reverse_raw_many`] - Element-wise reversal of contiguous runs
//! - [`convert`] / [`convert_many`] - Reversal gated on a pair of byte orders
//!
//! # Examples
//!
//! ## Reversing values
//!
//! ```
//! use binkit_rs::endian::{reverse, reverse_many};
//!
//! let mut value: u32 = 1000;
//! reverse(&mut value);
//! assert_eq!(value, 0xE8030000);
//!
//! // Each element is swapped in place; positions never change
//! let mut samples: [i32; 4] = [10, 20, 30, 40];
//! reverse_many(&mut samples);
//! assert_eq!(samples, [0x0A000000, 0x14000000, 0x1E000000, 0x28000000]);
//! ```
//!
//! ## Converting between orders
//!
//! ```
//! use binkit_rs::endian::{convert, Endianness};
//!
//! let mut value: u16 = 0x1234;
//! convert(&mut value, Endianness::Little, Endianness::Big);
//! assert_eq!(value, 0x3412);
//!
//! // Equal orders are a guaranteed no-op
//! convert(&mut value, Endianness::NATIVE, Endianness::NATIVE);
//! assert_eq!(value, 0x3412);
//! ```

mod batch;
mod convert;
mod order;
mod reverse;

pub use batch::{reverse_each, reverse_many, reverse_raw_many};
pub use convert::{convert, convert_many};
pub use order::Endianness;
pub use reverse::{reverse, reverse_bytes, reverse_raw};

// Re-export for convenience
pub use batch::*;
pub use convert::*;
pub use order::*;
pub use reverse::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_agrees_with_reverse() {
        let mut converted: u64 = 0xDEADBEEFCAFEF00D;
        let mut reversed: u64 = 0xDEADBEEFCAFEF00D;

        convert(&mut converted, Endianness::Little, Endianness::Big);
        reverse(&mut reversed);

        assert_eq!(converted, reversed);
    }

    #[test]
    fn test_typed_and_untyped_batches_agree() {
        let mut typed: [u32; 4] = [1, 2, 3, 4];
        let mut untyped: [u8; 16] = bytemuck::cast(typed);

        reverse_many(&mut typed);
        reverse_each(&mut untyped, 4).unwrap();

        assert_eq!(bytemuck::cast::<[u32; 4], [u8; 16]>(typed), untyped);
    }

    #[test]
    fn test_network_order_is_big_endian() {
        assert_eq!(Endianness::NETWORK, Endianness::Big);
    }

    #[test]
    fn test_double_conversion_round_trips() {
        let original: [i16; 5] = [-1, 0, 1, i16::MIN, i16::MAX];
        let mut values = original;

        convert_many(&mut values, Endianness::Little, Endianness::Big);
        convert_many(&mut values, Endianness::Big, Endianness::Little);

        assert_eq!(values, original);
    }
}
