// src/endian/convert.rs
use crate::endian::batch::reverse_many;
use crate::endian::order::Endianness;
use crate::endian::reverse::reverse;
use bytemuck::Pod;

/// Convert a single plain-data value between byte orders, in place.
///
/// The value is reversed exactly when `from != to`; declaring the same order
/// twice is a guaranteed no-op. Pass [`Endianness::NATIVE`] wherever "the
/// order of this machine" is meant; it is already a concrete
/// [`Little`](Endianness::Little) or [`Big`](Endianness::Big), so both sides
/// of the comparison are always fully resolved.
///
/// Like [`reverse`], this treats the value as one opaque block; it cannot
/// convert the members of a composite type individually.
///
/// # Example
///
/// ```
/// use binkit_rs::endian::{convert, Endianness};
///
/// let mut value: u32 = 1000;
/// convert(&mut value, Endianness::Little, Endianness::Big);
/// assert_eq!(value, 0xE8030000);
/// convert(&mut value, Endianness::Big, Endianness::Little);
/// assert_eq!(value, 1000);
/// ```
pub fn convert<T: Pod>(value: &mut T, from: Endianness, to: Endianness) {
    if from != to {
        reverse(value);
    }
}

/// Convert every element of a sequence between byte orders, in place.
///
/// Applies the same gate as [`convert`] to the run as a whole: when the
/// orders differ, every element is byte-swapped independently (element
/// positions are preserved, see [`reverse_many`]); when they match, nothing
/// is touched.
pub fn convert_many<T: Pod>(values: &mut [T], from: Endianness, to: Endianness) {
    if from != to {
        reverse_many(values);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_orders_are_noops() {
        for order in [Endianness::Little, Endianness::Big, Endianness::NATIVE] {
            let mut value: u64 = 0x0102030405060708;
            convert(&mut value, order, order);
            assert_eq!(value, 0x0102030405060708);
        }
    }

    #[test]
    fn test_differing_orders_swap() {
        let mut value: u32 = 1000;
        convert(&mut value, Endianness::Little, Endianness::Big);
        assert_eq!(value, 1000u32.swap_bytes());

        convert(&mut value, Endianness::Big, Endianness::Little);
        assert_eq!(value, 1000);
    }

    #[test]
    fn test_native_resolves_to_concrete_order() {
        // NATIVE compares equal to exactly one of the two concrete orders,
        // so one direction is a no-op and the other is a swap.
        let mut kept: u16 = 0x1234;
        convert(&mut kept, Endianness::NATIVE, Endianness::NATIVE);
        assert_eq!(kept, 0x1234);

        let foreign = if Endianness::NATIVE == Endianness::Little {
            Endianness::Big
        } else {
            Endianness::Little
        };
        let mut swapped: u16 = 0x1234;
        convert(&mut swapped, Endianness::NATIVE, foreign);
        assert_eq!(swapped, 0x3412);
    }

    #[test]
    fn test_convert_many_gate() {
        let mut untouched: [u32; 3] = [1, 2, 3];
        convert_many(&mut untouched, Endianness::Big, Endianness::Big);
        assert_eq!(untouched, [1, 2, 3]);

        let mut swapped: [u32; 3] = [1, 2, 3];
        convert_many(&mut swapped, Endianness::Big, Endianness::Little);
        assert_eq!(
            swapped,
            [1u32.swap_bytes(), 2u32.swap_bytes(), 3u32.swap_bytes()]
        );
    }

    #[test]
    fn test_round_trip_restores_value() {
        let original: [u64; 4] = [7, 8, 9, u64::MAX - 1];
        let mut values = original;

        convert_many(&mut values, Endianness::NATIVE, Endianness::NETWORK);
        convert_many(&mut values, Endianness::NETWORK, Endianness::NATIVE);
        assert_eq!(values, original);
    }
}
