// src/endian/reverse.rs
use bytemuck::Pod;
use std::mem;

/// Unsigned widths that map to a single byte-swap instruction.
pub(crate) trait SwapWord: Copy {
    fn swap_bytes(self) -> Self;
}

macro_rules! impl_swap_word {
    ($($ty:ty),*) => {$(
        impl SwapWord for $ty {
            #[inline(always)]
            fn swap_bytes(self) -> Self {
                <$ty>::swap_bytes(self)
            }
        }
    )*};
}

impl_swap_word!(u16, u32, u64, u128);

/// Byte-swap the block at `bytes` as one `W`-sized word.
///
/// The block can have any alignment (it may sit anywhere inside a larger
/// value), so the word travels through unaligned loads and stores.
#[inline(always)]
pub(crate) fn swap_word<W: SwapWord>(bytes: &mut [u8]) {
    debug_assert_eq!(bytes.len(), mem::size_of::<W>());
    let ptr = bytes.as_mut_ptr().cast::<W>();
    // The slice spans exactly one W and is exclusively borrowed.
    unsafe { ptr.write_unaligned(ptr.read_unaligned().swap_bytes()) };
}

/// Reverse the byte order of `bytes` in place, treating the whole slice as a
/// single opaque value.
///
/// Blocks of 2, 4, 8 and 16 bytes are handled with a single-word byte swap;
/// a one-byte block has no order and is left untouched; every other length
/// falls back to a two-pointer reversal. The specialized paths are bit-exact
/// with the fallback and differ only in cost.
#[inline]
pub fn reverse_bytes(bytes: &mut [u8]) {
    match bytes.len() {
        0 | 1 => {}
        2 => swap_word::<u16>(bytes),
        4 => swap_word::<u32>(bytes),
        8 => swap_word::<u64>(bytes),
        16 => swap_word::<u128>(bytes),
        _ => bytes.reverse(),
    }
}

/// Reverse the byte order of a single plain-data value in place.
///
/// The [`Pod`] bound restricts this to types whose in-memory representation
/// is nothing but bytes, with no references and no padding. A type that
/// carries a reference fails to compile here, so memory can never be
/// corrupted by swapping identity-bearing bits. Use
/// `#[derive(Pod, Zeroable)]` (with `#[repr(C)]`) to opt custom structs in.
///
/// Note that a composite value is reversed as one opaque block; its fields
/// are not swapped member-by-member.
///
/// # Example
///
/// ```
/// use binkit_rs::endian::reverse;
///
/// let mut value: u32 = 1000; // 0xE8 0x03 0x00 0x00 on little-endian hosts
/// reverse(&mut value);
/// assert_eq!(value, 0xE8030000);
/// reverse(&mut value);
/// assert_eq!(value, 1000);
/// ```
pub fn reverse<T: Pod>(value: &mut T) {
    reverse_bytes(bytemuck::bytes_of_mut(value));
}

/// Reverse the byte order of the `width` bytes at `ptr` in place.
///
/// Untyped counterpart of [`reverse`] for callers that hold only a raw
/// location and a byte count. No plain-data check is possible at this entry
/// point; upholding that invariant is the caller's responsibility.
///
/// # Safety
///
/// `ptr` must be valid for reads and writes of `width` bytes, and the region
/// must not be accessed through any other pointer while the call runs. The
/// region must contain plain data only; reversing bytes that encode a
/// reference produces a dangling reference.
pub unsafe fn reverse_raw(ptr: *mut u8, width: usize) {
    reverse_bytes(std::slice::from_raw_parts_mut(ptr, width));
}
