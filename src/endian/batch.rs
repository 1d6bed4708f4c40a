// src/endian/batch.rs
use crate::endian::reverse::{swap_word, SwapWord};
use crate::error::{BinkitError, Result};
use bytemuck::Pod;
use std::mem;

/// Reverse the byte order of every element of `values` in place.
///
/// Each element's bytes are reversed independently; the positions of the
/// elements within the slice never change. This is "swap bytes inside each
/// element", not "reverse the slice" and not "reverse the whole buffer as
/// one blob".
///
/// Elements of 2, 4, 8 or 16 bytes are swapped in a single pass of word-wide
/// operations over the run; one-byte (and zero-sized) elements make the whole
/// call a no-op; all other widths fall back to a per-element byte reversal
/// with identical results.
///
/// # Example
///
/// ```
/// use binkit_rs::endian::reverse_many;
///
/// let mut values: [u32; 4] = [10, 20, 30, 40];
/// reverse_many(&mut values);
/// assert_eq!(values, [0x0A000000, 0x14000000, 0x1E000000, 0x28000000]);
/// ```
pub fn reverse_many<T: Pod>(values: &mut [T]) {
    let width = mem::size_of::<T>();
    if width <= 1 || values.is_empty() {
        return;
    }
    reverse_run(bytemuck::cast_slice_mut(values), width);
}

/// Reverse the byte order of every `width`-byte element of `bytes` in place.
///
/// Untyped counterpart of [`reverse_many`] for callers that hold a raw byte
/// buffer and an element width instead of a typed slice.
///
/// # Errors
///
/// Returns [`BinkitError::InvalidWidth`] if `width` is zero and
/// [`BinkitError::LengthMismatch`] if `bytes.len()` is not a multiple of
/// `width`. The buffer is untouched in both cases.
pub fn reverse_each(bytes: &mut [u8], width: usize) -> Result<()> {
    if width == 0 {
        return Err(BinkitError::InvalidWidth(0));
    }
    if bytes.len() % width != 0 {
        return Err(BinkitError::LengthMismatch {
            len: bytes.len(),
            width,
        });
    }
    reverse_run(bytes, width);
    Ok(())
}

/// Reverse the byte order of `count` elements of `width` bytes starting at
/// `ptr`, in place.
///
/// No plain-data check is possible at this entry point; upholding that
/// invariant is the caller's responsibility.
///
/// # Safety
///
/// `ptr` must be valid for reads and writes of `width * count` bytes (which
/// therefore must not overflow), and the region must not be accessed through
/// any other pointer while the call runs. The region must contain plain data
/// only.
pub unsafe fn reverse_raw_many(ptr: *mut u8, width: usize, count: usize) {
    if width <= 1 {
        return;
    }
    reverse_run(std::slice::from_raw_parts_mut(ptr, width * count), width);
}

/// Width dispatch shared by every batch entry point.
fn reverse_run(bytes: &mut [u8], width: usize) {
    match width {
        0 | 1 => {}
        2 => swap_run::<u16>(bytes),
        4 => swap_run::<u32>(bytes),
        8 => swap_run::<u64>(bytes),
        16 => swap_run::<u128>(bytes),
        _ => {
            for element in bytes.chunks_exact_mut(width) {
                element.reverse();
            }
        }
    }
}

/// One pass of word-sized byte swaps across the whole run.
fn swap_run<W: SwapWord>(bytes: &mut [u8]) {
    for chunk in bytes.chunks_exact_mut(mem::size_of::<W>()) {
        swap_word::<W>(chunk);
    }
}
