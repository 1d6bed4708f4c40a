// src/endian/order.rs
use byteorder::{BigEndian, ByteOrder, LittleEndian};

/// Byte-order tag for a value or a sequence of values.
///
/// Only the two concrete orders are representable. The order of the executing
/// machine is deliberately not a third variant: it is exposed as the resolved
/// constant [`Endianness::NATIVE`], so an unresolved "local" tag can never be
/// stored or persisted. Pass `Endianness::NATIVE` at a conversion call site
/// whenever "whatever this machine uses" is meant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endianness {
    /// Least-significant byte first.
    Little,
    /// Most-significant byte first.
    Big,
}

impl Endianness {
    /// The byte order of the machine this crate was compiled for.
    #[cfg(target_endian = "little")]
    pub const NATIVE: Endianness = Endianness::Little;

    /// The byte order of the machine this crate was compiled for.
    #[cfg(target_endian = "big")]
    pub const NATIVE: Endianness = Endianness::Big;

    /// Conventional network byte order (always big-endian).
    pub const NETWORK: Endianness = Endianness::Big;

    /// Check whether this order matches the executing machine's order.
    ///
    /// Converting between an order and itself is a no-op, so this is the
    /// "would a conversion actually touch memory" predicate.
    #[inline]
    pub fn is_native(self) -> bool {
        self == Self::NATIVE
    }
}

macro_rules! order_accessors {
    ($($ty:ty => $read:ident, $write:ident;)*) => {$(
        impl Endianness {
            #[doc = concat!("Read a `", stringify!($ty), "` from the start of `buf` in this byte order.")]
            ///
            /// # Panics
            ///
            #[doc = concat!("Panics if `buf` is shorter than `size_of::<", stringify!($ty), ">()`.")]
            #[inline]
            pub fn $read(self, buf: &[u8]) -> $ty {
                match self {
                    Endianness::Little => LittleEndian::$read(buf),
                    Endianness::Big => BigEndian::$read(buf),
                }
            }

            #[doc = concat!("Write a `", stringify!($ty), "` to the start of `buf` in this byte order.")]
            ///
            /// # Panics
            ///
            #[doc = concat!("Panics if `buf` is shorter than `size_of::<", stringify!($ty), ">()`.")]
            #[inline]
            pub fn $write(self, buf: &mut [u8], value: $ty) {
                match self {
                    Endianness::Little => LittleEndian::$write(buf, value),
                    Endianness::Big => BigEndian::$write(buf, value),
                }
            }
        }
    )*};
}

order_accessors! {
    u16 => read_u16, write_u16;
    u32 => read_u32, write_u32;
    u64 => read_u64, write_u64;
    u128 => read_u128, write_u128;
    i16 => read_i16, write_i16;
    i32 => read_i32, write_i32;
    i64 => read_i64, write_i64;
    i128 => read_i128, write_i128;
    f32 => read_f32, write_f32;
    f64 => read_f64, write_f64;
}
