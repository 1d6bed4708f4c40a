// src/stream/read.rs
use crate::error::{BinkitError, Result};
use bytemuck::{Pod, Zeroable};
use std::io::{self, Read};

/// Fill `buf` completely, reporting a short stream as its own error.
///
/// A stream that ends before `buf` is full produces
/// [`BinkitError::UnexpectedEndOfData`] carrying the number of bytes the
/// request needed; any other IO failure passes through unchanged.
pub(crate) fn fill_exact<R: Read + ?Sized>(reader: &mut R, buf: &mut [u8]) -> Result<()> {
    reader.read_exact(buf).map_err(|err| match err.kind() {
        io::ErrorKind::UnexpectedEof => BinkitError::UnexpectedEndOfData { expected: buf.len() },
        _ => BinkitError::Io(err),
    })
}

/// Extension methods for reading plain-data values from any [`Read`] stream.
///
/// Values come back with their bytes exactly as the stream stores them; no
/// byte-order conversion happens here. Pair with
/// [`convert`](crate::endian::convert) or
/// [`convert_many`](crate::endian::convert_many) when the stream's order
/// differs from the machine's.
///
/// Implemented for every `Read` type via a blanket impl.
pub trait ReadPodExt: Read {
    /// Read a single value from the stream.
    ///
    /// Reads exactly `size_of::<T>()` bytes. On a short stream the value is
    /// not returned and the error reports how many bytes were required.
    ///
    /// # Example
    ///
    /// ```
    /// use binkit_rs::endian::{convert, Endianness};
    /// use binkit_rs::stream::ReadPodExt;
    /// use std::io::Cursor;
    ///
    /// // A big-endian u32 on the wire
    /// let mut cursor = Cursor::new(vec![0x00, 0x00, 0x03, 0xE8]);
    ///
    /// let mut value: u32 = cursor.read_value().unwrap();
    /// convert(&mut value, Endianness::Big, Endianness::NATIVE);
    /// assert_eq!(value, 1000);
    /// ```
    fn read_value<T: Pod>(&mut self) -> Result<T> {
        let mut value = T::zeroed();
        fill_exact(self, bytemuck::bytes_of_mut(&mut value))?;
        Ok(value)
    }

    /// Read values from the stream into an existing slice.
    ///
    /// The whole run is filled with a single bulk read of
    /// `values.len() * size_of::<T>()` bytes; element order matches the
    /// stream. If the stream ends early the slice contents are unspecified
    /// and the error reports the full byte count the run needed.
    ///
    /// # Example
    ///
    /// ```
    /// use binkit_rs::stream::{ReadPodExt, WritePodExt};
    /// use std::io::Cursor;
    ///
    /// let mut stream = Vec::new();
    /// stream.write_many(&[10i32, 20, 30, 40]).unwrap();
    ///
    /// let mut samples = [0i32; 4];
    /// Cursor::new(stream).read_many(&mut samples).unwrap();
    /// assert_eq!(samples, [10, 20, 30, 40]);
    /// ```
    fn read_many<T: Pod>(&mut self, values: &mut [T]) -> Result<()> {
        if values.is_empty() || std::mem::size_of::<T>() == 0 {
            return Ok(());
        }
        fill_exact(self, bytemuck::cast_slice_mut(values))
    }

    /// Read `count` values from the stream into a new vector.
    ///
    /// # Example
    ///
    /// ```
    /// use binkit_rs::stream::ReadPodExt;
    /// use std::io::Cursor;
    ///
    /// let data = [1i32.to_ne_bytes(), 2i32.to_ne_bytes()].concat();
    /// let mut cursor = Cursor::new(data);
    ///
    /// let values: Vec<i32> = cursor.read_vec(2).unwrap();
    /// assert_eq!(values, vec![1, 2]);
    /// ```
    fn read_vec<T: Pod>(&mut self, count: usize) -> Result<Vec<T>> {
        if count == 0 {
            return Ok(Vec::new());
        }

        let mut values = vec![T::zeroed(); count];
        self.read_many(&mut values)?;
        Ok(values)
    }
}

impl<R: Read + ?Sized> ReadPodExt for R {}
