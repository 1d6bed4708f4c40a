// src/stream/write.rs
use crate::error::Result;
use bytemuck::Pod;
use std::io::Write;

/// Extension methods for writing plain-data values to any [`Write`] stream.
///
/// Values are emitted with their bytes exactly as held in memory; no
/// byte-order conversion happens here. Convert before writing (see
/// [`convert_many`](crate::endian::convert_many)) when the stream must use a
/// foreign order.
///
/// Implemented for every `Write` type via a blanket impl.
pub trait WritePodExt: Write {
    /// Write a single value to the stream.
    ///
    /// Emits exactly `size_of::<T>()` bytes.
    ///
    /// # Example
    ///
    /// ```
    /// use binkit_rs::stream::WritePodExt;
    ///
    /// let mut stream = Vec::new();
    /// stream.write_value(&0x0403_0201u32).unwrap();
    /// assert_eq!(stream.len(), 4);
    /// ```
    fn write_value<T: Pod>(&mut self, value: &T) -> Result<()> {
        self.write_all(bytemuck::bytes_of(value))?;
        Ok(())
    }

    /// Write a slice of values to the stream as one contiguous run.
    ///
    /// Emits `values.len() * size_of::<T>()` bytes in a single bulk write;
    /// element order on the stream matches the slice.
    fn write_many<T: Pod>(&mut self, values: &[T]) -> Result<()> {
        if values.is_empty() || std::mem::size_of::<T>() == 0 {
            return Ok(());
        }
        self.write_all(bytemuck::cast_slice(values))?;
        Ok(())
    }
}

impl<W: Write + ?Sized> WritePodExt for W {}
