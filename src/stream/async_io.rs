// src/stream/async_io.rs
//! Async counterparts of [`ReadPodExt`](crate::stream::ReadPodExt) and
//! [`WritePodExt`](crate::stream::WritePodExt), built on tokio.
//!
//! Semantics match the blocking versions exactly: bytes move between memory
//! and the stream untouched, a short stream reports
//! [`UnexpectedEndOfData`](crate::error::BinkitError::UnexpectedEndOfData),
//! and byte-order conversion stays a separate, explicit step.

use crate::error::{BinkitError, Result};
use bytemuck::{Pod, Zeroable};
use std::io;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

async fn fill_exact<R>(reader: &mut R, buf: &mut [u8]) -> Result<()>
where
    R: AsyncRead + Unpin + ?Sized,
{
    match reader.read_exact(buf).await {
        Ok(_) => Ok(()),
        Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => {
            Err(BinkitError::UnexpectedEndOfData { expected: buf.len() })
        }
        Err(err) => Err(BinkitError::Io(err)),
    }
}

/// Read a single value from an async stream.
///
/// ```
/// # async fn demo() -> binkit_rs::error::Result<()> {
/// use binkit_rs::stream::async_io;
/// use std::io::Cursor;
///
/// let mut cursor = Cursor::new(vec![0x00, 0x00, 0x03, 0xE8]);
/// let value: u32 = async_io::read_value(&mut cursor).await?;
/// # Ok(())
/// # }
/// ```
pub async fn read_value<T, R>(reader: &mut R) -> Result<T>
where
    T: Pod,
    R: AsyncRead + Unpin + ?Sized,
{
    let mut value = T::zeroed();
    fill_exact(reader, bytemuck::bytes_of_mut(&mut value)).await?;
    Ok(value)
}

/// Read values from an async stream into an existing slice.
///
/// The run is filled with a single bulk read, like
/// [`ReadPodExt::read_many`](crate::stream::ReadPodExt::read_many).
pub async fn read_many<T, R>(reader: &mut R, values: &mut [T]) -> Result<()>
where
    T: Pod,
    R: AsyncRead + Unpin + ?Sized,
{
    if values.is_empty() || std::mem::size_of::<T>() == 0 {
        return Ok(());
    }
    fill_exact(reader, bytemuck::cast_slice_mut(values)).await
}

/// Read `count` values from an async stream into a new vector.
pub async fn read_vec<T, R>(reader: &mut R, count: usize) -> Result<Vec<T>>
where
    T: Pod,
    R: AsyncRead + Unpin + ?Sized,
{
    if count == 0 {
        return Ok(Vec::new());
    }

    let mut values = vec![T::zeroed(); count];
    read_many(reader, &mut values).await?;
    Ok(values)
}

/// Write a single value to an async stream.
pub async fn write_value<T, W>(writer: &mut W, value: &T) -> Result<()>
where
    T: Pod,
    W: AsyncWrite + Unpin + ?Sized,
{
    writer.write_all(bytemuck::bytes_of(value)).await?;
    Ok(())
}

/// Write a slice of values to an async stream as one contiguous run.
pub async fn write_many<T, W>(writer: &mut W, values: &[T]) -> Result<()>
where
    T: Pod,
    W: AsyncWrite + Unpin + ?Sized,
{
    if values.is_empty() || std::mem::size_of::<T>() == 0 {
        return Ok(());
    }
    writer.write_all(bytemuck::cast_slice(values)).await?;
    Ok(())
}
