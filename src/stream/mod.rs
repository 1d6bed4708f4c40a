// src/stream/mod.rs
//! Stream binding for plain-data values
//!
//! This module moves typed values between memory and byte streams. It
//! includes:
//!
//! - [`ReadPodExt`] - Reads single values or whole runs from any [`std::io::Read`]
//! - [`WritePodExt`] - Writes single values or whole runs to any [`std::io::Write`]
//! - [`async_io`] - The same operations over tokio streams (feature `async`)
//!
//! Bytes cross the boundary untouched in both directions. When the stream's
//! byte order differs from the machine's, convert explicitly with the
//! [`endian`](crate::endian) module after reading or before writing.
//!
//! # Examples
//!
//! ```
//! use binkit_rs::endian::{convert_many, Endianness};
//! use binkit_rs::stream::{ReadPodExt, WritePodExt};
//! use std::io::Cursor;
//!
//! // Emit samples for a big-endian consumer
//! let mut samples: [u32; 3] = [1, 2, 3];
//! convert_many(&mut samples, Endianness::NATIVE, Endianness::Big);
//!
//! let mut stream = Vec::new();
//! stream.write_many(&samples).unwrap();
//!
//! // Read them back and return to native order
//! let mut restored: Vec<u32> = Cursor::new(stream).read_vec(3).unwrap();
//! convert_many(&mut restored, Endianness::Big, Endianness::NATIVE);
//! assert_eq!(restored, vec![1, 2, 3]);
//! ```

mod read;
mod write;

#[cfg(feature = "async")]
pub mod async_io;

pub use read::ReadPodExt;
pub use write::WritePodExt;
