// src/lib.rs
//! # binkit-rs
//!
//! A small, fast Rust library for byte-order manipulation of plain-data values,
//! from single integers up to large contiguous runs, with matched stream bindings.
//!
//! ## Features
//!
//! - 🚀 **High Performance**: Dedicated byteswap paths for 2, 4, 8 and 16-byte values, bulk single-read stream fills
//! - 🎯 **Type Safe**: The [`bytemuck::Pod`] bound rejects reference-carrying types at compile time
//! - 🔒 **No Hidden Conversion**: Streams move bytes verbatim; byte order changes only where you ask for it
//! - 📦 **Layout Tolerant**: Works on unaligned data and any `#[repr(C)]` plain-data struct
//! - ⚡ **Async Ready**: The same stream operations over tokio (feature `async`)
//!
//! ## Quick Start
//!
//! ### Reversing byte order
//!
//! ```rust
//! use binkit_rs::*;
//!
//! // Single values
//! let mut value: u32 = 1000;
//! reverse(&mut value);
//! assert_eq!(value, 0xE8030000);
//!
//! // Runs of values, each element swapped in place
//! let mut samples: [i32; 4] = [10, 20, 30, 40];
//! reverse_many(&mut samples);
//! assert_eq!(samples, [0x0A000000, 0x14000000, 0x1E000000, 0x28000000]);
//!
//! // Conversions are reversals gated on a pair of orders
//! let mut header: u16 = 0x1234;
//! convert(&mut header, Endianness::Big, Endianness::Big);
//! assert_eq!(header, 0x1234);
//! ```
//!
//! ### Binding to streams
//!
//! ```rust
//! use binkit_rs::prelude::*;
//! use std::io::Cursor;
//!
//! fn main() -> Result<()> {
//!     // Emit samples for a big-endian consumer
//!     let mut samples: [f64; 3] = [1.0, 2.5, -3.75];
//!     convert_many(&mut samples, Endianness::NATIVE, Endianness::NETWORK);
//!
//!     let mut stream = Vec::new();
//!     stream.write_many(&samples)?;
//!
//!     // Read them back and return to native order
//!     let mut restored: Vec<f64> = Cursor::new(stream).read_vec(3)?;
//!     convert_many(&mut restored, Endianness::NETWORK, Endianness::NATIVE);
//!     assert_eq!(restored, vec![1.0, 2.5, -3.75]);
//!
//!     Ok(())
//! }
//! ```
//!
//! ### Async streams
//!
//! ```rust,no_run
//! # #[cfg(feature = "async")]
//! #[tokio::main]
//! async fn main() -> binkit_rs::Result<()> {
//!     use binkit_rs::stream::async_io;
//!     use std::io::Cursor;
//!
//!     let mut cursor = Cursor::new(Vec::new());
//!     async_io::write_many(&mut cursor, &[1u32, 2, 3]).await?;
//!
//!     let mut cursor = Cursor::new(cursor.into_inner());
//!     let values: Vec<u32> = async_io::read_vec(&mut cursor, 3).await?;
//!     assert_eq!(values, vec![1, 2, 3]);
//!
//!     Ok(())
//! }
//! # #[cfg(not(feature = "async"))]
//! # fn main() {}
//! ```

// Modules
pub mod endian;
pub mod error;
pub mod stream;

// Re-export commonly used items at the crate root for convenience
pub use error::{BinkitError, Result};

// Endian exports
pub use endian::{
    convert,
    convert_many,
    reverse,
    reverse_bytes,
    reverse_each,
    reverse_many,
    Endianness,
};

// Stream exports
pub use stream::{ReadPodExt, WritePodExt};

// Prelude module for glob imports
pub mod prelude {
    //! Convenient imports for common use cases.
    //!
    //! ```rust
    //! use binkit_rs::prelude::*;
    //! ```

    pub use crate::endian::{convert, convert_many, reverse, reverse_many, Endianness};
    pub use crate::error::{BinkitError, Result};
    pub use crate::stream::{ReadPodExt, WritePodExt};
}

// Version information
/// The largest element width with a dedicated byteswap path
pub const MAX_SPECIALIZED_WIDTH: usize = 16;

/// The library version
pub const LIBRARY_VERSION: &str = env!("CARGO_PKG_VERSION");
