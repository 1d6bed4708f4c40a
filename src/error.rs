// src/error.rs
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BinkitError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("unexpected end of stream while reading {expected} bytes")]
    UnexpectedEndOfData { expected: usize },

    #[error("invalid element width: {0}")]
    InvalidWidth(usize),

    #[error("buffer of {len} bytes cannot be split into elements of {width} bytes")]
    LengthMismatch { len: usize, width: usize },
}

pub type Result<T> = std::result::Result<T, BinkitError>;
