//! Error types for building, reading and writing NBT trees.
//!
//! This module contains the [`Error`] type which represents all possible errors
//! that can occur when accessing tag payloads or when reading or writing NBT
//! data.
//!
//! # Example
//!
//! ```
//! use skyblock_nbt::{read, BigEndian, Error, Result};
//!
//! fn try_parse(data: &[u8]) -> Result<()> {
//!     match read::<BigEndian>(data) {
//!         Ok(tag) => {
//!             println!("Parsed {}", tag.name());
//!             Ok(())
//!         }
//!         Err(Error::EndOfFile) => {
//!             println!("Data was truncated");
//!             Err(Error::EndOfFile)
//!         }
//!         Err(Error::InvalidTagType(tag)) => {
//!             println!("Unknown tag type: {:#04x}", tag);
//!             Err(Error::InvalidTagType(tag))
//!         }
//!         Err(e) => Err(e),
//!     }
//! }
//! ```

use std::fmt::{self, Display};

use crate::TagID;

/// Alias for a `Result` with the error type [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// This type represents all possible errors that can occur when building,
/// reading or writing NBT data.
///
/// The decode failures (truncation, unknown type ids, negative lengths, list
/// kind mismatches, excessive nesting, trailing bytes) all mean the input is
/// corrupt; [`Error::is_malformed`] groups them.
#[derive(Debug)]
pub enum Error {
    Message(String),

    /// An I/O error occurred.
    ///
    /// This typically happens when writing to a [`std::io::Write`] implementation
    /// or reading from a [`std::io::Read`] implementation that encounters an error.
    IO(std::io::Error),

    /// The input ended unexpectedly.
    ///
    /// This error occurs when the NBT data is truncated or incomplete, or when
    /// a declared length is larger than what is left of the input.
    EndOfFile,

    /// Extra bytes remain after parsing the NBT data.
    TrailingData(usize),

    /// An invalid NBT tag type was encountered.
    ///
    /// NBT defines tag types 0-12. If a byte outside this range is found
    /// where a tag type is expected, this error is returned with the
    /// invalid byte value. An `End` tag in root position is reported the
    /// same way.
    InvalidTagType(u8),

    /// An array or list declared a negative length.
    NegativeLength(i32),

    /// A value of the wrong kind was placed into, or declared by, a list.
    TagMismatch { expected: TagID, actual: TagID },

    /// Nesting exceeded the configured depth limit.
    DepthLimitExceeded(usize),

    /// A string, array or list is too long to encode.
    LengthTooLong(usize),

    /// An array element was requested outside `0..len`.
    IndexOutOfRange { index: usize, len: usize },
}

impl Error {
    /// Returns `true` if the error means the decoded input is corrupt.
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            Error::EndOfFile
                | Error::TrailingData(_)
                | Error::InvalidTagType(_)
                | Error::NegativeLength(_)
                | Error::TagMismatch { .. }
                | Error::DepthLimitExceeded(_)
        )
    }
}

#[cfg(feature = "serde")]
impl serde::ser::Error for Error {
    fn custom<T: Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

#[cfg(feature = "serde")]
impl serde::de::Error for Error {
    fn custom<T: Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

impl Display for Error {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Message(message) => formatter.write_str(message),
            Error::IO(error) => formatter.write_str(&error.to_string()),
            Error::EndOfFile => formatter.write_str("unexpected end of input"),
            Error::TrailingData(remaining_bytes) => formatter.write_str(&format!(
                "trailing data after end of input: {remaining_bytes} bytes remaining"
            )),
            Error::InvalidTagType(tag) => {
                formatter.write_str(&format!("invalid NBT tag type: {tag:#04x}"))
            }
            Error::NegativeLength(len) => {
                formatter.write_str(&format!("negative length: {len}"))
            }
            Error::TagMismatch { expected, actual } => formatter.write_str(&format!(
                "tag in list mismatch: expected {expected}, got {actual}"
            )),
            Error::DepthLimitExceeded(depth) => {
                formatter.write_str(&format!("nesting deeper than {depth} levels"))
            }
            Error::LengthTooLong(len) => formatter.write_str(&format!("length too long: {len}")),
            Error::IndexOutOfRange { index, len } => formatter.write_str(&format!(
                "index {index} out of range for array of length {len}"
            )),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::IO(error) => Some(error),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Error::IO(error)
    }
}
