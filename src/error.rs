//! Error types for tag trees, item codecs and builder reconciliation.
//!
//! This module contains the [`Error`] type which represents all possible errors
//! that can occur when reading or writing NBT data, decoding item metadata from
//! a tag tree, or regenerating an [`ItemBuilder`](crate::ItemBuilder).
//!
//! # Example
//!
//! ```
//! use na_item::{BigEndian, Error, Result, read_value};
//!
//! fn try_parse(data: &[u8]) -> Result<()> {
//!     match read_value::<BigEndian>(data) {
//!         Ok(_) => Ok(()),
//!         Err(Error::EndOfFile) => {
//!             println!("Data was truncated");
//!             Err(Error::EndOfFile)
//!         }
//!         Err(e) => Err(e),
//!     }
//! }
//!
//! assert!(try_parse(&[0x0A, 0x00]).is_err());
//! ```

use std::fmt::{self, Display};

use crate::TagID;

/// Alias for a `Result` with the error type [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// This type represents all possible errors produced by this crate.
#[derive(Debug)]
pub enum Error {
    /// An I/O error occurred.
    ///
    /// This typically happens when writing to a [`std::io::Write`] implementation.
    IO(std::io::Error),

    /// The input ended unexpectedly.
    EndOfFile,

    /// Extra bytes remain after parsing the NBT data.
    TrailingData(usize),

    /// An invalid NBT tag type was encountered.
    ///
    /// NBT defines tag types 0-12. If a byte outside this range is found
    /// where a tag type is expected, this error is returned with the
    /// invalid byte value.
    InvalidTagType(u8),

    ListTooLong(usize),

    StringTooLong(usize),

    /// Nesting went deeper than [`MAX_DEPTH`](crate::MAX_DEPTH) while reading.
    DepthLimitExceeded(usize),

    /// A list received an element whose tag differs from the list's element tag.
    TagMismatch(u8, u8),

    /// A tag path could not be parsed or addressed a missing list slot.
    InvalidPath { path: String, reason: &'static str },

    /// A tag path walked into a node that cannot hold children.
    PathConflict {
        path: String,
        segment: String,
        found: TagID,
    },

    /// A namespaced key did not follow the `namespace:key` grammar.
    InvalidKey(String),

    /// A known item tag was present with the wrong tag type.
    UnexpectedTag {
        key: String,
        expected: TagID,
        found: TagID,
    },

    /// A known item tag had the right type but an unusable value.
    InvalidValue { key: String, reason: String },

    /// The builder's staged state cannot be reconciled with the item's
    /// current metadata category.
    InvalidBuilderState(&'static str),

    /// Applying raw tag overrides through the tag bridge failed.
    Bridge(Box<Error>),
}

impl Error {
    pub(crate) fn invalid_value(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::InvalidValue {
            key: key.into(),
            reason: reason.into(),
        }
    }
}

impl Display for Error {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::IO(error) => formatter.write_str(&error.to_string()),
            Error::EndOfFile => formatter.write_str("unexpected end of input"),
            Error::TrailingData(remaining_bytes) => formatter.write_str(&format!(
                "trailing data after end of input: {remaining_bytes} bytes remaining"
            )),
            Error::InvalidTagType(tag) => {
                formatter.write_str(&format!("invalid NBT tag type: {tag:#04x}"))
            }
            Error::ListTooLong(len) => formatter.write_str(&format!("list length too long: {len}")),
            Error::StringTooLong(len) => {
                formatter.write_str(&format!("string length too long: {len} bytes"))
            }
            Error::DepthLimitExceeded(depth) => {
                formatter.write_str(&format!("nesting depth limit exceeded: {depth}"))
            }
            Error::TagMismatch(expected, actual) => formatter.write_str(&format!(
                "tag in list mismatch: expected {expected:#04x}, got {actual:#04x}"
            )),
            Error::InvalidPath { path, reason } => {
                formatter.write_str(&format!("invalid tag path `{path}`: {reason}"))
            }
            Error::PathConflict {
                path,
                segment,
                found,
            } => formatter.write_str(&format!(
                "tag path `{path}` cannot descend into `{segment}`: found {found:?}"
            )),
            Error::InvalidKey(key) => formatter.write_str(&format!("invalid namespaced key: {key:?}")),
            Error::UnexpectedTag {
                key,
                expected,
                found,
            } => formatter.write_str(&format!(
                "item tag `{key}` has type {found:?}, expected {expected:?}"
            )),
            Error::InvalidValue { key, reason } => {
                formatter.write_str(&format!("item tag `{key}` is invalid: {reason}"))
            }
            Error::InvalidBuilderState(reason) => {
                formatter.write_str(&format!("invalid builder state: {reason}"))
            }
            Error::Bridge(error) => {
                formatter.write_str(&format!("failed to apply raw tag overrides: {error}"))
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::IO(error) => Some(error),
            Error::Bridge(error) => Some(error.as_ref()),
            _ => None,
        }
    }
}
