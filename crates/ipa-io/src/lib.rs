#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for I/O operations.
///
/// Defines [`error::IoError`] variants for file access and encoding/decoding failures.
pub mod error;

/// High-level image reading and writing functions.
///
/// Decoding and encoding is delegated to the `image` crate; the format is
/// guessed from the file contents on read and from the extension on write.
pub mod functional;

pub use crate::error::IoError;
