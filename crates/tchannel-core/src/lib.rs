//! TChannel core: panic-free decoding of TChannel call frames.
//!
//! The parser takes one complete, already-framed buffer and returns either a
//! decoded call request / call response borrowing that buffer, or a
//! `ParseError`. Argument payloads, tracing ids and valid UTF-8 strings are
//! never copied; they are slices of the caller's buffer.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here.
//! Every read is bounds-checked by [`protocol::cursor::Cursor`]; malformed
//! input surfaces as `ParseError`, never as a crash or an out-of-bounds read.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod options;
pub mod protocol;

/// Shared result type.
pub use error::{ErrorCode, Field, ParseError, Result};
pub use options::ParseOptions;
pub use protocol::frame::{parse, parse_with, Frame};
