//! TChannel host adapters.
//!
//! Wires the core parser into a host runtime: strict config loading, an
//! owned (`Bytes`) decode path, and handler registration for decoded frames.
//! The `cli` module holds the dump binary's arguments. Consumed by the
//! `tchannel-dump` binary and by integration tests.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod cli;
pub mod codec;
pub mod config;
pub mod dispatch;
pub mod error;

pub use error::{HostError, Result};
