//! Top-level facade crate for the TChannel frame parser.
//!
//! Re-exports the core parser and the host adapters so users can depend on a single crate.

pub mod core {
    pub use tchannel_core::*;
}

pub mod host {
    pub use tchannel_host::*;
}

pub use tchannel_core::{parse, Frame, ParseError};
