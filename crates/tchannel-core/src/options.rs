//! Optional validation rules layered over the structural decode.

use serde::Deserialize;

/// Parser hardening switches. Both are off by default: per-field bounds
/// checking is always on and is enough to keep decoding memory-safe.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParseOptions {
    /// Cross-check the header's declared `size` against the buffer.
    ///
    /// The size must equal the buffer length and the body must end exactly
    /// at the end of the buffer.
    #[serde(default)]
    pub strict_size: bool,

    /// Reject call requests whose ttl is zero.
    #[serde(default)]
    pub require_ttl: bool,
}

impl ParseOptions {
    /// Everything enabled.
    pub fn strict() -> Self {
        Self {
            strict_size: true,
            require_ttl: true,
        }
    }
}
