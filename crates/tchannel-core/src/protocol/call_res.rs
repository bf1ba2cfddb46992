//! Call response body (frame type 0x04).
//!
//! Same layout as the request minus `service`, with `code` in place of `ttl`:
//!
//! ```text
//! flags:1 code:1 tracing:25 nh:1 (k~1 v~1){nh}
//! csumtype:1 (csum:4){0,1} arg1~2 arg2~2 arg3~2
//! ```

use crate::error::{Field, Result};
use crate::protocol::call_req::FLAG_MORE_FRAGMENTS;
use crate::protocol::cursor::Cursor;
use crate::protocol::fields::{Args, Checksum, HeaderMap, Tracing};

/// Success.
pub const CODE_OK: u8 = 0x00;
/// Generic application error; other non-zero codes are also errors.
pub const CODE_ERROR: u8 = 0x01;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallResponseBody<'a> {
    pub flags: u8,
    pub code: u8,
    pub tracing: Tracing<'a>,
    pub headers: HeaderMap<'a>,
    pub checksum: Checksum,
    pub args: Args<'a>,
}

impl<'a> CallResponseBody<'a> {
    pub fn decode(cur: &mut Cursor<'a>) -> Result<Self> {
        let flags = cur.read_u8(Field::Flags)?;
        let code = cur.read_u8(Field::Code)?;
        let tracing = Tracing::decode(cur)?;
        let headers = HeaderMap::decode(cur)?;
        let checksum = Checksum::decode(cur)?;
        let args = Args::decode(cur)?;

        Ok(Self {
            flags,
            code,
            tracing,
            headers,
            checksum,
            args,
        })
    }

    /// Any non-zero code is an application error.
    pub fn is_ok(&self) -> bool {
        self.code == CODE_OK
    }

    pub fn has_more_fragments(&self) -> bool {
        self.flags & FLAG_MORE_FRAGMENTS != 0
    }
}
