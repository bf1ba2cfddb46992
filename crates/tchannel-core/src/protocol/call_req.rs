//! Call request body (frame type 0x03).
//!
//! ```text
//! flags:1 ttl:4 tracing:25 service~1 nh:1 (k~1 v~1){nh}
//! csumtype:1 (csum:4){0,1} arg1~2 arg2~2 arg3~2
//! ```

use std::borrow::Cow;

use crate::error::{Field, Result};
use crate::protocol::cursor::Cursor;
use crate::protocol::fields::{Args, Checksum, HeaderMap, Tracing};

/// Call flag: more fragments follow in continuation frames.
pub const FLAG_MORE_FRAGMENTS: u8 = 0x01;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallRequestBody<'a> {
    pub flags: u8,
    /// Milliseconds; zero is not rejected unless `require_ttl` is set.
    pub ttl: u32,
    pub tracing: Tracing<'a>,
    pub service: Cow<'a, str>,
    pub headers: HeaderMap<'a>,
    pub checksum: Checksum,
    pub args: Args<'a>,
}

impl<'a> CallRequestBody<'a> {
    /// Decode a body from a cursor positioned just after the frame header.
    /// Fails on the first field that does not fit.
    pub fn decode(cur: &mut Cursor<'a>) -> Result<Self> {
        let flags = cur.read_u8(Field::Flags)?;
        let ttl = cur.read_u32_be(Field::Ttl)?;
        let tracing = Tracing::decode(cur)?;
        let service = cur.read_len8_str(Field::Service)?;
        let headers = HeaderMap::decode(cur)?;
        let checksum = Checksum::decode(cur)?;
        let args = Args::decode(cur)?;

        Ok(Self {
            flags,
            ttl,
            tracing,
            service,
            headers,
            checksum,
            args,
        })
    }

    pub fn has_more_fragments(&self) -> bool {
        self.flags & FLAG_MORE_FRAGMENTS != 0
    }
}
