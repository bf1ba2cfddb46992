//! Field groups shared by call request and call response bodies.

use std::borrow::Cow;
use std::fmt;

use crate::error::{Field, Result};
use crate::protocol::cursor::{ArgumentRange, Cursor};

/// span id, parent id, trace id.
pub const TRACING_IDS_LEN: usize = 24;
const TRACE_ID_LEN: usize = 8;

/// Distributed-trace identifiers carried by every call frame.
///
/// The ids are opaque and borrowed from the frame buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tracing<'a> {
    pub span_id: &'a [u8],
    pub parent_id: &'a [u8],
    pub trace_id: &'a [u8],
    pub flags: u8,
}

impl<'a> Tracing<'a> {
    pub fn decode(cur: &mut Cursor<'a>) -> Result<Self> {
        let ids = cur.take(Field::TracingIds, TRACING_IDS_LEN)?;
        let (span_id, rest) = ids.split_at(TRACE_ID_LEN);
        let (parent_id, trace_id) = rest.split_at(TRACE_ID_LEN);
        let flags = cur.read_u8(Field::TraceFlags)?;
        Ok(Self {
            span_id,
            parent_id,
            trace_id,
            flags,
        })
    }
}

/// Transport headers in wire order. Duplicate keys are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderMap<'a> {
    entries: Vec<(Cow<'a, str>, Cow<'a, str>)>,
}

impl<'a> HeaderMap<'a> {
    /// `nh:1 (k~1 v~1){nh}`
    pub fn decode(cur: &mut Cursor<'a>) -> Result<Self> {
        let nh = cur.read_u8(Field::HeaderCount)?;
        let mut entries = Vec::with_capacity(usize::from(nh));
        for _ in 0..nh {
            let key = cur.read_len8_str(Field::HeaderKey)?;
            let value = cur.read_len8_str(Field::HeaderValue)?;
            entries.push((key, value));
        }
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_ref())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_ref(), v.as_ref()))
    }

    pub fn into_entries(self) -> Vec<(Cow<'a, str>, Cow<'a, str>)> {
        self.entries
    }
}

/// Checksum algorithms defined by the protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChecksumKind {
    None,
    Crc32,
    Farmhash32,
    Crc32C,
}

/// Checksum tag over the arguments. Extracted, never verified.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Checksum {
    pub csum_type: u8,
    /// Zero when `csum_type` is 0; the value is absent on the wire then.
    pub value: u32,
}

impl Checksum {
    /// `csumtype:1 (csum:4){0,1}`
    pub fn decode(cur: &mut Cursor<'_>) -> Result<Self> {
        let csum_type = cur.read_u8(Field::ChecksumType)?;
        let value = if csum_type != 0 {
            cur.read_u32_be(Field::ChecksumValue)?
        } else {
            0
        };
        Ok(Self { csum_type, value })
    }

    /// `None` for types this protocol version does not define.
    pub fn kind(&self) -> Option<ChecksumKind> {
        match self.csum_type {
            0x00 => Some(ChecksumKind::None),
            0x01 => Some(ChecksumKind::Crc32),
            0x02 => Some(ChecksumKind::Farmhash32),
            0x03 => Some(ChecksumKind::Crc32C),
            _ => None,
        }
    }
}

/// arg1..arg3 as ranges into the frame buffer.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Args<'a> {
    buf: &'a [u8],
    ranges: [ArgumentRange; 3],
}

impl<'a> Args<'a> {
    /// `arg1~2 arg2~2 arg3~2`
    pub fn decode(cur: &mut Cursor<'a>) -> Result<Self> {
        let arg1 = cur.read_len16_be_range(Field::Arg1)?;
        let arg2 = cur.read_len16_be_range(Field::Arg2)?;
        let arg3 = cur.read_len16_be_range(Field::Arg3)?;
        Ok(Self {
            buf: cur.buffer(),
            ranges: [arg1, arg2, arg3],
        })
    }

    pub fn ranges(&self) -> [ArgumentRange; 3] {
        self.ranges
    }

    pub fn arg1(&self) -> &'a [u8] {
        self.resolve(0)
    }

    pub fn arg2(&self) -> &'a [u8] {
        self.resolve(1)
    }

    pub fn arg3(&self) -> &'a [u8] {
        self.resolve(2)
    }

    fn resolve(&self, idx: usize) -> &'a [u8] {
        self.ranges
            .get(idx)
            .and_then(|r| r.slice(self.buf))
            .unwrap_or_default()
    }
}

impl fmt::Debug for Args<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a1, a2, a3] = self.ranges;
        f.debug_struct("Args")
            .field("arg1", &(a1.start..a1.end))
            .field("arg2", &(a2.start..a2.end))
            .field("arg3", &(a3.start..a3.end))
            .finish()
    }
}
