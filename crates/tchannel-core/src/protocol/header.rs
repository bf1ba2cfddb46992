//! Fixed 16-byte envelope shared by every frame kind.
//!
//! ```text
//! size:2 type:1 reserved:1 id:4 reserved:8
//! ```

use std::fmt;

use crate::error::{Field, ParseError, Result};
use crate::protocol::cursor::Cursor;

/// Length of the fixed frame header, and the minimum valid frame.
pub const FRAME_HEADER_LEN: usize = 16;

/// Frame kinds defined by the protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum FrameType {
    /// First message on every connection.
    InitReq = 0x01,
    InitRes = 0x02,
    CallReq = 0x03,
    CallRes = 0x04,
    CallReqContinue = 0x13,
    CallResContinue = 0x14,
    /// Cancel an outstanding call (no body).
    Cancel = 0xc0,
    /// Claim / cancel a redundant request.
    Claim = 0xc1,
    PingReq = 0xd0,
    PingRes = 0xd1,
    /// Protocol level error.
    Error = 0xff,
}

impl FrameType {
    pub fn as_str(self) -> &'static str {
        match self {
            FrameType::InitReq => "init req",
            FrameType::InitRes => "init res",
            FrameType::CallReq => "call req",
            FrameType::CallRes => "call res",
            FrameType::CallReqContinue => "call req continue",
            FrameType::CallResContinue => "call res continue",
            FrameType::Cancel => "cancel",
            FrameType::Claim => "claim",
            FrameType::PingReq => "ping req",
            FrameType::PingRes => "ping res",
            FrameType::Error => "error",
        }
    }
}

impl TryFrom<u8> for FrameType {
    type Error = ParseError;

    fn try_from(tag: u8) -> Result<Self> {
        Ok(match tag {
            0x01 => FrameType::InitReq,
            0x02 => FrameType::InitRes,
            0x03 => FrameType::CallReq,
            0x04 => FrameType::CallRes,
            0x13 => FrameType::CallReqContinue,
            0x14 => FrameType::CallResContinue,
            0xc0 => FrameType::Cancel,
            0xc1 => FrameType::Claim,
            0xd0 => FrameType::PingReq,
            0xd1 => FrameType::PingRes,
            0xff => FrameType::Error,
            other => return Err(ParseError::UnknownFrameType(other)),
        })
    }
}

impl From<FrameType> for u8 {
    fn from(t: FrameType) -> u8 {
        t as u8
    }
}

impl fmt::Display for FrameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:#04x})", self.as_str(), *self as u8)
    }
}

/// Decoded frame envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameHeader {
    /// Total frame length (header + body) as declared by the sender.
    pub size: u16,
    pub frame_type: FrameType,
    /// Correlates requests and responses; opaque here.
    pub id: u32,
}

impl FrameHeader {
    /// Decode only the envelope of `buf`, e.g. to learn a frame's declared
    /// size and kind before handing it to [`crate::parse`].
    pub fn peek(buf: &[u8]) -> Result<Self> {
        Self::decode(&mut Cursor::new(buf))
    }

    /// Decode the header from a cursor at offset 0, leaving it at offset 16.
    pub fn decode(cur: &mut Cursor<'_>) -> Result<Self> {
        if cur.remaining() < FRAME_HEADER_LEN {
            return Err(ParseError::FrameTooShort {
                len: cur.buffer().len(),
            });
        }

        let size = cur.read_u16_be(Field::Size)?;
        let tag = cur.read_u8(Field::FrameType)?;
        cur.skip(Field::Reserved, 1)?;
        let id = cur.read_u32_be(Field::Id)?;
        cur.skip(Field::Reserved, 8)?;

        Ok(Self {
            size,
            frame_type: FrameType::try_from(tag)?,
            id,
        })
    }
}
