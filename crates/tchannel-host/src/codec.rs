//! Decode-once codec producing owned frames.
//!
//! The core parser borrows the input; hosts that move frames across tasks
//! need `'static` values. Arguments and tracing ids become `Bytes` slices
//! of the input (no payload copy); strings are copied.

use bytes::Bytes;

use tchannel_core::protocol::{Args, Checksum, Frame, FrameHeader, HeaderMap, Tracing};
use tchannel_core::{parse_with, ParseError, ParseOptions, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnedTracing {
    pub span_id: Bytes,
    pub parent_id: Bytes,
    pub trace_id: Bytes,
    pub flags: u8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallReq {
    pub header: FrameHeader,
    pub flags: u8,
    pub ttl: u32,
    pub tracing: OwnedTracing,
    pub service: String,
    pub headers: Vec<(String, String)>,
    pub checksum: Checksum,
    pub args: [Bytes; 3],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallRes {
    pub header: FrameHeader,
    pub flags: u8,
    pub code: u8,
    pub tracing: OwnedTracing,
    pub headers: Vec<(String, String)>,
    pub checksum: Checksum,
    pub args: [Bytes; 3],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inbound {
    CallReq(CallReq),
    CallRes(CallRes),
    /// Valid header of a frame kind whose body is not decoded here.
    Other(FrameHeader),
}

impl Inbound {
    pub fn header(&self) -> &FrameHeader {
        match self {
            Inbound::CallReq(f) => &f.header,
            Inbound::CallRes(f) => &f.header,
            Inbound::Other(header) => header,
        }
    }
}

pub fn decode(buf: Bytes, opts: &ParseOptions) -> Result<Inbound> {
    let frame = match parse_with(&buf, opts) {
        Ok(frame) => frame,
        Err(ParseError::UnsupportedFrameType { header }) => return Ok(Inbound::Other(header)),
        Err(e) => return Err(e),
    };

    Ok(match frame {
        Frame::CallReq { header, body } => Inbound::CallReq(CallReq {
            header,
            flags: body.flags,
            ttl: body.ttl,
            tracing: own_tracing(&buf, &body.tracing),
            service: body.service.into_owned(),
            headers: own_headers(body.headers),
            checksum: body.checksum,
            args: own_args(&buf, &body.args),
        }),
        Frame::CallRes { header, body } => Inbound::CallRes(CallRes {
            header,
            flags: body.flags,
            code: body.code,
            tracing: own_tracing(&buf, &body.tracing),
            headers: own_headers(body.headers),
            checksum: body.checksum,
            args: own_args(&buf, &body.args),
        }),
    })
}

fn own_tracing(buf: &Bytes, t: &Tracing<'_>) -> OwnedTracing {
    OwnedTracing {
        span_id: buf.slice_ref(t.span_id),
        parent_id: buf.slice_ref(t.parent_id),
        trace_id: buf.slice_ref(t.trace_id),
        flags: t.flags,
    }
}

fn own_headers(h: HeaderMap<'_>) -> Vec<(String, String)> {
    h.into_entries()
        .into_iter()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}

fn own_args(buf: &Bytes, args: &Args<'_>) -> [Bytes; 3] {
    args.ranges().map(|r| buf.slice(r.start..r.end))
}
