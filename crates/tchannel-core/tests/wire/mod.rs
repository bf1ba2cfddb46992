//! Test-only frame builder. The crate itself never encodes.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]
#![allow(dead_code)]

use bytes::{BufMut, BytesMut};

pub const CALL_REQ: u8 = 0x03;
pub const CALL_RES: u8 = 0x04;

#[derive(Debug, Clone, Default)]
pub struct CallFrame {
    pub id: u32,
    pub flags: u8,
    /// ttl for requests, ignored for responses.
    pub ttl: u32,
    /// code for responses, ignored for requests.
    pub code: u8,
    pub span_id: [u8; 8],
    pub parent_id: [u8; 8],
    pub trace_id: [u8; 8],
    pub traceflags: u8,
    /// Requests only.
    pub service: String,
    pub headers: Vec<(String, String)>,
    pub csum_type: u8,
    pub csum_value: u32,
    pub args: [Vec<u8>; 3],
}

impl CallFrame {
    /// `service = "echo"`, one header `k: v`, no checksum, arg2 = `01 02`.
    pub fn echo() -> Self {
        Self {
            id: 1,
            ttl: 1000,
            service: "echo".into(),
            headers: vec![("k".into(), "v".into())],
            args: [vec![], vec![0x01, 0x02], vec![]],
            ..Self::default()
        }
    }

    pub fn encode_req(&self) -> Vec<u8> {
        let mut body = BytesMut::new();
        body.put_u8(self.flags);
        body.put_u32(self.ttl);
        self.put_tail(&mut body, Some(&self.service));
        finish(CALL_REQ, self.id, &body)
    }

    pub fn encode_res(&self) -> Vec<u8> {
        let mut body = BytesMut::new();
        body.put_u8(self.flags);
        body.put_u8(self.code);
        self.put_tail(&mut body, None);
        finish(CALL_RES, self.id, &body)
    }

    fn put_tail(&self, body: &mut BytesMut, service: Option<&str>) {
        body.put_slice(&self.span_id);
        body.put_slice(&self.parent_id);
        body.put_slice(&self.trace_id);
        body.put_u8(self.traceflags);
        if let Some(service) = service {
            put_len8(body, service.as_bytes());
        }
        body.put_u8(u8::try_from(self.headers.len()).unwrap());
        for (k, v) in &self.headers {
            put_len8(body, k.as_bytes());
            put_len8(body, v.as_bytes());
        }
        body.put_u8(self.csum_type);
        if self.csum_type != 0 {
            body.put_u32(self.csum_value);
        }
        for arg in &self.args {
            body.put_u16(u16::try_from(arg.len()).unwrap());
            body.put_slice(arg);
        }
    }
}

/// Header with an explicit declared size and no body.
pub fn header(size: u16, frame_type: u8, id: u32) -> Vec<u8> {
    let mut out = BytesMut::with_capacity(16);
    out.put_u16(size);
    out.put_u8(frame_type);
    out.put_u8(0);
    out.put_u32(id);
    out.put_bytes(0, 8);
    out.to_vec()
}

fn finish(frame_type: u8, id: u32, body: &[u8]) -> Vec<u8> {
    let size = u16::try_from(16 + body.len()).unwrap_or(u16::MAX);
    let mut out = header(size, frame_type, id);
    out.extend_from_slice(body);
    out
}

fn put_len8(out: &mut BytesMut, bytes: &[u8]) {
    out.put_u8(u8::try_from(bytes.len()).unwrap());
    out.put_slice(bytes);
}
