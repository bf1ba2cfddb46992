//! Frame dispatch: header first, then the body decoder for its type.

use tracing::{debug, trace};

use crate::error::{Field, ParseError, Result};
use crate::options::ParseOptions;
use crate::protocol::call_req::CallRequestBody;
use crate::protocol::call_res::CallResponseBody;
use crate::protocol::cursor::Cursor;
use crate::protocol::header::{FrameHeader, FrameType, FRAME_HEADER_LEN};

/// A fully decoded call frame, borrowing the buffer it was parsed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frame<'a> {
    CallReq {
        header: FrameHeader,
        body: CallRequestBody<'a>,
    },
    CallRes {
        header: FrameHeader,
        body: CallResponseBody<'a>,
    },
}

impl Frame<'_> {
    pub fn header(&self) -> &FrameHeader {
        match self {
            Frame::CallReq { header, .. } | Frame::CallRes { header, .. } => header,
        }
    }

    pub fn id(&self) -> u32 {
        self.header().id
    }
}

/// Decode one complete frame with default options.
pub fn parse(buf: &[u8]) -> Result<Frame<'_>> {
    parse_with(buf, &ParseOptions::default())
}

/// Decode one complete frame.
///
/// Buffers shorter than the header are rejected before the type byte is
/// looked at. Known frame kinds other than call req/res come back as
/// [`ParseError::UnsupportedFrameType`] with their decoded header.
pub fn parse_with<'a>(buf: &'a [u8], opts: &ParseOptions) -> Result<Frame<'a>> {
    let res = decode(buf, opts);
    match &res {
        Ok(frame) => trace!(
            id = frame.id(),
            frame_type = %frame.header().frame_type,
            len = buf.len(),
            "decoded frame"
        ),
        Err(err) => debug!(
            code = err.code().as_str(),
            len = buf.len(),
            error = %err,
            "frame rejected"
        ),
    }
    res
}

fn decode<'a>(buf: &'a [u8], opts: &ParseOptions) -> Result<Frame<'a>> {
    if buf.len() < FRAME_HEADER_LEN {
        return Err(ParseError::FrameTooShort { len: buf.len() });
    }

    let mut cur = Cursor::new(buf);
    let header = FrameHeader::decode(&mut cur)?;

    if !matches!(header.frame_type, FrameType::CallReq | FrameType::CallRes) {
        return Err(ParseError::UnsupportedFrameType { header });
    }
    if opts.strict_size {
        check_size(buf, &header)?;
    }

    let frame = match header.frame_type {
        FrameType::CallReq => {
            let body = CallRequestBody::decode(&mut cur)?;
            if opts.require_ttl && body.ttl == 0 {
                return Err(ParseError::InvalidFieldValue {
                    field: Field::Ttl,
                    reason: "ttl must be positive".into(),
                });
            }
            Frame::CallReq { header, body }
        }
        FrameType::CallRes => Frame::CallRes {
            header,
            body: CallResponseBody::decode(&mut cur)?,
        },
        _ => return Err(ParseError::UnsupportedFrameType { header }),
    };

    if opts.strict_size && cur.remaining() != 0 {
        return Err(ParseError::InvalidFieldValue {
            field: Field::Size,
            reason: format!(
                "declared size {} but body ends at {}",
                header.size,
                cur.position()
            ),
        });
    }

    Ok(frame)
}

/// The declared size must describe exactly the buffer we were handed.
fn check_size(buf: &[u8], header: &FrameHeader) -> Result<()> {
    let size = usize::from(header.size);
    if size != buf.len() {
        return Err(ParseError::InvalidFieldValue {
            field: Field::Size,
            reason: format!("declared size {size} but buffer holds {} bytes", buf.len()),
        });
    }
    Ok(())
}
