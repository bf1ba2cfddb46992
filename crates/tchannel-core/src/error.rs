//! Error surface of the frame parser.

use std::fmt;

use thiserror::Error;

use crate::protocol::header::{FrameHeader, FRAME_HEADER_LEN};

/// Stable error codes (used by hosts and test vectors).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Buffer shorter than the fixed frame header.
    FrameTooShort,
    /// Known frame kind whose body this parser does not expand.
    UnsupportedFrameType,
    /// Type byte matches no protocol tag.
    UnknownFrameType,
    /// A field extends past the end of the buffer.
    TruncatedField,
    /// A field decoded but failed an enabled validation rule.
    InvalidFieldValue,
}

impl ErrorCode {
    /// String representation used in logs and vectors.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::FrameTooShort => "FRAME_TOO_SHORT",
            ErrorCode::UnsupportedFrameType => "UNSUPPORTED_FRAME_TYPE",
            ErrorCode::UnknownFrameType => "UNKNOWN_FRAME_TYPE",
            ErrorCode::TruncatedField => "TRUNCATED_FIELD",
            ErrorCode::InvalidFieldValue => "INVALID_FIELD_VALUE",
        }
    }
}

/// Wire fields, named in error reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Size,
    FrameType,
    Reserved,
    Id,
    Flags,
    Ttl,
    Code,
    TracingIds,
    TraceFlags,
    Service,
    HeaderCount,
    HeaderKey,
    HeaderValue,
    ChecksumType,
    ChecksumValue,
    Arg1,
    Arg2,
    Arg3,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Size => "size",
            Field::FrameType => "type",
            Field::Reserved => "reserved",
            Field::Id => "id",
            Field::Flags => "flags",
            Field::Ttl => "ttl",
            Field::Code => "code",
            Field::TracingIds => "tracing ids",
            Field::TraceFlags => "traceflags",
            Field::Service => "service",
            Field::HeaderCount => "nh",
            Field::HeaderKey => "header key",
            Field::HeaderValue => "header value",
            Field::ChecksumType => "csumtype",
            Field::ChecksumValue => "csumval",
            Field::Arg1 => "arg1",
            Field::Arg2 => "arg2",
            Field::Arg3 => "arg3",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Every way a decode can end without a frame.
///
/// All variants are terminal for the call that produced them: the parser
/// never returns a partially decoded body.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("frame too short: {len} bytes, header needs {}", FRAME_HEADER_LEN)]
    FrameTooShort { len: usize },
    #[error("frame type {} not implemented (id {})", header.frame_type, header.id)]
    UnsupportedFrameType { header: FrameHeader },
    #[error("unknown frame type {0:#04x}")]
    UnknownFrameType(u8),
    #[error("truncated {field} at offset {offset}: need {needed} bytes, {remaining} remaining")]
    TruncatedField {
        field: Field,
        offset: usize,
        needed: usize,
        remaining: usize,
    },
    #[error("invalid {field}: {reason}")]
    InvalidFieldValue { field: Field, reason: String },
}

impl ParseError {
    /// Map to the stable error code.
    pub fn code(&self) -> ErrorCode {
        match self {
            ParseError::FrameTooShort { .. } => ErrorCode::FrameTooShort,
            ParseError::UnsupportedFrameType { .. } => ErrorCode::UnsupportedFrameType,
            ParseError::UnknownFrameType(_) => ErrorCode::UnknownFrameType,
            ParseError::TruncatedField { .. } => ErrorCode::TruncatedField,
            ParseError::InvalidFieldValue { .. } => ErrorCode::InvalidFieldValue,
        }
    }

    /// Whether the input itself was bad.
    ///
    /// `UnsupportedFrameType` is a scope boundary, not malformed input: the
    /// header decoded fine, the body is simply not expanded here.
    pub fn is_malformed(&self) -> bool {
        !matches!(self, ParseError::UnsupportedFrameType { .. })
    }

    /// The field an error points at, if any.
    pub fn field(&self) -> Option<Field> {
        match self {
            ParseError::TruncatedField { field, .. } | ParseError::InvalidFieldValue { field, .. } => {
                Some(*field)
            }
            _ => None,
        }
    }
}
