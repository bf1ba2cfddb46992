//! TChannel wire format.
//!
//! - `cursor`: bounds-checked reader every decoder goes through.
//! - `header`: the fixed 16-byte envelope and the frame type tags.
//! - `call_req` / `call_res`: bodies of the two RPC-carrying frame kinds.
//! - `frame`: the `parse` entry point routing on frame type.
//!
//! All multi-byte integers are big-endian, the frame size included.
//! Nothing here copies argument payloads; decoded frames borrow the input.

pub mod call_req;
pub mod call_res;
pub mod cursor;
pub mod fields;
pub mod frame;
pub mod header;

pub use call_req::CallRequestBody;
pub use call_res::{CallResponseBody, CODE_ERROR, CODE_OK};
pub use cursor::{ArgumentRange, Cursor};
pub use fields::{Args, Checksum, ChecksumKind, HeaderMap, Tracing};
pub use frame::Frame;
pub use header::{FrameHeader, FrameType, FRAME_HEADER_LEN};
