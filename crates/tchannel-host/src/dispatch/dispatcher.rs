use std::sync::Arc;

use tracing::debug;

use tchannel_core::protocol::{CallRequestBody, CallResponseBody, Frame, FrameHeader};
use tchannel_core::{parse_with, ParseError, ParseOptions};

/// Receives every decode failure, including `UnsupportedFrameType`
/// (check `ParseError::is_malformed` to tell scope signals apart).
pub trait ErrorHandler: Send + Sync {
    fn on_error(&self, err: &ParseError);
}

pub trait CallReqHandler: Send + Sync {
    fn on_call_req(&self, header: &FrameHeader, body: &CallRequestBody<'_>);
}

pub trait CallResHandler: Send + Sync {
    fn on_call_res(&self, header: &FrameHeader, body: &CallResponseBody<'_>);
}

/// Routes each parsed buffer to the handler registered for its outcome.
///
/// Holds no per-frame state; one instance can be shared across connections.
pub struct Dispatcher {
    opts: ParseOptions,
    on_error: Arc<dyn ErrorHandler>,
    on_call_req: Arc<dyn CallReqHandler>,
    on_call_res: Arc<dyn CallResHandler>,
}

impl Dispatcher {
    pub fn setup(
        on_error: Arc<dyn ErrorHandler>,
        on_call_req: Arc<dyn CallReqHandler>,
        on_call_res: Arc<dyn CallResHandler>,
    ) -> Self {
        Self {
            opts: ParseOptions::default(),
            on_error,
            on_call_req,
            on_call_res,
        }
    }

    pub fn with_options(mut self, opts: ParseOptions) -> Self {
        self.opts = opts;
        self
    }

    pub fn options(&self) -> &ParseOptions {
        &self.opts
    }

    /// Parse one complete frame and invoke exactly one handler.
    ///
    /// Returns the frame id on success; the error is also returned so the
    /// caller can apply its own connection policy.
    pub fn feed(&self, buf: &[u8]) -> Result<u32, ParseError> {
        match parse_with(buf, &self.opts) {
            Ok(Frame::CallReq { header, body }) => {
                debug!(id = header.id, service = %body.service, "dispatch call req");
                self.on_call_req.on_call_req(&header, &body);
                Ok(header.id)
            }
            Ok(Frame::CallRes { header, body }) => {
                debug!(id = header.id, code = body.code, "dispatch call res");
                self.on_call_res.on_call_res(&header, &body);
                Ok(header.id)
            }
            Err(err) => {
                self.on_error.on_error(&err);
                Err(err)
            }
        }
    }
}
