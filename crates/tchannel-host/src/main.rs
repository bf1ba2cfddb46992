//! tchannel-dump: decode raw TChannel frames from files and log them.
//!
//! Usage: `tchannel-dump [--hex] [--config <path>] <frame-file>...`
//! - one complete frame per file, raw bytes (or hex text with `--hex`)
//! - parser options come from `tchannel.yaml` (or `--config`) if present
//! - log level via `RUST_LOG`

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, EnvFilter};

use tchannel_core::protocol::{Args, CallRequestBody, CallResponseBody, FrameHeader};
use tchannel_core::ParseError;
use tchannel_host::cli::{self, read_frame};
use tchannel_host::config;
use tchannel_host::dispatch::{CallReqHandler, CallResHandler, Dispatcher, ErrorHandler};

struct LogSink {
    preview_bytes: usize,
}

impl LogSink {
    fn preview(&self, args: &Args<'_>) -> [String; 3] {
        [args.arg1(), args.arg2(), args.arg3()].map(|a| {
            let shown = a.get(..self.preview_bytes).unwrap_or(a);
            hex::encode(shown)
        })
    }
}

impl ErrorHandler for LogSink {
    fn on_error(&self, err: &ParseError) {
        if err.is_malformed() {
            warn!(code = err.code().as_str(), error = %err, "malformed frame");
        } else {
            info!(error = %err, "frame skipped");
        }
    }
}

impl CallReqHandler for LogSink {
    fn on_call_req(&self, header: &FrameHeader, body: &CallRequestBody<'_>) {
        let [arg1, arg2, arg3] = self.preview(&body.args);
        info!(
            id = header.id,
            size = header.size,
            flags = body.flags,
            ttl = body.ttl,
            service = %body.service,
            headers = ?body.headers.iter().collect::<Vec<_>>(),
            csum_type = body.checksum.csum_type,
            csum = body.checksum.value,
            traceflags = body.tracing.flags,
            span_id = %hex::encode(body.tracing.span_id),
            %arg1,
            %arg2,
            %arg3,
            "call req"
        );
    }
}

impl CallResHandler for LogSink {
    fn on_call_res(&self, header: &FrameHeader, body: &CallResponseBody<'_>) {
        let [arg1, arg2, arg3] = self.preview(&body.args);
        info!(
            id = header.id,
            size = header.size,
            flags = body.flags,
            code = body.code,
            headers = ?body.headers.iter().collect::<Vec<_>>(),
            csum_type = body.checksum.csum_type,
            csum = body.checksum.value,
            traceflags = body.tracing.flags,
            span_id = %hex::encode(body.tracing.span_id),
            %arg1,
            %arg2,
            %arg3,
            "call res"
        );
    }
}

fn main() -> ExitCode {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let args = cli::Args::parse();

    let cfg = match config::load_or_default(&args.config) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!(path = %args.config.display(), error = %e, "config load failed");
            return ExitCode::FAILURE;
        }
    };

    let sink = Arc::new(LogSink {
        preview_bytes: cfg.dump.preview_bytes,
    });
    let dispatcher = Dispatcher::setup(sink.clone(), sink.clone(), sink).with_options(cfg.parser);

    info!(files = args.files.len(), options = ?dispatcher.options(), "tchannel-dump starting");

    let mut failed = false;
    for path in &args.files {
        match read_frame(path, args.hex) {
            Ok(raw) => failed |= matches!(dispatcher.feed(&raw), Err(e) if e.is_malformed()),
            Err(e) => {
                error!(path = %path.display(), error = %e, "skipping input");
                failed = true;
            }
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
