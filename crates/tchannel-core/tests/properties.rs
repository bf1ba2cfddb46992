#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use proptest::prelude::*;

use tchannel_core::protocol::{Args, Cursor, Frame, HeaderMap};
use tchannel_core::{parse, parse_with, ErrorCode, Field, ParseOptions};

mod wire;
use wire::CallFrame;

// ── Strategies ──────────────────────────────────────────────

fn arb_text() -> impl Strategy<Value = String> {
    // Up to 60 chars of up to 4 bytes each stays under the 255-byte limit.
    proptest::string::string_regex(".{0,60}").unwrap()
}

fn arb_call() -> impl Strategy<Value = CallFrame> {
    (
        (any::<u32>(), any::<u8>(), any::<u32>(), any::<u8>()),
        (any::<[u8; 8]>(), any::<[u8; 8]>(), any::<[u8; 8]>(), any::<u8>()),
        arb_text(),
        prop::collection::vec((arb_text(), arb_text()), 0..8),
        prop_oneof![Just(0u8), any::<u8>()],
        any::<u32>(),
        [
            prop::collection::vec(any::<u8>(), 0..64),
            prop::collection::vec(any::<u8>(), 0..256),
            prop::collection::vec(any::<u8>(), 0..1024),
        ],
    )
        .prop_map(
            |((id, flags, ttl, code), (span_id, parent_id, trace_id, traceflags), service, headers, csum_type, csum_value, args)| {
                CallFrame {
                    id,
                    flags,
                    ttl,
                    code,
                    span_id,
                    parent_id,
                    trace_id,
                    traceflags,
                    service,
                    headers,
                    csum_type,
                    // Absent on the wire for type 0, so it decodes as 0.
                    csum_value: if csum_type == 0 { 0 } else { csum_value },
                    args,
                }
            },
        )
}

fn headers_of(h: &HeaderMap<'_>) -> Vec<(String, String)> {
    h.iter().map(|(k, v)| (k.to_owned(), v.to_owned())).collect()
}

fn args_of(a: &Args<'_>) -> [Vec<u8>; 3] {
    [a.arg1().to_vec(), a.arg2().to_vec(), a.arg3().to_vec()]
}

// ── Round-trip ──────────────────────────────────────────────

proptest! {
    #[test]
    fn call_req_roundtrip(f in arb_call()) {
        let buf = f.encode_req();
        let frame = parse_with(&buf, &ParseOptions { strict_size: true, require_ttl: false }).unwrap();
        prop_assert_eq!(frame.id(), f.id);
        let Frame::CallReq { body, .. } = frame else {
            return Err(TestCaseError::fail("expected call req"));
        };
        prop_assert_eq!(body.flags, f.flags);
        prop_assert_eq!(body.ttl, f.ttl);
        prop_assert_eq!(body.tracing.span_id, &f.span_id[..]);
        prop_assert_eq!(body.tracing.parent_id, &f.parent_id[..]);
        prop_assert_eq!(body.tracing.trace_id, &f.trace_id[..]);
        prop_assert_eq!(body.tracing.flags, f.traceflags);
        prop_assert_eq!(&*body.service, f.service.as_str());
        prop_assert_eq!(headers_of(&body.headers), f.headers.clone());
        prop_assert_eq!(body.checksum.csum_type, f.csum_type);
        prop_assert_eq!(body.checksum.value, f.csum_value);
        prop_assert_eq!(args_of(&body.args), f.args.clone());
        for (range, arg) in body.args.ranges().iter().zip(&f.args) {
            prop_assert_eq!(range.slice(&buf), Some(arg.as_slice()));
        }
    }

    #[test]
    fn call_res_roundtrip(f in arb_call()) {
        let buf = f.encode_res();
        let Frame::CallRes { body, .. } = parse(&buf).unwrap() else {
            return Err(TestCaseError::fail("expected call res"));
        };
        prop_assert_eq!(body.flags, f.flags);
        prop_assert_eq!(body.code, f.code);
        prop_assert_eq!(body.tracing.flags, f.traceflags);
        prop_assert_eq!(headers_of(&body.headers), f.headers.clone());
        prop_assert_eq!(body.checksum.csum_type, f.csum_type);
        prop_assert_eq!(body.checksum.value, f.csum_value);
        prop_assert_eq!(args_of(&body.args), f.args.clone());
    }
}

// ── Malformed input ─────────────────────────────────────────

proptest! {
    #[test]
    fn random_bytes_never_panic(buf in prop::collection::vec(any::<u8>(), 0..512)) {
        let _ = parse(&buf);
        let _ = parse_with(&buf, &ParseOptions::strict());
    }

    #[test]
    fn random_call_bodies_never_panic(
        ty in prop_oneof![Just(0x03u8), Just(0x04u8)],
        body in prop::collection::vec(any::<u8>(), 0..512),
    ) {
        let mut buf = wire::header(0, ty, 1);
        buf.extend_from_slice(&body);
        match parse(&buf) {
            Ok(frame) => {
                // Everything the frame hands out lies inside the buffer.
                let args = match &frame {
                    Frame::CallReq { body, .. } => body.args,
                    Frame::CallRes { body, .. } => body.args,
                };
                for r in args.ranges() {
                    prop_assert!(r.start <= r.end && r.end <= buf.len());
                }
            }
            Err(e) => prop_assert_eq!(e.code(), ErrorCode::TruncatedField),
        }
    }

    #[test]
    fn truncated_frames_fail_whole(f in arb_call(), cut in any::<prop::sample::Index>()) {
        let buf = f.encode_req();
        let end = 16 + cut.index(buf.len() - 16);
        let err = parse(&buf[..end]).unwrap_err();
        prop_assert_eq!(err.code(), ErrorCode::TruncatedField);
    }

    #[test]
    fn cursor_never_passes_end(
        buf in prop::collection::vec(any::<u8>(), 0..64),
        ops in prop::collection::vec(0u8..6, 0..32),
    ) {
        let mut cur = Cursor::new(&buf);
        let mut failed_at = None;
        for op in ops {
            let ok = match op {
                0 => cur.read_u8(Field::Flags).is_ok(),
                1 => cur.read_u16_be(Field::Size).is_ok(),
                2 => cur.read_u32_be(Field::Ttl).is_ok(),
                3 => cur.skip(Field::Reserved, 3).is_ok(),
                4 => cur.read_len8_range(Field::Service).is_ok(),
                _ => cur.read_len16_be_range(Field::Arg1).is_ok(),
            };
            prop_assert!(cur.position() <= buf.len());
            match failed_at {
                Some(pos) => {
                    prop_assert!(!ok);
                    prop_assert_eq!(cur.position(), pos);
                }
                None if !ok => failed_at = Some(cur.position()),
                None => {}
            }
            prop_assert_eq!(cur.has_error(), failed_at.is_some());
        }
    }
}
