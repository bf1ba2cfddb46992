//! Bounds-checked byte cursor with a latched first error.
//!
//! Parsing rules:
//! - Never index (`buf[0]`): always go through `Buf` after a `remaining()` check.
//! - The first failed read is remembered; every later read returns that same
//!   error without touching the buffer, and the position never moves again.

use std::borrow::Cow;

use bytes::Buf;

use crate::error::{Field, ParseError, Result};

/// Byte span `[start, end)` into the buffer a frame was decoded from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ArgumentRange {
    pub start: usize,
    pub end: usize,
}

impl ArgumentRange {
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Resolve against the original buffer. `None` if the range does not fit,
    /// which only happens when it is applied to a different buffer.
    pub fn slice<'a>(&self, buf: &'a [u8]) -> Option<&'a [u8]> {
        buf.get(self.start..self.end)
    }
}

/// Sequential reader over one frame buffer.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    buf: &'a [u8],
    rest: &'a [u8],
    error: Option<ParseError>,
}

impl<'a> Cursor<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self {
            buf,
            rest: buf,
            error: None,
        }
    }

    /// The whole buffer this cursor walks, independent of position.
    pub fn buffer(&self) -> &'a [u8] {
        self.buf
    }

    /// Offset of the next unread byte.
    pub fn position(&self) -> usize {
        self.buf.len() - self.rest.len()
    }

    pub fn remaining(&self) -> usize {
        self.rest.remaining()
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    /// The latched error, if any read has failed.
    pub fn error(&self) -> Option<&ParseError> {
        self.error.as_ref()
    }

    fn ensure(&mut self, field: Field, needed: usize) -> Result<()> {
        if let Some(err) = &self.error {
            return Err(err.clone());
        }
        if self.rest.remaining() < needed {
            let err = ParseError::TruncatedField {
                field,
                offset: self.position(),
                needed,
                remaining: self.rest.remaining(),
            };
            self.error = Some(err.clone());
            return Err(err);
        }
        Ok(())
    }

    pub fn read_u8(&mut self, field: Field) -> Result<u8> {
        self.ensure(field, 1)?;
        Ok(self.rest.get_u8())
    }

    pub fn read_u16_be(&mut self, field: Field) -> Result<u16> {
        self.ensure(field, 2)?;
        Ok(self.rest.get_u16())
    }

    pub fn read_u32_be(&mut self, field: Field) -> Result<u32> {
        self.ensure(field, 4)?;
        Ok(self.rest.get_u32())
    }

    pub fn skip(&mut self, field: Field, n: usize) -> Result<()> {
        self.ensure(field, n)?;
        self.rest.advance(n);
        Ok(())
    }

    /// Borrow the next `n` bytes.
    pub fn take(&mut self, field: Field, n: usize) -> Result<&'a [u8]> {
        self.ensure(field, n)?;
        let (head, tail) = self.rest.split_at(n);
        self.rest = tail;
        Ok(head)
    }

    /// `len:u8 bytes[len]`, returned as a range instead of a copy.
    pub fn read_len8_range(&mut self, field: Field) -> Result<ArgumentRange> {
        let len = usize::from(self.read_u8(field)?);
        self.range(field, len)
    }

    /// `len:u16be bytes[len]`, returned as a range instead of a copy.
    pub fn read_len16_be_range(&mut self, field: Field) -> Result<ArgumentRange> {
        let len = usize::from(self.read_u16_be(field)?);
        self.range(field, len)
    }

    /// `len:u8 bytes[len]` as text. Valid UTF-8 is borrowed; invalid
    /// sequences are replaced with U+FFFD.
    pub fn read_len8_str(&mut self, field: Field) -> Result<Cow<'a, str>> {
        let len = usize::from(self.read_u8(field)?);
        let bytes = self.take(field, len)?;
        Ok(String::from_utf8_lossy(bytes))
    }

    fn range(&mut self, field: Field, len: usize) -> Result<ArgumentRange> {
        let start = self.position();
        self.skip(field, len)?;
        Ok(ArgumentRange {
            start,
            end: start + len,
        })
    }
}
