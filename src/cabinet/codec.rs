//! Fixed-width field encoding.
//!
//! Snapshot files are back-to-back record images with no framing, so every
//! field occupies the same number of bytes in every record: text fields are
//! NUL-padded byte buffers of a declared width, numbers are little-endian
//! fixed-width values, timestamps are 8-byte Unix seconds. Oversized text is
//! truncated silently at a character boundary; that mirrors the fixed-buffer
//! writes of the original data files and is part of the format, not a bug.

use crate::error::{CabinetError, Result};

/// Appends fixed-width fields to a record image.
pub struct FieldWriter<'a> {
    buf: &'a mut Vec<u8>,
}

impl<'a> FieldWriter<'a> {
    pub fn new(buf: &'a mut Vec<u8>) -> Self {
        Self { buf }
    }

    /// Write `s` into a `width`-byte buffer, NUL-padded, truncated at a
    /// UTF-8 boundary if it does not fit.
    pub fn put_text(&mut self, s: &str, width: usize) {
        let bytes = truncate_to_boundary(s, width);
        self.buf.extend_from_slice(bytes);
        self.buf.resize(self.buf.len() + (width - bytes.len()), 0);
    }

    pub fn put_i32(&mut self, v: i32) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    pub fn put_i64(&mut self, v: i64) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    pub fn put_f32(&mut self, v: f32) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    pub fn put_f64(&mut self, v: f64) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    /// Booleans are stored as a 4-byte 0/1, the way the original files kept
    /// their `int` flags.
    pub fn put_bool(&mut self, v: bool) {
        self.put_i32(if v { 1 } else { 0 });
    }

    /// Single-character fields occupy one byte; non-ASCII input degrades to
    /// `?` rather than widening the field.
    pub fn put_char(&mut self, c: char) {
        let b = if c.is_ascii() { c as u8 } else { b'?' };
        self.buf.push(b);
    }
}

/// Reads fixed-width fields back out of a record image.
pub struct FieldReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> FieldReader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8]> {
        if self.pos + n > self.buf.len() {
            return Err(CabinetError::Snapshot(format!(
                "record image too short: wanted {} bytes at offset {}, have {}",
                n,
                self.pos,
                self.buf.len() - self.pos
            )));
        }
        let slice = &self.buf[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    /// Read a `width`-byte text field; content ends at the first NUL.
    pub fn take_text(&mut self, width: usize) -> Result<String> {
        let raw = self.take(width)?;
        let end = raw.iter().position(|&b| b == 0).unwrap_or(raw.len());
        Ok(String::from_utf8_lossy(&raw[..end]).into_owned())
    }

    fn take_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let raw = self.take(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(raw);
        Ok(out)
    }

    pub fn take_i32(&mut self) -> Result<i32> {
        Ok(i32::from_le_bytes(self.take_array()?))
    }

    pub fn take_i64(&mut self) -> Result<i64> {
        Ok(i64::from_le_bytes(self.take_array()?))
    }

    pub fn take_f32(&mut self) -> Result<f32> {
        Ok(f32::from_le_bytes(self.take_array()?))
    }

    pub fn take_f64(&mut self) -> Result<f64> {
        Ok(f64::from_le_bytes(self.take_array()?))
    }

    pub fn take_bool(&mut self) -> Result<bool> {
        Ok(self.take_i32()? != 0)
    }

    pub fn take_char(&mut self) -> Result<char> {
        let raw = self.take(1)?;
        Ok(raw[0] as char)
    }
}

/// Longest prefix of `s` that fits in `width` bytes without splitting a
/// UTF-8 sequence.
fn truncate_to_boundary(s: &str, width: usize) -> &[u8] {
    if s.len() <= width {
        return s.as_bytes();
    }
    let mut end = width;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    s[..end].as_bytes()
}
