//!
//! ByteString - Owned Dynamic Byte Buffer
//!
//! A single-owner, heap-backed byte sequence, always terminated by a zero
//! byte so that C consumers can read it as a plain string. Length is tracked
//! explicitly and excludes the terminator.
//!
//! Growth is exact-fit: assign and append size the allocation to the known
//! final need instead of doubling. Callers rebuild generator text
//! infrequently and want predictable memory use over append-loop throughput.
//!
//! All allocating operations are fallible and leave the buffer in its prior
//! valid state when the allocator refuses the request.
//!

use std::fmt;
use thiserror::Error;

/// The memory subsystem could not satisfy a buffer allocation.
#[derive(Debug, Error)]
#[error("failed to allocate {requested} bytes for string buffer")]
pub struct AllocError {
    requested: usize,
}

impl AllocError {
    pub(crate) fn new(requested: usize) -> Self {
        Self { requested }
    }

    /// Size in bytes of the allocation that failed, terminator included.
    pub fn requested(&self) -> usize {
        self.requested
    }
}

/// An owned, growable, null-terminated byte sequence.
///
/// Invariant: the backing storage always holds the content followed by a
/// single zero byte, so `len()` equals the byte count a C caller would
/// observe reading up to the terminator. Interior zero bytes are stored
/// faithfully but truncate that C view.
#[derive(Debug)]
pub struct ByteString {
    // Content plus trailing terminator; never empty.
    buf: Vec<u8>,
}

impl ByteString {
    /// Create an empty buffer, allocating storage for the terminator byte.
    pub fn new() -> Result<Self, AllocError> {
        let mut buf = Vec::new();
        buf.try_reserve_exact(1).map_err(|_| AllocError::new(1))?;
        buf.push(0);
        Ok(Self { buf })
    }

    /// Create a buffer holding a copy of `text`, sized exactly to fit.
    pub fn from_bytes(text: &[u8]) -> Result<Self, AllocError> {
        let mut buf = Vec::new();
        buf.try_reserve_exact(text.len() + 1)
            .map_err(|_| AllocError::new(text.len() + 1))?;
        buf.extend_from_slice(text);
        buf.push(0);
        Ok(Self { buf })
    }

    /// Replace the entire content with a copy of `text`.
    ///
    /// Reallocates to exactly fit the new content plus terminator and
    /// releases the old storage. On failure the prior content is kept.
    /// Assigning an empty slice yields a valid length-0 buffer.
    pub fn assign(&mut self, text: &[u8]) -> Result<(), AllocError> {
        let next = Self::from_bytes(text)?;
        self.buf = next.buf;
        Ok(())
    }

    /// Append a copy of `text`, growing the allocation to exactly the
    /// combined length plus terminator.
    ///
    /// The additional space is reserved before any byte moves, so on
    /// failure the original content is intact and the error is reported.
    pub fn append_bytes(&mut self, text: &[u8]) -> Result<(), AllocError> {
        self.buf
            .try_reserve_exact(text.len())
            .map_err(|_| AllocError::new(self.len() + text.len() + 1))?;
        self.buf.pop();
        self.buf.extend_from_slice(text);
        self.buf.push(0);
        Ok(())
    }

    /// Append the entire content of another buffer. `other` is read-only.
    pub fn append(&mut self, other: &ByteString) -> Result<(), AllocError> {
        self.append_bytes(other.as_bytes())
    }

    /// Content length in bytes, excluding the terminator.
    pub fn len(&self) -> usize {
        self.buf.len() - 1
    }

    /// True if the buffer holds no content bytes.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Content bytes, excluding the terminator.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.buf.len() - 1]
    }

    /// Content bytes including the trailing zero, for C interop.
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        &self.buf
    }
}

impl fmt::Display for ByteString {
    /// Lossy UTF-8 rendering; never fails on arbitrary byte content.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(self.as_bytes()))
    }
}

impl PartialEq for ByteString {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for ByteString {}
