//! Non-blocking body content sources.
//!
//! A [`ContentDecoder`] hands out body bytes as they become available on the
//! transport. Reads never block: a call may transfer zero bytes when nothing has
//! arrived yet, and consumers accumulate across calls instead of assuming one
//! call drains the whole body.

use bytes::BytesMut;

use crate::protocol::DecodeError;

/// A non-blocking source of already-received body bytes.
///
/// Implementations sit between the transport framing and the consumer: the
/// reactor fills them as socket reads complete, and the consumer drains them on
/// every content notification. They must be safe to call repeatedly with
/// partial data.
pub trait ContentDecoder {
    /// Transfers available bytes into `dst`, returning how many were moved.
    ///
    /// Returns `Ok(0)` when no data is available right now; that is not an
    /// end-of-content signal, check [`is_completed`](ContentDecoder::is_completed).
    fn read(&mut self, dst: &mut BytesMut) -> Result<usize, DecodeError>;

    /// Returns true once the end of the content stream has been reached and drained.
    fn is_completed(&self) -> bool;
}

/// An in-memory [`ContentDecoder`] fed by the driver.
///
/// The driver appends raw body bytes with [`feed`](BufferDecoder::feed) as socket
/// reads complete and marks the end of the stream with
/// [`complete`](BufferDecoder::complete). Consumers drain it through the
/// [`ContentDecoder`] trait.
#[derive(Debug, Default)]
pub struct BufferDecoder {
    buffer: BytesMut,
    completed: bool,
    fed_after_eof: bool,
}

impl BufferDecoder {
    /// Creates an empty decoder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends received body bytes.
    ///
    /// Feeding after [`complete`](BufferDecoder::complete) is a framing violation
    /// and surfaces as [`DecodeError::ContentAfterEof`] on the next read.
    pub fn feed(&mut self, bytes: &[u8]) {
        if self.completed {
            self.fed_after_eof = true;
            return;
        }
        self.buffer.extend_from_slice(bytes);
    }

    /// Marks the end of the content stream. Already-buffered bytes stay readable.
    pub fn complete(&mut self) {
        self.completed = true;
    }
}

impl ContentDecoder for BufferDecoder {
    fn read(&mut self, dst: &mut BytesMut) -> Result<usize, DecodeError> {
        crate::ensure!(!self.fed_after_eof, DecodeError::ContentAfterEof);

        if self.buffer.is_empty() {
            return Ok(0);
        }

        let bytes = self.buffer.split();
        dst.extend_from_slice(&bytes);
        Ok(bytes.len())
    }

    fn is_completed(&self) -> bool {
        self.completed && self.buffer.is_empty()
    }
}
