//! A consumer that buffers the whole request in memory.

use bytes::{Bytes, BytesMut};
use http::Request;
use tracing::{trace, warn};

use crate::codec::{ContentDecoder, IoControl};
use crate::consumer::ConsumeRequest;
use crate::ensure;
use crate::protocol::{BuildError, ConsumeContext, DecodeError, RequestHead};

/// A [`ConsumeRequest`] implementation producing the full `Request<Bytes>`.
///
/// Body bytes are accumulated in memory across content notifications; the
/// result attaches the buffered body to the recorded request head. Suitable
/// when entities are known to be small.
///
/// Two optional guards protect against oversized entities:
/// - a hard limit ([`max_body_size`](FullRequestConsumer::max_body_size)) that
///   fails the decode, aborting the exchange
/// - a high-water mark ([`high_water_mark`](FullRequestConsumer::high_water_mark))
///   that suspends input delivery through [`IoControl`]; resuming is the
///   driver's decision once the buffered data has somewhere to go
#[derive(Debug, Default)]
pub struct FullRequestConsumer {
    head: Option<RequestHead>,
    body: BytesMut,
    max_body_size: Option<usize>,
    high_water_mark: Option<usize>,
    suspended: bool,
}

impl FullRequestConsumer {
    /// Creates a consumer with no size limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Caps the buffered body size; exceeding it fails the content
    /// notification with [`DecodeError::TooLargeBody`].
    #[must_use]
    pub fn max_body_size(mut self, max_body_size: usize) -> Self {
        self.max_body_size = Some(max_body_size);
        self
    }

    /// Suspends input delivery once more than `mark` bytes are buffered.
    #[must_use]
    pub fn high_water_mark(mut self, mark: usize) -> Self {
        self.high_water_mark = Some(mark);
        self
    }
}

impl ConsumeRequest for FullRequestConsumer {
    type Output = Request<Bytes>;

    fn on_request_received(&mut self, head: RequestHead) {
        if !head.need_body() {
            trace!(method = %head.method(), "method usually carries no body");
        }
        self.head = Some(head);
    }

    fn on_content_received(
        &mut self,
        decoder: &mut dyn ContentDecoder,
        ioctrl: &mut dyn IoControl,
    ) -> Result<(), DecodeError> {
        let transferred = decoder.read(&mut self.body)?;
        trace!(bytes = transferred, buffered = self.body.len(), "content received");

        if let Some(max_body_size) = self.max_body_size {
            ensure!(self.body.len() <= max_body_size, DecodeError::too_large_body(self.body.len(), max_body_size));
        }

        if let Some(mark) = self.high_water_mark
            && self.body.len() > mark
            && !self.suspended
        {
            warn!(buffered = self.body.len(), mark = mark, "high water mark crossed, suspending input");
            ioctrl.suspend_input();
            self.suspended = true;
        }

        Ok(())
    }

    fn build_result(&mut self, _context: &mut ConsumeContext) -> Result<Request<Bytes>, BuildError> {
        let head = self.head.take().ok_or_else(|| BuildError::invalid_message("request head never received"))?;
        let body = self.body.split().freeze();
        Ok(head.body(body))
    }

    fn release_resources(&mut self) {
        self.head = None;
        self.body = BytesMut::new();
    }
}

#[cfg(test)]
mod tests {
    use http::{Method, Request};

    use super::*;
    use crate::codec::BufferDecoder;

    fn post_head() -> RequestHead {
        Request::builder().method(Method::POST).uri("/upload").body(()).unwrap().into()
    }

    /// Counts flow-control calls so backpressure behavior can be asserted.
    #[derive(Debug, Default)]
    struct RecordingIoControl {
        suspended: usize,
        resumed: usize,
    }

    impl IoControl for RecordingIoControl {
        fn request_input(&mut self) {
            self.resumed += 1;
        }

        fn suspend_input(&mut self) {
            self.suspended += 1;
        }
    }

    #[test]
    fn test_accumulates_across_partial_reads() {
        let mut consumer = FullRequestConsumer::new();
        consumer.on_request_received(post_head());

        let mut decoder = BufferDecoder::new();
        let mut ioctrl = RecordingIoControl::default();

        for chunk in [&b"first "[..], &b""[..], &b"second"[..]] {
            decoder.feed(chunk);
            consumer.on_content_received(&mut decoder, &mut ioctrl).unwrap();
        }
        decoder.complete();
        consumer.on_content_received(&mut decoder, &mut ioctrl).unwrap();
        assert!(decoder.is_completed());

        let request = consumer.build_result(&mut ConsumeContext::new()).unwrap();
        assert_eq!(request.method(), &Method::POST);
        assert_eq!(request.uri().path(), "/upload");
        assert_eq!(&request.body()[..], b"first second");
    }

    #[test]
    fn test_max_body_size_fails_decode() {
        let mut consumer = FullRequestConsumer::new().max_body_size(4);
        consumer.on_request_received(post_head());

        let mut decoder = BufferDecoder::new();
        let mut ioctrl = RecordingIoControl::default();

        decoder.feed(b"1234");
        consumer.on_content_received(&mut decoder, &mut ioctrl).unwrap();

        decoder.feed(b"5");
        let result = consumer.on_content_received(&mut decoder, &mut ioctrl);
        assert!(matches!(result, Err(DecodeError::TooLargeBody { current_size: 5, max_size: 4 })));
    }

    #[test]
    fn test_high_water_mark_suspends_input_once() {
        let mut consumer = FullRequestConsumer::new().high_water_mark(3);
        consumer.on_request_received(post_head());

        let mut decoder = BufferDecoder::new();
        let mut ioctrl = RecordingIoControl::default();

        decoder.feed(b"ab");
        consumer.on_content_received(&mut decoder, &mut ioctrl).unwrap();
        assert_eq!(ioctrl.suspended, 0);

        decoder.feed(b"cd");
        consumer.on_content_received(&mut decoder, &mut ioctrl).unwrap();
        assert_eq!(ioctrl.suspended, 1);

        // already suspended, no duplicate hint
        decoder.feed(b"ef");
        consumer.on_content_received(&mut decoder, &mut ioctrl).unwrap();
        assert_eq!(ioctrl.suspended, 1);
        assert_eq!(ioctrl.resumed, 0);
    }

    #[test]
    fn test_build_without_head_fails() {
        let mut consumer = FullRequestConsumer::new();
        let error = consumer.build_result(&mut ConsumeContext::new()).unwrap_err();
        assert_eq!(error.to_string(), "invalid message: request head never received");
    }
}
