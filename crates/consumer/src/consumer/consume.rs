use crate::codec::{ContentDecoder, IoControl};
use crate::protocol::{BuildError, ConsumeContext, DecodeError, RequestHead};

/// The per-request-type extension points of the consumption lifecycle.
///
/// A `ConsumeRequest` implementation owns the accumulation state of one request
/// and decides what typed result the exchange produces. The surrounding
/// [`RequestConsumer`](super::RequestConsumer) guarantees the operations are
/// never invoked concurrently, never invoked after a terminal transition, and
/// that [`release_resources`](ConsumeRequest::release_resources) runs exactly
/// once.
pub trait ConsumeRequest {
    /// The typed result this consumer produces on normal completion.
    type Output;

    /// Invoked once when the request head has been received, before any content.
    ///
    /// Must not block; typical implementations record the head and size their
    /// buffers from its headers.
    fn on_request_received(&mut self, head: RequestHead);

    /// Invoked whenever body content may be available.
    ///
    /// Pull whatever the decoder has; it may be nothing. Implementations
    /// accumulate across invocations rather than assuming one call drains all
    /// content, and may use `ioctrl` to suspend input when internal buffering
    /// is full. Errors propagate to the driver, which aborts the exchange.
    fn on_content_received(
        &mut self,
        decoder: &mut dyn ContentDecoder,
        ioctrl: &mut dyn IoControl,
    ) -> Result<(), DecodeError>;

    /// Invoked once, at normal completion, to assemble the result from
    /// accumulated state. An error here is recorded on the consumer instead of
    /// reaching the driver.
    fn build_result(&mut self, context: &mut ConsumeContext) -> Result<Self::Output, BuildError>;

    /// Invoked exactly once, on the first terminal transition, whether it was a
    /// normal completion (even one whose build failed) or an abrupt close.
    fn release_resources(&mut self);
}
