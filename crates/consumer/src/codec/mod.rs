//! I/O capabilities consumed by the request consumer.
//!
//! The consumer never performs networking I/O itself; it is handed two capabilities
//! by the driver on every content notification:
//!
//! - [`ContentDecoder`]: a non-blocking, possibly-partial source of already-received
//!   body bytes ([`BufferDecoder`] is the built-in in-memory implementation)
//! - [`IoControl`]: a fire-and-forget handle to suspend and resume input delivery,
//!   used by consumers to apply backpressure

mod content_decoder;
pub use content_decoder::BufferDecoder;
pub use content_decoder::ContentDecoder;

mod io_control;
pub use io_control::IoControl;
pub use io_control::NoopIoControl;
