//! The request-consumption state machine and its extension points.
//!
//! # Components
//!
//! - [`RequestConsumer`]: the generic state machine enforcing the lifecycle contract
//! - [`Outcome`]: the published terminal outcome of one exchange
//! - [`ConsumeRequest`]: the extension-point trait concrete consumers implement
//! - [`FullRequestConsumer`]: built-in consumer buffering the whole body in memory
//!
//! # Lifecycle
//!
//! ```text
//! Created --request_received--> Receiving
//! Receiving --content_received (0..n)--> Receiving
//! Receiving --request_completed--> Completed
//! Receiving --close--> Closed
//! ```
//!
//! `Completed` and `Closed` are both terminal; every notification afterwards is
//! a no-op, and the accumulated per-request state is released exactly once on
//! whichever terminal transition runs first.

mod consume;
pub use consume::ConsumeRequest;

mod request_consumer;
pub use request_consumer::Outcome;
pub use request_consumer::RequestConsumer;

mod full_request;
pub use full_request::FullRequestConsumer;
