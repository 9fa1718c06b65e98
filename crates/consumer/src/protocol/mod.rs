//! Protocol-level types shared between the driver and the consumer.
//!
//! This module provides the vocabulary of one request exchange:
//!
//! - **Request metadata** ([`request`]): [`RequestHead`] wraps the already-parsed
//!   request line and headers handed over by the driver
//! - **Exchange context** ([`context`]): [`ConsumeContext`] carries typed per-exchange
//!   attributes into result building
//! - **Error handling** ([`error`]): the two error kinds of the lifecycle contract
//!   - [`DecodeError`]: content decoding failures, propagated to the driver
//!   - [`BuildError`]: result building failures, recorded on the consumer
//!   - [`ConsumerError`]: top-level union for driver code
//!
//! Header parsing itself is out of scope: request heads arrive here already parsed,
//! and body bytes arrive already decoded from the transport framing.

mod request;
pub use request::RequestHead;

mod context;
pub use context::ConsumeContext;

mod error;
pub use error::BuildError;
pub use error::ConsumerError;
pub use error::DecodeError;
