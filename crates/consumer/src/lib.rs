//! An asynchronous HTTP request consumer state machine
//!
//! This crate provides the lifecycle contract for consuming one inbound HTTP request:
//! request line and headers arrive first, then body content arrives incrementally through
//! a non-blocking decoder, and finally the request is declared complete and a typed
//! result is produced. The crate owns the ordering guarantees, idempotent completion
//! and failure capture that must hold while an I/O dispatch thread drives notifications
//! and an application thread reads the outcome.
//!
//! # Features
//!
//! - Generic state machine wrapping any [`consumer::ConsumeRequest`] implementation
//! - Idempotent terminal transitions (normal completion and abrupt close)
//! - Lock-free outcome reads, safe concurrently with in-flight notifications
//! - Backpressure side channel through the [`codec::IoControl`] capability
//! - Awaitable completion for async applications
//! - Clean error handling
//!
//! # Example
//!
//! ```
//! use http::{Method, Request};
//! use tracing::Level;
//! use tracing_subscriber::FmtSubscriber;
//! use micro_consumer::codec::{BufferDecoder, NoopIoControl};
//! use micro_consumer::consumer::{FullRequestConsumer, RequestConsumer};
//! use micro_consumer::protocol::ConsumeContext;
//!
//! // Initialize logging
//! let subscriber = FmtSubscriber::builder()
//!     .with_max_level(Level::INFO)
//!     .finish();
//! tracing::subscriber::set_global_default(subscriber)
//!     .expect("setting default subscriber failed");
//!
//! // one consumer per request exchange
//! let consumer = RequestConsumer::new(FullRequestConsumer::new());
//!
//! // the driver reports the parsed request head first
//! let head = Request::builder().method(Method::POST).uri("/echo").body(()).unwrap();
//! consumer.request_received(head.into());
//!
//! // body bytes arrive incrementally, possibly zero bytes per notification
//! let mut decoder = BufferDecoder::new();
//! let mut ioctrl = NoopIoControl;
//! decoder.feed(b"hello ");
//! consumer.content_received(&mut decoder, &mut ioctrl).unwrap();
//! decoder.feed(b"world");
//! decoder.complete();
//! consumer.content_received(&mut decoder, &mut ioctrl).unwrap();
//!
//! // the driver declares the exchange complete exactly once
//! consumer.request_completed(&mut ConsumeContext::new());
//!
//! assert!(consumer.is_done());
//! assert!(consumer.failure().is_none());
//! let request = consumer.result().unwrap();
//! assert_eq!(&request.body()[..], b"hello world");
//! ```
//!
//! # Architecture
//!
//! The crate is organized into several key modules:
//!
//! - [`consumer`]: The state machine and the extension-point trait
//! - [`protocol`]: Request metadata, the per-exchange context and error types
//! - [`codec`]: The decoder and flow-control capabilities consumed by this crate
//!
//! # Core Components
//!
//! ## The state machine
//!
//! [`consumer::RequestConsumer`] wraps a [`consumer::ConsumeRequest`] implementation and
//! enforces the lifecycle contract: notifications after a terminal transition are no-ops,
//! the terminal outcome is published exactly once, and the accumulated per-request state
//! is released exactly once regardless of which terminal path ran first.
//!
//! ## Extension points
//!
//! Concrete consumers implement [`consumer::ConsumeRequest`] with four operations:
//! react to the request head, pull available bytes from a [`codec::ContentDecoder`],
//! build the typed result, and release resources. [`consumer::FullRequestConsumer`] is
//! the built-in implementation that buffers the whole body in memory.
//!
//! ## Capabilities
//!
//! The crate consumes, never implements, the I/O side: [`codec::ContentDecoder`] is a
//! non-blocking source of already-received body bytes, and [`codec::IoControl`] lets a
//! consumer suspend and resume input delivery for backpressure.
//!
//! # Limitations
//!
//! - No networking I/O: the crate only reacts to driver notifications
//! - No HTTP parsing: request heads arrive already parsed
//! - One consumer instance serves exactly one request exchange

pub mod codec;
pub mod consumer;
pub mod protocol;

mod utils;
pub(crate) use utils::ensure;
