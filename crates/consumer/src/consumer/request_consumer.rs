//! The generic request-consumption state machine.
//!
//! [`RequestConsumer`] wraps one [`ConsumeRequest`] implementation and enforces
//! the lifecycle contract for one request exchange:
//!
//! - notifications are serialized under one guard, so racing terminal calls
//!   cannot double-release or publish two outcomes
//! - both terminal transitions are idempotent
//! - the accumulated per-request state is released exactly once, on the first
//!   terminal transition, regardless of path
//! - the terminal outcome is published in a single atomic store as the last
//!   step of the transition, so accessor threads can never observe a result
//!   without the done flag or a half-written result
//!
//! # Threading
//!
//! The driver is expected to invoke the notification operations from a single
//! dispatch thread per connection, but the accessors ([`result`], [`failure`],
//! [`is_done`]) and [`wait_done`] may run concurrently from an application
//! thread at any point. Accessors read a lock-free slot and never contend with
//! an in-flight notification.
//!
//! [`result`]: RequestConsumer::result
//! [`failure`]: RequestConsumer::failure
//! [`is_done`]: RequestConsumer::is_done
//! [`wait_done`]: RequestConsumer::wait_done

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};

use arc_swap::ArcSwapOption;
use tokio::sync::Notify;
use tracing::{debug, trace};

use crate::codec::{ContentDecoder, IoControl};
use crate::consumer::ConsumeRequest;
use crate::protocol::{BuildError, ConsumeContext, DecodeError, RequestHead};

/// The published terminal outcome of one request exchange.
///
/// Mutual exclusion of result and failure is structural: an exchange ends in
/// exactly one of these variants. `Closed` carries neither, it is the abrupt
/// path where no result was ever attempted.
pub enum Outcome<T> {
    /// Normal completion, the result was built successfully.
    Completed(Arc<T>),
    /// Normal completion reached, but building the result failed.
    Failed(Arc<BuildError>),
    /// The driver abandoned the exchange before completion.
    Closed,
}

impl<T> Outcome<T> {
    /// Returns the built result, if this outcome carries one.
    pub fn result(&self) -> Option<Arc<T>> {
        match self {
            Outcome::Completed(value) => Some(Arc::clone(value)),
            _ => None,
        }
    }

    /// Returns the recorded build failure, if this outcome carries one.
    pub fn failure(&self) -> Option<Arc<BuildError>> {
        match self {
            Outcome::Failed(e) => Some(Arc::clone(e)),
            _ => None,
        }
    }

    /// Returns true if the exchange ended through [`close`](RequestConsumer::close).
    pub fn is_closed(&self) -> bool {
        matches!(self, Outcome::Closed)
    }
}

impl<T> fmt::Debug for Outcome<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Completed(_) => f.write_str("Completed"),
            Outcome::Failed(e) => f.debug_tuple("Failed").field(e).finish(),
            Outcome::Closed => f.write_str("Closed"),
        }
    }
}

/// The state machine driving one [`ConsumeRequest`] through its lifecycle.
///
/// Bound to exactly one request: create one per exchange and drop it after the
/// outcome has been consumed. See the [module docs](self) for the contract.
pub struct RequestConsumer<C: ConsumeRequest> {
    /// Accumulation state; `None` once a terminal transition has run.
    /// The lock also serializes all notification operations.
    state: Mutex<Option<C>>,
    /// Terminal outcome, stored once as the last step of the terminal transition.
    outcome: ArcSwapOption<Outcome<C::Output>>,
    done: Notify,
}

impl<C: ConsumeRequest> RequestConsumer<C> {
    /// Wraps a concrete consumer in the lifecycle state machine.
    pub fn new(consumer: C) -> Self {
        Self { state: Mutex::new(Some(consumer)), outcome: ArcSwapOption::const_empty(), done: Notify::new() }
    }

    /// Notifies the consumer that the request head has been received.
    ///
    /// The driver must call this at most once, before any content
    /// notification; ordering is the driver's contract and is not guarded
    /// here. No-op after a terminal transition.
    pub fn request_received(&self, head: RequestHead) {
        let mut state = self.lock_state();
        if let Some(consumer) = state.as_mut() {
            trace!(method = %head.method(), uri = %head.uri(), "request received");
            consumer.on_request_received(head);
        }
    }

    /// Notifies the consumer that body content may be available.
    ///
    /// Decode errors propagate to the driver untouched; nothing is recorded on
    /// the consumer, which keeps its already-accumulated data intact. The
    /// driver is expected to abort the exchange and call
    /// [`close`](RequestConsumer::close). No-op after a terminal transition.
    pub fn content_received(
        &self,
        decoder: &mut dyn ContentDecoder,
        ioctrl: &mut dyn IoControl,
    ) -> Result<(), DecodeError> {
        let mut state = self.lock_state();
        match state.as_mut() {
            Some(consumer) => consumer.on_content_received(decoder, ioctrl),
            None => Ok(()),
        }
    }

    /// The sole normal terminal transition.
    ///
    /// Idempotent: a duplicate call (or a call after
    /// [`close`](RequestConsumer::close)) returns immediately with no side
    /// effects. Otherwise the result is built from accumulated state, a build
    /// error is recorded instead of propagated, resources are released exactly
    /// once even when building fails, and the outcome becomes visible to
    /// accessors in a single atomic publication.
    pub fn request_completed(&self, context: &mut ConsumeContext) {
        let mut state = self.lock_state();
        let Some(mut consumer) = state.take() else {
            return;
        };

        let outcome = match consumer.build_result(context) {
            Ok(result) => {
                debug!("request completed, result built");
                Outcome::Completed(Arc::new(result))
            }
            Err(e) => {
                debug!(cause = %e, "request completed, building result failed");
                Outcome::Failed(Arc::new(e))
            }
        };
        consumer.release_resources();

        // publish as the last step of the transition, while still holding the
        // guard so a racing `close` observes the terminal state
        self.outcome.store(Some(Arc::new(outcome)));
        drop(state);
        self.done.notify_waiters();
    }

    /// The abrupt terminal transition, used when the driver abandons the
    /// exchange before normal completion.
    ///
    /// Idempotent. Discards accumulated progress, releases resources and
    /// publishes [`Outcome::Closed`]; no result is attempted and no failure is
    /// recorded. A close after completion is a no-op.
    pub fn close(&self) {
        let mut state = self.lock_state();
        let Some(mut consumer) = state.take() else {
            return;
        };

        debug!("exchange closed before completion");
        consumer.release_resources();

        self.outcome.store(Some(Arc::new(Outcome::Closed)));
        drop(state);
        self.done.notify_waiters();
    }

    /// Returns the built result, if the exchange completed successfully.
    ///
    /// Never blocks, never mutates. `None` until a terminal transition, and
    /// forever on the failed and closed paths.
    pub fn result(&self) -> Option<Arc<C::Output>> {
        self.outcome.load().as_deref().and_then(Outcome::result)
    }

    /// Returns the recorded build failure, if result building failed.
    ///
    /// Never blocks, never mutates. Check this before trusting
    /// [`result`](RequestConsumer::result) once [`is_done`](RequestConsumer::is_done)
    /// is true; both are `None` only on the closed path.
    pub fn failure(&self) -> Option<Arc<BuildError>> {
        self.outcome.load().as_deref().and_then(Outcome::failure)
    }

    /// Returns true once a terminal transition has occurred. Monotonic.
    pub fn is_done(&self) -> bool {
        self.outcome.load().is_some()
    }

    /// Waits for the terminal transition and returns the outcome.
    ///
    /// Resolves immediately when the exchange is already done; otherwise the
    /// caller is woken by the terminal transition. Usable from any number of
    /// application tasks concurrently.
    pub async fn wait_done(&self) -> Arc<Outcome<C::Output>> {
        let notified = self.done.notified();
        tokio::pin!(notified);
        loop {
            if let Some(outcome) = self.outcome.load_full() {
                return outcome;
            }
            // register before re-checking, so a publication between the check
            // and the await cannot be missed
            notified.as_mut().enable();
            if let Some(outcome) = self.outcome.load_full() {
                return outcome;
            }
            notified.as_mut().await;
            notified.set(self.done.notified());
        }
    }

    /// A panicking notification must not wedge the exchange: recover the inner
    /// state and let the terminal transitions run their course.
    fn lock_state(&self) -> MutexGuard<'_, Option<C>> {
        match self.state.lock() {
            Ok(state) => state,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl<C: ConsumeRequest> fmt::Debug for RequestConsumer<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestConsumer").field("done", &self.is_done()).finish()
    }
}
