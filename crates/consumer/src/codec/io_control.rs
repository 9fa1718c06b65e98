/// A capability to pause and resume delivery of further input.
///
/// Handed to the consumer on every content notification as a side channel for
/// backpressure. Calls are fire-and-forget hints to the reactor; no return
/// value is relied upon.
pub trait IoControl {
    /// Asks the reactor to resume delivering input for this exchange.
    fn request_input(&mut self);

    /// Asks the reactor to stop delivering input until requested again.
    fn suspend_input(&mut self);
}

/// An [`IoControl`] that ignores all flow-control hints.
///
/// Useful for drivers without flow control and for tests.
#[derive(Debug, Default)]
pub struct NoopIoControl;

impl IoControl for NoopIoControl {
    fn request_input(&mut self) {}

    fn suspend_input(&mut self) {}
}
