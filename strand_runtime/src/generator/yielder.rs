//! The yield capability handed to generator bodies.
//!
//! A body receives exactly one `Yielder` and calls `yield_with` at each
//! suspension point: the value crosses to the driver over a zero-capacity
//! channel, then the body blocks until the driver grants permission to
//! continue. Both channel operations are rendezvous, so at most one of
//! {driver, body} is ever logically active.

use crossbeam_channel::{Receiver, Sender};
use std::panic;

use strand_core::StrandError;

/// Message from the body thread to the driving side.
pub(crate) enum Signal<T> {
    /// The body produced a value at a yield point.
    Yielded(T),
    /// The body returned normally.
    Finished,
    /// The body returned an error or panicked.
    Failed(StrandError),
}

/// Sentinel unwind payload used when the driver abandons a generator.
///
/// Carried via `resume_unwind` so the panic hook stays silent: abandonment
/// is a normal shutdown path, not a crash.
pub(crate) struct Disconnected;

/// Suspension capability for a generator body.
///
/// Obtained only through [`Generator::new`](super::Generator::new); the
/// body uses it zero or more times and then returns.
pub struct Yielder<T> {
    signal: Sender<Signal<T>>,
    resume: Receiver<()>,
}

impl<T> Yielder<T> {
    pub(crate) fn new(signal: Sender<Signal<T>>, resume: Receiver<()>) -> Self {
        Self { signal, resume }
    }

    /// Produces one value and suspends until the next step.
    ///
    /// Control transfers to the caller of `step` along with `value`; the
    /// body resumes right after this call on the following step. If the
    /// generator handle has been dropped, the body unwinds instead of
    /// resuming and its thread exits.
    pub fn yield_with(&self, value: T) {
        if self.signal.send(Signal::Yielded(value)).is_err() {
            unwind_disconnected();
        }
        if self.resume.recv().is_err() {
            unwind_disconnected();
        }
    }
}

/// Unwinds the body thread after the driver side disappeared.
fn unwind_disconnected() -> ! {
    panic::resume_unwind(Box::new(Disconnected))
}
