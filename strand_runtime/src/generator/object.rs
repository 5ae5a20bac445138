//! Generator object implementation.
//!
//! A `Generator<T>` wraps a suspendable body into a pull-based step
//! interface. The body runs on a dedicated thread, synchronized with the
//! driver through two zero-capacity rendezvous channels:
//!
//! ```text
//!   driver                                body thread
//!     │ step()                                │
//!     │──── resume.send(()) ─────────────────►│ (unblocks at yield point)
//!     │                                       │ ...runs to next yield...
//!     │◄─── signal.recv() ◄── Yielded(v) ─────│ (blocks again)
//!     ▼                                       ▼
//! ```
//!
//! The handoff is synchronous in both directions, so each `step` advances
//! the body by exactly one yield point and the body is parked again before
//! `step` returns.
//!
//! # Lifecycle
//!
//! Construction stores the body without running it; the thread is launched
//! on the first `step`. Completion, failure, and `Drop` all reap the
//! thread, so no execution unit outlives its handle.

use crossbeam_channel::{bounded, Receiver, Sender};
use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::thread::{self, JoinHandle};

use strand_core::{GenState, StateCell, Step, StrandError, StrandResult};

use super::iterator::GeneratorIterator;
use super::yielder::{Disconnected, Signal, Yielder};

/// Boxed generator body: consumes the yield capability, returns its outcome.
type BodyFn<T> = Box<dyn FnOnce(Yielder<T>) -> StrandResult<()> + Send + 'static>;

/// Driver-side channel endpoints for a launched generator.
struct Channel<T> {
    signal: Receiver<Signal<T>>,
    resume: Sender<()>,
}

// ============================================================================
// Generator
// ============================================================================

/// A suspendable computation producing a sequence of values on demand.
///
/// Each call to [`step`](Self::step) runs the body until it either yields
/// a value or finishes; state persists across calls. `step` takes
/// `&mut self`, so a generator has exactly one logical resumer at a time
/// by construction.
pub struct Generator<T> {
    /// Lifecycle state, driven entirely from the stepping side.
    state: StateCell,
    /// The body, present until the first step launches it.
    body: Option<BodyFn<T>>,
    /// Channel endpoints, present while the body thread is alive.
    channel: Option<Channel<T>>,
    /// Join handle for the body thread.
    worker: Option<JoinHandle<()>>,
}

impl<T: Send + 'static> Generator<T> {
    /// Wraps a suspendable body into a generator.
    ///
    /// The body takes the yield capability, uses it zero or more times,
    /// and returns its outcome. Construction performs no execution: the
    /// body is lazy and nothing runs until the first `step`.
    pub fn new<F>(body: F) -> Self
    where
        F: FnOnce(Yielder<T>) -> StrandResult<()> + Send + 'static,
    {
        Self {
            state: StateCell::new(),
            body: Some(Box::new(body)),
            channel: None,
            worker: None,
        }
    }

    /// Advances the generator by exactly one yield point.
    ///
    /// - Exhausted generators return `Ok(Step::Done)` immediately and run
    ///   no body code (idempotent after completion).
    /// - Otherwise the body resumes until it yields
    ///   (`Ok(Step::Yielded(v))`), returns (`Ok(Step::Done)`), or fails
    ///   (`Err`, after which the generator is exhausted).
    pub fn step(&mut self) -> StrandResult<Step<T>> {
        match self.state.state() {
            GenState::Exhausted => return Ok(Step::Done),
            GenState::Created => self.launch()?,
            GenState::Suspended => self.grant_resume()?,
            GenState::Running => {
                // Unreachable through the safe API: `&mut self` plus the
                // synchronous handoff keep the cell out of Running between
                // steps. Fail fast rather than deadlock on the channel.
                self.state.exhaust();
                self.reap();
                return Err(StrandError::internal(
                    "generator observed running between steps",
                ));
            }
        }
        self.collect_signal()
    }

    /// Launches the body thread on the first step.
    fn launch(&mut self) -> StrandResult<()> {
        let Some(body) = self.body.take() else {
            self.state.exhaust();
            return Err(StrandError::internal("generator body already consumed"));
        };

        let (signal_tx, signal_rx) = bounded(0);
        let (resume_tx, resume_rx) = bounded(0);
        let yielder = Yielder::new(signal_tx.clone(), resume_rx);

        let worker = thread::Builder::new()
            .name("strand-generator".into())
            .spawn(move || run_body(body, yielder, signal_tx))
            .map_err(|e| {
                self.state.exhaust();
                StrandError::internal(format!("failed to spawn generator thread: {e}"))
            })?;

        self.channel = Some(Channel {
            signal: signal_rx,
            resume: resume_tx,
        });
        self.worker = Some(worker);
        self.state.start();
        Ok(())
    }

    /// Grants a suspended body permission to continue.
    fn grant_resume(&mut self) -> StrandResult<()> {
        let send_result = match self.channel.as_ref() {
            Some(channel) => channel.resume.send(()),
            None => {
                self.state.exhaust();
                return Err(StrandError::internal(
                    "suspended generator has no live channel",
                ));
            }
        };
        if send_result.is_err() {
            self.state.exhaust();
            self.reap();
            return Err(StrandError::internal(
                "body thread exited without a completion signal",
            ));
        }
        self.state.start();
        Ok(())
    }

    /// Blocks until the body yields, finishes, or fails.
    fn collect_signal(&mut self) -> StrandResult<Step<T>> {
        let received = match self.channel.as_ref() {
            Some(channel) => channel.signal.recv(),
            None => {
                self.state.exhaust();
                return Err(StrandError::internal("running generator lost its channel"));
            }
        };

        match received {
            Ok(Signal::Yielded(value)) => {
                self.state.suspend();
                Ok(Step::Yielded(value))
            }
            Ok(Signal::Finished) => {
                self.state.exhaust();
                self.reap();
                Ok(Step::Done)
            }
            Ok(Signal::Failed(err)) => {
                self.state.exhaust();
                self.reap();
                Err(err)
            }
            Err(_) => {
                self.state.exhaust();
                self.reap();
                Err(StrandError::internal(
                    "body thread exited without a completion signal",
                ))
            }
        }
    }

    /// Iterates the remaining values by mutable borrow.
    ///
    /// The adapter stops at the sentinel; a body failure also stops it and
    /// is parked on the adapter for inspection.
    pub fn iter_mut(&mut self) -> GeneratorIterator<'_, T> {
        GeneratorIterator::new(self)
    }
}

impl<T> Generator<T> {
    /// Returns the current lifecycle state.
    #[inline]
    pub fn state(&self) -> GenState {
        self.state.state()
    }

    /// Returns true if the generator is finished.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.state.is_exhausted()
    }

    /// Returns true if a step may produce further values.
    #[inline]
    pub fn is_resumable(&self) -> bool {
        self.state.is_resumable()
    }

    /// Drops channel endpoints and joins the body thread.
    ///
    /// Closing the endpoints wakes a parked body, which unwinds and exits;
    /// the join then completes promptly.
    fn reap(&mut self) {
        self.channel = None;
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

impl<T> Drop for Generator<T> {
    fn drop(&mut self) {
        self.reap();
    }
}

impl<T> fmt::Debug for Generator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Generator")
            .field("state", &self.state.state())
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Body Thread
// ============================================================================

/// Entry point of the body thread.
///
/// Runs the body to completion, then reports the outcome over the signal
/// channel. A body unwound by the abandonment sentinel exits without
/// signalling; any other panic is captured as a body failure.
fn run_body<T>(body: BodyFn<T>, yielder: Yielder<T>, signal: Sender<Signal<T>>) {
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| body(yielder)));
    let report = match outcome {
        Ok(Ok(())) => Signal::Finished,
        Ok(Err(err)) => Signal::Failed(err),
        Err(payload) => {
            if payload.is::<Disconnected>() {
                return;
            }
            Signal::Failed(StrandError::body_failure(panic_message(payload.as_ref())))
        }
    };
    // Fails only when the driver is already gone; nothing left to notify.
    let _ = signal.send(report);
}

/// Extracts a readable message from a panic payload.
fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "generator body panicked".to_string()
    }
}

// ============================================================================
// Tests
// ============================================================================
