//! Cooperative generator machinery.
//!
//! A generator wraps a suspendable body into a zero-argument step object:
//! each step runs the body until it yields a value or finishes, and state
//! persists across steps. Suspension is implemented with a dedicated
//! thread per generator and a blocking rendezvous handoff, which gives
//! single-shot, one-subscriber semantics without delimited continuations.
//!
//! Entry points:
//!
//! - [`Generator::new`]: wrap a body; lazy, nothing runs until stepped
//! - [`Generator::step`]: advance by exactly one yield point
//! - [`Generator::iter_mut`]: drive the remainder as an `Iterator`

mod iterator;
mod object;
mod yielder;

pub use iterator::GeneratorIterator;
pub use object::Generator;
pub use yielder::Yielder;
