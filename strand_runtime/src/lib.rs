//! Cooperative generator runtime with a unified iteration construct.
//!
//! This crate provides the Strand execution surface:
//!
//! - **Generator core**: wraps a suspendable body function into a
//!   pull-based step object. Each step runs the body until it yields a
//!   value or finishes; state persists across steps.
//! - **Iteration dispatcher**: one `for_each` construct over either a
//!   fixed sequence (strict in-order map) or a generator (sentinel-driven
//!   drain).
//!
//! # Data flow
//!
//! ```text
//! counting(2, 10, 3) ──► Generator ──step──► Step::Yielded(v) ──► body(v)
//!                            ▲                     │
//!                            └─────── for_each ────┘   (until Step::Done)
//! ```
//!
//! # Example
//!
//! ```
//! use strand_runtime::{Generator, Step};
//!
//! let mut words = Generator::new(|y| {
//!     y.yield_with("fizz");
//!     y.yield_with("buzz");
//!     Ok(())
//! });
//!
//! assert_eq!(words.step()?, Step::Yielded("fizz"));
//! assert_eq!(words.step()?, Step::Yielded("buzz"));
//! assert_eq!(words.step()?, Step::Done);
//! assert_eq!(words.step()?, Step::Done); // idempotent after completion
//! # Ok::<(), strand_runtime::StrandError>(())
//! ```
//!
//! # Concurrency model
//!
//! Single-threaded cooperative from the caller's perspective: control
//! transfers only at explicit yield points, and at most one of {driver,
//! body} is logically active at any instant. A generator handle is `Send`
//! but has exactly one resumer at a time, enforced by `&mut self` on
//! [`Generator::step`].

#![deny(unsafe_op_in_unsafe_fn)]

pub mod counting;
pub mod dispatch;
pub mod generator;

pub use counting::{counting, counting_from, counting_to};
pub use dispatch::{for_each, IterSource, LoopOutput};
pub use generator::{Generator, GeneratorIterator, Yielder};

// Core types, re-exported for downstream convenience.
pub use strand_core::{GenState, Step, StrandError, StrandResult};
