//! # Strand Core
//!
//! Core types for the Strand cooperative generator runtime.
//!
//! This crate provides the foundational building blocks shared across the
//! Strand workspace:
//!
//! - **Step Results**: the two-state sum type a generator step produces
//! - **Lifecycle State**: the generator state machine and its atomic cell
//! - **Error Handling**: the unified error enum and result alias
//!
//! Nothing in this crate executes generator bodies; the suspension
//! machinery lives in `strand_runtime`.

#![deny(unsafe_op_in_unsafe_fn)]
#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod state;
pub mod step;

pub use error::{StrandError, StrandResult};
pub use state::{GenState, StateCell};
pub use step::Step;

/// Strand runtime version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
