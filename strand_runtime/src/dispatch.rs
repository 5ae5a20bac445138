//! Iteration dispatch.
//!
//! One control construct, two iteration modes, resolved once before the
//! loop begins by the shape of the source the caller constructs:
//!
//! - **Sequence mode**: a finite, already-materialized sequence; the body
//!   runs once per element in order and the construct returns the body
//!   results as a sequence of the same length and order (a strict map).
//! - **Generator mode**: a generator is stepped until the completion
//!   sentinel; the body runs once per yielded value and results are
//!   discarded. Termination is sentinel-driven: the loop has no notion of
//!   total length in advance.
//!
//! In both modes the body observes each produced value exactly once, in
//! production order, and never runs after the sentinel.

use crate::generator::Generator;
use strand_core::{Step, StrandResult};

// ============================================================================
// Iteration Source
// ============================================================================

/// The source of a `for_each` loop, fixing the iteration mode.
#[derive(Debug)]
pub enum IterSource<T> {
    /// A finite ordered sequence; drives the strict-map mode.
    Sequence(Vec<T>),
    /// A generator; drives the sentinel-terminated mode.
    Generator(Generator<T>),
}

impl<T> From<Vec<T>> for IterSource<T> {
    #[inline]
    fn from(items: Vec<T>) -> Self {
        Self::Sequence(items)
    }
}

impl<T> From<Generator<T>> for IterSource<T> {
    #[inline]
    fn from(generator: Generator<T>) -> Self {
        Self::Generator(generator)
    }
}

// ============================================================================
// Loop Output
// ============================================================================

/// What a `for_each` loop produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoopOutput<R> {
    /// Sequence mode: the body results, in input order.
    Mapped(Vec<R>),
    /// Generator mode: the source was drained; results were discarded.
    Drained,
}

impl<R> LoopOutput<R> {
    /// Returns true for the sequence-mode output.
    #[inline]
    pub fn is_mapped(&self) -> bool {
        matches!(self, Self::Mapped(_))
    }

    /// Returns true for the generator-mode output.
    #[inline]
    pub fn is_drained(&self) -> bool {
        matches!(self, Self::Drained)
    }

    /// Extracts the mapped results, if this was sequence mode.
    #[inline]
    pub fn into_mapped(self) -> Option<Vec<R>> {
        match self {
            Self::Mapped(results) => Some(results),
            Self::Drained => None,
        }
    }
}

// ============================================================================
// Driving Loop
// ============================================================================

/// Runs `body` once per value produced by `source`.
///
/// The mode is fixed by the `IterSource` variant before the loop begins.
/// A generator step error aborts the loop and propagates to the caller;
/// the generator behind it is already exhausted at that point.
pub fn for_each<T, R, F>(source: IterSource<T>, mut body: F) -> StrandResult<LoopOutput<R>>
where
    T: Send + 'static,
    F: FnMut(T) -> R,
{
    match source {
        IterSource::Sequence(items) => {
            let mut results = Vec::with_capacity(items.len());
            for item in items {
                results.push(body(item));
            }
            Ok(LoopOutput::Mapped(results))
        }
        IterSource::Generator(mut generator) => {
            loop {
                match generator.step()? {
                    Step::Yielded(value) => {
                        body(value);
                    }
                    Step::Done => break,
                }
            }
            Ok(LoopOutput::Drained)
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
