//! Iterator adapter for generators.
//!
//! Bridges the step protocol onto `std::iter::Iterator` for call sites
//! that only pull values. The adapter fuses at the completion sentinel; a
//! body failure also ends iteration and is parked on the adapter rather
//! than silently dropped.

use std::iter::FusedIterator;

use strand_core::{Step, StrandError};

use super::object::Generator;

/// Iterator over the remaining values of a mutably borrowed generator.
pub struct GeneratorIterator<'a, T> {
    /// The generator being driven.
    generator: &'a mut Generator<T>,
    /// Terminal failure observed during iteration, if any.
    failure: Option<StrandError>,
}

impl<'a, T> GeneratorIterator<'a, T> {
    /// Creates an iterator over a generator's remaining values.
    #[inline]
    pub fn new(generator: &'a mut Generator<T>) -> Self {
        Self {
            generator,
            failure: None,
        }
    }

    /// Returns the failure that ended iteration, if one occurred.
    #[inline]
    pub fn failure(&self) -> Option<&StrandError> {
        self.failure.as_ref()
    }

    /// Consumes the adapter, returning the terminal failure if any.
    #[inline]
    pub fn take_failure(self) -> Option<StrandError> {
        self.failure
    }

    /// Returns true if the underlying generator is finished.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.generator.is_exhausted()
    }
}

impl<T: Send + 'static> Iterator for GeneratorIterator<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.failure.is_some() {
            return None;
        }
        match self.generator.step() {
            Ok(Step::Yielded(value)) => Some(value),
            Ok(Step::Done) => None,
            Err(err) => {
                self.failure = Some(err);
                None
            }
        }
    }
}

// Once `next` returns None the generator is exhausted (or a failure is
// parked), and every later call observes the same.
impl<T: Send + 'static> FusedIterator for GeneratorIterator<'_, T> {}
