//! Built-in counting generator.
//!
//! `counting(start, stop, step)` yields `start, start + step,
//! start + 2 * step, …` while the cursor is strictly below `stop`, then
//! completes. The factory is built on the public [`Generator`] surface,
//! so it exercises exactly the suspension path user generators use.
//!
//! # Range policy
//!
//! A `step` that cannot move the cursor toward `stop` (zero or negative)
//! would loop forever under the naive reading. Such a range is treated as
//! immediately exhausted instead: an empty result is recoverable, a
//! silent infinite loop is not. Cursor advance is overflow-checked and
//! completes the generator rather than wrapping.

use crate::generator::Generator;

/// Counts from `start` (inclusive) to `stop` (exclusive) by `step`.
///
/// Yields nothing when `start >= stop` or when `step <= 0` (see the
/// module docs for the non-progressing-step policy).
///
/// ```
/// use strand_runtime::{counting, Step};
///
/// let mut gen = counting(2, 10, 3);
/// assert_eq!(gen.step()?, Step::Yielded(2));
/// assert_eq!(gen.step()?, Step::Yielded(5));
/// assert_eq!(gen.step()?, Step::Yielded(8));
/// assert_eq!(gen.step()?, Step::Done);
/// # Ok::<(), strand_runtime::StrandError>(())
/// ```
pub fn counting(start: i64, stop: i64, step: i64) -> Generator<i64> {
    Generator::new(move |yielder| {
        if step <= 0 {
            return Ok(());
        }
        let mut cursor = start;
        while cursor < stop {
            yielder.yield_with(cursor);
            cursor = match cursor.checked_add(step) {
                Some(next) => next,
                None => break,
            };
        }
        Ok(())
    })
}

/// Counts from zero to `stop` by one.
#[inline]
pub fn counting_to(stop: i64) -> Generator<i64> {
    counting(0, stop, 1)
}

/// Counts from `start` to `stop` by one.
#[inline]
pub fn counting_from(start: i64, stop: i64) -> Generator<i64> {
    counting(start, stop, 1)
}
