//! Error types and result definitions for Strand.
//!
//! The error surface is deliberately small. Two conditions are *not*
//! errors by design:
//!
//! - Stepping an exhausted generator: deterministic `Done`, never a fault.
//! - A `counting` range whose step cannot make progress: immediately
//!   exhausted (zero yields) rather than a silent infinite loop.
//!
//! What remains is a body failing mid-step, plus the internal channel
//! breakage class that a correct driver never observes.

use thiserror::Error;

/// The unified result type used throughout Strand.
pub type StrandResult<T> = Result<T, StrandError>;

/// Errors surfaced by the generator runtime.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StrandError {
    /// The generator body returned an error or panicked during a step.
    ///
    /// Propagates synchronously out of that `step` call; the generator is
    /// exhausted as a side effect and will not be resumed again.
    #[error("generator body failed: {message}")]
    BodyFailure {
        /// Description of the failure (error display or panic payload).
        message: String,
    },

    /// The execution unit backing a generator disappeared without a final
    /// signal. Unreachable through the safe API; reported rather than
    /// masked when it does occur.
    #[error("internal generator error: {message}")]
    Internal {
        /// Description of the broken invariant.
        message: String,
    },
}

impl StrandError {
    /// Creates a body failure error.
    #[inline]
    pub fn body_failure(message: impl Into<String>) -> Self {
        Self::BodyFailure {
            message: message.into(),
        }
    }

    /// Creates an internal error.
    #[inline]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Returns true if this error came from the generator body itself.
    #[inline]
    pub fn is_body_failure(&self) -> bool {
        matches!(self, Self::BodyFailure { .. })
    }
}
