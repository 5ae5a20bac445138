//! Generator lifecycle state.
//!
//! This module provides `GenState`, the four-state generator lifecycle, and
//! `StateCell`, the atomic cell a generator handle uses to track it.
//!
//! # States
//!
//! ```text
//! Created ──start──► Running ──suspend──► Suspended
//!                       │  ▲                  │
//!                       │  └──────start───────┘
//!                       └──exhaust──► Exhausted (terminal)
//! ```
//!
//! The cell carries no resumption point: the execution unit backing a
//! generator holds its own program position, so lifecycle state is all a
//! driver needs to validate a step.

use std::fmt;
use std::sync::atomic::{AtomicU8, Ordering};

// ============================================================================
// Generator State
// ============================================================================

/// Generator execution state.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GenState {
    /// Created but never stepped; the body has not started executing.
    Created = 0,
    /// The body is executing between two suspension points.
    Running = 1,
    /// Suspended at a yield point, waiting for the next step.
    Suspended = 2,
    /// Completed or failed; every further step observes the sentinel.
    Exhausted = 3,
}

impl GenState {
    /// Mask for extracting a state from raw bits.
    pub const MASK: u8 = 0b11;

    /// Creates a state from its raw 2-bit encoding.
    #[inline(always)]
    pub const fn from_bits(bits: u8) -> Self {
        match bits & Self::MASK {
            0 => Self::Created,
            1 => Self::Running,
            2 => Self::Suspended,
            _ => Self::Exhausted,
        }
    }

    /// Returns true if a step may advance the generator from this state.
    #[inline(always)]
    pub const fn is_resumable(self) -> bool {
        matches!(self, Self::Created | Self::Suspended)
    }

    /// Returns true if the generator is finished.
    #[inline(always)]
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Exhausted)
    }

    /// Returns a stable name for diagnostics.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Running => "running",
            Self::Suspended => "suspended",
            Self::Exhausted => "exhausted",
        }
    }
}

impl fmt::Display for GenState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Default for GenState {
    #[inline]
    fn default() -> Self {
        Self::Created
    }
}

// ============================================================================
// State Cell
// ============================================================================

/// Atomic lifecycle cell for a generator handle.
///
/// Transitions are driven entirely by the stepping side; the body side
/// never touches the cell. Atomic storage keeps state reads coherent when
/// a handle migrates between threads.
#[repr(transparent)]
pub struct StateCell {
    bits: AtomicU8,
}

impl StateCell {
    /// Creates a cell in the `Created` state.
    #[inline]
    pub fn new() -> Self {
        Self {
            bits: AtomicU8::new(GenState::Created as u8),
        }
    }

    /// Creates a cell holding a specific state.
    #[inline]
    pub fn with_state(state: GenState) -> Self {
        Self {
            bits: AtomicU8::new(state as u8),
        }
    }

    /// Reads the current state.
    #[inline(always)]
    pub fn state(&self) -> GenState {
        GenState::from_bits(self.bits.load(Ordering::Acquire))
    }

    /// Transitions to `Running`. Only valid from a resumable state.
    #[inline]
    pub fn start(&self) {
        debug_assert!(self.state().is_resumable(), "start from non-resumable state");
        self.bits.store(GenState::Running as u8, Ordering::Release);
    }

    /// Transitions to `Suspended` at a yield point. Only valid when running.
    #[inline]
    pub fn suspend(&self) {
        debug_assert_eq!(self.state(), GenState::Running);
        self.bits.store(GenState::Suspended as u8, Ordering::Release);
    }

    /// Transitions to `Exhausted`. Terminal; valid from any state.
    #[inline]
    pub fn exhaust(&self) {
        self.bits.store(GenState::Exhausted as u8, Ordering::Release);
    }

    /// Returns true if the body is executing.
    #[inline(always)]
    pub fn is_running(&self) -> bool {
        self.state() == GenState::Running
    }

    /// Returns true if a step may advance the generator.
    #[inline(always)]
    pub fn is_resumable(&self) -> bool {
        self.state().is_resumable()
    }

    /// Returns true if the generator is finished.
    #[inline(always)]
    pub fn is_exhausted(&self) -> bool {
        self.state().is_finished()
    }
}

impl Default for StateCell {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for StateCell {
    fn clone(&self) -> Self {
        Self {
            bits: AtomicU8::new(self.bits.load(Ordering::Relaxed)),
        }
    }
}

impl fmt::Debug for StateCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateCell")
            .field("state", &self.state())
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // ────────────────────────────────────────────────────────────────────────
    // GenState
    // ────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_state_size() {
        assert_eq!(std::mem::size_of::<GenState>(), 1);
    }

    #[test]
    fn test_state_from_bits() {
        assert_eq!(GenState::from_bits(0), GenState::Created);
        assert_eq!(GenState::from_bits(1), GenState::Running);
        assert_eq!(GenState::from_bits(2), GenState::Suspended);
        assert_eq!(GenState::from_bits(3), GenState::Exhausted);
        // Higher bits are masked off.
        assert_eq!(GenState::from_bits(0b101), GenState::Running);
    }

    #[test]
    fn test_state_is_resumable() {
        assert!(GenState::Created.is_resumable());
        assert!(!GenState::Running.is_resumable());
        assert!(GenState::Suspended.is_resumable());
        assert!(!GenState::Exhausted.is_resumable());
    }

    #[test]
    fn test_state_is_finished() {
        assert!(!GenState::Created.is_finished());
        assert!(!GenState::Running.is_finished());
        assert!(!GenState::Suspended.is_finished());
        assert!(GenState::Exhausted.is_finished());
    }

    #[test]
    fn test_state_display() {
        assert_eq!(format!("{}", GenState::Created), "created");
        assert_eq!(format!("{}", GenState::Exhausted), "exhausted");
    }

    #[test]
    fn test_state_default() {
        assert_eq!(GenState::default(), GenState::Created);
    }

    // ────────────────────────────────────────────────────────────────────────
    // StateCell
    // ────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_cell_new() {
        let cell = StateCell::new();
        assert_eq!(cell.state(), GenState::Created);
        assert!(cell.is_resumable());
        assert!(!cell.is_exhausted());
    }

    #[test]
    fn test_cell_full_lifecycle() {
        let cell = StateCell::new();

        // Created -> Running (first step)
        cell.start();
        assert!(cell.is_running());

        // Running -> Suspended (yield)
        cell.suspend();
        assert_eq!(cell.state(), GenState::Suspended);
        assert!(cell.is_resumable());

        // Suspended -> Running -> Exhausted (body returns)
        cell.start();
        cell.exhaust();
        assert!(cell.is_exhausted());
        assert!(!cell.is_resumable());
    }

    #[test]
    fn test_cell_exhaust_from_created() {
        let cell = StateCell::new();
        cell.exhaust();
        assert!(cell.is_exhausted());
    }

    #[test]
    fn test_cell_exhaust_from_suspended() {
        let cell = StateCell::with_state(GenState::Suspended);
        cell.exhaust();
        assert!(cell.is_exhausted());
    }

    #[test]
    fn test_cell_clone_snapshots_state() {
        let cell = StateCell::with_state(GenState::Suspended);
        let copy = cell.clone();
        cell.exhaust();
        assert_eq!(copy.state(), GenState::Suspended);
        assert_eq!(cell.state(), GenState::Exhausted);
    }

    #[test]
    fn test_cell_debug() {
        let cell = StateCell::with_state(GenState::Running);
        let debug = format!("{:?}", cell);
        assert!(debug.contains("Running"));
    }
}
