//! End-to-end integration tests for the Strand runtime.
//!
//! These tests exercise the full construct-step-drive pipeline the way a
//! call site would: generator factories feeding the iteration dispatcher,
//! failure propagation through a loop, and abandonment cleanup.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use strand_runtime::{
    counting, counting_from, counting_to, for_each, Generator, IterSource, Step, StrandError,
    Yielder,
};

/// Helper to collect every value a generator produces.
fn drain<T: Send + 'static>(mut gen: Generator<T>) -> Vec<T> {
    let mut values = Vec::new();
    while let Ok(Step::Yielded(v)) = gen.step() {
        values.push(v);
    }
    values
}

// =============================================================================
// Counting Scenarios
// =============================================================================

#[test]
fn test_counting_prints_2_5_8() {
    // The canonical loop: for i in counting(2, 10, 3) { print(i) }.
    let mut printed = Vec::new();
    let out = for_each(IterSource::from(counting(2, 10, 3)), |i| printed.push(i))
        .expect("counting loop should not fail");
    assert_eq!(printed, vec![2, 5, 8]);
    assert!(out.is_drained());
}

#[test]
fn test_counting_full_and_empty_ranges() {
    assert_eq!(drain(counting(0, 5, 1)), vec![0, 1, 2, 3, 4]);
    assert_eq!(drain(counting(0, 0, 1)), Vec::<i64>::new());
    assert_eq!(drain(counting_to(4)), vec![0, 1, 2, 3]);
    assert_eq!(drain(counting_from(2, 5)), vec![2, 3, 4]);
}

#[test]
fn test_partial_consumption_then_resume() {
    // k steps observe 0..k; the (k+1)-th step yields k, not k+1.
    let mut gen = counting(0, 10, 1);
    for expected in 0..4 {
        assert_eq!(gen.step(), Ok(Step::Yielded(expected)));
    }
    assert_eq!(gen.step(), Ok(Step::Yielded(4)));
}

// =============================================================================
// Completion Semantics
// =============================================================================

#[test]
fn test_exhausted_generator_stays_done() {
    let mut gen = counting(0, 2, 1);
    assert_eq!(drain_ref(&mut gen), vec![0, 1]);
    for _ in 0..8 {
        assert_eq!(gen.step(), Ok(Step::Done));
    }
}

fn drain_ref(gen: &mut Generator<i64>) -> Vec<i64> {
    let mut values = Vec::new();
    while let Ok(Step::Yielded(v)) = gen.step() {
        values.push(v);
    }
    values
}

#[test]
fn test_interleaved_generators_are_independent() {
    let mut a = counting(0, 3, 1);
    let mut b = counting(10, 13, 1);

    assert_eq!(a.step(), Ok(Step::Yielded(0)));
    assert_eq!(b.step(), Ok(Step::Yielded(10)));
    assert_eq!(a.step(), Ok(Step::Yielded(1)));
    assert_eq!(b.step(), Ok(Step::Yielded(11)));
    assert_eq!(a.step(), Ok(Step::Yielded(2)));
    assert_eq!(a.step(), Ok(Step::Done));
    assert_eq!(b.step(), Ok(Step::Yielded(12)));
}

// =============================================================================
// Failure Propagation
// =============================================================================

#[test]
fn test_failure_on_mth_step_reaches_loop_caller() {
    let gen = Generator::new(|y: Yielder<i64>| {
        y.yield_with(1);
        y.yield_with(2);
        Err(StrandError::body_failure("wire tripped"))
    });

    let mut seen = Vec::new();
    let result = for_each(IterSource::from(gen), |v| seen.push(v));
    assert_eq!(seen, vec![1, 2]);
    let err = result.expect_err("failure should propagate out of the loop");
    assert!(err.is_body_failure());
}

#[test]
fn test_failed_generator_reports_done_afterwards() {
    let mut gen = Generator::new(|y: Yielder<i64>| {
        y.yield_with(7);
        Err(StrandError::body_failure("late"))
    });

    assert_eq!(gen.step(), Ok(Step::Yielded(7)));
    assert!(gen.step().is_err());
    assert_eq!(gen.step(), Ok(Step::Done));
    assert_eq!(gen.step(), Ok(Step::Done));
}

// =============================================================================
// Abandonment
// =============================================================================

struct DropFlag(Arc<AtomicBool>);

impl Drop for DropFlag {
    fn drop(&mut self) {
        self.0.store(true, Ordering::SeqCst);
    }
}

#[test]
fn test_abandoning_unbounded_generator_releases_its_thread() {
    let released = Arc::new(AtomicBool::new(false));
    let guard = DropFlag(released.clone());

    let mut endless = Generator::new(move |y| {
        let _guard = guard;
        let mut i = 0i64;
        loop {
            y.yield_with(i);
            i += 1;
        }
    });

    assert_eq!(endless.step(), Ok(Step::Yielded(0)));
    assert_eq!(endless.step(), Ok(Step::Yielded(1)));
    drop(endless);
    // Drop joins the body thread; the captured guard must have run.
    assert!(released.load(Ordering::SeqCst));
}

// =============================================================================
// Dispatcher Modes
// =============================================================================

#[test]
fn test_sequence_mode_returns_mapped_results() {
    let out = for_each(IterSource::from(vec![1i64, 2, 3]), |v| v * v)
        .expect("sequence mode should not fail");
    assert_eq!(out.into_mapped(), Some(vec![1, 4, 9]));
}

#[test]
fn test_generator_mode_discards_body_results() {
    let out = for_each(IterSource::from(counting_to(3)), |v| v * 100)
        .expect("generator mode should not fail");
    assert!(out.into_mapped().is_none());
}

#[test]
fn test_nested_loops_compose() {
    // An outer generator loop driving inner sequence maps.
    let mut table = Vec::new();
    for_each(IterSource::from(counting(1, 4, 1)), |row| {
        let mapped = for_each(IterSource::from(vec![10i64, 20]), |col| row * col)
            .expect("inner sequence mode should not fail")
            .into_mapped()
            .expect("sequence mode returns mapped results");
        table.push(mapped);
    })
    .expect("outer generator mode should not fail");

    assert_eq!(table, vec![vec![10, 20], vec![20, 40], vec![30, 60]]);
}

// =============================================================================
// Generator Bodies Beyond Counting
// =============================================================================

#[test]
fn test_stateful_body_keeps_locals_across_steps() {
    let mut fib = Generator::new(|y| {
        let (mut a, mut b) = (0i64, 1i64);
        for _ in 0..8 {
            y.yield_with(a);
            let next = a + b;
            a = b;
            b = next;
        }
        Ok(())
    });

    assert_eq!(drain_ref(&mut fib), vec![0, 1, 1, 2, 3, 5, 8, 13]);
}

#[test]
fn test_generator_of_owned_values() {
    let mut names = Generator::new(|y| {
        for name in ["ada", "grace", "edsger"] {
            y.yield_with(name.to_string());
        }
        Ok(())
    });

    let collected: Vec<String> = names.iter_mut().collect();
    assert_eq!(collected, vec!["ada", "grace", "edsger"]);
}
