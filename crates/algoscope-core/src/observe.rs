#![forbid(unsafe_code)]

//! Observation hooks for the instrumented algorithms.
//!
//! Every algorithm in this crate reports its progress through a small
//! observer trait: one trait per algorithm, each with a single method that
//! defaults to a no-op. Callers that only want the result pass [`Silent`];
//! callers that animate or measure pass their own implementation, or wrap a
//! closure with [`step_fn`], [`bounds_fn`], [`compare_fn`] or
//! [`partition_fn`].
//!
//! # Invariants
//!
//! 1. **Observers are side channels.** Nothing an observer does can change an
//!    algorithm's control flow, return value, or mutation result. The
//!    algorithms hand out indices, never mutable access to the data.
//! 2. **Emission order is step order.** Calls arrive strictly in the order
//!    the algorithm takes its steps; there is no batching or reordering.
//! 3. **Observers may block.** A call site is a legitimate pause point (the
//!    animation driver sleeps there between frames). All loop and recursion
//!    state lives in the calling frame, so progress resumes intact however
//!    long the observer takes.
//! 4. **Panics propagate.** An observer panic unwinds straight through the
//!    algorithm; nothing is caught or retried here.

// ---------------------------------------------------------------------------
// Per-algorithm observer traits
// ---------------------------------------------------------------------------

/// Observer for [`linear_search_with`](crate::search::linear_search_with).
///
/// [`on_step`](Self::on_step) fires with index `i` immediately before
/// `values[i]` is tested against the target.
pub trait StepObserver {
    fn on_step(&mut self, _index: usize) {}
}

/// Observer for [`binary_search_with`](crate::search::binary_search_with).
///
/// [`on_bounds`](Self::on_bounds) reports the active search window as an
/// inclusive `[lower, upper]` pair. Bounds are signed: the initial emission
/// on an empty sequence is `(0, -1)`, and `upper < lower` always denotes an
/// empty window.
pub trait BoundsObserver {
    fn on_bounds(&mut self, _lower: isize, _upper: isize) {}
}

/// Observer for [`bubble_sort_with`](crate::sort::bubble_sort_with).
///
/// [`on_compare`](Self::on_compare) fires with index `i` before each
/// comparison of `values[i]` and `values[i + 1]`, and fires again with the
/// same index right after a swap.
pub trait CompareObserver {
    fn on_compare(&mut self, _index: usize) {}
}

/// Observer for [`quick_sort_with`](crate::sort::quick_sort_with).
///
/// [`on_partition`](Self::on_partition) reports a partition index together
/// with whether that index has reached its final sorted position.
pub trait PartitionObserver {
    fn on_partition(&mut self, _index: usize, _is_sorted: bool) {}
}

/// The "no hook supplied" observer: implements every observer trait with the
/// default no-ops. Running an algorithm with `Silent` produces exactly the
/// same result and mutations as running it with any other observer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Silent;

impl StepObserver for Silent {}
impl BoundsObserver for Silent {}
impl CompareObserver for Silent {}
impl PartitionObserver for Silent {}

// ---------------------------------------------------------------------------
// Closure adapters
// ---------------------------------------------------------------------------

/// Adapt a `FnMut(usize)` closure into a [`StepObserver`].
pub fn step_fn<F: FnMut(usize)>(f: F) -> StepFn<F> {
    StepFn(f)
}

/// Adapt a `FnMut(isize, isize)` closure into a [`BoundsObserver`].
pub fn bounds_fn<F: FnMut(isize, isize)>(f: F) -> BoundsFn<F> {
    BoundsFn(f)
}

/// Adapt a `FnMut(usize)` closure into a [`CompareObserver`].
pub fn compare_fn<F: FnMut(usize)>(f: F) -> CompareFn<F> {
    CompareFn(f)
}

/// Adapt a `FnMut(usize, bool)` closure into a [`PartitionObserver`].
pub fn partition_fn<F: FnMut(usize, bool)>(f: F) -> PartitionFn<F> {
    PartitionFn(f)
}

/// See [`step_fn`].
#[derive(Debug, Clone)]
pub struct StepFn<F>(F);

impl<F: FnMut(usize)> StepObserver for StepFn<F> {
    fn on_step(&mut self, index: usize) {
        (self.0)(index);
    }
}

/// See [`bounds_fn`].
#[derive(Debug, Clone)]
pub struct BoundsFn<F>(F);

impl<F: FnMut(isize, isize)> BoundsObserver for BoundsFn<F> {
    fn on_bounds(&mut self, lower: isize, upper: isize) {
        (self.0)(lower, upper);
    }
}

/// See [`compare_fn`].
#[derive(Debug, Clone)]
pub struct CompareFn<F>(F);

impl<F: FnMut(usize)> CompareObserver for CompareFn<F> {
    fn on_compare(&mut self, index: usize) {
        (self.0)(index);
    }
}

/// See [`partition_fn`].
#[derive(Debug, Clone)]
pub struct PartitionFn<F>(F);

impl<F: FnMut(usize, bool)> PartitionObserver for PartitionFn<F> {
    fn on_partition(&mut self, index: usize, is_sorted: bool) {
        (self.0)(index, is_sorted);
    }
}

// ---------------------------------------------------------------------------
// Recording fixture (tests and downstream harnesses)
// ---------------------------------------------------------------------------

#[cfg(any(test, feature = "test-helpers"))]
pub mod recording {
    //! An observer that records every emission, for asserting on exact
    //! emission sequences in tests.

    /// One recorded hook emission.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub enum ProbeEvent {
        /// Linear search visited an index.
        Step(usize),
        /// Binary search narrowed to an inclusive `[lower, upper]` window.
        Bounds(isize, isize),
        /// Bubble sort is about to compare (or just swapped) at an index.
        Compare(usize),
        /// Quick sort reported a partition index and its sorted status.
        Partition(usize, bool),
    }

    /// Records every emission in order. Implements all four observer traits,
    /// so one recorder can be threaded through any algorithm.
    #[derive(Debug, Clone, Default, PartialEq, Eq)]
    pub struct Recording {
        pub events: Vec<ProbeEvent>,
    }

    impl Recording {
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        pub fn clear(&mut self) {
            self.events.clear();
        }
    }

    impl super::StepObserver for Recording {
        fn on_step(&mut self, index: usize) {
            self.events.push(ProbeEvent::Step(index));
        }
    }

    impl super::BoundsObserver for Recording {
        fn on_bounds(&mut self, lower: isize, upper: isize) {
            self.events.push(ProbeEvent::Bounds(lower, upper));
        }
    }

    impl super::CompareObserver for Recording {
        fn on_compare(&mut self, index: usize) {
            self.events.push(ProbeEvent::Compare(index));
        }
    }

    impl super::PartitionObserver for Recording {
        fn on_partition(&mut self, index: usize, is_sorted: bool) {
            self.events.push(ProbeEvent::Partition(index, is_sorted));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::recording::{ProbeEvent, Recording};
    use super::*;

    #[test]
    fn silent_is_a_no_op_everywhere() {
        let mut silent = Silent;
        silent.on_step(0);
        silent.on_bounds(0, -1);
        silent.on_compare(3);
        silent.on_partition(2, true);
    }

    #[test]
    fn closure_adapters_forward_their_arguments() {
        let mut seen = Vec::new();
        step_fn(|index| seen.push(index)).on_step(7);
        compare_fn(|index| seen.push(index)).on_compare(9);
        assert_eq!(seen, [7, 9]);

        let mut windows = Vec::new();
        bounds_fn(|lower, upper| windows.push((lower, upper))).on_bounds(0, -1);
        assert_eq!(windows, [(0, -1)]);

        let mut marks = Vec::new();
        partition_fn(|index, is_sorted| marks.push((index, is_sorted))).on_partition(4, true);
        assert_eq!(marks, [(4, true)]);
    }

    #[test]
    fn recording_keeps_emission_order() {
        let mut rec = Recording::new();
        rec.on_step(1);
        rec.on_partition(4, false);
        rec.on_partition(4, true);
        assert_eq!(
            rec.events,
            [
                ProbeEvent::Step(1),
                ProbeEvent::Partition(4, false),
                ProbeEvent::Partition(4, true),
            ]
        );
        rec.clear();
        assert!(rec.events.is_empty());
    }
}
