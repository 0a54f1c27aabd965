#![forbid(unsafe_code)]

//! Instrumented search and sort algorithms.
//!
//! Four classic algorithms — linear search, binary search, bubble sort,
//! quick sort — each augmented with a caller-supplied observation hook that
//! fires at defined checkpoints. The hooks exist for step-by-step animation
//! and timing: they observe indices, may block for as long as they like
//! (that pause *is* the animation frame), and can never alter an algorithm's
//! decisions or results. Running with [`Silent`] gives the plain,
//! un-instrumented algorithm.
//!
//! ```
//! use algoscope_core::{linear_search_with, observe::step_fn};
//!
//! let values = [5, 3, 8, 1];
//! let mut visited = Vec::new();
//! let found = linear_search_with(&values, &8, &mut step_fn(|index| visited.push(index)));
//! assert_eq!(found, Some(2));
//! assert_eq!(visited, [0, 1, 2]);
//! ```
//!
//! The sorts mutate their sequence in place and always produce a permutation
//! of the input; the searches never mutate at all. See
//! [`observe`] for the full hook contract.

pub mod observe;
pub mod search;
pub mod sort;

pub use observe::{
    BoundsObserver, CompareObserver, PartitionObserver, Silent, StepObserver, bounds_fn,
    compare_fn, partition_fn, step_fn,
};
pub use search::{binary_search, binary_search_with, linear_search, linear_search_with};
pub use sort::{bubble_sort, bubble_sort_with, quick_sort, quick_sort_range_with, quick_sort_with};
