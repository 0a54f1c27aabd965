#![forbid(unsafe_code)]

//! Observable bubble sort.

use crate::observe::{CompareObserver, Silent};

/// Sort `values` in place with adjacent-swap passes.
pub fn bubble_sort<T: PartialOrd>(values: &mut [T]) {
    bubble_sort_with(values, &mut Silent);
}

/// [`bubble_sort`] with a progress observer.
///
/// The observer fires with index `i` before each comparison of `values[i]`
/// and `values[i + 1]`, and again with the same `i` right after a swap.
/// Swaps only happen on strict `>`, so equal neighbors stay put. After pass
/// `j`, the last `j` elements are in their final positions and are no longer
/// visited.
pub fn bubble_sort_with<T, O>(values: &mut [T], observer: &mut O)
where
    T: PartialOrd,
    O: CompareObserver,
{
    let len = values.len();
    for pass in 0..len {
        // Everything past this point already bubbled into place.
        let sorted_tail = len - pass - 1;
        for i in 0..sorted_tail {
            observer.on_compare(i);
            if values[i] > values[i + 1] {
                values.swap(i, i + 1);
                observer.on_compare(i);
            }
        }
    }
}
