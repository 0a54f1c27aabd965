#![forbid(unsafe_code)]

//! Observable quick sort.
//!
//! Recursive Lomuto partitioning with the last element of each subrange as
//! the pivot. Pivot selection is fixed — no randomization, no
//! median-of-three — which keeps the animation deterministic at the cost of
//! quadratic behavior on already-sorted input. That trade-off is a known
//! limitation, not a defect.

use crate::observe::{PartitionObserver, Silent};

/// Sort `values` in place.
pub fn quick_sort<T>(values: &mut [T])
where
    T: PartialOrd + Clone,
{
    quick_sort_with(values, &mut Silent);
}

/// [`quick_sort`] with a progress observer, covering the whole slice.
pub fn quick_sort_with<T, O>(values: &mut [T], observer: &mut O)
where
    T: PartialOrd + Clone,
    O: PartitionObserver,
{
    quick_sort_range_with(values, 0, values.len() as isize - 1, observer);
}

/// Sort the inclusive subrange `[start, end]` of `values` in place.
///
/// Bounds are signed so an empty range can be expressed as `end < start`
/// (the whole-slice entry point passes `(0, -1)` for an empty slice). `start`
/// must be non-negative and `end` below `values.len()`; ranges outside the
/// slice are a caller error and may panic.
///
/// Observer contract, per recursion level:
///
/// - a subrange with fewer than two elements emits `(start, true)` and stops;
/// - otherwise, after partitioning around the pivot's final index `p`:
///   `(p, false)`, the left subrange recursion, `(p, false)` again, the right
///   subrange recursion, and finally `(p, true)` once `p` is done for good.
///
/// The double `false` emission brackets the left-hand recursion on purpose:
/// the animation re-highlights the pivot between the two descents before
/// dimming it with the closing `true`. Every recursion frame keeps its own
/// `start`/`end`/`p`, so any amount of blocking inside child observer calls
/// leaves parent frames intact.
pub fn quick_sort_range_with<T, O>(values: &mut [T], start: isize, end: isize, observer: &mut O)
where
    T: PartialOrd + Clone,
    O: PartitionObserver,
{
    // Empty or single-element subranges are sorted by definition.
    if start >= end {
        observer.on_partition(start as usize, true);
        return;
    }

    let partition_index = partition(values, start as usize, end as usize);
    let p = partition_index as isize;

    observer.on_partition(partition_index, false);
    quick_sort_range_with(values, start, p - 1, observer);
    observer.on_partition(partition_index, false);
    quick_sort_range_with(values, p + 1, end, observer);
    observer.on_partition(partition_index, true);
}

/// One Lomuto partition pass over the inclusive `[start, end]` subrange.
///
/// The last element is the pivot. Elements strictly below it are packed to
/// the front of the subrange, the pivot is swapped into the seam, and its
/// final index is returned.
fn partition<T>(values: &mut [T], start: usize, end: usize) -> usize
where
    T: PartialOrd + Clone,
{
    // Held by value: the pivot slot itself moves during the scan's swaps.
    let pivot = values[end].clone();

    let mut left_partition_index = start;
    for i in start..end {
        if values[i] < pivot {
            values.swap(i, left_partition_index);
            left_partition_index += 1;
        }
    }

    values.swap(left_partition_index, end);
    left_partition_index
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observe::recording::{ProbeEvent::Partition, Recording};
    use proptest::prelude::*;

    #[test]
    fn sorts_in_place() {
        let mut values = [5, 1, 4, 2, 8];
        quick_sort(&mut values);
        assert_eq!(values, [1, 2, 4, 5, 8]);
    }

    #[test]
    fn sorts_an_explicit_subrange() {
        let mut values = [9, 5, 1, 4, 2, 8, 0];
        quick_sort_range_with(&mut values, 1, 5, &mut Silent);
        assert_eq!(values, [9, 1, 2, 4, 5, 8, 0]);
    }

    #[test]
    fn handles_trivial_sequences() {
        let mut empty: [u32; 0] = [];
        quick_sort(&mut empty);

        let mut single = [3];
        quick_sort(&mut single);
        assert_eq!(single, [3]);

        let mut duplicates = [2, 2, 1, 2];
        quick_sort(&mut duplicates);
        assert_eq!(duplicates, [1, 2, 2, 2]);
    }

    #[test]
    fn emits_partition_events_in_recursion_order() {
        let mut values = [5, 1, 4, 2, 8];
        let mut rec = Recording::new();
        quick_sort_with(&mut values, &mut rec);
        assert_eq!(values, [1, 2, 4, 5, 8]);
        assert_eq!(
            rec.events,
            [
                Partition(4, false),
                Partition(1, false),
                Partition(0, true),
                Partition(1, false),
                Partition(3, false),
                Partition(2, true),
                Partition(3, false),
                Partition(4, true),
                Partition(3, true),
                Partition(1, true),
                Partition(4, false),
                // Right of the outermost pivot is empty; its base case still
                // reports start = 5, one past the last real index.
                Partition(5, true),
                Partition(4, true),
            ]
        );
    }

    #[test]
    fn empty_slice_emits_single_sorted_mark() {
        let mut values: [u32; 0] = [];
        let mut rec = Recording::new();
        quick_sort_with(&mut values, &mut rec);
        assert_eq!(rec.events, [Partition(0, true)]);
    }

    proptest! {
        #[test]
        fn partition_splits_around_pivot(
            mut values in proptest::collection::vec(any::<u32>(), 2..32)
        ) {
            let end = values.len() - 1;
            let pivot = values[end];
            let p = partition(&mut values, 0, end);

            prop_assert_eq!(values[p], pivot);
            for (i, value) in values.iter().enumerate() {
                if i < p {
                    prop_assert!(*value <= pivot);
                } else if i > p {
                    prop_assert!(*value >= pivot);
                }
            }
        }
    }
}
