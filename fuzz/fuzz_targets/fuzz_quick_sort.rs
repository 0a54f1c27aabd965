#![no_main]

use algoscope_core::{partition_fn, quick_sort_with};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|values: Vec<u32>| {
    let mut expected = values.clone();
    expected.sort_unstable();

    let mut sorted = values;
    let mut last_event: Option<(usize, bool)> = None;
    quick_sort_with(
        &mut sorted,
        &mut partition_fn(|index, is_sorted| last_event = Some((index, is_sorted))),
    );

    // Sorted permutation of the input, no matter what came in.
    assert_eq!(sorted, expected);

    // Every run closes by marking its outermost pivot (or the lone base
    // case) as sorted.
    if let Some((_, is_sorted)) = last_event {
        assert!(is_sorted);
    }
});
