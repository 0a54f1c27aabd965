#![no_main]

use algoscope_core::{binary_search_with, bounds_fn, linear_search};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (Vec<u32>, u32)| {
    let (mut values, target) = input;
    values.sort_unstable();

    let mut windows: Vec<(isize, isize)> = Vec::new();
    let found = binary_search_with(
        &values,
        &target,
        &mut bounds_fn(|lower, upper| windows.push((lower, upper))),
    );

    // Agreement with the linear scan on sorted input.
    match found {
        Some(index) => assert_eq!(values[index], target),
        None => assert_eq!(linear_search(&values, &target), None),
    }

    // The initial window always covers the whole sequence.
    assert_eq!(windows.first(), Some(&(0, values.len() as isize - 1)));
});
