#![forbid(unsafe_code)]

//! Observable linear search.

use crate::observe::{Silent, StepObserver};

/// Find the first index holding `target` by scanning front to back.
///
/// Returns `None` when no element matches.
pub fn linear_search<T: PartialEq>(values: &[T], target: &T) -> Option<usize> {
    linear_search_with(values, target, &mut Silent)
}

/// [`linear_search`] with a progress observer.
///
/// The observer sees every visited index in order, 0 upward, *before* that
/// index is tested; on a miss it is invoked exactly `values.len()` times.
/// The sequence is never mutated.
pub fn linear_search_with<T, O>(values: &[T], target: &T, observer: &mut O) -> Option<usize>
where
    T: PartialEq,
    O: StepObserver,
{
    for (index, value) in values.iter().enumerate() {
        observer.on_step(index);
        if value == target {
            return Some(index);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observe::recording::{ProbeEvent, Recording};
    use crate::observe::step_fn;

    #[test]
    fn finds_first_match() {
        assert_eq!(linear_search(&[5, 3, 8, 1], &8), Some(2));
        assert_eq!(linear_search(&[5, 3, 8, 8], &8), Some(2));
    }

    #[test]
    fn miss_returns_none() {
        assert_eq!(linear_search(&[5, 3, 8, 1], &7), None);
        assert_eq!(linear_search::<u32>(&[], &7), None);
    }

    #[test]
    fn visits_indices_in_order_until_match() {
        let mut rec = Recording::new();
        let found = linear_search_with(&[5, 3, 8, 1], &8, &mut rec);
        assert_eq!(found, Some(2));
        assert_eq!(
            rec.events,
            [ProbeEvent::Step(0), ProbeEvent::Step(1), ProbeEvent::Step(2)]
        );
    }

    #[test]
    fn miss_visits_every_index_once() {
        let values = [4, 9, 16, 25, 36];
        let mut seen = Vec::new();
        let found = linear_search_with(&values, &5, &mut step_fn(|index| seen.push(index)));
        assert_eq!(found, None);
        assert_eq!(seen, [0, 1, 2, 3, 4]);
    }

    #[test]
    fn empty_sequence_emits_nothing() {
        let mut rec = Recording::new();
        assert_eq!(linear_search_with::<u32, _>(&[], &1, &mut rec), None);
        assert!(rec.events.is_empty());
    }
}
