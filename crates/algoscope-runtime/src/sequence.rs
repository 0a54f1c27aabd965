#![forbid(unsafe_code)]

//! Random sequence generation.

use std::ops::RangeInclusive;

use rand::RngExt;

/// Default sequence length.
pub const DEFAULT_LEN: usize = 10;

/// Default value range (inclusive on both ends).
pub const DEFAULT_RANGE: RangeInclusive<u32> = 0..=100;

/// Generate `len` uniform values drawn from `range`, bounds inclusive.
#[must_use]
pub fn random_sequence(len: usize, range: RangeInclusive<u32>) -> Vec<u32> {
    let mut rng = rand::rng();
    (0..len).map(|_| rng.random_range(range.clone())).collect()
}

/// [`random_sequence`] with the default length and range.
#[must_use]
pub fn random_sequence_default() -> Vec<u32> {
    random_sequence(DEFAULT_LEN, DEFAULT_RANGE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn respects_length() {
        assert_eq!(random_sequence(0, 0..=10).len(), 0);
        assert_eq!(random_sequence(25, 0..=10).len(), 25);
        assert_eq!(random_sequence_default().len(), DEFAULT_LEN);
    }

    #[test]
    fn values_stay_in_range() {
        let values = random_sequence(200, 5..=9);
        assert!(values.iter().all(|value| (5..=9).contains(value)));
    }

    #[test]
    fn degenerate_range_is_constant() {
        assert_eq!(random_sequence(4, 7..=7), [7, 7, 7, 7]);
    }
}
