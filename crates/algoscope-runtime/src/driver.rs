#![forbid(unsafe_code)]

//! The animation driver.
//!
//! A [`Driver`] owns one sequence, the [`VisualState`] a front end renders
//! from, and the run-in-progress token. Each run method adapts the matching
//! core algorithm's observer hook into a visual-state mutator plus an
//! optional paced pause, timestamps the whole run, and reports the outcome.
//!
//! # Invariants
//!
//! 1. **One run at a time.** Every run (and every sequence mutation) takes
//!    the [`RunFlag`] token first; overlapping requests get
//!    [`DriverError::RunInProgress`] and leave the driver untouched.
//! 2. **The core stays pure.** Algorithms only ever receive the sequence and
//!    an observer; all visual-state bookkeeping lives in the driver's
//!    adapter closures.
//! 3. **Timing brackets the algorithm.** Reports measure from just before
//!    the algorithm call to just after it, so a `Speed(0)` run measures the
//!    raw algorithm; paced runs include their pauses by design.
//! 4. **Failure releases the token.** The guard is RAII; a panicking
//!    observer or pacer unwinds through the run and still frees the flag.

use std::ops::RangeInclusive;
use std::time::Duration;

use algoscope_core::{
    binary_search_with, bounds_fn, bubble_sort_with, compare_fn, linear_search_with, partition_fn,
    quick_sort_with, step_fn,
};
use thiserror::Error;
use tracing::{debug, info};
use web_time::Instant;

use crate::guard::RunFlag;
use crate::pace::{Algorithm, Pacer, SleepPacer, Speed};
use crate::sequence;
use crate::state::VisualState;

/// Errors surfaced by driver operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DriverError {
    /// A run or sequence mutation was requested while a run was active.
    #[error("a run is already in progress")]
    RunInProgress,
}

/// Settings for a [`Driver`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverConfig {
    /// Base inter-step delay. `Speed(0)` runs without pauses.
    pub speed: Speed,
    /// Length used by [`Driver::regenerate`].
    pub sequence_len: usize,
    /// Value range (inclusive) used by [`Driver::regenerate`].
    pub value_range: RangeInclusive<u32>,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            speed: Speed(0),
            sequence_len: sequence::DEFAULT_LEN,
            value_range: sequence::DEFAULT_RANGE,
        }
    }
}

/// Outcome of an animated search run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchReport {
    /// Index of the match, if any.
    pub found: Option<usize>,
    /// Wall-clock duration of the run, pauses included.
    pub elapsed: Duration,
}

/// Outcome of an animated sort run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortReport {
    /// Wall-clock duration of the run, pauses included.
    pub elapsed: Duration,
}

/// Drives animated runs of the instrumented algorithms over one sequence.
#[derive(Debug)]
pub struct Driver<P = SleepPacer> {
    sequence: Vec<u32>,
    state: VisualState,
    config: DriverConfig,
    flag: RunFlag,
    pacer: P,
}

impl Driver {
    /// Driver with a freshly generated random sequence and the default
    /// (thread-sleeping) pacer.
    #[must_use]
    pub fn new(config: DriverConfig) -> Self {
        let sequence = sequence::random_sequence(config.sequence_len, config.value_range.clone());
        Self::from_sequence(sequence, config)
    }

    /// Driver over a caller-supplied sequence.
    #[must_use]
    pub fn from_sequence(sequence: Vec<u32>, config: DriverConfig) -> Self {
        Self::with_pacer(sequence, config, SleepPacer)
    }
}

impl Default for Driver {
    fn default() -> Self {
        Self::new(DriverConfig::default())
    }
}

impl<P: Pacer> Driver<P> {
    /// Driver with an explicit pacing strategy (tests use a counting pacer).
    #[must_use]
    pub fn with_pacer(sequence: Vec<u32>, config: DriverConfig, pacer: P) -> Self {
        Self {
            sequence,
            state: VisualState::new(),
            config,
            flag: RunFlag::new(),
            pacer,
        }
    }

    #[must_use]
    pub fn sequence(&self) -> &[u32] {
        &self.sequence
    }

    #[must_use]
    pub fn state(&self) -> &VisualState {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    /// A clone of the run flag, for front ends that disable controls while a
    /// run is active.
    #[must_use]
    pub fn run_flag(&self) -> RunFlag {
        self.flag.clone()
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.flag.is_active()
    }

    pub fn set_speed(&mut self, speed: Speed) {
        self.config.speed = speed;
    }

    /// Replace the sequence. Rejected while a run is active.
    pub fn set_sequence(&mut self, sequence: Vec<u32>) -> Result<(), DriverError> {
        let _guard = self.flag.try_acquire().ok_or(DriverError::RunInProgress)?;
        self.sequence = sequence;
        self.state.clear();
        Ok(())
    }

    /// Generate a fresh random sequence per the config. Rejected while a run
    /// is active.
    pub fn regenerate(&mut self) -> Result<(), DriverError> {
        let _guard = self.flag.try_acquire().ok_or(DriverError::RunInProgress)?;
        self.sequence =
            sequence::random_sequence(self.config.sequence_len, self.config.value_range.clone());
        self.state.clear();
        debug!(len = self.sequence.len(), "sequence regenerated");
        Ok(())
    }

    /// Sort the sequence outside of any animation, establishing the
    /// precondition [`Self::binary_search`] needs. Rejected while a run is
    /// active.
    pub fn sort_sequence(&mut self) -> Result<(), DriverError> {
        let _guard = self.flag.try_acquire().ok_or(DriverError::RunInProgress)?;
        self.sequence.sort_unstable();
        self.state.clear();
        Ok(())
    }

    /// Animated linear search.
    ///
    /// Every visited index joins the highlight trail; afterwards only the
    /// match (if any) stays highlighted.
    pub fn linear_search(&mut self, target: u32) -> Result<SearchReport, DriverError> {
        let _guard = self.flag.try_acquire().ok_or(DriverError::RunInProgress)?;
        let algorithm = Algorithm::LinearSearch;
        let delay = self.config.speed.delay_for(algorithm);

        self.state.highlighted.clear();
        self.state.found = false;
        debug!(%algorithm, len = self.sequence.len(), query = target, "run started");

        let Self {
            sequence,
            state,
            pacer,
            ..
        } = self;
        let started = Instant::now();
        let found = linear_search_with(
            sequence,
            &target,
            &mut step_fn(|index| {
                state.highlighted.push(index);
                if let Some(delay) = delay {
                    pacer.pause(delay);
                }
            }),
        );
        let elapsed = started.elapsed();

        match found {
            Some(index) => {
                state.found = true;
                state.highlight_only(index);
            }
            None => state.highlighted.clear(),
        }

        info!(%algorithm, ?found, elapsed_us = elapsed.as_micros() as u64, "run finished");
        Ok(SearchReport { found, elapsed })
    }

    /// Animated binary search.
    ///
    /// The sequence must already be sorted ascending (see
    /// [`Self::sort_sequence`]); on an unsorted sequence the result is
    /// unspecified. The active bound window is highlighted at every step.
    pub fn binary_search(&mut self, target: u32) -> Result<SearchReport, DriverError> {
        let _guard = self.flag.try_acquire().ok_or(DriverError::RunInProgress)?;
        let algorithm = Algorithm::BinarySearch;
        let delay = self.config.speed.delay_for(algorithm);

        self.state.highlighted.clear();
        self.state.found = false;
        debug!(%algorithm, len = self.sequence.len(), query = target, "run started");

        let Self {
            sequence,
            state,
            pacer,
            ..
        } = self;
        let started = Instant::now();
        let found = binary_search_with(
            sequence,
            &target,
            &mut bounds_fn(|lower, upper| {
                state.highlight_window(lower, upper);
                if let Some(delay) = delay {
                    pacer.pause(delay);
                }
            }),
        );
        let elapsed = started.elapsed();

        if found.is_some() {
            // The final (mid, mid) emission already narrowed the highlight
            // to the match.
            state.found = true;
        } else {
            state.highlighted.clear();
        }

        info!(%algorithm, ?found, elapsed_us = elapsed.as_micros() as u64, "run finished");
        Ok(SearchReport { found, elapsed })
    }

    /// Animated bubble sort. The comparison cursor is highlighted while the
    /// run is active and cleared at the end.
    pub fn bubble_sort(&mut self) -> Result<SortReport, DriverError> {
        let _guard = self.flag.try_acquire().ok_or(DriverError::RunInProgress)?;
        let algorithm = Algorithm::BubbleSort;
        let delay = self.config.speed.delay_for(algorithm);

        self.state.found = false;
        debug!(%algorithm, len = self.sequence.len(), "run started");

        let Self {
            sequence,
            state,
            pacer,
            ..
        } = self;
        let started = Instant::now();
        bubble_sort_with(
            sequence,
            &mut compare_fn(|index| {
                state.highlight_only(index);
                if let Some(delay) = delay {
                    pacer.pause(delay);
                }
            }),
        );
        let elapsed = started.elapsed();

        state.highlighted.clear();
        info!(%algorithm, elapsed_us = elapsed.as_micros() as u64, "run finished");
        Ok(SortReport { elapsed })
    }

    /// Animated quick sort. Pivot indices are highlighted while unsettled
    /// and dimmed once final; both sets are cleared when the run ends.
    pub fn quick_sort(&mut self) -> Result<SortReport, DriverError> {
        let _guard = self.flag.try_acquire().ok_or(DriverError::RunInProgress)?;
        let algorithm = Algorithm::QuickSort;
        let delay = self.config.speed.delay_for(algorithm);

        // Drop leftovers from a preceding search run.
        self.state.dimmed.clear();
        self.state.found = false;
        debug!(%algorithm, len = self.sequence.len(), "run started");

        let Self {
            sequence,
            state,
            pacer,
            ..
        } = self;
        let started = Instant::now();
        quick_sort_with(
            sequence,
            &mut partition_fn(|index, is_sorted| {
                if is_sorted {
                    state.dimmed.push(index);
                } else {
                    state.highlight_only(index);
                }
                if let Some(delay) = delay {
                    pacer.pause(delay);
                }
            }),
        );
        let elapsed = started.elapsed();

        state.highlighted.clear();
        state.dimmed.clear();
        info!(%algorithm, elapsed_us = elapsed.as_micros() as u64, "run finished");
        Ok(SortReport { elapsed })
    }
}
