#![forbid(unsafe_code)]

//! Public facade for algoscope.
//!
//! Re-exports the instrumented algorithms from `algoscope-core` and, with
//! the default `runtime` feature, the animation driver from
//! `algoscope-runtime`. Most users just want the [`prelude`]:
//!
//! ```
//! use algoscope::prelude::*;
//!
//! let mut driver = Driver::from_sequence(vec![5, 1, 4, 2, 8], DriverConfig::default());
//! driver.quick_sort().expect("driver is idle");
//! assert_eq!(driver.sequence(), [1, 2, 4, 5, 8]);
//! ```

pub use algoscope_core::observe;
pub use algoscope_core::{
    BoundsObserver, CompareObserver, PartitionObserver, Silent, StepObserver, binary_search,
    binary_search_with, bounds_fn, bubble_sort, bubble_sort_with, compare_fn, linear_search,
    linear_search_with, partition_fn, quick_sort, quick_sort_range_with, quick_sort_with, step_fn,
};

#[cfg(feature = "runtime")]
pub use algoscope_runtime::{
    Algorithm, Driver, DriverConfig, DriverError, Pacer, RunFlag, RunGuard, SearchReport,
    SleepPacer, SortReport, Speed, VisualState, random_sequence, random_sequence_default,
};

/// One-stop imports for applications.
pub mod prelude {
    pub use algoscope_core::{
        BoundsObserver, CompareObserver, PartitionObserver, Silent, StepObserver, binary_search,
        binary_search_with, bounds_fn, bubble_sort, bubble_sort_with, compare_fn, linear_search,
        linear_search_with, partition_fn, quick_sort, quick_sort_with, step_fn,
    };

    #[cfg(feature = "runtime")]
    pub use algoscope_runtime::{
        Algorithm, Driver, DriverConfig, DriverError, SearchReport, SortReport, Speed, VisualState,
    };
}
