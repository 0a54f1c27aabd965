#![forbid(unsafe_code)]

//! Animation driver layer over [`algoscope-core`](algoscope_core).
//!
//! The core algorithms only know how to call an observer; this crate owns
//! everything around that call: the sequence being animated, the visual
//! state a front end paints from, the speed-slider-to-delay mapping, the
//! one-run-at-a-time token, and wall-clock reporting. Rendering itself
//! (canvas, pan/zoom, widgets) is deliberately out of scope — a front end
//! reads [`VisualState`] between frames and draws however it likes.
//!
//! ```
//! use algoscope_runtime::{Driver, DriverConfig};
//!
//! let mut driver = Driver::from_sequence(vec![5, 3, 8, 1], DriverConfig::default());
//! let report = driver.linear_search(8)?;
//! assert_eq!(report.found, Some(2));
//! assert_eq!(driver.state().highlighted, [2]);
//! # Ok::<(), algoscope_runtime::DriverError>(())
//! ```

pub mod driver;
pub mod guard;
pub mod pace;
pub mod sequence;
pub mod state;

pub use driver::{Driver, DriverConfig, DriverError, SearchReport, SortReport};
pub use guard::{RunFlag, RunGuard};
pub use pace::{Algorithm, Pacer, SleepPacer, Speed};
pub use sequence::{random_sequence, random_sequence_default};
pub use state::VisualState;
