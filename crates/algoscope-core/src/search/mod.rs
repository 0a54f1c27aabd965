#![forbid(unsafe_code)]

//! Observable lookup algorithms over in-memory sequences.

mod binary;
mod linear;

pub use binary::{binary_search, binary_search_with};
pub use linear::{linear_search, linear_search_with};
