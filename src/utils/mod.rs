//! Utility helpers.
//!
//! - [`random`] - random alias generation

pub mod random;
