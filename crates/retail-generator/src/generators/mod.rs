//! Value-level helpers shared by the table generators.
//!
//! Each helper takes the RNG explicitly; none of them hold state.

pub mod numeric;
pub mod pattern;
pub mod timestamp;
