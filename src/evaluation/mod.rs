//! Summary evaluation
//!
//! Overlap metrics that grade a candidate summary against a reference.

pub mod rouge;
