//!
//! Utility functions.
//!

pub mod btreemap;
pub mod statistics;
