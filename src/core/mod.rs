//! Pure functions over the record tables.

pub mod stats;
