//! Shared primitive types used across the entire projection.

/// A simulated month. Month 0 is the starting point, before any growth.
pub type Month = u64;

/// A whole year index. Year 0 is the starting snapshot.
pub type Year = u64;

/// A currency amount. Arithmetic is plain floating point.
pub type Amount = f64;

/// Months per simulated year.
pub const MONTHS_PER_YEAR: Month = 12;
