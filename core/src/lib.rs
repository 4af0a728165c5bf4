//! Month-by-month compound-interest savings projection.

pub mod chart;
pub mod clock;
pub mod config;
pub mod engine;
pub mod error;
pub mod event;
pub mod report;
pub mod snapshot;
pub mod types;
