//! Yearly snapshots — balance and cumulative deposits at year boundaries.
//!
//! One snapshot is taken at month 0, one at every later year boundary,
//! and one final snapshot when the run terminates. The final one may
//! fall mid-year when a target amount ends the run early.

use crate::types::{Amount, Month, Year};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct YearlySnapshot {
    pub year:            Year,
    pub month:           Month,
    pub balance:         Amount,
    pub total_deposited: Amount,
}

/// Ordered snapshot sequence for one run.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SnapshotSeries {
    snapshots: Vec<YearlySnapshot>,
}

impl SnapshotSeries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, snapshot: YearlySnapshot) {
        self.snapshots.push(snapshot);
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn as_slice(&self) -> &[YearlySnapshot] {
        &self.snapshots
    }

    pub fn last(&self) -> Option<&YearlySnapshot> {
        self.snapshots.last()
    }

    /// The snapshot before the most recent one, if any.
    pub fn previous(&self) -> Option<&YearlySnapshot> {
        self.snapshots.len().checked_sub(2).map(|i| &self.snapshots[i])
    }

    pub fn balance_history(&self) -> Vec<Amount> {
        self.snapshots.iter().map(|s| s.balance).collect()
    }

    pub fn deposit_history(&self) -> Vec<Amount> {
        self.snapshots.iter().map(|s| s.total_deposited).collect()
    }
}
