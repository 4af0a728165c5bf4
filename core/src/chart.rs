//! Chart data — the balance-vs-deposits series handed to a renderer.
//!
//! Rendering itself happens outside this crate. This module only decides
//! what goes on the axes.

use crate::{
    engine::Projection,
    error::{ProjectionError, ProjectionResult},
    types::Amount,
};
use serde::{Deserialize, Serialize};

/// Number of suggested y ticks.
pub const Y_TICK_COUNT: usize = 8;
/// Below this many points every year gets a dashed guide line.
pub const GUIDE_POINT_LIMIT: usize = 15;
/// Below this many points every year gets an explicit x tick.
pub const X_TICK_POINT_LIMIT: usize = 24;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub years:            Vec<f64>,
    pub balance_history:  Vec<Amount>,
    pub deposit_history:  Vec<Amount>,
    /// Empty when any value is negative; the renderer picks its own ticks.
    pub y_ticks:          Vec<Amount>,
    pub show_guides:      bool,
    pub show_all_x_ticks: bool,
}

impl ChartSeries {
    pub fn from_projection(projection: &Projection) -> ProjectionResult<Self> {
        Self::build(
            projection.total_years(),
            projection.snapshots.balance_history(),
            projection.snapshots.deposit_history(),
        )
    }

    /// Build from raw histories. Both must hold `ceil(total_years) + 1` points.
    pub fn build(
        total_years: f64,
        balance_history: Vec<Amount>,
        deposit_history: Vec<Amount>,
    ) -> ProjectionResult<Self> {
        let expected = total_years.ceil() as usize + 1;
        for actual in [balance_history.len(), deposit_history.len()] {
            if actual != expected {
                return Err(ProjectionError::ChartLength { expected, actual });
            }
        }

        let whole_years = total_years.floor() as usize;
        let mut years: Vec<f64> = (0..=whole_years).map(|y| y as f64).collect();
        if total_years.ceil() != total_years.floor() {
            years.push(total_years);
        }

        let all_non_negative = balance_history
            .iter()
            .chain(deposit_history.iter())
            .all(|v| *v >= 0.0);
        let y_ticks = match (all_non_negative, balance_history.first(), balance_history.last()) {
            (true, Some(first), Some(last)) => lerped_values(*first, *last, Y_TICK_COUNT),
            _ => Vec::new(),
        };

        Ok(Self {
            show_guides: years.len() < GUIDE_POINT_LIMIT,
            show_all_x_ticks: years.len() < X_TICK_POINT_LIMIT,
            years,
            balance_history,
            deposit_history,
            y_ticks,
        })
    }

    pub fn to_json(&self) -> ProjectionResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the series as pretty JSON for an external renderer.
    pub fn write_json(&self, path: &str) -> ProjectionResult<()> {
        std::fs::write(path, self.to_json()?).map_err(|e| ProjectionError::io(path, e))
    }
}

pub fn lerp(a: f64, b: f64, r: f64) -> f64 {
    a + (b - a) * r
}

/// `count` evenly spaced values from `min` to `max`, both ends included.
pub fn lerped_values(min: f64, max: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![min],
        _ => {
            let steps = (count - 1) as f64;
            (0..count).map(|i| lerp(min, max, i as f64 / steps)).collect()
        }
    }
}
