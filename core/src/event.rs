//! Events emitted by a projection run.
//!
//! Console summary lines and the JSON report are both rendered from
//! these events. The engine never formats output itself.

use crate::types::{Amount, Month, Year};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ProjectionEvent {
    RunInitialized {
        balance:         Amount,
        monthly_deposit: Amount,
        mode:            String,
    },

    /// Emitted at every year boundary after month 0, after the deposit raise.
    YearCompleted {
        year:               Year,
        total_deposited:    Amount,
        balance:            Amount,
        monthly_deposit:    Amount,
        dividend_estimate:  Amount,
    },

    RunCompleted {
        months:          Month,
        elapsed_years:   f64,
        total_deposited: Amount,
        balance:         Amount,
        monthly_deposit: Amount,
        gains:           Amount,
    },
}

impl ProjectionEvent {
    /// Stable string name for the event variant.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::RunInitialized { .. } => "run_initialized",
            Self::YearCompleted { .. }  => "year_completed",
            Self::RunCompleted { .. }   => "run_completed",
        }
    }
}
