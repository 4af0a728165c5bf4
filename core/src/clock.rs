//! Month clock — owns the elapsed month count for one run.

use crate::types::{Month, Year, MONTHS_PER_YEAR};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MonthClock {
    pub current_month: Month,
}

impl MonthClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance one month. Returns the new month count.
    pub fn advance(&mut self) -> Month {
        self.current_month += 1;
        self.current_month
    }

    /// True at month 0, 12, 24, ...
    pub fn at_year_boundary(&self) -> bool {
        self.current_month.is_multiple_of(MONTHS_PER_YEAR)
    }

    pub fn completed_years(&self) -> Year {
        self.current_month / MONTHS_PER_YEAR
    }

    /// Elapsed time in years, fractional when the run stopped mid-year.
    pub fn elapsed_years(&self) -> f64 {
        self.current_month as f64 / MONTHS_PER_YEAR as f64
    }
}
