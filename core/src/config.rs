use crate::{
    error::{ProjectionError, ProjectionResult},
    types::{Amount, MONTHS_PER_YEAR},
};
use serde::{Deserialize, Serialize};

/// Year count used when none is given. Target mode requires it untouched.
pub const DEFAULT_NUM_YEARS: i64 = 1;

/// Unresolved option values, as supplied by the command line or an
/// options file. Nothing here is validated yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawOptions {
    pub balance: Amount,
    pub monthly_rate: f64,
    pub monthly_deposit: Amount,
    pub monthly_deposit_yearly_raise: Amount,
    /// 0 means no cap.
    pub max_monthly_deposit: Amount,
    pub yearly_assumed_dividend_percentage: f64,
    pub num_years: i64,
    /// 0 means no target; the run is duration-bound.
    pub target_amount: Amount,
    pub show_plot: bool,
}

impl Default for RawOptions {
    fn default() -> Self {
        Self {
            balance: 0.0,
            monthly_rate: 0.0,
            monthly_deposit: 0.0,
            monthly_deposit_yearly_raise: 0.0,
            max_monthly_deposit: 0.0,
            yearly_assumed_dividend_percentage: 0.0,
            num_years: DEFAULT_NUM_YEARS,
            target_amount: 0.0,
            show_plot: true,
        }
    }
}

impl RawOptions {
    /// Load from a JSON options file. Missing keys keep their defaults.
    pub fn load(path: &str) -> ProjectionResult<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ProjectionError::io(path, e))?;
        let options: RawOptions = serde_json::from_str(&content)?;
        Ok(options)
    }

    /// Store a yearly rate as its monthly equivalent. Shares the field
    /// with `monthly_rate`, so whichever is set last wins.
    pub fn set_yearly_rate(&mut self, yearly_rate: f64) {
        self.monthly_rate = yearly_rate / MONTHS_PER_YEAR as f64;
    }

    /// Validate and freeze into a `ProjectionConfig`.
    pub fn resolve(&self) -> ProjectionResult<ProjectionConfig> {
        if self.num_years <= 0 {
            return Err(ProjectionError::config(
                "the number of years must be at least one",
            ));
        }
        if self.max_monthly_deposit < 0.0 {
            return Err(ProjectionError::config(
                "the maximum monthly deposit must be 0 or larger",
            ));
        }
        if self.target_amount < 0.0 {
            return Err(ProjectionError::config("the target amount must be positive"));
        }

        let mode = if self.target_amount != 0.0 {
            if self.num_years != DEFAULT_NUM_YEARS {
                return Err(ProjectionError::config(
                    "a target amount is mutually exclusive with a number of years",
                ));
            }
            TerminationMode::Target { amount: self.target_amount }
        } else {
            let years = u32::try_from(self.num_years)
                .map_err(|_| ProjectionError::config("the number of years is too large"))?;
            TerminationMode::Duration { years }
        };

        if self.monthly_rate < 0.0 {
            log::warn!("negative monthly rate {:.6}: balance will shrink", self.monthly_rate);
        }

        Ok(ProjectionConfig {
            starting_balance: self.balance,
            monthly_rate: self.monthly_rate,
            monthly_deposit: self.monthly_deposit,
            yearly_raise: self.monthly_deposit_yearly_raise,
            max_monthly_deposit: self.max_monthly_deposit,
            yearly_dividend_rate: self.yearly_assumed_dividend_percentage,
            mode,
        })
    }
}

/// How a run decides to stop.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum TerminationMode {
    Duration { years: u32 },
    Target { amount: Amount },
}

impl TerminationMode {
    pub fn label(&self) -> String {
        match self {
            Self::Duration { years } => format!("duration({years}y)"),
            Self::Target { amount }  => format!("target({amount:.2})"),
        }
    }
}

/// Resolved, immutable projection parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionConfig {
    pub starting_balance:     Amount,
    pub monthly_rate:         f64,
    pub monthly_deposit:      Amount,
    pub yearly_raise:         Amount,
    pub max_monthly_deposit:  Amount,
    /// Reporting only. Never feeds back into the balance.
    pub yearly_dividend_rate: f64,
    pub mode:                 TerminationMode,
}

impl ProjectionConfig {
    /// The deposit cap, if one is set.
    pub fn deposit_cap(&self) -> Option<Amount> {
        (self.max_monthly_deposit > 0.0).then_some(self.max_monthly_deposit)
    }

    /// Deposit for the next year given this year's deposit.
    pub fn raised_deposit(&self, current: Amount) -> Amount {
        let raised = current + self.yearly_raise;
        match self.deposit_cap() {
            Some(cap) => raised.min(cap),
            None => raised,
        }
    }
}
