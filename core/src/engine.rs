//! The projection engine — the monthly savings loop.
//!
//! ORDER WITHIN ONE MONTH (fixed, never reordered):
//!   1. Year boundary (month % 12 == 0): snapshot, then raise the deposit
//!      (skipped at month 0) and report the completed year.
//!   2. Growth:  balance += balance × monthly_rate
//!   3. Deposit: balance += monthly_deposit
//!   4. Advance the clock.
//!   5. Termination check.
//!
//! RULES:
//!   - The resolved config is never mutated; everything that changes
//!     during a run lives in SimulationState.
//!   - The deposit made in a month does not earn that month's growth.
//!   - Reporting values are derived from state and never feed back into it.

use crate::{
    clock::MonthClock,
    config::{ProjectionConfig, TerminationMode},
    error::{ProjectionError, ProjectionResult},
    event::ProjectionEvent,
    report,
    snapshot::{SnapshotSeries, YearlySnapshot},
    types::{Amount, Month, MONTHS_PER_YEAR},
};
use serde::{Deserialize, Serialize};

/// Upper bound on a target-mode run (1000 years).
pub const MAX_TARGET_MONTHS: Month = 12_000;

/// Everything that changes during a run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationState {
    pub balance:         Amount,
    pub total_deposited: Amount,
    pub monthly_deposit: Amount,
    pub clock:           MonthClock,
}

impl SimulationState {
    pub fn initial(config: &ProjectionConfig) -> Self {
        Self {
            balance:         config.starting_balance,
            total_deposited: 0.0,
            monthly_deposit: config.monthly_deposit,
            clock:           MonthClock::new(),
        }
    }

    fn snapshot(&self) -> YearlySnapshot {
        YearlySnapshot {
            year:            self.clock.current_month.div_ceil(MONTHS_PER_YEAR),
            month:           self.clock.current_month,
            balance:         self.balance,
            total_deposited: self.total_deposited,
        }
    }
}

/// Output of a finished run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projection {
    pub config:      ProjectionConfig,
    pub final_state: SimulationState,
    pub snapshots:   SnapshotSeries,
    pub events:      Vec<ProjectionEvent>,
}

impl Projection {
    /// Elapsed years, fractional when a target ended the run mid-year.
    pub fn total_years(&self) -> f64 {
        self.final_state.clock.elapsed_years()
    }

    pub fn months(&self) -> Month {
        self.final_state.clock.current_month
    }

    pub fn gains(&self) -> Amount {
        self.final_state.balance - self.final_state.total_deposited
    }

    pub fn summary_lines(&self) -> Vec<String> {
        report::summary_lines(&self.events)
    }
}

pub struct ProjectionEngine {
    config:    ProjectionConfig,
    state:     SimulationState,
    snapshots: SnapshotSeries,
    events:    Vec<ProjectionEvent>,
}

impl ProjectionEngine {
    pub fn new(config: ProjectionConfig) -> Self {
        let state = SimulationState::initial(&config);
        Self {
            config,
            state,
            snapshots: SnapshotSeries::new(),
            events: Vec::new(),
        }
    }

    /// Build and run in one call.
    pub fn run_config(config: ProjectionConfig) -> ProjectionResult<Projection> {
        Self::new(config).run()
    }

    /// Run until the termination condition holds, then take the final snapshot.
    pub fn run(mut self) -> ProjectionResult<Projection> {
        self.emit(ProjectionEvent::RunInitialized {
            balance:         self.state.balance,
            monthly_deposit: self.state.monthly_deposit,
            mode:            self.config.mode.label(),
        });
        self.check_progress()?;

        loop {
            self.step()?;
            if self.is_terminated() {
                break;
            }
            if let TerminationMode::Target { amount } = self.config.mode {
                if self.state.clock.current_month >= MAX_TARGET_MONTHS {
                    return Err(self.non_convergence(amount));
                }
            }
        }

        self.snapshots.push(self.state.snapshot());
        let elapsed_years = self.state.clock.elapsed_years();
        self.emit(ProjectionEvent::RunCompleted {
            months:          self.state.clock.current_month,
            elapsed_years,
            total_deposited: self.state.total_deposited,
            balance:         self.state.balance,
            monthly_deposit: self.state.monthly_deposit,
            gains:           self.state.balance - self.state.total_deposited,
        });
        log::info!(
            "projection finished after {} months: balance={:.2} deposited={:.2}",
            self.state.clock.current_month,
            self.state.balance,
            self.state.total_deposited
        );

        Ok(Projection {
            config:      self.config,
            final_state: self.state,
            snapshots:   self.snapshots,
            events:      self.events,
        })
    }

    /// Simulate one month.
    fn step(&mut self) -> ProjectionResult<()> {
        if self.state.clock.at_year_boundary() {
            self.snapshots.push(self.state.snapshot());
            if self.state.clock.current_month != 0 {
                self.close_year();
                self.check_progress()?;
            }
        }

        self.state.balance += self.state.balance * self.config.monthly_rate;
        self.state.balance += self.state.monthly_deposit;
        self.state.total_deposited += self.state.monthly_deposit;
        self.state.clock.advance();
        Ok(())
    }

    /// Raise the deposit for the coming year and report the year just finished.
    fn close_year(&mut self) {
        self.state.monthly_deposit = self.config.raised_deposit(self.state.monthly_deposit);

        // The boundary snapshot for this year is already pushed, so the
        // previous year's balance needs two snapshots before it.
        let previous_balance = if self.snapshots.len() >= 3 {
            self.snapshots.previous().map(|s| s.balance)
        } else {
            None
        };

        let dividend_estimate = report::dividend_estimate(
            self.config.yearly_dividend_rate,
            previous_balance,
            self.state.monthly_deposit,
        );
        let year = self.state.clock.completed_years();

        log::debug!(
            "year={year} balance={:.2} deposited={:.2} deposit={:.2} dividends={:.2}",
            self.state.balance,
            self.state.total_deposited,
            self.state.monthly_deposit,
            dividend_estimate
        );

        self.emit(ProjectionEvent::YearCompleted {
            year,
            total_deposited: self.state.total_deposited,
            balance:         self.state.balance,
            monthly_deposit: self.state.monthly_deposit,
            dividend_estimate,
        });
    }

    fn emit(&mut self, event: ProjectionEvent) {
        log::trace!("month={} event={}", self.state.clock.current_month, event.type_name());
        self.events.push(event);
    }

    fn is_terminated(&self) -> bool {
        match self.config.mode {
            TerminationMode::Target { amount } => self.state.balance > amount,
            TerminationMode::Duration { years } => {
                self.state.clock.current_month >= Month::from(years) * MONTHS_PER_YEAR
            }
        }
    }

    /// Target mode only: fail when nothing can ever raise the balance.
    fn check_progress(&self) -> ProjectionResult<()> {
        let TerminationMode::Target { amount } = self.config.mode else {
            return Ok(());
        };
        let deposit = self.state.monthly_deposit;
        let can_grow = (self.config.monthly_rate > 0.0 && self.state.balance > 0.0)
            || deposit > 0.0
            || self.config.raised_deposit(deposit) > deposit;

        if can_grow || self.state.balance > amount {
            Ok(())
        } else {
            Err(self.non_convergence(amount))
        }
    }

    fn non_convergence(&self, target: Amount) -> ProjectionError {
        log::warn!(
            "target {target:.2} unreachable after {} months",
            self.state.clock.current_month
        );
        ProjectionError::NonConvergence {
            months:  self.state.clock.current_month,
            balance: self.state.balance,
            target,
        }
    }
}
