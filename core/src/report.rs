//! Yearly reporting — dividend estimate and console summary lines.

use crate::{
    event::ProjectionEvent,
    types::{Amount, MONTHS_PER_YEAR},
};

/// Stand-in for the deposits made during a year, in months of deposit.
pub const DIVIDEND_DEPOSIT_MONTHS: f64 = 7.5;

/// Heuristic reinvested-dividend estimate for one year.
///
/// `previous_balance` is the balance at the prior year boundary, or
/// `None` during the first year, in which case it counts as 0.
pub fn dividend_estimate(
    yearly_dividend_rate: f64,
    previous_balance: Option<Amount>,
    monthly_deposit: Amount,
) -> Amount {
    yearly_dividend_rate
        * (previous_balance.unwrap_or(0.0) + DIVIDEND_DEPOSIT_MONTHS * monthly_deposit)
}

/// Two decimals with thousands separators: `1234567.891` → `1,234,567.89`.
pub fn format_amount(value: Amount) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    // -0.00 prints as 0.00
    let sign = if value < 0.0 && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
        "-"
    } else {
        ""
    };
    format!("{sign}{grouped}.{frac_part}")
}

/// Whole years print bare; partial years keep two decimals.
fn format_elapsed(months: u64, elapsed_years: f64) -> String {
    if months.is_multiple_of(MONTHS_PER_YEAR) {
        (months / MONTHS_PER_YEAR).to_string()
    } else {
        format!("{elapsed_years:.2}")
    }
}

/// Console lines for one event. `RunInitialized` renders nothing.
pub fn render_event(event: &ProjectionEvent) -> Vec<String> {
    match event {
        ProjectionEvent::RunInitialized { .. } => vec![],
        ProjectionEvent::YearCompleted {
            year,
            total_deposited,
            balance,
            monthly_deposit,
            dividend_estimate,
        } => vec![format!(
            "after year {:<3} | total_deposited: {} | balance: {} | monthly_deposit: {} | dividends: {}",
            year,
            format_amount(*total_deposited),
            format_amount(*balance),
            format_amount(*monthly_deposit),
            format_amount(*dividend_estimate),
        )],
        ProjectionEvent::RunCompleted {
            months,
            elapsed_years,
            total_deposited,
            balance,
            monthly_deposit,
            gains,
        } => vec![
            format!(
                "after year {:<3} | total_deposited: {} | balance: {} | monthly_deposit: {}",
                format_elapsed(*months, *elapsed_years),
                format_amount(*total_deposited),
                format_amount(*balance),
                format_amount(*monthly_deposit),
            ),
            format!(
                "balance: {}, total_deposited: {}, gains: {}",
                format_amount(*balance),
                format_amount(*total_deposited),
                format_amount(*gains),
            ),
        ],
    }
}

/// All console lines for a run, in event order.
pub fn summary_lines(events: &[ProjectionEvent]) -> Vec<String> {
    events.iter().flat_map(render_event).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_amount_groups_thousands() {
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(999.999), "1,000.00");
        assert_eq!(format_amount(1234567.891), "1,234,567.89");
        assert_eq!(format_amount(-2500.5), "-2,500.50");
        assert_eq!(format_amount(-0.001), "0.00");
    }

    #[test]
    fn first_year_dividend_ignores_previous_balance() {
        assert_eq!(dividend_estimate(0.04, None, 100.0), 0.04 * 750.0);
        assert_eq!(dividend_estimate(0.04, Some(1000.0), 100.0), 0.04 * 1750.0);
    }

    #[test]
    fn partial_year_prints_two_decimals() {
        assert_eq!(format_elapsed(24, 2.0), "2");
        assert_eq!(format_elapsed(31, 31.0 / 12.0), "2.58");
    }
}
