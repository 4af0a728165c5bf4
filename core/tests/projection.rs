//! Duration-mode projection tests.

use projection_core::{
    config::RawOptions,
    engine::{Projection, ProjectionEngine},
    event::ProjectionEvent,
};

fn run(options: RawOptions) -> Projection {
    let config = options.resolve().expect("valid config");
    ProjectionEngine::run_config(config).expect("projection run")
}

fn yearly_deposits(projection: &Projection) -> Vec<f64> {
    projection
        .events
        .iter()
        .filter_map(|e| match e {
            ProjectionEvent::YearCompleted { monthly_deposit, .. } => Some(*monthly_deposit),
            _ => None,
        })
        .collect()
}

#[test]
fn zero_rate_deposits_add_up_exactly() {
    let p = run(RawOptions {
        balance: 1_000.0,
        monthly_deposit: 250.0,
        num_years: 7,
        ..RawOptions::default()
    });

    assert_eq!(p.final_state.total_deposited, 250.0 * 7.0 * 12.0);
    assert_eq!(p.final_state.balance, 1_000.0 + p.final_state.total_deposited);
    assert_eq!(p.months(), 84);
}

#[test]
fn zero_rate_zero_deposit_keeps_balance_constant() {
    let p = run(RawOptions {
        balance: 4_321.0,
        num_years: 5,
        ..RawOptions::default()
    });

    for s in p.snapshots.as_slice() {
        assert_eq!(s.balance, 4_321.0, "balance moved at month {}", s.month);
        assert_eq!(s.total_deposited, 0.0);
    }
}

#[test]
fn growth_is_applied_before_deposit() {
    let p = run(RawOptions {
        balance: 1_000.0,
        monthly_rate: 0.01,
        monthly_deposit: 100.0,
        num_years: 1,
        ..RawOptions::default()
    });

    let mut expected = 1_000.0_f64;
    for _ in 0..12 {
        expected = expected * 1.01 + 100.0;
    }

    assert_eq!(p.final_state.total_deposited, 1_200.0);
    assert!((p.final_state.balance - expected).abs() < 1e-9);
    assert!((p.final_state.balance - 2_395.08).abs() < 0.01,
        "balance {:.4} not ≈ 2395.08", p.final_state.balance);
    assert!((p.gains() - (expected - 1_200.0)).abs() < 1e-9);
}

#[test]
fn capped_raise_never_exceeds_cap_and_never_decreases() {
    let p = run(RawOptions {
        monthly_deposit: 100.0,
        monthly_deposit_yearly_raise: 40.0,
        max_monthly_deposit: 250.0,
        num_years: 10,
        ..RawOptions::default()
    });

    let deposits = yearly_deposits(&p);
    assert_eq!(deposits.len(), 9);
    for pair in deposits.windows(2) {
        assert!(pair[1] >= pair[0], "deposit decreased: {pair:?}");
    }
    assert!(deposits.iter().all(|d| *d <= 250.0));
    assert_eq!(*deposits.last().unwrap(), 250.0);
}

#[test]
fn uncapped_raise_grows_by_raise_every_year() {
    let p = run(RawOptions {
        monthly_deposit: 100.0,
        monthly_deposit_yearly_raise: 50.0,
        num_years: 6,
        ..RawOptions::default()
    });

    let deposits = yearly_deposits(&p);
    assert_eq!(deposits, vec![150.0, 200.0, 250.0, 300.0, 350.0]);
    assert_eq!(p.final_state.monthly_deposit, 350.0);
}

#[test]
fn raise_applies_at_start_of_year() {
    let p = run(RawOptions {
        monthly_deposit: 100.0,
        monthly_deposit_yearly_raise: 50.0,
        num_years: 2,
        ..RawOptions::default()
    });

    // Year one at 100/month, year two at 150/month.
    assert_eq!(p.final_state.total_deposited, 12.0 * 100.0 + 12.0 * 150.0);
}

#[test]
fn snapshot_count_is_years_plus_one() {
    for years in [1, 2, 5, 40] {
        let p = run(RawOptions {
            monthly_deposit: 10.0,
            num_years: years,
            ..RawOptions::default()
        });
        assert_eq!(p.snapshots.len(), years as usize + 1);
        assert_eq!(p.total_years(), years as f64);
    }
}

#[test]
fn snapshots_are_taken_before_the_boundary_month() {
    let p = run(RawOptions {
        balance: 100.0,
        monthly_deposit: 10.0,
        num_years: 2,
        ..RawOptions::default()
    });

    let s = p.snapshots.as_slice();
    assert_eq!(s[0].balance, 100.0);
    assert_eq!(s[0].total_deposited, 0.0);
    assert_eq!(s[1].month, 12);
    assert_eq!(s[1].total_deposited, 120.0);
    assert_eq!(s[2].month, 24);
    assert_eq!(s[2].total_deposited, 240.0);
}

#[test]
fn dividend_estimate_uses_previous_year_balance() {
    let p = run(RawOptions {
        balance: 1_000.0,
        monthly_deposit: 100.0,
        yearly_assumed_dividend_percentage: 0.04,
        num_years: 3,
        ..RawOptions::default()
    });

    let dividends: Vec<f64> = p
        .events
        .iter()
        .filter_map(|e| match e {
            ProjectionEvent::YearCompleted { dividend_estimate, .. } => Some(*dividend_estimate),
            _ => None,
        })
        .collect();

    // Year 1: no previous year balance. Year 2: balance at year 1 (2200).
    assert_eq!(dividends.len(), 2);
    assert!((dividends[0] - 0.04 * 750.0).abs() < 1e-9);
    assert!((dividends[1] - 0.04 * (2_200.0 + 750.0)).abs() < 1e-9);
    assert_eq!(p.final_state.balance, 1_000.0 + 3_600.0, "dividends must not touch the balance");
}

#[test]
fn summary_lines_match_console_format() {
    let p = run(RawOptions {
        balance: 1_000.0,
        monthly_deposit: 100.0,
        num_years: 2,
        ..RawOptions::default()
    });

    let lines = p.summary_lines();
    assert_eq!(lines.len(), 3);
    assert_eq!(
        lines[0],
        "after year 1   | total_deposited: 1,200.00 | balance: 2,200.00 | monthly_deposit: 100.00 | dividends: 0.00"
    );
    assert_eq!(
        lines[1],
        "after year 2   | total_deposited: 2,400.00 | balance: 3,400.00 | monthly_deposit: 100.00"
    );
    assert_eq!(lines[2], "balance: 3,400.00, total_deposited: 2,400.00, gains: 1,000.00");
}
