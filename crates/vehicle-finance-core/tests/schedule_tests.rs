use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use vehicle_finance_core::loan::dates::{add_calendar_months, loan_end_date};
use vehicle_finance_core::loan::quote::{quote_loan, LoanQuoteInput, LoanTerm};
use vehicle_finance_core::loan::schedule::{build_schedule, ScheduleInput};

// ===========================================================================
// Calendar and amortization schedule tests
// ===========================================================================

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn standard_schedule() -> ScheduleInput {
    ScheduleInput {
        quote: LoanQuoteInput {
            vehicle_price: dec!(15000),
            down_payment_percent: dec!(20),
            annual_interest_rate_percent: dec!(10),
            term: LoanTerm::Months12,
            annual_insurance_cost: None,
        },
        start_date: date(2024, 6, 1),
    }
}

// ---------------------------------------------------------------------------
// Calendar month arithmetic
// ---------------------------------------------------------------------------

#[test]
fn test_leap_year_clamp() {
    assert_eq!(
        add_calendar_months(date(2024, 1, 31), 1).unwrap(),
        date(2024, 2, 29)
    );
}

#[test]
fn test_non_leap_year_clamp() {
    assert_eq!(
        add_calendar_months(date(2023, 1, 31), 1).unwrap(),
        date(2023, 2, 28)
    );
}

#[test]
fn test_end_dates_for_every_term() {
    for term in LoanTerm::ALL {
        let end = loan_end_date(date(2024, 3, 10), term.as_months()).unwrap();
        let years = term.as_months() / 12;
        assert_eq!(end, date(2024 + years as i32, 3, 10));
    }
}

// ---------------------------------------------------------------------------
// Amortization schedule
// ---------------------------------------------------------------------------

#[test]
fn test_principal_rows_sum_to_financed_amount() {
    let out = build_schedule(&standard_schedule()).unwrap().result;
    let principal: Decimal = out.rows.iter().map(|r| r.principal).sum();
    assert_eq!(principal, dec!(12000.00));
}

#[test]
fn test_payments_split_into_interest_and_principal() {
    let out = build_schedule(&standard_schedule()).unwrap().result;
    for row in &out.rows {
        assert_eq!(row.payment, row.principal + row.interest + row.insurance);
    }
}

#[test]
fn test_balance_is_monotonically_declining() {
    let out = build_schedule(&standard_schedule()).unwrap().result;
    let mut previous = dec!(12000.00);
    for row in &out.rows {
        assert!(row.remaining_balance < previous);
        previous = row.remaining_balance;
    }
    assert_eq!(previous, dec!(0));
}

#[test]
fn test_totals_are_consistent_with_rows() {
    let out = build_schedule(&standard_schedule()).unwrap().result;
    let interest: Decimal = out.rows.iter().map(|r| r.interest).sum();
    let payments: Decimal = out.rows.iter().map(|r| r.payment).sum();
    assert_eq!(out.total_interest, interest);
    assert_eq!(out.total_paid, dec!(3000.00) + payments);
}

#[test]
fn test_schedule_total_stays_within_cents_of_the_quoted_total() {
    // The quote is closed-form and full precision; the schedule settles
    // each payment to cents and lets the final row absorb the residual.
    // The two totals agree to within the accumulated cent adjustments.
    let input = standard_schedule();
    let quoted = quote_loan(&input.quote).unwrap().result;
    let scheduled = build_schedule(&input).unwrap().result;
    assert!(
        (scheduled.total_paid - quoted.total_paid).abs() < dec!(1),
        "quote total {} vs schedule total {}",
        quoted.total_paid,
        scheduled.total_paid
    );
}

#[test]
fn test_insured_schedule_carries_the_premium() {
    let mut input = standard_schedule();
    input.quote.annual_insurance_cost = Some(dec!(600));
    let out = build_schedule(&input).unwrap().result;
    for row in &out.rows {
        assert_eq!(row.insurance, dec!(50.00));
    }
    assert_eq!(out.total_insurance, dec!(600.00));
}

#[test]
fn test_schedule_on_a_month_end_start() {
    let mut input = standard_schedule();
    input.start_date = date(2023, 12, 31);
    let out = build_schedule(&input).unwrap().result;
    assert_eq!(out.rows[1].due_date, date(2024, 2, 29));
    assert_eq!(out.end_date, date(2024, 12, 31));
}

#[test]
fn test_fully_paid_vehicle_yields_zero_schedule() {
    let mut input = standard_schedule();
    input.quote.down_payment_percent = dec!(100);
    let out = build_schedule(&input).unwrap().result;
    assert_eq!(out.rows.len(), 12);
    for row in &out.rows {
        assert_eq!(row.payment, dec!(0.00));
    }
}
