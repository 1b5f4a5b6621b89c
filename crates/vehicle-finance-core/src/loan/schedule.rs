//! Month-by-month amortization schedule at the quoted installment.
//!
//! Rows are actual payments, so the quoted amounts are settled to cents
//! here. Each row splits the payment into interest on the declining balance
//! and principal; the final row retires whatever balance remains so rounding
//! never leaves a residual.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::loan::dates::{add_calendar_months, loan_end_date};
use crate::loan::quote::{quote_loan, LoanQuoteInput};
use crate::types::{round_money, with_metadata, ComputationOutput, Money};
use crate::VehicleFinanceResult;

// ---------------------------------------------------------------------------
// Input / Output types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleInput {
    pub quote: LoanQuoteInput,
    /// First day of the loan; installments fall due on the same day of each
    /// following month (clamped at month ends).
    pub start_date: NaiveDate,
}

/// One installment of the schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentRow {
    /// 1-indexed month number.
    pub period: u32,
    pub due_date: NaiveDate,
    pub interest: Money,
    pub principal: Money,
    pub insurance: Money,
    /// Principal + interest + insurance actually due this month.
    pub payment: Money,
    pub remaining_balance: Money,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleOutput {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Settled installment actually paid each month, insurance included.
    pub monthly_installment: Money,
    pub rows: Vec<PaymentRow>,
    pub total_interest: Money,
    pub total_insurance: Money,
    /// Down payment plus every scheduled payment. Can differ from the
    /// quote's closed-form `total_paid` by the cents the final row absorbs.
    pub total_paid: Money,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Expand a quote into its full payment schedule.
pub fn build_schedule(
    input: &ScheduleInput,
) -> VehicleFinanceResult<ComputationOutput<ScheduleOutput>> {
    let start = Instant::now();

    let quoted = quote_loan(&input.quote)?;
    let warnings = quoted.warnings.clone();
    let quote = quoted.result;

    // The quote is full precision; payments change hands in cents.
    let installment = round_money(quote.base_monthly_installment);
    let insurance = round_money(quote.monthly_insurance);
    let down_payment = round_money(quote.down_payment);

    let months = input.quote.term.as_months();
    let mut balance = round_money(quote.financed_amount);
    let mut rows = Vec::with_capacity(months as usize);
    let mut total_interest = Decimal::ZERO;
    let mut total_payments = Decimal::ZERO;

    for period in 1..=months {
        let due_date = add_calendar_months(input.start_date, period)?;
        let interest = round_money(balance * quote.monthly_rate);

        // The last installment retires the balance exactly; earlier ones
        // never amortize more than is outstanding.
        let principal = if period == months {
            balance
        } else {
            round_money(installment - interest).min(balance)
        };

        let payment = principal + interest + insurance;
        balance -= principal;
        total_interest += interest;
        total_payments += payment;

        rows.push(PaymentRow {
            period,
            due_date,
            interest,
            principal,
            insurance,
            payment,
            remaining_balance: balance,
        });
    }

    let output = ScheduleOutput {
        start_date: input.start_date,
        end_date: loan_end_date(input.start_date, months)?,
        monthly_installment: installment + insurance,
        rows,
        total_interest,
        total_insurance: insurance * Decimal::from(months),
        total_paid: down_payment + total_payments,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    let assumptions = serde_json::json!({
        "installment": (installment + insurance).to_string(),
        "rows_settled_to_cents": true,
        "final_period_absorbs_residual": true,
    });

    Ok(with_metadata(
        "Declining-Balance Amortization Schedule",
        &assumptions,
        warnings,
        elapsed,
        output,
    ))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
