//! Per-vehicle financing quote: the showroom price feeds the loan quote,
//! and an optional start date yields the loan's calendar end date.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::catalog::showroom::{self, Vehicle};
use crate::error::VehicleFinanceError;
use crate::loan::dates::loan_end_date;
use crate::loan::quote::{quote_loan, LoanQuoteInput, LoanQuoteOutput, LoanTerm};
use crate::types::{with_metadata, ComputationOutput, Money, Percent};
use crate::VehicleFinanceResult;

// ---------------------------------------------------------------------------
// Input / Output types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleQuoteInput {
    /// Exact showroom name (case-insensitive).
    pub vehicle: String,
    pub down_payment_percent: Percent,
    pub annual_interest_rate_percent: Percent,
    pub term: LoanTerm,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annual_insurance_cost: Option<Money>,
    /// First day of the loan, when the caller wants the end date derived.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleQuoteOutput {
    pub vehicle: Vehicle,
    pub quote: LoanQuoteOutput,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Quote financing for a listed vehicle at its showroom price.
pub fn vehicle_quote(
    input: &VehicleQuoteInput,
) -> VehicleFinanceResult<ComputationOutput<VehicleQuoteOutput>> {
    let start = Instant::now();

    let vehicle = showroom::find(&input.vehicle).ok_or_else(|| {
        VehicleFinanceError::InvalidInput {
            field: "vehicle".into(),
            reason: format!("{:?} is not in the showroom listing", input.vehicle),
        }
    })?;

    let quoted = quote_loan(&LoanQuoteInput {
        vehicle_price: vehicle.price,
        down_payment_percent: input.down_payment_percent,
        annual_interest_rate_percent: input.annual_interest_rate_percent,
        term: input.term,
        annual_insurance_cost: input.annual_insurance_cost,
    })?;
    let warnings = quoted.warnings.clone();

    let end_date = match input.start_date {
        Some(date) => Some(loan_end_date(date, input.term.as_months())?),
        None => None,
    };

    let output = VehicleQuoteOutput {
        vehicle,
        quote: quoted.result,
        start_date: input.start_date,
        end_date,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Per-Vehicle Fixed-Rate Loan Quote",
        input,
        warnings,
        elapsed,
        output,
    ))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
