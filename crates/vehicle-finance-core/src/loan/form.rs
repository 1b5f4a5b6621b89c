//! The parse gate between raw UI text and typed loan inputs.
//!
//! A form holds numeric fields exactly as a user typed them. Parsing is the
//! only place free text enters the system: it either yields a fully typed
//! [`LoanQuoteInput`] or a [`VehicleFinanceError::ParseError`] naming the
//! offending field. A failed parse mutates nothing, so the caller's
//! previously displayed result stays intact.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::VehicleFinanceError;
use crate::loan::quote::{quote_loan, LoanQuoteInput, LoanQuoteOutput, LoanTerm};
use crate::types::ComputationOutput;
use crate::VehicleFinanceResult;

/// Raw simulator form state, field for field as a UI holds it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanQuoteForm {
    pub vehicle_price: String,
    pub down_payment_percent: String,
    pub annual_interest_rate_percent: String,
    pub term_months: u32,
    pub include_insurance: bool,
    /// Only consulted when `include_insurance` is set.
    #[serde(default)]
    pub annual_insurance_cost: String,
}

impl Default for LoanQuoteForm {
    fn default() -> Self {
        LoanQuoteForm {
            vehicle_price: String::new(),
            down_payment_percent: String::new(),
            annual_interest_rate_percent: String::new(),
            term_months: 12,
            include_insurance: false,
            annual_insurance_cost: String::new(),
        }
    }
}

impl LoanQuoteForm {
    /// Parse every numeric field, or fail on the first one that is not a
    /// decimal number. Repeated calls on the same form return the same
    /// outcome; there is no partial state to corrupt.
    pub fn parse(&self) -> VehicleFinanceResult<LoanQuoteInput> {
        let vehicle_price = parse_decimal("vehicle_price", &self.vehicle_price)?;
        let down_payment_percent =
            parse_decimal("down_payment_percent", &self.down_payment_percent)?;
        let annual_interest_rate_percent = parse_decimal(
            "annual_interest_rate_percent",
            &self.annual_interest_rate_percent,
        )?;
        let term = LoanTerm::try_from(self.term_months)?;

        let annual_insurance_cost = if self.include_insurance {
            Some(parse_decimal(
                "annual_insurance_cost",
                &self.annual_insurance_cost,
            )?)
        } else {
            None
        };

        Ok(LoanQuoteInput {
            vehicle_price,
            down_payment_percent,
            annual_interest_rate_percent,
            term,
            annual_insurance_cost,
        })
    }
}

/// Parse gate composed with the quote itself: the `computeLoan` entry point
/// for callers still holding raw text.
pub fn quote_from_form(
    form: &LoanQuoteForm,
) -> VehicleFinanceResult<ComputationOutput<LoanQuoteOutput>> {
    quote_loan(&form.parse()?)
}

fn parse_decimal(field: &str, raw: &str) -> VehicleFinanceResult<Decimal> {
    Decimal::from_str(raw.trim()).map_err(|_| VehicleFinanceError::ParseError {
        field: field.to_string(),
        value: raw.to_string(),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
