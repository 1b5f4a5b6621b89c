//! Fixed-rate vehicle loan quoting.
//!
//! Implements the standard annuity formula over `rust_decimal::Decimal`:
//! a constant monthly payment fully amortizes the financed amount over the
//! chosen term. An optional flat insurance add-on is paid monthly alongside
//! the installment; it is not financed and bears no interest.

use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::VehicleFinanceError;
use crate::types::{with_metadata, ComputationOutput, Money, Percent, Rate};
use crate::VehicleFinanceResult;

const MONTHS_PER_YEAR: Decimal = dec!(12);
const HUNDRED: Decimal = dec!(100);

// ---------------------------------------------------------------------------
// Input / Output types
// ---------------------------------------------------------------------------

/// Financing terms offered by the showroom, in months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum LoanTerm {
    Months12,
    Months24,
    Months36,
    Months48,
    Months60,
}

impl LoanTerm {
    pub const ALL: [LoanTerm; 5] = [
        LoanTerm::Months12,
        LoanTerm::Months24,
        LoanTerm::Months36,
        LoanTerm::Months48,
        LoanTerm::Months60,
    ];

    pub fn as_months(self) -> u32 {
        match self {
            LoanTerm::Months12 => 12,
            LoanTerm::Months24 => 24,
            LoanTerm::Months36 => 36,
            LoanTerm::Months48 => 48,
            LoanTerm::Months60 => 60,
        }
    }
}

impl TryFrom<u32> for LoanTerm {
    type Error = VehicleFinanceError;

    fn try_from(months: u32) -> Result<Self, Self::Error> {
        match months {
            12 => Ok(LoanTerm::Months12),
            24 => Ok(LoanTerm::Months24),
            36 => Ok(LoanTerm::Months36),
            48 => Ok(LoanTerm::Months48),
            60 => Ok(LoanTerm::Months60),
            other => Err(VehicleFinanceError::InvalidInput {
                field: "term".into(),
                reason: format!("{other} months is not an offered term (12, 24, 36, 48 or 60)"),
            }),
        }
    }
}

impl From<LoanTerm> for u32 {
    fn from(term: LoanTerm) -> u32 {
        term.as_months()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanQuoteInput {
    pub vehicle_price: Money,
    /// Upfront portion of the price, as a percentage in [0, 100].
    pub down_payment_percent: Percent,
    /// Nominal annual rate as a percentage (10 = 10% p.a.).
    pub annual_interest_rate_percent: Percent,
    pub term: LoanTerm,
    /// Flat annual insurance premium, spread evenly across the months.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annual_insurance_cost: Option<Money>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanQuoteOutput {
    pub down_payment: Money,
    pub financed_amount: Money,
    /// Periodic rate actually applied: (annual% / 100) / 12.
    pub monthly_rate: Rate,
    /// Annuity payment before the insurance add-on.
    pub base_monthly_installment: Money,
    pub monthly_insurance: Money,
    /// What the borrower pays each month, insurance included.
    pub monthly_installment: Money,
    /// Down payment plus every monthly installment over the term.
    /// Closed-form total; a settled schedule's total can differ by the
    /// cents its final row absorbs.
    pub total_paid: Money,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Quote a fixed-rate vehicle loan: down payment, financed amount and
/// monthly installment. The result is recomputed wholesale on every call;
/// nothing is retained between quotes. Outputs carry full decimal
/// precision; rounding to cents belongs to the display boundary.
pub fn quote_loan(
    input: &LoanQuoteInput,
) -> VehicleFinanceResult<ComputationOutput<LoanQuoteOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    validate_input(input)?;

    let down_payment = input.vehicle_price * input.down_payment_percent / HUNDRED;
    let financed_amount = input.vehicle_price - down_payment;
    let monthly_rate = input.annual_interest_rate_percent / HUNDRED / MONTHS_PER_YEAR;
    let months = input.term.as_months();

    if monthly_rate.is_zero() && !financed_amount.is_zero() {
        warnings.push(
            "Zero interest rate: installment falls back to linear amortization".to_string(),
        );
    }

    let base_installment = base_monthly_installment(financed_amount, monthly_rate, months)?;
    let monthly_insurance = input.annual_insurance_cost.unwrap_or(Decimal::ZERO) / MONTHS_PER_YEAR;
    let installment = base_installment + monthly_insurance;

    let output = LoanQuoteOutput {
        down_payment,
        financed_amount,
        monthly_rate,
        base_monthly_installment: base_installment,
        monthly_insurance,
        monthly_installment: installment,
        total_paid: down_payment + installment * Decimal::from(months),
    };

    let elapsed = start.elapsed().as_micros() as u64;
    let assumptions = serde_json::json!({
        "term_months": months,
        "insurance_financed": false,
        "rounding": "none; display boundary rounds to cents",
    });

    Ok(with_metadata(
        "Fixed-Rate Annuity Loan Quote",
        &assumptions,
        warnings,
        elapsed,
        output,
    ))
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

/// Annuity payment: financed * r * (1+r)^n / ((1+r)^n - 1).
///
/// At r == 0 the closed form degenerates (denominator is zero); the only
/// sane limit is linear amortization, financed / n. A fully financed price
/// of zero short-circuits to a zero installment rather than dividing by it.
fn base_monthly_installment(
    financed: Money,
    monthly_rate: Rate,
    months: u32,
) -> VehicleFinanceResult<Money> {
    if financed.is_zero() {
        return Ok(Decimal::ZERO);
    }

    if monthly_rate.is_zero() {
        return Ok(financed / Decimal::from(months));
    }

    let growth = (Decimal::ONE + monthly_rate)
        .checked_powi(months as i64)
        .ok_or_else(|| VehicleFinanceError::InvalidInput {
            field: "annual_interest_rate_percent".into(),
            reason: format!("Rate is too large to compound over {months} months."),
        })?;
    let denominator = growth - Decimal::ONE;
    if denominator.is_zero() {
        return Err(VehicleFinanceError::DivisionByZero {
            context: format!("annuity factor over {months} months"),
        });
    }

    Ok(financed * monthly_rate * growth / denominator)
}

fn validate_input(input: &LoanQuoteInput) -> VehicleFinanceResult<()> {
    if input.vehicle_price <= Decimal::ZERO {
        return Err(VehicleFinanceError::InvalidInput {
            field: "vehicle_price".into(),
            reason: "Vehicle price must be positive.".into(),
        });
    }
    if input.down_payment_percent < Decimal::ZERO || input.down_payment_percent > HUNDRED {
        return Err(VehicleFinanceError::InvalidInput {
            field: "down_payment_percent".into(),
            reason: "Down payment must be between 0% and 100% of the price.".into(),
        });
    }
    if input.annual_interest_rate_percent < Decimal::ZERO {
        return Err(VehicleFinanceError::InvalidInput {
            field: "annual_interest_rate_percent".into(),
            reason: "Interest rate cannot be negative.".into(),
        });
    }
    if let Some(insurance) = input.annual_insurance_cost {
        if insurance < Decimal::ZERO {
            return Err(VehicleFinanceError::InvalidInput {
                field: "annual_insurance_cost".into(),
                reason: "Insurance cost cannot be negative.".into(),
            });
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    fn base_input() -> LoanQuoteInput {
        LoanQuoteInput {
            vehicle_price: dec!(15000),
            down_payment_percent: dec!(20),
            annual_interest_rate_percent: dec!(10),
            term: LoanTerm::Months12,
            annual_insurance_cost: None,
        }
    }

    #[test]
    fn test_textbook_quote() {
        let result = quote_loan(&base_input()).unwrap();
        let out = &result.result;
        assert_eq!(out.down_payment, dec!(3000));
        assert_eq!(out.financed_amount, dec!(12000));
        // 12000 * r / (1 - (1+r)^-12) with r = 0.1/12 ≈ 1054.99
        assert!((out.base_monthly_installment - dec!(1054.99)).abs() < dec!(0.01));
        assert_eq!(out.monthly_installment, out.base_monthly_installment);
    }

    #[test]
    fn test_insurance_is_a_flat_monthly_addition() {
        let mut input = base_input();
        input.annual_insurance_cost = Some(dec!(1200));
        let with = quote_loan(&input).unwrap().result;
        let without = quote_loan(&base_input()).unwrap().result;

        assert_eq!(with.monthly_insurance, dec!(100));
        assert_eq!(
            with.monthly_installment,
            without.monthly_installment + dec!(100.00)
        );
        // The annuity itself is untouched: insurance is not financed.
        assert_eq!(
            with.base_monthly_installment,
            without.base_monthly_installment
        );
    }

    #[test]
    fn test_zero_rate_is_linear_amortization() {
        let mut input = base_input();
        input.annual_interest_rate_percent = dec!(0);
        let result = quote_loan(&input).unwrap();
        // financed / term, exactly: 12000 / 12
        assert_eq!(result.result.monthly_installment, dec!(1000));
        assert!(!result.warnings.is_empty());
    }

    #[test]
    fn test_full_down_payment_quotes_zero_installment() {
        let mut input = base_input();
        input.down_payment_percent = dec!(100);
        let out = quote_loan(&input).unwrap().result;
        assert_eq!(out.down_payment, dec!(15000));
        assert_eq!(out.financed_amount, dec!(0));
        assert_eq!(out.monthly_installment, dec!(0));
    }

    #[test]
    fn test_total_paid_includes_down_payment() {
        let out = quote_loan(&base_input()).unwrap().result;
        assert_eq!(
            out.total_paid,
            out.down_payment + out.monthly_installment * dec!(12)
        );
    }

    #[test]
    fn test_longer_term_lowers_the_installment() {
        let mut input = base_input();
        input.term = LoanTerm::Months60;
        let long = quote_loan(&input).unwrap().result;
        let short = quote_loan(&base_input()).unwrap().result;
        assert!(long.monthly_installment < short.monthly_installment);
    }

    #[test]
    fn test_negative_price_rejected() {
        let mut input = base_input();
        input.vehicle_price = dec!(-1);
        assert!(matches!(
            quote_loan(&input),
            Err(VehicleFinanceError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_down_payment_above_100_percent_rejected() {
        let mut input = base_input();
        input.down_payment_percent = dec!(101);
        assert!(quote_loan(&input).is_err());
    }

    #[test]
    fn test_astronomical_rate_errors_instead_of_panicking() {
        let mut input = base_input();
        input.annual_interest_rate_percent = dec!(100000000);
        input.term = LoanTerm::Months60;
        assert!(matches!(
            quote_loan(&input),
            Err(VehicleFinanceError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_term_conversion_round_trips() {
        for term in LoanTerm::ALL {
            assert_eq!(LoanTerm::try_from(term.as_months()).unwrap(), term);
        }
        assert!(LoanTerm::try_from(13).is_err());
        assert!(LoanTerm::try_from(0).is_err());
    }
}
