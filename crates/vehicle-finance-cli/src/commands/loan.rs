use chrono::{Local, NaiveDate};
use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use vehicle_finance_core::loan::quote::{self, LoanQuoteInput, LoanTerm};
use vehicle_finance_core::loan::schedule::{self, ScheduleInput};

use crate::input;

/// Arguments for the standalone loan simulator
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct SimulateArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Vehicle price
    #[arg(long)]
    pub price: Option<Decimal>,

    /// Down payment as a percentage of the price
    #[arg(long, alias = "down")]
    pub down_payment_percent: Option<Decimal>,

    /// Annual interest rate as a percentage
    #[arg(long, alias = "rate")]
    pub annual_rate_percent: Option<Decimal>,

    /// Term in months (12, 24, 36, 48 or 60)
    #[arg(long, default_value_t = 12)]
    pub term: u32,

    /// Flat annual insurance cost added to the installment
    #[arg(long)]
    pub insurance: Option<Decimal>,
}

/// Arguments for the amortization schedule
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct ScheduleArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Vehicle price
    #[arg(long)]
    pub price: Option<Decimal>,

    /// Down payment as a percentage of the price
    #[arg(long, alias = "down")]
    pub down_payment_percent: Option<Decimal>,

    /// Annual interest rate as a percentage
    #[arg(long, alias = "rate")]
    pub annual_rate_percent: Option<Decimal>,

    /// Term in months (12, 24, 36, 48 or 60)
    #[arg(long, default_value_t = 12)]
    pub term: u32,

    /// Flat annual insurance cost added to the installment
    #[arg(long)]
    pub insurance: Option<Decimal>,

    /// Loan start date (YYYY-MM-DD); defaults to today
    #[arg(long)]
    pub start_date: Option<NaiveDate>,
}

pub fn run_simulate(args: SimulateArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let loan_input: LoanQuoteInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        loan_input_from_flags(
            args.price,
            args.down_payment_percent,
            args.annual_rate_percent,
            args.term,
            args.insurance,
        )?
    };

    let output = quote::quote_loan(&loan_input)?;
    Ok(serde_json::to_value(&output)?)
}

pub fn run_schedule(args: ScheduleArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let schedule_input: ScheduleInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        ScheduleInput {
            quote: loan_input_from_flags(
                args.price,
                args.down_payment_percent,
                args.annual_rate_percent,
                args.term,
                args.insurance,
            )?,
            start_date: args.start_date.unwrap_or_else(|| Local::now().date_naive()),
        }
    };

    let output = schedule::build_schedule(&schedule_input)?;
    Ok(serde_json::to_value(&output)?)
}

fn loan_input_from_flags(
    price: Option<Decimal>,
    down_payment_percent: Option<Decimal>,
    annual_rate_percent: Option<Decimal>,
    term: u32,
    insurance: Option<Decimal>,
) -> Result<LoanQuoteInput, Box<dyn std::error::Error>> {
    Ok(LoanQuoteInput {
        vehicle_price: price.ok_or("--price is required (or provide --input)")?,
        down_payment_percent: down_payment_percent
            .ok_or("--down-payment-percent is required (or provide --input)")?,
        annual_interest_rate_percent: annual_rate_percent
            .ok_or("--annual-rate-percent is required (or provide --input)")?,
        term: LoanTerm::try_from(term)?,
        annual_insurance_cost: insurance,
    })
}
