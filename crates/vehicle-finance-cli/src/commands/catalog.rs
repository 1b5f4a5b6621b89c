use chrono::NaiveDate;
use clap::{Args, ValueEnum};
use rust_decimal::Decimal;
use serde_json::Value;

use vehicle_finance_core::catalog::quote::{self, VehicleQuoteInput};
use vehicle_finance_core::catalog::showroom::{self, VehicleClass};
use vehicle_finance_core::loan::quote::LoanTerm;

use crate::input;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ClassFilter {
    Sedan,
    Pickup,
}

impl From<ClassFilter> for VehicleClass {
    fn from(filter: ClassFilter) -> VehicleClass {
        match filter {
            ClassFilter::Sedan => VehicleClass::Sedan,
            ClassFilter::Pickup => VehicleClass::Pickup,
        }
    }
}

/// Arguments for listing the showroom catalog
#[derive(Args)]
pub struct VehiclesArgs {
    /// Only show one vehicle class
    #[arg(long, value_enum)]
    pub class: Option<ClassFilter>,
}

/// Arguments for a per-vehicle financing quote
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct QuoteArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Showroom vehicle name, e.g. "Kia Rio 2024"
    #[arg(long)]
    pub vehicle: Option<String>,

    /// Down payment as a percentage of the listed price
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

    /// Loan start date (YYYY-MM-DD); derives the end date when given
    #[arg(long)]
    pub start_date: Option<NaiveDate>,
}

pub fn run_vehicles(args: VehiclesArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let vehicles = match args.class {
        Some(filter) => showroom::by_class(filter.into()),
        None => showroom::showroom(),
    };
    Ok(serde_json::to_value(&vehicles)?)
}

pub fn run_quote(args: QuoteArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let quote_input: VehicleQuoteInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        VehicleQuoteInput {
            vehicle: args.vehicle.ok_or("--vehicle is required (or provide --input)")?,
            down_payment_percent: args
                .down_payment_percent
                .ok_or("--down-payment-percent is required (or provide --input)")?,
            annual_interest_rate_percent: args
                .annual_rate_percent
                .ok_or("--annual-rate-percent is required (or provide --input)")?,
            term: LoanTerm::try_from(args.term)?,
            annual_insurance_cost: args.insurance,
            start_date: args.start_date,
        }
    };

    let output = quote::vehicle_quote(&quote_input)?;
    Ok(serde_json::to_value(&output)?)
}
