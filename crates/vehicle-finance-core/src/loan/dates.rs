//! Calendar arithmetic for loan start and end dates.

use chrono::{Months, NaiveDate};

use crate::error::VehicleFinanceError;
use crate::VehicleFinanceResult;

/// Calendar-aware month addition, delegated to `chrono`. Jan 31 + 1 month
/// clamps to the last valid day of February instead of overflowing into an
/// invalid date.
pub fn add_calendar_months(date: NaiveDate, months: u32) -> VehicleFinanceResult<NaiveDate> {
    date.checked_add_months(Months::new(months))
        .ok_or_else(|| {
            VehicleFinanceError::DateError(format!("{date} + {months} months is out of range"))
        })
}

/// End of a loan started on `start_date` and repaid over `term_months`.
pub fn loan_end_date(start_date: NaiveDate, term_months: u32) -> VehicleFinanceResult<NaiveDate> {
    add_calendar_months(start_date, term_months)
}
