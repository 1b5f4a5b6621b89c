use napi::Result as NapiResult;
use napi_derive::napi;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

// ---------------------------------------------------------------------------
// Loan simulator
// ---------------------------------------------------------------------------

#[napi]
pub fn simulate_loan(input_json: String) -> NapiResult<String> {
    let input: vehicle_finance_core::loan::quote::LoanQuoteInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output =
        vehicle_finance_core::loan::quote::quote_loan(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn simulate_loan_form(form_json: String) -> NapiResult<String> {
    let form: vehicle_finance_core::loan::form::LoanQuoteForm =
        serde_json::from_str(&form_json).map_err(to_napi_error)?;
    let output =
        vehicle_finance_core::loan::form::quote_from_form(&form).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn payment_schedule(input_json: String) -> NapiResult<String> {
    let input: vehicle_finance_core::loan::schedule::ScheduleInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output =
        vehicle_finance_core::loan::schedule::build_schedule(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Showroom catalog
// ---------------------------------------------------------------------------

#[napi]
pub fn list_vehicles() -> NapiResult<String> {
    let vehicles = vehicle_finance_core::catalog::showroom::showroom();
    serde_json::to_string(&vehicles).map_err(to_napi_error)
}

#[napi]
pub fn vehicle_quote(input_json: String) -> NapiResult<String> {
    let input: vehicle_finance_core::catalog::quote::VehicleQuoteInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output =
        vehicle_finance_core::catalog::quote::vehicle_quote(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}
