use chrono::NaiveDate;
use rust_decimal_macros::dec;
use vehicle_finance_core::catalog::quote::{vehicle_quote, VehicleQuoteInput};
use vehicle_finance_core::catalog::showroom::{by_class, find, showroom, VehicleClass};
use vehicle_finance_core::loan::quote::LoanTerm;

// ===========================================================================
// Showroom catalog and per-vehicle quote tests
// ===========================================================================

#[test]
fn test_catalog_is_read_only_and_stable() {
    let first = showroom();
    let second = showroom();
    let names: Vec<_> = first.iter().map(|v| &v.name).collect();
    let again: Vec<_> = second.iter().map(|v| &v.name).collect();
    assert_eq!(names, again);
    assert_eq!(first.len(), 4);
}

#[test]
fn test_every_vehicle_belongs_to_one_filter() {
    let sedans = by_class(VehicleClass::Sedan).len();
    let pickups = by_class(VehicleClass::Pickup).len();
    assert_eq!(sedans + pickups, showroom().len());
}

#[test]
fn test_listed_prices() {
    assert_eq!(find("Toyota Corolla 2024").unwrap().price, dec!(15000));
    assert_eq!(find("Nissan Versa 2024").unwrap().price, dec!(20000));
    assert_eq!(find("Kia Rio 2024").unwrap().price, dec!(21500));
    assert_eq!(find("Toyota Hilux 2024").unwrap().price, dec!(32500));
}

#[test]
fn test_hilux_quote_end_to_end() {
    let input = VehicleQuoteInput {
        vehicle: "Toyota Hilux 2024".into(),
        down_payment_percent: dec!(30),
        annual_interest_rate_percent: dec!(12),
        term: LoanTerm::Months48,
        annual_insurance_cost: Some(dec!(1800)),
        start_date: NaiveDate::from_ymd_opt(2024, 5, 31),
    };
    let out = vehicle_quote(&input).unwrap().result;

    assert_eq!(out.quote.down_payment, dec!(9750.00));
    assert_eq!(out.quote.financed_amount, dec!(22750.00));
    assert_eq!(out.quote.monthly_insurance, dec!(150.00));
    // 48 calendar months after May 31: day clamps where months are shorter.
    assert_eq!(out.end_date, NaiveDate::from_ymd_opt(2028, 5, 31));

    // The per-vehicle path and the standalone simulator agree.
    let standalone = vehicle_finance_core::loan::quote::quote_loan(
        &vehicle_finance_core::loan::quote::LoanQuoteInput {
            vehicle_price: dec!(32500),
            down_payment_percent: dec!(30),
            annual_interest_rate_percent: dec!(12),
            term: LoanTerm::Months48,
            annual_insurance_cost: Some(dec!(1800)),
        },
    )
    .unwrap()
    .result;
    assert_eq!(out.quote.monthly_installment, standalone.monthly_installment);
}

#[test]
fn test_vehicle_serializes_with_class_tag() {
    let json = serde_json::to_value(find("Toyota Hilux 2024").unwrap()).unwrap();
    assert_eq!(json["class"], "pickup");
    assert_eq!(json["price"], "32500");
}
