//! The showroom's fixed vehicle listing.
//!
//! A read-only collaborator: four records, fixed order, filtered by class
//! for display. Storage and retrieval are deliberately out of scope; this
//! in-memory listing is the whole mechanism.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::types::{Currency, Money};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleClass {
    Sedan,
    Pickup,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    pub name: String,
    pub price: Money,
    pub image_ref: String,
    /// Showroom rating out of 5.
    pub rating: Decimal,
    pub class: VehicleClass,
    pub currency: Currency,
}

fn vehicle(
    name: &str,
    price: Decimal,
    image_ref: &str,
    rating: Decimal,
    class: VehicleClass,
) -> Vehicle {
    Vehicle {
        name: name.to_string(),
        price,
        image_ref: image_ref.to_string(),
        rating,
        class,
        currency: Currency::default(),
    }
}

/// The full listing, in display order.
pub fn showroom() -> Vec<Vehicle> {
    vec![
        vehicle(
            "Toyota Corolla 2024",
            dec!(15000),
            "ToyotaCorolla001",
            dec!(4.5),
            VehicleClass::Sedan,
        ),
        vehicle(
            "Nissan Versa 2024",
            dec!(20000),
            "NissanVersa001",
            dec!(4.2),
            VehicleClass::Sedan,
        ),
        vehicle(
            "Kia Rio 2024",
            dec!(21500),
            "KiaRio001",
            dec!(4.2),
            VehicleClass::Sedan,
        ),
        vehicle(
            "Toyota Hilux 2024",
            dec!(32500),
            "ToyotaHilux001",
            dec!(4.2),
            VehicleClass::Pickup,
        ),
    ]
}

/// Listing filtered to one class, order preserved.
pub fn by_class(class: VehicleClass) -> Vec<Vehicle> {
    showroom().into_iter().filter(|v| v.class == class).collect()
}

/// Case-insensitive exact-name lookup.
pub fn find(name: &str) -> Option<Vehicle> {
    let wanted = name.trim();
    showroom()
        .into_iter()
        .find(|v| v.name.eq_ignore_ascii_case(wanted))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_listing_has_four_vehicles_in_order() {
        let names: Vec<String> = showroom().into_iter().map(|v| v.name).collect();
        assert_eq!(
            names,
            vec![
                "Toyota Corolla 2024",
                "Nissan Versa 2024",
                "Kia Rio 2024",
                "Toyota Hilux 2024",
            ]
        );
    }

    #[test]
    fn test_class_filter_preserves_order() {
        let sedans = by_class(VehicleClass::Sedan);
        assert_eq!(sedans.len(), 3);
        assert_eq!(sedans[0].name, "Toyota Corolla 2024");

        let pickups = by_class(VehicleClass::Pickup);
        assert_eq!(pickups.len(), 1);
        assert_eq!(pickups[0].name, "Toyota Hilux 2024");
    }

    #[test]
    fn test_find_is_case_insensitive_and_trims() {
        let v = find("  kia rio 2024 ").unwrap();
        assert_eq!(v.price, dec!(21500));
        assert!(find("Kia Rio 2025").is_none());
    }

    #[test]
    fn test_prices_listed_in_soles() {
        for v in showroom() {
            assert_eq!(v.currency, Currency::PEN);
            assert_eq!(v.currency.symbol(), "S/");
        }
    }
}
