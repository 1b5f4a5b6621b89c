pub mod error;
pub mod loan;
pub mod types;

#[cfg(feature = "catalog")]
pub mod catalog;

pub use error::VehicleFinanceError;
pub use types::*;

/// Standard result type for all vehicle-finance operations
pub type VehicleFinanceResult<T> = Result<T, VehicleFinanceError>;
