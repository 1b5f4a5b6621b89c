pub mod dates;
pub mod form;
pub mod quote;

#[cfg(feature = "schedule")]
pub mod schedule;
