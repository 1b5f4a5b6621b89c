pub mod quote;
pub mod showroom;
