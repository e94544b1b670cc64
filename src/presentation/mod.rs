/// Option chain records: expiries, strike pairs, contracts
pub mod option;
/// Quote records and prices
pub mod quote;

pub use option::*;
pub use quote::*;
