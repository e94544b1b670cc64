/// Quote and option chain service interface
pub mod quote;

pub use quote::*;
