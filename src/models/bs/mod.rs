//! Black-Scholes model for a single European call or put.
//!
//! [`OptionContract`] holds the five market inputs plus the leg; the pricing
//! methods in [`pricing`] are pure functions of those fields.

pub mod pricing;
pub mod types;

pub use types::{Greeks, GreeksConvention, OptionContract, OptionType};
