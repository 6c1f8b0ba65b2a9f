//! Error types for contract construction and option-type parsing.

use thiserror::Error;

/// Failure raised when a contract cannot be priced.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PricingError {
    /// A parameter lies outside the domain of the closed-form expressions
    /// (non-positive volatility or time, non-positive price ratio, non-finite input).
    #[error("Domain error: {parameter} = {value} ({reason})")]
    Domain {
        parameter: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// An option-type flag that is neither call nor put.
    #[error("Invalid option type: {0:?} (expected 'C'/'call' or 'P'/'put')")]
    InvalidVariant(String),
}

pub type PricingResult<T> = Result<T, PricingError>;

impl PricingError {
    pub fn domain(parameter: &'static str, value: f64, reason: &'static str) -> Self {
        Self::Domain {
            parameter,
            value,
            reason,
        }
    }

    pub fn invalid_variant(flag: impl Into<String>) -> Self {
        Self::InvalidVariant(flag.into())
    }

    /// True for [`PricingError::Domain`].
    pub fn is_domain(&self) -> bool {
        matches!(self, Self::Domain { .. })
    }
}
