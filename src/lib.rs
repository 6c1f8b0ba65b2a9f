//! # bs-greeks: Closed-Form Black-Scholes Pricing and Greeks
//!
//! `bs-greeks` prices a single European call or put under the Black-Scholes model and
//! reports its first-order sensitivities. Everything is a pure function of an immutable
//! [`OptionContract`]; there is no state, no I/O and no caching.
//!
//! ## Core Features
//!
//! - **Validated contracts**: out-of-domain inputs are rejected at construction with a typed error
//! - **Closed-form pricing**: d1, d2 and the call/put price formulas
//! - **Greeks**: delta, gamma, vega, theta and rho, individually or as one [`Greeks`] value
//! - **Configuration**: TOML contract descriptions with reference-scenario defaults
//!
//! ## Quick Start
//!
//! ```rust
//! use bs_greeks::{OptionContract, OptionType};
//!
//! let put = OptionContract::new(100.0, 90.0, 0.02, 0.2, 3.0, OptionType::Put)?;
//! let call = put.with_option_type(OptionType::Call);
//!
//! // Put-call parity: C - P = S - K·e^(-r·t)
//! let parity = call.price() - put.price() - (100.0 - 90.0 * put.discount_factor());
//! assert!(parity.abs() < 1e-9);
//!
//! let greeks = put.greeks();
//! assert!(greeks.delta < 0.0 && greeks.delta > -1.0);
//! # Ok::<(), bs_greeks::PricingError>(())
//! ```
//!
//! ## Gamma and Vega
//!
//! [`OptionContract::gamma`] and [`OptionContract::vega`] weight their terms with the
//! normal CDF Φ(d1), reproducing the reference figures this crate is checked against.
//! Textbook Black-Scholes uses the density φ(d1) instead; request it explicitly with
//! [`OptionContract::greeks_with`] and [`GreeksConvention::Textbook`].

// ================================================================================================
// MODULES
// ================================================================================================

#[cfg(feature = "serde")]
pub mod config;
pub mod error;
pub mod models;

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

pub use error::{PricingError, PricingResult};
pub use models::bs::{Greeks, GreeksConvention, OptionContract, OptionType};
pub use models::utils::{norm_cdf, norm_pdf};

#[cfg(feature = "serde")]
pub use config::ContractConfig;

// ================================================================================================
// DEFAULT CONTRACTS
// ================================================================================================

/// Ready-made contracts for demos and smoke tests.
///
/// Both presets share the reference scenario: S=100, K=90, r=0.02, σ=0.2, t=3 years.
pub mod default_contracts {
    use crate::error::PricingResult;
    use crate::models::bs::{OptionContract, OptionType};

    pub const SPOT: f64 = 100.0;
    pub const STRIKE: f64 = 100.0 * 0.9;
    pub const RATE: f64 = 0.02;
    pub const VOLATILITY: f64 = 0.2;
    pub const TIME_TO_MATURITY: f64 = 3.0;

    /// Reference scenario priced as a put.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bs_greeks::default_contracts;
    ///
    /// let put = default_contracts::reference_put()?;
    /// assert!((put.price() - 6.4848).abs() < 1e-4);
    /// # Ok::<(), bs_greeks::PricingError>(())
    /// ```
    pub fn reference_put() -> PricingResult<OptionContract> {
        reference(OptionType::Put)
    }

    /// Reference scenario priced as a call.
    pub fn reference_call() -> PricingResult<OptionContract> {
        reference(OptionType::Call)
    }

    fn reference(option_type: OptionType) -> PricingResult<OptionContract> {
        OptionContract::new(SPOT, STRIKE, RATE, VOLATILITY, TIME_TO_MATURITY, option_type)
    }
}

// ================================================================================================
// PRICING API
// ================================================================================================

/// Black-Scholes price of a contract.
///
/// Equivalent to [`OptionContract::price`]; provided so callers holding a slice of
/// contracts can map over a free function.
pub fn price_contract(contract: &OptionContract) -> f64 {
    contract.price()
}

/// All five Greeks of a contract under [`GreeksConvention::Reference`].
pub fn greeks_for(contract: &OptionContract) -> Greeks {
    contract.greeks()
}
