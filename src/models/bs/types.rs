use std::fmt;
use std::str::FromStr;

use crate::error::{PricingError, PricingResult};

/// European option leg
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum OptionType {
    Call,
    Put,
}

impl OptionType {
    /// Payoff at expiry for the given underlying and strike
    pub fn intrinsic(&self, spot: f64, strike: f64) -> f64 {
        match self {
            OptionType::Call => (spot - strike).max(0.0),
            OptionType::Put => (strike - spot).max(0.0),
        }
    }

    /// The opposite leg
    pub fn flip(&self) -> Self {
        match self {
            OptionType::Call => OptionType::Put,
            OptionType::Put => OptionType::Call,
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionType::Call => write!(f, "call"),
            OptionType::Put => write!(f, "put"),
        }
    }
}

impl TryFrom<char> for OptionType {
    type Error = PricingError;

    fn try_from(flag: char) -> PricingResult<Self> {
        match flag.to_ascii_uppercase() {
            'C' => Ok(OptionType::Call),
            'P' => Ok(OptionType::Put),
            other => Err(PricingError::invalid_variant(other.to_string())),
        }
    }
}

impl FromStr for OptionType {
    type Err = PricingError;

    /// Accepts the single-letter flags ("C"/"P") and the full names ("call"/"put").
    fn from_str(s: &str) -> PricingResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "c" | "call" => Ok(OptionType::Call),
            "p" | "put" => Ok(OptionType::Put),
            _ => Err(PricingError::invalid_variant(s)),
        }
    }
}

/// Which normal function feeds gamma, vega and the first theta term.
///
/// `Reference` evaluates those terms with the CDF Φ(d1). `Textbook` uses the
/// density φ(d1) as in the standard Black-Scholes derivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum GreeksConvention {
    #[default]
    Reference,
    Textbook,
}

/// All five sensitivities for a single contract
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Greeks {
    pub delta: f64,
    pub gamma: f64,
    pub vega: f64,
    pub theta: f64,
    pub rho: f64,
}

/// Immutable European option contract priced under Black-Scholes.
///
/// Fields are only reachable through accessors, and [`OptionContract::new`]
/// rejects inputs outside the formula domain. Extreme but in-domain inputs
/// (e.g. a huge σ) can still drive individual Greeks to infinity.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct OptionContract {
    spot: f64,
    strike: f64,
    rate: f64,
    volatility: f64,
    time_to_maturity: f64,
    option_type: OptionType,
}

impl OptionContract {
    /// Build a contract, validating the domain of every parameter.
    ///
    /// # Errors
    ///
    /// [`PricingError::Domain`] when volatility or time is not strictly positive,
    /// when spot or strike is not strictly positive (the log ratio would be undefined),
    /// when any input is not finite, or when `r·t` is so negative that the
    /// discount factor e^(-r·t) overflows.
    pub fn new(
        spot: f64,
        strike: f64,
        rate: f64,
        volatility: f64,
        time_to_maturity: f64,
        option_type: OptionType,
    ) -> PricingResult<Self> {
        let checks = [
            ("spot", spot, true),
            ("strike", strike, true),
            ("rate", rate, false),
            ("volatility", volatility, true),
            ("time_to_maturity", time_to_maturity, true),
        ];
        for (parameter, value, must_be_positive) in checks {
            if !value.is_finite() {
                tracing::warn!(parameter, value, "rejecting non-finite contract input");
                return Err(PricingError::domain(parameter, value, "must be finite"));
            }
            if must_be_positive && value <= 0.0 {
                tracing::warn!(parameter, value, "rejecting non-positive contract input");
                return Err(PricingError::domain(
                    parameter,
                    value,
                    "must be strictly positive",
                ));
            }
        }

        let discount_factor = (-rate * time_to_maturity).exp();
        if !discount_factor.is_finite() {
            tracing::warn!(rate, time_to_maturity, "rejecting overflowing discount factor");
            return Err(PricingError::domain(
                "rate",
                rate,
                "discount factor e^(-r·t) overflows",
            ));
        }

        tracing::debug!(
            spot,
            strike,
            rate,
            volatility,
            time_to_maturity,
            %option_type,
            "built option contract"
        );

        Ok(Self {
            spot,
            strike,
            rate,
            volatility,
            time_to_maturity,
            option_type,
        })
    }

    /// Convenience constructor taking the single-letter flag ('C' or 'P').
    pub fn from_flag(
        spot: f64,
        strike: f64,
        rate: f64,
        volatility: f64,
        time_to_maturity: f64,
        flag: char,
    ) -> PricingResult<Self> {
        let option_type = OptionType::try_from(flag)?;
        Self::new(spot, strike, rate, volatility, time_to_maturity, option_type)
    }

    pub fn spot(&self) -> f64 {
        self.spot
    }

    pub fn strike(&self) -> f64 {
        self.strike
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    pub fn time_to_maturity(&self) -> f64 {
        self.time_to_maturity
    }

    pub fn option_type(&self) -> OptionType {
        self.option_type
    }

    /// Same parameters, different leg. Already-validated inputs need no re-check.
    pub fn with_option_type(&self, option_type: OptionType) -> Self {
        Self {
            option_type,
            ..*self
        }
    }

    /// Payoff if exercised now
    pub fn intrinsic_value(&self) -> f64 {
        self.option_type.intrinsic(self.spot, self.strike)
    }
}
