use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::error::PricingResult;
use crate::models::bs::{GreeksConvention, OptionContract, OptionType};

/// Contract parameters as read from a TOML document.
///
/// Every field falls back to the reference scenario
/// (S=100, K=90, r=0.02, σ=0.2, t=3, put), so a partial file only overrides
/// what it names. Values are not validated until [`ContractConfig::build`].
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContractConfig {
    #[serde(default = "default_spot")]
    pub spot: f64,

    #[serde(default = "default_strike")]
    pub strike: f64,

    /// Annual risk-free rate (continuously compounded)
    #[serde(default = "default_rate")]
    pub rate: f64,

    /// Annual volatility of the underlying's returns
    #[serde(default = "default_volatility")]
    pub volatility: f64,

    /// Time to maturity in years
    #[serde(default = "default_time_to_maturity")]
    pub time_to_maturity: f64,

    #[serde(default = "default_option_type")]
    pub option_type: OptionType,

    #[serde(default)]
    pub greeks_convention: GreeksConvention,
}

impl Default for ContractConfig {
    fn default() -> Self {
        Self {
            spot: default_spot(),
            strike: default_strike(),
            rate: default_rate(),
            volatility: default_volatility(),
            time_to_maturity: default_time_to_maturity(),
            option_type: default_option_type(),
            greeks_convention: GreeksConvention::default(),
        }
    }
}

impl ContractConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).context("Failed to parse contract configuration")
    }

    /// Read and parse a TOML file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read contract configuration {}", path.display()))?;
        Self::from_toml_str(&raw)
    }

    /// Validate the parameters and build the contract.
    pub fn build(&self) -> PricingResult<OptionContract> {
        OptionContract::new(
            self.spot,
            self.strike,
            self.rate,
            self.volatility,
            self.time_to_maturity,
            self.option_type,
        )
    }
}

fn default_spot() -> f64 {
    100.0
}

fn default_strike() -> f64 {
    100.0 * 0.9
}

fn default_rate() -> f64 {
    0.02
}

fn default_volatility() -> f64 {
    0.2
}

fn default_time_to_maturity() -> f64 {
    3.0
}

fn default_option_type() -> OptionType {
    OptionType::Put
}
