//! Closed-form Black-Scholes price and sensitivities.
//!
//! Every method recomputes d1/d2 from the contract fields; nothing is cached
//! between calls.

use super::types::{Greeks, GreeksConvention, OptionContract, OptionType};
use crate::models::utils::{norm_cdf, norm_pdf};

impl OptionContract {
    /// d1 = (ln(S/K) + (r + σ²/2)·t) / (σ·√t)
    pub fn d1(&self) -> f64 {
        let (s, k, r, sigma, t) = self.params();
        ((s / k).ln() + (r + 0.5 * sigma * sigma) * t) / (sigma * t.sqrt())
    }

    /// d2 = d1 - σ·√t
    pub fn d2(&self) -> f64 {
        self.d1() - self.volatility() * self.time_to_maturity().sqrt()
    }

    /// Present value of the option.
    pub fn price(&self) -> f64 {
        let (s, k, _, _, _) = self.params();
        let (d1, d2) = (self.d1(), self.d2());
        let discounted_strike = k * self.discount_factor();

        match self.option_type() {
            OptionType::Call => norm_cdf(d1) * s - norm_cdf(d2) * discounted_strike,
            OptionType::Put => norm_cdf(-d2) * discounted_strike - norm_cdf(-d1) * s,
        }
    }

    pub fn delta(&self) -> f64 {
        let n = norm_cdf(self.d1());
        match self.option_type() {
            OptionType::Call => n,
            OptionType::Put => n - 1.0,
        }
    }

    /// Gamma with Φ(d1) in the numerator. See [`GreeksConvention`].
    pub fn gamma(&self) -> f64 {
        self.gamma_from(norm_cdf(self.d1()))
    }

    /// Vega with Φ(d1) as the weight. See [`GreeksConvention`].
    pub fn vega(&self) -> f64 {
        self.vega_from(norm_cdf(self.d1()))
    }

    pub fn theta(&self) -> f64 {
        self.theta_from(norm_cdf(self.d1()))
    }

    pub fn rho(&self) -> f64 {
        let (_, k, _, _, t) = self.params();
        let weight = k * t * self.discount_factor();
        match self.option_type() {
            OptionType::Call => weight * norm_cdf(self.d2()),
            OptionType::Put => -weight * norm_cdf(-self.d2()),
        }
    }

    /// All five Greeks under [`GreeksConvention::Reference`].
    pub fn greeks(&self) -> Greeks {
        self.greeks_with(GreeksConvention::Reference)
    }

    /// All five Greeks, choosing whether gamma, vega and the decay term of
    /// theta are weighted by Φ(d1) or φ(d1). Delta and rho do not depend on it.
    pub fn greeks_with(&self, convention: GreeksConvention) -> Greeks {
        let d1 = self.d1();
        let weight = match convention {
            GreeksConvention::Reference => norm_cdf(d1),
            GreeksConvention::Textbook => norm_pdf(d1),
        };

        Greeks {
            delta: self.delta(),
            gamma: self.gamma_from(weight),
            vega: self.vega_from(weight),
            theta: self.theta_from(weight),
            rho: self.rho(),
        }
    }

    /// e^(-r·t)
    pub fn discount_factor(&self) -> f64 {
        (-self.rate() * self.time_to_maturity()).exp()
    }

    fn gamma_from(&self, weight: f64) -> f64 {
        let (s, _, _, sigma, t) = self.params();
        weight / (s * sigma * t.sqrt())
    }

    fn vega_from(&self, weight: f64) -> f64 {
        let (s, _, _, _, t) = self.params();
        weight * s * t.sqrt()
    }

    fn theta_from(&self, weight: f64) -> f64 {
        let (s, k, r, sigma, t) = self.params();
        let decay = -weight * s * sigma / (2.0 * t.sqrt());
        let carry = r * k * self.discount_factor();

        match self.option_type() {
            OptionType::Call => decay + norm_cdf(self.d2()) * carry,
            OptionType::Put => decay - norm_cdf(-self.d2()) * carry,
        }
    }

    /// (S, K, r, σ, t)
    fn params(&self) -> (f64, f64, f64, f64, f64) {
        (
            self.spot(),
            self.strike(),
            self.rate(),
            self.volatility(),
            self.time_to_maturity(),
        )
    }
}
