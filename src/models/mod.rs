pub mod bs;

/// Stateless standard normal helpers shared by the pricing formulas
pub mod utils {
    use std::f64::consts::PI;

    /// Standard normal cumulative distribution function: 0.5 * [1 + erf(x / sqrt(2))]
    pub fn norm_cdf(x: f64) -> f64 {
        0.5 * (1.0 + libm::erf(x / std::f64::consts::SQRT_2))
    }

    /// Standard normal probability density function
    pub fn norm_pdf(x: f64) -> f64 {
        (-0.5 * x * x).exp() / (2.0 * PI).sqrt()
    }

}
