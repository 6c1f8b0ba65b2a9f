//! Prints the Black-Scholes price of the reference put
//! (S=100, K=90, r=0.02, σ=0.2, t=3 years).

use anyhow::{Context, Result};
use bs_greeks::default_contracts;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let contract =
        default_contracts::reference_put().context("Invalid reference contract parameters")?;
    let price = contract.price();
    tracing::debug!(price, d1 = contract.d1(), d2 = contract.d2(), "priced contract");

    println!("{}", price);
    Ok(())
}
