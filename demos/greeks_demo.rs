// demos/greeks_demo.rs

//! Demonstration of Black-Scholes pricing and Greeks
//!
//! This example shows how to:
//! 1. Build the reference call and put contracts
//! 2. Price both legs and check put-call parity
//! 3. Compare the reference and textbook Greeks conventions
//! 4. Sweep volatility and watch the price respond

use anyhow::Result;
use bs_greeks::{default_contracts, GreeksConvention, OptionContract, OptionType};

fn main() -> Result<()> {
    println!("Black-Scholes Pricing and Greeks Demo");
    println!("=====================================");

    let put = default_contracts::reference_put()?;
    let call = put.with_option_type(OptionType::Call);

    println!(
        "S={} K={} r={} sigma={} t={}",
        put.spot(),
        put.strike(),
        put.rate(),
        put.volatility(),
        put.time_to_maturity()
    );
    println!("d1 = {:.6}, d2 = {:.6}", put.d1(), put.d2());

    println!("\nStep 1: Prices");
    println!("  Call: {:.6}", call.price());
    println!("  Put:  {:.6}", put.price());
    let parity_gap = call.price() - put.price() - (put.spot() - put.strike() * put.discount_factor());
    println!("  Parity gap: {:.3e}", parity_gap);

    println!("\nStep 2: Greeks");
    println!(
        "{:<6} {:<11} {:>10} {:>10} {:>10} {:>10} {:>10}",
        "Leg", "Convention", "Delta", "Gamma", "Vega", "Theta", "Rho"
    );
    println!("{}", "-".repeat(72));
    for contract in [&call, &put] {
        for convention in [GreeksConvention::Reference, GreeksConvention::Textbook] {
            let g = contract.greeks_with(convention);
            println!(
                "{:<6} {:<11} {:>10.4} {:>10.4} {:>10.4} {:>10.4} {:>10.4}",
                contract.option_type().to_string(),
                format!("{:?}", convention),
                g.delta,
                g.gamma,
                g.vega,
                g.theta,
                g.rho
            );
        }
    }

    println!("\nStep 3: Volatility sweep");
    println!("{:<8} {:>12} {:>12}", "Sigma", "Call", "Put");
    for sigma in [0.1, 0.2, 0.3, 0.4, 0.5] {
        let c = OptionContract::new(100.0, 90.0, 0.02, sigma, 3.0, OptionType::Call)?;
        let p = c.with_option_type(OptionType::Put);
        println!("{:<8.2} {:>12.4} {:>12.4}", sigma, c.price(), p.price());
    }

    Ok(())
}
