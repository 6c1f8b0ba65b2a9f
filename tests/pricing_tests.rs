
use bs_greeks::{
    default_contracts, greeks_for, norm_cdf, price_contract, GreeksConvention, OptionContract,
    OptionType, PricingError,
};
use statrs::distribution::{ContinuousCDF, Normal};
use test_utils::{reference_inputs, sample_inputs, MarketInputs, PARITY_TOL};

/// The reference put and call prices and their parity relation
#[test]
fn test_reference_scenario() {
    let put = default_contracts::reference_put().expect("reference put is valid");
    let call = default_contracts::reference_call().expect("reference call is valid");

    println!("Reference put price:  {:.6}", put.price());
    println!("Reference call price: {:.6}", call.price());

    assert!((put.price() - 6.484_780_765).abs() < 1e-6);
    assert!((call.price() - 21.725_972_743).abs() < 1e-6);

    let forward_gap = 100.0 - 90.0 * (-0.02_f64 * 3.0).exp();
    assert!((call.price() - put.price() - forward_gap).abs() < PARITY_TOL);

    assert_eq!(price_contract(&put), put.price());
    assert_eq!(greeks_for(&call), call.greeks());
}

#[test]
fn test_flag_constructor_matches_enum_constructor() {
    let from_flag = OptionContract::from_flag(100.0, 90.0, 0.02, 0.2, 3.0, 'P').unwrap();
    let from_enum = reference_inputs().contract(OptionType::Put);
    assert_eq!(from_flag, from_enum);
    assert_eq!(from_flag.price(), from_enum.price());
}

#[test]
fn test_put_call_parity() {
    for inputs in sample_inputs(7, 500) {
        let call = inputs.contract(OptionType::Call);
        let put = inputs.contract(OptionType::Put);
        let expected = inputs.spot - inputs.strike * (-inputs.rate * inputs.time_to_maturity).exp();
        let gap = call.price() - put.price() - expected;
        assert!(
            gap.abs() < PARITY_TOL,
            "parity violated by {:e} for {:?}",
            gap,
            inputs
        );
    }
}

#[test]
fn test_near_expiry_converges_to_intrinsic() {
    let cases = [(100.0, 90.0), (90.0, 100.0), (120.0, 80.0), (75.0, 110.0)];
    for (spot, strike) in cases {
        let inputs = MarketInputs {
            spot,
            strike,
            rate: 0.02,
            volatility: 0.2,
            time_to_maturity: 1e-6,
        };
        let call = inputs.contract(OptionType::Call);
        let put = inputs.contract(OptionType::Put);

        assert!(
            (call.price() - (spot - strike).max(0.0)).abs() < 1e-4,
            "call S={} K={} -> {}",
            spot,
            strike,
            call.price()
        );
        assert!(
            (put.price() - (strike - spot).max(0.0)).abs() < 1e-4,
            "put S={} K={} -> {}",
            spot,
            strike,
            put.price()
        );
        assert!((call.price() - call.intrinsic_value()).abs() < 1e-4);
    }
}

#[test]
fn test_price_monotone_in_volatility() {
    let vols = [0.05, 0.1, 0.15, 0.2, 0.3, 0.45, 0.6, 0.8, 1.0];
    for inputs in sample_inputs(11, 100) {
        for option_type in [OptionType::Call, OptionType::Put] {
            let prices: Vec<f64> = vols
                .iter()
                .map(|&v| inputs.with_volatility(v).contract(option_type).price())
                .collect();
            for pair in prices.windows(2) {
                assert!(
                    pair[1] >= pair[0] - 1e-12,
                    "{} price decreased with volatility for {:?}: {:?}",
                    option_type,
                    inputs,
                    prices
                );
            }
        }
    }
}

#[test]
fn test_delta_bounds() {
    for inputs in sample_inputs(23, 500) {
        let call_delta = inputs.contract(OptionType::Call).delta();
        let put_delta = inputs.contract(OptionType::Put).delta();
        assert!(call_delta > 0.0 && call_delta < 1.0, "call delta {}", call_delta);
        assert!(put_delta > -1.0 && put_delta < 0.0, "put delta {}", put_delta);
        assert!((call_delta - put_delta - 1.0).abs() < 1e-12);
    }
}

#[test]
fn test_domain_rejection() {
    let zero_time = OptionContract::new(100.0, 90.0, 0.02, 0.2, 0.0, OptionType::Call);
    let zero_vol = OptionContract::new(100.0, 90.0, 0.02, 0.0, 3.0, OptionType::Put);
    let negative_time = OptionContract::new(100.0, 90.0, 0.02, 0.2, -1.0, OptionType::Put);

    for result in [zero_time, zero_vol, negative_time] {
        match result {
            Err(PricingError::Domain { .. }) => {}
            other => panic!("expected a domain error, got {:?}", other),
        }
    }

    let message = OptionContract::new(100.0, 90.0, 0.02, 0.0, 3.0, OptionType::Put)
        .unwrap_err()
        .to_string();
    assert!(message.contains("volatility"), "message was {}", message);
}

#[test]
fn test_greek_relations_hold_across_samples() {
    for inputs in sample_inputs(31, 200) {
        let call = inputs.contract(OptionType::Call).greeks();
        let put = inputs.contract(OptionType::Put).greeks();

        // Gamma and vega do not depend on the leg
        assert_eq!(call.gamma, put.gamma);
        assert_eq!(call.vega, put.vega);
        assert!(call.gamma > 0.0 && call.vega > 0.0);

        // Rho legs differ by the full discounted-strike sensitivity K·t·e^(-r·t)
        let k = inputs.strike * inputs.time_to_maturity
            * (-inputs.rate * inputs.time_to_maturity).exp();
        assert!((call.rho - put.rho - k).abs() < 1e-9 * k.max(1.0));

        // Call rho is non-negative, put rho non-positive
        assert!(call.rho >= 0.0 && put.rho <= 0.0);
    }
}

#[test]
fn test_textbook_vega_matches_finite_difference() {
    let bump = 1e-5;
    for inputs in sample_inputs(43, 50) {
        let contract = inputs.contract(OptionType::Call);
        let up = inputs.with_volatility(inputs.volatility + bump).contract(OptionType::Call);
        let down = inputs.with_volatility(inputs.volatility - bump).contract(OptionType::Call);
        let numeric = (up.price() - down.price()) / (2.0 * bump);
        let analytic = contract.greeks_with(GreeksConvention::Textbook).vega;
        assert!(
            (numeric - analytic).abs() < 1e-4 * analytic.max(1.0),
            "numeric {} vs analytic {}",
            numeric,
            analytic
        );
    }
}

#[test]
fn test_norm_cdf_against_statrs() {
    let normal = Normal::new(0.0, 1.0).unwrap();
    let mut x = -6.0;
    while x <= 6.0 {
        assert!(
            (norm_cdf(x) - normal.cdf(x)).abs() < 1e-10,
            "cdf mismatch at {}",
            x
        );
        x += 0.05;
    }
}
