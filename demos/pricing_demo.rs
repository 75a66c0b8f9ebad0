//! Price a call and a put, check put-call parity, and sweep spot.
//!
//! Run with: `cargo run --example pricing_demo`

use bsgreeks::report::{compare_call_put, scenario_analysis};
use bsgreeks::{OptionKind, OptionSpec, PricingEngine, ScenarioConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let spec = OptionSpec::new(500.0, 505.0, 0.25, 0.05, 0.20, 0.01, OptionKind::Call)?;

    // ---------------------------------------------------------------
    // 1. Price both kinds
    // ---------------------------------------------------------------

    let call = PricingEngine::new(spec)?;
    let put = PricingEngine::new(spec.with_kind(OptionKind::Put))?;

    println!("Black-Scholes-Merton pricing");
    println!("  Spot:     {:.2}", spec.spot());
    println!("  Strike:   {:.2}", spec.strike());
    println!("  Expiry:   {}y", spec.time_to_expiry());
    println!("  Rate:     {:.1}%", spec.risk_free_rate() * 100.0);
    println!("  Dividend: {:.1}%", spec.dividend_yield() * 100.0);
    println!("  Vol:      {:.0}%", spec.volatility() * 100.0);
    println!();
    println!("  Call price: {:.6}", call.price());
    println!("  Put price:  {:.6}", put.price());

    // ---------------------------------------------------------------
    // 2. Parity
    // ---------------------------------------------------------------

    let cmp = compare_call_put(&spec)?;
    println!(
        "\nParity: C - P = {:.6}, S·e^(-qT) - K·e^(-rT) = {:.6}, gap {:.2e}",
        cmp.parity.call_minus_put, cmp.parity.discounted_forward_minus_strike, cmp.parity.difference
    );

    // ---------------------------------------------------------------
    // 3. Greeks at expiry
    // ---------------------------------------------------------------

    let expired = PricingEngine::new(spec.with_time_to_expiry(0.0)?)?.all_greeks();
    println!("\nAt expiry: price {:.4}, delta {}", expired.price, expired.delta);

    // ---------------------------------------------------------------
    // 4. Spot ladder
    // ---------------------------------------------------------------

    let config = ScenarioConfig {
        spot_multipliers: (0..=8).map(|i| 0.8 + 0.05 * i as f64).collect(),
        ..ScenarioConfig::default()
    };
    let report = scenario_analysis(&spec, &config)?;
    println!("\n{:>10} {:>12} {:>10} {:>10}", "Spot", "Call", "Delta", "Gamma");
    println!("{}", "-".repeat(46));
    for row in &report.spot_ladder {
        println!(
            "{:>10.2} {:>12.4} {:>10.4} {:>10.6}",
            row.input, row.greeks.price, row.greeks.delta, row.greeks.gamma
        );
    }

    Ok(())
}
