//! bsgreeks: interactive Black-Scholes calculator.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin bsgreeks          # interactive session
//! cargo run --bin bsgreeks -- demo  # worked examples, scenarios, call vs put
//! ```
//!
//! # Environment Variables
//!
//! - `BSGREEKS_CONFIG`: path to a JSON scenario config (default: built-in ladders)
//! - `RUST_LOG`: log filter, logs go to stderr (default: warn)

use std::io::{self, Write};

use anyhow::Context;
use bsgreeks::report::{
    compare_call_put, render_comparison, render_scenarios, render_summary, scenario_analysis,
};
use bsgreeks::session::run_session;
use bsgreeks::{OptionKind, OptionSpec, PricingEngine, ScenarioConfig};

fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = load_config()?;
    match std::env::args().nth(1).as_deref() {
        None | Some("interactive") => {
            let stdin = io::stdin();
            let summary = run_session(stdin.lock(), io::stdout().lock(), &config)?;
            tracing::info!(
                evaluations = summary.evaluations,
                rejected = summary.rejected,
                "session ended"
            );
        }
        Some("demo") => run_demo(&config)?,
        Some(other) => anyhow::bail!("unknown command {other:?}; expected `interactive` or `demo`"),
    }
    Ok(())
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_config() -> anyhow::Result<ScenarioConfig> {
    match std::env::var("BSGREEKS_CONFIG") {
        Ok(path) => ScenarioConfig::from_path(&path)
            .with_context(|| format!("loading scenario config from {path}")),
        Err(_) => Ok(ScenarioConfig::default()),
    }
}

fn run_demo(config: &ScenarioConfig) -> anyhow::Result<()> {
    let mut out = io::stdout().lock();

    writeln!(out, "EXAMPLE 1: Technology Stock Call Option")?;
    writeln!(out, "{}", "=".repeat(50))?;
    let tech = OptionSpec::builder()
        .spot(150.0)
        .strike(155.0)
        .time_to_expiry(config.years(45.0))
        .risk_free_rate(0.045)
        .volatility(0.25)
        .kind(OptionKind::Call)
        .build()?;
    write!(out, "{}", render_summary(&PricingEngine::new(tech)?))?;

    writeln!(out, "\nEXAMPLE 2: Dividend-Paying Stock Put Option")?;
    writeln!(out, "{}", "=".repeat(50))?;
    let utility = OptionSpec::builder()
        .spot(45.0)
        .strike(50.0)
        .time_to_expiry(0.25)
        .risk_free_rate(0.035)
        .volatility(0.15)
        .dividend_yield(0.04)
        .kind(OptionKind::Put)
        .build()?;
    write!(out, "{}", render_summary(&PricingEngine::new(utility)?))?;

    write!(out, "\n{}", render_scenarios(&scenario_analysis(&tech, config)?))?;
    write!(out, "\n{}", render_comparison(&compare_call_put(&tech)?))?;
    Ok(())
}
