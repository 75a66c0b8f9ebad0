//! Scenario ladders: how price and Greeks move as one input is perturbed.
//!
//! Every row is an independent engine evaluation. With the `parallel` feature
//! rows are priced on the rayon pool; ladder order is preserved either way.

use std::fmt;

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::ScenarioConfig;
use crate::engine::PricingEngine;
use crate::error::Result;
use crate::greeks::{GreeksResult, Metric};
use crate::report::{TABLE_RULE_WIDTH, WIDE_RULE_WIDTH};
use crate::spec::OptionSpec;

/// One evaluated point of a ladder.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioRow {
    /// The perturbed input: spot, volatility, or days to expiry.
    pub input: f64,
    pub greeks: GreeksResult,
}

/// Base case plus the three ladders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioReport {
    pub base_spec: OptionSpec,
    pub base: GreeksResult,
    pub spot_ladder: Vec<ScenarioRow>,
    pub vol_ladder: Vec<ScenarioRow>,
    pub time_ladder: Vec<ScenarioRow>,
}

/// Evaluate the spot, volatility and time-decay ladders around `base`.
///
/// Volatility points at or below zero are skipped, as are time points that
/// round to zero years.
///
/// # Errors
/// Propagates [`GreeksError`](crate::GreeksError) from the base case or any
/// perturbed evaluation.
pub fn scenario_analysis(base: &OptionSpec, config: &ScenarioConfig) -> Result<ScenarioReport> {
    config.validate()?;

    #[cfg(feature = "logging")]
    tracing::debug!(
        spot_points = config.spot_multipliers.len(),
        vol_points = config.vol_shifts.len(),
        time_points = config.days_to_expiry.len(),
        "scenario analysis started"
    );

    let base_greeks = PricingEngine::new(*base)?.all_greeks();

    let spot_points: Vec<(f64, f64)> = config
        .spot_multipliers
        .iter()
        .map(|&m| {
            let spot = base.spot() * m;
            (spot, spot)
        })
        .collect();
    let spot_ladder = evaluate(&spot_points, |spot| base.with_spot(spot))?;

    let vol_points: Vec<(f64, f64)> = config
        .vol_shifts
        .iter()
        .map(|&shift| base.volatility() + shift)
        .filter(|&vol| vol > 0.0)
        .map(|vol| (vol, vol))
        .collect();
    let vol_ladder = evaluate(&vol_points, |vol| base.with_volatility(vol))?;

    let time_points: Vec<(f64, f64)> = config
        .days_to_expiry
        .iter()
        .map(|&days| (f64::from(days), config.years(f64::from(days))))
        .filter(|&(_, years)| years > 0.0)
        .collect();
    let time_ladder = evaluate(&time_points, |years| base.with_time_to_expiry(years))?;

    Ok(ScenarioReport {
        base_spec: *base,
        base: base_greeks,
        spot_ladder,
        vol_ladder,
        time_ladder,
    })
}

/// Price each `(label, value)` point with the spec produced by `perturb(value)`.
fn evaluate<F>(points: &[(f64, f64)], perturb: F) -> Result<Vec<ScenarioRow>>
where
    F: Fn(f64) -> Result<OptionSpec> + Sync,
{
    let row = |&(input, value): &(f64, f64)| -> Result<ScenarioRow> {
        let greeks = PricingEngine::new(perturb(value)?)?.all_greeks();
        Ok(ScenarioRow { input, greeks })
    };

    #[cfg(feature = "parallel")]
    let rows: Result<Vec<ScenarioRow>> = points.par_iter().map(row).collect();
    #[cfg(not(feature = "parallel"))]
    let rows: Result<Vec<ScenarioRow>> = points.iter().map(row).collect();
    rows
}

impl ScenarioReport {
    fn write_table(
        f: &mut fmt::Formatter<'_>,
        title: &str,
        input_header: &str,
        columns: [Metric; 2],
        rows: &[ScenarioRow],
        input_fmt: fn(f64) -> String,
    ) -> fmt::Result {
        writeln!(f, "\n{title}")?;
        writeln!(
            f,
            "{:<12} {:<12} {:<8} {:<8}",
            input_header, "Option Price", columns[0], columns[1]
        )?;
        writeln!(f, "{}", "-".repeat(TABLE_RULE_WIDTH))?;
        for row in rows {
            writeln!(
                f,
                "{:<12} ${:<11.4} {} {}",
                input_fmt(row.input),
                row.greeks.price,
                cell(columns[0], row.greeks.get(columns[0])),
                cell(columns[1], row.greeks.get(columns[1])),
            )?;
        }
        Ok(())
    }
}

/// Gamma needs six decimals to be readable; everything else gets four.
fn cell(metric: Metric, value: f64) -> String {
    match metric {
        Metric::Gamma => format!("{value:<8.6}"),
        _ => format!("{value:<8.4}"),
    }
}

/// Render the three ladders of a [`ScenarioReport`] to a string.
pub fn render_scenarios(report: &ScenarioReport) -> String {
    report.to_string()
}

impl fmt::Display for ScenarioReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let heavy = "=".repeat(WIDE_RULE_WIDTH);
        let s = &self.base_spec;

        writeln!(f, "{heavy}")?;
        writeln!(f, "SCENARIO ANALYSIS: How Parameter Changes Affect Option Pricing")?;
        writeln!(f, "{heavy}")?;
        writeln!(f, "\nBase Case Results:")?;
        writeln!(
            f,
            "Stock: ${}, Strike: ${}, Time: {:.3}yr, Rate: {:.1}%, Vol: {:.1}%",
            s.spot(),
            s.strike(),
            s.time_to_expiry(),
            s.risk_free_rate() * 100.0,
            s.volatility() * 100.0
        )?;
        writeln!(f, "Option Price: ${:.4}", self.base.price)?;

        Self::write_table(
            f,
            "1. STOCK PRICE SENSITIVITY ANALYSIS:",
            "Stock Price",
            [Metric::Delta, Metric::Gamma],
            &self.spot_ladder,
            |spot| format!("${spot:.2}"),
        )?;
        Self::write_table(
            f,
            "2. VOLATILITY SENSITIVITY ANALYSIS:",
            "Volatility",
            [Metric::Vega, Metric::Delta],
            &self.vol_ladder,
            |vol| format!("{:.1}%", vol * 100.0),
        )?;
        Self::write_table(
            f,
            "3. TIME DECAY ANALYSIS:",
            "Days Left",
            [Metric::Theta, Metric::Delta],
            &self.time_ladder,
            |days| format!("{days:.0}"),
        )
    }
}
