//! Single-option summary report.

use std::fmt;

use crate::engine::PricingEngine;
use crate::greeks::Metric;
use crate::report::RULE_WIDTH;

/// Displayable summary of one engine.
///
/// ```
/// use bsgreeks::{OptionKind, OptionSpec, PricingEngine};
/// use bsgreeks::report::render_summary;
///
/// let spec = OptionSpec::new(45.0, 50.0, 0.25, 0.035, 0.15, 0.04, OptionKind::Put)?;
/// let text = render_summary(&PricingEngine::new(spec)?);
/// assert!(text.contains("Option Type: PUT"));
/// assert!(text.contains("OUT-OF-THE-MONEY"));
/// # Ok::<(), bsgreeks::GreeksError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Summary<'a> {
    engine: &'a PricingEngine,
}

impl<'a> Summary<'a> {
    pub fn new(engine: &'a PricingEngine) -> Self {
        Self { engine }
    }
}

/// Render [`Summary`] to a string.
pub fn render_summary(engine: &PricingEngine) -> String {
    Summary::new(engine).to_string()
}

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let e = self.engine;
        let s = e.spec();
        let heavy = "=".repeat(RULE_WIDTH);
        let light = "-".repeat(RULE_WIDTH);

        writeln!(f, "{heavy}")?;
        writeln!(f, "BLACK-SCHOLES OPTION PRICING SUMMARY")?;
        writeln!(f, "{heavy}")?;
        writeln!(f, "Option Type: {}", s.kind())?;
        writeln!(f, "Current Stock Price (S): ${:.2}", s.spot())?;
        writeln!(f, "Strike Price (K): ${:.2}", s.strike())?;
        writeln!(f, "Time to Expiration (T): {:.4} years", s.time_to_expiry())?;
        writeln!(f, "Risk-free Rate (r): {:.2}%", s.risk_free_rate() * 100.0)?;
        writeln!(f, "Volatility (σ): {:.2}%", s.volatility() * 100.0)?;
        writeln!(f, "Dividend Yield (q): {:.2}%", s.dividend_yield() * 100.0)?;
        writeln!(f, "{light}")?;
        writeln!(f, "OPTION PRICING RESULTS:")?;
        writeln!(f, "{light}")?;

        let greeks = e.all_greeks();
        for metric in Metric::ALL {
            let v = greeks.get(metric);
            match metric {
                Metric::Price => writeln!(f, "{metric}: ${v:.4}")?,
                Metric::Delta => {
                    writeln!(f, "{metric}: {v:.4} (${:.2} per $1 move)", v * 100.0)?
                }
                Metric::Gamma => writeln!(f, "{metric}: {v:.6} (Delta change per $1 move)")?,
                Metric::Theta => writeln!(f, "{metric}: {v:.4} (${v:.4} per day)")?,
                Metric::Vega => writeln!(f, "{metric}: {v:.4} (per 1% volatility change)")?,
                Metric::Rho => writeln!(f, "{metric}: {v:.4} (per 1% rate change)")?,
            }
        }

        writeln!(f, "{light}")?;
        writeln!(f, "Option is {}", e.moneyness())?;
        writeln!(f, "Intrinsic Value: ${:.4}", e.intrinsic_value())?;
        writeln!(f, "Time Value: ${:.4}", e.time_value())?;
        writeln!(f, "{heavy}")
    }
}
