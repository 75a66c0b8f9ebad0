//! Call versus put comparison with a put-call parity check.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::engine::PricingEngine;
use crate::error::Result;
use crate::greeks::{GreeksResult, Metric};
use crate::report::{TABLE_RULE_WIDTH, WIDE_RULE_WIDTH};
use crate::spec::OptionSpec;
use crate::types::OptionKind;

/// `C - P` against `S·e^(-qT) - K·e^(-rT)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParityCheck {
    pub call_minus_put: f64,
    pub discounted_forward_minus_strike: f64,
    /// Absolute gap between the two sides.
    pub difference: f64,
}

/// Call and put priced on identical inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    pub call: GreeksResult,
    pub put: GreeksResult,
    pub parity: ParityCheck,
}

/// Price both kinds for `spec`'s inputs; the result does not depend on `spec.kind()`.
///
/// ```
/// use bsgreeks::{OptionKind, OptionSpec};
/// use bsgreeks::report::compare_call_put;
///
/// let spec = OptionSpec::new(100.0, 100.0, 1.0, 0.05, 0.2, 0.0, OptionKind::Call)?;
/// let cmp = compare_call_put(&spec)?;
/// assert!(cmp.parity.difference < 1e-10);
/// # Ok::<(), bsgreeks::GreeksError>(())
/// ```
///
/// # Errors
/// Returns [`GreeksError::DegenerateMath`](crate::GreeksError::DegenerateMath)
/// when the inputs cannot be priced.
pub fn compare_call_put(spec: &OptionSpec) -> Result<Comparison> {
    let given = PricingEngine::new(*spec)?.all_greeks();
    let other = PricingEngine::new(spec.with_kind(spec.kind().opposite()))?.all_greeks();
    let (call, put) = match spec.kind() {
        OptionKind::Call => (given, other),
        OptionKind::Put => (other, given),
    };

    let t = spec.time_to_expiry();
    let call_minus_put = call.price - put.price;
    let discounted_forward_minus_strike = spec.spot() * (-spec.dividend_yield() * t).exp()
        - spec.strike() * (-spec.risk_free_rate() * t).exp();

    Ok(Comparison {
        call,
        put,
        parity: ParityCheck {
            call_minus_put,
            discounted_forward_minus_strike,
            difference: (call_minus_put - discounted_forward_minus_strike).abs(),
        },
    })
}

/// Render a [`Comparison`] table and its parity check to a string.
pub fn render_comparison(comparison: &Comparison) -> String {
    comparison.to_string()
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let heavy = "=".repeat(WIDE_RULE_WIDTH);
        writeln!(f, "{heavy}")?;
        writeln!(f, "CALL vs PUT COMPARISON")?;
        writeln!(f, "{heavy}")?;
        writeln!(f, "{:<15} {:<15} {:<15}", "Metric", "Call Option", "Put Option")?;
        writeln!(f, "{}", "-".repeat(TABLE_RULE_WIDTH))?;

        for metric in Metric::ALL {
            let (c, p) = (self.call.get(metric), self.put.get(metric));
            if metric == Metric::Price {
                writeln!(f, "{:<15} ${c:<14.4} ${p:<14.4}", metric.name())?;
            } else {
                writeln!(f, "{:<15} {c:<15.4} {p:<15.4}", metric.name())?;
            }
        }

        writeln!(f, "\nPUT-CALL PARITY CHECK:")?;
        writeln!(f, "Call - Put = {:.4}", self.parity.call_minus_put)?;
        writeln!(f, "S*e^(-qT) - K*e^(-rT) = {:.4}", self.parity.discounted_forward_minus_strike)?;
        writeln!(f, "Difference = {:.6}", self.parity.difference)
    }
}
