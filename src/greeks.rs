//! Pricing output record.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Fair value and first-order sensitivities of one option.
///
/// Units follow desk conventions: theta per calendar day, vega per one
/// volatility point, rho per one rate point.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GreeksResult {
    /// Theoretical option value.
    pub price: f64,
    /// dV/dS
    pub delta: f64,
    /// d²V/dS²
    pub gamma: f64,
    /// Value decay per calendar day.
    pub theta: f64,
    /// Value change per 1% volatility move.
    pub vega: f64,
    /// Value change per 1% rate move.
    pub rho: f64,
}

impl GreeksResult {
    /// Field lookup by [`Metric`], used by tabular reports.
    pub fn get(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Price => self.price,
            Metric::Delta => self.delta,
            Metric::Gamma => self.gamma,
            Metric::Theta => self.theta,
            Metric::Vega => self.vega,
            Metric::Rho => self.rho,
        }
    }

    pub fn is_finite(&self) -> bool {
        Metric::ALL.iter().all(|&m| self.get(m).is_finite())
    }
}

/// Names one field of a [`GreeksResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Metric {
    Price,
    Delta,
    Gamma,
    Theta,
    Vega,
    Rho,
}

impl Metric {
    /// Report order.
    pub const ALL: [Metric; 6] = [
        Metric::Price,
        Metric::Delta,
        Metric::Gamma,
        Metric::Theta,
        Metric::Vega,
        Metric::Rho,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Metric::Price => "Price",
            Metric::Delta => "Delta",
            Metric::Gamma => "Gamma",
            Metric::Theta => "Theta",
            Metric::Vega => "Vega",
            Metric::Rho => "Rho",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> GreeksResult {
        GreeksResult {
            price: 10.45,
            delta: 0.64,
            gamma: 0.019,
            theta: -0.018,
            vega: 0.375,
            rho: 0.53,
        }
    }

    #[test]
    fn get_maps_every_metric() {
        let g = sample();
        let values: Vec<f64> = Metric::ALL.iter().map(|&m| g.get(m)).collect();
        assert_eq!(values, vec![10.45, 0.64, 0.019, -0.018, 0.375, 0.53]);
    }

    #[test]
    fn finite_check() {
        assert!(sample().is_finite());
        let bad = GreeksResult {
            gamma: f64::NAN,
            ..sample()
        };
        assert!(!bad.is_finite());
    }

    #[test]
    fn metric_names() {
        assert_eq!(Metric::Theta.to_string(), "Theta");
        assert_eq!(Metric::ALL[0], Metric::Price);
    }

    #[test]
    fn serde_field_names() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["price"], 10.45);
        assert_eq!(json["rho"], 0.53);
    }
}
