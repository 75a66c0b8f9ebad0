//! Core domain enums for option pricing.
//!
//! The pricing engine is polymorphic only over [`OptionKind`]; there is no
//! trait hierarchy for option styles.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Option kind: call or put.
///
/// # Examples
/// ```
/// use bsgreeks::OptionKind;
/// assert_eq!(OptionKind::Call.intrinsic(110.0, 100.0), 10.0);
/// assert_eq!(OptionKind::Put.intrinsic(110.0, 100.0), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionKind {
    /// Right to buy at strike price.
    #[default]
    Call,
    /// Right to sell at strike price.
    Put,
}

impl OptionKind {
    /// Payoff if exercised immediately: `max(S - K, 0)` or `max(K - S, 0)`.
    pub fn intrinsic(self, spot: f64, strike: f64) -> f64 {
        match self {
            OptionKind::Call => (spot - strike).max(0.0),
            OptionKind::Put => (strike - spot).max(0.0),
        }
    }

    /// The other kind with identical inputs.
    pub fn opposite(self) -> Self {
        match self {
            OptionKind::Call => OptionKind::Put,
            OptionKind::Put => OptionKind::Call,
        }
    }
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionKind::Call => f.write_str("CALL"),
            OptionKind::Put => f.write_str("PUT"),
        }
    }
}

/// Relationship between spot and strike.
///
/// Classified on `spot` versus `strike` using the call convention,
/// independent of option kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Moneyness {
    /// `spot > strike`
    InTheMoney,
    /// `spot == strike`
    AtTheMoney,
    /// `spot < strike`
    OutOfTheMoney,
}

impl Moneyness {
    pub fn classify(spot: f64, strike: f64) -> Self {
        if spot > strike {
            Moneyness::InTheMoney
        } else if spot < strike {
            Moneyness::OutOfTheMoney
        } else {
            Moneyness::AtTheMoney
        }
    }
}

impl fmt::Display for Moneyness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Moneyness::InTheMoney => f.write_str("IN-THE-MONEY (S > K)"),
            Moneyness::AtTheMoney => f.write_str("AT-THE-MONEY (S = K)"),
            Moneyness::OutOfTheMoney => f.write_str("OUT-OF-THE-MONEY (S < K)"),
        }
    }
}
