//! Option contract inputs for the Black-Scholes-Merton model.
//!
//! ```
//! use bsgreeks::{OptionKind, OptionSpec};
//!
//! let spec = OptionSpec::builder()
//!     .spot(100.0)
//!     .strike(100.0)
//!     .time_to_expiry(1.0)
//!     .risk_free_rate(0.05)
//!     .volatility(0.20)
//!     .kind(OptionKind::Put)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(spec.dividend_yield(), 0.0);
//! assert_eq!(spec.kind(), OptionKind::Put);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{GreeksError, Result};
use crate::types::OptionKind;
use crate::validate::{validate_finite, validate_non_negative, validate_positive};

/// Validated, immutable pricing inputs.
///
/// Rates, yields and volatility are decimal fractions (0.05 = 5%), time is
/// in years. Zero volatility is accepted here because it is well defined at
/// expiry; the engine rejects it when time remains.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "OptionSpecRaw", into = "OptionSpecRaw")]
pub struct OptionSpec {
    spot: f64,
    strike: f64,
    time_to_expiry: f64,
    risk_free_rate: f64,
    volatility: f64,
    dividend_yield: f64,
    kind: OptionKind,
}

/// Unvalidated mirror used for deserialization.
#[derive(Serialize, Deserialize)]
struct OptionSpecRaw {
    spot: f64,
    strike: f64,
    time_to_expiry: f64,
    risk_free_rate: f64,
    volatility: f64,
    #[serde(default)]
    dividend_yield: f64,
    #[serde(default)]
    kind: OptionKind,
}

impl TryFrom<OptionSpecRaw> for OptionSpec {
    type Error = GreeksError;
    fn try_from(raw: OptionSpecRaw) -> std::result::Result<Self, Self::Error> {
        Self::new(
            raw.spot,
            raw.strike,
            raw.time_to_expiry,
            raw.risk_free_rate,
            raw.volatility,
            raw.dividend_yield,
            raw.kind,
        )
    }
}

impl From<OptionSpec> for OptionSpecRaw {
    fn from(s: OptionSpec) -> Self {
        Self {
            spot: s.spot,
            strike: s.strike,
            time_to_expiry: s.time_to_expiry,
            risk_free_rate: s.risk_free_rate,
            volatility: s.volatility,
            dividend_yield: s.dividend_yield,
            kind: s.kind,
        }
    }
}

impl OptionSpec {
    /// Create a validated option spec.
    ///
    /// # Errors
    /// Returns [`GreeksError::InvalidInput`] if `spot <= 0`, `strike <= 0`,
    /// `time_to_expiry < 0`, `volatility < 0`, or any value is NaN / infinite.
    pub fn new(
        spot: f64,
        strike: f64,
        time_to_expiry: f64,
        risk_free_rate: f64,
        volatility: f64,
        dividend_yield: f64,
        kind: OptionKind,
    ) -> Result<Self> {
        validate_positive(spot, "spot")?;
        validate_positive(strike, "strike")?;
        validate_non_negative(time_to_expiry, "time_to_expiry")?;
        validate_finite(risk_free_rate, "risk_free_rate")?;
        validate_non_negative(volatility, "volatility")?;
        validate_finite(dividend_yield, "dividend_yield")?;

        Ok(Self {
            spot,
            strike,
            time_to_expiry,
            risk_free_rate,
            volatility,
            dividend_yield,
            kind,
        })
    }

    /// Start a builder; dividend yield defaults to 0 and kind to Call.
    pub fn builder() -> OptionSpecBuilder {
        OptionSpecBuilder::default()
    }

    pub fn spot(&self) -> f64 {
        self.spot
    }

    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Years until expiration.
    pub fn time_to_expiry(&self) -> f64 {
        self.time_to_expiry
    }

    /// Continuously compounded annual rate.
    pub fn risk_free_rate(&self) -> f64 {
        self.risk_free_rate
    }

    /// Annualized volatility.
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Continuous annual dividend yield.
    pub fn dividend_yield(&self) -> f64 {
        self.dividend_yield
    }

    pub fn kind(&self) -> OptionKind {
        self.kind
    }

    /// Copy with a different spot, revalidated.
    pub fn with_spot(&self, spot: f64) -> Result<Self> {
        Self::new(
            spot,
            self.strike,
            self.time_to_expiry,
            self.risk_free_rate,
            self.volatility,
            self.dividend_yield,
            self.kind,
        )
    }

    /// Copy with a different volatility, revalidated.
    pub fn with_volatility(&self, volatility: f64) -> Result<Self> {
        Self::new(
            self.spot,
            self.strike,
            self.time_to_expiry,
            self.risk_free_rate,
            volatility,
            self.dividend_yield,
            self.kind,
        )
    }

    /// Copy with a different time to expiry, revalidated.
    pub fn with_time_to_expiry(&self, time_to_expiry: f64) -> Result<Self> {
        Self::new(
            self.spot,
            self.strike,
            time_to_expiry,
            self.risk_free_rate,
            self.volatility,
            self.dividend_yield,
            self.kind,
        )
    }

    /// Copy with a different option kind. Cannot fail.
    pub fn with_kind(&self, kind: OptionKind) -> Self {
        Self { kind, ..*self }
    }
}

/// Builder for [`OptionSpec`].
#[derive(Debug, Clone, Default)]
pub struct OptionSpecBuilder {
    spot: Option<f64>,
    strike: Option<f64>,
    time_to_expiry: Option<f64>,
    risk_free_rate: Option<f64>,
    volatility: Option<f64>,
    dividend_yield: f64,
    kind: OptionKind,
}

impl OptionSpecBuilder {
    pub fn spot(mut self, spot: f64) -> Self {
        self.spot = Some(spot);
        self
    }

    pub fn strike(mut self, strike: f64) -> Self {
        self.strike = Some(strike);
        self
    }

    pub fn time_to_expiry(mut self, years: f64) -> Self {
        self.time_to_expiry = Some(years);
        self
    }

    pub fn risk_free_rate(mut self, rate: f64) -> Self {
        self.risk_free_rate = Some(rate);
        self
    }

    pub fn volatility(mut self, vol: f64) -> Self {
        self.volatility = Some(vol);
        self
    }

    pub fn dividend_yield(mut self, q: f64) -> Self {
        self.dividend_yield = q;
        self
    }

    pub fn kind(mut self, kind: OptionKind) -> Self {
        self.kind = kind;
        self
    }

    /// Validate and build.
    ///
    /// # Errors
    /// Returns [`GreeksError::InvalidInput`] if a required field is missing
    /// or any value fails [`OptionSpec::new`] validation.
    pub fn build(self) -> Result<OptionSpec> {
        let spot = require(self.spot, "spot")?;
        let strike = require(self.strike, "strike")?;
        let time = require(self.time_to_expiry, "time_to_expiry")?;
        let rate = require(self.risk_free_rate, "risk_free_rate")?;
        let vol = require(self.volatility, "volatility")?;
        OptionSpec::new(
            spot,
            strike,
            time,
            rate,
            vol,
            self.dividend_yield,
            self.kind,
        )
    }
}

fn require(value: Option<f64>, name: &str) -> Result<f64> {
    value.ok_or_else(|| GreeksError::invalid_input(format!("{name} is required")))
}
