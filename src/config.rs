//! Scenario sweep configuration.
//!
//! Loaded from JSON; any field left out falls back to its default ladder.
//!
//! ```
//! use bsgreeks::ScenarioConfig;
//!
//! let cfg = ScenarioConfig::from_json_str(r#"{ "days_to_expiry": [30, 7] }"#).unwrap();
//! assert_eq!(cfg.days_to_expiry, vec![30, 7]);
//! assert_eq!(cfg.spot_multipliers.len(), 5);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{GreeksError, Result};
use crate::validate::{validate_finite, validate_positive};

/// Ladders used by [`scenario_analysis`](crate::report::scenario_analysis).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScenarioConfig {
    /// Spot is re-priced at `spot * m` for each multiplier.
    pub spot_multipliers: Vec<f64>,
    /// Absolute volatility shifts (0.05 = +5 vol points). Shifted vols <= 0 are skipped.
    pub vol_shifts: Vec<f64>,
    /// Remaining calendar days for the time-decay ladder.
    pub days_to_expiry: Vec<u32>,
    /// Days per year for day -> year conversion.
    pub day_count: f64,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            spot_multipliers: vec![0.9, 0.95, 1.0, 1.05, 1.1],
            vol_shifts: vec![-0.10, -0.05, 0.0, 0.05, 0.10],
            days_to_expiry: vec![90, 60, 30, 15, 7],
            day_count: 365.0,
        }
    }
}

impl ScenarioConfig {
    /// Parse and validate a JSON document.
    ///
    /// # Errors
    /// Returns [`GreeksError::Config`] on malformed JSON or out-of-range values.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(json)
            .map_err(|e| GreeksError::config(format!("cannot parse scenario config: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read, parse and validate a JSON file.
    ///
    /// # Errors
    /// Returns [`GreeksError::Io`] if the file cannot be read, otherwise as
    /// [`ScenarioConfig::from_json_str`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        #[cfg(feature = "logging")]
        tracing::debug!(path = %path.as_ref().display(), "loading scenario config");
        Self::from_json_str(&text)
    }

    /// Check every ladder entry.
    ///
    /// # Errors
    /// Returns [`GreeksError::Config`] naming the first offending value.
    pub fn validate(&self) -> Result<()> {
        let as_config = |e: GreeksError| match e {
            GreeksError::InvalidInput { message } => GreeksError::config(message),
            other => other,
        };
        for &m in &self.spot_multipliers {
            validate_positive(m, "spot multiplier").map_err(as_config)?;
        }
        for &shift in &self.vol_shifts {
            validate_finite(shift, "vol shift").map_err(as_config)?;
        }
        if let Some(&zero) = self.days_to_expiry.iter().find(|&&d| d == 0) {
            return Err(GreeksError::config(format!(
                "days to expiry must be positive, got {zero}"
            )));
        }
        validate_positive(self.day_count, "day_count").map_err(as_config)?;
        Ok(())
    }

    /// Convert calendar days to years with this config's day count.
    pub fn years(&self, days: f64) -> f64 {
        days / self.day_count
    }
}
