//! Input validation helpers.
//!
//! Every check rejects NaN, +Inf and -Inf through `!is_finite()` before looking
//! at the sign, so a single code path covers all non-finite inputs.

use crate::error::{GreeksError, Result};

/// Strictly positive and finite (spot, strike, scenario multipliers).
pub(crate) fn validate_positive(value: f64, name: &str) -> Result<f64> {
    if !value.is_finite() || value <= 0.0 {
        return Err(GreeksError::invalid_input(format!(
            "{name} must be positive and finite, got {value}"
        )));
    }
    Ok(value)
}

/// Non-negative and finite (time to expiry, volatility).
pub(crate) fn validate_non_negative(value: f64, name: &str) -> Result<f64> {
    if !value.is_finite() || value < 0.0 {
        return Err(GreeksError::invalid_input(format!(
            "{name} must be non-negative and finite, got {value}"
        )));
    }
    Ok(value)
}

/// Finite, any sign (rates and dividend yields may be negative).
pub(crate) fn validate_finite(value: f64, name: &str) -> Result<f64> {
    if !value.is_finite() {
        return Err(GreeksError::invalid_input(format!(
            "{name} must be finite, got {value}"
        )));
    }
    Ok(value)
}
