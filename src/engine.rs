//! Closed-form Black-Scholes-Merton pricing engine.
//!
//! # Formulas
//! ```text
//! d1 = (ln(S/K) + (r - q + σ²/2)·T) / (σ·√T)
//! d2 = d1 - σ·√T
//! C  = S·e^(-qT)·N(d1) - K·e^(-rT)·N(d2)
//! P  = K·e^(-rT)·N(-d2) - S·e^(-qT)·N(-d1)
//! ```
//!
//! At `T = 0` the general formula is 0/0. d1 is then taken as its limit
//! (`0`, `+inf` or `-inf` by the sign of `S - K`), `d2 = d1`, the price is
//! the payoff and every Greek except delta is zero.

use crate::error::{GreeksError, Result};
use crate::greeks::GreeksResult;
use crate::normal::{norm_cdf, norm_pdf};
use crate::spec::OptionSpec;
use crate::types::{Moneyness, OptionKind};

/// Calendar days per year used to express theta as daily decay.
const DAYS_PER_YEAR: f64 = 365.0;
/// Scale from "per unit" to "per percentage point" for vega and rho.
const PER_POINT: f64 = 100.0;

/// Pricing engine for one European option.
///
/// Immutable after construction: d1, d2, √T and both discount factors are
/// computed once in [`PricingEngine::new`], so every query is O(1) and
/// repeated queries return bit-identical values.
///
/// # Examples
/// ```
/// use bsgreeks::{OptionKind, OptionSpec, PricingEngine};
///
/// let spec = OptionSpec::new(100.0, 100.0, 1.0, 0.05, 0.20, 0.0, OptionKind::Call)?;
/// let engine = PricingEngine::new(spec)?;
///
/// assert!((engine.price() - 10.4506).abs() < 1e-4);
/// assert!((engine.delta() - 0.6368).abs() < 1e-4);
/// # Ok::<(), bsgreeks::GreeksError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricingEngine {
    spec: OptionSpec,
    d1: f64,
    d2: f64,
    sqrt_t: f64,
    /// e^(-qT)
    dividend_discount: f64,
    /// e^(-rT)
    rate_discount: f64,
}

impl PricingEngine {
    /// Build an engine and precompute d1 / d2.
    ///
    /// # Errors
    /// Returns [`GreeksError::DegenerateMath`] if `volatility == 0` while
    /// time remains, or if d1, d2, a discount factor, the price or any Greek
    /// is not finite.
    pub fn new(spec: OptionSpec) -> Result<Self> {
        let t = spec.time_to_expiry();
        let sigma = spec.volatility();
        let sqrt_t = t.sqrt();

        let dividend_discount = (-spec.dividend_yield() * t).exp();
        let rate_discount = (-spec.risk_free_rate() * t).exp();
        if !dividend_discount.is_finite() || !rate_discount.is_finite() {
            return Err(degenerate(
                &spec,
                format!("discount factor overflow: e^(-qT) = {dividend_discount}, e^(-rT) = {rate_discount}"),
            ));
        }

        let (d1, d2) = if t == 0.0 {
            let d1 = expiry_d1(spec.spot(), spec.strike());
            (d1, d1)
        } else {
            if sigma == 0.0 {
                return Err(degenerate(
                    &spec,
                    format!("volatility is zero with {t} years to expiry; d1 divides by zero"),
                ));
            }
            let vol_sqrt_t = sigma * sqrt_t;
            let d1 = ((spec.spot() / spec.strike()).ln()
                + (spec.risk_free_rate() - spec.dividend_yield() + 0.5 * sigma * sigma) * t)
                / vol_sqrt_t;
            let d2 = d1 - vol_sqrt_t;
            if !d1.is_finite() || !d2.is_finite() {
                return Err(degenerate(
                    &spec,
                    format!("d1 = {d1}, d2 = {d2} are not finite"),
                ));
            }
            (d1, d2)
        };

        #[cfg(feature = "logging")]
        tracing::debug!(
            spot = spec.spot(),
            strike = spec.strike(),
            time = t,
            rate = spec.risk_free_rate(),
            vol = sigma,
            dividend = spec.dividend_yield(),
            kind = %spec.kind(),
            d1,
            d2,
            "pricing engine built"
        );

        let engine = Self {
            spec,
            d1,
            d2,
            sqrt_t,
            dividend_discount,
            rate_discount,
        };
        let greeks = engine.all_greeks();
        if !greeks.is_finite() {
            return Err(degenerate(
                &spec,
                format!("price or a Greek is not finite: {greeks:?}"),
            ));
        }
        Ok(engine)
    }

    /// Inputs this engine was built from.
    pub fn spec(&self) -> &OptionSpec {
        &self.spec
    }

    pub fn d1(&self) -> f64 {
        self.d1
    }

    pub fn d2(&self) -> f64 {
        self.d2
    }

    fn at_expiry(&self) -> bool {
        self.spec.time_to_expiry() == 0.0
    }

    /// Theoretical value; the payoff itself at expiry.
    pub fn price(&self) -> f64 {
        let s = &self.spec;
        if self.at_expiry() {
            return s.kind().intrinsic(s.spot(), s.strike());
        }
        let fwd_spot = s.spot() * self.dividend_discount;
        let pv_strike = s.strike() * self.rate_discount;
        match s.kind() {
            OptionKind::Call => fwd_spot * norm_cdf(self.d1) - pv_strike * norm_cdf(self.d2),
            OptionKind::Put => pv_strike * norm_cdf(-self.d2) - fwd_spot * norm_cdf(-self.d1),
        }
    }

    /// dV/dS. At expiry: 1 / 0 for calls, -1 / 0 for puts.
    pub fn delta(&self) -> f64 {
        let s = &self.spec;
        if self.at_expiry() {
            return match s.kind() {
                OptionKind::Call if s.spot() > s.strike() => 1.0,
                OptionKind::Put if s.spot() < s.strike() => -1.0,
                _ => 0.0,
            };
        }
        match s.kind() {
            OptionKind::Call => self.dividend_discount * norm_cdf(self.d1),
            OptionKind::Put => -self.dividend_discount * norm_cdf(-self.d1),
        }
    }

    /// d²V/dS², identical for calls and puts.
    pub fn gamma(&self) -> f64 {
        if self.at_expiry() {
            return 0.0;
        }
        let s = &self.spec;
        self.dividend_discount * norm_pdf(self.d1) / (s.spot() * s.volatility() * self.sqrt_t)
    }

    /// Time decay per calendar day (annual theta / 365).
    pub fn theta(&self) -> f64 {
        if self.at_expiry() {
            return 0.0;
        }
        let s = &self.spec;
        let fwd_spot = s.spot() * self.dividend_discount;
        let pv_strike = s.strike() * self.rate_discount;
        let decay = -(fwd_spot * norm_pdf(self.d1) * s.volatility()) / (2.0 * self.sqrt_t);
        let annual = match s.kind() {
            OptionKind::Call => {
                decay + s.dividend_yield() * fwd_spot * norm_cdf(self.d1)
                    - s.risk_free_rate() * pv_strike * norm_cdf(self.d2)
            }
            OptionKind::Put => {
                decay - s.dividend_yield() * fwd_spot * norm_cdf(-self.d1)
                    + s.risk_free_rate() * pv_strike * norm_cdf(-self.d2)
            }
        };
        annual / DAYS_PER_YEAR
    }

    /// Value change for a one point (0.01) volatility move.
    pub fn vega(&self) -> f64 {
        if self.at_expiry() {
            return 0.0;
        }
        self.spec.spot() * self.dividend_discount * norm_pdf(self.d1) * self.sqrt_t / PER_POINT
    }

    /// Value change for a one point (0.01) rate move.
    pub fn rho(&self) -> f64 {
        if self.at_expiry() {
            return 0.0;
        }
        let s = &self.spec;
        let k_t_df = s.strike() * s.time_to_expiry() * self.rate_discount;
        match s.kind() {
            OptionKind::Call => k_t_df * norm_cdf(self.d2) / PER_POINT,
            OptionKind::Put => -k_t_df * norm_cdf(-self.d2) / PER_POINT,
        }
    }

    /// Price and all five Greeks in one record.
    pub fn all_greeks(&self) -> GreeksResult {
        GreeksResult {
            price: self.price(),
            delta: self.delta(),
            gamma: self.gamma(),
            theta: self.theta(),
            vega: self.vega(),
            rho: self.rho(),
        }
    }

    pub fn moneyness(&self) -> Moneyness {
        Moneyness::classify(self.spec.spot(), self.spec.strike())
    }

    /// Immediate-exercise payoff.
    pub fn intrinsic_value(&self) -> f64 {
        self.spec.kind().intrinsic(self.spec.spot(), self.spec.strike())
    }

    /// `price - intrinsic`. Can be negative for deep in-the-money European puts.
    pub fn time_value(&self) -> f64 {
        self.price() - self.intrinsic_value()
    }
}

/// Limit of d1 as T -> 0.
fn expiry_d1(spot: f64, strike: f64) -> f64 {
    if spot > strike {
        f64::INFINITY
    } else if spot < strike {
        f64::NEG_INFINITY
    } else {
        0.0
    }
}

fn degenerate(spec: &OptionSpec, message: String) -> GreeksError {
    #[cfg(feature = "logging")]
    tracing::warn!(?spec, %message, "rejecting degenerate pricing inputs");
    #[cfg(not(feature = "logging"))]
    let _ = spec;
    GreeksError::degenerate(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn engine(spot: f64, strike: f64, t: f64, r: f64, vol: f64, q: f64, kind: OptionKind) -> PricingEngine {
        PricingEngine::new(OptionSpec::new(spot, strike, t, r, vol, q, kind).unwrap()).unwrap()
    }

    // --- Textbook benchmark: S=K=100, T=1, r=5%, σ=20% ---

    #[test]
    fn textbook_call() {
        let e = engine(100.0, 100.0, 1.0, 0.05, 0.2, 0.0, OptionKind::Call);
        assert_abs_diff_eq!(e.d1(), 0.35, epsilon = 1e-12);
        assert_abs_diff_eq!(e.d2(), 0.15, epsilon = 1e-12);
        assert_abs_diff_eq!(e.price(), 10.450_583_572_185_565, epsilon = 1e-9);
        assert_abs_diff_eq!(e.delta(), 0.636_830_651_175_619, epsilon = 1e-9);
        assert_abs_diff_eq!(e.gamma(), 0.018_762_017_345_847, epsilon = 1e-9);
        assert_abs_diff_eq!(e.vega(), 0.375_240_346_916_938, epsilon = 1e-9);
        assert_abs_diff_eq!(e.theta(), -6.414_027_546_438_197 / 365.0, epsilon = 1e-9);
        assert_abs_diff_eq!(e.rho(), 0.532_324_815_453_763, epsilon = 1e-9);
    }

    #[test]
    fn textbook_put() {
        let e = engine(100.0, 100.0, 1.0, 0.05, 0.2, 0.0, OptionKind::Put);
        assert_abs_diff_eq!(e.price(), 5.573_526_022_256_971, epsilon = 1e-9);
        assert_abs_diff_eq!(e.delta(), -0.363_169_348_824_381, epsilon = 1e-9);
        assert_abs_diff_eq!(e.rho(), -0.418_904_609_046_951, epsilon = 1e-9);
    }

    #[test]
    fn gamma_and_vega_match_between_kinds() {
        let c = engine(95.0, 100.0, 0.5, 0.03, 0.3, 0.01, OptionKind::Call);
        let p = engine(95.0, 100.0, 0.5, 0.03, 0.3, 0.01, OptionKind::Put);
        assert_eq!(c.gamma(), p.gamma());
        assert_eq!(c.vega(), p.vega());
        assert_eq!(c.d1(), p.d1());
    }

    // --- Expiry boundary ---

    #[test]
    fn expiry_d1_sign_rule() {
        assert_eq!(engine(110.0, 100.0, 0.0, 0.05, 0.2, 0.0, OptionKind::Call).d1(), f64::INFINITY);
        assert_eq!(engine(90.0, 100.0, 0.0, 0.05, 0.2, 0.0, OptionKind::Call).d1(), f64::NEG_INFINITY);
        let atm = engine(100.0, 100.0, 0.0, 0.05, 0.2, 0.0, OptionKind::Call);
        assert_eq!(atm.d1(), 0.0);
        assert_eq!(atm.d2(), atm.d1());
    }

    #[test]
    fn expiry_price_is_payoff() {
        assert_eq!(engine(110.0, 100.0, 0.0, 0.05, 0.2, 0.0, OptionKind::Call).price(), 10.0);
        assert_eq!(engine(110.0, 100.0, 0.0, 0.05, 0.2, 0.0, OptionKind::Put).price(), 0.0);
        assert_eq!(engine(90.0, 100.0, 0.0, 0.05, 0.2, 0.0, OptionKind::Put).price(), 10.0);
    }

    #[test]
    fn expiry_zero_vol_is_fine() {
        let e = engine(90.0, 100.0, 0.0, 0.05, 0.0, 0.0, OptionKind::Put);
        let g = e.all_greeks();
        assert_eq!(g.price, 10.0);
        assert_eq!(g.delta, -1.0);
        assert_eq!((g.gamma, g.theta, g.vega, g.rho), (0.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn expiry_delta_table() {
        let cases = [
            (110.0, OptionKind::Call, 1.0),
            (100.0, OptionKind::Call, 0.0),
            (90.0, OptionKind::Call, 0.0),
            (110.0, OptionKind::Put, 0.0),
            (100.0, OptionKind::Put, 0.0),
            (90.0, OptionKind::Put, -1.0),
        ];
        for (spot, kind, expected) in cases {
            assert_eq!(engine(spot, 100.0, 0.0, 0.05, 0.2, 0.0, kind).delta(), expected);
        }
    }

    // --- Degenerate inputs ---

    #[test]
    fn zero_vol_with_time_is_degenerate() {
        let spec = OptionSpec::new(100.0, 100.0, 0.5, 0.05, 0.0, 0.0, OptionKind::Call).unwrap();
        let r = PricingEngine::new(spec);
        assert!(matches!(r, Err(GreeksError::DegenerateMath { .. })));
    }

    #[test]
    fn subnormal_vol_is_degenerate() {
        let spec = OptionSpec::new(100.0, 90.0, 1e-300, 0.05, 1e-300, 0.0, OptionKind::Call).unwrap();
        let r = PricingEngine::new(spec);
        assert!(matches!(r, Err(GreeksError::DegenerateMath { .. })));
    }

    #[test]
    fn discount_overflow_is_degenerate() {
        let spec = OptionSpec::new(100.0, 100.0, 10.0, -100.0, 0.2, 0.0, OptionKind::Call).unwrap();
        let r = PricingEngine::new(spec);
        assert!(matches!(r, Err(GreeksError::DegenerateMath { .. })));
    }

    #[test]
    fn underflowing_gamma_denominator_is_degenerate() {
        // S·σ·√T underflows to zero while phi(d1) stays near its peak
        let spec =
            OptionSpec::new(1e-300, 1e-300, 1e-30, 0.05, 1e-15, 0.0, OptionKind::Call).unwrap();
        let r = PricingEngine::new(spec);
        match r {
            Err(GreeksError::DegenerateMath { message }) => assert!(message.contains("not finite")),
            other => panic!("expected DegenerateMath, got {other:?}"),
        }
    }

    // --- Report support ---

    #[test]
    fn intrinsic_and_time_value() {
        let e = engine(110.0, 100.0, 0.25, 0.05, 0.2, 0.0, OptionKind::Call);
        assert_eq!(e.intrinsic_value(), 10.0);
        assert_abs_diff_eq!(e.time_value(), e.price() - 10.0, epsilon = 0.0);
        assert!(e.time_value() > 0.0);
        assert_eq!(e.moneyness(), Moneyness::InTheMoney);
    }

    #[test]
    fn deep_itm_put_time_value_can_be_negative() {
        let e = engine(20.0, 100.0, 2.0, 0.10, 0.2, 0.0, OptionKind::Put);
        assert!(e.time_value() < 0.0);
    }

    #[test]
    fn all_greeks_is_idempotent() {
        let e = engine(150.0, 155.0, 45.0 / 365.0, 0.045, 0.25, 0.0, OptionKind::Call);
        let a = e.all_greeks();
        let b = e.all_greeks();
        assert_eq!(a, b);
        assert_eq!(a.price, e.price());
    }

    #[test]
    fn engine_is_send_sync_copy() {
        fn assert_traits<T: Send + Sync + Copy>() {}
        assert_traits::<PricingEngine>();
    }
}
