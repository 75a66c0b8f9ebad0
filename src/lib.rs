//! # bsgreeks
//!
//! Black-Scholes-Merton pricing and Greeks for European options.
//!
//! Takes six scalars plus a call/put tag and returns the fair value with
//! delta, gamma, theta, vega and rho, handling the expiry boundary (`T = 0`)
//! explicitly instead of evaluating 0/0.
//!
//! ## Architecture
//!
//! - **`spec`**: Validated input record ([`OptionSpec`]) and its builder
//! - **`engine`**: Closed-form evaluator ([`PricingEngine`])
//! - **`report`**: Text renderers: summary, scenario ladders, call vs put
//! - **`session`**: Interactive prompt loop over any `BufRead` / `Write`
//! - **`config`**: Scenario ladder configuration ([`ScenarioConfig`])
//!
//! ## Design
//!
//! - **Validated at construction.** Non-positive spot or strike, negative time
//!   or volatility, and NaN / infinite inputs are rejected with
//!   [`GreeksError::InvalidInput`]. Zero volatility before expiry, or inputs
//!   whose price or Greeks overflow, are [`GreeksError::DegenerateMath`].
//!   NaN never reaches a report.
//! - **Immutable, `Copy` values.** An engine precomputes d1 / d2 once; queries
//!   are pure and repeatable. Engines share nothing and can be priced from any
//!   number of threads.
//! - **No panics.** Library code never calls `unwrap()` or `expect()`.
//!
//! ```
//! use bsgreeks::{OptionKind, OptionSpec, PricingEngine};
//!
//! let spec = OptionSpec::builder()
//!     .spot(150.0)
//!     .strike(155.0)
//!     .time_to_expiry(45.0 / 365.0)
//!     .risk_free_rate(0.045)
//!     .volatility(0.25)
//!     .kind(OptionKind::Call)
//!     .build()?;
//!
//! let greeks = PricingEngine::new(spec)?.all_greeks();
//! assert!(greeks.price > 0.0);
//! assert!(greeks.theta < 0.0);
//! # Ok::<(), bsgreeks::GreeksError>(())
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod greeks;
pub mod normal;
pub mod report;
pub mod session;
pub mod spec;
pub mod types;
mod validate;

#[doc(inline)]
pub use config::ScenarioConfig;
#[doc(inline)]
pub use engine::PricingEngine;
#[doc(inline)]
pub use error::{GreeksError, Result};
#[doc(inline)]
pub use greeks::{GreeksResult, Metric};
#[doc(inline)]
pub use spec::{OptionSpec, OptionSpecBuilder};
#[doc(inline)]
pub use types::{Moneyness, OptionKind};
