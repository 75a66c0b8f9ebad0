//! Text reports over [`PricingEngine`](crate::PricingEngine) results.
//!
//! Renderers never do pricing math of their own; every number comes from an
//! engine query or from [`GreeksResult`](crate::GreeksResult) fields.
//!
//! - [`Summary`]: single-option report (inputs, Greeks, moneyness, value split)
//! - [`scenario_analysis`]: spot / volatility / time-decay ladders
//! - [`compare_call_put`]: call and put side by side with a parity check

pub mod compare;
pub mod scenario;
pub mod summary;

pub use compare::{Comparison, ParityCheck, compare_call_put, render_comparison};
pub use scenario::{ScenarioReport, ScenarioRow, render_scenarios, scenario_analysis};
pub use summary::{Summary, render_summary};

/// Full-width rule used by all reports.
pub(crate) const RULE_WIDTH: usize = 60;
pub(crate) const WIDE_RULE_WIDTH: usize = 80;
pub(crate) const TABLE_RULE_WIDTH: usize = 50;
