//! # League Analytics Engine
//!
//! This crate computes the derived statistics of a fantasy league: per-season
//! statistics keyed by team and all-time statistics keyed by owner.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of where league
//!   data comes from or where results go. It depends only on `core-types` and
//!   `configuration` (Layer 0).
//! - **Stateless Calculation:** Every statistic is a function of `(data, resolved filters)`.
//!   Filters are resolved up front by [`filters`] and passed explicitly to every call.
//! - **Exact Arithmetic:** Scores, ratios and percentages are `rust_decimal::Decimal`.
//!
//! ## Public API
//!
//! - `YearStatEngine` / `AllTimeStatEngine`: compute a full stat sheet in one call.
//! - `year` / `all_time`: the individual statistics.
//! - `FilterOptions`, `YearFilters`, `AllTimeFilters`: the query window.
//! - `AnalyticsError`: the specific error types that can be returned from this crate.

pub mod all_time;
pub mod decimal;
pub mod engine;
pub mod error;
pub mod filters;
pub mod outcome;
pub mod report;
pub mod year;

#[cfg(test)]
mod fixtures;

pub use all_time::OwnerStat;
pub use engine::{AllTimeStatEngine, YearStatEngine};
pub use error::AnalyticsError;
pub use filters::{AllTimeFilters, FilterOptions, YearFilters};
pub use outcome::MatchupOutcome;
pub use report::{AllTimeStatSheet, StatColumn, StatValue, YearStatSheet};
pub use year::TeamStat;
