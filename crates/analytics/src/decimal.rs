//! Exact decimal helpers shared by every ratio and percentage statistic.
//!
//! Constants are written with `dec!`, which parses the literal text, so no value in
//! this crate ever passes through a binary float.

use crate::error::AnalyticsError;
use rust_decimal::prelude::*;
use rust_decimal_macros::dec;

pub const HALF: Decimal = dec!(0.5);
pub const ONE_HUNDRED: Decimal = dec!(100);

/// `numerator / denominator`, or zero when the denominator is zero.
pub fn ratio(numerator: Decimal, denominator: Decimal) -> Decimal {
    if denominator.is_zero() {
        Decimal::ZERO
    } else {
        numerator / denominator
    }
}

/// Divides a total by games played, yielding zero for a team that has not played.
pub fn per_game(total: Decimal, games_played: u32) -> Decimal {
    ratio(total, Decimal::from(games_played))
}

/// `part` as a percentage of `whole`, zero when `whole` is zero.
pub fn percentage(part: Decimal, whole: Decimal) -> Decimal {
    ratio(part, whole) * ONE_HUNDRED
}

/// Wins plus half a win for every tie.
pub fn wins_with_half_ties(wins: u32, ties: u32) -> Decimal {
    Decimal::from(wins) + Decimal::from(ties) * HALF
}

fn overflow(operation: &str) -> AnalyticsError {
    AnalyticsError::Calculation(format!("Decimal overflow while calculating {operation}"))
}

/// Sums values, failing with `Calculation` instead of overflowing.
pub fn checked_total<'a>(values: impl IntoIterator<Item = &'a Decimal>) -> Result<Decimal, AnalyticsError> {
    values
        .into_iter()
        .try_fold(Decimal::ZERO, |acc, v| acc.checked_add(*v))
        .ok_or_else(|| overflow("a total"))
}

/// `a + b`, failing with `Calculation` instead of overflowing.
pub fn checked_add(a: Decimal, b: Decimal, operation: &str) -> Result<Decimal, AnalyticsError> {
    a.checked_add(b).ok_or_else(|| overflow(operation))
}

/// `a * b`, failing with `Calculation` instead of overflowing.
pub fn checked_mul(a: Decimal, b: Decimal, operation: &str) -> Result<Decimal, AnalyticsError> {
    a.checked_mul(b).ok_or_else(|| overflow(operation))
}

/// Population standard deviation (divides by N). Zero for an empty slice.
///
/// Scores far enough apart that the squared deviations leave the decimal range
/// fail with `Calculation`.
pub fn population_std_dev(values: &[Decimal]) -> Result<Decimal, AnalyticsError> {
    if values.is_empty() {
        return Ok(Decimal::ZERO);
    }
    let count = Decimal::from(values.len());
    let mean = checked_total(values)? / count;

    let mut squared = Decimal::ZERO;
    for v in values {
        let deviation = v.checked_sub(mean).ok_or_else(|| overflow("a score deviation"))?;
        let square = checked_mul(deviation, deviation, "the scoring variance")?;
        squared = checked_add(squared, square, "the scoring variance")?;
    }
    let variance = squared / count;

    variance.sqrt().ok_or_else(|| {
        AnalyticsError::Calculation(format!("Failed to calculate square root of variance {variance}"))
    })
}
