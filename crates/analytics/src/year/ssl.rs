//! Team Score, Team Success and Team Luck.
//!
//! Team Score rates how well a team scored (AWAL based), Team Success how often it
//! actually won (WAL based). Their difference is Team Luck.

use super::{TeamStat, pairwise, record, scoring};
use crate::decimal::{checked_add, checked_mul};
use crate::error::AnalyticsError;
use crate::filters::YearFilters;
use configuration::SslWeights;
use core_types::Year;
use rust_decimal::Decimal;

/// `win_credit_per_game * w1 + scoring_share * w2 + (max + min) * w3`.
///
/// An absent max or min score (no games in range) contributes zero.
pub(crate) fn blend(
    win_credit_per_game: Decimal,
    scoring_share: Decimal,
    max_score: Option<Decimal>,
    min_score: Option<Decimal>,
    weights: &SslWeights,
) -> Result<Decimal, AnalyticsError> {
    const OPERATION: &str = "the SSL blend";
    let extremes = checked_add(max_score.unwrap_or_default(), min_score.unwrap_or_default(), OPERATION)?;
    let win_credit = checked_mul(win_credit_per_game, weights.awal_per_game, OPERATION)?;
    let share = checked_mul(scoring_share, weights.scoring_share, OPERATION)?;
    let extremes = checked_mul(extremes, weights.max_min_score, OPERATION)?;
    checked_add(checked_add(win_credit, share, OPERATION)?, extremes, OPERATION)
}

fn blend_with(
    year: &Year,
    filters: &YearFilters,
    weights: &SslWeights,
    win_credit_per_game: TeamStat<Decimal>,
) -> Result<TeamStat<Decimal>, AnalyticsError> {
    let share = scoring::scoring_share(year, filters)?;
    let max = scoring::max_score(year, filters)?;
    let min = scoring::min_score(year, filters)?;

    win_credit_per_game
        .into_iter()
        .map(|(team_id, credit)| {
            let value = blend(
                credit,
                share.get(&team_id).copied().unwrap_or_default(),
                max.get(&team_id).copied().flatten(),
                min.get(&team_id).copied().flatten(),
                weights,
            )?;
            Ok((team_id, value))
        })
        .collect()
}

pub fn team_score(
    year: &Year,
    filters: &YearFilters,
    weights: &SslWeights,
) -> Result<TeamStat<Decimal>, AnalyticsError> {
    blend_with(year, filters, weights, pairwise::awal_per_game(year, filters)?)
}

pub fn team_success(
    year: &Year,
    filters: &YearFilters,
    weights: &SslWeights,
) -> Result<TeamStat<Decimal>, AnalyticsError> {
    blend_with(year, filters, weights, record::wal_per_game(year, filters)?)
}

/// Team Success minus Team Score: positive when a team won more than its scoring earned.
pub fn team_luck(
    year: &Year,
    filters: &YearFilters,
    weights: &SslWeights,
) -> Result<TeamStat<Decimal>, AnalyticsError> {
    let score = team_score(year, filters, weights)?;
    let success = team_success(year, filters, weights)?;
    Ok(success
        .into_iter()
        .map(|(team_id, s)| (team_id, s - score.get(&team_id).copied().unwrap_or_default()))
        .collect())
}
