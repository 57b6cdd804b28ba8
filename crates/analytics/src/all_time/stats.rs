use super::{OwnerStat, average, extreme, pool, sum};
use crate::decimal::{per_game, population_std_dev, ratio, wins_with_half_ties};
use crate::error::AnalyticsError;
use crate::filters::AllTimeFilters;
use crate::year::{self, ssl};
use configuration::SslWeights;
use core_types::League;
use rust_decimal::Decimal;

/// Divides each owner's total by their all-time games played.
fn per_game_of(totals: OwnerStat<Decimal>, games: &OwnerStat<u32>) -> OwnerStat<Decimal> {
    totals
        .into_iter()
        .map(|(owner_id, total)| {
            let played = games.get(&owner_id).copied().unwrap_or_default();
            (owner_id, per_game(total, played))
        })
        .collect()
}

pub fn games_played(league: &League, filters: &AllTimeFilters) -> Result<OwnerStat<u32>, AnalyticsError> {
    sum(league, filters, year::games_played)
}

pub fn wins(league: &League, filters: &AllTimeFilters) -> Result<OwnerStat<u32>, AnalyticsError> {
    sum(league, filters, year::wins)
}

pub fn losses(league: &League, filters: &AllTimeFilters) -> Result<OwnerStat<u32>, AnalyticsError> {
    sum(league, filters, year::losses)
}

pub fn ties(league: &League, filters: &AllTimeFilters) -> Result<OwnerStat<u32>, AnalyticsError> {
    sum(league, filters, year::ties)
}

pub fn win_percentage(league: &League, filters: &AllTimeFilters) -> Result<OwnerStat<Decimal>, AnalyticsError> {
    let wins = wins(league, filters)?;
    let ties = ties(league, filters)?;
    let games = games_played(league, filters)?;
    Ok(games
        .into_iter()
        .map(|(owner_id, played)| {
            let credit = wins_with_half_ties(
                wins.get(&owner_id).copied().unwrap_or_default(),
                ties.get(&owner_id).copied().unwrap_or_default(),
            );
            (owner_id, ratio(credit, Decimal::from(played)))
        })
        .collect())
}

pub fn wal(league: &League, filters: &AllTimeFilters) -> Result<OwnerStat<Decimal>, AnalyticsError> {
    sum(league, filters, year::wal)
}

pub fn wal_per_game(league: &League, filters: &AllTimeFilters) -> Result<OwnerStat<Decimal>, AnalyticsError> {
    Ok(per_game_of(wal(league, filters)?, &games_played(league, filters)?))
}

pub fn awal(league: &League, filters: &AllTimeFilters) -> Result<OwnerStat<Decimal>, AnalyticsError> {
    sum(league, filters, year::awal)
}

pub fn awal_per_game(league: &League, filters: &AllTimeFilters) -> Result<OwnerStat<Decimal>, AnalyticsError> {
    Ok(per_game_of(awal(league, filters)?, &games_played(league, filters)?))
}

pub fn opponent_awal(league: &League, filters: &AllTimeFilters) -> Result<OwnerStat<Decimal>, AnalyticsError> {
    sum(league, filters, year::opponent_awal)
}

pub fn opponent_awal_per_game(
    league: &League,
    filters: &AllTimeFilters,
) -> Result<OwnerStat<Decimal>, AnalyticsError> {
    Ok(per_game_of(opponent_awal(league, filters)?, &games_played(league, filters)?))
}

pub fn smart_wins(league: &League, filters: &AllTimeFilters) -> Result<OwnerStat<Decimal>, AnalyticsError> {
    sum(league, filters, year::smart_wins)
}

pub fn smart_wins_per_game(league: &League, filters: &AllTimeFilters) -> Result<OwnerStat<Decimal>, AnalyticsError> {
    Ok(per_game_of(smart_wins(league, filters)?, &games_played(league, filters)?))
}

pub fn opponent_smart_wins(league: &League, filters: &AllTimeFilters) -> Result<OwnerStat<Decimal>, AnalyticsError> {
    sum(league, filters, year::opponent_smart_wins)
}

pub fn opponent_smart_wins_per_game(
    league: &League,
    filters: &AllTimeFilters,
) -> Result<OwnerStat<Decimal>, AnalyticsError> {
    Ok(per_game_of(opponent_smart_wins(league, filters)?, &games_played(league, filters)?))
}

pub fn points_scored(league: &League, filters: &AllTimeFilters) -> Result<OwnerStat<Decimal>, AnalyticsError> {
    sum(league, filters, year::points_scored)
}

pub fn points_scored_per_game(league: &League, filters: &AllTimeFilters) -> Result<OwnerStat<Decimal>, AnalyticsError> {
    Ok(per_game_of(points_scored(league, filters)?, &games_played(league, filters)?))
}

pub fn opponent_points_scored(league: &League, filters: &AllTimeFilters) -> Result<OwnerStat<Decimal>, AnalyticsError> {
    sum(league, filters, year::opponent_points_scored)
}

pub fn opponent_points_scored_per_game(
    league: &League,
    filters: &AllTimeFilters,
) -> Result<OwnerStat<Decimal>, AnalyticsError> {
    Ok(per_game_of(opponent_points_scored(league, filters)?, &games_played(league, filters)?))
}

pub fn plus_minus(league: &League, filters: &AllTimeFilters) -> Result<OwnerStat<Decimal>, AnalyticsError> {
    sum(league, filters, year::plus_minus)
}

pub fn championship_count(league: &League, filters: &AllTimeFilters) -> Result<OwnerStat<u32>, AnalyticsError> {
    sum(league, filters, year::championship_count)
}

/// Scoring share averaged over the qualifying years.
pub fn scoring_share(league: &League, filters: &AllTimeFilters) -> Result<OwnerStat<Decimal>, AnalyticsError> {
    average(league, filters, year::scoring_share)
}

pub fn opponent_scoring_share(league: &League, filters: &AllTimeFilters) -> Result<OwnerStat<Decimal>, AnalyticsError> {
    average(league, filters, year::opponent_scoring_share)
}

pub fn max_score(league: &League, filters: &AllTimeFilters) -> Result<OwnerStat<Option<Decimal>>, AnalyticsError> {
    extreme(league, filters, year::max_score, Decimal::max)
}

pub fn min_score(league: &League, filters: &AllTimeFilters) -> Result<OwnerStat<Option<Decimal>>, AnalyticsError> {
    extreme(league, filters, year::min_score, Decimal::min)
}

/// Population standard deviation over every score an owner posted in range.
pub fn scoring_standard_deviation(
    league: &League,
    filters: &AllTimeFilters,
) -> Result<OwnerStat<Decimal>, AnalyticsError> {
    pool(league, filters, year::scores)?
        .into_iter()
        .map(|(owner_id, scores)| Ok((owner_id, population_std_dev(&scores)?)))
        .collect()
}

fn blend_all_time(
    league: &League,
    filters: &AllTimeFilters,
    weights: &SslWeights,
    win_credit_per_game: OwnerStat<Decimal>,
) -> Result<OwnerStat<Decimal>, AnalyticsError> {
    let share = scoring_share(league, filters)?;
    let max = max_score(league, filters)?;
    let min = min_score(league, filters)?;
    win_credit_per_game
        .into_iter()
        .map(|(owner_id, credit)| {
            let value = ssl::blend(
                credit,
                share.get(&owner_id).copied().unwrap_or_default(),
                max.get(&owner_id).copied().flatten(),
                min.get(&owner_id).copied().flatten(),
                weights,
            )?;
            Ok((owner_id, value))
        })
        .collect()
}

pub fn team_score(
    league: &League,
    filters: &AllTimeFilters,
    weights: &SslWeights,
) -> Result<OwnerStat<Decimal>, AnalyticsError> {
    blend_all_time(league, filters, weights, awal_per_game(league, filters)?)
}

pub fn team_success(
    league: &League,
    filters: &AllTimeFilters,
    weights: &SslWeights,
) -> Result<OwnerStat<Decimal>, AnalyticsError> {
    blend_all_time(league, filters, weights, wal_per_game(league, filters)?)
}

pub fn team_luck(
    league: &League,
    filters: &AllTimeFilters,
    weights: &SslWeights,
) -> Result<OwnerStat<Decimal>, AnalyticsError> {
    let score = team_score(league, filters, weights)?;
    let success = team_success(league, filters, weights)?;
    Ok(success
        .into_iter()
        .map(|(owner_id, s)| (owner_id, s - score.get(&owner_id).copied().unwrap_or_default()))
        .collect())
}
