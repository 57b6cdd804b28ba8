use super::{TeamStat, included_matchups, map_values, slot, team_map};
use crate::decimal::{checked_total, per_game, percentage, population_std_dev};
use crate::error::AnalyticsError;
use crate::filters::YearFilters;
use core_types::Year;
use rust_decimal::Decimal;

/// Every included score of each team, in week order.
pub fn scores(year: &Year, filters: &YearFilters) -> Result<TeamStat<Vec<Decimal>>, AnalyticsError> {
    let mut scores = team_map(year, Vec::new());
    for matchup in included_matchups(year, filters) {
        for (team_id, own, _) in matchup.sides() {
            slot(&mut scores, year, team_id)?.push(own);
        }
    }
    Ok(scores)
}

/// Every included score of each team's opponents, in week order.
fn opponent_scores(year: &Year, filters: &YearFilters) -> Result<TeamStat<Vec<Decimal>>, AnalyticsError> {
    let mut scores = team_map(year, Vec::new());
    for matchup in included_matchups(year, filters) {
        for (team_id, _, opponent) in matchup.sides() {
            slot(&mut scores, year, team_id)?.push(opponent);
        }
    }
    Ok(scores)
}

fn totals(scores: TeamStat<Vec<Decimal>>) -> Result<TeamStat<Decimal>, AnalyticsError> {
    scores
        .into_iter()
        .map(|(team_id, s)| Ok((team_id, checked_total(&s)?)))
        .collect()
}

fn per_game_totals(scores: TeamStat<Vec<Decimal>>) -> Result<TeamStat<Decimal>, AnalyticsError> {
    scores
        .into_iter()
        .map(|(team_id, s)| Ok((team_id, per_game(checked_total(&s)?, s.len() as u32))))
        .collect()
}

pub fn points_scored(year: &Year, filters: &YearFilters) -> Result<TeamStat<Decimal>, AnalyticsError> {
    totals(scores(year, filters)?)
}

pub fn opponent_points_scored(year: &Year, filters: &YearFilters) -> Result<TeamStat<Decimal>, AnalyticsError> {
    totals(opponent_scores(year, filters)?)
}

pub fn points_scored_per_game(year: &Year, filters: &YearFilters) -> Result<TeamStat<Decimal>, AnalyticsError> {
    per_game_totals(scores(year, filters)?)
}

pub fn opponent_points_scored_per_game(
    year: &Year,
    filters: &YearFilters,
) -> Result<TeamStat<Decimal>, AnalyticsError> {
    per_game_totals(opponent_scores(year, filters)?)
}

/// Highest included score; `None` for a team that did not play in range.
pub fn max_score(year: &Year, filters: &YearFilters) -> Result<TeamStat<Option<Decimal>>, AnalyticsError> {
    Ok(map_values(scores(year, filters)?, |s| s.into_iter().max()))
}

/// Lowest included score; `None` for a team that did not play in range.
pub fn min_score(year: &Year, filters: &YearFilters) -> Result<TeamStat<Option<Decimal>>, AnalyticsError> {
    Ok(map_values(scores(year, filters)?, |s| s.into_iter().min()))
}

pub fn scoring_standard_deviation(
    year: &Year,
    filters: &YearFilters,
) -> Result<TeamStat<Decimal>, AnalyticsError> {
    scores(year, filters)?
        .into_iter()
        .map(|(team_id, s)| Ok((team_id, population_std_dev(&s)?)))
        .collect()
}

/// Each team's points as a percentage of all points scored in range.
pub fn scoring_share(year: &Year, filters: &YearFilters) -> Result<TeamStat<Decimal>, AnalyticsError> {
    share_of_league(points_scored(year, filters)?)
}

/// Points scored against each team as a percentage of all points scored in range.
pub fn opponent_scoring_share(year: &Year, filters: &YearFilters) -> Result<TeamStat<Decimal>, AnalyticsError> {
    // Every score is some team's opponent score, so both totals are equal.
    share_of_league(opponent_points_scored(year, filters)?)
}

fn share_of_league(points: TeamStat<Decimal>) -> Result<TeamStat<Decimal>, AnalyticsError> {
    let league_total = checked_total(points.values())?;
    Ok(map_values(points, |p| percentage(p, league_total)))
}

pub fn plus_minus(year: &Year, filters: &YearFilters) -> Result<TeamStat<Decimal>, AnalyticsError> {
    let scored = points_scored(year, filters)?;
    let allowed = opponent_points_scored(year, filters)?;
    Ok(scored
        .into_iter()
        .map(|(team_id, points)| {
            let against = allowed.get(&team_id).copied().unwrap_or_default();
            (team_id, points - against)
        })
        .collect())
}
