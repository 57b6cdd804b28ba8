//! Statistics that compare a score against a whole field of other scores.
//!
//! AWAL ranks a score against the other scores of the same week. Smart Wins ranks it
//! against every score of the filtered range at once. Both give a full win for every
//! lower score and half a win for every equal one, normalised by the size of the field.

use super::{TeamStat, included_matchups, map_values, slot, team_map};
use crate::decimal::{HALF, per_game};
use crate::error::AnalyticsError;
use crate::filters::YearFilters;
use core_types::{Matchup, Year};
use rust_decimal::Decimal;

/// A sorted field of scores in which every ranked score is itself a member.
struct ScorePool {
    sorted: Vec<Decimal>,
}

impl ScorePool {
    fn new(scores: impl IntoIterator<Item = Decimal>) -> Self {
        let mut sorted: Vec<Decimal> = scores.into_iter().collect();
        sorted.sort_unstable();
        Self { sorted }
    }

    /// Other members strictly below `score`, and other members equal to it.
    fn beaten_and_tied(&self, score: Decimal) -> (usize, usize) {
        let below = self.sorted.partition_point(|s| *s < score);
        let not_above = self.sorted.partition_point(|s| *s <= score);
        (below, (not_above - below).saturating_sub(1))
    }

    fn opponents(&self) -> usize {
        self.sorted.len().saturating_sub(1)
    }

    /// `W * (1 / L) + T * (0.5 / L)` where `L` is the number of other scores in the week.
    fn awal_share(&self, score: Decimal) -> Decimal {
        let opponents = self.opponents();
        if opponents == 0 {
            return Decimal::ZERO;
        }
        let (beaten, tied) = self.beaten_and_tied(score);
        let opponents = Decimal::from(opponents);
        Decimal::from(beaten) * (Decimal::ONE / opponents) + Decimal::from(tied) * (HALF / opponents)
    }

    /// `(B + T / 2) / (N - 1)` over the whole pool.
    fn smart_wins_share(&self, score: Decimal) -> Decimal {
        let opponents = self.opponents();
        if opponents == 0 {
            return Decimal::ZERO;
        }
        let (beaten, tied) = self.beaten_and_tied(score);
        (Decimal::from(beaten) + Decimal::from(tied) * HALF) / Decimal::from(opponents)
    }
}

/// Fractional wins credited to a team's own scores and to its opponents' scores.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FractionalWins {
    pub own: Decimal,
    pub opponent: Decimal,
    pub games_played: u32,
}

impl FractionalWins {
    fn credit(&mut self, own: Decimal, opponent: Decimal) {
        self.own += own;
        self.opponent += opponent;
        self.games_played += 1;
    }
}

/// AWAL and opponent AWAL for every team, week by week.
pub fn awal_tally(year: &Year, filters: &YearFilters) -> Result<TeamStat<FractionalWins>, AnalyticsError> {
    let mut tally = team_map(year, FractionalWins::default());

    for week in year.weeks_between(filters.week_number_start(), filters.week_number_end()) {
        let matchups: Vec<&Matchup> = week
            .matchups
            .iter()
            .filter(|m| filters.includes(m.matchup_type))
            .collect();
        if matchups.is_empty() {
            continue;
        }

        let pool = ScorePool::new(matchups.iter().flat_map(|m| [m.team_a_score, m.team_b_score]));
        for matchup in matchups {
            for (team_id, own, opponent) in matchup.sides() {
                slot(&mut tally, year, team_id)?.credit(pool.awal_share(own), pool.awal_share(opponent));
            }
        }
    }

    Ok(tally)
}

/// Smart Wins and opponent Smart Wins for every team, against the pool of all included scores.
pub fn smart_wins_tally(year: &Year, filters: &YearFilters) -> Result<TeamStat<FractionalWins>, AnalyticsError> {
    let pool = ScorePool::new(
        included_matchups(year, filters).flat_map(|m| [m.team_a_score, m.team_b_score]),
    );
    tracing::debug!(year = year.year_number, pool_size = pool.sorted.len(), "Computing smart wins");

    let mut tally = team_map(year, FractionalWins::default());
    for matchup in included_matchups(year, filters) {
        for (team_id, own, opponent) in matchup.sides() {
            slot(&mut tally, year, team_id)?.credit(pool.smart_wins_share(own), pool.smart_wins_share(opponent));
        }
    }

    Ok(tally)
}

pub fn awal(year: &Year, filters: &YearFilters) -> Result<TeamStat<Decimal>, AnalyticsError> {
    Ok(map_values(awal_tally(year, filters)?, |t| t.own))
}

pub fn awal_per_game(year: &Year, filters: &YearFilters) -> Result<TeamStat<Decimal>, AnalyticsError> {
    Ok(map_values(awal_tally(year, filters)?, |t| per_game(t.own, t.games_played)))
}

pub fn opponent_awal(year: &Year, filters: &YearFilters) -> Result<TeamStat<Decimal>, AnalyticsError> {
    Ok(map_values(awal_tally(year, filters)?, |t| t.opponent))
}

pub fn opponent_awal_per_game(year: &Year, filters: &YearFilters) -> Result<TeamStat<Decimal>, AnalyticsError> {
    Ok(map_values(awal_tally(year, filters)?, |t| per_game(t.opponent, t.games_played)))
}

pub fn smart_wins(year: &Year, filters: &YearFilters) -> Result<TeamStat<Decimal>, AnalyticsError> {
    Ok(map_values(smart_wins_tally(year, filters)?, |t| t.own))
}

pub fn smart_wins_per_game(year: &Year, filters: &YearFilters) -> Result<TeamStat<Decimal>, AnalyticsError> {
    Ok(map_values(smart_wins_tally(year, filters)?, |t| per_game(t.own, t.games_played)))
}

pub fn opponent_smart_wins(year: &Year, filters: &YearFilters) -> Result<TeamStat<Decimal>, AnalyticsError> {
    Ok(map_values(smart_wins_tally(year, filters)?, |t| t.opponent))
}

pub fn opponent_smart_wins_per_game(
    year: &Year,
    filters: &YearFilters,
) -> Result<TeamStat<Decimal>, AnalyticsError> {
    Ok(map_values(smart_wins_tally(year, filters)?, |t| per_game(t.opponent, t.games_played)))
}
