//! Per-season statistics, keyed by team id.
//!
//! Every function takes the year and an explicitly resolved [`YearFilters`] and
//! only looks at matchups in the filter's week range whose segment is included.
//! Every team of the year gets an entry, including teams that did not play in range.

use crate::error::AnalyticsError;
use crate::filters::YearFilters;
use core_types::{CoreError, Matchup, TeamId, Year};
use std::collections::BTreeMap;

pub mod pairwise;
pub mod record;
pub mod scoring;
pub mod ssl;

pub use pairwise::{
    awal, awal_per_game, opponent_awal, opponent_awal_per_game, opponent_smart_wins,
    opponent_smart_wins_per_game, smart_wins, smart_wins_per_game,
};
pub use record::{
    championship_count, games_played, losses, ties, wal, wal_per_game, win_percentage, wins,
};
pub use scoring::{
    max_score, min_score, opponent_points_scored, opponent_points_scored_per_game,
    opponent_scoring_share, plus_minus, points_scored, points_scored_per_game, scores,
    scoring_share, scoring_standard_deviation,
};
pub use ssl::{team_luck, team_score, team_success};

/// A statistic for every team of one year.
pub type TeamStat<V> = BTreeMap<TeamId, V>;

/// Included matchups of the window, in week order.
pub(crate) fn included_matchups<'a>(
    year: &'a Year,
    filters: &'a YearFilters,
) -> impl Iterator<Item = &'a Matchup> {
    year.weeks_between(filters.week_number_start(), filters.week_number_end())
        .flat_map(|week| week.matchups.iter())
        .filter(|m| filters.includes(m.matchup_type))
}

/// A map holding `init` for every team of the year.
pub(crate) fn team_map<V: Clone>(year: &Year, init: V) -> TeamStat<V> {
    year.teams.iter().map(|t| (t.id, init.clone())).collect()
}

/// The accumulator of a team, failing when a matchup names a team the year does not have.
pub(crate) fn slot<'m, V>(
    map: &'m mut TeamStat<V>,
    year: &Year,
    team_id: TeamId,
) -> Result<&'m mut V, AnalyticsError> {
    map.get_mut(&team_id).ok_or_else(|| {
        AnalyticsError::MissingReference(CoreError::MissingTeam {
            team_id,
            year_number: year.year_number,
        })
    })
}

/// Applies `f` to every value of a team-keyed result.
pub(crate) fn map_values<V, W>(stat: TeamStat<V>, f: impl Fn(V) -> W) -> TeamStat<W> {
    stat.into_iter().map(|(id, v)| (id, f(v))).collect()
}
