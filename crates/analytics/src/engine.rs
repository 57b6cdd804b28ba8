use crate::all_time;
use crate::error::AnalyticsError;
use crate::filters::{AllTimeFilters, FilterOptions, YearFilters};
use crate::report::{AllTimeStatSheet, YearStatSheet};
use crate::year;
use configuration::SslWeights;
use core_types::{League, Year};

/// A stateless calculator for every statistic of one season.
///
/// The only state it carries is the SSL weighting, passed in by the caller.
#[derive(Debug, Clone, Default)]
pub struct YearStatEngine {
    weights: SslWeights,
}

impl YearStatEngine {
    pub fn new(weights: SslWeights) -> Self {
        Self { weights }
    }

    /// Resolves `options` against the year and computes the full sheet.
    ///
    /// # Arguments
    ///
    /// * `year` - The season to compute.
    /// * `options` - Sparse filter options; year bounds are ignored at this scope.
    ///
    /// # Returns
    ///
    /// A `Result` containing the `YearStatSheet` or an `AnalyticsError`. Invalid options
    /// fail before any statistic is computed.
    pub fn stat_sheet(&self, year: &Year, options: &FilterOptions) -> Result<YearStatSheet, AnalyticsError> {
        let filters = YearFilters::resolve(year, options)?;
        self.stat_sheet_with(year, &filters)
    }

    /// Computes the full sheet for an already resolved window.
    pub fn stat_sheet_with(&self, year: &Year, filters: &YearFilters) -> Result<YearStatSheet, AnalyticsError> {
        tracing::debug!(
            year = year.year_number,
            start = filters.week_number_start(),
            end = filters.week_number_end(),
            "Computing year stat sheet"
        );

        let sheet = YearStatSheet {
            year_number: year.year_number,
            games_played: year::games_played(year, filters)?,
            wins: year::wins(year, filters)?,
            losses: year::losses(year, filters)?,
            ties: year::ties(year, filters)?,
            win_percentage: year::win_percentage(year, filters)?,
            wal: year::wal(year, filters)?,
            wal_per_game: year::wal_per_game(year, filters)?,
            championship_count: year::championship_count(year, filters)?,
            awal: year::awal(year, filters)?,
            awal_per_game: year::awal_per_game(year, filters)?,
            opponent_awal: year::opponent_awal(year, filters)?,
            opponent_awal_per_game: year::opponent_awal_per_game(year, filters)?,
            smart_wins: year::smart_wins(year, filters)?,
            smart_wins_per_game: year::smart_wins_per_game(year, filters)?,
            opponent_smart_wins: year::opponent_smart_wins(year, filters)?,
            opponent_smart_wins_per_game: year::opponent_smart_wins_per_game(year, filters)?,
            points_scored: year::points_scored(year, filters)?,
            points_scored_per_game: year::points_scored_per_game(year, filters)?,
            opponent_points_scored: year::opponent_points_scored(year, filters)?,
            opponent_points_scored_per_game: year::opponent_points_scored_per_game(year, filters)?,
            scoring_share: year::scoring_share(year, filters)?,
            opponent_scoring_share: year::opponent_scoring_share(year, filters)?,
            max_score: year::max_score(year, filters)?,
            min_score: year::min_score(year, filters)?,
            scoring_standard_deviation: year::scoring_standard_deviation(year, filters)?,
            plus_minus: year::plus_minus(year, filters)?,
            team_score: year::team_score(year, filters, &self.weights)?,
            team_success: year::team_success(year, filters, &self.weights)?,
            team_luck: year::team_luck(year, filters, &self.weights)?,
        };

        tracing::debug!(year = year.year_number, teams = year.teams.len(), "Year stat sheet complete");
        Ok(sheet)
    }
}

/// A stateless calculator for owner statistics across a range of seasons.
#[derive(Debug, Clone, Default)]
pub struct AllTimeStatEngine {
    weights: SslWeights,
}

impl AllTimeStatEngine {
    pub fn new(weights: SslWeights) -> Self {
        Self { weights }
    }

    pub fn stat_sheet(&self, league: &League, options: &FilterOptions) -> Result<AllTimeStatSheet, AnalyticsError> {
        let filters = AllTimeFilters::resolve(league, options)?;
        self.stat_sheet_with(league, &filters)
    }

    pub fn stat_sheet_with(
        &self,
        league: &League,
        filters: &AllTimeFilters,
    ) -> Result<AllTimeStatSheet, AnalyticsError> {
        tracing::debug!(
            league = %league.name,
            from = filters.year_number_start(),
            to = filters.year_number_end(),
            "Computing all-time stat sheet"
        );

        let sheet = AllTimeStatSheet {
            year_number_start: filters.year_number_start(),
            year_number_end: filters.year_number_end(),
            games_played: all_time::games_played(league, filters)?,
            wins: all_time::wins(league, filters)?,
            losses: all_time::losses(league, filters)?,
            ties: all_time::ties(league, filters)?,
            win_percentage: all_time::win_percentage(league, filters)?,
            wal: all_time::wal(league, filters)?,
            wal_per_game: all_time::wal_per_game(league, filters)?,
            championship_count: all_time::championship_count(league, filters)?,
            awal: all_time::awal(league, filters)?,
            awal_per_game: all_time::awal_per_game(league, filters)?,
            opponent_awal: all_time::opponent_awal(league, filters)?,
            opponent_awal_per_game: all_time::opponent_awal_per_game(league, filters)?,
            smart_wins: all_time::smart_wins(league, filters)?,
            smart_wins_per_game: all_time::smart_wins_per_game(league, filters)?,
            opponent_smart_wins: all_time::opponent_smart_wins(league, filters)?,
            opponent_smart_wins_per_game: all_time::opponent_smart_wins_per_game(league, filters)?,
            points_scored: all_time::points_scored(league, filters)?,
            points_scored_per_game: all_time::points_scored_per_game(league, filters)?,
            opponent_points_scored: all_time::opponent_points_scored(league, filters)?,
            opponent_points_scored_per_game: all_time::opponent_points_scored_per_game(league, filters)?,
            scoring_share: all_time::scoring_share(league, filters)?,
            opponent_scoring_share: all_time::opponent_scoring_share(league, filters)?,
            max_score: all_time::max_score(league, filters)?,
            min_score: all_time::min_score(league, filters)?,
            scoring_standard_deviation: all_time::scoring_standard_deviation(league, filters)?,
            plus_minus: all_time::plus_minus(league, filters)?,
            team_score: all_time::team_score(league, filters, &self.weights)?,
            team_success: all_time::team_success(league, filters, &self.weights)?,
            team_luck: all_time::team_luck(league, filters, &self.weights)?,
        };

        tracing::debug!(owners = league.owners.len(), "All-time stat sheet complete");
        Ok(sheet)
    }
}
