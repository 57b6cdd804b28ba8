use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;
use uuid::Uuid;

use crate::all_time::OwnerStat;
use crate::year::TeamStat;

/// One cell of an exported stat sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum StatValue {
    Count(u64),
    Decimal(Decimal),
    /// No value, e.g. the max score of a team that did not play in range.
    Absent,
}

impl From<u32> for StatValue {
    fn from(value: u32) -> Self {
        StatValue::Count(u64::from(value))
    }
}

impl From<Decimal> for StatValue {
    fn from(value: Decimal) -> Self {
        StatValue::Decimal(value)
    }
}

impl From<Option<Decimal>> for StatValue {
    fn from(value: Option<Decimal>) -> Self {
        value.map_or(StatValue::Absent, StatValue::Decimal)
    }
}

/// A named statistic flattened for export, keyed by team or owner id.
pub type StatColumn = (&'static str, BTreeMap<Uuid, StatValue>);

fn column<V>(name: &'static str, stat: &BTreeMap<Uuid, V>) -> StatColumn
where
    V: Copy + Into<StatValue>,
{
    (name, stat.iter().map(|(id, v)| (*id, (*v).into())).collect())
}

/// Every statistic of one season, keyed by team id.
///
/// This is the output of the `YearStatEngine` and the unit the CLI renders.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearStatSheet {
    pub year_number: u32,

    // I. Record
    pub games_played: TeamStat<u32>,
    pub wins: TeamStat<u32>,
    pub losses: TeamStat<u32>,
    pub ties: TeamStat<u32>,
    pub win_percentage: TeamStat<Decimal>,
    pub wal: TeamStat<Decimal>,
    pub wal_per_game: TeamStat<Decimal>,
    pub championship_count: TeamStat<u32>,

    // II. Pairwise comparisons
    pub awal: TeamStat<Decimal>,
    pub awal_per_game: TeamStat<Decimal>,
    pub opponent_awal: TeamStat<Decimal>,
    pub opponent_awal_per_game: TeamStat<Decimal>,
    pub smart_wins: TeamStat<Decimal>,
    pub smart_wins_per_game: TeamStat<Decimal>,
    pub opponent_smart_wins: TeamStat<Decimal>,
    pub opponent_smart_wins_per_game: TeamStat<Decimal>,

    // III. Scoring
    pub points_scored: TeamStat<Decimal>,
    pub points_scored_per_game: TeamStat<Decimal>,
    pub opponent_points_scored: TeamStat<Decimal>,
    pub opponent_points_scored_per_game: TeamStat<Decimal>,
    pub scoring_share: TeamStat<Decimal>,
    pub opponent_scoring_share: TeamStat<Decimal>,
    pub max_score: TeamStat<Option<Decimal>>, // None when the team has no game in range
    pub min_score: TeamStat<Option<Decimal>>,
    pub scoring_standard_deviation: TeamStat<Decimal>,
    pub plus_minus: TeamStat<Decimal>,

    // IV. Score / Success / Luck
    pub team_score: TeamStat<Decimal>,
    pub team_success: TeamStat<Decimal>,
    pub team_luck: TeamStat<Decimal>,
}

/// Every statistic across a range of seasons, keyed by owner id.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AllTimeStatSheet {
    pub year_number_start: u32,
    pub year_number_end: u32,

    // I. Record
    pub games_played: OwnerStat<u32>,
    pub wins: OwnerStat<u32>,
    pub losses: OwnerStat<u32>,
    pub ties: OwnerStat<u32>,
    pub win_percentage: OwnerStat<Decimal>,
    pub wal: OwnerStat<Decimal>,
    pub wal_per_game: OwnerStat<Decimal>,
    pub championship_count: OwnerStat<u32>,

    // II. Pairwise comparisons
    pub awal: OwnerStat<Decimal>,
    pub awal_per_game: OwnerStat<Decimal>,
    pub opponent_awal: OwnerStat<Decimal>,
    pub opponent_awal_per_game: OwnerStat<Decimal>,
    pub smart_wins: OwnerStat<Decimal>,
    pub smart_wins_per_game: OwnerStat<Decimal>,
    pub opponent_smart_wins: OwnerStat<Decimal>,
    pub opponent_smart_wins_per_game: OwnerStat<Decimal>,

    // III. Scoring
    pub points_scored: OwnerStat<Decimal>,
    pub points_scored_per_game: OwnerStat<Decimal>,
    pub opponent_points_scored: OwnerStat<Decimal>,
    pub opponent_points_scored_per_game: OwnerStat<Decimal>,
    pub scoring_share: OwnerStat<Decimal>, // averaged over the qualifying years
    pub opponent_scoring_share: OwnerStat<Decimal>,
    pub max_score: OwnerStat<Option<Decimal>>,
    pub min_score: OwnerStat<Option<Decimal>>,
    pub scoring_standard_deviation: OwnerStat<Decimal>,
    pub plus_minus: OwnerStat<Decimal>,

    // IV. Score / Success / Luck
    pub team_score: OwnerStat<Decimal>,
    pub team_success: OwnerStat<Decimal>,
    pub team_luck: OwnerStat<Decimal>,
}

macro_rules! sheet_columns {
    ($sheet:expr, $($field:ident),+ $(,)?) => {
        vec![$(column(stringify!($field), &$sheet.$field)),+]
    };
}

impl YearStatSheet {
    /// Flattens the sheet into named columns, in display order.
    pub fn columns(&self) -> Vec<StatColumn> {
        sheet_columns!(
            self,
            games_played,
            wins,
            losses,
            ties,
            win_percentage,
            wal,
            wal_per_game,
            awal,
            awal_per_game,
            opponent_awal,
            opponent_awal_per_game,
            smart_wins,
            smart_wins_per_game,
            opponent_smart_wins,
            opponent_smart_wins_per_game,
            points_scored,
            points_scored_per_game,
            opponent_points_scored,
            opponent_points_scored_per_game,
            scoring_share,
            opponent_scoring_share,
            max_score,
            min_score,
            scoring_standard_deviation,
            plus_minus,
            championship_count,
            team_score,
            team_success,
            team_luck,
        )
    }
}

impl AllTimeStatSheet {
    /// Flattens the sheet into named columns, in display order.
    pub fn columns(&self) -> Vec<StatColumn> {
        sheet_columns!(
            self,
            games_played,
            wins,
            losses,
            ties,
            win_percentage,
            wal,
            wal_per_game,
            awal,
            awal_per_game,
            opponent_awal,
            opponent_awal_per_game,
            smart_wins,
            smart_wins_per_game,
            opponent_smart_wins,
            opponent_smart_wins_per_game,
            points_scored,
            points_scored_per_game,
            opponent_points_scored,
            opponent_points_scored_per_game,
            scoring_share,
            opponent_scoring_share,
            max_score,
            min_score,
            scoring_standard_deviation,
            plus_minus,
            championship_count,
            team_score,
            team_success,
            team_luck,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn absent_values_stay_distinct_from_zero() {
        assert_eq!(StatValue::from(None::<Decimal>), StatValue::Absent);
        assert_eq!(StatValue::from(Some(dec!(0))), StatValue::Decimal(dec!(0)));
        assert_eq!(StatValue::from(3u32), StatValue::Count(3));

        assert_eq!(serde_json::to_value(StatValue::Absent).unwrap(), serde_json::Value::Null);
        assert_eq!(serde_json::to_value(StatValue::Count(2)).unwrap(), serde_json::json!(2));
    }

    #[test]
    fn column_keeps_every_id() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let stat: BTreeMap<Uuid, Option<Decimal>> = [(a, Some(dec!(1.5))), (b, None)].into_iter().collect();
        let (name, values) = column("max_score", &stat);
        assert_eq!(name, "max_score");
        assert_eq!(values[&a], StatValue::Decimal(dec!(1.5)));
        assert_eq!(values[&b], StatValue::Absent);
    }
}
