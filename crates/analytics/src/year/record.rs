use super::{TeamStat, included_matchups, map_values, slot, team_map};
use crate::decimal::{per_game, ratio, wins_with_half_ties};
use crate::error::AnalyticsError;
use crate::filters::YearFilters;
use crate::outcome;
use core_types::{MatchupType, Side, Year};
use rust_decimal::Decimal;

/// Win, loss and tie counts of one team.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Record {
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
}

impl Record {
    pub fn games_played(&self) -> u32 {
        self.wins + self.losses + self.ties
    }

    /// Wins Against the League: wins plus half of ties.
    pub fn wal(&self) -> Decimal {
        wins_with_half_ties(self.wins, self.ties)
    }
}

/// Resolves every included matchup and tallies the outcome for both teams.
pub fn records(year: &Year, filters: &YearFilters) -> Result<TeamStat<Record>, AnalyticsError> {
    let mut records = team_map(year, Record::default());

    for matchup in included_matchups(year, filters) {
        let outcome = outcome::resolve(matchup)?;
        match (outcome.winner(), outcome.loser()) {
            (Some(winner), Some(loser)) => {
                slot(&mut records, year, matchup.team_id(winner))?.wins += 1;
                slot(&mut records, year, matchup.team_id(loser))?.losses += 1;
            }
            _ => {
                for side in [Side::A, Side::B] {
                    slot(&mut records, year, matchup.team_id(side))?.ties += 1;
                }
            }
        }
    }

    Ok(records)
}

pub fn games_played(year: &Year, filters: &YearFilters) -> Result<TeamStat<u32>, AnalyticsError> {
    Ok(map_values(records(year, filters)?, |r| r.games_played()))
}

pub fn wins(year: &Year, filters: &YearFilters) -> Result<TeamStat<u32>, AnalyticsError> {
    Ok(map_values(records(year, filters)?, |r| r.wins))
}

pub fn losses(year: &Year, filters: &YearFilters) -> Result<TeamStat<u32>, AnalyticsError> {
    Ok(map_values(records(year, filters)?, |r| r.losses))
}

pub fn ties(year: &Year, filters: &YearFilters) -> Result<TeamStat<u32>, AnalyticsError> {
    Ok(map_values(records(year, filters)?, |r| r.ties))
}

/// `(wins + ties / 2) / games played`, zero for a team with no games.
pub fn win_percentage(year: &Year, filters: &YearFilters) -> Result<TeamStat<Decimal>, AnalyticsError> {
    Ok(map_values(records(year, filters)?, |r| {
        ratio(r.wal(), Decimal::from(r.games_played()))
    }))
}

pub fn wal(year: &Year, filters: &YearFilters) -> Result<TeamStat<Decimal>, AnalyticsError> {
    Ok(map_values(records(year, filters)?, |r| r.wal()))
}

pub fn wal_per_game(year: &Year, filters: &YearFilters) -> Result<TeamStat<Decimal>, AnalyticsError> {
    Ok(map_values(records(year, filters)?, |r| per_game(r.wal(), r.games_played())))
}

/// Included championship matchups won by each team. Tied championships count for nobody.
pub fn championship_count(year: &Year, filters: &YearFilters) -> Result<TeamStat<u32>, AnalyticsError> {
    let mut counts = team_map(year, 0u32);

    for matchup in included_matchups(year, filters) {
        if matchup.matchup_type != MatchupType::Championship {
            continue;
        }
        if let Some(winner) = outcome::winning_team(matchup)? {
            *slot(&mut counts, year, winner)? += 1;
        }
    }

    Ok(counts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::FilterOptions;
    use crate::fixtures::{YearBuilder, owners};
    use core_types::Matchup;
    use rust_decimal_macros::dec;

    fn resolve(year: &Year, options: FilterOptions) -> YearFilters {
        YearFilters::resolve(year, &options).unwrap()
    }

    #[test]
    fn one_week_two_teams_no_ties() {
        let owners = owners(&["a", "b"]);
        let year = YearBuilder::new(2020, &owners)
            .week(|t| vec![Matchup::new(t[0], t[1], dec!(1), dec!(2))])
            .build();
        let (a, b) = (year.teams[0].id, year.teams[1].id);
        let filters = resolve(&year, FilterOptions::default());

        let wins = wins(&year, &filters).unwrap();
        let losses = losses(&year, &filters).unwrap();
        let ties = ties(&year, &filters).unwrap();
        let wal = wal(&year, &filters).unwrap();

        assert_eq!((wins[&a], wins[&b]), (0, 1));
        assert_eq!((losses[&a], losses[&b]), (1, 0));
        assert_eq!((ties[&a], ties[&b]), (0, 0));
        assert_eq!((wal[&a], wal[&b]), (dec!(0), dec!(1)));
    }

    #[test]
    fn tiebreaker_turns_a_tie_into_a_win() {
        let owners = owners(&["a", "b"]);
        let year = YearBuilder::new(2020, &owners)
            .week(|t| vec![Matchup::new(t[0], t[1], dec!(1), dec!(1)).with_tiebreaker(Side::A)])
            .build();
        let (a, b) = (year.teams[0].id, year.teams[1].id);
        let filters = resolve(&year, FilterOptions::default());

        let records = records(&year, &filters).unwrap();
        assert_eq!(records[&a], Record { wins: 1, losses: 0, ties: 0 });
        assert_eq!(records[&b], Record { wins: 0, losses: 1, ties: 0 });
    }

    #[test]
    fn outcomes_account_for_every_matchup() {
        let owners = owners(&["a", "b", "c", "d"]);
        let year = YearBuilder::new(2020, &owners)
            .week(|t| {
                vec![
                    Matchup::new(t[0], t[1], dec!(100), dec!(90)),
                    Matchup::new(t[2], t[3], dec!(80), dec!(80)),
                ]
            })
            .week(|t| {
                vec![
                    Matchup::new(t[0], t[2], dec!(70.5), dec!(70.6)),
                    Matchup::new(t[1], t[3], dec!(95), dec!(95)).with_tiebreaker(Side::B),
                ]
            })
            .build();
        let filters = resolve(&year, FilterOptions::default());
        let records = records(&year, &filters).unwrap();

        let total_wins: u32 = records.values().map(|r| r.wins).sum();
        let total_losses: u32 = records.values().map(|r| r.losses).sum();
        let total_ties: u32 = records.values().map(|r| r.ties).sum();
        assert_eq!(total_wins, total_losses);
        assert_eq!(total_wins + total_ties / 2, 4);

        for record in records.values() {
            assert_eq!(record.wal(), Decimal::from(record.wins) + Decimal::from(record.ties) * dec!(0.5));
        }

        let pct = win_percentage(&year, &filters).unwrap();
        assert_eq!(pct[&year.teams[2].id], dec!(0.75));
        assert_eq!(pct[&year.teams[3].id], dec!(0.75));
        assert_eq!(pct[&year.teams[1].id], Decimal::ZERO);
    }

    #[test]
    fn teams_without_games_get_zero_not_errors() {
        let owners = owners(&["a", "b", "c"]);
        let year = YearBuilder::new(2020, &owners)
            .week(|t| vec![Matchup::new(t[0], t[1], dec!(10), dec!(20))])
            .build();
        let idle = year.teams[2].id;
        let filters = resolve(&year, FilterOptions::default());

        assert_eq!(games_played(&year, &filters).unwrap()[&idle], 0);
        assert_eq!(win_percentage(&year, &filters).unwrap()[&idle], Decimal::ZERO);
        assert_eq!(wal_per_game(&year, &filters).unwrap()[&idle], Decimal::ZERO);
    }

    #[test]
    fn segment_and_week_filters_restrict_matchups() {
        let owners = owners(&["a", "b"]);
        let year = YearBuilder::new(2020, &owners)
            .week(|t| vec![Matchup::new(t[0], t[1], dec!(1), dec!(2))])
            .week(|t| vec![Matchup::new(t[0], t[1], dec!(3), dec!(2)).with_matchup_type(MatchupType::Playoff)])
            .week(|t| {
                vec![Matchup::new(t[0], t[1], dec!(5), dec!(4)).with_matchup_type(MatchupType::Championship)]
            })
            .week(|t| vec![Matchup::new(t[0], t[1], dec!(9), dec!(1)).with_matchup_type(MatchupType::Ignored)])
            .build();
        let a = year.teams[0].id;

        let all = resolve(&year, FilterOptions::default());
        assert_eq!(wins(&year, &all).unwrap()[&a], 2);

        let regular = resolve(&year, FilterOptions { only_regular_season: true, ..Default::default() });
        assert_eq!(wins(&year, &regular).unwrap()[&a], 0);

        let post = resolve(&year, FilterOptions { only_post_season: true, ..Default::default() });
        assert_eq!(wins(&year, &post).unwrap()[&a], 2);

        let first_two = resolve(&year, FilterOptions { week_number_end: Some(2), ..Default::default() });
        assert_eq!(games_played(&year, &first_two).unwrap()[&a], 2);
        assert_eq!(championship_count(&year, &first_two).unwrap()[&a], 0);
        assert_eq!(championship_count(&year, &all).unwrap()[&a], 1);
    }

    #[test]
    fn tied_championship_counts_for_nobody() {
        let owners = owners(&["a", "b"]);
        let year = YearBuilder::new(2020, &owners)
            .week(|t| {
                vec![Matchup::new(t[0], t[1], dec!(5), dec!(5)).with_matchup_type(MatchupType::Championship)]
            })
            .build();
        let filters = resolve(&year, FilterOptions::default());
        let counts = championship_count(&year, &filters).unwrap();
        assert!(counts.values().all(|c| *c == 0));
    }

    #[test]
    fn unknown_team_in_matchup_is_a_missing_reference() {
        let owners = owners(&["a", "b"]);
        let stranger = uuid::Uuid::new_v4();
        let year = YearBuilder::new(2020, &owners)
            .week(|t| vec![Matchup::new(t[0], stranger, dec!(1), dec!(2))])
            .build();
        let filters = resolve(&year, FilterOptions::default());
        assert!(matches!(wins(&year, &filters), Err(AnalyticsError::MissingReference(_))));
    }
}
