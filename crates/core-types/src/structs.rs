use crate::enums::{MatchupType, Side};
use crate::error::CoreError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type OwnerId = Uuid;
pub type TeamId = Uuid;

/// A real-world participant, reused across every year they play.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    pub id: OwnerId,
    pub name: String,
}

impl Owner {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
        }
    }
}

/// A season-scoped participation record of one owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: TeamId,
    pub owner_id: OwnerId,
    pub name: String,
}

impl Team {
    pub fn new(owner_id: OwnerId, name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            owner_id,
            name: name.into(),
        }
    }
}

/// One scored contest between two teams.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Matchup {
    pub team_a_id: TeamId,
    pub team_b_id: TeamId,
    pub team_a_score: Decimal,
    pub team_b_score: Decimal,
    #[serde(default)]
    pub team_a_has_tiebreaker: bool,
    #[serde(default)]
    pub team_b_has_tiebreaker: bool,
    #[serde(default = "default_matchup_type")]
    pub matchup_type: MatchupType,
}

fn default_matchup_type() -> MatchupType {
    MatchupType::RegularSeason
}

impl Matchup {
    /// Creates a regular season matchup with no tiebreakers.
    pub fn new(team_a_id: TeamId, team_b_id: TeamId, team_a_score: Decimal, team_b_score: Decimal) -> Self {
        Self {
            team_a_id,
            team_b_id,
            team_a_score,
            team_b_score,
            team_a_has_tiebreaker: false,
            team_b_has_tiebreaker: false,
            matchup_type: MatchupType::RegularSeason,
        }
    }

    pub fn with_matchup_type(mut self, matchup_type: MatchupType) -> Self {
        self.matchup_type = matchup_type;
        self
    }

    /// Grants the tiebreaker to one side. Only consulted when the scores are equal.
    pub fn with_tiebreaker(mut self, side: Side) -> Self {
        match side {
            Side::A => self.team_a_has_tiebreaker = true,
            Side::B => self.team_b_has_tiebreaker = true,
        }
        self
    }

    pub fn team_id(&self, side: Side) -> TeamId {
        match side {
            Side::A => self.team_a_id,
            Side::B => self.team_b_id,
        }
    }

    /// Both sides as `(team id, own score, opponent score)`.
    pub fn sides(&self) -> [(TeamId, Decimal, Decimal); 2] {
        [
            (self.team_a_id, self.team_a_score, self.team_b_score),
            (self.team_b_id, self.team_b_score, self.team_a_score),
        ]
    }

    /// Checks the shape invariants a loader is expected to guarantee.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.team_a_id == self.team_b_id {
            return Err(CoreError::InvalidInput(
                "matchup".to_string(),
                format!("team {} cannot play itself", self.team_a_id),
            ));
        }
        if self.team_a_score.is_sign_negative() || self.team_b_score.is_sign_negative() {
            return Err(CoreError::InvalidInput(
                "matchup".to_string(),
                "scores must be non-negative".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Week {
    pub week_number: u32,
    pub matchups: Vec<Matchup>,
}

impl Week {
    pub fn new(week_number: u32, matchups: Vec<Matchup>) -> Self {
        Self { week_number, matchups }
    }
}

/// A season: its teams and its weeks, in order, numbered from 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Year {
    pub year_number: u32,
    pub teams: Vec<Team>,
    pub weeks: Vec<Week>,
}

impl Year {
    pub fn new(year_number: u32, teams: Vec<Team>, weeks: Vec<Week>) -> Self {
        Self {
            year_number,
            teams,
            weeks,
        }
    }

    /// The number of weeks in the season, which is also its last week number.
    pub fn week_count(&self) -> u32 {
        self.weeks.len() as u32
    }

    pub fn team_ids(&self) -> Vec<TeamId> {
        self.teams.iter().map(|t| t.id).collect()
    }

    pub fn team(&self, team_id: TeamId) -> Result<&Team, CoreError> {
        self.teams
            .iter()
            .find(|t| t.id == team_id)
            .ok_or(CoreError::MissingTeam {
                team_id,
                year_number: self.year_number,
            })
    }

    /// Resolves the owner of a team through this year's team list.
    pub fn owner_id_of(&self, team_id: TeamId) -> Result<OwnerId, CoreError> {
        self.team(team_id).map(|t| t.owner_id)
    }

    /// Weeks whose number falls in `[start, end]`.
    pub fn weeks_between(&self, start: u32, end: u32) -> impl Iterator<Item = &Week> {
        self.weeks
            .iter()
            .filter(move |w| w.week_number >= start && w.week_number <= end)
    }

    /// Checks contiguous week numbering and every matchup's shape.
    pub fn validate(&self) -> Result<(), CoreError> {
        for (index, week) in self.weeks.iter().enumerate() {
            if week.week_number as usize != index + 1 {
                return Err(CoreError::InvalidInput(
                    format!("year {}", self.year_number),
                    format!("week at position {} is numbered {}", index + 1, week.week_number),
                ));
            }
            for matchup in &week.matchups {
                matchup.validate()?;
                self.team(matchup.team_a_id)?;
                self.team(matchup.team_b_id)?;
            }
        }
        Ok(())
    }
}

/// The root aggregate handed over by a league loader.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct League {
    pub name: String,
    pub owners: Vec<Owner>,
    pub years: Vec<Year>,
}

impl League {
    pub fn new(name: impl Into<String>, owners: Vec<Owner>, years: Vec<Year>) -> Self {
        Self {
            name: name.into(),
            owners,
            years,
        }
    }

    pub fn owner_ids(&self) -> Vec<OwnerId> {
        self.owners.iter().map(|o| o.id).collect()
    }

    pub fn owner(&self, owner_id: OwnerId) -> Result<&Owner, CoreError> {
        self.owners
            .iter()
            .find(|o| o.id == owner_id)
            .ok_or(CoreError::MissingOwner { owner_id })
    }

    pub fn year(&self, year_number: u32) -> Result<&Year, CoreError> {
        self.years
            .iter()
            .find(|y| y.year_number == year_number)
            .ok_or(CoreError::MissingYear(year_number))
    }

    pub fn first_year(&self) -> Option<&Year> {
        self.years.iter().min_by_key(|y| y.year_number)
    }

    pub fn last_year(&self) -> Option<&Year> {
        self.years.iter().max_by_key(|y| y.year_number)
    }

    /// Checks unique year numbers, every year, and that every team's owner exists.
    pub fn validate(&self) -> Result<(), CoreError> {
        let mut seen = Vec::with_capacity(self.years.len());
        for year in &self.years {
            if seen.contains(&year.year_number) {
                return Err(CoreError::InvalidInput(
                    "league".to_string(),
                    format!("year {} appears more than once", year.year_number),
                ));
            }
            seen.push(year.year_number);
            year.validate()?;
            for team in &year.teams {
                self.owner(team.owner_id)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn two_team_year(year_number: u32, a: &Owner, b: &Owner) -> Year {
        let team_a = Team::new(a.id, "A");
        let team_b = Team::new(b.id, "B");
        let week = Week::new(1, vec![Matchup::new(team_a.id, team_b.id, dec!(1), dec!(2))]);
        Year::new(year_number, vec![team_a, team_b], vec![week])
    }

    #[test]
    fn resolves_owner_through_the_year_team_list() {
        let a = Owner::new("a");
        let b = Owner::new("b");
        let year = two_team_year(2020, &a, &b);

        let team_id = year.teams[1].id;
        assert_eq!(year.owner_id_of(team_id), Ok(b.id));

        let stranger = Uuid::new_v4();
        assert_eq!(
            year.owner_id_of(stranger),
            Err(CoreError::MissingTeam { team_id: stranger, year_number: 2020 })
        );
    }

    #[test]
    fn league_validation_catches_unknown_owners_and_duplicate_years() {
        let a = Owner::new("a");
        let b = Owner::new("b");
        let league = League::new("L", vec![a.clone()], vec![two_team_year(2020, &a, &b)]);
        assert_eq!(league.validate(), Err(CoreError::MissingOwner { owner_id: b.id }));

        let league = League::new(
            "L",
            vec![a.clone(), b.clone()],
            vec![two_team_year(2020, &a, &b), two_team_year(2020, &a, &b)],
        );
        assert!(matches!(league.validate(), Err(CoreError::InvalidInput(..))));
    }

    #[test]
    fn year_validation_requires_contiguous_weeks() {
        let a = Owner::new("a");
        let b = Owner::new("b");
        let mut year = two_team_year(2020, &a, &b);
        year.weeks[0].week_number = 2;
        assert!(matches!(year.validate(), Err(CoreError::InvalidInput(..))));
    }

    #[test]
    fn negative_scores_and_self_play_are_rejected() {
        let team = Uuid::new_v4();
        assert!(Matchup::new(team, team, dec!(1), dec!(2)).validate().is_err());
        assert!(Matchup::new(team, Uuid::new_v4(), dec!(-1), dec!(2)).validate().is_err());
        assert!(Matchup::new(team, Uuid::new_v4(), dec!(0), dec!(2)).validate().is_ok());
    }

    #[test]
    fn matchup_deserializes_with_defaults() {
        let json = r#"{
            "teamAId": "6f1c3b1e-8a57-4a44-9d1f-2f7f1b1c9a01",
            "teamBId": "6f1c3b1e-8a57-4a44-9d1f-2f7f1b1c9a02",
            "teamAScore": "100.3",
            "teamBScore": "99.7"
        }"#;
        let matchup: Matchup = serde_json::from_str(json).unwrap();
        assert_eq!(matchup.team_a_score, dec!(100.3));
        assert_eq!(matchup.matchup_type, MatchupType::RegularSeason);
        assert!(!matchup.team_a_has_tiebreaker && !matchup.team_b_has_tiebreaker);
    }
}
