//! Builders for small leagues used across the unit tests.

use core_types::{League, Matchup, Owner, Team, TeamId, Week, Year};

/// Builds a year with one team per owner, in owner order.
pub struct YearBuilder {
    year_number: u32,
    teams: Vec<Team>,
    weeks: Vec<Week>,
}

impl YearBuilder {
    pub fn new(year_number: u32, owners: &[Owner]) -> Self {
        let teams = owners
            .iter()
            .map(|o| Team::new(o.id, format!("{} {}", o.name, year_number)))
            .collect();
        Self {
            year_number,
            teams,
            weeks: Vec::new(),
        }
    }

    /// Appends the next week; the closure receives the team ids in owner order.
    pub fn week(mut self, matchups: impl FnOnce(&[TeamId]) -> Vec<Matchup>) -> Self {
        let ids: Vec<TeamId> = self.teams.iter().map(|t| t.id).collect();
        let week_number = self.weeks.len() as u32 + 1;
        self.weeks.push(Week::new(week_number, matchups(&ids)));
        self
    }

    pub fn build(self) -> Year {
        Year::new(self.year_number, self.teams, self.weeks)
    }
}

pub fn owners(names: &[&str]) -> Vec<Owner> {
    names.iter().map(|n| Owner::new(*n)).collect()
}

pub fn league(owners: Vec<Owner>, years: Vec<Year>) -> League {
    League::new("Test League", owners, years)
}
