use serde::{Deserialize, Serialize};

/// The segment of the season a matchup belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchupType {
    RegularSeason,
    Playoff,
    Championship,
    /// Played but excluded from every statistic (e.g. consolation games).
    Ignored,
}

impl MatchupType {
    /// Returns true for the playoff and championship segments.
    pub fn is_post_season(&self) -> bool {
        matches!(self, MatchupType::Playoff | MatchupType::Championship)
    }
}

/// One side of a matchup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    A,
    B,
}

impl Side {
    /// Returns the other side of the matchup
    pub fn opposite(&self) -> Self {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }
}
