use crate::error::AnalyticsError;
use core_types::{Matchup, Side, TeamId};

/// The classification of a single matchup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchupOutcome {
    Win(Side),
    Tie,
}

impl MatchupOutcome {
    pub fn winner(&self) -> Option<Side> {
        match self {
            MatchupOutcome::Win(side) => Some(*side),
            MatchupOutcome::Tie => None,
        }
    }

    pub fn loser(&self) -> Option<Side> {
        self.winner().map(|side| side.opposite())
    }
}

/// Decides a matchup from its scores, falling back to the tiebreaker flags on equal scores.
///
/// A matchup that grants the tiebreaker to both teams is corrupt input and is rejected,
/// whatever the scores.
pub fn resolve(matchup: &Matchup) -> Result<MatchupOutcome, AnalyticsError> {
    if matchup.team_a_has_tiebreaker && matchup.team_b_has_tiebreaker {
        return Err(AnalyticsError::ConflictingTiebreakers {
            team_a_id: matchup.team_a_id,
            team_b_id: matchup.team_b_id,
        });
    }

    let outcome = match matchup.team_a_score.cmp(&matchup.team_b_score) {
        std::cmp::Ordering::Greater => MatchupOutcome::Win(Side::A),
        std::cmp::Ordering::Less => MatchupOutcome::Win(Side::B),
        std::cmp::Ordering::Equal if matchup.team_a_has_tiebreaker => MatchupOutcome::Win(Side::A),
        std::cmp::Ordering::Equal if matchup.team_b_has_tiebreaker => MatchupOutcome::Win(Side::B),
        std::cmp::Ordering::Equal => MatchupOutcome::Tie,
    };
    Ok(outcome)
}

/// The id of the winning team, or `None` for a true tie.
pub fn winning_team(matchup: &Matchup) -> Result<Option<TeamId>, AnalyticsError> {
    Ok(resolve(matchup)?.winner().map(|side| matchup.team_id(side)))
}
