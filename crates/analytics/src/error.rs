use core_types::{CoreError, TeamId};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalyticsError {
    #[error("Invalid filter: {0}")]
    InvalidFilter(String),

    #[error("Missing reference in league data: {0}")]
    MissingReference(#[from] CoreError),

    #[error("Matchup between {team_a_id} and {team_b_id} grants the tiebreaker to both teams")]
    ConflictingTiebreakers { team_a_id: TeamId, team_b_id: TeamId },

    #[error("Calculation error: {0}")]
    Calculation(String),
}
