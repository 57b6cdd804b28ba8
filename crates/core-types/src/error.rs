use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Invalid input for {0}: {1}")]
    InvalidInput(String, String),

    #[error("Team {team_id} is not part of year {year_number}")]
    MissingTeam { team_id: Uuid, year_number: u32 },

    #[error("Owner {owner_id} is not part of the league")]
    MissingOwner { owner_id: Uuid },

    #[error("Year {0} is not part of the league")]
    MissingYear(u32),
}
