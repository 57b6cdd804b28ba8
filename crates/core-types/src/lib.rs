//! # League Core Types
//!
//! The read-only data model shared by every other crate: owners, season-scoped
//! teams, weeks of scored matchups, years and the league that holds them.
//!
//! Owners are the stable identity. A team exists for exactly one year and points
//! at its owner by id; all cross references are resolved through the helpers on
//! [`Year`] and [`League`], never by object identity.

pub mod enums;
pub mod error;
pub mod structs;

// Re-export the core types to provide a clean public API.
pub use enums::{MatchupType, Side};
pub use error::CoreError;
pub use structs::{League, Matchup, Owner, OwnerId, Team, TeamId, Week, Year};
