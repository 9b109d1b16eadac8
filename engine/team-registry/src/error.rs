//! Error types for the team registry

use crate::types::{PlayerId, TeamId};
use thiserror::Error;

/// Result type for registry operations
pub type Result<T> = std::result::Result<T, RegistryError>;

/// Errors that can occur in the team registry
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Identifier already in use: {0}")]
    DuplicateIdentifier(u64),

    #[error("Team not found: {0}")]
    TeamNotFound(TeamId),

    #[error("Player not found: {0}")]
    PlayerNotFound(PlayerId),

    #[error("No captain set for team: {0}")]
    CaptainNotSet(TeamId),
}
