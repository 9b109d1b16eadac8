//! Type definitions for the team registry

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Caller-assigned team identifier, unique across the registry
pub type TeamId = u64;

/// Caller-assigned player identifier, unique across the registry
pub type PlayerId = u64;

/// A registered sports club with uniform colors and an optional captain
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    /// Unique team identifier
    pub id: TeamId,

    /// Team name (e.g., "Flamengo")
    pub name: String,

    /// Date the club was founded
    pub founded: NaiveDate,

    /// Primary uniform color
    pub primary_color: String,

    /// Secondary uniform color, worn when the primary clashes
    pub secondary_color: String,

    /// Designated captain, if one has been set
    pub captain: Option<PlayerId>,
}

impl Team {
    /// Create a new team with no captain
    pub fn new(
        id: TeamId,
        name: String,
        founded: NaiveDate,
        primary_color: String,
        secondary_color: String,
    ) -> Self {
        Self { id, name, founded, primary_color, secondary_color, captain: None }
    }
}

/// A registered athlete belonging to exactly one team
///
/// Players are immutable after registration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Unique player identifier
    pub id: PlayerId,

    /// Owning team; must reference a registered team at creation time
    pub team_id: TeamId,

    /// Player name
    pub name: String,

    /// Date of birth
    pub born: NaiveDate,

    /// Skill level used for rankings
    pub skill_level: u32,

    /// Salary as an exact decimal amount
    pub salary: Decimal,
}

impl Player {
    /// Create a new player
    pub fn new(
        id: PlayerId,
        team_id: TeamId,
        name: String,
        born: NaiveDate,
        skill_level: u32,
        salary: Decimal,
    ) -> Self {
        Self { id, team_id, name, born, skill_level, salary }
    }
}
