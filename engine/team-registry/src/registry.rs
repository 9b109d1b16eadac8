use crate::error::{RegistryError, Result};
use crate::types::{Player, PlayerId, Team, TeamId};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::cmp::Reverse;
use std::collections::HashMap;
use tracing::info;

/// Team Registry - In-memory store of teams and players
///
/// The registry owns two mappings, team id to Team and player id to Player,
/// and layers registration and query operations directly on top. It is
/// exclusively owned by the calling process and accessed sequentially.
pub struct TeamRegistry {
    /// Map from team id to Team
    teams: HashMap<TeamId, Team>,

    /// Map from player id to Player
    players: HashMap<PlayerId, Player>,
}

impl TeamRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self { teams: HashMap::new(), players: HashMap::new() }
    }

    /// Register a new team with no captain
    ///
    /// Fails with `DuplicateIdentifier` if the id is already in use.
    pub fn register_team(
        &mut self,
        id: TeamId,
        name: String,
        founded: NaiveDate,
        primary_color: String,
        secondary_color: String,
    ) -> Result<()> {
        if self.teams.contains_key(&id) {
            return Err(RegistryError::DuplicateIdentifier(id));
        }

        info!("Registering team {} ({})", id, name);
        self.teams.insert(id, Team::new(id, name, founded, primary_color, secondary_color));
        Ok(())
    }

    /// Register a new player on an existing team
    ///
    /// Fails with `TeamNotFound` if the team is absent, then with
    /// `DuplicateIdentifier` if the player id is already in use.
    pub fn register_player(
        &mut self,
        id: PlayerId,
        team_id: TeamId,
        name: String,
        born: NaiveDate,
        skill_level: u32,
        salary: Decimal,
    ) -> Result<()> {
        self.team(team_id)?;

        if self.players.contains_key(&id) {
            return Err(RegistryError::DuplicateIdentifier(id));
        }

        info!("Registering player {} ({}) on team {}", id, name, team_id);
        self.players.insert(id, Player::new(id, team_id, name, born, skill_level, salary));
        Ok(())
    }

    /// Designate a player as captain of their own team
    ///
    /// Overwrites any previous captain unconditionally. A registered player
    /// always references a registered team, so only the player lookup can
    /// fail.
    pub fn set_captain(&mut self, player_id: PlayerId) -> Result<()> {
        let team_id = self.player(player_id)?.team_id;

        info!("Setting player {} as captain of team {}", player_id, team_id);
        if let Some(team) = self.teams.get_mut(&team_id) {
            team.captain = Some(player_id);
        }
        Ok(())
    }

    /// Get the captain of a team
    ///
    /// Fails with `CaptainNotSet` if no captain has been designated.
    pub fn captain_of(&self, team_id: TeamId) -> Result<PlayerId> {
        self.team(team_id)?.captain.ok_or(RegistryError::CaptainNotSet(team_id))
    }

    /// Get a player's name
    pub fn player_name(&self, player_id: PlayerId) -> Result<&str> {
        Ok(self.player(player_id)?.name.as_str())
    }

    /// Get a team's name
    pub fn team_name(&self, team_id: TeamId) -> Result<&str> {
        Ok(self.team(team_id)?.name.as_str())
    }

    /// Get the ids of all players on a team, ascending
    pub fn team_players(&self, team_id: TeamId) -> Result<Vec<PlayerId>> {
        self.team(team_id)?;

        let mut ids: Vec<PlayerId> = self.roster(team_id).map(|p| p.id).collect();
        ids.sort_unstable();
        Ok(ids)
    }

    /// Get the most skilled player on a team, ties broken by lowest id
    ///
    /// # Panics
    ///
    /// Panics if the team has no registered players.
    pub fn best_player(&self, team_id: TeamId) -> Result<PlayerId> {
        self.team(team_id)?;

        let mut roster: Vec<&Player> = self.roster(team_id).collect();
        roster.sort_by_key(|p| (Reverse(p.skill_level), p.id));
        Ok(roster.first().expect("team has no registered players").id)
    }

    /// Get the oldest player on a team, ties broken by lowest id
    ///
    /// # Panics
    ///
    /// Panics if the team has no registered players.
    pub fn oldest_player(&self, team_id: TeamId) -> Result<PlayerId> {
        self.team(team_id)?;

        let mut roster: Vec<&Player> = self.roster(team_id).collect();
        roster.sort_by_key(|p| (p.born, p.id));
        Ok(roster.first().expect("team has no registered players").id)
    }

    /// Get all team ids, ascending
    pub fn teams(&self) -> Vec<TeamId> {
        let mut ids: Vec<TeamId> = self.teams.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Get the highest paid player on a team, ties broken by lowest id
    ///
    /// Returns `Ok(None)` if the team has no registered players.
    pub fn highest_paid_player(&self, team_id: TeamId) -> Result<Option<PlayerId>> {
        self.team(team_id)?;

        let mut roster: Vec<&Player> = self.roster(team_id).collect();
        roster.sort_by_key(|p| (Reverse(p.salary), p.id));
        Ok(roster.first().map(|p| p.id))
    }

    /// Get a player's salary
    pub fn player_salary(&self, player_id: PlayerId) -> Result<Decimal> {
        Ok(self.player(player_id)?.salary)
    }

    /// Get the top `n` players across the whole registry
    ///
    /// Ordered by descending skill level, ties broken by ascending id.
    /// Returns fewer than `n` ids if the registry holds fewer players.
    pub fn top_players(&self, n: usize) -> Vec<PlayerId> {
        let mut players: Vec<&Player> = self.players.values().collect();
        players.sort_by_key(|p| (Reverse(p.skill_level), p.id));
        players.truncate(n);
        players.into_iter().map(|p| p.id).collect()
    }

    /// Get the jersey color the away team wears against a given home team
    ///
    /// The away team wears its secondary color when its primary color matches
    /// the home team's primary color, and its primary color otherwise.
    pub fn away_jersey_color(&self, home_id: TeamId, away_id: TeamId) -> Result<String> {
        let home = self.team(home_id)?;
        let away = self.team(away_id)?;

        if home.primary_color == away.primary_color {
            Ok(away.secondary_color.clone())
        } else {
            Ok(away.primary_color.clone())
        }
    }

    /// Get a team by id
    pub fn team(&self, team_id: TeamId) -> Result<&Team> {
        self.teams.get(&team_id).ok_or(RegistryError::TeamNotFound(team_id))
    }

    /// Get a player by id
    pub fn player(&self, player_id: PlayerId) -> Result<&Player> {
        self.players.get(&player_id).ok_or(RegistryError::PlayerNotFound(player_id))
    }

    /// Get the number of registered teams
    pub fn team_count(&self) -> usize {
        self.teams.len()
    }

    /// Get the number of registered players
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Check if the registry holds no teams and no players
    pub fn is_empty(&self) -> bool {
        self.teams.is_empty() && self.players.is_empty()
    }

    /// Search for players by partial name match, case insensitive
    pub fn search_players(&self, query: &str) -> Vec<&Player> {
        let query_lower = query.to_lowercase();
        let mut found: Vec<&Player> =
            self.players.values().filter(|p| p.name.to_lowercase().contains(&query_lower)).collect();
        found.sort_by_key(|p| p.id);
        found
    }

    fn roster(&self, team_id: TeamId) -> impl Iterator<Item = &Player> + '_ {
        self.players.values().filter(move |p| p.team_id == team_id)
    }
}

impl Default for TeamRegistry {
    fn default() -> Self {
        Self::new()
    }
}
