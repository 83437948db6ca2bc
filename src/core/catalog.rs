//! The immutable catalog of teams, players, staff, and player profiles

use crate::core::data::{Player, PlayerProfile, Position, StaffMember, Team};
use crate::core::filter::ALL;
use crate::core::seed;
use crate::utils::error::{AppError, AppResult};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Identifier of the record shown when a detail lookup misses
pub const DEFAULT_ID: &str = "1";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub teams: Vec<Team>,
    pub players: Vec<Player>,
    #[serde(default)]
    pub staff: Vec<StaffMember>,
    #[serde(default)]
    pub profiles: Vec<PlayerProfile>,
}

impl Catalog {
    /// Build a catalog, checking identifier uniqueness and the default profile
    pub fn new(
        teams: Vec<Team>,
        players: Vec<Player>,
        staff: Vec<StaffMember>,
        profiles: Vec<PlayerProfile>,
    ) -> AppResult<Self> {
        let catalog = Self {
            teams,
            players,
            staff,
            profiles,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    /// The catalog the application ships with
    pub fn builtin() -> Self {
        Self {
            teams: seed::teams(),
            players: seed::players(),
            staff: seed::staff(),
            profiles: seed::profiles(),
        }
    }

    pub fn load(path: &Path) -> AppResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| AppError::Io(format!("Failed to read catalog file {}: {}", path.display(), e)))?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> AppResult<Self> {
        let catalog: Catalog = toml::from_str(content)
            .map_err(|e| AppError::Catalog(format!("Failed to parse catalog: {}", e)))?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn validate(&self) -> AppResult<()> {
        ensure_unique("team", self.teams.iter().map(|t| t.id.as_str()))?;
        ensure_unique("player", self.players.iter().map(|p| p.id.as_str()))?;
        ensure_unique("staff", self.staff.iter().map(|s| s.id.as_str()))?;
        ensure_unique("profile", self.profiles.iter().map(|p| p.id.as_str()))?;

        if self.find_profile(DEFAULT_ID).is_none() {
            return Err(AppError::Catalog(format!(
                "Default player profile '{}' is missing",
                DEFAULT_ID
            )));
        }

        Ok(())
    }

    pub fn find_team(&self, id: &str) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == id)
    }

    pub fn find_team_by_name(&self, name: &str) -> Option<&Team> {
        self.teams.iter().find(|t| t.name == name)
    }

    pub fn find_player(&self, id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn find_profile(&self, id: &str) -> Option<&PlayerProfile> {
        self.profiles.iter().find(|p| p.id == id)
    }

    /// Profile for `id`, or the default profile when `id` is absent or unknown
    pub fn resolve_profile(&self, id: Option<&str>) -> Option<&PlayerProfile> {
        id.and_then(|id| self.find_profile(id))
            .or_else(|| self.find_profile(DEFAULT_ID))
    }

    /// Team by id or exact name, or the default team when neither matches
    pub fn resolve_team(&self, id: Option<&str>) -> Option<&Team> {
        id.and_then(|id| self.find_team(id).or_else(|| self.find_team_by_name(id)))
            .or_else(|| self.find_team(DEFAULT_ID))
    }

    pub fn players_of<'a>(&'a self, team_name: &'a str) -> impl Iterator<Item = &'a Player> + 'a {
        self.players.iter().filter(move |p| p.team == team_name)
    }

    pub fn staff_of<'a>(&'a self, team_name: &'a str) -> impl Iterator<Item = &'a StaffMember> + 'a {
        self.staff.iter().filter(move |s| s.team == team_name)
    }

    /// Team selector options: "all" then each team in first-seen player order
    pub fn team_options(&self) -> Vec<String> {
        let names: IndexSet<&str> = self.players.iter().map(|p| p.team.as_str()).collect();
        std::iter::once(ALL)
            .chain(names)
            .map(str::to_string)
            .collect()
    }

    /// Position selector options: "all" then each position in first-seen order
    pub fn position_options(&self) -> Vec<String> {
        let positions: IndexSet<Position> = self.players.iter().map(|p| p.position).collect();
        std::iter::once(ALL.to_string())
            .chain(positions.into_iter().map(|p| p.label().to_string()))
            .collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn ensure_unique<'a>(kind: &str, ids: impl Iterator<Item = &'a str>) -> AppResult<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(AppError::Catalog(format!("Duplicate {} identifier '{}'", kind, id)));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = Catalog::builtin();
        assert!(catalog.validate().is_ok());
        assert_eq!(catalog.teams.len(), 8);
        assert_eq!(catalog.players.len(), 14);
        assert_eq!(catalog.staff.len(), 3);
        assert_eq!(catalog.profiles.len(), 3);
    }

    #[test]
    fn test_resolve_profile_falls_back_to_default() {
        let catalog = Catalog::builtin();

        let telmo = catalog.resolve_profile(Some("2")).map(|p| p.name.as_str());
        assert_eq!(telmo, Some("Telmo Silva"));

        let unknown = catalog.resolve_profile(Some("999"));
        let absent = catalog.resolve_profile(None);
        assert!(unknown.is_some());
        assert_eq!(unknown, absent);
        assert_eq!(absent.map(|p| p.id.as_str()), Some(DEFAULT_ID));
    }

    #[test]
    fn test_resolve_team_falls_back_to_default() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.resolve_team(Some("3")).map(|t| t.name.as_str()), Some("Sporting CP"));
        assert_eq!(
            catalog.resolve_team(Some("Modicus")).map(|t| t.id.as_str()),
            Some("7")
        );
        assert_eq!(
            catalog.resolve_team(Some("nope")).map(|t| t.name.as_str()),
            Some("Quinta Sobrado")
        );
    }

    #[test]
    fn test_duplicate_identifiers_are_rejected() {
        let mut teams = seed::teams();
        teams[1].id = "1".to_string();
        let result = Catalog::new(teams, seed::players(), seed::staff(), seed::profiles());
        assert!(matches!(result, Err(AppError::Catalog(msg)) if msg.contains("Duplicate team")));
    }

    #[test]
    fn test_missing_default_profile_is_rejected() {
        let profiles: Vec<_> = seed::profiles().into_iter().filter(|p| p.id != DEFAULT_ID).collect();
        let result = Catalog::new(seed::teams(), seed::players(), seed::staff(), profiles);
        assert!(result.is_err());
    }

    #[test]
    fn test_selector_options_follow_first_seen_order() {
        let catalog = Catalog::builtin();
        assert_eq!(
            catalog.team_options(),
            vec!["all", "Quinta Sobrado", "Benfica", "Sporting CP"]
        );
        assert_eq!(
            catalog.position_options(),
            vec!["all", "Guarda-redes", "Fixo", "Ala", "Pivot"]
        );
    }

    #[test]
    fn test_catalog_from_toml() {
        let content = r##"
[[teams]]
id = "1"
name = "Fundão"
category = "Regional"
color = "#f59e0b"
location = "Fundão"
founded = 1990
players = 12

[[players]]
id = "1"
name = "Zé Tó"
position = "Fixo"
team = "Fundão"
number = 4
age = 31
height = "1.80m"
weight = "80kg"
color = "#4ECDC4"
attributes = { physical = 7, technical = 6, mental = 8, experience = 9 }

[[profiles]]
id = "1"
name = "Zé Tó"
position = "Fixo"
birthday = "1 de Maio de 1993"
number = 4
team = "Fundão"
attributes = []
"##;
        let catalog = Catalog::from_toml_str(content).expect("catalog parses");
        assert_eq!(catalog.teams[0].category, crate::core::data::TeamCategory::Regional);
        assert_eq!(catalog.players[0].position, Position::Fixed);
        assert!(catalog.staff.is_empty());
        assert_eq!(catalog.players_of("Fundão").count(), 1);
    }

    #[test]
    fn test_catalog_from_toml_rejects_unknown_category() {
        let content = r##"
players = []

[[teams]]
id = "1"
name = "X"
category = "Liga Pro"
color = "#000000"
location = "Y"
founded = 2000
players = 1
"##;
        assert!(matches!(Catalog::from_toml_str(content), Err(AppError::Catalog(_))));
    }
}
