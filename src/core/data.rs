//! Core data structures for the futsal catalog
//!
//! Every entity here is a value object: identified by its key field,
//! never mutated after the catalog is built.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Color used when a category or position cannot be resolved
pub const NEUTRAL_COLOR: &str = "#6b7280";

/// League tier a team competes in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TeamCategory {
    #[serde(rename = "Primeira Liga")]
    PrimeiraLiga,
    #[serde(rename = "Segunda Liga")]
    SegundaLiga,
    #[serde(rename = "Distrital")]
    Distrital,
    #[serde(rename = "Regional")]
    Regional,
}

impl TeamCategory {
    pub const ALL: [TeamCategory; 4] = [
        TeamCategory::PrimeiraLiga,
        TeamCategory::SegundaLiga,
        TeamCategory::Distrital,
        TeamCategory::Regional,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TeamCategory::PrimeiraLiga => "Primeira Liga",
            TeamCategory::SegundaLiga => "Segunda Liga",
            TeamCategory::Distrital => "Distrital",
            TeamCategory::Regional => "Regional",
        }
    }

    fn key(&self) -> &'static str {
        match self {
            TeamCategory::PrimeiraLiga => "top-tier",
            TeamCategory::SegundaLiga => "second-tier",
            TeamCategory::Distrital => "district",
            TeamCategory::Regional => "regional",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            TeamCategory::PrimeiraLiga => "#1e3a8a",
            TeamCategory::SegundaLiga => "#059669",
            TeamCategory::Distrital => "#7c3aed",
            TeamCategory::Regional => "#f59e0b",
        }
    }

    /// Display color for free-form category input, neutral when unknown
    pub fn color_for(input: &str) -> &'static str {
        input
            .parse::<TeamCategory>()
            .map(|category| category.color())
            .unwrap_or(NEUTRAL_COLOR)
    }
}

impl FromStr for TeamCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.label().to_lowercase() == wanted || c.key() == wanted)
            .ok_or_else(|| format!("unknown team category '{}'", s.trim()))
    }
}

impl fmt::Display for TeamCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Futsal playing position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    #[serde(rename = "Guarda-redes")]
    Goalkeeper,
    #[serde(rename = "Fixo")]
    Fixed,
    #[serde(rename = "Ala")]
    Winger,
    #[serde(rename = "Pivot")]
    Pivot,
}

impl Position {
    pub const ALL: [Position; 4] = [
        Position::Goalkeeper,
        Position::Fixed,
        Position::Winger,
        Position::Pivot,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Position::Goalkeeper => "Guarda-redes",
            Position::Fixed => "Fixo",
            Position::Winger => "Ala",
            Position::Pivot => "Pivot",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Position::Goalkeeper => "goalkeeper",
            Position::Fixed => "fixed",
            Position::Winger => "winger",
            Position::Pivot => "pivot",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Position::Goalkeeper => "#FF6B6B",
            Position::Fixed => "#4ECDC4",
            Position::Winger => "#45B7D1",
            Position::Pivot => "#FFE66D",
        }
    }

    /// Display color for free-form position input, neutral when unknown
    pub fn color_for(input: &str) -> &'static str {
        input
            .parse::<Position>()
            .map(|position| position.color())
            .unwrap_or(NEUTRAL_COLOR)
    }
}

impl FromStr for Position {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|p| p.label().to_lowercase() == wanted || p.key() == wanted)
            .ok_or_else(|| format!("unknown position '{}'", s.trim()))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One of the four scored player attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeKey {
    Physical,
    Technical,
    Mental,
    Experience,
}

impl AttributeKey {
    pub const ALL: [AttributeKey; 4] = [
        AttributeKey::Physical,
        AttributeKey::Technical,
        AttributeKey::Mental,
        AttributeKey::Experience,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            AttributeKey::Physical => "physical",
            AttributeKey::Technical => "technical",
            AttributeKey::Mental => "mental",
            AttributeKey::Experience => "experience",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AttributeKey::Physical => "Físico",
            AttributeKey::Technical => "Técnico",
            AttributeKey::Mental => "Mental",
            AttributeKey::Experience => "Experiência",
        }
    }

    /// Column header used by compact list views
    pub fn short_label(&self) -> &'static str {
        match self {
            AttributeKey::Physical => "Fís",
            AttributeKey::Technical => "Téc",
            AttributeKey::Mental => "Men",
            AttributeKey::Experience => "Exp",
        }
    }
}

impl FromStr for AttributeKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|a| a.key() == wanted || a.label().to_lowercase() == wanted)
            .ok_or_else(|| format!("unknown attribute '{}'", s.trim()))
    }
}

impl fmt::Display for AttributeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// The four attribute scores, conventionally 1 to 10
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeScores {
    pub physical: u8,
    pub technical: u8,
    pub mental: u8,
    pub experience: u8,
}

impl AttributeScores {
    pub fn new(physical: u8, technical: u8, mental: u8, experience: u8) -> Self {
        Self {
            physical,
            technical,
            mental,
            experience,
        }
    }

    pub fn get(&self, key: AttributeKey) -> u8 {
        match key {
            AttributeKey::Physical => self.physical,
            AttributeKey::Technical => self.technical,
            AttributeKey::Mental => self.mental,
            AttributeKey::Experience => self.experience,
        }
    }
}

/// Display band of a score out of ten
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Elite,
    Good,
    Low,
}

impl ScoreBand {
    pub fn from_score(score: u8) -> Self {
        if score >= 9 {
            ScoreBand::Elite
        } else if score >= 7 {
            ScoreBand::Good
        } else {
            ScoreBand::Low
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            ScoreBand::Elite => "#059669",
            ScoreBand::Good => "#f59e0b",
            ScoreBand::Low => "#dc2626",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: String,
    pub name: String,
    pub category: TeamCategory,
    pub color: String,
    pub location: String,
    pub founded: i32,
    #[serde(rename = "players")]
    pub player_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: String,
    pub name: String,
    pub position: Position,
    /// Team name; not checked against the team list
    pub team: String,
    pub number: u8,
    pub age: u8,
    pub height: String,
    pub weight: String,
    pub attributes: AttributeScores,
    pub color: String,
}

/// A single line of the player detail attribute panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeRecord {
    pub id: String,
    pub name: String,
    pub value: String,
    pub category: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerProfile {
    pub id: String,
    pub name: String,
    pub position: Position,
    pub birthday: String,
    pub number: u8,
    pub team: String,
    pub attributes: Vec<AttributeRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffMember {
    pub id: String,
    pub name: String,
    pub role: String,
    pub color: String,
    pub team: String,
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.name, self.category)
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {} ({})", self.number, self.name, self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parsing_accepts_label_and_key() {
        assert_eq!("Primeira Liga".parse::<TeamCategory>(), Ok(TeamCategory::PrimeiraLiga));
        assert_eq!("distrital".parse::<TeamCategory>(), Ok(TeamCategory::Distrital));
        assert_eq!("second-tier".parse::<TeamCategory>(), Ok(TeamCategory::SegundaLiga));
        assert!("Terceira Liga".parse::<TeamCategory>().is_err());
    }

    #[test]
    fn test_category_color_falls_back_to_neutral() {
        assert_eq!(TeamCategory::color_for("Regional"), "#f59e0b");
        assert_eq!(TeamCategory::color_for("Amadores"), NEUTRAL_COLOR);
        assert_eq!(TeamCategory::color_for(""), NEUTRAL_COLOR);
    }

    #[test]
    fn test_position_parsing() {
        assert_eq!("Guarda-redes".parse::<Position>(), Ok(Position::Goalkeeper));
        assert_eq!("winger".parse::<Position>(), Ok(Position::Winger));
        assert_eq!(" FIXO ".parse::<Position>(), Ok(Position::Fixed));
        assert!("libero".parse::<Position>().is_err());
        assert_eq!(Position::color_for("Pivot"), "#FFE66D");
        assert_eq!(Position::color_for("libero"), NEUTRAL_COLOR);
    }

    #[test]
    fn test_attribute_key_parsing() {
        assert_eq!("technical".parse::<AttributeKey>(), Ok(AttributeKey::Technical));
        assert_eq!("Físico".parse::<AttributeKey>(), Ok(AttributeKey::Physical));
        assert_eq!("EXPERIÊNCIA".parse::<AttributeKey>(), Ok(AttributeKey::Experience));
        assert!("speed".parse::<AttributeKey>().is_err());
    }

    #[test]
    fn test_scores_lookup_and_bands() {
        let scores = AttributeScores::new(8, 9, 6, 7);
        assert_eq!(scores.get(AttributeKey::Physical), 8);
        assert_eq!(scores.get(AttributeKey::Technical), 9);
        assert_eq!(scores.get(AttributeKey::Mental), 6);
        assert_eq!(scores.get(AttributeKey::Experience), 7);

        assert_eq!(ScoreBand::from_score(9), ScoreBand::Elite);
        assert_eq!(ScoreBand::from_score(7), ScoreBand::Good);
        assert_eq!(ScoreBand::from_score(6), ScoreBand::Low);
    }
}
