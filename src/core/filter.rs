//! Player list filtering
//!
//! A filter combines four independent predicates with logical AND. The
//! result is always a stable sub-sequence of the input.

use crate::core::data::{AttributeKey, Player, Position};
use std::fmt;
use std::str::FromStr;

/// Minimum score a player needs in the selected attribute
pub const ATTRIBUTE_THRESHOLD: u8 = 7;

/// Sentinel spelling for "no constraint"
pub const ALL: &str = "all";

/// A selector value: either unconstrained or one specific value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector<T> {
    All,
    Only(T),
}

impl<T> Default for Selector<T> {
    fn default() -> Self {
        Selector::All
    }
}

impl<T: PartialEq> Selector<T> {
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Selector::All => true,
            Selector::Only(wanted) => wanted == value,
        }
    }
}

impl<T> FromStr for Selector<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case(ALL) {
            return Ok(Selector::All);
        }
        s.parse::<T>().map(Selector::Only).map_err(|e| e.to_string())
    }
}

impl<T: fmt::Display> fmt::Display for Selector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::All => f.write_str(ALL),
            Selector::Only(value) => value.fmt(f),
        }
    }
}

/// Filter state of the player list view
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerFilter {
    pub query: String,
    pub team: Selector<String>,
    pub position: Selector<Position>,
    pub attribute: Selector<AttributeKey>,
}

impl PlayerFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_team(mut self, team: Selector<String>) -> Self {
        self.team = team;
        self
    }

    pub fn with_position(mut self, position: Selector<Position>) -> Self {
        self.position = position;
        self
    }

    pub fn with_attribute(mut self, attribute: Selector<AttributeKey>) -> Self {
        self.attribute = attribute;
        self
    }

    /// True when no predicate constrains the list
    pub fn is_unconstrained(&self) -> bool {
        self.query.is_empty()
            && self.team == Selector::All
            && self.position == Selector::All
            && self.attribute == Selector::All
    }

    fn matches_text(&self, player: &Player) -> bool {
        if self.query.is_empty() {
            return true;
        }
        let needle = self.query.to_lowercase();
        player.name.to_lowercase().contains(&needle) || player.team.to_lowercase().contains(&needle)
    }

    fn matches_attribute(&self, player: &Player) -> bool {
        match self.attribute {
            Selector::All => true,
            Selector::Only(key) => player.attributes.get(key) >= ATTRIBUTE_THRESHOLD,
        }
    }

    pub fn matches(&self, player: &Player) -> bool {
        self.matches_text(player)
            && self.team.admits(&player.team)
            && self.position.admits(&player.position)
            && self.matches_attribute(player)
    }

    /// Players passing every predicate, in catalog order
    pub fn apply<'a>(&self, players: &'a [Player]) -> Vec<&'a Player> {
        players.iter().filter(|p| self.matches(p)).collect()
    }
}
