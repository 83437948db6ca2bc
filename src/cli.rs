use crate::config::Config;
use crate::core::data::{AttributeKey, Position};
use crate::core::filter::{PlayerFilter, Selector};
use crate::core::forms::{PlayerForm, TeamForm};
use crate::core::operations::CatalogOperations;
use crate::manager;
use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "futsal")]
#[command(about = "Futsal team and player catalog")]
#[command(version)]
pub struct Cli {
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[arg(short, long)]
    pub debug: bool,

    #[arg(short = 'i', long, help = "Run in interactive mode")]
    pub interactive: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Commands {
    /// Run the command. `config_path` is the file `config` was loaded from.
    pub async fn execute(self, config: Config, config_path: &Path, interactive: bool) -> Result<()> {
        match self {
            // Runs before the catalog is built so a broken override file can still be fixed
            Commands::Config(args) => {
                manager::handle_config_command(config, config_path, args.command)?
            },
            Commands::Dashboard => manager::handle_dashboard_command(&config)?,
            Commands::Teams(args) => {
                let ops = CatalogOperations::from_config(&config)?;
                match args.command.unwrap_or_default() {
                    TeamCommands::List { format } => {
                        manager::handle_team_list_command(&ops, &config, format)?
                    }
                    TeamCommands::Show { id } => {
                        manager::handle_team_show_command(&ops, &config, id.as_deref())?
                    }
                    TeamCommands::Add(add) => {
                        manager::handle_team_add_command(&ops, &add, interactive).await?
                    }
                }
            }
            Commands::Players(args) => {
                let ops = CatalogOperations::from_config(&config)?;
                match args.command.unwrap_or_default() {
                    PlayerCommands::List(list) => {
                        manager::handle_player_list_command(&ops, &config, &list, interactive)?
                    }
                    PlayerCommands::Show { id } => {
                        manager::handle_player_show_command(&ops, &config, id.as_deref())?
                    }
                    PlayerCommands::Add(add) => {
                        manager::handle_player_add_command(&ops, &add, interactive).await?
                    }
                }
            }
        }
        Ok(())
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the main menu
    Dashboard,

    /// Browse and add teams
    Teams(TeamsArgs),

    /// Browse and add players
    Players(PlayersArgs),

    /// Configuration management
    Config(ConfigArgs),
}

#[derive(Args)]
pub struct TeamsArgs {
    #[command(subcommand)]
    pub command: Option<TeamCommands>,
}

#[derive(Subcommand)]
pub enum TeamCommands {
    /// List teams grouped by category
    List {
        #[arg(short, long)]
        format: Option<ListFormat>,
    },

    /// Show a team with its staff and roster
    Show {
        #[arg(help = "Team ID or name (unknown or missing values show the default team)")]
        id: Option<String>,
    },

    /// Fill in and submit the add-team form
    Add(AddTeamArgs),
}

impl Default for TeamCommands {
    fn default() -> Self {
        TeamCommands::List { format: None }
    }
}

#[derive(Args)]
pub struct PlayersArgs {
    #[command(subcommand)]
    pub command: Option<PlayerCommands>,
}

#[derive(Subcommand)]
pub enum PlayerCommands {
    /// List players, optionally filtered
    List(PlayerListArgs),

    /// Show a player's profile and attributes
    Show {
        #[arg(help = "Player ID (unknown or missing IDs show the default profile)")]
        id: Option<String>,
    },

    /// Fill in and submit the add-player form
    Add(AddPlayerArgs),
}

impl Default for PlayerCommands {
    fn default() -> Self {
        PlayerCommands::List(PlayerListArgs::default())
    }
}

#[derive(Args, Clone, Debug, Default)]
pub struct PlayerListArgs {
    #[arg(help = "Case-insensitive match against player or team name")]
    pub query: Option<String>,

    #[arg(short, long, default_value = "all", help = "Team name or 'all'")]
    pub team: Selector<String>,

    #[arg(short, long, default_value = "all", help = "Position key or label, or 'all'")]
    pub position: Selector<Position>,

    #[arg(short, long, default_value = "all", help = "Attribute that must be 7 or higher, or 'all'")]
    pub attribute: Selector<AttributeKey>,

    #[arg(short, long)]
    pub format: Option<ListFormat>,
}

impl PlayerListArgs {
    pub fn to_filter(&self) -> PlayerFilter {
        PlayerFilter::new()
            .with_query(self.query.clone().unwrap_or_default())
            .with_team(self.team.clone())
            .with_position(self.position.clone())
            .with_attribute(self.attribute.clone())
    }
}

#[derive(Args, Clone, Debug, Default)]
pub struct AddTeamArgs {
    #[arg(short, long)]
    pub name: Option<String>,

    #[arg(short, long)]
    pub category: Option<String>,

    #[arg(short, long)]
    pub location: Option<String>,

    #[arg(long)]
    pub founded: Option<String>,

    #[arg(long)]
    pub venue: Option<String>,

    #[arg(long)]
    pub capacity: Option<String>,

    #[arg(short, long)]
    pub description: Option<String>,

    #[arg(long, help = "Start from sample values instead of an empty form")]
    pub prefill: bool,
}

impl AddTeamArgs {
    pub fn to_form(&self) -> TeamForm {
        let mut form = if self.prefill {
            TeamForm::sample()
        } else {
            TeamForm::default()
        };
        let overrides = [
            &self.name,
            &self.category,
            &self.location,
            &self.founded,
            &self.venue,
            &self.capacity,
            &self.description,
        ];
        for (field, value) in form.fields_mut().into_iter().zip(overrides) {
            if let Some(value) = value {
                *field = value.clone();
            }
        }
        form
    }
}

#[derive(Args, Clone, Debug, Default)]
pub struct AddPlayerArgs {
    #[arg(short, long)]
    pub name: Option<String>,

    #[arg(short, long)]
    pub position: Option<String>,

    #[arg(short, long)]
    pub team: Option<String>,

    #[arg(long)]
    pub number: Option<String>,

    #[arg(long)]
    pub age: Option<String>,

    #[arg(long)]
    pub height: Option<String>,

    #[arg(long)]
    pub weight: Option<String>,

    #[arg(long)]
    pub physical: Option<String>,

    #[arg(long)]
    pub technical: Option<String>,

    #[arg(long)]
    pub mental: Option<String>,

    #[arg(long)]
    pub experience: Option<String>,

    #[arg(long, help = "Start from sample values instead of an empty form")]
    pub prefill: bool,
}

impl AddPlayerArgs {
    pub fn to_form(&self) -> PlayerForm {
        let mut form = if self.prefill {
            PlayerForm::sample()
        } else {
            PlayerForm::default()
        };
        let overrides = [
            &self.name,
            &self.position,
            &self.team,
            &self.number,
            &self.age,
            &self.height,
            &self.weight,
            &self.physical,
            &self.technical,
            &self.mental,
            &self.experience,
        ];
        for (field, value) in form.fields_mut().into_iter().zip(overrides) {
            if let Some(value) = value {
                *field = value.clone();
            }
        }
        form
    }
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListFormat {
    #[default]
    Simple,
    Detailed,
    Table,
    Json,
}

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: Option<ConfigCommands>,
}

#[derive(Subcommand, Clone)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Open configuration file in editor
    Open,

    /// Reset configuration to defaults
    Reset,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_player_list_selectors_parse() {
        let cli = parse(&[
            "futsal", "players", "list", "silva", "--position", "Ala", "--attribute", "technical",
        ]);
        let Commands::Players(PlayersArgs {
            command: Some(PlayerCommands::List(list)),
        }) = cli.command
        else {
            panic!("expected players list");
        };

        let filter = list.to_filter();
        assert_eq!(filter.query, "silva");
        assert_eq!(filter.team, Selector::All);
        assert_eq!(filter.position, Selector::Only(Position::Winger));
        assert_eq!(filter.attribute, Selector::Only(AttributeKey::Technical));
    }

    #[test]
    fn test_unknown_position_is_a_usage_error() {
        let result = Cli::try_parse_from(["futsal", "players", "list", "--position", "striker"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_selectors_default_to_all() {
        let cli = parse(&["futsal", "players", "list"]);
        let Commands::Players(PlayersArgs {
            command: Some(PlayerCommands::List(list)),
        }) = cli.command
        else {
            panic!("expected players list");
        };
        assert!(list.to_filter().is_unconstrained());
    }

    #[test]
    fn test_global_flags() {
        let cli = parse(&["futsal", "-i", "--debug", "--config", "alt.toml", "dashboard"]);
        assert!(cli.interactive);
        assert!(cli.debug);
        assert_eq!(cli.config, Some(PathBuf::from("alt.toml")));
        assert!(matches!(cli.command, Commands::Dashboard));
    }

    #[test]
    fn test_add_team_flags_override_prefill() {
        let cli = parse(&["futsal", "teams", "add", "--prefill", "--name", "Académica"]);
        let Commands::Teams(TeamsArgs {
            command: Some(TeamCommands::Add(add)),
        }) = cli.command
        else {
            panic!("expected teams add");
        };

        let form = add.to_form();
        assert_eq!(form.team_name, "Académica");
        assert_eq!(form.location, "Lisboa");
    }

    #[test]
    fn test_add_player_starts_empty_without_prefill() {
        let args = AddPlayerArgs {
            team: Some("Benfica".to_string()),
            ..AddPlayerArgs::default()
        };
        let form = args.to_form();
        assert_eq!(form.team, "Benfica");
        assert!(form.player_name.is_empty());
        assert_eq!(form.missing_fields(), vec!["Nome do Jogador"]);
    }

    #[test]
    fn test_list_format_value_names() {
        let cli = parse(&["futsal", "teams", "list", "--format", "json"]);
        assert!(matches!(
            cli.command,
            Commands::Teams(TeamsArgs {
                command: Some(TeamCommands::List {
                    format: Some(ListFormat::Json)
                })
            })
        ));
    }
}
