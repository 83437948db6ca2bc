// Command handlers behind the CLI
pub mod config; // Configuration management
pub mod forms; // Add-team and add-player forms
pub mod query; // Dashboard, list and detail views

pub use config::handle_config_command;
pub use forms::{handle_player_add_command, handle_team_add_command};
pub use query::{
    handle_dashboard_command, handle_player_list_command, handle_player_show_command,
    handle_team_list_command, handle_team_show_command,
};
