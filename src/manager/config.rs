// Configuration operations

use crate::cli::ConfigCommands;
use crate::config::Config;
use crate::utils::interactive::{edit_file_direct, prompt_yes_no};
use crate::utils::output::{OutputStyle, print_success};
use crate::utils::AppResult;
use anyhow::Result;
use std::path::Path;
use tracing::debug;

/// `config_path` is the file the running config came from, either `--config` or the default
pub fn handle_config_command(
    config: Config,
    config_path: &Path,
    command: Option<ConfigCommands>,
) -> Result<()> {
    match command {
        Some(ConfigCommands::Show) => handle_show_command(&config, config_path),
        Some(ConfigCommands::Open) => handle_open_command(&config, config_path),
        Some(ConfigCommands::Reset) => handle_reset_command(config_path),
        None => handle_config_help(config_path),
    }
}

fn handle_show_command(config: &Config, config_path: &Path) -> Result<()> {
    println!("⚙️  {} Configuration", config.app.name);
    println!("==========================");
    println!("File: {}", config_path.display());

    println!("General:");
    match &config.general.catalog_file {
        Some(path) => println!("  Catalog file: {}", path.display()),
        None => println!("  Catalog file: {}", OutputStyle::muted("(built-in)")),
    }
    println!("  Editor: {}", config.general.editor);
    println!("  Color: {}", config.general.color);
    println!("  Pager: {}", config.general.pager);
    println!("  List format: {:?}", config.general.list_format);

    println!("App:");
    println!("  Name: {}", config.app.name);
    println!("  Version: {}", config.app.version);

    println!("Backend:");
    println!("  URL: {}", config.backend.url);
    if config.backend_anon_key().is_some() {
        println!("  Anon key: ✓");
    }
    if !config.backend.project_id.is_empty() {
        println!("  Project ID: {}", config.backend.project_id);
    }
    println!("  Region: {}", config.backend.region);
    println!("  API base URL: {}", config.backend.api_base_url);
    println!("  API timeout: {} ms", config.backend.api_timeout_ms);

    println!("Features:");
    println!("  Analytics: {}", config.features.enable_analytics);
    println!("  Debug mode: {}", config.features.enable_debug_mode);

    println!("Settings:");
    println!(
        "  Language: {} (supported: {})",
        config.settings.default_language,
        config.settings.supported_languages.join(", ")
    );
    println!("  Max players per team: {}", config.settings.max_players_per_team);
    println!("  Max teams per league: {}", config.settings.max_teams_per_league);

    Ok(())
}

fn handle_config_help(config_path: &Path) -> Result<()> {
    println!("⚙️  Configuration Management");
    println!("==========================");
    println!("Available configuration commands:");
    println!("  futsal config show    - Show current configuration");
    println!("  futsal config open    - Open configuration file in editor");
    println!("  futsal config reset   - Reset configuration to defaults");
    println!();
    println!("Configuration file location: {}", config_path.display());
    Ok(())
}

fn handle_open_command(config: &Config, config_path: &Path) -> Result<()> {
    Config::ensure_config_at(config_path)?;

    println!("Opening configuration file in editor...");
    println!("File: {}", config_path.display());

    edit_file_direct(config_path, Some(&config.general.editor))?;
    Ok(())
}

fn handle_reset_command(config_path: &Path) -> Result<()> {
    if prompt_yes_no(
        "Are you sure you want to reset configuration to defaults? This will overwrite your current settings.",
    )? {
        reset_config_file(config_path)?;
        print_success(&format!(
            "Configuration reset to defaults! ({})",
            config_path.display()
        ));
    } else {
        println!("Reset cancelled.");
    }
    Ok(())
}

/// Overwrite `config_path` with the default configuration
pub fn reset_config_file(config_path: &Path) -> AppResult<Config> {
    let config = Config::default();
    config.save_to(config_path)?;
    debug!(path = %config_path.display(), "configuration reset");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn scratch_path() -> PathBuf {
        std::env::temp_dir()
            .join(format!("futsal-ism-{}", uuid::Uuid::new_v4()))
            .join("custom.toml")
    }

    #[test]
    fn test_reset_rewrites_the_given_file() {
        let path = scratch_path();
        let mut custom = Config::default();
        custom.app.name = "Custom".to_string();
        custom.save_to(&path).unwrap();
        assert_eq!(Config::load_custom(&path).unwrap().app.name, "Custom");

        reset_config_file(&path).unwrap();

        let reloaded = Config::load_custom(&path).unwrap();
        assert_eq!(reloaded.app.name, Config::default().app.name);

        if let Some(dir) = path.parent() {
            std::fs::remove_dir_all(dir).unwrap();
        }
    }

    #[test]
    fn test_open_creates_missing_file_at_the_given_path() {
        let path = scratch_path();
        assert!(!path.exists());

        Config::ensure_config_at(&path).unwrap();
        assert!(Config::load_custom(&path).is_ok());

        if let Some(dir) = path.parent() {
            std::fs::remove_dir_all(dir).unwrap();
        }
    }
}
