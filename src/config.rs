use crate::cli::ListFormat;
use crate::utils::error::{AppError, AppResult};
use crate::utils::interactive::detect_editor;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable that overrides the backend access token
pub const ANON_KEY_ENV: &str = "FUTSAL_ISM_BACKEND_ANON_KEY";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub general: GeneralConfig,
    pub app: AppConfig,
    pub backend: BackendConfig,
    #[serde(default)]
    pub features: FeatureFlags,
    pub settings: SettingsConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Load the catalog from this TOML file instead of the built-in records
    #[serde(default)]
    pub catalog_file: Option<PathBuf>,
    pub editor: String,
    pub color: bool,
    #[serde(default = "default_true")]
    pub pager: bool,
    #[serde(default)]
    pub list_format: ListFormat,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub name: String,
    pub version: String,
}

/// Backend connection values. Never used to open a connection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackendConfig {
    pub url: String,
    #[serde(
        default,
        serialize_with = "crate::utils::format::serialize_option_string",
        deserialize_with = "crate::utils::format::deserialize_option_string"
    )]
    pub anon_key: Option<String>,
    pub project_id: String,
    pub region: String,
    pub api_base_url: String,
    pub api_timeout_ms: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureFlags {
    pub enable_analytics: bool,
    pub enable_debug_mode: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingsConfig {
    pub default_language: String,
    pub supported_languages: Vec<String>,
    pub max_players_per_team: u32,
    pub max_teams_per_league: u32,
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            general: GeneralConfig {
                catalog_file: None,
                editor: detect_editor(None),
                color: true,
                pager: true,
                list_format: ListFormat::Simple,
            },
            app: AppConfig {
                name: "Futsal ISM".to_string(),
                version: "1.0.0".to_string(),
            },
            backend: BackendConfig {
                url: "https://your-project.supabase.co".to_string(),
                anon_key: None,
                project_id: String::new(),
                region: "auto".to_string(),
                api_base_url: "https://api.example.com".to_string(),
                api_timeout_ms: 10_000,
            },
            features: FeatureFlags {
                enable_analytics: false,
                enable_debug_mode: true,
            },
            settings: SettingsConfig {
                default_language: "pt".to_string(),
                supported_languages: vec!["pt".to_string(), "en".to_string()],
                max_players_per_team: 16,
                max_teams_per_league: 20,
            },
        }
    }
}

impl Config {
    pub fn load() -> AppResult<Self> {
        Self::load_custom(&Self::config_file_path())
    }

    pub fn ensure_config_at(config_path: &Path) -> AppResult<()> {
        if !config_path.exists() {
            Config::default().save_to(config_path)?;
        }
        Ok(())
    }

    pub fn load_custom(config_path: &Path) -> AppResult<Self> {
        if !config_path.exists() {
            let default_config = Config::default();
            default_config.save_to(config_path)?;
            return Ok(default_config);
        }

        let content =
            std::fs::read_to_string(config_path).map_err(|e| AppError::Io(e.to_string()))?;

        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> AppResult<Self> {
        let config: Config = toml::from_str(content)
            .map_err(|e| AppError::Config(format!("Failed to parse config file: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.app.name.trim().is_empty() {
            return Err(AppError::Config("App name cannot be empty".to_string()));
        }

        if self.general.editor.is_empty() {
            return Err(AppError::Config("Editor cannot be empty".to_string()));
        }

        if let Some(catalog_file) = &self.general.catalog_file
            && !catalog_file
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"))
        {
            return Err(AppError::Config(
                "Catalog file should have .toml extension".to_string(),
            ));
        }

        if !self.backend.url.starts_with("https://") && !self.backend.url.starts_with("http://") {
            return Err(AppError::Config(format!(
                "Backend URL must start with http:// or https://, got '{}'",
                self.backend.url
            )));
        }

        let settings = &self.settings;
        if !settings
            .supported_languages
            .iter()
            .any(|lang| lang == &settings.default_language)
        {
            return Err(AppError::Config(format!(
                "Default language '{}' is not among the supported languages",
                settings.default_language
            )));
        }

        if settings.max_players_per_team == 0 || settings.max_teams_per_league == 0 {
            return Err(AppError::Config(
                "Team and league limits must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }

    /// Access token from the environment, then from the config file
    pub fn backend_anon_key(&self) -> Option<String> {
        std::env::var(ANON_KEY_ENV)
            .ok()
            .filter(|key| !key.is_empty())
            .or_else(|| self.backend.anon_key.clone())
    }

    pub fn save_to(&self, config_path: &Path) -> AppResult<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| AppError::Io(e.to_string()))?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| AppError::Config(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(config_path, content).map_err(|e| AppError::Io(e.to_string()))?;

        Ok(())
    }

    pub fn config_file_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("futsal-ism")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.settings.max_players_per_team, 16);
        assert_eq!(config.settings.max_teams_per_league, 20);
        assert_eq!(config.app.name, "Futsal ISM");
    }

    #[test]
    fn test_config_survives_toml() {
        let mut config = Config::default();
        config.backend.anon_key = Some("placeholder-token".to_string());
        config.general.list_format = ListFormat::Table;

        let content = toml::to_string_pretty(&config).unwrap();
        let parsed = Config::from_toml_str(&content).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_empty_anon_key_reads_back_as_none() {
        let content = toml::to_string_pretty(&Config::default()).unwrap();
        assert!(content.contains("anon_key = \"\""));
        let parsed = Config::from_toml_str(&content).unwrap();
        assert_eq!(parsed.backend.anon_key, None);
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let mut config = Config::default();
        config.app.name = "  ".to_string();
        assert!(matches!(config.validate(), Err(AppError::Config(_))));

        let mut config = Config::default();
        config.settings.default_language = "es".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.settings.max_players_per_team = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.general.catalog_file = Some(PathBuf::from("catalog.json"));
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.backend.url = "ftp://example.com".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_optional_sections_use_defaults() {
        let mut value = toml::Value::try_from(Config::default()).unwrap();
        if let Some(table) = value.as_table_mut() {
            table.remove("features");
        }
        if let Some(general) = value.get_mut("general").and_then(|g| g.as_table_mut()) {
            general.remove("pager");
            general.remove("list_format");
        }
        let content = toml::to_string(&value).unwrap();

        let parsed = Config::from_toml_str(&content).unwrap();
        assert_eq!(parsed.features, FeatureFlags::default());
        assert!(parsed.general.pager);
        assert_eq!(parsed.general.list_format, ListFormat::Simple);
    }
}
