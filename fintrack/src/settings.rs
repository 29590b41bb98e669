use crate::state::EntryOptions;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Overrides the default session file location
    #[serde(default)]
    pub session_file: Option<PathBuf>,

    #[serde(default = "default_type_options")]
    pub type_options: Vec<String>,

    #[serde(default = "default_category_options")]
    pub category_options: Vec<String>,
}

fn default_api_url() -> String {
    fintrack_api::DEFAULT_BASE_URL.to_string()
}

fn default_type_options() -> Vec<String> {
    EntryOptions::default().types
}

fn default_category_options() -> Vec<String> {
    EntryOptions::default().categories
}

impl Settings {
    /// Load from `config.toml` (or `$FINTRACK_CONFIG`) and `FINTRACK__*` variables
    pub fn new() -> Result<Self, ConfigError> {
        let config_path =
            std::env::var("FINTRACK_CONFIG").unwrap_or_else(|_| "config.toml".to_string());
        Self::load_from(&config_path)
    }

    /// Load from a specific file. A missing file falls back to the defaults.
    pub fn load_from(config_path: &str) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name(config_path).required(false))
            .add_source(
                Environment::with_prefix("FINTRACK")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("type_options")
                    .with_list_parse_key("category_options"),
            )
            .build()?;

        settings.try_deserialize()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.api_url.is_empty() {
            return Err("api_url is required".to_string());
        }
        if !self.api_url.starts_with("http") {
            return Err("api_url must be a valid HTTP(S) URL".to_string());
        }
        if self.type_options.is_empty() {
            return Err("type_options must list at least one type".to_string());
        }
        if self.category_options.is_empty() {
            return Err("category_options must list at least one category".to_string());
        }
        Ok(())
    }

    pub fn entry_options(&self) -> EntryOptions {
        EntryOptions {
            types: self.type_options.clone(),
            categories: self.category_options.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load(contents: &str) -> Settings {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fintrack.toml");
        std::fs::write(&path, contents).unwrap();
        Settings::load_from(path.to_str().unwrap()).unwrap()
    }

    #[test]
    fn test_defaults_without_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");

        let settings = Settings::load_from(path.to_str().unwrap()).unwrap();

        assert_eq!(settings.api_url, "http://localhost:3000/api");
        assert_eq!(settings.type_options, vec!["Income", "Expense"]);
        assert_eq!(settings.category_options.len(), 9);
        assert!(settings.session_file.is_none());
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_file_overrides_options() {
        let settings = load(
            r#"
            api_url = "https://tracker.example.com/api"
            category_options = ["Rent", "Groceries"]
            "#,
        );

        assert_eq!(settings.api_url, "https://tracker.example.com/api");
        assert_eq!(
            settings.entry_options().categories,
            vec!["Rent".to_string(), "Groceries".to_string()]
        );
        assert_eq!(settings.entry_options().types, vec!["Income", "Expense"]);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let settings = load(r#"api_url = "localhost:3000""#);
        assert!(settings.validate().is_err());

        let settings = load("type_options = []");
        assert!(settings.validate().is_err());
    }
}
