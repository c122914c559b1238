use crate::columns::CsvColumns;
use crate::constants::{
    DEFAULT_CSV_DIR, DEFAULT_ENABLED_FILES, DEFAULT_SKIPPED_DOMAINS_FILE, ENABLED_FILES_KEY,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Source of list-valued settings, looked up by dotted key
pub trait ListSource {
    /// Return the list stored under `key`, or `default` when it is unset
    fn get_list(&self, key: &str, default: &[&str]) -> Vec<String>;
}

/// Application configuration loaded from settings.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub websearch: WebsearchConfig,
    #[serde(default)]
    pub columns: CsvColumns,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebsearchConfig {
    #[serde(default = "default_csv_dir")]
    pub csv_dir: String,
    /// Enabled CSV file names; `None` falls back to the built-in defaults
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled_files: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash_log: Option<String>,
    #[serde(default = "default_skipped_domains_file")]
    pub skipped_domains_file: String,
}

fn default_csv_dir() -> String {
    DEFAULT_CSV_DIR.to_string()
}

fn default_skipped_domains_file() -> String {
    DEFAULT_SKIPPED_DOMAINS_FILE.to_string()
}

impl Default for WebsearchConfig {
    fn default() -> Self {
        Self {
            csv_dir: default_csv_dir(),
            enabled_files: None,
            hash_log: None,
            skipped_domains_file: default_skipped_domains_file(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .context("Failed to parse config file")?;

        Ok(config)
    }

    /// Load configuration from default location or return defaults
    pub fn load() -> Result<Self> {
        match Self::locate() {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// First existing file among the default config locations
    pub fn locate() -> Option<PathBuf> {
        let default_paths = [
            "config/settings.toml",
            "./config/settings.toml",
            "~/.config/linkdir/settings.toml",
        ];

        first_existing(default_paths.iter().map(|path| expand_path(path)))
    }

    /// Write the configuration back as TOML
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .context("Failed to serialize config")?;

        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create config directory: {}", parent.display())
                })?;
            }
        }

        std::fs::write(path.as_ref(), content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))
    }

    /// Directory holding the locale CSV files
    pub fn csv_dir(&self) -> PathBuf {
        expand_path(&self.websearch.csv_dir)
    }

    pub fn skipped_domains_file(&self) -> PathBuf {
        expand_path(&self.websearch.skipped_domains_file)
    }

    pub fn hash_log(&self) -> Option<PathBuf> {
        self.websearch.hash_log.as_deref().map(expand_path)
    }

    /// Enabled file names, falling back to the built-in defaults
    pub fn enabled_files(&self) -> Vec<String> {
        self.get_list(ENABLED_FILES_KEY, DEFAULT_ENABLED_FILES)
    }

    pub fn set_enabled_files(&mut self, files: Vec<String>) {
        self.websearch.enabled_files = Some(files);
    }
}

impl ListSource for Config {
    fn get_list(&self, key: &str, default: &[&str]) -> Vec<String> {
        let value = match key {
            ENABLED_FILES_KEY => self.websearch.enabled_files.clone(),
            _ => None,
        };

        value.unwrap_or_else(|| default.iter().map(|s| s.to_string()).collect())
    }
}

fn first_existing<I: IntoIterator<Item = PathBuf>>(paths: I) -> Option<PathBuf> {
    paths.into_iter().find(|path| path.exists())
}

fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.csv_dir(), PathBuf::from("data/csv"));
        assert_eq!(config.columns.url, "URL");
        assert!(config.hash_log().is_none());
    }

    #[test]
    fn test_enabled_files_fall_back_to_defaults() {
        let config = Config::default();
        assert_eq!(config.enabled_files(), vec!["common-links.csv", "en-links.csv"]);
    }

    #[test]
    fn test_get_list_unknown_key_returns_default() {
        let mut config = Config::default();
        config.set_enabled_files(vec!["fr-links.csv".to_string()]);

        assert_eq!(config.get_list("websearch.other", &["x.csv"]), vec!["x.csv"]);
        assert_eq!(config.get_list(ENABLED_FILES_KEY, &[]), vec!["fr-links.csv"]);
    }

    #[test]
    fn test_config_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let temp_file = temp_dir.path().join("settings.toml");
        std::fs::write(
            &temp_file,
            r#"
[websearch]
csv_dir = "/srv/links"
enabled_files = ["fr-links.csv", "common-links.csv"]
hash_log = "/srv/seen.txt"

[columns]
url = "Link"
"#,
        )
        .unwrap();

        let config = Config::from_file(&temp_file).unwrap();
        assert_eq!(config.csv_dir(), PathBuf::from("/srv/links"));
        assert_eq!(config.enabled_files(), vec!["fr-links.csv", "common-links.csv"]);
        assert_eq!(config.hash_log(), Some(PathBuf::from("/srv/seen.txt")));
        assert_eq!(config.columns.url, "Link");
        assert_eq!(config.columns.category, "Category");
        assert_eq!(
            config.skipped_domains_file(),
            PathBuf::from("data/skipped_domain_suggestions.txt")
        );
    }

    #[test]
    fn test_first_existing_picks_later_candidate() {
        let temp_dir = TempDir::new().unwrap();
        let home_config = temp_dir.path().join("home").join("settings.toml");
        std::fs::create_dir_all(home_config.parent().unwrap()).unwrap();
        std::fs::write(&home_config, "[websearch]\n").unwrap();

        let candidates = vec![
            temp_dir.path().join("config").join("settings.toml"),
            home_config.clone(),
        ];
        assert_eq!(first_existing(candidates), Some(home_config));
    }

    #[test]
    fn test_first_existing_none_found() {
        let temp_dir = TempDir::new().unwrap();
        let candidates = vec![temp_dir.path().join("missing.toml")];
        assert_eq!(first_existing(candidates), None);
    }

    #[test]
    fn test_config_save_round_trips_enabled_files() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("settings.toml");

        let mut config = Config::default();
        config.set_enabled_files(vec!["de-links.csv".to_string()]);
        config.save_to_file(&path).unwrap();

        let reloaded = Config::from_file(&path).unwrap();
        assert_eq!(reloaded.enabled_files(), vec!["de-links.csv"]);
    }
}
