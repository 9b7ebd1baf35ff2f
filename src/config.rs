//! Configuration file support for housecount
//!
//! Reads from .housecount/config.toml

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::data::default_houses;
use crate::patronus::default_labels;

/// Configuration structure
#[derive(Debug, Deserialize, Serialize, Default, Clone)]
pub struct Config {
    /// Dataset settings
    #[serde(default)]
    pub data: DataConfig,

    /// Viewer server settings
    #[serde(default)]
    pub serve: ServeConfig,

    /// Patronus label set
    #[serde(default)]
    pub patronus: PatronusConfig,
}

/// Dataset-related configuration
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DataConfig {
    /// Path to the semicolon-delimited characters file
    /// Default: "data/characters.csv"
    #[serde(default = "default_data_path")]
    pub path: PathBuf,

    /// Houses kept by the load filter
    /// Default: the four main houses
    #[serde(default = "default_houses")]
    pub houses: Vec<String>,
}

/// Viewer server configuration
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServeConfig {
    /// Port for `housecount serve`
    /// Default: 8080
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Patronus configuration
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct PatronusConfig {
    #[serde(default = "default_labels")]
    pub labels: Vec<String>,
}

fn default_data_path() -> PathBuf {
    PathBuf::from("data/characters.csv")
}

fn default_port() -> u16 {
    8080
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            path: default_data_path(),
            houses: default_houses(),
        }
    }
}

impl Default for ServeConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
        }
    }
}

impl Default for PatronusConfig {
    fn default() -> Self {
        Self {
            labels: default_labels(),
        }
    }
}

impl Config {
    /// Load config from .housecount/config.toml
    /// Returns default config if file doesn't exist
    pub fn load() -> Self {
        if let Some(path) = Self::find_config_path() {
            if let Ok(contents) = std::fs::read_to_string(&path) {
                if let Ok(config) = toml::from_str(&contents) {
                    return config;
                }
            }
        }
        Self::default()
    }

    /// Find config.toml by walking up directory tree
    fn find_config_path() -> Option<PathBuf> {
        let current_dir = std::env::current_dir().ok()?;
        let mut dir = current_dir.as_path();

        loop {
            let config_path = dir.join(".housecount").join("config.toml");
            if config_path.exists() {
                return Some(config_path);
            }

            match dir.parent() {
                Some(parent) => dir = parent,
                None => break,
            }
        }
        None
    }

    /// Check if a house passes the load filter
    pub fn is_allowed_house(&self, house: &str) -> bool {
        self.data.houses.iter().any(|h| h == house.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.is_allowed_house("Gryffindor"));
        assert!(config.is_allowed_house(" Hufflepuff "));
        assert!(!config.is_allowed_house("Centaur"));
        assert_eq!(config.serve.port, 8080);
        assert_eq!(config.patronus.labels.len(), 8);
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
[data]
path = "fixtures/cast.csv"
houses = ["Gryffindor", "Slytherin"]

[serve]
port = 3001
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.data.path, PathBuf::from("fixtures/cast.csv"));
        assert!(config.is_allowed_house("Slytherin"));
        assert!(!config.is_allowed_house("Ravenclaw"));
        assert_eq!(config.serve.port, 3001);
        // Unspecified sections fall back to defaults
        assert_eq!(config.patronus.labels.len(), 8);
    }
}
