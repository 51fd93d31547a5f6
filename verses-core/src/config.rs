//! Configuration parsing and management.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use verses_types::Resource;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    ParseError(#[from] serde_yaml::Error),
}

/// Main configuration struct matching the verses.yml schema
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,

    /// Prefix for root-relative asset paths ("./" at the site root,
    /// "../" from a page in a subdirectory)
    #[serde(default = "default_base_path")]
    pub base_path: String,

    #[serde(default)]
    pub tag_cloud: TagCloudConfig,

    #[serde(default)]
    pub rankings: RankingsConfig,

    #[serde(default)]
    pub favorites: FavoritesConfig,

    #[serde(default)]
    pub events: EventsConfig,

    // Internal: path to config file (for relative path resolution)
    #[serde(skip)]
    config_path: Option<PathBuf>,
}

fn default_base_path() -> String {
    String::from("./")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data: DataConfig::default(),
            base_path: default_base_path(),
            tag_cloud: TagCloudConfig::default(),
            rankings: RankingsConfig::default(),
            favorites: FavoritesConfig::default(),
            events: EventsConfig::default(),
            config_path: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_data_dir")]
    pub dir: PathBuf,

    #[serde(default = "default_poems_file")]
    pub poems: String,

    #[serde(default = "default_poets_file")]
    pub poets: String,

    #[serde(default = "default_facts_file")]
    pub facts: String,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_poems_file() -> String {
    String::from("poems.json")
}

fn default_poets_file() -> String {
    String::from("poets.json")
}

fn default_facts_file() -> String {
    String::from("facts.json")
}

impl DataConfig {
    /// File name of a resource inside the data directory
    pub fn file_name(&self, resource: Resource) -> &str {
        match resource {
            Resource::Poems => &self.poems,
            Resource::Poets => &self.poets,
            Resource::Facts => &self.facts,
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dir: default_data_dir(),
            poems: default_poems_file(),
            poets: default_poets_file(),
            facts: default_facts_file(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagCloudConfig {
    /// Number of tags kept
    #[serde(default = "default_tag_limit")]
    pub limit: usize,

    /// Display size of the least frequent tag
    #[serde(default = "default_min_size")]
    pub min_size: f64,

    /// Display size of the most frequent tag
    #[serde(default = "default_max_size")]
    pub max_size: f64,
}

fn default_tag_limit() -> usize {
    30
}

fn default_min_size() -> f64 {
    0.8
}

fn default_max_size() -> f64 {
    2.3
}

impl Default for TagCloudConfig {
    fn default() -> Self {
        Self {
            limit: default_tag_limit(),
            min_size: default_min_size(),
            max_size: default_max_size(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingsConfig {
    #[serde(default = "default_rankings_limit")]
    pub limit: usize,
}

fn default_rankings_limit() -> usize {
    6
}

impl Default for RankingsConfig {
    fn default() -> Self {
        Self {
            limit: default_rankings_limit(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoritesConfig {
    #[serde(default = "default_favorites_path")]
    pub path: PathBuf,
}

fn default_favorites_path() -> PathBuf {
    PathBuf::from("favorites.json")
}

impl Default for FavoritesConfig {
    fn default() -> Self {
        Self {
            path: default_favorites_path(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventsConfig {
    /// Broadcast channel capacity
    #[serde(default = "default_capacity")]
    pub capacity: usize,
}

fn default_capacity() -> usize {
    32
}

impl Default for EventsConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let mut config = Self::from_yaml(&contents)?;

        // Store config file path for relative path resolution
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Parse configuration from a YAML string (paths stay unresolved)
    pub fn from_yaml(contents: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(contents)?)
    }

    /// Get the data directory, resolved relative to config file
    pub fn data_dir(&self) -> PathBuf {
        self.resolve_path(&self.data.dir)
    }

    /// Full path of a resource document
    pub fn resource_path(&self, resource: Resource) -> PathBuf {
        self.data_dir().join(self.data.file_name(resource))
    }

    /// Get the favorites file, resolved relative to config file
    pub fn favorites_path(&self) -> PathBuf {
        self.resolve_path(&self.favorites.path)
    }

    /// Resolve a path relative to the config file location
    fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else if let Some(config_path) = &self.config_path {
            if let Some(parent) = config_path.parent() {
                parent.join(path)
            } else {
                path.to_path_buf()
            }
        } else {
            path.to_path_buf()
        }
    }

    /// Base path with a guaranteed trailing slash
    pub fn normalized_base_path(&self) -> String {
        normalize_base_path(&self.base_path)
    }
}

/// Ensure a base path ends with a slash ("" becomes "./")
pub fn normalize_base_path(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return default_base_path();
    }

    let mut s = trimmed.to_string();
    if !s.ends_with('/') {
        s.push('/');
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = Config::default();
        assert_eq!(config.data.dir, PathBuf::from("data"));
        assert_eq!(config.tag_cloud.limit, 30);
        assert_eq!(config.rankings.limit, 6);
        assert_eq!(config.events.capacity, 32);
        assert_eq!(config.base_path, "./");
        assert_eq!(
            config.resource_path(Resource::Facts),
            PathBuf::from("data/facts.json")
        );
    }

    #[test]
    fn test_partial_yaml() {
        let config = Config::from_yaml(
            r#"
data:
  dir: content
  poems: verses.json
base_path: "../"
tag_cloud:
  limit: 10
"#,
        )
        .unwrap();

        assert_eq!(config.data.poems, "verses.json");
        assert_eq!(config.data.poets, "poets.json");
        assert_eq!(config.base_path, "../");
        assert_eq!(config.tag_cloud.limit, 10);
        assert_eq!(config.tag_cloud.max_size, 2.3);
        assert_eq!(
            config.resource_path(Resource::Poems),
            PathBuf::from("content/verses.json")
        );
    }

    #[test]
    fn test_empty_yaml_uses_defaults() {
        let config = Config::from_yaml("{}").unwrap();
        assert_eq!(config.base_path, "./");
        assert_eq!(config.favorites.path, PathBuf::from("favorites.json"));
    }

    #[test]
    fn test_normalize_base_path() {
        assert_eq!(normalize_base_path(""), "./");
        assert_eq!(normalize_base_path(".."), "../");
        assert_eq!(normalize_base_path("/site/"), "/site/");
    }
}
