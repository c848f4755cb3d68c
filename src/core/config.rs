//! Configuration management with layered hierarchy

use serde::Deserialize;
use std::path::PathBuf;

/// Toolkit configuration, merged from defaults, the global config file,
/// and environment variables (highest priority last).
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Author recorded on saved analyses
    pub author: Option<String>,

    /// Path of the saved-analysis store file
    pub store_path: Option<PathBuf>,

    /// Default environment preset name for calculations
    pub default_environment: Option<String>,

    /// Default mission time in hours
    pub default_mission_time: Option<f64>,
}

impl Config {
    /// Load configuration from all sources, merging in priority order.
    pub fn load() -> Self {
        let mut config = Config::default();

        // Global user config (~/.config/relkit/config.yaml)
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                if let Ok(contents) = std::fs::read_to_string(&global_path) {
                    if let Ok(global) = serde_yml::from_str::<Config>(&contents) {
                        config.merge(global);
                    }
                }
            }
        }

        // Environment variables
        if let Ok(author) = std::env::var("RELKIT_AUTHOR") {
            config.author = Some(author);
        }
        if let Ok(store) = std::env::var("RELKIT_STORE") {
            config.store_path = Some(PathBuf::from(store));
        }

        config
    }

    fn global_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "relkit")
            .map(|dirs| dirs.config_dir().join("config.yaml"))
    }

    /// Merge another config into this one (other takes precedence).
    fn merge(&mut self, other: Config) {
        if other.author.is_some() {
            self.author = other.author;
        }
        if other.store_path.is_some() {
            self.store_path = other.store_path;
        }
        if other.default_environment.is_some() {
            self.default_environment = other.default_environment;
        }
        if other.default_mission_time.is_some() {
            self.default_mission_time = other.default_mission_time;
        }
    }

    /// Get the author name, falling back to git config or username.
    pub fn author(&self) -> String {
        if let Some(ref author) = self.author {
            return author.clone();
        }

        if let Ok(output) = std::process::Command::new("git")
            .args(["config", "user.name"])
            .output()
        {
            if output.status.success() {
                let name = String::from_utf8_lossy(&output.stdout).trim().to_string();
                if !name.is_empty() {
                    return name;
                }
            }
        }

        std::env::var("USER")
            .or_else(|_| std::env::var("USERNAME"))
            .unwrap_or_else(|_| "unknown".to_string())
    }

    /// Resolve the store path: explicit config, else the platform data dir,
    /// else the working directory.
    pub fn store_path(&self) -> PathBuf {
        if let Some(ref path) = self.store_path {
            return path.clone();
        }

        directories::ProjectDirs::from("", "", "relkit")
            .map(|dirs| dirs.data_dir().join("analyses.json"))
            .unwrap_or_else(|| PathBuf::from("analyses.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_other_takes_precedence() {
        let mut base = Config {
            author: Some("base".into()),
            store_path: None,
            default_environment: Some("laboratory".into()),
            default_mission_time: None,
        };
        base.merge(Config {
            author: Some("override".into()),
            store_path: Some(PathBuf::from("/tmp/analyses.json")),
            default_environment: None,
            default_mission_time: Some(500.0),
        });

        assert_eq!(base.author.as_deref(), Some("override"));
        assert_eq!(base.store_path, Some(PathBuf::from("/tmp/analyses.json")));
        assert_eq!(base.default_environment.as_deref(), Some("laboratory"));
        assert_eq!(base.default_mission_time, Some(500.0));
    }

    #[test]
    fn test_explicit_store_path_wins() {
        let config = Config {
            store_path: Some(PathBuf::from("/tmp/explicit.json")),
            ..Config::default()
        };
        assert_eq!(config.store_path(), PathBuf::from("/tmp/explicit.json"));
    }

    #[test]
    fn test_yaml_deserialization() {
        let config: Config =
            serde_yml::from_str("author: jane\ndefault_mission_time: 2000\n").unwrap();
        assert_eq!(config.author.as_deref(), Some("jane"));
        assert_eq!(config.default_mission_time, Some(2000.0));
        assert!(config.store_path.is_none());
    }
}
