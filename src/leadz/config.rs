use crate::error::{LeadzError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for leadz, stored in `config.json` next to the lead data.
///
/// The two lists are the choices a UI offers for a lead's source and status.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LeadzConfig {
    #[serde(default = "default_sources")]
    pub sources: Vec<String>,

    #[serde(default = "default_statuses")]
    pub statuses: Vec<String>,
}

fn default_sources() -> Vec<String> {
    vec!["referral".into(), "web".into(), "cold-call".into()]
}

fn default_statuses() -> Vec<String> {
    vec![
        "new".into(),
        "contacted".into(),
        "qualified".into(),
        "lost".into(),
    ]
}

impl Default for LeadzConfig {
    fn default() -> Self {
        Self {
            sources: default_sources(),
            statuses: default_statuses(),
        }
    }
}

impl LeadzConfig {
    pub const KEYS: [&'static str; 2] = ["sources", "statuses"];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(LeadzError::Io)?;
        let config: LeadzConfig =
            serde_json::from_str(&content).map_err(LeadzError::Serialization)?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(LeadzError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(LeadzError::Serialization)?;
        fs::write(config_path, content).map_err(LeadzError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "sources" => Some(self.sources.join(",")),
            "statuses" => Some(self.statuses.join(",")),
            _ => None,
        }
    }

    /// Sets a list-valued key from a comma-separated string.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let items = parse_list(value);
        if items.is_empty() {
            return Err(LeadzError::Config(format!("{} cannot be empty", key)));
        }
        match key {
            "sources" => self.sources = items,
            "statuses" => self.statuses = items,
            _ => return Err(LeadzError::Config(format!("Unknown config key: {}", key))),
        }
        Ok(())
    }

    pub fn list_all(&self) -> Vec<(String, String)> {
        Self::KEYS
            .iter()
            .filter_map(|k| self.get(k).map(|v| (k.to_string(), v)))
            .collect()
    }

    pub fn allows_source(&self, source: &str) -> bool {
        self.sources.iter().any(|s| s == source)
    }

    pub fn allows_status(&self, status: &str) -> bool {
        self.statuses.iter().any(|s| s == status)
    }
}

fn parse_list(value: &str) -> Vec<String> {
    let mut items: Vec<String> = Vec::new();
    for item in value.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        if !items.iter().any(|existing| existing == item) {
            items.push(item.to_string());
        }
    }
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = LeadzConfig::default();
        assert_eq!(config.sources, vec!["referral", "web", "cold-call"]);
        assert_eq!(config.statuses, vec!["new", "contacted", "qualified", "lost"]);
    }

    #[test]
    fn test_load_missing_config() {
        let dir = TempDir::new().unwrap();
        let config = LeadzConfig::load(dir.path()).unwrap();
        assert_eq!(config, LeadzConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let mut config = LeadzConfig::default();
        config.set("statuses", "open, won,lost").unwrap();
        config.save(dir.path()).unwrap();

        let loaded = LeadzConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.statuses, vec!["open", "won", "lost"]);
        assert_eq!(loaded.sources, default_sources());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"sources":["trade-show"]}"#).unwrap();
        let config = LeadzConfig::load(dir.path()).unwrap();
        assert_eq!(config.sources, vec!["trade-show"]);
        assert_eq!(config.statuses, default_statuses());
    }

    #[test]
    fn test_set_rejects_unknown_and_empty() {
        let mut config = LeadzConfig::default();
        assert!(config.set("colour", "red").is_err());
        assert!(config.set("sources", " , ").is_err());
        assert_eq!(config, LeadzConfig::default());
    }

    #[test]
    fn test_set_dedupes() {
        let mut config = LeadzConfig::default();
        config.set("sources", "web,web,email").unwrap();
        assert_eq!(config.get("sources").as_deref(), Some("web,email"));
    }

    #[test]
    fn test_allowed_values() {
        let config = LeadzConfig::default();
        assert!(config.allows_source("cold-call"));
        assert!(!config.allows_source("Cold-Call"));
        assert!(config.allows_status("qualified"));
        assert!(!config.allows_status(""));
    }
}
