use crate::api::{LeadzApi, LeadzPaths};
use crate::config::LeadzConfig;
use crate::error::{LeadzError, Result};
use crate::store::fs::FileSlot;
use crate::store::LeadStore;
use directories::ProjectDirs;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Environment variable that relocates the data directory.
pub const HOME_ENV: &str = "LEADZ_HOME";

pub struct LeadzContext {
    pub api: LeadzApi<FileSlot>,
    pub config: LeadzConfig,
}

/// Picks the data directory: an explicit override, then `$LEADZ_HOME`, then the
/// platform data directory.
pub fn resolve_home(explicit: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir);
    }
    if let Some(dir) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "leadz", "leadz")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| LeadzError::Store("Could not determine a data directory".to_string()))
}

pub fn initialize(explicit_home: Option<PathBuf>) -> Result<LeadzContext> {
    let home = resolve_home(explicit_home)?;
    debug!(home = %home.display(), "using data directory");

    let config = LeadzConfig::load(&home).unwrap_or_else(|e| {
        warn!(error = %e, "unreadable config, using defaults");
        LeadzConfig::default()
    });

    let store = LeadStore::new(FileSlot::new(&home));
    let api = LeadzApi::new(store, LeadzPaths { home });

    Ok(LeadzContext { api, config })
}
