use crate::commands::{CmdMessage, CmdResult, LeadzPaths};
use crate::config::LeadzConfig;
use crate::error::Result;
use std::fs;

/// Creates the data directory and writes a default config if none exists.
pub fn run(paths: &LeadzPaths) -> Result<CmdResult> {
    fs::create_dir_all(&paths.home)?;
    let config = LeadzConfig::load(&paths.home)?;
    config.save(&paths.home)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Initialized leadz store at {}",
        paths.home.display()
    )));
    Ok(result.with_config(config))
}
