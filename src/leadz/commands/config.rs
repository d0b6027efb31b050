use crate::commands::{CmdMessage, CmdResult, LeadzPaths};
use crate::config::LeadzConfig;
use crate::error::Result;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(paths: &LeadzPaths, action: ConfigAction) -> Result<CmdResult> {
    let mut config = LeadzConfig::load(&paths.home)?;
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll => Ok(result.with_config(config)),
        ConfigAction::ShowKey(key) => {
            match config.get(&key) {
                Some(value) => result.add_message(CmdMessage::info(value)),
                None => {
                    result.add_message(CmdMessage::error(format!("Unknown config key: {}", key)))
                }
            }
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            if let Err(e) = config.set(&key, &value) {
                result.add_message(CmdMessage::error(e.to_string()));
                return Ok(result);
            }
            config.save(&paths.home)?;
            let shown = config.get(&key).unwrap_or(value);
            result.add_message(CmdMessage::success(format!("{} set to {}", key, shown)));
            Ok(result.with_config(config))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn paths(dir: &TempDir) -> LeadzPaths {
        LeadzPaths {
            home: dir.path().to_path_buf(),
        }
    }

    #[test]
    fn show_all_returns_defaults() {
        let dir = TempDir::new().unwrap();
        let result = run(&paths(&dir), ConfigAction::ShowAll).unwrap();
        assert_eq!(result.config, Some(LeadzConfig::default()));
    }

    #[test]
    fn set_persists() {
        let dir = TempDir::new().unwrap();
        run(
            &paths(&dir),
            ConfigAction::Set("sources".into(), "web,email".into()),
        )
        .unwrap();

        let result = run(&paths(&dir), ConfigAction::ShowKey("sources".into())).unwrap();
        assert_eq!(result.messages[0].content, "web,email");
    }

    #[test]
    fn unknown_key_is_reported_not_raised() {
        let dir = TempDir::new().unwrap();
        let result = run(
            &paths(&dir),
            ConfigAction::Set("colour".into(), "red".into()),
        )
        .unwrap();
        assert_eq!(result.messages[0].level, crate::commands::MessageLevel::Error);
        assert!(!dir.path().join("config.json").exists());
    }
}
