use super::StorageSlot;
use crate::error::{LeadzError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// File-backed slot: each key is stored as `<root>/<key>.json`.
pub struct FileSlot {
    root: PathBuf,
}

impl FileSlot {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(LeadzError::Io)?;
        }
        Ok(())
    }
}

impl StorageSlot for FileSlot {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path).map_err(LeadzError::Io)?;
        Ok(Some(content))
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        self.ensure_dir()?;

        // Write to a sibling temp file and rename over the target so a failed
        // write never truncates the existing data.
        let tmp = self.root.join(format!(".{}-{}.tmp", key, Uuid::new_v4()));
        if let Err(e) = fs::write(&tmp, value) {
            let _ = fs::remove_file(&tmp);
            return Err(LeadzError::Io(e));
        }
        fs::rename(&tmp, self.path_for(key)).map_err(|e| {
            let _ = fs::remove_file(&tmp);
            LeadzError::Io(e)
        })?;
        Ok(())
    }
}
