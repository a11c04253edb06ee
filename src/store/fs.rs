use super::SnapshotStore;
use crate::error::{Result, ShelfError};
use crate::model::Snapshot;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// File-backed snapshot store. The whole document lives in one JSON file.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(ShelfError::Io)?;
            }
        }
        Ok(())
    }
}

impl SnapshotStore for FileStore {
    fn load(&self) -> Result<Snapshot> {
        if !self.path.exists() {
            return Ok(Snapshot::default());
        }
        let content = fs::read_to_string(&self.path).map_err(ShelfError::Io)?;
        if content.trim().is_empty() {
            return Ok(Snapshot::default());
        }
        serde_json::from_str(&content).map_err(ShelfError::Corrupt)
    }

    fn save(&mut self, snapshot: &Snapshot) -> Result<()> {
        self.ensure_parent_dir()?;
        let content = serde_json::to_string_pretty(snapshot).map_err(ShelfError::Serialization)?;

        // Write-to-temp-then-rename: a crash mid-write leaves the previous
        // document intact.
        let dir = self.path.parent().unwrap_or_else(|| Path::new("."));
        let tmp = dir.join(format!(".data-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp, content).map_err(ShelfError::Io)?;
        fs::rename(&tmp, &self.path).map_err(ShelfError::Io)?;

        Ok(())
    }
}
