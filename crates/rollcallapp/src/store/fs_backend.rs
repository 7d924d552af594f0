use super::backend::{Slot, StorageBackend};
use crate::error::{Result, RollcallError};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Filesystem backend: one `<slot key>.json` file per slot under `root`.
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn slot_path(&self, slot: Slot) -> PathBuf {
        self.root.join(format!("{}.json", slot.key()))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(RollcallError::Io)?;
        }
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn load(&self, slot: Slot) -> Result<Option<String>> {
        let path = self.slot_path(slot);
        if !path.exists() {
            return Ok(None);
        }
        let text = fs::read_to_string(path).map_err(RollcallError::Io)?;
        Ok(Some(text))
    }

    fn save(&self, slot: Slot, text: &str) -> Result<()> {
        self.ensure_dir()?;

        // Atomic Write
        let tmp_path = self
            .root
            .join(format!(".{}-{}.tmp", slot.key(), Uuid::new_v4()));
        fs::write(&tmp_path, text).map_err(RollcallError::Io)?;
        fs::rename(&tmp_path, self.slot_path(slot)).map_err(RollcallError::Io)?;

        Ok(())
    }

    fn remove(&self, slot: Slot) -> Result<()> {
        let path = self.slot_path(slot);
        if path.exists() {
            fs::remove_file(path).map_err(RollcallError::Io)?;
        }
        Ok(())
    }
}
