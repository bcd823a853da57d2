use super::Storage;
use crate::error::{NotzError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File-backed storage: one `<key>.json` file per key under a root
/// directory. The directory is created lazily on first write.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(NotzError::Io)?;
        }
        Ok(())
    }
}

impl Storage for FileStore {
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let bytes = fs::read(path).map_err(NotzError::Io)?;
        Ok(Some(bytes))
    }

    fn save(&mut self, key: &str, bytes: &[u8]) -> Result<()> {
        self.ensure_dir()?;
        fs::write(self.key_path(key), bytes).map_err(NotzError::Io)?;
        Ok(())
    }
}
