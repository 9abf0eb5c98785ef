use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::PersistError;

/// Ensure the store directory exists and accepts new files; create it if missing.
pub fn ensure_store_dir(dir: &Path) -> Result<(), PersistError> {
    if dir.exists() {
        let meta = fs::metadata(dir).map_err(|e| PersistError::StoreDir(e.to_string()))?;
        if !meta.is_dir() {
            return Err(PersistError::StoreDir("path is not a directory".into()));
        }
    } else {
        fs::create_dir_all(dir).map_err(|e| PersistError::StoreDir(e.to_string()))?;
    }
    NamedTempFile::new_in(dir).map_err(|e| PersistError::StoreDir(e.to_string()))?;
    Ok(())
}

/// Replaces one file's content atomically: write a sibling temp file, then rename.
#[derive(Debug, Clone)]
pub struct AtomicFileWriter {
    target: PathBuf,
}

impl AtomicFileWriter {
    pub fn new(target: PathBuf) -> Self {
        Self { target }
    }

    pub fn target(&self) -> &Path {
        &self.target
    }

    pub fn write(&self, content: &str) -> Result<(), PersistError> {
        let dir = self
            .target
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        ensure_store_dir(dir)?;

        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(content.as_bytes())?;
        tmp.flush()?;
        tmp.as_file_mut().sync_all()?;

        tmp.persist(&self.target)
            .map_err(|e| PersistError::Io(e.error))?;
        Ok(())
    }
}
