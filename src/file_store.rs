//! JSON file store: persists a single board to one named file.
//!
//! Saves go through a sibling `.tmp` file and a rename so a crash mid-write
//! leaves the previous save intact.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, error};

use crate::core::{deserialize, serialize, BoardError, BoardState, BoardStore};

#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "board".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn write(&self, bytes: &[u8]) -> io::Result<()> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        let tmp = self.tmp_path();
        fs::write(&tmp, bytes)?;
        fs::rename(&tmp, &self.path)
    }
}

impl BoardStore for JsonFileStore {
    fn load(&self) -> Result<BoardState, BoardError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Err(BoardError::NotFound),
            Err(e) => {
                error!("failed to read {}: {}", self.path.display(), e);
                return Err(e.into());
            }
        };
        deserialize(&bytes)
    }

    fn save(&mut self, board: &BoardState) -> Result<(), BoardError> {
        let bytes = serialize(board)?;
        match self.write(&bytes) {
            Ok(()) => {
                debug!("board saved to {}", self.path.display());
                Ok(())
            }
            Err(e) => {
                error!("failed to save board to {}: {}", self.path.display(), e);
                Err(e.into())
            }
        }
    }
}
