//! JSON file storage for the todo collection.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::Result;
use crate::models::Todo;

use super::TodoStore;

/// Stores the collection as a pretty-printed JSON array in a single file.
///
/// Saves write a temporary file in the target directory and rename it over
/// the destination, so a crash mid-write leaves the previous contents
/// intact.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a store backed by the given file path. The file itself is
    /// created on first save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TodoStore for FileStore {
    fn load(&self) -> Result<Vec<Todo>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let contents = fs::read_to_string(&self.path)?;
        let todos = serde_json::from_str(&contents)?;
        Ok(todos)
    }

    fn save(&self, todos: &[Todo]) -> Result<()> {
        let json = serde_json::to_string_pretty(todos)?;

        // The temp file must live in the same directory as the target for
        // the rename to stay on one filesystem.
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(json.as_bytes())?;
        tmp.persist(&self.path).map_err(|e| e.error)?;

        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
