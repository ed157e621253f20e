// src/dedup.rs

use std::collections::BTreeSet;
use std::error::Error;
use std::fmt;
use std::fs;
use std::path::Path;

#[derive(Debug)]
pub enum SeenStoreError {
    Io(String),
    Corrupt(String),
}

impl fmt::Display for SeenStoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeenStoreError::Io(msg) => write!(f, "seen-id store I/O error: {msg}"),
            SeenStoreError::Corrupt(msg) => write!(f, "seen-id store unreadable: {msg}"),
        }
    }
}

impl Error for SeenStoreError {}

/// Ids of listings already notified. Read wholesale at the start of a batch
/// run and written wholesale at the end; an id present here never triggers a
/// new notification.
///
/// A corrupt store file is an error rather than an empty set: silently
/// starting over would re-notify the entire history.
#[derive(Debug, Default)]
pub struct SeenIds {
    ids: BTreeSet<String>,
}

impl SeenIds {
    /// Load the store; a missing file is an empty set.
    pub fn load(path: &Path) -> Result<Self, SeenStoreError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let text = fs::read_to_string(path)
            .map_err(|e| SeenStoreError::Io(format!("{}: {e}", path.display())))?;
        let ids: BTreeSet<String> = serde_json::from_str(&text)
            .map_err(|e| SeenStoreError::Corrupt(format!("{}: {e}", path.display())))?;

        Ok(Self { ids })
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn mark(&mut self, id: &str) {
        self.ids.insert(id.to_string());
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Wholesale write, creating the parent directory on first run. The
    /// BTreeSet keeps the file deterministic across runs.
    pub fn persist(&self, path: &Path) -> Result<(), SeenStoreError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|e| SeenStoreError::Io(format!("{}: {e}", parent.display())))?;
            }
        }

        let json = serde_json::to_string(&self.ids)
            .map_err(|e| SeenStoreError::Io(e.to_string()))?;
        fs::write(path, json).map_err(|e| SeenStoreError::Io(format!("{}: {e}", path.display())))
    }
}
