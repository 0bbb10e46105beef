use crate::blob::FileBlobStore;
use crate::error::StoreError;
use crate::store::Store;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const JOURNAL_DIR: &str = ".declog";
const CONFIG_FILE: &str = "config.json";

/// Contents of `.declog/config.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JournalConfig {
    pub version: u32,
    pub created_at: DateTime<Utc>,
}

/// An on-disk journal: a `.declog/` directory holding the persisted
/// decisions, the version stamp and the journal config.
pub struct Journal {
    root: PathBuf,
}

impl Journal {
    /// Create a new journal under `path`.
    pub fn init(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let root = path.as_ref().to_path_buf();
        let dir = root.join(JOURNAL_DIR);

        if dir.exists() {
            return Err(StoreError::JournalExists(dir.display().to_string()));
        }

        fs::create_dir_all(&dir)?;
        let config = JournalConfig {
            version: 1,
            created_at: Utc::now(),
        };
        fs::write(dir.join(CONFIG_FILE), serde_json::to_string_pretty(&config)?)?;

        tracing::debug!(path = %dir.display(), "initialized journal");
        Ok(Self { root })
    }

    /// Open an existing journal rooted at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let root = path.as_ref().to_path_buf();
        if !root.join(JOURNAL_DIR).is_dir() {
            return Err(StoreError::JournalNotFound(root.display().to_string()));
        }
        Ok(Self { root })
    }

    /// Search upward from `start` for a `.declog/` directory.
    pub fn discover(start: impl AsRef<Path>) -> Result<Self, StoreError> {
        let mut current = start.as_ref().to_path_buf();
        loop {
            if current.join(JOURNAL_DIR).is_dir() {
                return Self::open(&current);
            }
            if !current.pop() {
                return Err(StoreError::JournalNotFound(
                    start.as_ref().display().to_string(),
                ));
            }
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn dir(&self) -> PathBuf {
        self.root.join(JOURNAL_DIR)
    }

    pub fn config(&self) -> Result<JournalConfig, StoreError> {
        let raw = fs::read_to_string(self.dir().join(CONFIG_FILE))?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Load the store backed by this journal's directory.
    pub fn store(&self) -> Store<FileBlobStore> {
        Store::new(FileBlobStore::new(self.dir()))
    }
}
