//! Versioned persistence gateway between the store and a [`BlobStore`].
//!
//! Layout:
//! - `decision-log:decisions` — JSON array of plain decision records
//! - `decision-log:version`   — format version stamp, rewritten on every save

use crate::blob::BlobStore;
use crate::error::StoreError;
use declog_core::{Decision, DecisionData};

pub const DECISIONS_KEY: &str = "decision-log:decisions";
pub const VERSION_KEY: &str = "decision-log:version";
/// Advisory only: no migration is performed between versions.
pub const CURRENT_VERSION: &str = "1.0.0";

pub struct Persistence<B> {
    blobs: B,
}

impl<B: BlobStore> Persistence<B> {
    pub fn new(blobs: B) -> Self {
        Self { blobs }
    }

    /// Persist the full collection plus the version stamp.
    ///
    /// Either both keys are written or the stored state is left as it was:
    /// the collection is serialized before anything is written, and if the
    /// version stamp cannot be written the previous collection is put back.
    pub fn save(&self, decisions: &[Decision]) -> Result<(), StoreError> {
        let result = self.try_save(decisions);
        if let Err(ref e) = result {
            tracing::error!(error = %e, count = decisions.len(), "failed to save decisions");
        }
        result
    }

    fn try_save(&self, decisions: &[Decision]) -> Result<(), StoreError> {
        let json = serde_json::to_string(decisions)?;
        let previous = self.blobs.get(DECISIONS_KEY)?;
        self.blobs.set(DECISIONS_KEY, &json)?;
        if let Err(e) = self.blobs.set(VERSION_KEY, CURRENT_VERSION) {
            self.restore(DECISIONS_KEY, previous.as_deref());
            return Err(e);
        }
        Ok(())
    }

    /// Best-effort write-back of a key's previous value.
    fn restore(&self, key: &str, previous: Option<&str>) {
        let restored = match previous {
            Some(value) => self.blobs.set(key, value),
            None => self.blobs.remove(key),
        };
        if let Err(e) = restored {
            tracing::error!(error = %e, key, "failed to restore previous value");
        }
    }

    /// Read back the stored records. Missing or unreadable data yields an
    /// empty list.
    pub fn load(&self) -> Vec<DecisionData> {
        let raw = match self.blobs.get(DECISIONS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "failed to read decisions, starting empty");
                return Vec::new();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!(error = %e, "stored decisions are unparseable, starting empty");
                Vec::new()
            }
        }
    }

    /// Remove both the collection and the version stamp. The advisory
    /// version goes first; if the collection cannot be removed the version
    /// is put back, so a failure leaves both keys in place.
    pub fn clear(&self) -> Result<(), StoreError> {
        let version = self.blobs.get(VERSION_KEY)?;
        self.blobs.remove(VERSION_KEY)?;
        if let Err(e) = self.blobs.remove(DECISIONS_KEY) {
            self.restore(VERSION_KEY, version.as_deref());
            return Err(e);
        }
        Ok(())
    }

    pub fn has_data(&self) -> bool {
        matches!(self.blobs.get(DECISIONS_KEY), Ok(Some(_)))
    }

    pub fn version(&self) -> Option<String> {
        self.blobs.get(VERSION_KEY).ok().flatten()
    }
}
