//! # The Durable Slot
//!
//! One named slot holds the entire persisted state as a single JSON blob:
//!
//! ```text
//! {
//!   "medicines": [ Medicine, ... ],
//!   "bills": [ Bill, ... ]
//! }
//! ```
//!
//! Every mutating store operation overwrites the whole slot; startup reads
//! it back once. The [`DataSlot`] trait is the seam between the store and
//! the backing storage, so tests can substitute [`MemorySlot`] without
//! touching a filesystem.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use medvault_core::{Bill, Medicine};

use crate::error::SlotResult;

// =============================================================================
// Snapshot
// =============================================================================

/// The persisted blob: the whole catalog and ledger.
///
/// Also the payload of the store's import/export (backup) surface. Field
/// names serialize in camelCase to match the layout the UI layer reads.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreSnapshot {
    pub medicines: Vec<Medicine>,
    pub bills: Vec<Bill>,
}

// =============================================================================
// DataSlot Trait
// =============================================================================

/// A single durable slot holding one serialized snapshot.
///
/// ## Contract
/// - `load` returns `Ok(None)` when the slot has never been written; any
///   other failure (unreadable, malformed) is an error the store maps to
///   the seed fallback
/// - `save` replaces the slot's contents wholesale; a torn write must never
///   leave a half-updated slot behind
pub trait DataSlot {
    /// Reads and deserializes the slot, if it has ever been written.
    fn load(&self) -> SlotResult<Option<StoreSnapshot>>;

    /// Serializes and overwrites the slot with the given snapshot.
    fn save(&self, snapshot: &StoreSnapshot) -> SlotResult<()>;
}

// =============================================================================
// FileSlot
// =============================================================================

/// A slot backed by a single JSON file.
///
/// ## Atomicity
/// Writes go to a sibling `.tmp` file first and are renamed over the real
/// path, so a crash mid-write leaves either the old snapshot or the new one,
/// never a truncated mix. Rename within one directory is atomic on the
/// platforms this targets.
#[derive(Debug, Clone)]
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    /// Creates a slot at the given file path. The file need not exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileSlot { path: path.into() }
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        PathBuf::from(tmp)
    }
}

impl DataSlot for FileSlot {
    fn load(&self) -> SlotResult<Option<StoreSnapshot>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };

        let snapshot = serde_json::from_str(&raw)?;
        Ok(Some(snapshot))
    }

    fn save(&self, snapshot: &StoreSnapshot) -> SlotResult<()> {
        let json = serde_json::to_string_pretty(snapshot)?;

        let tmp = self.tmp_path();
        {
            let mut file = fs::File::create(&tmp)?;
            file.write_all(json.as_bytes())?;
            // Flushed before the rename so the new snapshot is complete on
            // disk by the time it becomes visible under the real path.
            file.sync_all()?;
        }
        fs::rename(&tmp, &self.path)?;

        Ok(())
    }
}

// =============================================================================
// MemorySlot
// =============================================================================

/// An in-memory slot for tests and ephemeral sessions.
///
/// Stores the serialized JSON (not the snapshot struct) so tests exercise
/// the same serialize/deserialize path as the file slot.
#[derive(Debug, Default)]
pub struct MemorySlot {
    contents: Mutex<Option<String>>,
}

impl MemorySlot {
    /// Creates an empty (never-written) slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a slot pre-loaded with raw contents, for corrupt-slot tests.
    pub fn with_contents(raw: impl Into<String>) -> Self {
        MemorySlot {
            contents: Mutex::new(Some(raw.into())),
        }
    }

    /// The raw slot contents, if any. Test hook.
    pub fn raw(&self) -> Option<String> {
        self.contents.lock().unwrap().clone()
    }
}

impl DataSlot for MemorySlot {
    fn load(&self) -> SlotResult<Option<StoreSnapshot>> {
        let contents = self.contents.lock().unwrap();
        match contents.as_deref() {
            Some(raw) => Ok(Some(serde_json::from_str(raw)?)),
            None => Ok(None),
        }
    }

    fn save(&self, snapshot: &StoreSnapshot) -> SlotResult<()> {
        let json = serde_json::to_string(snapshot)?;
        *self.contents.lock().unwrap() = Some(json);
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_slot_starts_empty() {
        let slot = MemorySlot::new();
        assert!(slot.load().unwrap().is_none());
    }

    #[test]
    fn test_memory_slot_round_trip() {
        let slot = MemorySlot::new();
        let snapshot = StoreSnapshot {
            medicines: crate::seed::seed_catalog(),
            bills: Vec::new(),
        };

        slot.save(&snapshot).unwrap();
        let loaded = slot.load().unwrap().unwrap();

        assert_eq!(loaded.medicines.len(), snapshot.medicines.len());
        assert_eq!(loaded.medicines[0].id, snapshot.medicines[0].id);
        assert!(loaded.bills.is_empty());
    }

    #[test]
    fn test_memory_slot_corrupt_contents_error() {
        let slot = MemorySlot::with_contents("{definitely not json");
        assert!(slot.load().is_err());
    }

    #[test]
    fn test_snapshot_blob_uses_camel_case_top_level_keys() {
        let snapshot = StoreSnapshot {
            medicines: crate::seed::seed_catalog(),
            bills: Vec::new(),
        };
        let json = serde_json::to_value(&snapshot).unwrap();
        assert!(json.get("medicines").is_some());
        assert!(json.get("bills").is_some());
        // Per-medicine fields already covered in medvault-core tests.
    }
}
