//! Saved scenario snapshots
//!
//! "Save Scenario" serializes a named `(baseline, modifiers, projection)`
//! triple so the comparison view can show saved scenarios next to the
//! active one. The store keeps snapshots in memory with optional JSON file
//! persistence — a small engagement tool, not a database. Not durable
//! beyond the backing file; oldest snapshots are evicted past the limit.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use uuid::Uuid;

use crate::types::{BaselineMetrics, ModifierSet, Projection};

/// Default cap on saved snapshots before oldest-first eviction.
pub const DEFAULT_MAX_SNAPSHOTS: usize = 100;

/// A named scenario captured at a point in time.
///
/// The projection is a snapshot of what the engine computed at save time —
/// it is display data for later comparison, never re-trusted as input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioSnapshot {
    pub id: Uuid,
    pub name: String,
    pub saved_at: DateTime<Utc>,
    pub baseline: BaselineMetrics,
    pub modifiers: ModifierSet,
    pub projection: Projection,
}

impl ScenarioSnapshot {
    /// Capture a scenario with a fresh id and timestamp.
    #[must_use]
    pub fn capture(
        name: impl Into<String>,
        baseline: BaselineMetrics,
        modifiers: ModifierSet,
        projection: Projection,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            saved_at: Utc::now(),
            baseline,
            modifiers,
            projection,
        }
    }
}

/// Scenario store errors.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("scenario store I/O error ({path}): {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("scenario store serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// In-memory snapshot store with optional JSON file persistence.
///
/// Loading is lenient: a missing file starts empty, a corrupt file logs a
/// warning and starts empty rather than refusing to boot.
#[derive(Debug)]
pub struct ScenarioStore {
    snapshots: Vec<ScenarioSnapshot>,
    path: Option<PathBuf>,
    max_snapshots: usize,
}

impl Default for ScenarioStore {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl ScenarioStore {
    /// Create a store with no backing file (tests, minimal deployments).
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            snapshots: Vec::new(),
            path: None,
            max_snapshots: DEFAULT_MAX_SNAPSHOTS,
        }
    }

    /// Create a store backed by a JSON file, loading any existing snapshots.
    #[must_use]
    pub fn with_file(path: impl Into<PathBuf>, max_snapshots: usize) -> Self {
        let path = path.into();
        let snapshots = Self::load_file(&path);
        info!(
            path = %path.display(),
            count = snapshots.len(),
            "Scenario store opened"
        );
        Self {
            snapshots,
            path: Some(path),
            max_snapshots: max_snapshots.max(1),
        }
    }

    fn load_file(path: &Path) -> Vec<ScenarioSnapshot> {
        match std::fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(snapshots) => snapshots,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Corrupt scenario file — starting empty");
                    Vec::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Unreadable scenario file — starting empty");
                Vec::new()
            }
        }
    }

    /// Save a snapshot, evicting the oldest past the limit, and flush.
    pub fn save(&mut self, snapshot: ScenarioSnapshot) -> Result<(), StoreError> {
        self.snapshots.push(snapshot);
        if self.snapshots.len() > self.max_snapshots {
            self.snapshots.remove(0);
        }
        self.flush()
    }

    /// All snapshots, oldest first.
    #[must_use]
    pub fn list(&self) -> &[ScenarioSnapshot] {
        &self.snapshots
    }

    /// Look up a snapshot by id.
    #[must_use]
    pub fn get(&self, id: Uuid) -> Option<&ScenarioSnapshot> {
        self.snapshots.iter().find(|s| s.id == id)
    }

    /// Delete a snapshot by id. Returns whether anything was removed.
    pub fn delete(&mut self, id: Uuid) -> Result<bool, StoreError> {
        let before = self.snapshots.len();
        self.snapshots.retain(|s| s.id != id);
        if self.snapshots.len() == before {
            return Ok(false);
        }
        self.flush()?;
        Ok(true)
    }

    fn flush(&self) -> Result<(), StoreError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let contents = serde_json::to_string_pretty(&self.snapshots)?;
        std::fs::write(path, contents).map_err(|source| StoreError::Io {
            path: path.clone(),
            source,
        })
    }
}
