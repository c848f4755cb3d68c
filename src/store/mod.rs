//! Analysis persistence - append/list/remove over saved snapshots
//!
//! The engine and the ingestion pipeline know nothing about storage; the
//! trait here is the entire contract, so tests run against the in-memory
//! fake and the CLI against the JSON file store. Store failures surface as
//! errors and never touch the caller's in-memory configuration.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::identity::AnalysisId;
use crate::entities::SavedAnalysis;

/// Persistence failures: the file could not be read/written, or its
/// contents could not be (de)serialized.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("analysis store I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("analysis store serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// The persistence contract for saved analyses.
pub trait AnalysisStore {
    /// All saved analyses, most recent first.
    fn list(&self) -> Result<Vec<SavedAnalysis>, StoreError>;

    /// Persist a new snapshot at the head of the list.
    fn append(&mut self, analysis: SavedAnalysis) -> Result<(), StoreError>;

    /// Delete by id. Returns whether anything was removed.
    fn remove(&mut self, id: &AnalysisId) -> Result<bool, StoreError>;
}

/// File-backed store: one JSON array, newest snapshot first, rewritten
/// wholesale on every mutation. A missing file reads as an empty store.
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

    fn load(&self) -> Result<Vec<SavedAnalysis>, StoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let contents = fs::read_to_string(&self.path)?;
        if contents.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_str(&contents)?)
    }

    fn save(&self, analyses: &[SavedAnalysis]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(analyses)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

impl AnalysisStore for JsonFileStore {
    fn list(&self) -> Result<Vec<SavedAnalysis>, StoreError> {
        self.load()
    }

    fn append(&mut self, analysis: SavedAnalysis) -> Result<(), StoreError> {
        let mut analyses = self.load()?;
        analyses.insert(0, analysis);
        self.save(&analyses)
    }

    fn remove(&mut self, id: &AnalysisId) -> Result<bool, StoreError> {
        let mut analyses = self.load()?;
        let before = analyses.len();
        analyses.retain(|a| a.id != *id);
        let removed = analyses.len() != before;
        if removed {
            self.save(&analyses)?;
        }
        Ok(removed)
    }
}

/// In-memory store for tests and embedding.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    analyses: Vec<SavedAnalysis>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AnalysisStore for MemoryStore {
    fn list(&self) -> Result<Vec<SavedAnalysis>, StoreError> {
        Ok(self.analyses.clone())
    }

    fn append(&mut self, analysis: SavedAnalysis) -> Result<(), StoreError> {
        self.analyses.insert(0, analysis);
        Ok(())
    }

    fn remove(&mut self, id: &AnalysisId) -> Result<bool, StoreError> {
        let before = self.analyses.len();
        self.analyses.retain(|a| a.id != *id);
        Ok(self.analyses.len() != before)
    }
}
