//! Saved analysis - an immutable snapshot of a completed calculation

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::identity::AnalysisId;
use crate::engine::CalculationResult;

use super::system::SystemConfig;

/// A persisted snapshot of a system configuration together with the result
/// computed for it.
///
/// Created on explicit save, immutable thereafter, deleted only by explicit
/// id. The snapshot is a deep copy; the caller's working `SystemConfig` and
/// `CalculationResult` remain independent after saving.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedAnalysis {
    /// Unique id, minted at save time
    pub id: AnalysisId,

    /// When the snapshot was taken
    pub saved_at: DateTime<Utc>,

    /// Who saved it
    pub author: String,

    /// The system as configured at save time
    pub system: SystemConfig,

    /// The result computed for that configuration
    pub result: CalculationResult,
}

impl SavedAnalysis {
    /// Snapshot a system and its result. Both are cloned; later mutation of
    /// the originals cannot reach the snapshot.
    pub fn snapshot(system: &SystemConfig, result: &CalculationResult, author: impl Into<String>) -> Self {
        Self {
            id: AnalysisId::new(),
            saved_at: Utc::now(),
            author: author.into(),
            system: system.clone(),
            result: result.clone(),
        }
    }

    /// Human-readable local timestamp for display.
    pub fn saved_at_local(&self) -> String {
        self.saved_at
            .with_timezone(&chrono::Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string()
    }
}
