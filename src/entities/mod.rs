//! Data model
//!
//! - [`Component`] - one parts-list line item with quantity and failure rate
//! - [`Environment`] - operating environment and derating factor
//! - [`SystemConfig`] - the caller-owned working configuration
//! - [`SavedAnalysis`] - immutable persisted snapshot of a calculation

pub mod analysis;
pub mod component;
pub mod environment;
pub mod system;

pub use analysis::SavedAnalysis;
pub use component::{catalog_failure_rate, default_description, Component, CatalogEntry, CATALOG};
pub use environment::Environment;
pub use system::SystemConfig;
