//! Command implementations

pub mod analysis;
pub mod calc;
pub mod components;
pub mod environments;
pub mod import;

use crate::cli::GlobalOpts;
use crate::core::Config;
use crate::store::JsonFileStore;

/// Resolve the analysis store: the --store flag wins, then config.
pub fn open_store(global: &GlobalOpts) -> JsonFileStore {
    let path = global
        .store
        .clone()
        .unwrap_or_else(|| Config::load().store_path());
    JsonFileStore::new(path)
}
