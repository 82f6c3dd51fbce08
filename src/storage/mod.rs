//! Filesystem data store.
//!
//! Stands in for the external query layer: sports, leagues, divisions,
//! teams and event results live as JSONL files under the data directory,
//! and [`Dataset::resolve`] applies a scope filter to them.

mod dataset;
mod jsonl;
mod records;

pub use dataset::*;
pub use jsonl::*;
pub use records::*;

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration for storage paths.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
}

impl StorageConfig {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    /// Path of the JSONL file holding one entity type.
    pub fn entity_path(&self, entity: EntityType) -> PathBuf {
        self.data_dir.join(entity.filename())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self::new(PathBuf::from("./data"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_config_paths() {
        let config = StorageConfig::new(PathBuf::from("/data"));

        assert_eq!(
            config.entity_path(EntityType::Team),
            PathBuf::from("/data/teams.jsonl")
        );
        assert_eq!(
            config.entity_path(EntityType::EventResult),
            PathBuf::from("/data/event_results.jsonl")
        );
    }

    #[test]
    fn test_storage_config_default() {
        let config = StorageConfig::default();
        assert_eq!(config.data_dir, PathBuf::from("./data"));
    }
}
