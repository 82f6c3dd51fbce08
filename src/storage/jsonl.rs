//! JSONL (JSON Lines) storage.
//!
//! Each line is a valid JSON object representing one entity.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::marker::PhantomData;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
#[cfg(test)]
use serde::Serialize;
use tracing::{debug, warn};

use super::{StorageConfig, StorageError};

/// Entity types for JSONL storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityType {
    Sport,
    League,
    Division,
    Team,
    GroupTeam,
    Tournament,
    Event,
    EventResult,
}

impl EntityType {
    /// Get the filename for this entity type.
    pub fn filename(&self) -> &'static str {
        match self {
            EntityType::Sport => "sports.jsonl",
            EntityType::League => "leagues.jsonl",
            EntityType::Division => "divisions.jsonl",
            EntityType::Team => "teams.jsonl",
            EntityType::GroupTeam => "group_teams.jsonl",
            EntityType::Tournament => "tournaments.jsonl",
            EntityType::Event => "events.jsonl",
            EntityType::EventResult => "event_results.jsonl",
        }
    }
}

/// JSONL file writer, used to lay out data directories in tests.
#[cfg(test)]
pub struct JsonlWriter<T> {
    path: PathBuf,
    _marker: PhantomData<T>,
}

#[cfg(test)]
impl<T: Serialize> JsonlWriter<T> {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            _marker: PhantomData,
        }
    }

    pub fn for_entity(config: &StorageConfig, entity: EntityType) -> Self {
        Self::new(config.entity_path(entity))
    }

    /// Write entities, replacing the entire file.
    pub fn write_all(&self, entities: &[T]) -> Result<usize, StorageError> {
        use std::io::{BufWriter, Write};

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut writer = BufWriter::new(File::create(&self.path)?);
        for entity in entities {
            writeln!(writer, "{}", serde_json::to_string(entity)?)?;
        }
        writer.flush()?;

        debug!("Wrote {} entities to {:?}", entities.len(), self.path);
        Ok(entities.len())
    }
}

/// JSONL file reader.
pub struct JsonlReader<T> {
    path: PathBuf,
    _marker: PhantomData<T>,
}

impl<T: DeserializeOwned> JsonlReader<T> {
    /// Create a new JSONL reader for the given path.
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            _marker: PhantomData,
        }
    }

    /// Create a reader for a specific entity type.
    pub fn for_entity(config: &StorageConfig, entity: EntityType) -> Self {
        Self::new(config.entity_path(entity))
    }

    /// Read all entities from the file. A missing file reads as empty;
    /// malformed lines are skipped.
    pub fn read_all(&self) -> Result<Vec<T>, StorageError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.path)?;
        let reader = BufReader::new(file);
        let mut entities = Vec::new();

        for (line_num, line) in reader.lines().enumerate() {
            let line = line?;

            if line.trim().is_empty() {
                continue;
            }

            match serde_json::from_str(&line) {
                Ok(entity) => entities.push(entity),
                Err(e) => {
                    warn!(
                        "Failed to parse line {} in {:?}: {}",
                        line_num + 1,
                        self.path,
                        e
                    );
                }
            }
        }

        debug!("Read {} entities from {:?}", entities.len(), self.path);
        Ok(entities)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Row {
        id: String,
        value: i32,
    }

    fn row(id: &str, value: i32) -> Row {
        Row {
            id: id.to_string(),
            value,
        }
    }

    #[test]
    fn test_write_then_read() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("nested").join("rows.jsonl");

        let writer = JsonlWriter::<Row>::new(path.clone());
        assert_eq!(writer.write_all(&[row("a", 1), row("b", 2)]).unwrap(), 2);

        let reader = JsonlReader::<Row>::new(path);
        assert_eq!(reader.read_all().unwrap(), vec![row("a", 1), row("b", 2)]);
    }

    #[test]
    fn test_write_all_replaces_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("rows.jsonl");

        let writer = JsonlWriter::<Row>::new(path.clone());
        writer.write_all(&[row("a", 1), row("b", 2)]).unwrap();
        writer.write_all(&[row("z", 9)]).unwrap();

        let rows = JsonlReader::<Row>::new(path).read_all().unwrap();
        assert_eq!(rows, vec![row("z", 9)]);
    }

    #[test]
    fn test_missing_file_reads_empty() {
        let tmp = tempfile::tempdir().unwrap();
        let reader = JsonlReader::<Row>::new(tmp.path().join("absent.jsonl"));

        assert!(reader.read_all().unwrap().is_empty());
    }

    #[test]
    fn test_malformed_lines_are_skipped() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("rows.jsonl");
        std::fs::write(
            &path,
            "{\"id\":\"a\",\"value\":1}\nnot json\n\n{\"id\":\"b\",\"value\":2}\n",
        )
        .unwrap();

        let rows = JsonlReader::<Row>::new(path).read_all().unwrap();
        assert_eq!(rows, vec![row("a", 1), row("b", 2)]);
    }

    #[test]
    fn test_for_entity_uses_data_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let config = StorageConfig::new(tmp.path().to_path_buf());

        JsonlWriter::<Row>::for_entity(&config, EntityType::Sport)
            .write_all(&[row("s1", 0)])
            .unwrap();

        assert!(tmp.path().join("sports.jsonl").exists());
        let reader = JsonlReader::<Row>::for_entity(&config, EntityType::Sport);
        assert_eq!(reader.read_all().unwrap().len(), 1);
    }
}
