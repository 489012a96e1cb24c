use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::{self, Error as SerdeError};

use super::{EventStore, InMemoryEventStore};
use crate::models::event::Event;

const SNAPSHOT_VERSION: u32 = 1;

/// On-disk form of the event list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventSnapshot {
    pub version: u32,
    pub events: Vec<Event>,
}

pub fn load_snapshot(path: &Path) -> Result<InMemoryEventStore> {
    if !path.exists() {
        return Ok(InMemoryEventStore::default());
    }

    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read events from {}", path.display()))?;
    let snapshot: EventSnapshot =
        serde_json::from_str(&data).map_err(|err| map_deser_error(err, path))?;
    if snapshot.version != SNAPSHOT_VERSION {
        log::warn!(
            "Event snapshot {} has version {}, expected {}",
            path.display(),
            snapshot.version,
            SNAPSHOT_VERSION
        );
    }
    Ok(InMemoryEventStore::new(snapshot.events))
}

pub fn save_snapshot(path: &Path, store: &impl EventStore) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create dir {}", parent.display()))?;
    }

    let snapshot = EventSnapshot {
        version: SNAPSHOT_VERSION,
        events: store.events().to_vec(),
    };
    let data = serde_json::to_string_pretty(&snapshot)?;
    fs::write(path, data)
        .with_context(|| format!("failed to write events to {}", path.display()))?;
    Ok(())
}

fn map_deser_error(err: SerdeError, path: &Path) -> anyhow::Error {
    anyhow::Error::new(err).context(format!(
        "failed to deserialize events from {}",
        path.display()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::date::Moment;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_is_empty_store() {
        let dir = tempdir().unwrap();
        let store = load_snapshot(&dir.path().join("nope.json")).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("events.json");
        let start = Moment::from_ymd_hm(2024, 1, 1, 9, 0).unwrap();
        let end = Moment::from_ymd_hm(2024, 1, 3, 17, 0).unwrap();
        let store = InMemoryEventStore::new(vec![Event::new("e", "Offsite", start, end).unwrap()]);

        save_snapshot(&path, &store).unwrap();
        let loaded = load_snapshot(&path).unwrap();
        assert_eq!(loaded, store);
    }

    #[test]
    fn test_corrupt_file_reports_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("events.json");
        fs::write(&path, "{ not json").unwrap();

        let err = load_snapshot(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("events.json"));
    }
}
