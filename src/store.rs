// 💾 Store - JSON file holding the serialized collection
//
// Reads happen once before prompting, the write happens once at the end and
// overwrites the file. One process is assumed to own the file for a run.

use crate::record::Collection;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default store file, resolved against the working directory
pub const DEFAULT_STORE_FILE: &str = "people.json";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize collection for {}: {source}", .path.display())]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// What was found at the store path.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    Missing,
    /// Present but zero-length or whitespace only
    Empty,
    Loaded(Collection),
}

impl LoadOutcome {
    pub fn into_collection(self) -> Collection {
        match self {
            LoadOutcome::Loaded(collection) => collection,
            LoadOutcome::Missing | LoadOutcome::Empty => Collection::new(),
        }
    }
}

// ============================================================================
// LOAD
// ============================================================================

pub fn load_collection(path: &Path) -> Result<LoadOutcome, StoreError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "store file not found");
            return Ok(LoadOutcome::Missing);
        }
        Err(source) => {
            return Err(StoreError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    if contents.trim().is_empty() {
        tracing::debug!(path = %path.display(), "store file is empty");
        return Ok(LoadOutcome::Empty);
    }

    let collection: Collection =
        serde_json::from_str(&contents).map_err(|source| StoreError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::info!(path = %path.display(), records = collection.len(), "store loaded");
    Ok(LoadOutcome::Loaded(collection))
}

// ============================================================================
// SAVE
// ============================================================================

/// Overwrite the store with the full collection, pretty-printed.
pub fn save_collection(path: &Path, collection: &Collection) -> Result<(), StoreError> {
    let mut json =
        serde_json::to_string_pretty(collection).map_err(|source| StoreError::Serialize {
            path: path.to_path_buf(),
            source,
        })?;
    json.push('\n');

    fs::write(path, json).map_err(|source| StoreError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(path = %path.display(), records = collection.len(), "store saved");
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Record;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn sample_collection() -> Collection {
        Collection::from_records(vec![
            Record::new("Alice", 30, 100.5, vec!["reading".to_string()]),
            Record::new(
                "Bob",
                52,
                0.0,
                vec!["chess".to_string(), String::new(), "golf".to_string()],
            ),
        ])
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let outcome = load_collection(&dir.path().join("people.json")).unwrap();
        assert_eq!(outcome, LoadOutcome::Missing);
    }

    #[test]
    fn test_load_empty_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("people.json");
        fs::write(&path, "").unwrap();
        assert_eq!(load_collection(&path).unwrap(), LoadOutcome::Empty);

        fs::write(&path, "  \n").unwrap();
        assert_eq!(load_collection(&path).unwrap(), LoadOutcome::Empty);
    }

    #[test]
    fn test_load_malformed_file_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("people.json");
        fs::write(&path, "{ not json").unwrap();

        let err = load_collection(&path).unwrap_err();
        assert!(matches!(err, StoreError::Parse { .. }));
    }

    #[test]
    fn test_load_wrong_shape_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("people.json");
        fs::write(&path, r#"{"name":"Alice"}"#).unwrap();

        assert!(matches!(
            load_collection(&path),
            Err(StoreError::Parse { .. })
        ));
    }

    #[test]
    fn test_load_directory_is_read_error() {
        let dir = TempDir::new().unwrap();
        let err = load_collection(dir.path()).unwrap_err();
        assert!(matches!(err, StoreError::Read { .. }));
    }

    #[test]
    fn test_load_array_of_wrong_items_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("people.json");
        fs::write(&path, "[1, 2, 3]").unwrap();

        assert!(matches!(
            load_collection(&path),
            Err(StoreError::Parse { .. })
        ));
    }

    #[test]
    fn test_save_then_load_keeps_order() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("people.json");
        let collection = sample_collection();

        save_collection(&path, &collection).unwrap();
        let loaded = load_collection(&path).unwrap().into_collection();

        assert_eq!(loaded, collection);
    }

    #[test]
    fn test_save_is_indented() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("people.json");
        save_collection(&path, &sample_collection()).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("[\n  {\n"));
        assert!(text.contains("\"interests\": ["));
    }

    #[test]
    fn test_save_empty_collection() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("people.json");
        save_collection(&path, &Collection::new()).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "[]\n");
    }

    #[test]
    fn test_save_overwrites_existing_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("people.json");
        fs::write(&path, "garbage that is much longer than an empty array").unwrap();

        save_collection(&path, &Collection::new()).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "[]\n");
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("no-such-dir").join("people.json");

        let err = save_collection(&path, &Collection::new()).unwrap_err();
        assert!(matches!(err, StoreError::Write { .. }));
        assert!(err.to_string().contains("people.json"));
    }
}
