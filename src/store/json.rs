use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::store::SourceData;

/// Reads each source from `{dir}/{name}.json`, a flat JSON object mapping
/// composite verse keys to text.
pub struct JsonDirStore {
    dir: PathBuf,
}

impl JsonDirStore {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    fn source_path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{}.json", name))
    }
}

impl SourceData for JsonDirStore {
    fn load(&self, name: &str) -> HashMap<String, String> {
        let path = self.source_path(name);

        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(source = name, path = %path.display(), error = %e, "commentary source unavailable, using empty mapping");
                return HashMap::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(source = name, path = %path.display(), error = %e, "commentary source malformed, using empty mapping");
                HashMap::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_valid_source() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("ellicott.json"),
            r#"{"john-3-16": "The whole gospel in a verse.", "john-3-17": "Not to condemn."}"#,
        )
        .unwrap();

        let store = JsonDirStore::new(dir.path());
        let entries = store.load("ellicott");
        assert_eq!(entries.len(), 2);
        assert_eq!(
            entries.get("john-3-16").map(String::as_str),
            Some("The whole gospel in a verse.")
        );
    }

    #[test]
    fn test_missing_source_yields_empty_mapping() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonDirStore::new(dir.path());
        assert!(store.load("nonexistent").is_empty());
    }

    #[test]
    fn test_malformed_source_yields_empty_mapping() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("jfb.json"), "{not valid json").unwrap();

        let store = JsonDirStore::new(dir.path());
        assert!(store.load("jfb").is_empty());
    }
}
