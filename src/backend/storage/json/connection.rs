//! Shared handle on the data directory holding the JSON collections.

use anyhow::{Context, Result};
use log::{debug, info};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

/// JsonConnection manages the data directory and the per-collection files.
///
/// Repositories go through [`read_collection`](Self::read_collection) /
/// [`write_collection`](Self::write_collection); the connection counts
/// writes so callers can observe that a no-op bulk operation did not flush.
#[derive(Clone)]
pub struct JsonConnection {
    base_directory: Arc<Mutex<PathBuf>>,
    writes: Arc<AtomicU64>,
}

impl JsonConnection {
    /// Create a connection rooted at an explicit directory, creating it if
    /// needed.
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_path = base_directory.as_ref().to_path_buf();

        if !base_path.exists() {
            fs::create_dir_all(&base_path)
                .with_context(|| format!("Failed to create data directory {}", base_path.display()))?;
        }

        Ok(Self {
            base_directory: Arc::new(Mutex::new(base_path)),
            writes: Arc::new(AtomicU64::new(0)),
        })
    }

    /// Create a connection in the default data directory,
    /// `~/Documents/Escola Tracker`.
    pub fn new_default() -> Result<Self> {
        let home_dir = std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE"))
            .map_err(|_| anyhow::anyhow!("Could not determine home directory"))?;

        let data_dir = PathBuf::from(home_dir)
            .join("Documents")
            .join("Escola Tracker");

        info!("Using data directory: {}", data_dir.display());
        Self::new(data_dir)
    }

    /// The directory the collections live in.
    pub fn base_directory(&self) -> PathBuf {
        self.base_directory.lock().unwrap().clone()
    }

    /// Path of one collection file, e.g. `alunos` -> `<base>/alunos.json`.
    pub fn collection_path(&self, key: &str) -> PathBuf {
        self.base_directory().join(format!("{}.json", key))
    }

    /// Read a whole collection. A missing file is an empty collection, not
    /// an error (first run).
    pub fn read_collection<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>> {
        let path = self.collection_path(key);

        if !path.exists() {
            debug!("Collection file {} does not exist yet, reading as empty", path.display());
            return Ok(Vec::new());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read collection file {}", path.display()))?;
        let records = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse collection file {}", path.display()))?;
        Ok(records)
    }

    /// Replace a whole collection. The records are written to a temp file in
    /// the same directory and renamed into place, so readers never observe a
    /// partial file.
    pub fn write_collection<T: Serialize>(&self, key: &str, records: &[T]) -> Result<()> {
        let path = self.collection_path(key);
        let tmp_path = self.base_directory().join(format!(".{}.json.tmp", key));

        let contents = serde_json::to_string_pretty(records)
            .with_context(|| format!("Failed to serialize collection '{}'", key))?;
        fs::write(&tmp_path, contents)
            .with_context(|| format!("Failed to write temp file {}", tmp_path.display()))?;
        fs::rename(&tmp_path, &path)
            .with_context(|| format!("Failed to replace collection file {}", path.display()))?;

        self.writes.fetch_add(1, Ordering::SeqCst);
        debug!("Flushed {} records to {}", records.len(), path.display());
        Ok(())
    }

    /// Number of collection flushes performed through this connection.
    pub fn writes_performed(&self) -> u64 {
        self.writes.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_collection_reads_as_empty() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let connection = JsonConnection::new(temp_dir.path())?;

        let records: Vec<serde_json::Value> = connection.read_collection("alunos")?;
        assert!(records.is_empty());
        assert_eq!(connection.writes_performed(), 0);
        Ok(())
    }

    #[test]
    fn write_then_read_round_trips() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let connection = JsonConnection::new(temp_dir.path())?;

        let records = vec![serde_json::json!({"id": 1}), serde_json::json!({"id": 2})];
        connection.write_collection("pagamentos", &records)?;

        let back: Vec<serde_json::Value> = connection.read_collection("pagamentos")?;
        assert_eq!(back, records);
        assert_eq!(connection.writes_performed(), 1);
        assert!(temp_dir.path().join("pagamentos.json").exists());
        Ok(())
    }

    #[test]
    fn creates_missing_base_directory() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let nested = temp_dir.path().join("data").join("escola");
        let connection = JsonConnection::new(&nested)?;
        assert!(nested.exists());
        assert_eq!(connection.collection_path("aulas"), nested.join("aulas.json"));
        Ok(())
    }
}
