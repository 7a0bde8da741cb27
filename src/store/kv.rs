//! Key-value substrate behind both the local work-log persistence and the
//! emulated per-identity remote settings store.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::errors::AppResult;

/// Minimal get/set contract over string values. Keys may contain `/` to
/// address per-identity documents (`<uid>/hourly`).
pub trait KvStore {
    fn get(&self, key: &str) -> AppResult<Option<String>>;
    fn put(&mut self, key: &str, value: &str) -> AppResult<()>;
}

/// One JSON file per key under a root directory.
#[derive(Debug, Clone)]
pub struct FileKv {
    root: PathBuf,
}

impl FileKv {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl KvStore for FileKv {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn put(&mut self, key: &str, value: &str) -> AppResult<()> {
        let path = self.path_for(key);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, value)?;
        Ok(())
    }
}

/// In-memory store, used by the unit tests.
#[derive(Debug, Default, Clone)]
pub struct MemKv {
    map: HashMap<String, String>,
}

impl KvStore for MemKv {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.map.get(key).cloned())
    }

    fn put(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.map.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
