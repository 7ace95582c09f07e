use crate::constants::{PREFS_APPLICATION, PREFS_FILE_NAME, PREFS_ORGANIZATION, PREFS_QUALIFIER};
use crate::error::{Error, Result};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Key-value preference store shared with the rest of the browser.
pub trait Prefs {
    fn string_for_key(&self, key: &str) -> Option<String>;
    fn bool_for_key(&self, key: &str) -> Option<bool>;
    fn set_string(&mut self, key: &str, value: &str);
    fn set_bool(&mut self, key: &str, value: bool);
    /// Removing a key that is not set does nothing.
    fn remove(&mut self, key: &str);

    /// Persists pending writes. In-memory stores have nothing to do.
    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PrefValue {
    Bool(bool),
    String(String),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MemoryPrefs {
    values: BTreeMap<String, PrefValue>,
}

impl MemoryPrefs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }
}

impl Prefs for MemoryPrefs {
    fn string_for_key(&self, key: &str) -> Option<String> {
        match self.values.get(key) {
            Some(PrefValue::String(s)) => Some(s.clone()),
            _ => None,
        }
    }

    fn bool_for_key(&self, key: &str) -> Option<bool> {
        match self.values.get(key) {
            Some(PrefValue::Bool(b)) => Some(*b),
            _ => None,
        }
    }

    fn set_string(&mut self, key: &str, value: &str) {
        debug!(key, value, "set string pref");
        self.values
            .insert(key.to_string(), PrefValue::String(value.to_string()));
    }

    fn set_bool(&mut self, key: &str, value: bool) {
        debug!(key, value, "set bool pref");
        self.values.insert(key.to_string(), PrefValue::Bool(value));
    }

    fn remove(&mut self, key: &str) {
        if self.values.remove(key).is_some() {
            debug!(key, "removed pref");
        }
    }
}

/// A `MemoryPrefs` persisted as a JSON object on disk.
pub struct FilePrefs {
    path: PathBuf,
    inner: MemoryPrefs,
    dirty: bool,
}

impl FilePrefs {
    /// Loads `path`, or starts empty when the file does not exist yet.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let values: BTreeMap<String, PrefValue> = if path.exists() {
            let content = fs::read_to_string(&path).map_err(|source| Error::Io {
                path: path.clone(),
                source,
            })?;
            serde_json::from_str(&content).map_err(|source| Error::Json {
                path: path.clone(),
                source,
            })?
        } else {
            BTreeMap::new()
        };
        debug!(path = %path.display(), entries = values.len(), "loaded prefs");
        Ok(Self {
            path,
            inner: MemoryPrefs { values },
            dirty: false,
        })
    }

    pub fn default_path() -> Result<PathBuf> {
        ProjectDirs::from(PREFS_QUALIFIER, PREFS_ORGANIZATION, PREFS_APPLICATION)
            .map(|dirs| dirs.config_dir().join(PREFS_FILE_NAME))
            .ok_or(Error::NoConfigDir)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }
}

impl Prefs for FilePrefs {
    fn string_for_key(&self, key: &str) -> Option<String> {
        self.inner.string_for_key(key)
    }

    fn bool_for_key(&self, key: &str) -> Option<bool> {
        self.inner.bool_for_key(key)
    }

    fn set_string(&mut self, key: &str, value: &str) {
        self.inner.set_string(key, value);
        self.dirty = true;
    }

    fn set_bool(&mut self, key: &str, value: bool) {
        self.inner.set_bool(key, value);
        self.dirty = true;
    }

    fn remove(&mut self, key: &str) {
        if self.inner.contains_key(key) {
            self.inner.remove(key);
            self.dirty = true;
        }
    }

    /// Writes the store to disk if anything changed since the last flush.
    fn flush(&mut self) -> Result<()> {
        if !self.dirty {
            return Ok(());
        }
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| Error::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let content =
            serde_json::to_string_pretty(&self.inner.values).map_err(|source| Error::Json {
                path: self.path.clone(),
                source,
            })?;
        fs::write(&self.path, content).map_err(|source| Error::Io {
            path: self.path.clone(),
            source,
        })?;
        self.dirty = false;
        Ok(())
    }
}

impl Drop for FilePrefs {
    fn drop(&mut self) {
        if let Err(e) = self.flush() {
            warn!(error = %e, "failed to save prefs");
        }
    }
}
