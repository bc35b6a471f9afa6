#[cfg(test)]
#[path = "file_test.rs"]
mod tests;

use std::fs;
use std::path;

use anyhow::Result;
use toml_edit::value;
use toml_edit::Document;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::PreferenceStore;

/// Preferences kept as flat string keys in a TOML file. The file is re-read on
/// every access so several processes see each other's writes.
pub struct FileStore {
    pub file_path: path::PathBuf,
}

impl Default for FileStore {
    fn default() -> FileStore {
        return FileStore::new(path::PathBuf::from(Config::get(
            ConfigKey::PreferencesFile,
        )));
    }
}

impl FileStore {
    pub fn new(file_path: path::PathBuf) -> FileStore {
        return FileStore { file_path };
    }

    fn read(&self) -> Result<Document> {
        if !self.file_path.exists() {
            return Ok(Document::new());
        }

        let payload = fs::read_to_string(&self.file_path)?;
        return Ok(payload.parse::<Document>()?);
    }

    fn write(&self, doc: &Document) -> Result<()> {
        if let Some(parent) = self.file_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(&self.file_path, doc.to_string())?;
        return Ok(());
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let doc = self.read()?;
        let val = doc
            .get(key)
            .and_then(|item| return item.as_str())
            .map(|val| return val.to_string());

        return Ok(val);
    }

    fn set(&mut self, key: &str, val: &str) -> Result<()> {
        let mut doc = self.read()?;
        doc[key] = value(val);
        self.write(&doc)?;

        tracing::debug!(key = key, file = ?self.file_path, "Stored preference");
        return Ok(());
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let mut doc = self.read()?;
        if doc.remove(key).is_none() {
            return Ok(());
        }

        return self.write(&doc);
    }
}
