use std::collections::HashMap;

use anyhow::Result;

use crate::domain::models::PreferenceStore;

#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        return Ok(self.values.get(key).cloned());
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        return Ok(());
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.values.remove(key);
        return Ok(());
    }
}
