use std::fs;

use anyhow::Result;

use super::FileStore;
use crate::domain::models::PreferenceStore;

#[test]
fn it_returns_none_without_a_file() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let store = FileStore::new(dir.path().join("preferences.toml"));

    assert_eq!(store.get("theme")?, None);

    return Ok(());
}

#[test]
fn it_persists_values_across_instances() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let file_path = dir.path().join("nested/preferences.toml");

    let mut store = FileStore::new(file_path.clone());
    store.set("theme", "dark")?;

    let reopened = FileStore::new(file_path.clone());
    assert_eq!(reopened.get("theme")?, Some("dark".to_string()));
    assert_eq!(fs::read_to_string(file_path)?.trim(), "theme = \"dark\"");

    return Ok(());
}

#[test]
fn it_keeps_unrelated_keys() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let file_path = dir.path().join("preferences.toml");
    fs::write(&file_path, "# Kitala preferences\nlanguage = \"fr\"\n")?;

    let mut store = FileStore::new(file_path.clone());
    store.set("theme", "light")?;
    store.remove("theme")?;

    let payload = fs::read_to_string(file_path)?;
    assert!(payload.contains("language = \"fr\""));
    assert!(!payload.contains("theme"));
    assert_eq!(store.get("language")?, Some("fr".to_string()));

    return Ok(());
}

#[test]
fn it_ignores_removing_missing_keys() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let file_path = dir.path().join("preferences.toml");

    let mut store = FileStore::new(file_path.clone());
    store.remove("theme")?;

    assert!(!file_path.exists());

    return Ok(());
}
