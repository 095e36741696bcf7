use serde::{Deserialize, Serialize};
use std::{
    collections::BTreeMap,
    env,
    path::{Path, PathBuf},
};
use tokio::fs;
use tracing::error;

/// Flat string-keyed storage the session controller writes through.
pub trait Storage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
    fn keys(&self) -> Vec<String>;
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl Storage for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }

    fn keys(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }
}

pub fn resolve_data_path() -> Result<PathBuf, std::io::Error> {
    if let Ok(path) = env::var("APP_DATA_PATH") {
        return Ok(PathBuf::from(path));
    }

    Ok(PathBuf::from("data/session.json"))
}

pub async fn load_data(path: &Path) -> MemoryStore {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(store) => store,
            Err(err) => {
                error!("failed to parse data file: {err}");
                MemoryStore::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => MemoryStore::default(),
        Err(err) => {
            error!("failed to read data file: {err}");
            MemoryStore::default()
        }
    }
}

pub async fn persist_data(path: &Path, store: &MemoryStore) -> std::io::Result<()> {
    let payload = serde_json::to_vec_pretty(store).map_err(std::io::Error::other)?;
    fs::write(path, payload).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trips_values() {
        let mut store = MemoryStore::default();
        assert_eq!(store.get("habit_sleep"), None);

        store.set("habit_sleep", "7");
        store.set("habit_streak", "2");
        assert_eq!(store.get("habit_sleep").as_deref(), Some("7"));
        assert_eq!(store.keys(), vec!["habit_sleep".to_string(), "habit_streak".to_string()]);

        store.remove("habit_sleep");
        assert_eq!(store.get("habit_sleep"), None);
        assert_eq!(store.keys(), vec!["habit_streak".to_string()]);
    }

    #[test]
    fn set_overwrites_existing_value() {
        let mut store = MemoryStore::default();
        store.set("habit_2026-01-05_sleep", "1");
        store.set("habit_2026-01-05_sleep", "0");
        assert_eq!(store.get("habit_2026-01-05_sleep").as_deref(), Some("0"));
        assert_eq!(store.keys().len(), 1);
    }

    #[tokio::test]
    async fn load_data_defaults_when_file_is_missing() {
        let dir = tempfile::tempdir().unwrap();
        let store = load_data(&dir.path().join("missing.json")).await;
        assert!(store.keys().is_empty());
    }

    #[tokio::test]
    async fn load_data_defaults_when_file_is_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, b"not json at all").unwrap();

        let store = load_data(&path).await;
        assert!(store.keys().is_empty());
    }

    #[tokio::test]
    async fn persist_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let mut store = MemoryStore::default();
        store.set("habit_workoutGoal", "Upper body strength");
        store.set("habit_2026-01-05_meal", "0");
        persist_data(&path, &store).await.unwrap();

        let loaded = load_data(&path).await;
        assert_eq!(loaded.get("habit_workoutGoal").as_deref(), Some("Upper body strength"));
        assert_eq!(loaded.get("habit_2026-01-05_meal").as_deref(), Some("0"));
        assert_eq!(loaded.keys().len(), 2);
    }
}
