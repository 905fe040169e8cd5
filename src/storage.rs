//! JSON file persistence: whole-collection load/save of players and tournaments.

use crate::models::{Player, Tournament};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Errors from the file store.
#[derive(Debug)]
pub enum StoreError {
    Io(io::Error),
    Json(serde_json::Error),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Io(e) => write!(f, "I/O error: {e}"),
            StoreError::Json(e) => write!(f, "JSON error: {e}"),
        }
    }
}

impl From<io::Error> for StoreError {
    fn from(e: io::Error) -> Self {
        StoreError::Io(e)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Json(e)
    }
}

/// File-backed store over a data directory. Each collection lives in one
/// JSON file and is always read or replaced as a whole; a missing file
/// loads as an empty collection.
pub struct JsonStore {
    data_dir: PathBuf,
}

impl JsonStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    fn players_path(&self) -> PathBuf {
        self.data_dir.join("players.json")
    }

    fn tournaments_path(&self) -> PathBuf {
        self.data_dir.join("tournaments.json")
    }

    pub fn load_players(&self) -> Result<Vec<Player>, StoreError> {
        load_collection(&self.players_path())
    }

    pub fn save_players(&self, players: &[Player]) -> Result<(), StoreError> {
        self.save_collection(&self.players_path(), players)
    }

    pub fn load_tournaments(&self) -> Result<Vec<Tournament>, StoreError> {
        load_collection(&self.tournaments_path())
    }

    pub fn save_tournaments(&self, tournaments: &[Tournament]) -> Result<(), StoreError> {
        self.save_collection(&self.tournaments_path(), tournaments)
    }

    fn save_collection<T: serde::Serialize>(
        &self,
        path: &Path,
        items: &[T],
    ) -> Result<(), StoreError> {
        fs::create_dir_all(&self.data_dir)?;
        let json = serde_json::to_string_pretty(items)?;
        fs::write(path, json)?;
        Ok(())
    }
}

fn load_collection<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Vec<T>, StoreError> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let json = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}
