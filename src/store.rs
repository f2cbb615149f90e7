#![cfg(feature = "std")]
//! Whole-state persistence against an external key-value collaborator.
//!
//! One key holds one bincode-encoded snapshot of the entire session plus a
//! timestamp. No versioning or migration; a snapshot that does not decode
//! is simply corrupt.

use std::collections::HashMap;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::common::GameError;
use crate::game::{Game, GameState};

/// Storage key for the single whole-game snapshot.
pub const SAVE_KEY: &str = "broadside.save";

/// External key-value store holding serialized snapshots.
pub trait SaveStore {
    /// Store bytes under a key, replacing any previous value. May fail on
    /// quota-style conditions in real backends.
    fn put(&mut self, key: &str, value: &[u8]) -> anyhow::Result<()>;

    /// Bytes stored under the key, if present.
    fn get(&self, key: &str) -> Option<Vec<u8>>;
}

/// In-memory store for tests and the sim harness.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, Vec<u8>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SaveStore for MemoryStore {
    fn put(&mut self, key: &str, value: &[u8]) -> anyhow::Result<()> {
        self.entries.insert(key.to_owned(), value.to_vec());
        Ok(())
    }

    fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.entries.get(key).cloned()
    }
}

/// A saved session snapshot plus the moment it was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SavedGame {
    pub state: GameState,
    /// Milliseconds since the Unix epoch at save time.
    pub saved_at: u64,
}

impl SavedGame {
    /// Rebuild the session the snapshot describes.
    pub fn restore(&self) -> Game {
        Game::from_state(self.state)
    }
}

/// Serialize the session under [`SAVE_KEY`]. Returns the stored record.
pub fn save_game<S: SaveStore + ?Sized>(store: &mut S, game: &Game) -> anyhow::Result<SavedGame> {
    let saved = SavedGame {
        state: game.state(),
        saved_at: SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0),
    };
    let bytes = bincode::serialize(&saved)?;
    store.put(SAVE_KEY, &bytes)?;
    Ok(saved)
}

/// Load the stored snapshot. `NoSavedGame` when the key is absent,
/// `CorruptSave` when the bytes do not decode. Nothing is mutated on
/// failure; callers replace their current session only on success.
pub fn load_game<S: SaveStore + ?Sized>(store: &S) -> Result<SavedGame, GameError> {
    let bytes = store.get(SAVE_KEY).ok_or(GameError::NoSavedGame)?;
    bincode::deserialize(&bytes).map_err(|_| GameError::CorruptSave)
}
