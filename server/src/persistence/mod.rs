//! Persistence layer for character records.
//!
//! The engine only talks to the narrow `PlayerStore` port; every action is
//! an independent read-modify-write against one row. Concurrent actions
//! for the same user race last-write-wins, which the game loop accepts.

mod database;
mod memory;

pub use database::Database;
pub use memory::MemoryStore;

use runequest_shared::LeaderboardEntry;

use crate::entities::Character;

/// Storage port the engine is wired against
#[allow(async_fn_in_trait)]
pub trait PlayerStore {
    async fn exists(&self, user_id: i64) -> Result<bool, StoreError>;

    /// Insert a new record. Fails with `StoreError::AlreadyExists` when a
    /// record for this user id is present.
    async fn create(&self, character: &Character) -> Result<(), StoreError>;

    async fn load(&self, user_id: i64) -> Result<Option<Character>, StoreError>;

    /// Overwrite the record for the character's user id
    async fn save(&self, character: &Character) -> Result<(), StoreError>;

    /// Top characters by level, then total experience, descending
    async fn top_n(&self, n: usize) -> Result<Vec<LeaderboardEntry>, StoreError>;
}

/// Storage errors
#[derive(Debug)]
pub enum StoreError {
    AlreadyExists,
    /// A stored record could not be decoded
    Corrupt(String),
    Database(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AlreadyExists => write!(f, "Record already exists"),
            Self::Corrupt(e) => write!(f, "Corrupt record: {}", e),
            Self::Database(e) => write!(f, "Database error: {}", e),
        }
    }
}

impl std::error::Error for StoreError {}
