//! In-memory store, used when no database is reachable and in tests.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use runequest_shared::LeaderboardEntry;

use super::{PlayerStore, StoreError};
use crate::entities::Character;

/// HashMap-backed `PlayerStore`. Nothing survives a restart.
#[derive(Default)]
pub struct MemoryStore {
    records: Mutex<HashMap<i64, Character>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<i64, Character>>, StoreError> {
        self.records
            .lock()
            .map_err(|_| StoreError::Database("store mutex poisoned".into()))
    }
}

impl PlayerStore for MemoryStore {
    async fn exists(&self, user_id: i64) -> Result<bool, StoreError> {
        Ok(self.lock()?.contains_key(&user_id))
    }

    async fn create(&self, character: &Character) -> Result<(), StoreError> {
        let mut records = self.lock()?;
        if records.contains_key(&character.user_id) {
            return Err(StoreError::AlreadyExists);
        }
        records.insert(character.user_id, character.clone());
        Ok(())
    }

    async fn load(&self, user_id: i64) -> Result<Option<Character>, StoreError> {
        Ok(self.lock()?.get(&user_id).cloned())
    }

    async fn save(&self, character: &Character) -> Result<(), StoreError> {
        self.lock()?.insert(character.user_id, character.clone());
        Ok(())
    }

    async fn top_n(&self, n: usize) -> Result<Vec<LeaderboardEntry>, StoreError> {
        let records = self.lock()?;
        let mut entries: Vec<LeaderboardEntry> = records
            .values()
            .map(|c| LeaderboardEntry {
                user_id: c.user_id,
                class_id: c.class.id().to_string(),
                level: c.level,
                total_experience: c.counters.total_experience,
                kills: c.counters.kills,
            })
            .collect();
        entries.sort_by(|a, b| {
            b.level
                .cmp(&a.level)
                .then_with(|| b.total_experience.cmp(&a.total_experience))
        });
        entries.truncate(n);
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use runequest_shared::{get_class_definition, CharacterClass};

    fn character(user_id: i64, level: u32, total_experience: u64) -> Character {
        let mut c = Character::new(user_id, &get_class_definition(CharacterClass::Warrior));
        c.level = level;
        c.counters.total_experience = total_experience;
        c
    }

    #[tokio::test]
    async fn test_create_rejects_duplicates() {
        let store = MemoryStore::new();
        let c = character(1, 1, 0);

        store.create(&c).await.unwrap();
        assert!(store.exists(1).await.unwrap());
        assert!(matches!(
            store.create(&c).await,
            Err(StoreError::AlreadyExists)
        ));
    }

    #[tokio::test]
    async fn test_save_then_load_round_trips() {
        let store = MemoryStore::new();
        let mut c = character(1, 1, 0);
        store.create(&c).await.unwrap();

        c.gold = 999;
        store.save(&c).await.unwrap();

        let loaded = store.load(1).await.unwrap().unwrap();
        assert_eq!(loaded.gold, 999);
        assert!(store.load(2).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_top_n_orders_by_level_then_experience() {
        let store = MemoryStore::new();
        store.create(&character(1, 3, 100)).await.unwrap();
        store.create(&character(2, 5, 50)).await.unwrap();
        store.create(&character(3, 5, 200)).await.unwrap();

        let top = store.top_n(2).await.unwrap();
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].user_id, 3);
        assert_eq!(top[1].user_id, 2);
    }
}
