//! PostgreSQL-backed `PlayerStore`.
//!
//! One row per user in the `players` table. Map-shaped state (inventory,
//! equipment, cooldowns, quest progress) lives in JSONB columns.

use sqlx::{postgres::PgPoolOptions, PgPool, Row};

use runequest_shared::LeaderboardEntry;

use super::{PlayerStore, StoreError};
use crate::entities::Character;

/// Database connection wrapper
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Connect to the database
    pub async fn connect(url: &str) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect(url)
            .await?;

        Ok(Self { pool })
    }

    /// Create the `players` table if it does not exist yet
    pub async fn init_schema(&self) -> Result<(), sqlx::Error> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS players (
                user_id BIGINT PRIMARY KEY,
                class TEXT NOT NULL,
                level INTEGER NOT NULL,
                experience BIGINT NOT NULL,
                health INTEGER NOT NULL,
                max_health INTEGER NOT NULL,
                mana INTEGER NOT NULL,
                max_mana INTEGER NOT NULL,
                attack INTEGER NOT NULL,
                defense INTEGER NOT NULL,
                crit_chance REAL NOT NULL,
                dodge_chance REAL NOT NULL,
                crit_damage REAL NOT NULL,
                gold BIGINT NOT NULL,
                inventory JSONB NOT NULL DEFAULT '{}',
                equipment JSONB NOT NULL DEFAULT '{}',
                cooldowns JSONB NOT NULL DEFAULT '{}',
                kills BIGINT NOT NULL DEFAULT 0,
                battles_won BIGINT NOT NULL DEFAULT 0,
                battles_lost BIGINT NOT NULL DEFAULT 0,
                damage_dealt BIGINT NOT NULL DEFAULT 0,
                total_experience BIGINT NOT NULL DEFAULT 0,
                achievements JSONB NOT NULL DEFAULT '[]',
                quest_progress JSONB NOT NULL DEFAULT '{}',
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
            )",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    fn row_to_character(row: &sqlx::postgres::PgRow) -> Result<Character, StoreError> {
        let class_id: String = row.get("class");
        let class = runequest_shared::CharacterClass::from_id(&class_id)
            .ok_or_else(|| StoreError::Corrupt(format!("unknown class '{}'", class_id)))?;

        Ok(Character {
            user_id: row.get("user_id"),
            class,
            level: row.get::<i32, _>("level") as u32,
            experience: row.get::<i64, _>("experience") as u64,
            health: row.get::<i32, _>("health") as u32,
            max_health: row.get::<i32, _>("max_health") as u32,
            mana: row.get::<i32, _>("mana") as u32,
            max_mana: row.get::<i32, _>("max_mana") as u32,
            attack: row.get::<i32, _>("attack") as u32,
            defense: row.get::<i32, _>("defense") as u32,
            crit_chance: row.get("crit_chance"),
            dodge_chance: row.get("dodge_chance"),
            crit_damage: row.get("crit_damage"),
            gold: row.get::<i64, _>("gold") as u64,
            inventory: decode("inventory", row.get("inventory"))?,
            equipment: decode("equipment", row.get("equipment"))?,
            cooldowns: decode("cooldowns", row.get("cooldowns"))?,
            counters: crate::entities::BattleCounters {
                kills: row.get::<i64, _>("kills") as u64,
                battles_won: row.get::<i64, _>("battles_won") as u64,
                battles_lost: row.get::<i64, _>("battles_lost") as u64,
                damage_dealt: row.get::<i64, _>("damage_dealt") as u64,
                total_experience: row.get::<i64, _>("total_experience") as u64,
            },
            achievements: decode("achievements", row.get("achievements"))?,
            quest_progress: decode("quest_progress", row.get("quest_progress"))?,
        })
    }

    fn encode(field: &str, value: impl serde::Serialize) -> Result<serde_json::Value, StoreError> {
        serde_json::to_value(value)
            .map_err(|e| StoreError::Corrupt(format!("bad {}: {}", field, e)))
    }
}

fn decode<T: serde::de::DeserializeOwned>(
    field: &str,
    value: serde_json::Value,
) -> Result<T, StoreError> {
    serde_json::from_value(value).map_err(|e| StoreError::Corrupt(format!("bad {}: {}", field, e)))
}

impl PlayerStore for Database {
    async fn exists(&self, user_id: i64) -> Result<bool, StoreError> {
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM players WHERE user_id = $1)")
            .bind(user_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| StoreError::Database(e.to_string()))
    }

    async fn create(&self, character: &Character) -> Result<(), StoreError> {
        let result = sqlx::query(
            "INSERT INTO players
                (user_id, class, level, experience, health, max_health, mana, max_mana,
                 attack, defense, crit_chance, dodge_chance, crit_damage, gold,
                 inventory, equipment, cooldowns,
                 kills, battles_won, battles_lost, damage_dealt, total_experience,
                 achievements, quest_progress)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14,
                     $15, $16, $17, $18, $19, $20, $21, $22, $23, $24)
             ON CONFLICT (user_id) DO NOTHING",
        )
        .bind(character.user_id)
        .bind(character.class.id())
        .bind(character.level as i32)
        .bind(character.experience as i64)
        .bind(character.health as i32)
        .bind(character.max_health as i32)
        .bind(character.mana as i32)
        .bind(character.max_mana as i32)
        .bind(character.attack as i32)
        .bind(character.defense as i32)
        .bind(character.crit_chance)
        .bind(character.dodge_chance)
        .bind(character.crit_damage)
        .bind(character.gold as i64)
        .bind(Self::encode("inventory", &character.inventory)?)
        .bind(Self::encode("equipment", &character.equipment)?)
        .bind(Self::encode("cooldowns", &character.cooldowns)?)
        .bind(character.counters.kills as i64)
        .bind(character.counters.battles_won as i64)
        .bind(character.counters.battles_lost as i64)
        .bind(character.counters.damage_dealt as i64)
        .bind(character.counters.total_experience as i64)
        .bind(Self::encode("achievements", &character.achievements)?)
        .bind(Self::encode("quest_progress", &character.quest_progress)?)
        .execute(&self.pool)
        .await
        .map_err(|e| StoreError::Database(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(StoreError::AlreadyExists);
        }
        Ok(())
    }

    async fn load(&self, user_id: i64) -> Result<Option<Character>, StoreError> {
        let row = sqlx::query("SELECT * FROM players WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| StoreError::Database(e.to_string()))?;

        row.map(|r| Self::row_to_character(&r)).transpose()
    }

    async fn save(&self, character: &Character) -> Result<(), StoreError> {
        sqlx::query(
            "UPDATE players SET
                class = $2, level = $3, experience = $4,
                health = $5, max_health = $6, mana = $7, max_mana = $8,
                attack = $9, defense = $10,
                crit_chance = $11, dodge_chance = $12, crit_damage = $13,
                gold = $14, inventory = $15, equipment = $16, cooldowns = $17,
                kills = $18, battles_won = $19, battles_lost = $20,
                damage_dealt = $21, total_experience = $22,
                achievements = $23, quest_progress = $24,
                updated_at = NOW()
             WHERE user_id = $1",
        )
        .bind(character.user_id)
        .bind(character.class.id())
        .bind(character.level as i32)
        .bind(character.experience as i64)
        .bind(character.health as i32)
        .bind(character.max_health as i32)
        .bind(character.mana as i32)
        .bind(character.max_mana as i32)
        .bind(character.attack as i32)
        .bind(character.defense as i32)
        .bind(character.crit_chance)
        .bind(character.dodge_chance)
        .bind(character.crit_damage)
        .bind(character.gold as i64)
        .bind(Self::encode("inventory", &character.inventory)?)
        .bind(Self::encode("equipment", &character.equipment)?)
        .bind(Self::encode("cooldowns", &character.cooldowns)?)
        .bind(character.counters.kills as i64)
        .bind(character.counters.battles_won as i64)
        .bind(character.counters.battles_lost as i64)
        .bind(character.counters.damage_dealt as i64)
        .bind(character.counters.total_experience as i64)
        .bind(Self::encode("achievements", &character.achievements)?)
        .bind(Self::encode("quest_progress", &character.quest_progress)?)
        .execute(&self.pool)
        .await
        .map_err(|e| StoreError::Database(e.to_string()))?;

        Ok(())
    }

    async fn top_n(&self, n: usize) -> Result<Vec<LeaderboardEntry>, StoreError> {
        let rows = sqlx::query(
            "SELECT user_id, class, level, total_experience, kills
             FROM players
             ORDER BY level DESC, total_experience DESC
             LIMIT $1",
        )
        .bind(n as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StoreError::Database(e.to_string()))?;

        Ok(rows
            .iter()
            .map(|r| LeaderboardEntry {
                user_id: r.get("user_id"),
                class_id: r.get("class"),
                level: r.get::<i32, _>("level") as u32,
                total_experience: r.get::<i64, _>("total_experience") as u64,
                kills: r.get::<i64, _>("kills") as u64,
            })
            .collect())
    }
}
