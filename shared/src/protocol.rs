//! Wire protocol between the web front end and the game server.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::classes::ClassDefinition;
use crate::enemies::EnemyDefinition;
use crate::items::{ItemCategory, ItemDefinition};
use crate::quests::QuestProgress;

/// Protocol version for compatibility checking
pub const PROTOCOL_VERSION: u32 = 1;

/// Default server port
pub const DEFAULT_PORT: u16 = 7878;

/// Default number of entries returned by the leaderboard
pub const DEFAULT_LEADERBOARD_SIZE: usize = 10;

// =============================================================================
// Client -> Server Requests
// =============================================================================

/// Requests sent from the front end to the server
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Request {
    /// Full class table
    ListClasses,

    /// Create a character for a user. Fails with 409 if one already exists.
    CreatePlayer { user_id: i64, class_id: String },

    /// Fetch a character with equipment bonuses applied for display
    GetPlayer { user_id: i64 },

    /// Item catalog, optionally filtered by category
    ListItems { category: Option<ItemCategory> },

    /// Enemy catalog
    ListEnemies,

    /// Buy an item from the shop
    BuyItem { user_id: i64, item_id: String },

    /// Equip an owned item; the slot is inferred from the item
    EquipItem { user_id: i64, item_id: String },

    /// Resolve one attack. `skill_id` of `None` with `is_skill` set uses the
    /// class's first skill. `enemy_id` supplies the defender for mitigation.
    Attack {
        user_id: i64,
        is_skill: bool,
        skill_id: Option<String>,
        enemy_id: Option<String>,
    },

    /// Report a finished battle and collect rewards
    BattleEnd {
        user_id: i64,
        enemy_id: String,
        won: bool,
        gold: u64,
        experience: u64,
        damage_dealt: u64,
        damage_taken: u64,
    },

    /// Top characters by level, then total experience
    Leaderboard,
}

// =============================================================================
// Server -> Client Responses
// =============================================================================

/// Responses sent from the server to the front end
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Response {
    Classes(Vec<ClassDefinition>),

    Items(Vec<ItemDefinition>),

    Enemies(Vec<EnemyDefinition>),

    /// Character snapshot (creation, lookup, shop operations)
    Player(CharacterView),

    /// Outcome of a single attack
    AttackResult {
        damage: u32,
        is_crit: bool,
        dodged: bool,
        remaining_mana: u32,
        /// Health restored by a skill's heal effect
        healed: u32,
        /// Defense bonus granted by a skill for the rest of the battle
        defense_bonus: u32,
    },

    /// Progression events from a finished battle
    BattleResults {
        leveled_up: bool,
        level: u32,
        unlocked_achievements: Vec<String>,
        completed_quests: Vec<String>,
        character: CharacterView,
    },

    Leaderboard(Vec<LeaderboardEntry>),

    /// Any failure, with an HTTP-shaped status code
    Error { code: u16, message: String },
}

// =============================================================================
// View Types
// =============================================================================

/// Character as shown to the client. Attack/defense/crit/dodge already
/// include equipment bonuses; the stored base stats stay server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterView {
    pub user_id: i64,
    pub class_id: String,
    pub class_name: String,
    pub level: u32,
    pub experience: u64,
    pub health: u32,
    pub max_health: u32,
    pub mana: u32,
    pub max_mana: u32,
    pub attack: u32,
    pub defense: u32,
    pub crit_chance: f32,
    pub dodge_chance: f32,
    pub gold: u64,
    /// item id -> owned count
    pub inventory: HashMap<String, u32>,
    /// slot name -> equipped item id
    pub equipment: HashMap<String, String>,
    /// skill id -> cooldown expiry (unix seconds)
    pub cooldowns: HashMap<String, i64>,
    pub kills: u64,
    pub battles_won: u64,
    pub battles_lost: u64,
    pub damage_dealt: u64,
    pub total_experience: u64,
    pub achievements: Vec<String>,
    pub quest_progress: HashMap<String, QuestProgress>,
}

/// Leaderboard row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub user_id: i64,
    pub class_id: String,
    pub level: u32,
    pub total_experience: u64,
    pub kills: u64,
}

// =============================================================================
// Serialization helpers
// =============================================================================

impl Request {
    pub fn serialize(&self) -> Vec<u8> {
        bincode::serialize(self).expect("Failed to serialize Request")
    }

    pub fn deserialize(data: &[u8]) -> Result<Self, bincode::Error> {
        bincode::deserialize(data)
    }
}

impl Response {
    pub fn serialize(&self) -> Vec<u8> {
        bincode::serialize(self).expect("Failed to serialize Response")
    }

    pub fn deserialize(data: &[u8]) -> Result<Self, bincode::Error> {
        bincode::deserialize(data)
    }
}
