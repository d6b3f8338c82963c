//! Achievement and daily quest definitions.

use serde::{Deserialize, Serialize};

// =============================================================================
// Achievements
// =============================================================================

/// Predicate an achievement unlocks on. Evaluated against the character's
/// cumulative counters after every battle; unlocks at most once.
#[derive(Debug, Clone, Copy)]
pub enum AchievementCondition {
    TotalKills(u64),
    BattlesWon(u64),
    GoldHeld(u64),
    LevelReached(u32),
}

/// Achievement definition
#[derive(Debug, Clone, Copy)]
pub struct AchievementDef {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub condition: AchievementCondition,
}

/// All achievement definitions in display order.
pub const ACHIEVEMENTS: &[AchievementDef] = &[
    AchievementDef {
        id: "first_blood",
        name: "First Blood",
        description: "Defeat your first enemy",
        condition: AchievementCondition::TotalKills(1),
    },
    AchievementDef {
        id: "slayer_i",
        name: "Slayer I",
        description: "Defeat 25 enemies",
        condition: AchievementCondition::TotalKills(25),
    },
    AchievementDef {
        id: "slayer_ii",
        name: "Slayer II",
        description: "Defeat 100 enemies",
        condition: AchievementCondition::TotalKills(100),
    },
    AchievementDef {
        id: "veteran",
        name: "Veteran",
        description: "Win 50 battles",
        condition: AchievementCondition::BattlesWon(50),
    },
    AchievementDef {
        id: "hoarder",
        name: "Hoarder",
        description: "Hold 1,000 gold",
        condition: AchievementCondition::GoldHeld(1_000),
    },
    AchievementDef {
        id: "dragons_hoard",
        name: "Dragon's Hoard",
        description: "Hold 10,000 gold",
        condition: AchievementCondition::GoldHeld(10_000),
    },
    AchievementDef {
        id: "adventurer",
        name: "Adventurer",
        description: "Reach level 5",
        condition: AchievementCondition::LevelReached(5),
    },
    AchievementDef {
        id: "hero",
        name: "Hero",
        description: "Reach level 10",
        condition: AchievementCondition::LevelReached(10),
    },
    AchievementDef {
        id: "legend",
        name: "Legend",
        description: "Reach level 20",
        condition: AchievementCondition::LevelReached(20),
    },
];

// =============================================================================
// Daily Quests
// =============================================================================

/// Metric a daily quest counts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestMetric {
    Kills,
    GoldEarned,
    ExperienceGained,
}

/// Daily quest definition. Reset cadence is handled by an external
/// scheduler; the engine only accumulates progress and pays the reward.
#[derive(Debug, Clone, Copy)]
pub struct QuestDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub metric: QuestMetric,
    pub target: u64,
    pub reward_gold: u64,
}

/// All daily quest definitions.
pub const DAILY_QUESTS: &[QuestDefinition] = &[
    QuestDefinition {
        id: "daily_kills",
        name: "Monster Hunter",
        metric: QuestMetric::Kills,
        target: 10,
        reward_gold: 100,
    },
    QuestDefinition {
        id: "daily_gold",
        name: "Coin Collector",
        metric: QuestMetric::GoldEarned,
        target: 500,
        reward_gold: 150,
    },
    QuestDefinition {
        id: "daily_exp",
        name: "Seasoned Fighter",
        metric: QuestMetric::ExperienceGained,
        target: 300,
        reward_gold: 120,
    },
];

/// Per-quest progress stored on the character
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct QuestProgress {
    pub progress: u64,
    pub completed: bool,
}
