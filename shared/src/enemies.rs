//! Enemy definitions shared between front end and server.

use serde::{Deserialize, Serialize};

/// Enemy definition: static stats plus battle rewards
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyDefinition {
    pub id: String,
    pub name: String,
    pub health: u32,
    /// Base damage per hit
    pub damage: u32,
    pub defense: u32,
    pub gold_reward: u64,
    pub experience_reward: u64,
    /// Rough difficulty tier (1 = starter, 5 = endgame)
    pub tier: u32,
}

/// Get all enemy definitions
pub fn get_enemy_definitions() -> Vec<EnemyDefinition> {
    vec![
        EnemyDefinition {
            id: "goblin".into(),
            name: "Goblin".into(),
            health: 30,
            damage: 8,
            defense: 1,
            gold_reward: 50,
            experience_reward: 30,
            tier: 1,
        },
        EnemyDefinition {
            id: "skeleton".into(),
            name: "Skeleton".into(),
            health: 35,
            damage: 10,
            defense: 2,
            gold_reward: 75,
            experience_reward: 45,
            tier: 1,
        },
        EnemyDefinition {
            id: "orc".into(),
            name: "Orc".into(),
            health: 50,
            damage: 14,
            defense: 3,
            gold_reward: 100,
            experience_reward: 60,
            tier: 2,
        },
        EnemyDefinition {
            id: "witch".into(),
            name: "Witch".into(),
            health: 45,
            damage: 20,
            defense: 2,
            gold_reward: 120,
            experience_reward: 70,
            tier: 2,
        },
        EnemyDefinition {
            id: "vampire".into(),
            name: "Vampire".into(),
            health: 60,
            damage: 16,
            defense: 4,
            gold_reward: 130,
            experience_reward: 75,
            tier: 3,
        },
        EnemyDefinition {
            id: "werewolf".into(),
            name: "Werewolf".into(),
            health: 65,
            damage: 19,
            defense: 4,
            gold_reward: 140,
            experience_reward: 80,
            tier: 3,
        },
        EnemyDefinition {
            id: "troll".into(),
            name: "Troll".into(),
            health: 70,
            damage: 18,
            defense: 5,
            gold_reward: 150,
            experience_reward: 85,
            tier: 3,
        },
        EnemyDefinition {
            id: "dragon".into(),
            name: "Dragon".into(),
            health: 150,
            damage: 30,
            defense: 10,
            gold_reward: 500,
            experience_reward: 300,
            tier: 5,
        },
    ]
}
