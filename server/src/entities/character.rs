//! Server-side character state.

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use runequest_shared::{CharacterClass, ClassDefinition, EquipSlot, QuestProgress, SkillDefinition};

/// Cumulative lifetime counters
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct BattleCounters {
    pub kills: u64,
    pub battles_won: u64,
    pub battles_lost: u64,
    pub damage_dealt: u64,
    pub total_experience: u64,
}

/// The mutable per-player record. Created once per user id, loaded and
/// saved around every combat or shop action.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Character {
    pub user_id: i64,
    pub class: CharacterClass,
    pub level: u32,
    /// Experience toward the next level; resets on level-up
    pub experience: u64,
    pub health: u32,
    pub max_health: u32,
    pub mana: u32,
    pub max_mana: u32,
    pub attack: u32,
    pub defense: u32,
    /// Crit chance in percent
    pub crit_chance: f32,
    /// Dodge chance in percent
    pub dodge_chance: f32,
    /// Damage multiplier on a critical hit
    pub crit_damage: f32,
    pub gold: u64,
    /// item id -> owned count
    pub inventory: HashMap<String, u32>,
    /// slot -> equipped item id (at most one item per slot)
    pub equipment: HashMap<EquipSlot, String>,
    /// skill id -> cooldown expiry as a unix timestamp in seconds
    pub cooldowns: HashMap<String, i64>,
    pub counters: BattleCounters,
    pub achievements: BTreeSet<String>,
    pub quest_progress: HashMap<String, QuestProgress>,
}

impl Character {
    /// Create a fresh character from its class definition. Health and mana
    /// start at their maximums, gold at the class's starting amount.
    pub fn new(user_id: i64, class_def: &ClassDefinition) -> Self {
        Self {
            user_id,
            class: class_def.class,
            level: 1,
            experience: 0,
            health: class_def.health,
            max_health: class_def.health,
            mana: class_def.mana,
            max_mana: class_def.mana,
            attack: class_def.attack,
            defense: class_def.defense,
            crit_chance: class_def.crit_chance,
            dodge_chance: class_def.dodge_chance,
            crit_damage: class_def.crit_damage,
            gold: class_def.starting_gold,
            inventory: HashMap::new(),
            equipment: HashMap::new(),
            cooldowns: HashMap::new(),
            counters: BattleCounters::default(),
            achievements: BTreeSet::new(),
            quest_progress: HashMap::new(),
        }
    }

    /// Restore health, capped at the maximum
    pub fn heal(&mut self, amount: u32) -> u32 {
        let healed = (self.max_health - self.health).min(amount);
        self.health += healed;
        healed
    }

    /// Restore mana, capped at the maximum
    pub fn restore_mana(&mut self, amount: u32) {
        self.mana = (self.mana + amount).min(self.max_mana);
    }

    /// Seconds until the skill is ready again, zero if ready now
    pub fn cooldown_remaining(&self, skill_id: &str, now: i64) -> u64 {
        let expiry = self.cooldowns.get(skill_id).copied().unwrap_or(0);
        (expiry - now).max(0) as u64
    }

    /// Spend the skill's mana and start its cooldown.
    ///
    /// The transition only happens when the skill is off cooldown and the
    /// mana cost is covered; on failure nothing is mutated.
    pub fn use_skill(&mut self, skill: &SkillDefinition, now: i64) -> Result<(), SkillError> {
        let remaining = self.cooldown_remaining(&skill.id, now);
        if remaining > 0 {
            return Err(SkillError::OnCooldown(remaining));
        }
        if self.mana < skill.mana_cost {
            return Err(SkillError::InsufficientMana);
        }

        self.mana -= skill.mana_cost;
        self.cooldowns
            .insert(skill.id.clone(), now + skill.cooldown_secs as i64);
        Ok(())
    }
}

/// Skill usage errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillError {
    /// Skill is on cooldown for this many more seconds
    OnCooldown(u64),
    InsufficientMana,
}

impl std::fmt::Display for SkillError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OnCooldown(secs) => write!(f, "Skill on cooldown: {}s", secs),
            Self::InsufficientMana => write!(f, "Not enough mana"),
        }
    }
}

impl std::error::Error for SkillError {}

#[cfg(test)]
mod tests {
    use super::*;
    use runequest_shared::{get_class_definition, get_class_definitions};

    fn class_def(class: CharacterClass) -> ClassDefinition {
        get_class_definition(class)
    }

    #[test]
    fn test_new_character_starts_at_full_stats() {
        for def in get_class_definitions() {
            let character = Character::new(1, &def);
            assert_eq!(character.health, character.max_health);
            assert_eq!(character.mana, character.max_mana);
            assert_eq!(character.health, def.health);
            assert_eq!(character.mana, def.mana);
            assert_eq!(character.gold, def.starting_gold);
            assert_eq!(character.level, 1);
            assert_eq!(character.experience, 0);
        }
    }

    #[test]
    fn test_use_skill_spends_mana_and_starts_cooldown() {
        let def = class_def(CharacterClass::Warrior);
        let skill = def.skills[0].clone();
        let mut character = Character::new(1, &def);

        let now = 1_000;
        character.use_skill(&skill, now).unwrap();

        assert_eq!(character.mana, def.mana - skill.mana_cost);
        assert_eq!(
            character.cooldowns[&skill.id],
            now + skill.cooldown_secs as i64
        );
    }

    #[test]
    fn test_skill_on_cooldown_fails_without_mutation() {
        let def = class_def(CharacterClass::Warrior);
        let skill = def.skills[0].clone();
        let mut character = Character::new(1, &def);

        let now = 1_000;
        character.use_skill(&skill, now).unwrap();
        let mana_after_first = character.mana;

        // Immediate re-use must fail and must not deduct mana twice
        let err = character.use_skill(&skill, now + 1).unwrap_err();
        assert_eq!(err, SkillError::OnCooldown(skill.cooldown_secs as u64 - 1));
        assert_eq!(character.mana, mana_after_first);

        // Once the cooldown has lapsed the skill is usable again
        let later = now + skill.cooldown_secs as i64;
        character.use_skill(&skill, later).unwrap();
    }

    #[test]
    fn test_insufficient_mana_fails_without_mutation() {
        let def = class_def(CharacterClass::Mage);
        let skill = def.skills[0].clone();
        let mut character = Character::new(1, &def);
        character.mana = skill.mana_cost - 1;

        let err = character.use_skill(&skill, 0).unwrap_err();
        assert_eq!(err, SkillError::InsufficientMana);
        assert_eq!(character.mana, skill.mana_cost - 1);
        assert!(character.cooldowns.is_empty());
    }

    #[test]
    fn test_heal_caps_at_max_health() {
        let def = class_def(CharacterClass::Rogue);
        let mut character = Character::new(1, &def);
        character.health = character.max_health - 10;

        assert_eq!(character.heal(50), 10);
        assert_eq!(character.health, character.max_health);
    }
}
