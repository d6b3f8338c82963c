//! Effective stat aggregation.
//!
//! Equipment bonuses are recomputed from the catalog on every action; the
//! character's stored base stats are never incremented by this step.

use log::debug;

use runequest_shared::EnemyDefinition;

use crate::catalog::Catalog;
use crate::entities::Character;

/// Stat snapshot used for a single combat or display operation
#[derive(Debug, Clone, Copy)]
pub struct EffectiveStats {
    pub attack: u32,
    pub defense: u32,
    /// Crit chance in percent
    pub crit_chance: f32,
    /// Dodge chance in percent
    pub dodge_chance: f32,
    /// Damage multiplier on a critical hit
    pub crit_damage: f32,
    /// Mana restored at the end of each battle
    pub mana_regen: u32,
    /// Fraction added to battle gold rewards
    pub gold_boost: f32,
}

impl Default for EffectiveStats {
    fn default() -> Self {
        Self {
            attack: 0,
            defense: 0,
            crit_chance: 0.0,
            dodge_chance: 0.0,
            crit_damage: 1.0,
            mana_regen: 0,
            gold_boost: 0.0,
        }
    }
}

impl EffectiveStats {
    /// Combat snapshot of a static enemy: no crit, no dodge
    pub fn from_enemy(enemy: &EnemyDefinition) -> Self {
        Self {
            attack: enemy.damage,
            defense: enemy.defense,
            ..Default::default()
        }
    }
}

/// Fold the bonuses of every equipped item into the character's base stats.
///
/// Equipment referencing an unknown item id is a data-integrity issue, not
/// a user error: the bonus is skipped and the rest still applies.
pub fn apply_bonuses(character: &Character, catalog: &Catalog) -> EffectiveStats {
    let mut stats = EffectiveStats {
        attack: character.attack,
        defense: character.defense,
        crit_chance: character.crit_chance,
        dodge_chance: character.dodge_chance,
        crit_damage: character.crit_damage,
        mana_regen: 0,
        gold_boost: 0.0,
    };

    for (slot, item_id) in &character.equipment {
        let Some(item) = catalog.find_item(item_id) else {
            debug!(
                "User {}: equipped item '{}' in slot {} no longer exists, skipping",
                character.user_id,
                item_id,
                slot.as_str()
            );
            continue;
        };

        stats.attack += item.bonuses.attack;
        stats.defense += item.bonuses.defense;
        stats.crit_chance += item.bonuses.crit_chance;
        stats.dodge_chance += item.bonuses.dodge_chance;
        stats.mana_regen += item.bonuses.mana_regen;
        stats.gold_boost += item.bonuses.gold_boost;
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use runequest_shared::{get_class_definition, CharacterClass, EquipSlot};

    fn warrior() -> Character {
        Character::new(1, &get_class_definition(CharacterClass::Warrior))
    }

    #[test]
    fn test_bonuses_accumulate_without_touching_base_stats() {
        let catalog = Catalog::load();
        let mut character = warrior();
        character
            .equipment
            .insert(EquipSlot::Weapon, "great_sword".into());
        character
            .equipment
            .insert(EquipSlot::Armor, "steel_armor".into());

        let base_attack = character.attack;
        let base_defense = character.defense;

        let stats = apply_bonuses(&character, &catalog);
        assert_eq!(stats.attack, base_attack + 8);
        assert_eq!(stats.defense, base_defense + 10);

        // Recomputed, never baked in
        assert_eq!(character.attack, base_attack);
        assert_eq!(character.defense, base_defense);

        let again = apply_bonuses(&character, &catalog);
        assert_eq!(again.attack, stats.attack);
    }

    #[test]
    fn test_unknown_equipped_item_is_skipped() {
        let catalog = Catalog::load();
        let mut character = warrior();
        character
            .equipment
            .insert(EquipSlot::Weapon, "retired_item".into());
        character
            .equipment
            .insert(EquipSlot::Armor, "steel_armor".into());

        let stats = apply_bonuses(&character, &catalog);
        assert_eq!(stats.attack, character.attack);
        assert_eq!(stats.defense, character.defense + 10);
    }

    #[test]
    fn test_enemy_snapshot_has_no_crit_or_dodge() {
        let catalog = Catalog::load();
        let dragon = catalog.get_enemy("dragon").unwrap();

        let stats = EffectiveStats::from_enemy(dragon);
        assert_eq!(stats.attack, dragon.damage);
        assert_eq!(stats.defense, dragon.defense);
        assert_eq!(stats.crit_chance, 0.0);
        assert_eq!(stats.dodge_chance, 0.0);
    }
}
