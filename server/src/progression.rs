//! Experience, level-ups, achievements and daily quests.

use log::info;

use runequest_shared::{AchievementCondition, QuestMetric, ACHIEVEMENTS, DAILY_QUESTS};

use crate::entities::Character;
use crate::stats::EffectiveStats;

/// Experience required for the next level is `LEVEL_UP_EXP_BASE * level`
pub const LEVEL_UP_EXP_BASE: u64 = 150;

/// Stat growth multiplier per level, truncated to integer
pub const LEVEL_GROWTH_FACTOR: f32 = 1.1;

/// What the battle produced, as reported by the battle session
#[derive(Debug, Clone, Copy)]
pub struct BattleOutcome {
    pub won: bool,
    pub gold: u64,
    pub experience: u64,
    pub kills: u64,
    pub damage_dealt: u64,
}

/// Progression events triggered by a finished battle
#[derive(Debug, Clone, Default)]
pub struct BattleSummary {
    pub leveled_up: bool,
    pub levels_gained: u32,
    pub unlocked_achievements: Vec<String>,
    pub completed_quests: Vec<String>,
}

/// Experience needed to advance from the given level
pub fn required_experience(level: u32) -> u64 {
    LEVEL_UP_EXP_BASE * level as u64
}

/// Apply a battle's rewards and counters, then run level-up, achievement
/// and quest evaluation.
///
/// Battles are atomic sessions: health is restored to max at battle end
/// regardless of outcome, and equipped mana-regen kicks in here.
pub fn award_battle_result(
    character: &mut Character,
    outcome: &BattleOutcome,
    effective: &EffectiveStats,
) -> BattleSummary {
    let mut summary = BattleSummary::default();

    if outcome.won {
        let gold_gain = (outcome.gold as f32 * (1.0 + effective.gold_boost)) as u64;
        character.gold += gold_gain;
        character.experience += outcome.experience;
        character.counters.total_experience += outcome.experience;
        character.counters.kills += outcome.kills;
        character.counters.damage_dealt += outcome.damage_dealt;
        character.counters.battles_won += 1;

        summary.completed_quests =
            update_quests(character, outcome.kills, gold_gain, outcome.experience);
    } else {
        character.counters.battles_lost += 1;
    }

    summary.levels_gained = apply_level_ups(character);
    summary.leveled_up = summary.levels_gained > 0;

    character.health = character.max_health;
    character.restore_mana(effective.mana_regen);

    summary.unlocked_achievements = evaluate_achievements(character);

    summary
}

/// Run the repeatable level-up check. A single battle's experience gain
/// may cross multiple thresholds.
fn apply_level_ups(character: &mut Character) -> u32 {
    let mut gained = 0;
    let mut required = required_experience(character.level);

    while character.experience >= required {
        character.experience -= required;
        character.level += 1;

        character.max_health = scale(character.max_health);
        character.max_mana = scale(character.max_mana);
        character.attack = scale(character.attack);
        character.defense = scale(character.defense);

        // Level-up fully restores the character
        character.health = character.max_health;
        character.mana = character.max_mana;

        gained += 1;
        required = required_experience(character.level);
    }

    if gained > 0 {
        info!(
            "User {} reached level {}",
            character.user_id, character.level
        );
    }
    gained
}

fn scale(stat: u32) -> u32 {
    (stat as f32 * LEVEL_GROWTH_FACTOR) as u32
}

/// Evaluate the achievement table against the character's counters.
/// Each achievement unlocks at most once; re-checking is a no-op.
fn evaluate_achievements(character: &mut Character) -> Vec<String> {
    let mut unlocked = Vec::new();

    for def in ACHIEVEMENTS {
        if character.achievements.contains(def.id) {
            continue;
        }
        let met = match def.condition {
            AchievementCondition::TotalKills(n) => character.counters.kills >= n,
            AchievementCondition::BattlesWon(n) => character.counters.battles_won >= n,
            AchievementCondition::GoldHeld(n) => character.gold >= n,
            AchievementCondition::LevelReached(n) => character.level >= n,
        };
        if met {
            character.achievements.insert(def.id.to_string());
            unlocked.push(def.id.to_string());
        }
    }

    unlocked
}

/// Accumulate daily quest metrics. Crossing a quest's target completes it
/// exactly once and pays its gold reward exactly once.
fn update_quests(character: &mut Character, kills: u64, gold: u64, experience: u64) -> Vec<String> {
    let mut completed = Vec::new();

    for quest in DAILY_QUESTS {
        let delta = match quest.metric {
            QuestMetric::Kills => kills,
            QuestMetric::GoldEarned => gold,
            QuestMetric::ExperienceGained => experience,
        };
        if delta == 0 {
            continue;
        }

        let entry = character
            .quest_progress
            .entry(quest.id.to_string())
            .or_default();
        if entry.completed {
            continue;
        }

        entry.progress += delta;
        if entry.progress >= quest.target {
            entry.completed = true;
            character.gold += quest.reward_gold;
            completed.push(quest.id.to_string());
        }
    }

    completed
}

#[cfg(test)]
mod tests {
    use super::*;
    use runequest_shared::{get_class_definition, CharacterClass};

    fn character_of(class: CharacterClass) -> Character {
        Character::new(1, &get_class_definition(class))
    }

    fn win(gold: u64, experience: u64) -> BattleOutcome {
        BattleOutcome {
            won: true,
            gold,
            experience,
            kills: 1,
            damage_dealt: 40,
        }
    }

    #[test]
    fn test_level_up_at_exact_threshold() {
        let mut character = character_of(CharacterClass::Warrior);

        // One short of the threshold: nothing happens
        let summary = award_battle_result(
            &mut character,
            &win(0, required_experience(1) - 1),
            &EffectiveStats::default(),
        );
        assert!(!summary.leveled_up);
        assert_eq!(character.level, 1);
        assert_eq!(character.experience, required_experience(1) - 1);

        // The final point tips it over, with experience reset to zero
        let summary =
            award_battle_result(&mut character, &win(0, 1), &EffectiveStats::default());
        assert!(summary.leveled_up);
        assert_eq!(character.level, 2);
        assert_eq!(character.experience, 0);
    }

    #[test]
    fn test_single_battle_can_cross_multiple_thresholds() {
        let mut character = character_of(CharacterClass::Warrior);

        // 150 + 300 + 50 spare: two level-ups out of one battle
        let summary =
            award_battle_result(&mut character, &win(0, 500), &EffectiveStats::default());
        assert_eq!(summary.levels_gained, 2);
        assert_eq!(character.level, 3);
        assert_eq!(character.experience, 50);
    }

    #[test]
    fn test_stat_growth_truncates_per_level() {
        let mut character = character_of(CharacterClass::Rogue);
        assert_eq!(character.attack, 24);

        // 150 + 300 + 450: exactly three level-ups
        award_battle_result(&mut character, &win(0, 900), &EffectiveStats::default());
        assert_eq!(character.level, 4);
        // 24 -> 26 -> 28 -> 30
        assert_eq!(character.attack, 30);
    }

    #[test]
    fn test_level_up_restores_health_and_mana_to_new_max() {
        let mut character = character_of(CharacterClass::Mage);
        character.health = 1;
        character.mana = 0;
        let old_max_health = character.max_health;

        award_battle_result(&mut character, &win(0, 150), &EffectiveStats::default());
        assert!(character.max_health > old_max_health);
        assert_eq!(character.health, character.max_health);
        assert_eq!(character.mana, character.max_mana);
    }

    #[test]
    fn test_loss_only_counts_the_loss() {
        let mut character = character_of(CharacterClass::Warrior);
        let gold_before = character.gold;
        character.health = 10;

        let summary = award_battle_result(
            &mut character,
            &BattleOutcome {
                won: false,
                gold: 100,
                experience: 100,
                kills: 0,
                damage_dealt: 30,
            },
            &EffectiveStats::default(),
        );

        assert_eq!(character.counters.battles_lost, 1);
        assert_eq!(character.counters.battles_won, 0);
        assert_eq!(character.counters.damage_dealt, 0);
        assert_eq!(character.gold, gold_before);
        assert_eq!(character.experience, 0);
        assert!(summary.completed_quests.is_empty());
        // Health still restored: no persistent wounds between battles
        assert_eq!(character.health, character.max_health);
    }

    #[test]
    fn test_first_kill_achievement_unlocks_exactly_once() {
        let mut character = character_of(CharacterClass::Warrior);

        let summary =
            award_battle_result(&mut character, &win(10, 10), &EffectiveStats::default());
        assert!(summary
            .unlocked_achievements
            .contains(&"first_blood".to_string()));

        let summary =
            award_battle_result(&mut character, &win(10, 10), &EffectiveStats::default());
        assert!(!summary
            .unlocked_achievements
            .contains(&"first_blood".to_string()));
        assert_eq!(
            character.achievements.iter().filter(|a| *a == "first_blood").count(),
            1
        );
    }

    #[test]
    fn test_quest_reward_paid_exactly_once() {
        let mut character = character_of(CharacterClass::Warrior);
        let quest = DAILY_QUESTS
            .iter()
            .find(|q| q.id == "daily_exp")
            .unwrap();

        let gold_before = character.gold;
        let summary = award_battle_result(
            &mut character,
            &win(0, quest.target),
            &EffectiveStats::default(),
        );
        assert!(summary.completed_quests.contains(&quest.id.to_string()));
        assert_eq!(character.gold, gold_before + quest.reward_gold);

        // Further progress neither re-completes nor re-pays
        let gold_after = character.gold;
        let summary = award_battle_result(
            &mut character,
            &win(0, quest.target),
            &EffectiveStats::default(),
        );
        assert!(summary.completed_quests.is_empty());
        assert_eq!(character.gold, gold_after);
    }

    #[test]
    fn test_gold_boost_scales_battle_gold() {
        let mut character = character_of(CharacterClass::Warrior);
        let gold_before = character.gold;
        let stats = EffectiveStats {
            gold_boost: 0.1,
            ..Default::default()
        };

        award_battle_result(&mut character, &win(100, 0), &stats);
        assert_eq!(character.gold, gold_before + 110);
    }

    #[test]
    fn test_mana_regen_applies_at_battle_end() {
        let mut character = character_of(CharacterClass::Warrior);
        character.mana = 0;
        let stats = EffectiveStats {
            mana_regen: 5,
            ..Default::default()
        };

        award_battle_result(&mut character, &win(10, 10), &stats);
        assert_eq!(character.mana, 5);
    }
}
