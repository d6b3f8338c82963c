//! Character class and skill definitions shared between front end and server.

use serde::{Deserialize, Serialize};

// =============================================================================
// Class Types
// =============================================================================

/// Character class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CharacterClass {
    Warrior,
    Mage,
    Rogue,
    Paladin,
    Archer,
}

impl CharacterClass {
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "warrior" => Some(Self::Warrior),
            "mage" => Some(Self::Mage),
            "rogue" => Some(Self::Rogue),
            "paladin" => Some(Self::Paladin),
            "archer" => Some(Self::Archer),
            _ => None,
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            Self::Warrior => "warrior",
            Self::Mage => "mage",
            Self::Rogue => "rogue",
            Self::Paladin => "paladin",
            Self::Archer => "archer",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Warrior => "Warrior",
            Self::Mage => "Mage",
            Self::Rogue => "Rogue",
            Self::Paladin => "Paladin",
            Self::Archer => "Archer",
        }
    }
}

/// Secondary effects a skill can carry in addition to its damage multiplier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum SkillEffect {
    /// Flat defense bonus for the rest of the battle session
    DefenseBoost(u32),
    /// Immediate heal on the caster
    Heal(u32),
    /// Extra hits resolved on top of the primary hit
    BonusHits(u32),
    /// Fraction of the defender's mitigation ignored (0.0 - 1.0)
    ArmorPierce(f32),
    /// Added crit chance (percentage points) for this attack
    CritBoost(f32),
}

/// Skill definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillDefinition {
    /// Unique skill ID
    pub id: String,
    /// Display name
    pub name: String,
    /// Cooldown in seconds
    pub cooldown_secs: u32,
    /// Mana cost to use
    pub mana_cost: u32,
    /// Multiplier applied to base damage
    pub damage_multiplier: f32,
    /// Secondary effects applied when the skill is used
    pub effects: Vec<SkillEffect>,
}

impl SkillDefinition {
    pub fn bonus_hits(&self) -> u32 {
        self.effects
            .iter()
            .find_map(|e| match e {
                SkillEffect::BonusHits(n) => Some(*n),
                _ => None,
            })
            .unwrap_or(0)
    }

    pub fn armor_pierce(&self) -> f32 {
        self.effects
            .iter()
            .find_map(|e| match e {
                SkillEffect::ArmorPierce(f) => Some(*f),
                _ => None,
            })
            .unwrap_or(0.0)
    }

    pub fn crit_boost(&self) -> f32 {
        self.effects
            .iter()
            .find_map(|e| match e {
                SkillEffect::CritBoost(c) => Some(*c),
                _ => None,
            })
            .unwrap_or(0.0)
    }

    pub fn heal(&self) -> u32 {
        self.effects
            .iter()
            .find_map(|e| match e {
                SkillEffect::Heal(h) => Some(*h),
                _ => None,
            })
            .unwrap_or(0)
    }

    pub fn defense_boost(&self) -> u32 {
        self.effects
            .iter()
            .find_map(|e| match e {
                SkillEffect::DefenseBoost(d) => Some(*d),
                _ => None,
            })
            .unwrap_or(0)
    }
}

/// Class definition: starting stats plus the attached skill set
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassDefinition {
    pub class: CharacterClass,
    pub name: String,
    pub description: String,
    pub health: u32,
    pub mana: u32,
    pub attack: u32,
    pub defense: u32,
    /// Crit chance in percent (0 - 100)
    pub crit_chance: f32,
    /// Dodge chance in percent (0 - 100)
    pub dodge_chance: f32,
    /// Damage multiplier applied on a critical hit
    pub crit_damage: f32,
    pub starting_gold: u64,
    pub skills: Vec<SkillDefinition>,
}

// =============================================================================
// Class Definitions
// =============================================================================

/// Get all class definitions
pub fn get_class_definitions() -> Vec<ClassDefinition> {
    vec![
        ClassDefinition {
            class: CharacterClass::Warrior,
            name: "Warrior".into(),
            description: "Heavy melee tank with armor-shredding strikes.".into(),
            health: 180,
            mana: 40,
            attack: 20,
            defense: 12,
            crit_chance: 8.0,
            dodge_chance: 3.0,
            crit_damage: 1.6,
            starting_gold: 150,
            skills: vec![SkillDefinition {
                id: "mighty_strike".into(),
                name: "Mighty Strike".into(),
                cooldown_secs: 30,
                mana_cost: 25,
                damage_multiplier: 1.5,
                effects: vec![SkillEffect::ArmorPierce(0.5)],
            }],
        },
        ClassDefinition {
            class: CharacterClass::Mage,
            name: "Mage".into(),
            description: "Fragile caster with the hardest-hitting burst.".into(),
            health: 80,
            mana: 180,
            attack: 10,
            defense: 4,
            crit_chance: 12.0,
            dodge_chance: 2.0,
            crit_damage: 2.0,
            starting_gold: 200,
            skills: vec![SkillDefinition {
                id: "arcane_blast".into(),
                name: "Arcane Blast".into(),
                cooldown_secs: 25,
                mana_cost: 35,
                damage_multiplier: 2.0,
                effects: vec![SkillEffect::CritBoost(10.0)],
            }],
        },
        ClassDefinition {
            class: CharacterClass::Rogue,
            name: "Rogue".into(),
            description: "Crits and dodges, striking in quick flurries.".into(),
            health: 110,
            mana: 70,
            attack: 24,
            defense: 6,
            crit_chance: 32.0,
            dodge_chance: 18.0,
            crit_damage: 1.5,
            starting_gold: 180,
            skills: vec![SkillDefinition {
                id: "combo_strike".into(),
                name: "Combo Strike".into(),
                cooldown_secs: 20,
                mana_cost: 20,
                damage_multiplier: 1.2,
                effects: vec![SkillEffect::BonusHits(2)],
            }],
        },
        ClassDefinition {
            class: CharacterClass::Paladin,
            name: "Paladin".into(),
            description: "Holy tank that shields and mends itself mid-fight.".into(),
            health: 200,
            mana: 120,
            attack: 16,
            defense: 20,
            crit_chance: 5.0,
            dodge_chance: 5.0,
            crit_damage: 1.5,
            starting_gold: 170,
            skills: vec![SkillDefinition {
                id: "holy_shield".into(),
                name: "Holy Shield".into(),
                cooldown_secs: 35,
                mana_cost: 30,
                damage_multiplier: 1.2,
                effects: vec![SkillEffect::DefenseBoost(10), SkillEffect::Heal(25)],
            }],
        },
        ClassDefinition {
            class: CharacterClass::Archer,
            name: "Archer".into(),
            description: "Precise ranged damage with deadly volleys.".into(),
            health: 120,
            mana: 60,
            attack: 22,
            defense: 7,
            crit_chance: 28.0,
            dodge_chance: 12.0,
            crit_damage: 1.7,
            starting_gold: 160,
            skills: vec![SkillDefinition {
                id: "arrow_storm".into(),
                name: "Arrow Storm".into(),
                cooldown_secs: 22,
                mana_cost: 28,
                damage_multiplier: 1.4,
                effects: vec![SkillEffect::BonusHits(1), SkillEffect::CritBoost(5.0)],
            }],
        },
    ]
}

/// Get the definition for a single class
pub fn get_class_definition(class: CharacterClass) -> ClassDefinition {
    get_class_definitions()
        .into_iter()
        .find(|c| c.class == class)
        .expect("every class variant has a definition")
}
