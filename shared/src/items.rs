//! Item definitions shared between front end and server.

use serde::{Deserialize, Serialize};

/// Item categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemCategory {
    Weapon,
    Armor,
    Accessory,
    Potion,
}

/// Equipment slots. At most one item per slot; equipping replaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquipSlot {
    Weapon,
    Armor,
    Accessory,
}

impl EquipSlot {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Weapon => "weapon",
            Self::Armor => "armor",
            Self::Accessory => "accessory",
        }
    }
}

/// Flat stat bonuses an item grants while equipped
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemBonuses {
    pub attack: u32,
    pub defense: u32,
    /// Crit chance bonus in percentage points
    pub crit_chance: f32,
    /// Dodge chance bonus in percentage points
    pub dodge_chance: f32,
    /// Mana restored at the end of each battle
    pub mana_regen: u32,
    /// Health restored when the item's effect fires
    pub heal: u32,
    /// Fraction added to battle gold rewards (0.1 = +10%)
    pub gold_boost: f32,
}

/// Item definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemDefinition {
    pub id: String,
    pub name: String,
    pub category: ItemCategory,
    pub bonuses: ItemBonuses,
    pub price: u64,
    /// Minimum character level required to purchase
    pub min_level: u32,
}

impl ItemDefinition {
    /// Which slot this item occupies when equipped, inferred from its bonus
    /// shape: attack without defense makes a weapon, any defense makes
    /// armor, everything else is an accessory.
    pub fn slot(&self) -> EquipSlot {
        if self.bonuses.attack > 0 && self.bonuses.defense == 0 {
            EquipSlot::Weapon
        } else if self.bonuses.defense > 0 {
            EquipSlot::Armor
        } else {
            EquipSlot::Accessory
        }
    }
}

/// Get all item definitions
pub fn get_item_definitions() -> Vec<ItemDefinition> {
    vec![
        ItemDefinition {
            id: "great_sword".into(),
            name: "Great Sword".into(),
            category: ItemCategory::Weapon,
            bonuses: ItemBonuses {
                attack: 8,
                ..Default::default()
            },
            price: 100,
            min_level: 1,
        },
        ItemDefinition {
            id: "steel_armor".into(),
            name: "Steel Armor".into(),
            category: ItemCategory::Armor,
            bonuses: ItemBonuses {
                defense: 10,
                ..Default::default()
            },
            price: 120,
            min_level: 2,
        },
        ItemDefinition {
            id: "staff".into(),
            name: "Magic Staff".into(),
            category: ItemCategory::Weapon,
            bonuses: ItemBonuses {
                attack: 5,
                mana_regen: 5,
                ..Default::default()
            },
            price: 110,
            min_level: 1,
        },
        ItemDefinition {
            id: "robe".into(),
            name: "Arcane Robe".into(),
            category: ItemCategory::Armor,
            bonuses: ItemBonuses {
                defense: 6,
                mana_regen: 3,
                ..Default::default()
            },
            price: 100,
            min_level: 1,
        },
        ItemDefinition {
            id: "dagger".into(),
            name: "Assassin's Dagger".into(),
            category: ItemCategory::Weapon,
            bonuses: ItemBonuses {
                attack: 10,
                crit_chance: 10.0,
                ..Default::default()
            },
            price: 90,
            min_level: 2,
        },
        ItemDefinition {
            id: "shadow_cloak".into(),
            name: "Shadow Cloak".into(),
            category: ItemCategory::Armor,
            bonuses: ItemBonuses {
                defense: 5,
                dodge_chance: 8.0,
                ..Default::default()
            },
            price: 95,
            min_level: 2,
        },
        ItemDefinition {
            id: "holy_sword".into(),
            name: "Holy Sword".into(),
            category: ItemCategory::Weapon,
            bonuses: ItemBonuses {
                attack: 7,
                crit_chance: 3.0,
                ..Default::default()
            },
            price: 105,
            min_level: 2,
        },
        ItemDefinition {
            id: "divine_shield".into(),
            name: "Divine Shield".into(),
            category: ItemCategory::Armor,
            bonuses: ItemBonuses {
                defense: 15,
                ..Default::default()
            },
            price: 140,
            min_level: 3,
        },
        ItemDefinition {
            id: "longbow".into(),
            name: "Longbow".into(),
            category: ItemCategory::Weapon,
            bonuses: ItemBonuses {
                attack: 9,
                crit_chance: 12.0,
                ..Default::default()
            },
            price: 105,
            min_level: 2,
        },
        ItemDefinition {
            id: "leather_armor".into(),
            name: "Leather Armor".into(),
            category: ItemCategory::Armor,
            bonuses: ItemBonuses {
                defense: 8,
                dodge_chance: 5.0,
                ..Default::default()
            },
            price: 85,
            min_level: 1,
        },
        ItemDefinition {
            id: "arrow_pack".into(),
            name: "Quiver of Arrows".into(),
            category: ItemCategory::Accessory,
            bonuses: ItemBonuses {
                attack: 3,
                ..Default::default()
            },
            price: 35,
            min_level: 1,
        },
        ItemDefinition {
            id: "blessing_orb".into(),
            name: "Blessing Orb".into(),
            category: ItemCategory::Accessory,
            bonuses: ItemBonuses {
                defense: 2,
                heal: 30,
                ..Default::default()
            },
            price: 60,
            min_level: 1,
        },
        ItemDefinition {
            id: "lucky_charm".into(),
            name: "Lucky Charm".into(),
            category: ItemCategory::Accessory,
            bonuses: ItemBonuses {
                gold_boost: 0.1,
                ..Default::default()
            },
            price: 150,
            min_level: 3,
        },
        ItemDefinition {
            id: "health_potion".into(),
            name: "Health Potion".into(),
            category: ItemCategory::Potion,
            bonuses: ItemBonuses {
                heal: 50,
                ..Default::default()
            },
            price: 30,
            min_level: 1,
        },
        ItemDefinition {
            id: "mana_potion".into(),
            name: "Mana Potion".into(),
            category: ItemCategory::Potion,
            bonuses: ItemBonuses {
                mana_regen: 50,
                ..Default::default()
            },
            price: 40,
            min_level: 1,
        },
        ItemDefinition {
            id: "poison_flask".into(),
            name: "Poison Flask".into(),
            category: ItemCategory::Potion,
            bonuses: ItemBonuses {
                attack: 5,
                ..Default::default()
            },
            price: 50,
            min_level: 3,
        },
    ]
}
