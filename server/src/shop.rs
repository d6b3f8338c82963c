//! Shop purchase and equip operations.

use runequest_shared::EquipSlot;

use crate::catalog::Catalog;
use crate::entities::Character;

/// Buy an item from the shop. On success gold drops by the item's price
/// and the inventory count goes up by one; on failure nothing changes.
pub fn purchase(
    character: &mut Character,
    catalog: &Catalog,
    item_id: &str,
) -> Result<(), ShopError> {
    let item = catalog.find_item(item_id).ok_or(ShopError::ItemNotFound)?;

    if character.level < item.min_level {
        return Err(ShopError::LevelTooLow(item.min_level));
    }
    if character.gold < item.price {
        return Err(ShopError::InsufficientGold);
    }

    character.gold -= item.price;
    *character.inventory.entry(item.id.clone()).or_insert(0) += 1;
    Ok(())
}

/// Equip an owned item. The target slot is inferred from the item's bonus
/// shape; whatever occupied the slot is replaced, never stacked.
pub fn equip(
    character: &mut Character,
    catalog: &Catalog,
    item_id: &str,
) -> Result<EquipSlot, ShopError> {
    let item = catalog.find_item(item_id).ok_or(ShopError::ItemNotFound)?;

    if character.inventory.get(item_id).copied().unwrap_or(0) == 0 {
        return Err(ShopError::NotOwned);
    }

    let slot = item.slot();
    character.equipment.insert(slot, item.id.clone());
    Ok(slot)
}

/// Shop operation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShopError {
    ItemNotFound,
    /// Character level is below the item's requirement
    LevelTooLow(u32),
    InsufficientGold,
    /// Equip attempt on an item with no inventory count
    NotOwned,
}

impl std::fmt::Display for ShopError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ItemNotFound => write!(f, "Item not found"),
            Self::LevelTooLow(required) => write!(f, "Requires level {}", required),
            Self::InsufficientGold => write!(f, "Not enough gold"),
            Self::NotOwned => write!(f, "Item not owned"),
        }
    }
}

impl std::error::Error for ShopError {}

#[cfg(test)]
mod tests {
    use super::*;
    use runequest_shared::{get_class_definition, CharacterClass};

    fn warrior() -> Character {
        Character::new(1, &get_class_definition(CharacterClass::Warrior))
    }

    #[test]
    fn test_purchase_moves_gold_into_inventory() {
        let catalog = Catalog::load();
        let mut character = warrior();
        let price = catalog.find_item("great_sword").unwrap().price;
        let gold_before = character.gold;

        purchase(&mut character, &catalog, "great_sword").unwrap();
        assert_eq!(character.gold, gold_before - price);
        assert_eq!(character.inventory["great_sword"], 1);

        // A second copy stacks the count
        character.gold += price;
        purchase(&mut character, &catalog, "great_sword").unwrap();
        assert_eq!(character.inventory["great_sword"], 2);
    }

    #[test]
    fn test_failed_purchase_changes_nothing() {
        let catalog = Catalog::load();
        let mut character = warrior();
        character.gold = 10;

        let err = purchase(&mut character, &catalog, "great_sword").unwrap_err();
        assert_eq!(err, ShopError::InsufficientGold);
        assert_eq!(character.gold, 10);
        assert!(character.inventory.is_empty());

        assert_eq!(
            purchase(&mut character, &catalog, "vorpal_blade").unwrap_err(),
            ShopError::ItemNotFound
        );
    }

    #[test]
    fn test_purchase_enforces_level_requirement() {
        let catalog = Catalog::load();
        let mut character = warrior();
        character.gold = 10_000;

        let err = purchase(&mut character, &catalog, "divine_shield").unwrap_err();
        assert_eq!(err, ShopError::LevelTooLow(3));

        character.level = 3;
        purchase(&mut character, &catalog, "divine_shield").unwrap();
    }

    #[test]
    fn test_equip_replaces_the_slot_occupant() {
        let catalog = Catalog::load();
        let mut character = warrior();
        character.gold = 10_000;
        character.level = 5;
        purchase(&mut character, &catalog, "great_sword").unwrap();
        purchase(&mut character, &catalog, "dagger").unwrap();

        assert_eq!(
            equip(&mut character, &catalog, "great_sword").unwrap(),
            EquipSlot::Weapon
        );
        assert_eq!(
            equip(&mut character, &catalog, "dagger").unwrap(),
            EquipSlot::Weapon
        );

        // Only the second weapon occupies the slot
        assert_eq!(character.equipment.len(), 1);
        assert_eq!(character.equipment[&EquipSlot::Weapon], "dagger");
    }

    #[test]
    fn test_equip_requires_ownership() {
        let catalog = Catalog::load();
        let mut character = warrior();

        let err = equip(&mut character, &catalog, "great_sword").unwrap_err();
        assert_eq!(err, ShopError::NotOwned);
        assert!(character.equipment.is_empty());
    }

    #[test]
    fn test_slot_inference_from_bonus_shape() {
        let catalog = Catalog::load();
        let mut character = warrior();
        character.gold = 10_000;
        character.level = 5;

        for (item_id, expected) in [
            ("great_sword", EquipSlot::Weapon),
            ("steel_armor", EquipSlot::Armor),
            ("lucky_charm", EquipSlot::Accessory),
            // Defense outweighs the heal: armor by shape
            ("blessing_orb", EquipSlot::Armor),
        ] {
            purchase(&mut character, &catalog, item_id).unwrap();
            assert_eq!(equip(&mut character, &catalog, item_id).unwrap(), expected);
        }
    }
}
