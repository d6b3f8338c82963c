//! Static reference data: classes, enemies, items.
//!
//! Loaded once at process start and never mutated. All lookups are pure;
//! the only failure mode is not-found.

use std::collections::HashMap;

use runequest_shared::{
    get_class_definitions, get_enemy_definitions, get_item_definitions, CharacterClass,
    ClassDefinition, EnemyDefinition, ItemCategory, ItemDefinition, SkillDefinition,
};

/// Read-only game catalog
pub struct Catalog {
    classes: Vec<ClassDefinition>,
    enemies: HashMap<String, EnemyDefinition>,
    items: HashMap<String, ItemDefinition>,
}

impl Catalog {
    /// Build the catalog from the shared definition tables
    pub fn load() -> Self {
        Self {
            classes: get_class_definitions(),
            enemies: get_enemy_definitions()
                .into_iter()
                .map(|e| (e.id.clone(), e))
                .collect(),
            items: get_item_definitions()
                .into_iter()
                .map(|i| (i.id.clone(), i))
                .collect(),
        }
    }

    pub fn get_class(&self, class: CharacterClass) -> Option<&ClassDefinition> {
        self.classes.iter().find(|c| c.class == class)
    }

    /// Look up a class by its string id ("warrior", "mage", ...)
    pub fn find_class(&self, id: &str) -> Option<&ClassDefinition> {
        CharacterClass::from_id(id).and_then(|class| self.get_class(class))
    }

    pub fn list_classes(&self) -> &[ClassDefinition] {
        &self.classes
    }

    pub fn get_enemy(&self, id: &str) -> Option<&EnemyDefinition> {
        self.enemies.get(id)
    }

    pub fn list_enemies(&self) -> Vec<EnemyDefinition> {
        let mut enemies: Vec<_> = self.enemies.values().cloned().collect();
        enemies.sort_by(|a, b| a.tier.cmp(&b.tier).then_with(|| a.id.cmp(&b.id)));
        enemies
    }

    /// Search across all item categories
    pub fn find_item(&self, id: &str) -> Option<&ItemDefinition> {
        self.items.get(id)
    }

    pub fn list_items(&self, category: Option<ItemCategory>) -> Vec<ItemDefinition> {
        let mut items: Vec<_> = self
            .items
            .values()
            .filter(|i| category.map_or(true, |c| i.category == c))
            .cloned()
            .collect();
        items.sort_by(|a, b| a.id.cmp(&b.id));
        items
    }

    /// Resolve a skill for a class. `None` selects the class's first skill.
    pub fn find_skill(&self, class: CharacterClass, skill_id: Option<&str>) -> Option<&SkillDefinition> {
        let class_def = self.get_class(class)?;
        match skill_id {
            Some(id) => class_def.skills.iter().find(|s| s.id == id),
            None => class_def.skills.first(),
        }
    }
}
