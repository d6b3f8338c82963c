//! Request handling: the stable boundary in front of the engine.
//!
//! Each request is an independent read-modify-write cycle against the
//! player store. The service loads state, lets the engine compute, saves,
//! and answers; failures map onto HTTP-shaped error codes.

use std::time::{SystemTime, UNIX_EPOCH};

use log::{debug, info};

use runequest_shared::{
    CharacterView, ItemCategory, Request, Response, DEFAULT_LEADERBOARD_SIZE,
};

use crate::catalog::Catalog;
use crate::combat::{self, CombatConfig};
use crate::entities::{Character, SkillError};
use crate::persistence::{PlayerStore, StoreError};
use crate::progression::{self, BattleOutcome};
use crate::shop::{self, ShopError};
use crate::stats::{self, EffectiveStats};

/// The game service: catalog plus a player store behind the port
pub struct GameService<S> {
    catalog: Catalog,
    store: S,
    combat_config: CombatConfig,
    leaderboard_size: usize,
}

impl<S: PlayerStore> GameService<S> {
    pub fn new(catalog: Catalog, store: S) -> Self {
        Self {
            catalog,
            store,
            combat_config: CombatConfig::default(),
            leaderboard_size: DEFAULT_LEADERBOARD_SIZE,
        }
    }

    pub fn with_leaderboard_size(mut self, size: usize) -> Self {
        self.leaderboard_size = size;
        self
    }

    pub fn with_combat_config(mut self, config: CombatConfig) -> Self {
        self.combat_config = config;
        self
    }

    /// Dispatch one request
    pub async fn handle(&self, request: Request) -> Response {
        let result = match request {
            Request::ListClasses => self.list_classes(),
            Request::CreatePlayer { user_id, class_id } => {
                self.create_player(user_id, &class_id).await
            }
            Request::GetPlayer { user_id } => self.get_player(user_id).await,
            Request::ListItems { category } => self.list_items(category),
            Request::ListEnemies => self.list_enemies(),
            Request::BuyItem { user_id, item_id } => self.buy_item(user_id, &item_id).await,
            Request::EquipItem { user_id, item_id } => self.equip_item(user_id, &item_id).await,
            Request::Attack {
                user_id,
                is_skill,
                skill_id,
                enemy_id,
            } => {
                self.attack(user_id, is_skill, skill_id.as_deref(), enemy_id.as_deref())
                    .await
            }
            Request::BattleEnd {
                user_id,
                enemy_id,
                won,
                gold,
                experience,
                damage_dealt,
                damage_taken: _,
            } => {
                self.battle_end(user_id, &enemy_id, won, gold, experience, damage_dealt)
                    .await
            }
            Request::Leaderboard => self.leaderboard().await,
        };

        result.unwrap_or_else(|e| {
            debug!("Request failed: {}", e);
            Response::Error {
                code: e.code(),
                message: e.to_string(),
            }
        })
    }

    fn list_classes(&self) -> Result<Response, GameError> {
        Ok(Response::Classes(self.catalog.list_classes().to_vec()))
    }

    fn list_items(&self, category: Option<ItemCategory>) -> Result<Response, GameError> {
        Ok(Response::Items(self.catalog.list_items(category)))
    }

    fn list_enemies(&self) -> Result<Response, GameError> {
        Ok(Response::Enemies(self.catalog.list_enemies()))
    }

    async fn create_player(&self, user_id: i64, class_id: &str) -> Result<Response, GameError> {
        let class_def = self
            .catalog
            .find_class(class_id)
            .ok_or_else(|| GameError::UnknownClass(class_id.to_string()))?;

        if self.store.exists(user_id).await? {
            return Err(GameError::PlayerExists);
        }

        let character = Character::new(user_id, class_def);
        self.store.create(&character).await?;
        info!("Created {} character for user {}", class_def.name, user_id);

        Ok(Response::Player(self.view(&character)))
    }

    async fn get_player(&self, user_id: i64) -> Result<Response, GameError> {
        let character = self.load(user_id).await?;
        Ok(Response::Player(self.view(&character)))
    }

    async fn buy_item(&self, user_id: i64, item_id: &str) -> Result<Response, GameError> {
        let mut character = self.load(user_id).await?;
        shop::purchase(&mut character, &self.catalog, item_id)?;
        self.store.save(&character).await?;
        Ok(Response::Player(self.view(&character)))
    }

    async fn equip_item(&self, user_id: i64, item_id: &str) -> Result<Response, GameError> {
        let mut character = self.load(user_id).await?;
        let slot = shop::equip(&mut character, &self.catalog, item_id)?;
        self.store.save(&character).await?;
        debug!(
            "User {} equipped {} in slot {}",
            user_id,
            item_id,
            slot.as_str()
        );
        Ok(Response::Player(self.view(&character)))
    }

    async fn attack(
        &self,
        user_id: i64,
        is_skill: bool,
        skill_id: Option<&str>,
        enemy_id: Option<&str>,
    ) -> Result<Response, GameError> {
        let mut character = self.load(user_id).await?;
        let attacker = stats::apply_bonuses(&character, &self.catalog);

        let defender = match enemy_id {
            Some(id) => {
                let enemy = self
                    .catalog
                    .get_enemy(id)
                    .ok_or_else(|| GameError::EnemyNotFound(id.to_string()))?;
                EffectiveStats::from_enemy(enemy)
            }
            None => EffectiveStats::default(),
        };

        let (skill, healed, defense_bonus) = if is_skill {
            let skill = self
                .catalog
                .find_skill(character.class, skill_id)
                .ok_or_else(|| {
                    GameError::UnknownSkill(skill_id.unwrap_or("<default>").to_string())
                })?
                .clone();
            character.use_skill(&skill, unix_now())?;
            let healed = character.heal(skill.heal());
            let defense_bonus = skill.defense_boost();
            (Some(skill), healed, defense_bonus)
        } else {
            (None, 0, 0)
        };

        let mut rng = rand::thread_rng();

        // Dodge negates the whole attack; mana and cooldown stay spent
        if combat::roll_dodge(&mut rng, &defender) {
            self.store.save(&character).await?;
            return Ok(Response::AttackResult {
                damage: 0,
                is_crit: false,
                dodged: true,
                remaining_mana: character.mana,
                healed,
                defense_bonus,
            });
        }

        let result = combat::resolve_attack(
            &mut rng,
            &attacker,
            &defender,
            skill.as_ref(),
            &self.combat_config,
        );
        debug!(
            "User {} hit for {} ({:.1} pre-mitigation, crit: {})",
            user_id, result.damage, result.base_damage, result.is_crit
        );
        self.store.save(&character).await?;

        Ok(Response::AttackResult {
            damage: result.damage,
            is_crit: result.is_crit,
            dodged: false,
            remaining_mana: character.mana,
            healed,
            defense_bonus,
        })
    }

    async fn battle_end(
        &self,
        user_id: i64,
        enemy_id: &str,
        won: bool,
        gold: u64,
        experience: u64,
        damage_dealt: u64,
    ) -> Result<Response, GameError> {
        let mut character = self.load(user_id).await?;
        self.catalog
            .get_enemy(enemy_id)
            .ok_or_else(|| GameError::EnemyNotFound(enemy_id.to_string()))?;

        let effective = stats::apply_bonuses(&character, &self.catalog);
        let outcome = BattleOutcome {
            won,
            gold,
            experience,
            kills: if won { 1 } else { 0 },
            damage_dealt,
        };
        let summary = progression::award_battle_result(&mut character, &outcome, &effective);
        self.store.save(&character).await?;

        Ok(Response::BattleResults {
            leveled_up: summary.leveled_up,
            level: character.level,
            unlocked_achievements: summary.unlocked_achievements,
            completed_quests: summary.completed_quests,
            character: self.view(&character),
        })
    }

    async fn leaderboard(&self) -> Result<Response, GameError> {
        let entries = self.store.top_n(self.leaderboard_size).await?;
        Ok(Response::Leaderboard(entries))
    }

    async fn load(&self, user_id: i64) -> Result<Character, GameError> {
        self.store
            .load(user_id)
            .await?
            .ok_or(GameError::PlayerNotFound)
    }

    /// Character as shown to the client, with equipment bonuses applied
    fn view(&self, character: &Character) -> CharacterView {
        let effective = stats::apply_bonuses(character, &self.catalog);
        CharacterView {
            user_id: character.user_id,
            class_id: character.class.id().to_string(),
            class_name: character.class.name().to_string(),
            level: character.level,
            experience: character.experience,
            health: character.health,
            max_health: character.max_health,
            mana: character.mana,
            max_mana: character.max_mana,
            attack: effective.attack,
            defense: effective.defense,
            crit_chance: effective.crit_chance,
            dodge_chance: effective.dodge_chance,
            gold: character.gold,
            inventory: character.inventory.clone(),
            equipment: character
                .equipment
                .iter()
                .map(|(slot, id)| (slot.as_str().to_string(), id.clone()))
                .collect(),
            cooldowns: character.cooldowns.clone(),
            kills: character.counters.kills,
            battles_won: character.counters.battles_won,
            battles_lost: character.counters.battles_lost,
            damage_dealt: character.counters.damage_dealt,
            total_experience: character.counters.total_experience,
            achievements: character.achievements.iter().cloned().collect(),
            quest_progress: character.quest_progress.clone(),
        }
    }
}

fn unix_now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

// =============================================================================
// Errors
// =============================================================================

/// Request-level errors, mapped onto HTTP-shaped status codes
#[derive(Debug)]
pub enum GameError {
    PlayerNotFound,
    PlayerExists,
    UnknownClass(String),
    EnemyNotFound(String),
    UnknownSkill(String),
    Shop(ShopError),
    Skill(SkillError),
    Store(StoreError),
}

impl GameError {
    pub fn code(&self) -> u16 {
        match self {
            Self::PlayerNotFound | Self::EnemyNotFound(_) => 404,
            Self::PlayerExists => 409,
            Self::UnknownClass(_) | Self::UnknownSkill(_) => 400,
            Self::Shop(ShopError::ItemNotFound) => 404,
            Self::Shop(_) | Self::Skill(_) => 400,
            Self::Store(_) => 500,
        }
    }
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PlayerNotFound => write!(f, "Player not found"),
            Self::PlayerExists => write!(f, "Player already exists"),
            Self::UnknownClass(id) => write!(f, "Unknown class '{}'", id),
            Self::EnemyNotFound(id) => write!(f, "Enemy '{}' not found", id),
            Self::UnknownSkill(id) => write!(f, "Unknown skill '{}'", id),
            Self::Shop(e) => write!(f, "{}", e),
            Self::Skill(e) => write!(f, "{}", e),
            Self::Store(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for GameError {}

impl From<ShopError> for GameError {
    fn from(e: ShopError) -> Self {
        Self::Shop(e)
    }
}

impl From<SkillError> for GameError {
    fn from(e: SkillError) -> Self {
        Self::Skill(e)
    }
}

impl From<StoreError> for GameError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::AlreadyExists => Self::PlayerExists,
            other => Self::Store(other),
        }
    }
}
