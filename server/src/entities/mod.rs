//! Server-side entity state.

mod character;

pub use character::{BattleCounters, Character, SkillError};
