pub mod classes;
pub mod enemies;
pub mod items;
pub mod protocol;
pub mod quests;

pub use classes::*;
pub use enemies::*;
pub use items::*;
pub use protocol::*;
pub use quests::*;
