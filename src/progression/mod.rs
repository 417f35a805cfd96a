//! Gamified quest progression: catalog, experience, levels and badges.

pub mod progress;
pub mod quest;
pub mod store;

pub use progress::{xp_for_level, LevelUp, UserProgress};
pub use quest::{Difficulty, Quest, QuestCategory, QuestType, CATALOG};
pub use store::{ProgressionStore, QuestOutcome, QuestView};
