use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Experience needed to leave `level`.
pub fn xp_for_level(level: u32) -> u32 {
    level.saturating_mul(100)
}

pub const BADGE_FIRST_QUEST: &str = "First Quest";
pub const BADGE_QUEST_EXPLORER: &str = "Quest Explorer";
pub const BADGE_WEEK_STREAK: &str = "7-Day Streak";
pub const BADGE_LEVEL_FIVE: &str = "Level 5 Reached";

/// Level change produced by a single reward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LevelUp {
    pub from: u32,
    pub to: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProgress {
    pub level: u32,
    pub xp: u32,
    pub streak: u32,
    pub completed_quests: u32,
    #[serde(default)]
    pub badges: BTreeSet<String>,
}

impl Default for UserProgress {
    fn default() -> Self {
        Self {
            level: 1,
            xp: 0,
            streak: 0,
            completed_quests: 0,
            badges: BTreeSet::new(),
        }
    }
}

impl UserProgress {
    /// Add experience and level up until `xp < level * 100`.
    pub fn apply_reward(&mut self, xp: u32) -> Option<LevelUp> {
        self.level = self.level.max(1);
        let from = self.level;
        self.xp = self.xp.saturating_add(xp);
        while self.xp >= xp_for_level(self.level) {
            self.xp -= xp_for_level(self.level);
            self.level += 1;
        }
        (self.level != from).then_some(LevelUp {
            from,
            to: self.level,
        })
    }

    /// Award milestone badges that are now earned. Returns the new ones.
    pub fn award_milestones(&mut self) -> Vec<String> {
        let earned = [
            (BADGE_FIRST_QUEST, self.completed_quests >= 1),
            (BADGE_QUEST_EXPLORER, self.completed_quests >= 5),
            (BADGE_WEEK_STREAK, self.streak >= 7),
            (BADGE_LEVEL_FIVE, self.level >= 5),
        ];
        earned
            .into_iter()
            .filter(|(_, reached)| *reached)
            .filter(|(badge, _)| self.badges.insert(badge.to_string()))
            .map(|(badge, _)| badge.to_string())
            .collect()
    }

    /// Fraction of the way to the next level, in `[0, 1)`.
    pub fn level_progress(&self) -> f32 {
        self.xp as f32 / xp_for_level(self.level.max(1)) as f32
    }
}
