//! Quest progression persisted in local storage.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use super::progress::{LevelUp, UserProgress};
use super::quest::{self, Quest, CATALOG};
use crate::error::MuseResult;
use crate::storage::keys;
use crate::traits::KeyValueStore;

/// Completion state and journal drafts for the quest catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct QuestBoard {
    #[serde(default)]
    completed: BTreeSet<String>,
    #[serde(default)]
    journal_entries: BTreeMap<String, String>,
}

/// A catalog quest with its runtime state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestView {
    pub quest: &'static Quest,
    pub completed: bool,
    pub journal_entry: String,
}

/// What a successful completion changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestOutcome {
    pub quest_id: &'static str,
    pub xp_awarded: u32,
    /// Set only when the level changed.
    pub level_up: Option<LevelUp>,
    pub new_badges: Vec<String>,
}

pub struct ProgressionStore<S: KeyValueStore> {
    store: S,
    progress: UserProgress,
    board: QuestBoard,
}

impl<S: KeyValueStore> ProgressionStore<S> {
    /// Load progress, defaulting when nothing was saved yet.
    pub fn load(store: S) -> MuseResult<Self> {
        let progress = store.get_json(keys::USER_PROGRESS)?.unwrap_or_default();
        let board = store.get_json(keys::QUEST_BOARD)?.unwrap_or_default();
        Ok(Self {
            store,
            progress,
            board,
        })
    }

    pub fn progress(&self) -> &UserProgress {
        &self.progress
    }

    pub fn quests(&self) -> Vec<QuestView> {
        CATALOG
            .iter()
            .map(|quest| QuestView {
                quest,
                completed: self.board.completed.contains(quest.id),
                journal_entry: self.journal_entry(quest.id).to_string(),
            })
            .collect()
    }

    pub fn is_completed(&self, quest_id: &str) -> bool {
        self.board.completed.contains(quest_id)
    }

    pub fn journal_entry(&self, quest_id: &str) -> &str {
        self.board
            .journal_entries
            .get(quest_id)
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Save a journal draft for an open quest. Unknown or completed quests
    /// are ignored.
    pub fn set_journal_entry(&mut self, quest_id: &str, text: &str) -> MuseResult<bool> {
        if quest::find(quest_id).is_none() || self.is_completed(quest_id) {
            return Ok(false);
        }
        let mut board = self.board.clone();
        board
            .journal_entries
            .insert(quest_id.to_string(), text.to_string());
        self.store.set_json(keys::QUEST_BOARD, &board)?;
        self.board = board;
        Ok(true)
    }

    /// Complete a quest with its journal text.
    ///
    /// Returns `Ok(None)` and changes nothing when the text is blank, the
    /// quest is unknown or it was already completed.
    pub fn complete_quest(&mut self, quest_id: &str, journal_text: &str) -> MuseResult<Option<QuestOutcome>> {
        if journal_text.trim().is_empty() {
            return Ok(None);
        }
        let Some(quest) = quest::find(quest_id) else {
            return Ok(None);
        };
        if self.is_completed(quest.id) {
            return Ok(None);
        }

        let mut progress = self.progress.clone();
        let level_up = progress.apply_reward(quest.xp_reward);
        progress.completed_quests += 1;
        progress.streak += 1;
        let new_badges = progress.award_milestones();

        let mut board = self.board.clone();
        board.completed.insert(quest.id.to_string());
        board.journal_entries.remove(quest.id);

        let previous = self.store.get(keys::USER_PROGRESS)?;
        self.store.set_json(keys::USER_PROGRESS, &progress)?;
        if let Err(err) = self.store.set_json(keys::QUEST_BOARD, &board) {
            // a stored reward without its completed quest could be paid out again
            let restored = match previous {
                Some(value) => self.store.set(keys::USER_PROGRESS, value),
                None => self.store.remove(keys::USER_PROGRESS),
            };
            if let Err(restore_err) = restored {
                tracing::error!(error = %restore_err, "could not roll back progress");
            }
            return Err(err.into());
        }
        self.progress = progress;
        self.board = board;

        tracing::debug!(
            quest_id = quest.id,
            xp = self.progress.xp,
            level = self.progress.level,
            "quest completed"
        );
        if let Some(up) = level_up {
            tracing::info!(from = up.from, to = up.to, "level up");
        }

        Ok(Some(QuestOutcome {
            quest_id: quest.id,
            xp_awarded: quest.xp_reward,
            level_up,
            new_badges,
        }))
    }

    pub fn level_progress(&self) -> f32 {
        self.progress.level_progress()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryStore;

    #[test]
    fn test_defaults_when_empty() {
        let store = ProgressionStore::load(InMemoryStore::new()).unwrap();
        assert_eq!(store.progress(), &UserProgress::default());
        assert_eq!(store.quests().len(), 4);
        assert!(store.quests().iter().all(|q| !q.completed));
    }

    #[test]
    fn test_blank_journal_is_noop() {
        let backing = InMemoryStore::new();
        let mut store = ProgressionStore::load(backing.clone()).unwrap();
        assert_eq!(store.complete_quest("1", "   ").unwrap(), None);
        assert_eq!(store.progress(), &UserProgress::default());
        assert!(backing.keys().is_empty());
    }

    #[test]
    fn test_unknown_and_repeat_are_noops() {
        let mut store = ProgressionStore::load(InMemoryStore::new()).unwrap();
        assert_eq!(store.complete_quest("42", "text").unwrap(), None);

        assert!(store.complete_quest("1", "felt calm").unwrap().is_some());
        let before = store.progress().clone();
        assert_eq!(store.complete_quest("1", "again").unwrap(), None);
        assert_eq!(store.progress(), &before);
    }

    #[test]
    fn test_completion_clears_draft_and_persists() {
        let backing = InMemoryStore::new();
        let mut store = ProgressionStore::load(backing.clone()).unwrap();
        assert!(store.set_journal_entry("2", "breathing helped").unwrap());
        assert_eq!(store.journal_entry("2"), "breathing helped");

        let outcome = store.complete_quest("2", "breathing helped").unwrap().unwrap();
        assert_eq!(outcome.xp_awarded, 75);
        assert_eq!(outcome.level_up, None);
        assert_eq!(outcome.new_badges, vec!["First Quest".to_string()]);
        assert_eq!(store.journal_entry("2"), "");
        assert!(!store.set_journal_entry("2", "late").unwrap());

        let reloaded = ProgressionStore::load(backing).unwrap();
        assert!(reloaded.is_completed("2"));
        assert_eq!(reloaded.progress().xp, 75);
        assert_eq!(reloaded.progress().streak, 1);
        assert_eq!(reloaded.progress().completed_quests, 1);
    }

    #[test]
    fn test_level_up_reported_once() {
        let mut store = ProgressionStore::load(InMemoryStore::new()).unwrap();
        assert_eq!(store.complete_quest("1", "a").unwrap().unwrap().level_up, None);
        let outcome = store.complete_quest("2", "b").unwrap().unwrap();
        assert_eq!(outcome.level_up, Some(LevelUp { from: 1, to: 2 }));
        assert_eq!(store.progress().xp, 25);
        assert_eq!(store.complete_quest("3", "c").unwrap().unwrap().level_up, None);
        assert_eq!(store.progress().xp, 125);
        assert!(store.progress().xp < store.progress().level * 100);
    }

    #[test]
    fn test_failed_board_write_rolls_back_progress() {
        let backing = InMemoryStore::new();
        let mut store = ProgressionStore::load(backing.clone()).unwrap();
        store.complete_quest("1", "first").unwrap().unwrap();

        backing.reject_writes_to(keys::QUEST_BOARD);
        assert!(store.complete_quest("3", "listened").is_err());
        assert_eq!(store.progress().xp, 50);
        assert!(!store.is_completed("3"));

        let reloaded = ProgressionStore::load(backing.clone()).unwrap();
        assert_eq!(reloaded.progress(), store.progress());
        assert_eq!(reloaded.progress().completed_quests, 1);
        assert!(!reloaded.is_completed("3"));
    }

    #[test]
    fn test_failed_first_board_write_leaves_no_progress() {
        let backing = InMemoryStore::new();
        let mut store = ProgressionStore::load(backing.clone()).unwrap();
        backing.reject_writes_to(keys::QUEST_BOARD);

        assert!(store.complete_quest("3", "listened").is_err());
        assert!(backing.keys().is_empty());
        let reloaded = ProgressionStore::load(backing).unwrap();
        assert_eq!(reloaded.progress(), &UserProgress::default());
    }

    #[test]
    fn test_failed_write_keeps_state() {
        let backing = InMemoryStore::new();
        let mut store = ProgressionStore::load(backing.clone()).unwrap();
        backing.set_write_should_fail(true);
        assert!(store.complete_quest("1", "text").is_err());
        assert_eq!(store.progress(), &UserProgress::default());
        assert!(!store.is_completed("1"));
    }
}
