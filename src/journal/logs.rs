//! Persisted mood entries and vent recordings.

use crate::error::MuseResult;
use crate::models::journal::{MoodEntry, MoodEntryKind, VentRecording};
use crate::storage::keys;
use crate::traits::KeyValueStore;

/// Mood journal, newest entry first.
pub struct MoodLog<S: KeyValueStore> {
    store: S,
    entries: Vec<MoodEntry>,
}

impl<S: KeyValueStore> MoodLog<S> {
    pub fn load(store: S) -> MuseResult<Self> {
        let entries = store.get_json(keys::MOOD_ENTRIES)?.unwrap_or_default();
        Ok(Self { store, entries })
    }

    pub fn entries(&self) -> &[MoodEntry] {
        &self.entries
    }

    /// Record a mood. Returns `None` without saving when no mood is
    /// selected or a text entry is blank.
    pub fn save_entry(&mut self, mood: &str, kind: MoodEntryKind) -> MuseResult<Option<MoodEntry>> {
        let mood = mood.trim();
        if mood.is_empty() {
            return Ok(None);
        }
        let kind = match kind {
            MoodEntryKind::Text { content } => {
                let content = content.trim();
                if content.is_empty() {
                    return Ok(None);
                }
                MoodEntryKind::Text {
                    content: content.to_string(),
                }
            }
            voice => voice,
        };

        let entry = MoodEntry::new(mood, kind);
        let mut next = Vec::with_capacity(self.entries.len() + 1);
        next.push(entry.clone());
        next.extend(self.entries.iter().cloned());

        self.store.set_json(keys::MOOD_ENTRIES, &next)?;
        self.entries = next;
        tracing::debug!(mood = %entry.mood, total = self.entries.len(), "mood entry saved");
        Ok(Some(entry))
    }
}

/// Vent recordings, newest first.
pub struct VentLog<S: KeyValueStore> {
    store: S,
    entries: Vec<VentRecording>,
}

impl<S: KeyValueStore> VentLog<S> {
    pub fn load(store: S) -> MuseResult<Self> {
        let entries = store.get_json(keys::VENT_ENTRIES)?.unwrap_or_default();
        Ok(Self { store, entries })
    }

    pub fn entries(&self) -> &[VentRecording] {
        &self.entries
    }

    pub fn get(&self, id: &str) -> Option<&VentRecording> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn add(&mut self, recording: VentRecording) -> MuseResult<()> {
        let mut next = Vec::with_capacity(self.entries.len() + 1);
        next.push(recording);
        next.extend(self.entries.iter().cloned());
        self.commit(next)
    }

    /// Remove a recording. Returns false when the id is unknown.
    pub fn delete(&mut self, id: &str) -> MuseResult<bool> {
        if self.get(id).is_none() {
            return Ok(false);
        }
        let next = self.entries.iter().filter(|e| e.id != id).cloned().collect();
        self.commit(next)?;
        Ok(true)
    }

    /// Replace a recording's notes; blank notes clear them.
    pub fn set_notes(&mut self, id: &str, notes: &str) -> MuseResult<bool> {
        if self.get(id).is_none() {
            return Ok(false);
        }
        let notes = notes.trim();
        let next = self
            .entries
            .iter()
            .cloned()
            .map(|mut e| {
                if e.id == id {
                    e.notes = (!notes.is_empty()).then(|| notes.to_string());
                }
                e
            })
            .collect();
        self.commit(next)?;
        Ok(true)
    }

    fn commit(&mut self, next: Vec<VentRecording>) -> MuseResult<()> {
        self.store.set_json(keys::VENT_ENTRIES, &next)?;
        self.entries = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryStore;

    fn text(content: &str) -> MoodEntryKind {
        MoodEntryKind::Text {
            content: content.to_string(),
        }
    }

    #[test]
    fn test_mood_entries_newest_first() {
        let store = InMemoryStore::new();
        let mut log = MoodLog::load(store.clone()).unwrap();
        log.save_entry("😊 Happy", text("first")).unwrap();
        log.save_entry("😔 Sad", text("second")).unwrap();

        assert_eq!(log.entries()[0].text(), Some("second"));
        let reloaded = MoodLog::load(store).unwrap();
        assert_eq!(reloaded.entries().len(), 2);
        assert_eq!(reloaded.entries()[1].mood, "😊 Happy");
    }

    #[test]
    fn test_blank_entries_ignored() {
        let store = InMemoryStore::new();
        let mut log = MoodLog::load(store.clone()).unwrap();
        assert_eq!(log.save_entry("", text("words")).unwrap(), None);
        assert_eq!(log.save_entry("😊 Happy", text("   ")).unwrap(), None);
        assert!(log.entries().is_empty());
        assert!(store.keys().is_empty());
    }

    #[test]
    fn test_failed_write_leaves_log_unchanged() {
        let store = InMemoryStore::new();
        let mut log = MoodLog::load(store.clone()).unwrap();
        store.set_write_should_fail(true);
        assert!(log.save_entry("😊 Happy", text("hi")).is_err());
        assert!(log.entries().is_empty());
    }

    #[test]
    fn test_vent_delete_and_notes() {
        let store = InMemoryStore::new();
        let mut log = VentLog::load(store.clone()).unwrap();
        let older = VentRecording::new("a.wav", 40.0, "Calm");
        let newer = VentRecording::new("b.wav", 120.0, "Frustrated");
        let older_id = older.id.clone();
        let newer_id = newer.id.clone();
        log.add(older).unwrap();
        log.add(newer).unwrap();
        assert_eq!(log.entries()[0].id, newer_id);

        assert!(log.set_notes(&older_id, "felt better after").unwrap());
        assert_eq!(log.get(&older_id).unwrap().notes.as_deref(), Some("felt better after"));
        assert!(log.set_notes(&older_id, "  ").unwrap());
        assert_eq!(log.get(&older_id).unwrap().notes, None);

        assert!(log.delete(&newer_id).unwrap());
        assert!(!log.delete(&newer_id).unwrap());
        assert!(!log.set_notes("missing", "x").unwrap());

        let reloaded = VentLog::load(store).unwrap();
        assert_eq!(reloaded.entries().len(), 1);
        assert_eq!(reloaded.entries()[0].id, older_id);
    }
}
