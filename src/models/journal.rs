use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::journal::Emotion;

/// What the analysis endpoint suggests doing next.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionKind {
    Book,
    Game,
    Activity,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Suggestion {
    #[serde(rename = "type")]
    pub kind: SuggestionKind,
    pub title: String,
    pub description: String,
}

/// Result of analyzing a voice journal recording.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JournalAnalysis {
    pub transcript: String,
    pub mood: String,
    #[serde(default)]
    pub suggestions: Vec<Suggestion>,
}

/// Body of a mood journal entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MoodEntryKind {
    Text { content: String },
    Voice {
        #[serde(rename = "audioRef")]
        audio_ref: String,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MoodEntry {
    pub mood: String,
    pub timestamp: DateTime<Utc>,
    #[serde(flatten)]
    pub kind: MoodEntryKind,
}

impl MoodEntry {
    pub fn new(mood: impl Into<String>, kind: MoodEntryKind) -> Self {
        Self {
            mood: mood.into(),
            timestamp: Utc::now(),
            kind,
        }
    }

    /// Text content, for entries that have one.
    pub fn text(&self) -> Option<&str> {
        match &self.kind {
            MoodEntryKind::Text { content } => Some(content),
            MoodEntryKind::Voice { .. } => None,
        }
    }
}

/// A saved vent-space recording.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VentRecording {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub audio_ref: String,
    /// Peak input level (0-255) seen while recording
    pub intensity: f32,
    pub mood: String,
    pub emotion: Emotion,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl VentRecording {
    pub fn new(audio_ref: impl Into<String>, intensity: f32, mood: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            audio_ref: audio_ref.into(),
            intensity,
            mood: mood.into(),
            emotion: Emotion::from_level(intensity),
            notes: None,
        }
    }
}
