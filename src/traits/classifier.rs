//! Mood classification abstraction for recorded journal audio.

use async_trait::async_trait;
use thiserror::Error;

use crate::models::journal::JournalAnalysis;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClassifierError {
    #[error("No audio provided")]
    EmptyAudio,

    #[error("Audio could not be decoded: {0}")]
    Decode(String),
}

/// Turns an uploaded recording into a transcript, mood and suggestions.
#[async_trait]
pub trait MoodClassifier: Send + Sync {
    /// Short name used in logs and config (`stub`, `signal`).
    fn name(&self) -> &'static str;

    async fn analyze(&self, audio: &[u8]) -> Result<JournalAnalysis, ClassifierError>;
}
