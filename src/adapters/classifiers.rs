//! Mood classifier implementations for the journal analysis endpoint.

use async_trait::async_trait;

use crate::journal::{Emotion, SignalLevels};
use crate::models::journal::{JournalAnalysis, Suggestion, SuggestionKind};
use crate::recommend::recommend;
use crate::traits::{ClassifierError, MoodClassifier};

/// Canned analysis returned regardless of the audio content.
#[derive(Debug, Clone, Copy, Default)]
pub struct StubClassifier;

#[async_trait]
impl MoodClassifier for StubClassifier {
    fn name(&self) -> &'static str {
        "stub"
    }

    async fn analyze(&self, _audio: &[u8]) -> Result<JournalAnalysis, ClassifierError> {
        Ok(JournalAnalysis {
            transcript: "Your transcribed text".to_string(),
            mood: "anxious".to_string(),
            suggestions: vec![Suggestion {
                kind: SuggestionKind::Book,
                title: "The Anxiety Toolkit".to_string(),
                description: "Practical strategies for managing anxiety".to_string(),
            }],
        })
    }
}

/// Size of a canonical RIFF/WAVE header.
const WAV_HEADER_LEN: usize = 44;

/// Classifies mood from the loudness of 16-bit PCM audio.
///
/// There is no speech recognition; the transcript summarizes the signal.
#[derive(Debug, Clone, Copy, Default)]
pub struct SignalClassifier;

impl SignalClassifier {
    fn pcm_payload(audio: &[u8]) -> &[u8] {
        if audio.len() >= WAV_HEADER_LEN && audio.starts_with(b"RIFF") && &audio[8..12] == b"WAVE"
        {
            &audio[WAV_HEADER_LEN..]
        } else {
            audio
        }
    }
}

#[async_trait]
impl MoodClassifier for SignalClassifier {
    fn name(&self) -> &'static str {
        "signal"
    }

    async fn analyze(&self, audio: &[u8]) -> Result<JournalAnalysis, ClassifierError> {
        if audio.is_empty() {
            return Err(ClassifierError::EmptyAudio);
        }
        let pcm = Self::pcm_payload(audio);
        if pcm.len() < 2 {
            return Err(ClassifierError::Decode("no PCM samples".to_string()));
        }

        let levels = SignalLevels::from_pcm16(pcm);
        let emotion = Emotion::from_amplitude(levels);
        let rec = recommend(emotion.recommendation_mood());
        tracing::debug!(peak = levels.peak, mean = levels.mean, emotion = emotion.label(), "signal classified");

        Ok(JournalAnalysis {
            transcript: format!(
                "Voice entry with peak level {:.0}% and average level {:.0}%",
                levels.peak * 100.0,
                levels.mean * 100.0
            ),
            mood: emotion.label().to_lowercase(),
            suggestions: rec
                .activities
                .iter()
                .map(|activity| Suggestion {
                    kind: SuggestionKind::Activity,
                    title: activity.to_string(),
                    description: rec.message.to_string(),
                })
                .collect(),
        })
    }
}
