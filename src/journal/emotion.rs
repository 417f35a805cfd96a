//! Emotion labels derived from recording loudness.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Emotion inferred from how loud a recording is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Emotion {
    Angry,
    Frustrated,
    Worried,
    Anxious,
    Calm,
}

impl Emotion {
    /// Classify a 0-255 input level as sampled during capture.
    pub fn from_level(level: f32) -> Self {
        if level > 130.0 {
            Emotion::Angry
        } else if level > 100.0 {
            Emotion::Frustrated
        } else if level > 70.0 {
            Emotion::Worried
        } else if level > 50.0 {
            Emotion::Anxious
        } else {
            Emotion::Calm
        }
    }

    /// Classify normalized (0.0-1.0) peak and mean amplitude of a whole
    /// recording.
    pub fn from_amplitude(levels: SignalLevels) -> Self {
        if levels.peak > 0.8 {
            Emotion::Angry
        } else if levels.peak > 0.6 {
            Emotion::Frustrated
        } else if levels.peak > 0.4 {
            Emotion::Worried
        } else if levels.mean > 0.2 {
            Emotion::Anxious
        } else {
            Emotion::Calm
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Emotion::Angry => "Angry",
            Emotion::Frustrated => "Frustrated",
            Emotion::Worried => "Worried",
            Emotion::Anxious => "Anxious",
            Emotion::Calm => "Calm",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Emotion::Angry => "😠",
            Emotion::Frustrated => "😤",
            Emotion::Worried => "😟",
            Emotion::Anxious => "😰",
            Emotion::Calm => "😌",
        }
    }

    /// The closest mood in the recommendation table.
    pub fn recommendation_mood(&self) -> &'static str {
        match self {
            Emotion::Angry | Emotion::Frustrated => "angry",
            Emotion::Worried | Emotion::Anxious => "anxious",
            Emotion::Calm => "peaceful",
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.emoji(), self.label())
    }
}

/// Normalized amplitude summary of a recording.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SignalLevels {
    pub peak: f32,
    pub mean: f32,
}

impl SignalLevels {
    /// Summarize little-endian signed 16-bit PCM samples. A trailing odd
    /// byte is ignored.
    pub fn from_pcm16(samples: &[u8]) -> Self {
        let mut peak = 0.0f32;
        let mut sum = 0.0f64;
        let mut count = 0usize;

        for pair in samples.chunks_exact(2) {
            let sample = i16::from_le_bytes([pair[0], pair[1]]);
            let amplitude = (f32::from(sample) / 32768.0).abs();
            peak = peak.max(amplitude);
            sum += f64::from(amplitude);
            count += 1;
        }

        if count == 0 {
            return Self::default();
        }
        Self {
            peak,
            mean: (sum / count as f64) as f32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_thresholds() {
        assert_eq!(Emotion::from_level(131.0), Emotion::Angry);
        assert_eq!(Emotion::from_level(130.0), Emotion::Frustrated);
        assert_eq!(Emotion::from_level(101.0), Emotion::Frustrated);
        assert_eq!(Emotion::from_level(100.0), Emotion::Worried);
        assert_eq!(Emotion::from_level(71.0), Emotion::Worried);
        assert_eq!(Emotion::from_level(51.0), Emotion::Anxious);
        assert_eq!(Emotion::from_level(50.0), Emotion::Calm);
        assert_eq!(Emotion::from_level(0.0), Emotion::Calm);
    }

    #[test]
    fn test_amplitude_thresholds() {
        let at = |peak, mean| Emotion::from_amplitude(SignalLevels { peak, mean });
        assert_eq!(at(0.9, 0.1), Emotion::Angry);
        assert_eq!(at(0.7, 0.1), Emotion::Frustrated);
        assert_eq!(at(0.5, 0.1), Emotion::Worried);
        assert_eq!(at(0.3, 0.25), Emotion::Anxious);
        assert_eq!(at(0.3, 0.1), Emotion::Calm);
    }

    #[test]
    fn test_pcm16_levels() {
        let mut samples = Vec::new();
        for value in [0i16, 16384, -32768, 0] {
            samples.extend_from_slice(&value.to_le_bytes());
        }
        let levels = SignalLevels::from_pcm16(&samples);
        assert!((levels.peak - 1.0).abs() < f32::EPSILON);
        assert!((levels.mean - 0.375).abs() < 1e-6);
    }

    #[test]
    fn test_empty_pcm() {
        assert_eq!(SignalLevels::from_pcm16(&[]), SignalLevels::default());
        assert_eq!(SignalLevels::from_pcm16(&[7]), SignalLevels::default());
    }

    #[test]
    fn test_display() {
        assert_eq!(Emotion::Calm.to_string(), "😌 Calm");
        assert_eq!(serde_json::to_string(&Emotion::Worried).unwrap(), "\"Worried\"");
    }
}
