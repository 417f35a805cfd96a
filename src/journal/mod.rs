//! Mood journaling: emotion detection, recording capture and the
//! persisted mood and vent logs.

pub mod capture;
pub mod emotion;
pub mod logs;

pub use capture::{AudioCapture, CapturedAudio, DEFAULT_TICK};
pub use emotion::{Emotion, SignalLevels};
pub use logs::{MoodLog, VentLog};
