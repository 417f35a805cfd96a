//! Scripted audio device for testing.

use async_trait::async_trait;
use bytes::Bytes;
use std::collections::VecDeque;

use crate::error::CaptureError;
use crate::traits::AudioDevice;

/// Audio device that replays a fixed list of levels and chunks.
///
/// Once the scripted levels run out the last level is repeated.
#[derive(Debug, Clone, Default)]
pub struct MockAudioDevice {
    levels: VecDeque<f32>,
    last_level: f32,
    chunks: VecDeque<Bytes>,
    deny_access: bool,
    released: bool,
}

impl MockAudioDevice {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_levels(mut self, levels: impl IntoIterator<Item = f32>) -> Self {
        self.levels = levels.into_iter().collect();
        self
    }

    pub fn with_chunks(mut self, chunks: impl IntoIterator<Item = Bytes>) -> Self {
        self.chunks = chunks.into_iter().collect();
        self
    }

    /// Simulate the user refusing microphone permission.
    pub fn denied() -> Self {
        Self {
            deny_access: true,
            ..Self::default()
        }
    }

    pub fn is_released(&self) -> bool {
        self.released
    }
}

#[async_trait]
impl AudioDevice for MockAudioDevice {
    async fn request_access(&mut self) -> Result<(), CaptureError> {
        if self.deny_access {
            return Err(CaptureError::PermissionDenied);
        }
        self.released = false;
        Ok(())
    }

    fn input_level(&mut self) -> f32 {
        if let Some(level) = self.levels.pop_front() {
            self.last_level = level;
        }
        self.last_level
    }

    fn read_chunk(&mut self) -> Option<Bytes> {
        self.chunks.pop_front()
    }

    fn release(&mut self) {
        self.released = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_denied_access() {
        let mut device = MockAudioDevice::denied();
        assert_eq!(
            device.request_access().await,
            Err(CaptureError::PermissionDenied)
        );
    }

    #[test]
    fn test_levels_repeat_last() {
        let mut device = MockAudioDevice::new().with_levels([10.0, 80.0]);
        assert_eq!(device.input_level(), 10.0);
        assert_eq!(device.input_level(), 80.0);
        assert_eq!(device.input_level(), 80.0);
    }
}
