//! Audio device that replays a recording from disk.
//!
//! Stands in for a microphone on platforms without capture support: the
//! file is streamed in fixed-size chunks and the input level follows the
//! loudness of the chunk about to be read.

use async_trait::async_trait;
use bytes::Bytes;
use std::path::PathBuf;

use crate::error::CaptureError;
use crate::journal::SignalLevels;
use crate::traits::AudioDevice;

const CHUNK_SIZE: usize = 4096;
const WAV_HEADER_LEN: usize = 44;

#[derive(Debug)]
pub struct FileAudioDevice {
    path: PathBuf,
    data: Bytes,
    position: usize,
    is_wav: bool,
}

impl FileAudioDevice {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            data: Bytes::new(),
            position: 0,
            is_wav: false,
        }
    }

    /// True once every chunk has been read.
    pub fn is_drained(&self) -> bool {
        self.position >= self.data.len()
    }

    pub(crate) fn content_type_for(path: &std::path::Path) -> &'static str {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("webm") => "audio/webm",
            Some(ext) if ext.eq_ignore_ascii_case("ogg") => "audio/ogg",
            _ => "audio/wav",
        }
    }
}

#[async_trait]
impl AudioDevice for FileAudioDevice {
    async fn request_access(&mut self) -> Result<(), CaptureError> {
        let data = tokio::fs::read(&self.path).await.map_err(|e| match e.kind() {
            std::io::ErrorKind::PermissionDenied => CaptureError::PermissionDenied,
            _ => CaptureError::DeviceUnavailable(format!("{}: {}", self.path.display(), e)),
        })?;
        self.is_wav = data.len() >= WAV_HEADER_LEN && data.starts_with(b"RIFF");
        self.data = Bytes::from(data);
        self.position = 0;
        Ok(())
    }

    fn input_level(&mut self) -> f32 {
        let start = if self.is_wav {
            self.position.max(WAV_HEADER_LEN)
        } else {
            self.position
        };
        if start >= self.data.len() {
            return 0.0;
        }
        let end = (start + CHUNK_SIZE).min(self.data.len());
        SignalLevels::from_pcm16(&self.data[start..end]).peak * 255.0
    }

    fn read_chunk(&mut self) -> Option<Bytes> {
        if self.is_drained() {
            return None;
        }
        let end = (self.position + CHUNK_SIZE).min(self.data.len());
        let chunk = self.data.slice(self.position..end);
        self.position = end;
        Some(chunk)
    }

    fn content_type(&self) -> &'static str {
        Self::content_type_for(&self.path)
    }

    fn release(&mut self) {
        self.data = Bytes::new();
        self.position = 0;
    }
}
