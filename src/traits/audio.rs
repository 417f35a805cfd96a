//! Audio input device abstraction.

use async_trait::async_trait;
use bytes::Bytes;

use crate::error::CaptureError;

/// A microphone-like input source.
///
/// `request_access` must succeed before any level or chunk is read.
#[async_trait]
pub trait AudioDevice: Send {
    /// Ask the platform for access to the device.
    async fn request_access(&mut self) -> Result<(), CaptureError>;

    /// Current input level on a 0-255 scale.
    fn input_level(&mut self) -> f32;

    /// Next chunk of encoded audio, `None` once the source is drained.
    fn read_chunk(&mut self) -> Option<Bytes>;

    /// MIME type of the chunks this device produces.
    fn content_type(&self) -> &'static str {
        "audio/wav"
    }

    /// Release the device.
    fn release(&mut self);
}
