//! Recording lifecycle over an [`AudioDevice`].
//!
//! `start` asks for device access and spawns a sampling task that reads the
//! input level once per display tick, publishes it on a watch channel and
//! collects audio chunks. `stop` (or the source running dry) ends the task;
//! the collected blob and the peak level are returned.

use bytes::{Bytes, BytesMut};
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use super::emotion::Emotion;
use crate::error::CaptureError;
use crate::traits::AudioDevice;

/// One animation frame at 60 Hz.
pub const DEFAULT_TICK: Duration = Duration::from_millis(16);

/// Result of a finished recording.
#[derive(Debug, Clone, PartialEq)]
pub struct CapturedAudio {
    pub audio: Bytes,
    pub content_type: &'static str,
    /// Highest 0-255 input level seen
    pub peak_level: f32,
    pub emotion: Emotion,
}

struct Recorded<D> {
    device: D,
    audio: BytesMut,
    peak: f32,
}

struct Session<D> {
    stop: watch::Sender<bool>,
    level: watch::Receiver<f32>,
    handle: JoinHandle<Recorded<D>>,
}

pub struct AudioCapture<D: AudioDevice + 'static> {
    device: Option<D>,
    session: Option<Session<D>>,
    tick: Duration,
}

impl<D: AudioDevice + 'static> AudioCapture<D> {
    pub fn new(device: D) -> Self {
        Self {
            device: Some(device),
            session: None,
            tick: DEFAULT_TICK,
        }
    }

    /// Override the sampling interval.
    pub fn with_tick(mut self, tick: Duration) -> Self {
        self.tick = tick;
        self
    }

    pub fn is_recording(&self) -> bool {
        self.session.is_some()
    }

    /// True when the sampling task ended because the source ran dry.
    pub fn is_finished(&self) -> bool {
        self.session
            .as_ref()
            .is_some_and(|session| session.handle.is_finished())
    }

    /// Latest sampled input level (0 when idle).
    pub fn level(&self) -> f32 {
        self.session
            .as_ref()
            .map(|session| *session.level.borrow())
            .unwrap_or(0.0)
    }

    /// Subscribe to level updates for a live meter.
    pub fn subscribe_level(&self) -> Option<watch::Receiver<f32>> {
        self.session.as_ref().map(|session| session.level.clone())
    }

    /// Request device access and begin sampling.
    pub async fn start(&mut self) -> Result<(), CaptureError> {
        if self.session.is_some() {
            return Err(CaptureError::AlreadyRecording);
        }
        let mut device = self
            .device
            .take()
            .ok_or_else(|| CaptureError::DeviceUnavailable("device in use".to_string()))?;

        if let Err(err) = device.request_access().await {
            tracing::warn!(error = %err, "microphone access refused");
            self.device = Some(device);
            return Err(err);
        }

        let (stop_tx, stop_rx) = watch::channel(false);
        let (level_tx, level_rx) = watch::channel(0.0f32);
        let handle = tokio::spawn(sample(device, self.tick, stop_rx, level_tx));

        tracing::debug!(tick_ms = self.tick.as_millis() as u64, "recording started");
        self.session = Some(Session {
            stop: stop_tx,
            level: level_rx,
            handle,
        });
        Ok(())
    }

    /// Stop sampling and hand back the recording.
    pub async fn stop(&mut self) -> Result<CapturedAudio, CaptureError> {
        let session = self.session.take().ok_or(CaptureError::NotRecording)?;
        // the task may already have exited on a drained source
        let _ = session.stop.send(true);

        let recorded = session
            .handle
            .await
            .map_err(|e| CaptureError::DeviceUnavailable(format!("capture task failed: {}", e)))?;

        let mut device = recorded.device;
        device.release();
        let content_type = device.content_type();
        self.device = Some(device);

        tracing::debug!(bytes = recorded.audio.len(), peak = recorded.peak, "recording stopped");
        Ok(CapturedAudio {
            audio: recorded.audio.freeze(),
            content_type,
            peak_level: recorded.peak,
            emotion: Emotion::from_level(recorded.peak),
        })
    }
}

async fn sample<D: AudioDevice>(
    mut device: D,
    tick: Duration,
    mut stop: watch::Receiver<bool>,
    level: watch::Sender<f32>,
) -> Recorded<D> {
    let mut interval = tokio::time::interval(tick);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut audio = BytesMut::new();
    let mut peak = 0.0f32;

    loop {
        tokio::select! {
            _ = interval.tick() => {
                let current = device.input_level();
                peak = peak.max(current);
                let _ = level.send(current);
                match device.read_chunk() {
                    Some(chunk) => audio.extend_from_slice(&chunk),
                    None => break,
                }
            }
            changed = stop.changed() => {
                if changed.is_err() || *stop.borrow() {
                    break;
                }
            }
        }
    }

    Recorded {
        device,
        audio,
        peak,
    }
}
