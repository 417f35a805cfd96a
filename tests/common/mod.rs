//! Common test utilities for integration tests.
//!
//! Fixtures for local storage, session state, a running API server and
//! synthetic audio.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tempfile::TempDir;
use tokio::task::JoinHandle;

use mentalmuse::adapters::FileStore;
use mentalmuse::config::AppConfig;
use mentalmuse::server::{start_server_on, AppState};
use mentalmuse::session::SessionManager;
use mentalmuse::traits::KeyValueStore;

/// A storage file in a fresh temporary directory.
///
/// Keep the `TempDir` alive for as long as the store is used.
pub fn temp_store() -> (TempDir, Arc<FileStore>) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let store = FileStore::open(dir.path()).expect("Failed to open store");
    (dir, Arc::new(store))
}

/// Config pointing the data directory at `dir`.
pub fn test_config(dir: &TempDir) -> AppConfig {
    AppConfig::new().with_data_dir(dir.path())
}

/// Mark onboarding as completed `days_ago` days before now.
pub fn complete_onboarding<S: KeyValueStore>(store: S, days_ago: i64) -> DateTime<Utc> {
    let at = Utc::now() - Duration::days(days_ago);
    SessionManager::new(store)
        .complete_onboarding(&Default::default(), at)
        .expect("Failed to persist onboarding");
    at
}

/// An onboarded, anonymously signed-in store.
pub fn signed_in_store() -> (TempDir, Arc<FileStore>) {
    let (dir, store) = temp_store();
    complete_onboarding(Arc::clone(&store), 0);
    SessionManager::new(Arc::clone(&store))
        .login_anonymous()
        .expect("Failed to sign in");
    (dir, store)
}

/// Start the API server on a random local port. Returns the task handle
/// and the `/api` base URL.
pub async fn start_test_server(config: &AppConfig) -> (JoinHandle<()>, String) {
    let addr: SocketAddr = "127.0.0.1:0".parse().unwrap();
    let (handle, bound) = start_server_on(addr, AppState::from_config(config))
        .await
        .expect("Failed to start server");
    (handle, format!("http://{}/api", bound))
}

/// A mono 16-bit PCM WAV holding a square wave at `amplitude` (0.0-1.0).
pub fn wav_bytes(amplitude: f32, samples: usize) -> Vec<u8> {
    let data_len = (samples * 2) as u32;
    let mut wav = Vec::with_capacity(44 + samples * 2);
    wav.extend_from_slice(b"RIFF");
    wav.extend_from_slice(&(36 + data_len).to_le_bytes());
    wav.extend_from_slice(b"WAVE");
    wav.extend_from_slice(b"fmt ");
    wav.extend_from_slice(&16u32.to_le_bytes());
    wav.extend_from_slice(&1u16.to_le_bytes()); // PCM
    wav.extend_from_slice(&1u16.to_le_bytes()); // mono
    wav.extend_from_slice(&16_000u32.to_le_bytes());
    wav.extend_from_slice(&32_000u32.to_le_bytes());
    wav.extend_from_slice(&2u16.to_le_bytes());
    wav.extend_from_slice(&16u16.to_le_bytes());
    wav.extend_from_slice(b"data");
    wav.extend_from_slice(&data_len.to_le_bytes());

    let peak = (amplitude.clamp(0.0, 1.0) * i16::MAX as f32) as i16;
    for i in 0..samples {
        let sample = if i % 2 == 0 { peak } else { -peak };
        wav.extend_from_slice(&sample.to_le_bytes());
    }
    wav
}
