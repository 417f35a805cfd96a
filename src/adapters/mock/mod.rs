//! Mock implementations for testing.
//!
//! # Available Mocks
//!
//! - [`MockHttpClient`] - HTTP client answering from URL-prefix routes
//! - [`InMemoryStore`] - In-memory key-value storage
//! - [`MockAudioDevice`] - Scripted microphone input

pub mod audio;
pub mod http;
pub mod storage;

pub use audio::MockAudioDevice;
pub use http::{MockHttpClient, MockResponse};
pub use storage::InMemoryStore;
