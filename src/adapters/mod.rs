//! Concrete implementations of trait abstractions.
//!
//! # Adapters
//!
//! - [`ReqwestHttpClient`] - HTTP client using reqwest
//! - [`FileStore`] - JSON-file key-value storage
//! - [`InMemoryPostRepository`] - Server-side post storage
//! - [`StubClassifier`] / [`SignalClassifier`] - Journal mood classifiers
//! - [`FileAudioDevice`] - Replays a recording file as microphone input
//!
//! The [`mock`] submodule provides test doubles.

pub mod classifiers;
pub mod file_audio;
pub mod file_storage;
pub mod memory_repository;
pub mod mock;
pub mod reqwest_http;

pub use classifiers::{SignalClassifier, StubClassifier};
pub use file_audio::FileAudioDevice;
pub use file_storage::FileStore;
pub use memory_repository::InMemoryPostRepository;
pub use mock::{InMemoryStore, MockAudioDevice, MockHttpClient, MockResponse};
pub use reqwest_http::ReqwestHttpClient;
