//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`HttpClient`] - Sends [`HttpRequest`]s (JSON or multipart bodies)
//! - [`KeyValueStore`] - Durable key-value storage for local app state
//! - [`PostRepository`] - Server-side storage for community posts
//! - [`MoodClassifier`] - Journal audio analysis
//! - [`AudioDevice`] - Microphone input

pub mod audio;
pub mod classifier;
pub mod http;
pub mod repository;
pub mod storage;

pub use audio::AudioDevice;
pub use classifier::{ClassifierError, MoodClassifier};
pub use http::{FilePart, Headers, HttpClient, HttpError, HttpRequest, HttpResponse, Method, RequestBody};
pub use repository::{PostRepository, RepositoryError};
pub use storage::KeyValueStore;
