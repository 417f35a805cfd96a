//! Client side of the API boundary.

pub mod api;

pub use api::{ApiClient, DEFAULT_API_URL};
