//! MentalMuse - a wellness companion: onboarding, mood journaling, community
//! posting, mindful quests and the API server behind them.
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod cli;
pub mod client;
pub mod community;
pub mod config;
pub mod error;
pub mod journal;
pub mod logging;
pub mod models;
pub mod progression;
pub mod recommend;
pub mod server;
pub mod session;
pub mod storage;
pub mod traits;
