//! Shared handler state.

use std::sync::Arc;

use crate::adapters::{InMemoryPostRepository, SignalClassifier, StubClassifier};
use crate::config::{AppConfig, ClassifierKind};
use crate::traits::{MoodClassifier, PostRepository};

use super::token::TokenIssuer;

#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
    pub classifier: Arc<dyn MoodClassifier>,
    pub tokens: Arc<TokenIssuer>,
}

impl AppState {
    pub fn new(
        posts: Arc<dyn PostRepository>,
        classifier: Arc<dyn MoodClassifier>,
        tokens: TokenIssuer,
    ) -> Self {
        Self {
            posts,
            classifier,
            tokens: Arc::new(tokens),
        }
    }

    /// In-memory repository plus the configured classifier.
    pub fn from_config(config: &AppConfig) -> Self {
        let classifier: Arc<dyn MoodClassifier> = match config.classifier {
            ClassifierKind::Stub => Arc::new(StubClassifier),
            ClassifierKind::Signal => Arc::new(SignalClassifier),
        };
        if config.uses_dev_secret() {
            tracing::warn!("MUSE_JWT_SECRET not set, signing tokens with the development secret");
        }
        Self::new(
            Arc::new(InMemoryPostRepository::new()),
            classifier,
            TokenIssuer::new(config.jwt_secret.clone()),
        )
    }
}
