//! Journal audio analysis.

use axum::{
    extract::{Multipart, State},
    Json,
};

use crate::models::journal::JournalAnalysis;
use crate::server::{error::ApiError, state::AppState};

/// Multipart field carrying the recording.
pub const AUDIO_FIELD: &str = "audio";

/// Maximum accepted upload size.
pub const MAX_AUDIO_BYTES: usize = 25 * 1024 * 1024;

/// Responds with a flat `JournalAnalysis`, not an envelope.
pub async fn analyze(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<JournalAnalysis>, ApiError> {
    let mut audio = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some(AUDIO_FIELD) {
            audio = Some(field.bytes().await?);
            break;
        }
    }
    let audio = audio.ok_or_else(|| ApiError::BadRequest("No audio file provided".into()))?;

    tracing::info!(
        bytes = audio.len(),
        classifier = state.classifier.name(),
        "analyzing journal audio"
    );
    let analysis = state.classifier.analyze(&audio).await?;
    Ok(Json(analysis))
}
