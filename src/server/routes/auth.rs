//! `/api/auth` handlers.

use axum::{extract::rejection::JsonRejection, extract::State, Json};

use crate::models::wire::{AuthPayload, CredentialsRequest, Envelope, UserDescriptor};
use crate::server::{error::ApiError, state::AppState};
use crate::session::anonymous_id;

type AuthResponse = Result<Json<Envelope<AuthPayload>>, ApiError>;

/// Credentials with surrounding whitespace removed, or `None` when either
/// field is missing or blank.
fn credentials(payload: Result<Json<CredentialsRequest>, JsonRejection>) -> Option<CredentialsRequest> {
    let Json(mut request) = payload.ok()?;
    request.email = request.email.trim().to_string();
    if request.email.is_empty() || request.password.is_empty() {
        return None;
    }
    Some(request)
}

pub async fn anonymous(State(state): State<AppState>) -> AuthResponse {
    let id = anonymous_id();
    let token = state.tokens.issue_anonymous(&id)?;
    tracing::info!(user_id = %id, "anonymous session issued");

    Ok(Json(Envelope::ok(AuthPayload {
        token,
        user: UserDescriptor {
            id: Some(id),
            is_anonymous: true,
            ..Default::default()
        },
    })))
}

pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<CredentialsRequest>, JsonRejection>,
) -> AuthResponse {
    let request =
        credentials(payload).ok_or_else(|| ApiError::Unauthorized("Invalid credentials".into()))?;
    let token = state.tokens.issue_for_email(&request.email)?;
    tracing::info!(email = %request.email, "email session issued");

    Ok(Json(Envelope::ok(AuthPayload {
        token,
        user: UserDescriptor {
            email: Some(request.email),
            ..Default::default()
        },
    })))
}

pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<CredentialsRequest>, JsonRejection>,
) -> AuthResponse {
    let request =
        credentials(payload).ok_or_else(|| ApiError::BadRequest("Registration failed".into()))?;
    let token = state.tokens.issue_for_email(&request.email)?;
    tracing::info!(email = %request.email, "account registered");

    let nickname = request
        .nickname
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty());
    Ok(Json(Envelope::ok(AuthPayload {
        token,
        user: UserDescriptor {
            email: Some(request.email),
            nickname,
            ..Default::default()
        },
    })))
}
