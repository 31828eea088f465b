use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use crate::{extractors::CurrentActor, models::Session, AppResult, AppState};

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LogoutResponse {
    pub success: bool,
}

/// POST /api/auth/login
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Logged in, session established", body = Session),
        (status = 401, description = "Incorrect username or password")
    ),
    tag = "auth"
)]
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<Json<Session>> {
    let session = state
        .directory
        .login(&payload.username, &payload.password)
        .await?;
    Ok(Json(session))
}

/// POST /api/auth/logout
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    responses(
        (status = 200, description = "Session cleared", body = LogoutResponse)
    ),
    tag = "auth"
)]
pub async fn logout(State(state): State<Arc<AppState>>) -> AppResult<Json<LogoutResponse>> {
    state.directory.logout().await?;
    Ok(Json(LogoutResponse { success: true }))
}

/// GET /api/auth/me
#[utoipa::path(
    get,
    path = "/api/auth/me",
    responses(
        (status = 200, description = "Current session", body = Session),
        (status = 401, description = "Not logged in")
    ),
    tag = "auth"
)]
pub async fn get_me(actor: CurrentActor) -> Json<Session> {
    Json(actor.0)
}
