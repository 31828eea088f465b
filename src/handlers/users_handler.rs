use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::{
    extractors::CurrentActor,
    models::{CreateUserInput, UserMutationResponse, UserView},
    AppResult, AppState,
};

/// GET /api/users
#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "List of application users, passwords omitted", body = Vec<UserView>),
        (status = 403, description = "Admin role required")
    ),
    tag = "users"
)]
pub async fn get_users(
    State(state): State<Arc<AppState>>,
    actor: CurrentActor,
) -> AppResult<Json<Vec<UserView>>> {
    let users = state.directory.users_view(&actor.0)?;
    Ok(Json(users))
}

/// POST /api/users
#[utoipa::path(
    post,
    path = "/api/users",
    request_body = CreateUserInput,
    responses(
        (status = 200, description = "User created", body = UserMutationResponse),
        (status = 403, description = "Admin role required"),
        (status = 422, description = "Empty credentials, duplicate username or duplicate supervisor display name")
    ),
    tag = "users"
)]
pub async fn create_user(
    State(state): State<Arc<AppState>>,
    actor: CurrentActor,
    Json(input): Json<CreateUserInput>,
) -> AppResult<Json<UserMutationResponse>> {
    let username = input.username.trim().to_string();
    state.directory.create_user(&actor.0, input).await?;
    Ok(Json(UserMutationResponse {
        success: true,
        message: Some(format!("User '{username}' created")),
    }))
}

/// DELETE /api/users/{username}
#[utoipa::path(
    delete,
    path = "/api/users/{username}",
    params(
        ("username" = String, Path, description = "Username to delete")
    ),
    responses(
        (status = 200, description = "User deleted", body = UserMutationResponse),
        (status = 403, description = "Admin role required"),
        (status = 404, description = "User not found"),
        (status = 409, description = "Employees still linked to this supervisor"),
        (status = 422, description = "Attempted to delete own account")
    ),
    tag = "users"
)]
pub async fn delete_user(
    State(state): State<Arc<AppState>>,
    Path(username): Path<String>,
    actor: CurrentActor,
) -> AppResult<Json<UserMutationResponse>> {
    state.directory.delete_user(&actor.0, &username).await?;
    Ok(Json(UserMutationResponse {
        success: true,
        message: Some(format!("User '{username}' deleted")),
    }))
}
