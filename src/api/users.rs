//! User management endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use axum_extra::extract::WithRejection;

use crate::{
    error::{AppError, AppResult},
    AppState,
};

use super::MessageResponse;

/// Delete a user and their reviews
#[utoipa::path(
    delete,
    path = "/users/{username}",
    tag = "users",
    params(("username" = String, Path, description = "Username")),
    responses(
        (status = 200, description = "User deleted", body = MessageResponse),
        (status = 404, description = "User not found")
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    WithRejection(Path(username), _): WithRejection<Path<String>, AppError>,
) -> AppResult<Json<MessageResponse>> {
    let deleted = state.services.catalog.delete_user(&username).await?;
    Ok(Json(MessageResponse {
        message: format!("User {} deleted successfully.", deleted.username),
    }))
}
