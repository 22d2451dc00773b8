//! Author endpoints

use axum::{extract::State, Json};
use axum_extra::extract::WithRejection;

use crate::{
    error::{AppError, AppResult},
    models::author::{Author, CreateAuthor},
    AppState,
};

/// List all authors
#[utoipa::path(
    get,
    path = "/authors",
    tag = "authors",
    responses(
        (status = 200, description = "Author list", body = Vec<Author>)
    )
)]
pub async fn list_authors(State(state): State<AppState>) -> AppResult<Json<Vec<Author>>> {
    let authors = state.services.catalog.list_authors().await?;
    Ok(Json(authors))
}

/// Create an author
#[utoipa::path(
    post,
    path = "/authors",
    tag = "authors",
    request_body = CreateAuthor,
    responses(
        (status = 200, description = "Author created", body = Author),
        (status = 400, description = "Invalid input")
    )
)]
pub async fn create_author(
    State(state): State<AppState>,
    WithRejection(Json(author), _): WithRejection<Json<CreateAuthor>, AppError>,
) -> AppResult<Json<Author>> {
    let author = state.services.catalog.create_author(author).await?;
    Ok(Json(author))
}
