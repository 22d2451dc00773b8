//! Review endpoints

use axum::{extract::State, Json};
use axum_extra::extract::WithRejection;

use crate::{
    error::{AppError, AppResult},
    models::review::{CreateReview, Review},
    AppState,
};

use super::CurrentUser;

/// Post a review as the authenticated user
#[utoipa::path(
    post,
    path = "/reviews",
    tag = "reviews",
    security(("bearer_auth" = [])),
    request_body = CreateReview,
    responses(
        (status = 200, description = "Review created", body = Review),
        (status = 400, description = "Invalid input or unknown book"),
        (status = 401, description = "Could not validate credentials")
    )
)]
pub async fn create_review(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    WithRejection(Json(review), _): WithRejection<Json<CreateReview>, AppError>,
) -> AppResult<Json<Review>> {
    let review = state.services.catalog.create_review(review, user.id).await?;
    Ok(Json(review))
}
